use crate::commands::error::RuntimeError;

/// Longest argument a root dispatch accepts, counted in characters.
pub const ARG_MAX_LENGTH: usize = 20;

const QUOTE: char = '"';

/// Merges runs of arguments wrapped in a pair of double quotes into a single
/// argument with the quotes removed.
///
/// `["say", "\"hello", "world\""]` becomes `["say", "hello world"]`. A quote
/// that is never closed is left alone: the arguments it would have opened are
/// passed through verbatim.
pub fn combine_quoted_arguments<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut combined = Vec::with_capacity(args.len());
    let mut quoted: Vec<&str> = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if quoted.is_empty() {
            if !arg.starts_with(QUOTE) {
                combined.push(arg.to_string());
                continue;
            }
            if arg.len() > 1 && arg.ends_with(QUOTE) {
                combined.push(arg[1..arg.len() - 1].to_string());
                continue;
            }
            quoted.push(arg);
        } else {
            quoted.push(arg);
            if arg.ends_with(QUOTE) {
                let joined = quoted.join(" ");
                combined.push(joined[1..joined.len() - 1].to_string());
                quoted.clear();
            }
        }
    }

    // Unterminated quote
    combined.extend(quoted.into_iter().map(str::to_string));
    combined
}

/// Rejects the whole argument list if any single argument is too long.
pub fn check_argument_lengths(args: &[String]) -> Result<(), RuntimeError> {
    if args.iter().any(|arg| arg.chars().count() > ARG_MAX_LENGTH) {
        return Err(RuntimeError::ArgumentTooLong {
            max: ARG_MAX_LENGTH,
        });
    }
    Ok(())
}

/// Splits a raw line on whitespace the way hosts hand arguments over.
///
/// A trailing space yields a trailing empty argument so completion knows the
/// user has started a new word.
pub fn split_line(line: &str) -> Vec<String> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let mut args: Vec<String> = trimmed.split_whitespace().map(str::to_string).collect();
    if trimmed.ends_with(char::is_whitespace) {
        args.push(String::new());
    }
    args
}
