use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;
use workshop_core::commands::{self, BufferedSender, CommandRegistry, CommandSender, WORKSHOP};
use workshop_core::state::WorkshopState;
use workshop_text::{Emphasis, Message};

/// Runs Workshop commands typed on standard input.
#[derive(Parser, Debug)]
#[command(name = "workshop", version, about, long_about = None)]
struct Cli {
    /// Configuration file, created with defaults if missing
    #[arg(short, long, default_value = "Config.toml")]
    config: PathBuf,

    /// Name of the sender whose permissions apply
    #[arg(short, long, default_value = "console")]
    sender: String,

    /// Print every output line as a JSON object
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let logfile = tracing_appender::rolling::daily("./logs", "workshop.log");
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("WORKSHOP_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(logfile.and(io::stderr))
        .with_env_filter(env_filter)
        .init();

    let state = Arc::new(WorkshopState::load(&cli.config)?);
    let mut registry = CommandRegistry::new();
    registry.declare(WORKSHOP, &["ws"]);
    commands::register_commands(&mut registry, &state)?;

    let mut sender = BufferedSender::new(&cli.sender, state.permissions_for(&cli.sender));
    info!("Reading commands as {}", cli.sender);

    let mut out = anstream::stdout();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim_start();
        if line.is_empty() {
            continue;
        }

        // Permissions may change with every reload
        sender.set_permissions(state.permissions_for(&cli.sender));

        let messages = match line.strip_prefix('?') {
            Some(rest) => complete(&registry, &sender, rest),
            None => {
                dispatch(&registry, &mut sender, line);
                sender.take_messages()
            }
        };
        for message in &messages {
            render(&mut out, message, cli.json)?;
        }
        out.flush()?;
    }
    Ok(())
}

fn dispatch(registry: &CommandRegistry, sender: &mut BufferedSender, line: &str) {
    let tokens = commands::split_line(line.strip_prefix('/').unwrap_or(line));
    let Some((label, args)) = tokens.split_first() else {
        return;
    };
    if registry.tree(label).is_none() {
        sender.send_message(Message::error(format!("Unknown command: /{label}")));
        return;
    }
    let success = registry.dispatch(sender, label, args);
    debug!("/{} finished, success: {}", line, success);
}

fn complete(registry: &CommandRegistry, sender: &BufferedSender, line: &str) -> Vec<Message> {
    let tokens = commands::split_line(line.strip_prefix('/').unwrap_or(line));
    let candidates = match tokens.split_first() {
        Some((label, [])) => registry
            .labels()
            .filter(|candidate| candidate.starts_with(label.as_str()))
            .map(str::to_string)
            .collect(),
        Some((label, args)) => registry.complete(sender, label, args),
        None => Vec::new(),
    };
    if candidates.is_empty() {
        return Vec::new();
    }
    vec![Message::accent(candidates.join(" "))]
}

fn render(out: &mut impl Write, message: &Message, json: bool) -> io::Result<()> {
    if json {
        return writeln!(out, "{}", message.encode_json());
    }
    match message.emphasis {
        Emphasis::Success => writeln!(out, "{}", message.text.green()),
        Emphasis::Error => writeln!(out, "{}", message.text.red()),
        Emphasis::Accent => writeln!(out, "{}", message.text.cyan()),
    }
}
