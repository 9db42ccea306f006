mod common;
use common::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use workshop_core::commands::{CommandError, CommandNode, CommandTree, RuntimeError};
use workshop_core::text::Emphasis;

#[test]
fn empty_arguments_run_the_root() {
    let root_spy = Spy::new();
    let reload_spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root")
            .executes(root_spy.executor())
            .then(CommandNode::literal("reload", "Reload").executes(reload_spy.executor())),
    )
    .unwrap();

    let mut sender = console();
    assert!(tree.dispatch(&mut sender, "workshop", &[] as &[&str]));
    assert_eq!(root_spy.calls(), vec![("workshop".to_string(), vec![])]);
    assert_eq!(reload_spy.call_count(), 0);

    assert!(tree.dispatch(&mut sender, "workshop", &["reload"]));
    assert_eq!(reload_spy.calls(), vec![("reload".to_string(), vec![])]);
    assert_eq!(root_spy.call_count(), 1);
}

#[test]
fn aliases_match_case_insensitively_and_label_is_primary() {
    let spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").then(
            CommandNode::literal("banitem", "Ban items")
                .alias("bi")
                .executes(spy.executor()),
        ),
    )
    .unwrap();

    let mut sender = console();
    assert!(tree.dispatch(&mut sender, "ws", &["BI", "tnt"]));
    assert_eq!(
        spy.calls(),
        vec![("banitem".to_string(), vec!["tnt".to_string()])]
    );
}

#[test]
fn quoted_arguments_are_merged_at_the_root() {
    let spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root")
            .then(CommandNode::literal("say", "Say something").executes(spy.executor())),
    )
    .unwrap();

    let mut sender = console();
    assert!(tree.dispatch(&mut sender, "workshop", &["say", "\"hello", "world\""]));
    assert_eq!(
        spy.calls(),
        vec![("say".to_string(), vec!["hello world".to_string()])]
    );
}

#[test]
fn quoted_child_name_still_routes() {
    let spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root")
            .then(CommandNode::literal("say", "Say something").executes(spy.executor())),
    )
    .unwrap();

    let mut sender = console();
    assert!(tree.dispatch(&mut sender, "workshop", &["\"say\"", "hi"]));
    assert_eq!(spy.call_count(), 1);
}

#[test]
fn overlong_argument_stops_everything() {
    let root_spy = Spy::new();
    let child_spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root")
            .executes(root_spy.executor())
            .then(CommandNode::literal("say", "Say something").executes(child_spy.executor())),
    )
    .unwrap();

    let mut sender = console();
    let long = "a".repeat(21);
    assert!(!tree.dispatch(&mut sender, "workshop", &["say", long.as_str()]));
    assert_eq!(root_spy.call_count(), 0);
    assert_eq!(child_spy.call_count(), 0);
    assert_eq!(
        texts(sender.messages()),
        vec!["Arguments cannot exceed 20 characters!"]
    );
    assert!(sender.messages()[0].is_error());
}

#[test]
fn length_is_checked_before_permission() {
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").require_permission(STAFF),
    )
    .unwrap();

    let mut sender = guest();
    let long = "b".repeat(25);
    assert!(!tree.dispatch(&mut sender, "workshop", &[long]));
    assert_eq!(
        texts(sender.messages()),
        vec!["Arguments cannot exceed 20 characters!"]
    );
}

#[test]
fn length_is_only_checked_after_merging_quotes() {
    let spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").executes(spy.executor()),
    )
    .unwrap();

    let mut sender = console();
    // 23 characters once merged
    assert!(!tree.dispatch(&mut sender, "workshop", &["\"aaaaaaaaaaa", "aaaaaaaaaaa\""]));
    assert_eq!(spy.call_count(), 0);

    assert!(tree.dispatch(&mut sender, "workshop", &["\"aaaa", "aaaa\""]));
    assert_eq!(spy.calls()[0].1, vec!["aaaa aaaa".to_string()]);
}

#[test]
fn missing_permission_blocks_node_and_descendants() {
    let spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").then(
            CommandNode::literal("class", "Classes")
                .require_permission(STAFF)
                .executes(spy.executor())
                .then(CommandNode::literal("edit", "Edit a class").executes(spy.executor())),
        ),
    )
    .unwrap();

    let mut sender = guest();
    assert!(!tree.dispatch(&mut sender, "workshop", &["class"]));
    assert!(!tree.dispatch(&mut sender, "workshop", &["class", "edit"]));
    assert!(!tree.dispatch(&mut sender, "workshop", &["class", "edit", "anything"]));
    assert_eq!(spy.call_count(), 0);
    assert!(
        texts(sender.messages())
            .iter()
            .all(|text| text == "You don't have permission to do this!")
    );

    let mut sender = staff();
    assert!(tree.dispatch(&mut sender, "workshop", &["class", "edit"]));
    assert_eq!(spy.call_count(), 1);
}

#[test]
fn disabled_node_short_circuits() {
    let enabled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&enabled);
    let spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").then(
            CommandNode::literal("banitem", "Ban items")
                .enabled_when(move || flag.load(Ordering::SeqCst))
                .executes(spy.executor())
                .then(CommandNode::literal("list", "List").executes(spy.executor())),
        ),
    )
    .unwrap();

    let mut sender = console();
    assert!(!tree.dispatch(&mut sender, "workshop", &["banitem", "list"]));
    assert_eq!(texts(sender.messages()), vec!["This command is not enabled"]);
    assert_eq!(spy.call_count(), 0);
    assert!(tree.complete(&sender, &["banitem", ""]).is_empty());

    enabled.store(true, Ordering::SeqCst);
    assert!(tree.dispatch(&mut sender, "workshop", &["banitem", "list"]));
    assert_eq!(spy.call_count(), 1);
    assert_eq!(tree.complete(&sender, &["banitem", "l"]), vec!["list"]);
}

#[test]
fn disabled_check_precedes_length_check() {
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").enabled_when(|| false),
    )
    .unwrap();

    let mut sender = console();
    let long = "c".repeat(30);
    assert!(!tree.dispatch(&mut sender, "workshop", &[long]));
    assert_eq!(texts(sender.messages()), vec!["This command is not enabled"]);
}

#[test]
fn unmatched_argument_falls_through_to_the_node() {
    let root_spy = Spy::new();
    let child_spy = Spy::new();
    let tree = CommandTree::new(
        CommandNode::literal("nick", "Nicknames")
            .executes(root_spy.executor())
            .then(CommandNode::literal("clear", "Clear").executes(child_spy.executor())),
    )
    .unwrap();

    let mut sender = console();
    assert!(tree.dispatch(&mut sender, "nick", &["alice", "Ally"]));
    assert_eq!(
        root_spy.calls(),
        vec![(
            "nick".to_string(),
            vec!["alice".to_string(), "Ally".to_string()]
        )]
    );
    assert_eq!(child_spy.call_count(), 0);
}

#[test]
fn grouping_node_reports_too_few_arguments() {
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").then(
            CommandNode::literal("class", "Classes")
                .then(CommandNode::literal("edit", "Edit a class")),
        ),
    )
    .unwrap();

    let mut sender = console();
    assert!(!tree.dispatch(&mut sender, "workshop", &["class", "edit"]));
    assert_eq!(
        texts(sender.messages()),
        vec!["Too few arguments!", "Try: /workshop class edit help"]
    );
    assert!(sender.messages().iter().all(|m| m.emphasis == Emphasis::Error));
}

#[test]
fn handler_errors_are_reported_with_a_hint() {
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").then(
            CommandNode::literal("banitem", "Ban items")
                .executes(|_| Err(CommandError::runtime("That item doesn't exist!"))),
        ),
    )
    .unwrap();

    let mut sender = console();
    assert!(!tree.dispatch(&mut sender, "workshop", &["banitem", "stone"]));
    assert_eq!(
        texts(sender.messages()),
        vec!["That item doesn't exist!", "Try: /workshop banitem help"]
    );
}

#[test]
fn internal_errors_are_not_shown_verbatim() {
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root")
            .executes(|_| Err(CommandError::internal("state table missing"))),
    )
    .unwrap();

    let mut sender = console();
    assert!(!tree.dispatch(&mut sender, "workshop", &[] as &[&str]));
    assert_eq!(
        texts(sender.messages()),
        vec!["An internal error occurred. Check the console for more information."]
    );
}

#[test]
fn handler_can_read_its_position() {
    let tree = CommandTree::new(
        CommandNode::literal("workshop", "Workshop root").then(
            CommandNode::literal("class", "Classes").then(
                CommandNode::literal("edit", "Edit").executes(|ctx| {
                    assert!(!ctx.is_root());
                    assert_eq!(ctx.full_command(), "workshop class edit");
                    assert_eq!(ctx.parent_command().as_deref(), Some("workshop class"));
                    assert_eq!(ctx.parent().map(|p| p.primary_alias()), Some("class"));
                    assert_eq!(ctx.arg(0)?, "math");
                    assert!(matches!(
                        ctx.arg(1),
                        Err(CommandError::Runtime(RuntimeError::TooFewArguments))
                    ));
                    Ok(())
                }),
            ),
        ),
    )
    .unwrap();

    let mut sender = console();
    assert!(tree.dispatch(&mut sender, "workshop", &["class", "edit", "math"]));
}
