mod common;
use common::*;

use expect_test::expect;
use workshop_core::commands::{suppliers, CommandNode, CommandTree, Parameter};

fn tree() -> CommandTree {
    let spy = Spy::new();
    CommandTree::new(
        CommandNode::literal("workshop", "Workshop root")
            .executes(spy.executor())
            .then(CommandNode::literal("reload", "Reload all data").executes(spy.executor()))
            .then(
                CommandNode::literal("banitem", "Ban certain items")
                    .require_permission(STAFF)
                    .parameter(
                        Parameter::new(suppliers::fixed("<item>", ["tnt", "bow"])),
                        "Ban an item",
                    )
                    .executes(spy.executor())
                    .then(CommandNode::literal("list", "List all banned items")),
            )
            .then(
                CommandNode::literal("class", "Manage classes")
                    .then(CommandNode::literal("create", "Create a class").without_help()),
            )
            .parameter(
                Parameter::new(suppliers::fixed("<player>", ["alice"])).require_permission(STAFF),
                "Show a player's data",
            )
            .parameter(Parameter::new(suppliers::none()), "Never shown"),
    )
    .unwrap()
}

#[test]
fn help_lists_children_then_parameters() {
    let mut sender = console();
    assert!(tree().dispatch(&mut sender, "workshop", &["help"]));
    expect![[r#"
        Success Command: /workshop
        Accent workshop reload — Reload all data
        Accent workshop banitem [ . . . ] — Ban certain items
        Accent workshop class [ . . . ] — Manage classes
        Accent workshop help — Get help for this command
        Accent workshop <player> — Show a player's data
    "#]]
    .assert_eq(&render(sender.messages()));
}

#[test]
fn help_hides_what_the_sender_can_not_use() {
    let mut sender = guest();
    assert!(tree().dispatch(&mut sender, "workshop", &["?"]));
    expect![[r#"
        Success Command: /workshop
        Accent workshop reload — Reload all data
        Accent workshop class [ . . . ] — Manage classes
        Accent workshop help — Get help for this command
    "#]]
    .assert_eq(&render(sender.messages()));
}

#[test]
fn nested_help_reports_on_its_owner() {
    let mut sender = staff();
    assert!(tree().dispatch(&mut sender, "workshop", &["banitem", "help"]));
    expect![[r#"
        Success Command: /workshop banitem
        Accent banitem list — List all banned items
        Accent banitem help — Get help for this command
        Accent banitem <item> — Ban an item
    "#]]
    .assert_eq(&render(sender.messages()));
}

#[test]
fn help_is_attached_last_unless_suppressed() {
    let tree = tree();
    let root = tree.root();
    let last = root.children().last().unwrap();
    assert!(last.is_help());
    assert_eq!(last.aliases(), ["help", "?"]);
    assert!(last.children().is_empty());

    let create = tree.find(&["class", "create"]).unwrap();
    assert!(create.children().is_empty());
    let list = tree.find(&["banitem", "list"]).unwrap();
    assert_eq!(list.children().len(), 1);
}

#[test]
fn help_ignores_trailing_arguments() {
    let mut sender = console();
    assert!(tree().dispatch(&mut sender, "workshop", &["class", "help", "extra"]));
    assert_eq!(
        texts(sender.messages()),
        vec![
            "Command: /workshop class",
            "class create — Create a class",
            "class help — Get help for this command",
        ]
    );
}
