use crate::commands::{
    context::ExecutionContext,
    error::{CommandResult, InternalError},
    node::CommandNode,
    sender::CommandSender,
};
use workshop_text::Message;

const MORE_MARKER: &str = " [ . . . ]";

/// The `help` child the tree builder attaches to every node that wants one.
pub(super) fn help_node() -> CommandNode {
    CommandNode::literal("help", "Get help for this command")
        .alias("?")
        .executes(exec_help)
        .mark_help()
}

fn exec_help(ctx: &mut ExecutionContext<'_>) -> CommandResult<()> {
    let (Some(parent), Some(full_command)) = (ctx.parent(), ctx.parent_command()) else {
        return Err(InternalError::OrphanHelpNode {
            alias: ctx.node().primary_alias().to_string(),
        }
        .into());
    };
    let lines = help_lines(parent, &full_command, ctx.sender());
    for line in lines {
        ctx.send(line);
    }
    Ok(())
}

/// Describes `node` to `sender`: its visible children in registration order,
/// then its visible parameters.
pub fn help_lines(
    node: &CommandNode,
    full_command: &str,
    sender: &dyn CommandSender,
) -> Vec<Message> {
    let mut lines = vec![Message::success(format!("Command: /{full_command}"))];
    let alias = node.primary_alias();

    for child in node.children() {
        if !child.is_permitted(sender) {
            continue;
        }
        let marker = if has_more(child) { MORE_MARKER } else { "" };
        lines.push(Message::accent(format!(
            "{alias} {}{marker} — {}",
            child.primary_alias(),
            child.description()
        )));
    }

    for (parameter, description) in node.described_parameters() {
        if let Some(usage) = parameter.full_usage(sender) {
            lines.push(Message::accent(format!("{alias} {usage} — {description}")));
        }
    }

    lines
}

/// Whether a child leads anywhere beyond its own help.
fn has_more(node: &CommandNode) -> bool {
    node.children().iter().any(|child| !child.is_help()) || node.parameters().next().is_some()
}
