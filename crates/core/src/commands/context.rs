use crate::commands::{
    error::{CommandResult, RuntimeError},
    node::CommandNode,
    sender::CommandSender,
};
use itertools::Itertools;
use workshop_text::Message;

/// Everything an executor gets to see about the invocation that reached it.
pub struct ExecutionContext<'a> {
    sender: &'a mut dyn CommandSender,
    label: &'a str,
    args: &'a [String],
    path: &'a [&'a CommandNode],
}

impl<'a> ExecutionContext<'a> {
    pub(super) fn new(
        sender: &'a mut dyn CommandSender,
        label: &'a str,
        args: &'a [String],
        path: &'a [&'a CommandNode],
    ) -> Self {
        Self {
            sender,
            label,
            args,
            path,
        }
    }

    /// Arguments left over after routing, already unquoted.
    pub fn args(&self) -> &[String] {
        self.args
    }

    pub fn arg(&self, index: usize) -> CommandResult<&str> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| RuntimeError::TooFewArguments.into())
    }

    /// The alias the node was invoked through; the primary alias below the root.
    pub fn label(&self) -> &str {
        self.label
    }

    pub fn sender(&self) -> &dyn CommandSender {
        &*self.sender
    }

    pub fn sender_name(&self) -> &str {
        self.sender.name()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.sender.has_permission(permission)
    }

    pub fn node(&self) -> &'a CommandNode {
        self.path[self.path.len() - 1]
    }

    pub fn parent(&self) -> Option<&'a CommandNode> {
        self.path.len().checked_sub(2).map(|index| self.path[index])
    }

    pub fn is_root(&self) -> bool {
        self.path.len() == 1
    }

    /// Primary aliases from the root down to the running node.
    pub fn full_command(&self) -> String {
        join_path(self.path)
    }

    pub fn parent_command(&self) -> Option<String> {
        let end = self.path.len().checked_sub(1).filter(|&end| end > 0)?;
        Some(join_path(&self.path[..end]))
    }

    pub fn send(&mut self, message: Message) {
        self.sender.send_message(message);
    }

    pub fn reply(&mut self, message: &str) {
        self.send(Message::success(message));
    }

    pub fn accent(&mut self, message: &str) {
        self.send(Message::accent(message));
    }

    pub fn error(&mut self, message: &str) {
        self.send(Message::error(message));
    }

    /// Reports a failure together with a pointer to this node's help.
    pub fn send_command_error(&mut self, message: &str) {
        let hint = format!("Try: /{} help", self.full_command());
        self.error(message);
        self.error(&hint);
    }
}

fn join_path(path: &[&CommandNode]) -> String {
    path.iter().map(|node| node.primary_alias()).join(" ")
}
