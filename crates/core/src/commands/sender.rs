use crate::permissions::{self, PermissionSet};
use workshop_text::Message;

/// Whoever typed the command line.
///
/// `has_permission` is the only capability check the engine performs; how a
/// host resolves permissions is up to the implementation.
pub trait CommandSender {
    fn name(&self) -> &str;

    fn has_permission(&self, permission: &str) -> bool;

    fn send_message(&mut self, message: Message);
}

/// A sender that keeps its output until the host collects it.
#[derive(Debug, Clone)]
pub struct BufferedSender {
    name: String,
    permissions: PermissionSet,
    messages: Vec<Message>,
}

impl BufferedSender {
    pub fn new(name: impl Into<String>, permissions: PermissionSet) -> BufferedSender {
        BufferedSender {
            name: name.into(),
            permissions,
            messages: Vec::new(),
        }
    }

    pub fn console() -> BufferedSender {
        BufferedSender::new(permissions::CONSOLE, PermissionSet::all())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    pub fn set_permissions(&mut self, permissions: PermissionSet) {
        self.permissions = permissions;
    }
}

impl CommandSender for BufferedSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.has(permission)
    }

    fn send_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
