#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use workshop_core::commands::{BufferedSender, CommandResult, ExecutionContext};
use workshop_core::permissions::PermissionSet;
use workshop_core::text::Message;

pub const STAFF: &str = "workshop.staff";

/// Records every invocation of the executors it hands out.
#[derive(Clone, Default)]
pub struct Spy {
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl Spy {
    pub fn new() -> Spy {
        Spy::default()
    }

    pub fn executor(
        &self,
    ) -> impl Fn(&mut ExecutionContext<'_>) -> CommandResult<()> + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |ctx| {
            calls
                .lock()
                .unwrap()
                .push((ctx.label().to_string(), ctx.args().to_vec()));
            Ok(())
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub fn console() -> BufferedSender {
    BufferedSender::console()
}

pub fn guest() -> BufferedSender {
    BufferedSender::new("guest", PermissionSet::none())
}

pub fn staff() -> BufferedSender {
    BufferedSender::new("instructor", PermissionSet::from_patterns([STAFF]))
}

pub fn texts(messages: &[Message]) -> Vec<String> {
    messages.iter().map(|message| message.text.clone()).collect()
}

pub fn render(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|message| format!("{:?} {}\n", message.emphasis, message.text))
        .collect()
}
