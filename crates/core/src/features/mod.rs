pub mod banitem;
pub mod nickname;

use std::sync::atomic::{AtomicBool, Ordering};

/// A boolean setting that can gate a command node.
#[derive(Debug)]
pub struct Setting {
    name: &'static str,
    value: AtomicBool,
}

impl Setting {
    pub fn new(name: &'static str, value: bool) -> Setting {
        Setting {
            name,
            value: AtomicBool::new(value),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }

    pub fn set(&self, value: bool) {
        self.value.store(value, Ordering::Release);
    }

    /// Returns false if the setting was already on.
    pub fn enable(&self) -> bool {
        !self.value.swap(true, Ordering::AcqRel)
    }

    /// Returns false if the setting was already off.
    pub fn disable(&self) -> bool {
        self.value.swap(false, Ordering::AcqRel)
    }
}
