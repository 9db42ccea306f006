use crate::commands::sender::CommandSender;
use std::fmt;
use std::sync::Arc;

pub type AllowedEntries = Arc<dyn Fn(&[String]) -> Vec<String> + Send + Sync>;

/// Describes the values one trailing argument slot may take.
#[derive(Clone)]
pub struct ParameterSupplier {
    usage: String,
    strict: bool,
    allowed_entries: AllowedEntries,
}

pub struct ParameterSupplierBuilder {
    usage: String,
    strict: bool,
    allowed_entries: Option<AllowedEntries>,
}

impl ParameterSupplier {
    pub fn builder() -> ParameterSupplierBuilder {
        ParameterSupplierBuilder {
            usage: String::new(),
            strict: true,
            allowed_entries: None,
        }
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn allowed_entries(&self, prior: &[String]) -> Vec<String> {
        (self.allowed_entries)(prior)
    }
}

impl ParameterSupplierBuilder {
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Strict suppliers list every legal value. Defaults to `true`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn allowed_entries<F>(mut self, entries: F) -> Self
    where
        F: Fn(&[String]) -> Vec<String> + Send + Sync + 'static,
    {
        self.allowed_entries = Some(Arc::new(entries));
        self
    }

    pub fn build(self) -> ParameterSupplier {
        ParameterSupplier {
            usage: self.usage,
            strict: self.strict,
            allowed_entries: self
                .allowed_entries
                .unwrap_or_else(|| Arc::new(|_: &[String]| Vec::new())),
        }
    }
}

impl fmt::Debug for ParameterSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSupplier")
            .field("usage", &self.usage)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

/// An optional trailing argument of a command node.
#[derive(Clone, Debug)]
pub struct Parameter {
    supplier: ParameterSupplier,
    permission: Option<String>,
}

impl Parameter {
    pub fn new(supplier: ParameterSupplier) -> Parameter {
        Parameter {
            supplier,
            permission: None,
        }
    }

    pub fn require_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn supplier(&self) -> &ParameterSupplier {
        &self.supplier
    }

    pub fn is_strict(&self) -> bool {
        self.supplier.strict
    }

    pub fn is_permitted(&self, sender: &dyn CommandSender) -> bool {
        self.permission
            .as_deref()
            .is_none_or(|permission| sender.has_permission(permission))
    }

    /// Suggestions for the argument following `prior`, empty without permission.
    pub fn next_allowed_inputs(&self, sender: &dyn CommandSender, prior: &[String]) -> Vec<String> {
        if !self.is_permitted(sender) {
            return Vec::new();
        }
        self.supplier.allowed_entries(prior)
    }

    /// The usage string shown in help, if this sender may see it at all.
    pub fn full_usage(&self, sender: &dyn CommandSender) -> Option<&str> {
        if !self.is_permitted(sender) || self.supplier.usage.is_empty() {
            return None;
        }
        Some(&self.supplier.usage)
    }

    /// Whether `value` is acceptable after `prior`. Non-strict parameters
    /// accept anything; strict ones only what they would suggest.
    pub fn accepts(&self, prior: &[String], value: &str) -> bool {
        if !self.supplier.strict {
            return true;
        }
        self.supplier
            .allowed_entries(prior)
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(value))
    }
}
