use crate::commands::{
    context::ExecutionContext,
    error::{CommandError, CommandResult, RuntimeError},
    parameter::Parameter,
    sender::CommandSender,
    tokenizer,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};
use workshop_text::Message;

pub type Executor = Arc<dyn Fn(&mut ExecutionContext<'_>) -> CommandResult<()> + Send + Sync>;
pub type Enabler = Arc<dyn Fn() -> bool + Send + Sync>;

/// One addressable command. Nodes are assembled bottom-up with the builder
/// methods and never change shape once handed to a [`CommandTree`].
///
/// A node without an executor is a pure grouping node: running it directly
/// reports [`RuntimeError::TooFewArguments`].
///
/// [`CommandTree`]: crate::commands::CommandTree
#[derive(Clone)]
pub struct CommandNode {
    pub(super) aliases: Vec<String>,
    pub(super) permission: Option<String>,
    pub(super) description: String,
    pub(super) children: Vec<CommandNode>,
    pub(super) parameters: Vec<(Parameter, String)>,
    pub(super) executor: Option<Executor>,
    pub(super) enabler: Option<Enabler>,
    pub(super) add_help: bool,
    pub(super) is_help: bool,
}

impl CommandNode {
    pub fn literal(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            aliases: vec![name.into()],
            permission: None,
            description: description.into(),
            children: Vec::new(),
            parameters: Vec::new(),
            executor: None,
            enabler: None,
            add_help: true,
            is_help: false,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn require_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn then(mut self, child: CommandNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn parameter(mut self, parameter: Parameter, description: impl Into<String>) -> Self {
        self.parameters.push((parameter, description.into()));
        self
    }

    pub fn executes<F>(mut self, executor: F) -> Self
    where
        F: Fn(&mut ExecutionContext<'_>) -> CommandResult<()> + Send + Sync + 'static,
    {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// The node only runs while `enabler` returns true. It is asked once per
    /// dispatch or completion.
    pub fn enabled_when<F>(mut self, enabler: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.enabler = Some(Arc::new(enabler));
        self
    }

    /// Keeps the tree builder from attaching a `help` child to this node.
    pub fn without_help(mut self) -> Self {
        self.add_help = false;
        self
    }

    pub(super) fn mark_help(mut self) -> Self {
        self.is_help = true;
        self.add_help = false;
        self
    }

    pub fn primary_alias(&self) -> &str {
        &self.aliases[0]
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().map(|(parameter, _)| parameter)
    }

    /// Parameters paired with the description this node gave them.
    pub fn described_parameters(&self) -> impl Iterator<Item = (&Parameter, &str)> {
        self.parameters
            .iter()
            .map(|(parameter, description)| (parameter, description.as_str()))
    }

    pub fn has_executor(&self) -> bool {
        self.executor.is_some()
    }

    pub fn is_help(&self) -> bool {
        self.is_help
    }

    pub fn wants_help(&self) -> bool {
        self.add_help
    }

    pub fn is_enabled(&self) -> bool {
        self.enabler.as_ref().is_none_or(|enabler| enabler())
    }

    pub fn is_permitted(&self, sender: &dyn CommandSender) -> bool {
        self.permission
            .as_deref()
            .is_none_or(|permission| sender.has_permission(permission))
    }

    pub fn matches(&self, token: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(token))
    }

    pub fn child(&self, token: &str) -> Option<&CommandNode> {
        self.children.iter().find(|child| child.matches(token))
    }

    /// Runs `args` against this node as the root of a tree.
    ///
    /// Returns whether the command that ran reported success. Every failure
    /// has already been reported to `sender` when this returns.
    pub fn dispatch<S: AsRef<str>>(
        &self,
        sender: &mut dyn CommandSender,
        label: &str,
        args: &[S],
    ) -> bool {
        let args: Vec<String> = args.iter().map(|arg| arg.as_ref().to_string()).collect();
        let mut path = Vec::new();
        self.dispatch_impl(&mut path, sender, label, &args)
    }

    fn dispatch_impl<'t>(
        &'t self,
        path: &mut Vec<&'t CommandNode>,
        sender: &mut dyn CommandSender,
        label: &str,
        args: &[String],
    ) -> bool {
        path.push(self);

        if !self.is_enabled() {
            sender.send_message(Message::error(RuntimeError::NotEnabled.to_string()));
            return false;
        }

        // Quoting is resolved once, before anything else looks at the arguments
        let normalized;
        let args = if path.len() == 1 {
            normalized = tokenizer::combine_quoted_arguments(args);
            if let Err(err) = tokenizer::check_argument_lengths(&normalized) {
                sender.send_message(Message::error(err.to_string()));
                return false;
            }
            &normalized[..]
        } else {
            args
        };

        if !self.is_permitted(&*sender) {
            sender.send_message(Message::error(RuntimeError::NoPermission.to_string()));
            return false;
        }

        if let Some(child) = args.first().and_then(|first| self.child(first)) {
            debug!("Routing `{}` to `{}`", args[0], child.primary_alias());
            return child.dispatch_impl(path, sender, child.primary_alias(), &args[1..]);
        }

        self.execute(path, sender, label, args)
    }

    fn execute(
        &self,
        path: &[&CommandNode],
        sender: &mut dyn CommandSender,
        label: &str,
        args: &[String],
    ) -> bool {
        let mut ctx = ExecutionContext::new(sender, label, args, path);
        let result = match &self.executor {
            Some(executor) => executor(&mut ctx),
            None => Err(RuntimeError::TooFewArguments.into()),
        };

        match result {
            Ok(()) => true,
            Err(CommandError::Runtime(err)) => {
                ctx.send_command_error(&err.to_string());
                false
            }
            Err(CommandError::Internal(err)) => {
                error!("Error running /{}: {}", ctx.full_command(), err);
                ctx.error("An internal error occurred. Check the console for more information.");
                false
            }
        }
    }

    /// Suggestions for the last of `args`, sorted.
    pub fn complete<S: AsRef<str>>(&self, sender: &dyn CommandSender, args: &[S]) -> Vec<String> {
        let args: Vec<String> = args.iter().map(|arg| arg.as_ref().to_string()).collect();
        self.complete_impl(sender, &args)
    }

    fn complete_impl(&self, sender: &dyn CommandSender, args: &[String]) -> Vec<String> {
        if !self.is_enabled() || !self.is_permitted(sender) {
            return Vec::new();
        }
        let Some(current) = args.last() else {
            return Vec::new();
        };

        let mut candidates = Vec::new();
        for child in &self.children {
            for (i, alias) in child.aliases.iter().enumerate() {
                // Once a child is named only its subtree is relevant
                if alias.eq_ignore_ascii_case(&args[0]) {
                    return child.complete_impl(sender, &args[1..]);
                }
                if args.len() == 1 && i == 0 && child.is_permitted(sender) {
                    candidates.push(alias.clone());
                }
            }
        }

        let prior = &args[..args.len() - 1];
        for (parameter, _) in &self.parameters {
            candidates.extend(parameter.next_allowed_inputs(sender, prior));
        }

        candidates.retain(|candidate| candidate.starts_with(current.as_str()));
        candidates.sort();
        candidates
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("aliases", &self.aliases)
            .field("permission", &self.permission)
            .field("description", &self.description)
            .field("children", &self.children)
            .field("parameters", &self.parameters)
            .field("has_executor", &self.executor.is_some())
            .field("is_help", &self.is_help)
            .finish()
    }
}
