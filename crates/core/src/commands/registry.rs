use super::{
    error::RegistryError,
    help,
    node::CommandNode,
    sender::CommandSender,
};
use indexmap::IndexMap;
use tracing::{debug, info};

/// A root node bound to one top-level command.
#[derive(Debug)]
pub struct CommandTree {
    root: CommandNode,
}

impl CommandTree {
    /// Attaches help children where wanted and checks that every node can be
    /// addressed by exactly one path.
    pub fn new(mut root: CommandNode) -> Result<CommandTree, RegistryError> {
        attach_help(&mut root);
        validate(&root, "")?;
        Ok(CommandTree { root })
    }

    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Follows `path` by alias from the root.
    pub fn find(&self, path: &[&str]) -> Option<&CommandNode> {
        path.iter()
            .try_fold(&self.root, |node, token| node.child(token))
    }

    pub fn dispatch<S: AsRef<str>>(
        &self,
        sender: &mut dyn CommandSender,
        label: &str,
        args: &[S],
    ) -> bool {
        self.root.dispatch(sender, label, args)
    }

    pub fn complete<S: AsRef<str>>(&self, sender: &dyn CommandSender, args: &[S]) -> Vec<String> {
        self.root.complete(sender, args)
    }
}

fn attach_help(node: &mut CommandNode) {
    for child in &mut node.children {
        attach_help(child);
    }
    if node.wants_help() && !node.is_help() {
        node.children.push(help::help_node());
    }
}

fn validate(node: &CommandNode, parent_path: &str) -> Result<(), RegistryError> {
    let path = if parent_path.is_empty() {
        node.primary_alias().to_string()
    } else {
        format!("{} {}", parent_path, node.primary_alias())
    };

    if node.aliases().iter().any(|alias| alias.trim().is_empty()) {
        return Err(RegistryError::EmptyAlias { path });
    }
    if node.description().trim().is_empty() {
        return Err(RegistryError::MissingDescription { path });
    }

    for (i, child) in node.children().iter().enumerate() {
        let clash = node.children()[..i]
            .iter()
            .any(|earlier| earlier.primary_alias().eq_ignore_ascii_case(child.primary_alias()));
        if clash {
            return Err(RegistryError::DuplicatePath {
                path: format!("{} {}", path, child.primary_alias()),
            });
        }
        validate(child, &path)?;
    }
    Ok(())
}

/// A top-level command the host knows about, possibly bound to a tree.
#[derive(Debug)]
pub struct CommandDeclaration {
    label: String,
    aliases: Vec<String>,
    permission: Option<String>,
    tree: Option<CommandTree>,
}

impl CommandDeclaration {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Copied from the root node on registration.
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn tree(&self) -> Option<&CommandTree> {
        self.tree.as_ref()
    }

    fn matches(&self, label: &str) -> bool {
        self.label.eq_ignore_ascii_case(label)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(label))
    }
}

/// Every top-level command of the host and the trees bound to them.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, CommandDeclaration>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `label` known, the way a plugin manifest would.
    pub fn declare(&mut self, label: &str, aliases: &[&str]) {
        self.commands.insert(
            label.to_lowercase(),
            CommandDeclaration {
                label: label.to_string(),
                aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
                permission: None,
                tree: None,
            },
        );
    }

    /// Binds `root` to the declared command named by its primary alias.
    pub fn register_root(&mut self, root: CommandNode) -> Result<&CommandTree, RegistryError> {
        let key = root.primary_alias().to_lowercase();
        let Some(declaration) = self.commands.get_mut(&key) else {
            return Err(RegistryError::Undeclared {
                label: root.primary_alias().to_string(),
            });
        };
        if declaration.tree.is_some() {
            return Err(RegistryError::AlreadyBound {
                label: declaration.label.clone(),
            });
        }

        let tree = CommandTree::new(root)?;
        declaration.permission = tree.root().permission().map(str::to_string);
        info!("Registered command tree /{}", declaration.label);
        Ok(declaration.tree.insert(tree))
    }

    pub fn declaration(&self, label: &str) -> Option<&CommandDeclaration> {
        self.commands
            .values()
            .find(|declaration| declaration.matches(label))
    }

    pub fn tree(&self, label: &str) -> Option<&CommandTree> {
        self.declaration(label).and_then(CommandDeclaration::tree)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.values().map(CommandDeclaration::label)
    }

    pub fn dispatch<S: AsRef<str>>(
        &self,
        sender: &mut dyn CommandSender,
        label: &str,
        args: &[S],
    ) -> bool {
        match self.tree(label) {
            Some(tree) => tree.dispatch(sender, label, args),
            None => {
                debug!("No command tree bound to /{}", label);
                false
            }
        }
    }

    pub fn complete<S: AsRef<str>>(
        &self,
        sender: &dyn CommandSender,
        label: &str,
        args: &[S],
    ) -> Vec<String> {
        self.tree(label)
            .map(|tree| tree.complete(sender, args))
            .unwrap_or_default()
    }
}
