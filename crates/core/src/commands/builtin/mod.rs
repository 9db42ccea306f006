mod banitem;
mod core;
mod nickname;

use crate::commands::{
    error::RegistryError,
    node::CommandNode,
    registry::{CommandRegistry, CommandTree},
};
use crate::state::WorkshopState;
use std::sync::Arc;

/// Primary label of the builtin tree.
pub const WORKSHOP: &str = "workshop";

/// The complete `/workshop` tree, before help children are attached.
pub fn workshop_command(state: &Arc<WorkshopState>) -> CommandNode {
    core::root()
        .then(core::reload(state))
        .then(banitem::banitem(state))
        .then(nickname::nick(state))
        .then(core::feature(state))
}

/// Binds the builtin tree to the host's `workshop` declaration.
pub fn register_commands(
    registry: &mut CommandRegistry,
    state: &Arc<WorkshopState>,
) -> Result<(), RegistryError> {
    registry.register_root(workshop_command(state))?;
    Ok(())
}

/// The builtin tree on its own, for hosts that route by themselves.
pub fn workshop_tree(state: &Arc<WorkshopState>) -> Result<CommandTree, RegistryError> {
    CommandTree::new(workshop_command(state))
}
