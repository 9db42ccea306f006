use crate::commands::{
    error::CommandError, node::CommandNode, parameter::Parameter, suppliers,
};
use crate::features::banitem::{self, ITEMS};
use crate::permissions::STAFF;
use crate::state::WorkshopState;
use itertools::Itertools;
use std::sync::Arc;

pub(super) fn banitem(state: &Arc<WorkshopState>) -> CommandNode {
    let enabled = Arc::clone(&state.features().banitem);
    let toggle_state = Arc::clone(state);
    CommandNode::literal("banitem", "Ban certain items")
        .require_permission(STAFF)
        .enabled_when(move || enabled.get())
        .parameter(
            Parameter::new(suppliers::fixed("<item>", ITEMS.iter().copied()))
                .require_permission(STAFF),
            "Ban an item",
        )
        .executes(move |ctx| {
            let input = ctx.arg(0)?;
            let Some(item) = banitem::match_item(input) else {
                return Err(CommandError::runtime("That item doesn't exist!"));
            };
            let manager = toggle_state.banitem();
            if manager.unban(item) {
                ctx.reply(&format!("The item {item} is now unbanned"));
            } else {
                manager.ban(item);
                ctx.reply(&format!("The item {item} is now banned"));
            }
            Ok(())
        })
        .then(list(state))
}

fn list(state: &Arc<WorkshopState>) -> CommandNode {
    let state = Arc::clone(state);
    CommandNode::literal("list", "List all banned items")
        .require_permission(STAFF)
        .executes(move |ctx| {
            let banned = state.banitem().banned();
            if banned.is_empty() {
                ctx.reply("No items are banned.");
            } else {
                ctx.reply(&format!("Banned items: {}", banned.iter().join(", ")));
            }
            Ok(())
        })
}
