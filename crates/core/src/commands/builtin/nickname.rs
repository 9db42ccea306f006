use crate::commands::{
    error::{CommandError, RuntimeError},
    node::CommandNode,
    parameter::Parameter,
    suppliers,
};
use crate::features::nickname;
use crate::permissions::STAFF;
use crate::state::WorkshopState;
use std::sync::Arc;

pub(super) fn nick(state: &Arc<WorkshopState>) -> CommandNode {
    let enabled = Arc::clone(&state.features().nickname);
    let players = Arc::clone(state);
    let setter = Arc::clone(state);
    CommandNode::literal("nick", "Give a player a nickname")
        .alias("nickname")
        .require_permission(STAFF)
        .enabled_when(move || enabled.get())
        .parameter(
            Parameter::new(suppliers::from_fn("<player> <nickname>", false, move |prior| {
                if prior.is_empty() {
                    players.known_players()
                } else {
                    Vec::new()
                }
            })),
            "Set a player's nickname",
        )
        .executes(move |ctx| {
            let player = ctx.arg(0)?.to_string();
            let nickname = ctx.arg(1)?.to_string();
            if ctx.args().len() > 2 {
                return Err(CommandError::runtime("Nicknames can not contain spaces"));
            }
            if !nickname::is_valid_name(&nickname) {
                return Err(RuntimeError::InvalidArgument { argument: nickname }.into());
            }
            setter.nicknames().set(&player, &nickname);
            ctx.reply(&format!("{player} is now known as {nickname}"));
            Ok(())
        })
        .then(clear(state))
}

fn clear(state: &Arc<WorkshopState>) -> CommandNode {
    let nicknamed = Arc::clone(state);
    let state = Arc::clone(state);
    CommandNode::literal("clear", "Remove a player's nickname")
        .parameter(
            Parameter::new(suppliers::from_fn("<player>", true, move |prior| {
                if prior.is_empty() {
                    nicknamed.nicknames().players()
                } else {
                    Vec::new()
                }
            })),
            "Remove a player's nickname",
        )
        .executes(move |ctx| {
            let player = ctx.arg(0)?.to_string();
            match state.nicknames().clear(&player) {
                Some(old) => {
                    ctx.reply(&format!("{player} is no longer known as {old}"));
                    Ok(())
                }
                None => Err(CommandError::runtime(format!(
                    "{player} does not have a nickname"
                ))),
            }
        })
}
