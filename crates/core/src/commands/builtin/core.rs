use crate::commands::{
    context::ExecutionContext,
    error::{CommandError, CommandResult, InternalError},
    node::CommandNode,
    parameter::Parameter,
    suppliers,
};
use crate::features::Setting;
use crate::permissions::{ADMIN, STAFF};
use crate::state::WorkshopState;
use std::sync::Arc;

pub(super) fn root() -> CommandNode {
    CommandNode::literal(super::WORKSHOP, "Classroom management for Minecraft")
        .alias("ws")
        .executes(|ctx| {
            ctx.reply(&format!("Workshop v{}", env!("CARGO_PKG_VERSION")));
            ctx.accent(&format!("Try: /{} help", ctx.full_command()));
            Ok(())
        })
}

pub(super) fn reload(state: &Arc<WorkshopState>) -> CommandNode {
    let state = Arc::clone(state);
    CommandNode::literal("reload", "Reload all Workshop related data")
        .require_permission(STAFF)
        .executes(move |ctx| {
            state.reload().map_err(InternalError::Host)?;
            ctx.reply("Data loaded!");
            Ok(())
        })
}

pub(super) fn feature(state: &Arc<WorkshopState>) -> CommandNode {
    CommandNode::literal("feature", "Turn optional features on or off")
        .require_permission(ADMIN)
        .then(toggle(state, "enable", "Enable a feature", Setting::enable))
        .then(toggle(state, "disable", "Disable a feature", Setting::disable))
}

fn toggle(
    state: &Arc<WorkshopState>,
    name: &'static str,
    description: &str,
    apply: fn(&Setting) -> bool,
) -> CommandNode {
    let names = state.features().names();
    let parameter = Parameter::new(suppliers::fixed("<feature>", names));
    let state = Arc::clone(state);
    let validator = parameter.clone();
    CommandNode::literal(name, description)
        .parameter(parameter, format!("{description} by name"))
        .executes(move |ctx| exec_toggle(ctx, &state, &validator, name, apply))
}

fn exec_toggle(
    ctx: &mut ExecutionContext<'_>,
    state: &WorkshopState,
    parameter: &Parameter,
    action: &str,
    apply: fn(&Setting) -> bool,
) -> CommandResult<()> {
    let feature = ctx.arg(0)?;
    if !parameter.accepts(&[], feature) {
        return Err(CommandError::runtime(format!("Unknown feature: {feature}")));
    }
    let Some(setting) = state.features().get(feature) else {
        return Err(CommandError::invalid_argument(feature));
    };
    if !apply(setting) {
        return Err(CommandError::runtime(format!(
            "{} is already {}d",
            setting.name(),
            action
        )));
    }
    ctx.reply(&format!("Feature {} {}d", setting.name(), action));
    Ok(())
}
