//! Login and logout handlers.

use impdev_core::CommandOutcome;

use crate::bootstrap::CliContext;

pub async fn login(ctx: &CliContext) -> CommandOutcome {
    ctx.session.login().await
}

pub async fn logout(ctx: &CliContext) -> CommandOutcome {
    ctx.session.logout().await
}
