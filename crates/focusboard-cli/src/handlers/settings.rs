use crate::cli::SettingsAction;
use crate::context::CliContext;
use crate::output;

pub fn handle(ctx: &mut CliContext, action: SettingsAction) -> anyhow::Result<()> {
    match action {
        SettingsAction::Show => {
            output::output_success(serde_json::json!({
                "settings": ctx.app.settings.get(),
                "completionPolicy": ctx.app.config().completion_policy,
                "slugCollision": ctx.app.config().slug_collision,
                "dataDir": ctx.data_dir(),
            }));
        }
        SettingsAction::Pomodoro { enabled } => {
            ctx.app.settings.set_pomodoro_enabled(enabled)?;
            output::output_success(ctx.app.settings.get());
        }
    }
    Ok(())
}
