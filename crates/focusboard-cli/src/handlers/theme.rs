use crate::cli::ThemeAction;
use crate::context::CliContext;
use crate::output;

pub fn handle(ctx: &mut CliContext, action: ThemeAction) -> anyhow::Result<()> {
    let theme = match action {
        ThemeAction::Get => ctx.app.theme.get(),
        ThemeAction::Set { theme } => {
            ctx.app.theme.set(theme)?;
            theme
        }
        ThemeAction::Toggle => ctx.app.theme.toggle()?,
    };
    output::output_success(serde_json::json!({ "theme": theme }));
    Ok(())
}
