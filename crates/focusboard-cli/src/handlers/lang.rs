use crate::cli::LangAction;
use crate::context::CliContext;
use crate::output;
use focusboard_domain::LanguageInfo;

pub fn handle(ctx: &mut CliContext, action: LangAction) -> anyhow::Result<()> {
    match action {
        LangAction::Get => {
            output::output_success(LanguageInfo::from(ctx.app.localizer.language()));
        }
        LangAction::Set { code } => {
            ctx.app.localizer.set_language(code)?;
            output::output_success(LanguageInfo::from(code));
        }
        LangAction::List => {
            output::output_list(ctx.app.localizer.available_languages());
        }
        LangAction::T { key } => {
            let found = ctx.app.localizer.has_key(&key);
            let text = ctx.app.localizer.translate(&key);
            output::output_success(serde_json::json!({
                "key": key,
                "text": text,
                "found": found,
            }));
        }
    }
    Ok(())
}
