use crate::cli::AuthAction;
use crate::context::CliContext;
use crate::output;
use focusboard_domain::LoginOutcome;

pub async fn handle(ctx: &mut CliContext, action: AuthAction) -> anyhow::Result<()> {
    match action {
        AuthAction::Login { email, password } => {
            match ctx.app.auth.login(&email, &password).await? {
                LoginOutcome::Authenticated(user) => output::output_success(&user),
                refused => {
                    let message = refused
                        .message_key()
                        .map(|key| ctx.app.localizer.translate(key))
                        .unwrap_or_default();
                    output::output_error(&message);
                }
            }
        }
        AuthAction::Logout => {
            ctx.app.logout()?;
            output::output_success(serde_json::json!({ "loggedOut": true }));
        }
        AuthAction::Whoami => match ctx.app.auth.current_user() {
            Some(user) => output::output_success(&user),
            None => output::output_error("Not signed in"),
        },
    }
    Ok(())
}
