use crate::context::CliContext;
use crate::output;

pub fn handle(ctx: &CliContext) -> anyhow::Result<()> {
    let view = ctx.app.board();
    if !view.orphaned.is_empty() {
        tracing::warn!(
            "{} task(s) have a status that matches no column",
            view.orphaned.len()
        );
    }
    output::output_success(&view);
    Ok(())
}
