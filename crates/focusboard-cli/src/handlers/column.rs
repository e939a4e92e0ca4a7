use crate::cli::ColumnAction;
use crate::context::CliContext;
use crate::output;
use focusboard_domain::Column;

pub fn handle(ctx: &mut CliContext, action: ColumnAction) -> anyhow::Result<()> {
    match action {
        ColumnAction::Add { name } => match ctx.app.settings.add_column(&name)? {
            Some(column) => output::output_success(&column),
            None => output::output_error(&format!("Column name refused: {:?}", name)),
        },
        ColumnAction::List => {
            let columns: Vec<Column> = ctx
                .app
                .settings
                .get()
                .sorted_columns()
                .into_iter()
                .cloned()
                .collect();
            output::output_list(columns);
        }
        ColumnAction::Rename { id, name } => {
            ctx.require_column(&id)?;
            if !ctx.app.settings.rename_column(&id, &name)? {
                output::output_error(&format!("Column name refused: {:?}", name));
            }
            output_column(ctx, &id);
        }
        ColumnAction::Delete { id } => {
            ctx.require_column(&id)?;
            if !ctx.app.settings.delete_column(&id)? {
                output::output_error("The last remaining column cannot be deleted");
            }
            output::output_success(serde_json::json!({ "deleted": id }));
        }
        ColumnAction::Reorder { id, target } => {
            ctx.require_column(&id)?;
            ctx.require_column(&target)?;
            ctx.app.settings.reorder_column(&id, &target)?;
            output_column(ctx, &id);
        }
        ColumnAction::ToggleCompletion { id } => {
            ctx.require_column(&id)?;
            ctx.app.settings.toggle_completion(&id)?;
            output_column(ctx, &id);
        }
    }
    Ok(())
}

fn output_column(ctx: &CliContext, id: &str) {
    match ctx.app.settings.get().columns.iter().find(|c| c.id == id) {
        Some(column) => output::output_success(column),
        None => output::output_error(&format!("Column not found: {}", id)),
    }
}
