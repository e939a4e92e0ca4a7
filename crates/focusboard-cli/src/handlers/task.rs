use crate::cli::{TaskAction, TaskAddArgs, TaskUpdateArgs};
use crate::context::CliContext;
use crate::output;
use focusboard_domain::task::normalize_tags;
use focusboard_domain::{FieldUpdate, NewTask, Task, TaskUpdate};

pub fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add(args) => {
            let fields = build_new_task(ctx, args);
            let task = ctx.app.tasks.add(fields)?;
            output::output_success(&task);
        }
        TaskAction::List { status, tag } => {
            let tasks: Vec<&Task> = ctx
                .app
                .tasks
                .list()
                .iter()
                .filter(|t| status.as_ref().map_or(true, |s| &t.status == s))
                .filter(|t| tag.as_ref().map_or(true, |tag| t.has_tag(tag)))
                .collect();
            output::output_list(tasks);
        }
        TaskAction::Get { id } => match ctx.app.tasks.get(&id) {
            Some(task) => output::output_success(task),
            None => output::output_error(&format!("Task not found: {}", id)),
        },
        TaskAction::Update(args) => {
            let id = args.id.clone();
            ctx.require_task(&id)?;
            ctx.app.tasks.update(&id, build_update(args))?;
            output::output_success(ctx.require_task(&id)?);
        }
        TaskAction::Move { id, status } => {
            ctx.require_task(&id)?;
            ctx.app.move_task(&id, &status)?;
            output::output_success(ctx.require_task(&id)?);
        }
        TaskAction::Delete { id } => {
            ctx.require_task(&id)?;
            ctx.app.tasks.remove(&id)?;
            output::output_success(serde_json::json!({ "deleted": id }));
        }
        TaskAction::Tags => {
            output::output_list(ctx.app.tasks.all_tags());
        }
    }
    Ok(())
}

fn build_new_task(ctx: &CliContext, args: TaskAddArgs) -> NewTask {
    let status = args.status.unwrap_or_else(|| {
        ctx.app
            .settings
            .get()
            .sorted_columns()
            .first()
            .map(|c| c.status.clone())
            .unwrap_or_else(|| "todo".to_string())
    });
    NewTask {
        title: args.title,
        description: args.description,
        status,
        tags: args.tags,
    }
}

fn build_update(args: TaskUpdateArgs) -> TaskUpdate {
    TaskUpdate {
        title: args.title,
        description: args.description,
        status: None,
        tags: args.tags.map(normalize_tags),
        completed_at: if args.clear_completed {
            FieldUpdate::Clear
        } else {
            FieldUpdate::NoChange
        },
    }
}
