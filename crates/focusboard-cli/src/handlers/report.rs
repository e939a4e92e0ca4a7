use crate::cli::ReportAction;
use crate::context::CliContext;
use crate::output;
use chrono::NaiveDate;
use focusboard_domain::report::{next_day, previous_day};
use focusboard_domain::CompletionReport;

pub fn handle(ctx: &CliContext, action: ReportAction) -> anyhow::Result<()> {
    let report = ctx.app.report();
    match action {
        ReportAction::Summary => {
            let days: Vec<serde_json::Value> = report
                .dates()
                .into_iter()
                .map(|date| {
                    serde_json::json!({
                        "date": date,
                        "label": label(ctx, &report, date),
                        "count": report.tasks_on(date).len(),
                    })
                })
                .collect();
            output::output_success(serde_json::json!({
                "summary": report.summary(),
                "days": days,
            }));
        }
        ReportAction::Day { date } => {
            let date = date.unwrap_or_else(|| report.default_date());
            output::output_success(serde_json::json!({
                "date": date,
                "label": label(ctx, &report, date),
                "previous": previous_day(date),
                "next": next_day(date),
                "tasks": report.tasks_on(date),
            }));
        }
    }
    Ok(())
}

fn label(ctx: &CliContext, report: &CompletionReport, date: NaiveDate) -> String {
    let day = report.label_for(date);
    match day.translation_key() {
        Some(key) => ctx.app.localizer.translate(key),
        None => day.to_string(),
    }
}
