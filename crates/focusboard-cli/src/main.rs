mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("FOCUSBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "focusboard", &mut std::io::stdout());
        return Ok(());
    }

    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(cli.data_dir)?;

    match cli.command {
        Commands::Task(task_cmd) => handlers::task::handle(&mut ctx, task_cmd.action)?,
        Commands::Column(column_cmd) => handlers::column::handle(&mut ctx, column_cmd.action)?,
        Commands::Settings(settings_cmd) => {
            handlers::settings::handle(&mut ctx, settings_cmd.action)?
        }
        Commands::Board => handlers::board::handle(&ctx)?,
        Commands::Pomodoro(pomodoro_cmd) => {
            handlers::pomodoro::handle(&mut ctx, pomodoro_cmd.action).await?
        }
        Commands::Report(report_cmd) => handlers::report::handle(&ctx, report_cmd.action)?,
        Commands::Lang(lang_cmd) => handlers::lang::handle(&mut ctx, lang_cmd.action)?,
        Commands::Theme(theme_cmd) => handlers::theme::handle(&mut ctx, theme_cmd.action)?,
        Commands::Auth(auth_cmd) => handlers::auth::handle(&mut ctx, auth_cmd.action).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
