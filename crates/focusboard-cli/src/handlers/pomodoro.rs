use crate::cli::{PomodoroAction, PomodoroConfigArgs};
use crate::context::CliContext;
use crate::output;
use focusboard_core::{FocusError, FocusResult};
use focusboard_domain::{PomodoroConfig, PomodoroPreset, SessionKind};
use std::io::{IsTerminal, Write};
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub async fn handle(ctx: &mut CliContext, action: PomodoroAction) -> anyhow::Result<()> {
    match action {
        PomodoroAction::Run { kind, seconds } => run(ctx, kind.into(), seconds).await?,
        PomodoroAction::Stats => {
            output::output_success(serde_json::json!({
                "enabled": ctx.app.settings.get().pomodoro_enabled,
                "stats": ctx.app.pomodoro.daily_stats(),
            }));
        }
        PomodoroAction::Config(args) => {
            let config = apply_config_args(ctx.app.pomodoro_config(), &args)?;
            if args.work.is_some() || args.short_break.is_some() || args.long_break.is_some() {
                ctx.app.save_pomodoro_config(&config)?;
            }
            output::output_success(config);
        }
        PomodoroAction::Preset { preset } => {
            let preset = PomodoroPreset::from(preset);
            let config = preset.config();
            ctx.app.save_pomodoro_config(&config)?;
            let mut data = serde_json::to_value(config)?;
            data["label"] = ctx.app.localizer.translate(preset.label_key()).into();
            output::output_success(data);
        }
    }
    Ok(())
}

fn apply_config_args(
    mut config: PomodoroConfig,
    args: &PomodoroConfigArgs,
) -> FocusResult<PomodoroConfig> {
    if let Some(work) = args.work {
        config.work_time = minutes_to_seconds("work", work)?;
    }
    if let Some(short_break) = args.short_break {
        config.short_break = minutes_to_seconds("short-break", short_break)?;
    }
    if let Some(long_break) = args.long_break {
        config.long_break = minutes_to_seconds("long-break", long_break)?;
    }
    Ok(config)
}

fn minutes_to_seconds(flag: &str, minutes: u32) -> FocusResult<u32> {
    minutes.checked_mul(60).ok_or_else(|| {
        FocusError::Validation(format!("--{} of {} minutes is out of range", flag, minutes))
    })
}

/// Count down one session, then record it. Ctrl-C drops the session
/// without recording it.
async fn run(ctx: &mut CliContext, kind: SessionKind, seconds: Option<u32>) -> anyhow::Result<()> {
    if !ctx.app.settings.get().pomodoro_enabled {
        output::output_error("Pomodoro is disabled; enable it with `settings pomodoro --enabled true`");
    }

    let duration = seconds.unwrap_or_else(|| ctx.app.pomodoro_config().duration_for(kind));
    ctx.app.pomodoro.start_session(kind, duration);
    tracing::info!("Running {} session for {}s", kind, duration);

    let show_progress = std::io::stderr().is_terminal();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately.
    ticker.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut remaining = duration;
    while remaining > 0 {
        if show_progress {
            eprint!("\r{} {}", kind, format_remaining(remaining));
            let _ = std::io::stderr().flush();
        }
        tokio::select! {
            _ = ticker.tick() => remaining -= 1,
            _ = &mut ctrl_c => {
                ctx.app.pomodoro.abandon_session();
                if show_progress {
                    eprintln!();
                }
                output::output_error("Session abandoned");
            }
        }
    }
    if show_progress {
        eprintln!("\r{} 00:00", kind);
    }

    let session = ctx.app.pomodoro.complete_session()?;
    output::output_success(serde_json::json!({
        "session": session,
        "stats": ctx.app.pomodoro.daily_stats(),
    }));
    Ok(())
}

fn format_remaining(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
