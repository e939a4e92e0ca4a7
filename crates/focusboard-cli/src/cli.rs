use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use focusboard_domain::{Language, PomodoroPreset, SessionKind, Theme};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "focusboard")]
#[command(about = "A personal task board with a Pomodoro timer", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")"))]
pub struct Cli {
    /// Directory holding the data files (or set FOCUSBOARD_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", env = "FOCUSBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task operations
    Task(TaskCommand),
    /// Column operations
    Column(ColumnCommand),
    /// Show or change settings
    Settings(SettingsCommand),
    /// Show the board with each column's tasks
    Board,
    /// Pomodoro timer and daily stats
    Pomodoro(PomodoroCommand),
    /// Completed-task reports
    Report(ReportCommand),
    /// Interface language
    Lang(LangCommand),
    /// Color theme
    Theme(ThemeCommand),
    /// Sign in and out
    Auth(AuthCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add(TaskAddArgs),
    /// List tasks
    List {
        /// Only tasks with this status
        #[arg(long)]
        status: Option<String>,
        /// Only tasks carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// Get a specific task
    Get {
        #[arg(long)]
        id: String,
    },
    /// Update a task
    Update(TaskUpdateArgs),
    /// Move a task to another column
    Move {
        #[arg(long)]
        id: String,
        /// Status slug of the target column
        #[arg(long)]
        status: String,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: String,
    },
    /// List every tag in use
    Tags,
}

#[derive(Args)]
pub struct TaskAddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Status slug; defaults to the first column
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Replace the tag list
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,
    /// Drop the completion timestamp
    #[arg(long)]
    pub clear_completed: bool,
}

// Column commands
#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Add a column at the end
    Add {
        #[arg(long)]
        name: String,
    },
    /// List columns in board order
    List,
    /// Rename a column
    Rename {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a column
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Move a column to another column's position
    Reorder {
        #[arg(long)]
        id: String,
        #[arg(long)]
        target: String,
    },
    /// Flip the completion flag of a column
    ToggleCompletion {
        #[arg(long)]
        id: String,
    },
}

// Settings commands
#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show the current settings
    Show,
    /// Enable or disable the Pomodoro timer
    Pomodoro {
        #[arg(long, action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

// Pomodoro commands
#[derive(Args)]
pub struct PomodoroCommand {
    #[command(subcommand)]
    pub action: PomodoroAction,
}

#[derive(Subcommand)]
pub enum PomodoroAction {
    /// Run a session countdown and record it when it finishes
    Run {
        #[arg(long, value_enum, default_value = "work")]
        kind: SessionKindArg,
        /// Override the configured length, in seconds
        #[arg(long)]
        seconds: Option<u32>,
    },
    /// Show today's stats
    Stats,
    /// Show or change interval lengths
    Config(PomodoroConfigArgs),
    /// Apply a preset
    Preset {
        #[arg(value_enum)]
        preset: PresetArg,
    },
}

#[derive(Args)]
pub struct PomodoroConfigArgs {
    /// Work length in minutes (1-60)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub work: Option<u32>,
    /// Short break length in minutes (1-30)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub short_break: Option<u32>,
    /// Long break length in minutes (5-60)
    #[arg(long, value_parser = clap::value_parser!(u32).range(5..=60))]
    pub long_break: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SessionKindArg {
    Work,
    ShortBreak,
    LongBreak,
}

impl From<SessionKindArg> for SessionKind {
    fn from(arg: SessionKindArg) -> Self {
        match arg {
            SessionKindArg::Work => SessionKind::Work,
            SessionKindArg::ShortBreak => SessionKind::ShortBreak,
            SessionKindArg::LongBreak => SessionKind::LongBreak,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PresetArg {
    Default,
    Focus,
    Calm,
}

impl From<PresetArg> for PomodoroPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Default => PomodoroPreset::Default,
            PresetArg::Focus => PomodoroPreset::Focus,
            PresetArg::Calm => PomodoroPreset::Calm,
        }
    }
}

// Report commands
#[derive(Args)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub action: ReportAction,
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// Totals and the dates that have completions
    Summary,
    /// Tasks completed on one day
    Day {
        /// Date as YYYY-MM-DD; defaults to the most recent day with completions
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

// Language commands
#[derive(Args)]
pub struct LangCommand {
    #[command(subcommand)]
    pub action: LangAction,
}

#[derive(Subcommand)]
pub enum LangAction {
    /// Show the active language
    Get,
    /// Switch language
    Set {
        #[arg(value_parser = parse_language)]
        code: Language,
    },
    /// List available languages
    List,
    /// Translate a dotted key
    T { key: String },
}

fn parse_language(code: &str) -> Result<Language, String> {
    code.parse().map_err(|e: focusboard_core::FocusError| e.to_string())
}

// Theme commands
#[derive(Args)]
pub struct ThemeCommand {
    #[command(subcommand)]
    pub action: ThemeAction,
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show the active theme
    Get,
    /// Set the theme
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    /// Switch between light and dark
    Toggle,
}

fn parse_theme(name: &str) -> Result<Theme, String> {
    name.parse().map_err(|e: focusboard_core::FocusError| e.to_string())
}

// Auth commands
#[derive(Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and wipe all local data
    Logout,
    /// Show the signed-in user
    Whoami,
}
