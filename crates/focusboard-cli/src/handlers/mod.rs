pub mod auth;
pub mod board;
pub mod column;
pub mod lang;
pub mod pomodoro;
pub mod report;
pub mod settings;
pub mod task;
pub mod theme;
