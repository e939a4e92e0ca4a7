use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn focusboard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("focusboard").unwrap();
    cmd.arg("--data-dir")
        .arg(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("LC_ALL")
        .env_remove("LC_MESSAGES")
        .env_remove("LANG");
    cmd
}

fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join("config").join("focusboard");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}

fn run_ok(dir: &Path, args: &[&str]) -> Value {
    let output = focusboard(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&String::from_utf8_lossy(&output));
    assert!(json["success"].as_bool().unwrap());
    json
}

fn parse_json_output(output: &str) -> Value {
    serde_json::from_str(output).expect("Failed to parse JSON output")
}

fn extract_id(json: &Value) -> String {
    json["data"]["id"].as_str().unwrap().to_string()
}

fn add_task(dir: &Path, title: &str) -> String {
    let json = run_ok(dir, &["task", "add", "--title", title]);
    extract_id(&json)
}

mod task_tests {
    use super::*;

    #[test]
    fn test_task_add_defaults_to_first_column() {
        let dir = tempdir().unwrap();
        let json = run_ok(
            dir.path(),
            &["task", "add", "--title", "  Write docs  ", "--tags", "docs, work,docs"],
        );
        assert_eq!(json["data"]["title"], "Write docs");
        assert_eq!(json["data"]["status"], "todo");
        assert_eq!(json["data"]["tags"], serde_json::json!(["docs", "work"]));
        assert!(json["data"]["completedAt"].is_null());
    }

    #[test]
    fn test_task_add_blank_title_fails() {
        let dir = tempdir().unwrap();
        focusboard(dir.path())
            .args(["task", "add", "--title", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"success\":false"));
    }

    #[test]
    fn test_task_list_and_filter() {
        let dir = tempdir().unwrap();
        add_task(dir.path(), "One");
        run_ok(
            dir.path(),
            &["task", "add", "--title", "Two", "--status", "doing", "--tags", "x"],
        );

        let all = run_ok(dir.path(), &["task", "list"]);
        assert_eq!(all["data"]["count"], 2);

        let doing = run_ok(dir.path(), &["task", "list", "--status", "doing"]);
        assert_eq!(doing["data"]["count"], 1);
        assert_eq!(doing["data"]["items"][0]["title"], "Two");

        let tagged = run_ok(dir.path(), &["task", "list", "--tag", "x"]);
        assert_eq!(tagged["data"]["count"], 1);
    }

    #[test]
    fn test_task_update_and_delete() {
        let dir = tempdir().unwrap();
        let id = add_task(dir.path(), "Draft");

        let json = run_ok(
            dir.path(),
            &["task", "update", "--id", &id, "--description", "longer text"],
        );
        assert_eq!(json["data"]["description"], "longer text");
        assert_eq!(json["data"]["title"], "Draft");

        run_ok(dir.path(), &["task", "delete", "--id", &id]);
        focusboard(dir.path())
            .args(["task", "get", "--id", &id])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Task not found"));
    }

    #[test]
    fn test_move_into_completion_column_stamps_time() {
        let dir = tempdir().unwrap();
        let id = add_task(dir.path(), "Ship it");
        run_ok(dir.path(), &["column", "toggle-completion", "--id", "done"]);

        let json = run_ok(dir.path(), &["task", "move", "--id", &id, "--status", "done"]);
        assert_eq!(json["data"]["status"], "done");
        assert!(json["data"]["completedAt"].is_string());

        let back = run_ok(dir.path(), &["task", "move", "--id", &id, "--status", "todo"]);
        assert_eq!(back["data"]["completedAt"], json["data"]["completedAt"]);
    }

    #[test]
    fn test_tags_catalogue() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["task", "add", "--title", "A", "--tags", "work,home"]);
        run_ok(dir.path(), &["task", "add", "--title", "B", "--tags", "errand"]);

        let json = run_ok(dir.path(), &["task", "tags"]);
        assert_eq!(
            json["data"]["items"],
            serde_json::json!(["errand", "home", "work"])
        );
    }
}

mod column_tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["column", "list"]);
        assert_eq!(json["data"]["count"], 3);
        assert_eq!(json["data"]["items"][0]["status"], "todo");
        assert_eq!(json["data"]["items"][2]["status"], "done");
    }

    #[test]
    fn test_add_and_rename_slug() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["column", "add", "--name", "Waiting On"]);
        assert_eq!(json["data"]["status"], "waiting-on");
        assert_eq!(json["data"]["order"], 3);
        let id = extract_id(&json);

        let renamed = run_ok(
            dir.path(),
            &["column", "rename", "--id", &id, "--name", "My Stuff"],
        );
        assert_eq!(renamed["data"]["name"], "My Stuff");
        assert_eq!(renamed["data"]["status"], "my-stuff");
    }

    #[test]
    fn test_reorder() {
        let dir = tempdir().unwrap();
        run_ok(
            dir.path(),
            &["column", "reorder", "--id", "done", "--target", "todo"],
        );
        let json = run_ok(dir.path(), &["column", "list"]);
        let statuses: Vec<&str> = json["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["status"].as_str().unwrap())
            .collect();
        assert_eq!(statuses, vec!["done", "todo", "doing"]);
    }

    #[test]
    fn test_last_column_cannot_be_deleted() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["column", "delete", "--id", "todo"]);
        run_ok(dir.path(), &["column", "delete", "--id", "doing"]);

        focusboard(dir.path())
            .args(["column", "delete", "--id", "done"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("last remaining column"));

        let json = run_ok(dir.path(), &["column", "list"]);
        assert_eq!(json["data"]["count"], 1);
    }

    #[test]
    fn test_deleting_column_orphans_tasks() {
        let dir = tempdir().unwrap();
        let id = run_ok(
            dir.path(),
            &["task", "add", "--title", "Stuck", "--status", "doing"],
        );
        let id = extract_id(&id);
        run_ok(dir.path(), &["column", "delete", "--id", "doing"]);

        let task = run_ok(dir.path(), &["task", "get", "--id", &id]);
        assert_eq!(task["data"]["status"], "doing");

        let board = run_ok(dir.path(), &["board"]);
        assert_eq!(board["data"]["orphaned"][0]["id"], id.as_str());
    }
}

mod settings_tests {
    use super::*;

    #[test]
    fn test_config_file_policy_clears_completion() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "completion_policy = \"clear-on-leave\"");
        run_ok(dir.path(), &["column", "toggle-completion", "--id", "done"]);
        let id = add_task(dir.path(), "Reopened");

        let done = run_ok(dir.path(), &["task", "move", "--id", &id, "--status", "done"]);
        assert!(done["data"]["completedAt"].is_string());
        let reopened = run_ok(dir.path(), &["task", "move", "--id", &id, "--status", "todo"]);
        assert!(reopened["data"]["completedAt"].is_null());
    }

    #[test]
    fn test_pomodoro_toggle_persists() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["settings", "show"]);
        assert_eq!(json["data"]["settings"]["pomodoroEnabled"], true);

        run_ok(dir.path(), &["settings", "pomodoro", "--enabled", "false"]);
        let json = run_ok(dir.path(), &["settings", "show"]);
        assert_eq!(json["data"]["settings"]["pomodoroEnabled"], false);

        focusboard(dir.path())
            .args(["pomodoro", "run", "--seconds", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("disabled"));
    }
}

mod pomodoro_tests {
    use super::*;

    #[test]
    fn test_run_records_session() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["pomodoro", "run", "--seconds", "1"]);
        assert_eq!(json["data"]["session"]["type"], "work");
        assert_eq!(json["data"]["session"]["completed"], true);
        assert_eq!(json["data"]["stats"]["totalPomodoros"], 1);
        assert_eq!(json["data"]["stats"]["totalWorkTime"], 1);

        let stats = run_ok(dir.path(), &["pomodoro", "stats"]);
        assert_eq!(stats["data"]["stats"]["sessions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_break_session_counts_break_time() {
        let dir = tempdir().unwrap();
        let json = run_ok(
            dir.path(),
            &["pomodoro", "run", "--kind", "short-break", "--seconds", "0"],
        );
        assert_eq!(json["data"]["stats"]["totalPomodoros"], 0);
        assert_eq!(json["data"]["stats"]["totalBreakTime"], 0);
        assert_eq!(json["data"]["session"]["type"], "short-break");
    }

    #[test]
    fn test_config_and_presets() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["pomodoro", "config"]);
        assert_eq!(json["data"]["workTime"], 1500);

        let json = run_ok(dir.path(), &["pomodoro", "preset", "focus"]);
        assert_eq!(json["data"]["workTime"], 2700);
        assert_eq!(json["data"]["label"], "Foco");

        let json = run_ok(dir.path(), &["pomodoro", "config", "--short-break", "7"]);
        assert_eq!(json["data"]["shortBreak"], 420);
        assert_eq!(json["data"]["workTime"], 2700);

        focusboard(dir.path())
            .args(["pomodoro", "config", "--long-break", "2"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--long-break"));
    }

    #[test]
    fn test_config_minutes_out_of_range_leave_config_alone() {
        let dir = tempdir().unwrap();
        for minutes in ["80000000", "1073741849", "0"] {
            focusboard(dir.path())
                .args(["pomodoro", "config", "--work", minutes])
                .assert()
                .failure();
        }

        let json = run_ok(dir.path(), &["pomodoro", "config"]);
        assert_eq!(json["data"]["workTime"], 1500);
    }
}

mod report_tests {
    use super::*;

    #[test]
    fn test_report_counts_completed_today() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["column", "toggle-completion", "--id", "done"]);
        let id = add_task(dir.path(), "Finished");
        add_task(dir.path(), "Open");
        run_ok(dir.path(), &["task", "move", "--id", &id, "--status", "done"]);

        let json = run_ok(dir.path(), &["report", "summary"]);
        assert_eq!(json["data"]["summary"]["total"], 1);
        assert_eq!(json["data"]["summary"]["today"], 1);
        assert_eq!(json["data"]["days"].as_array().unwrap().len(), 1);

        let day = run_ok(dir.path(), &["report", "day"]);
        assert_eq!(day["data"]["tasks"][0]["id"], id.as_str());
        assert_eq!(day["data"]["label"], "Hoje");
    }

    #[test]
    fn test_report_day_without_completions_is_empty() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["report", "day", "--date", "2024-01-03"]);
        assert_eq!(json["data"]["tasks"], serde_json::json!([]));
        assert_eq!(json["data"]["previous"], "2024-01-02");
        assert_eq!(json["data"]["next"], "2024-01-04");
    }
}

mod lang_theme_tests {
    use super::*;

    #[test]
    fn test_default_language_and_switch() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["lang", "get"]);
        assert_eq!(json["data"]["code"], "pt-BR");

        run_ok(dir.path(), &["lang", "set", "en-US"]);
        let json = run_ok(dir.path(), &["lang", "t", "common.save"]);
        assert_eq!(json["data"]["text"], "Save");
    }

    #[test]
    fn test_locale_env_is_used_when_nothing_saved() {
        let dir = tempdir().unwrap();
        let output = focusboard(dir.path())
            .env("LANG", "es_ES.UTF-8")
            .args(["lang", "get"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["code"], "es-ES");
    }

    #[test]
    fn test_unknown_key_echoes_key() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["lang", "t", "nonexistent.key"]);
        assert_eq!(json["data"]["text"], "nonexistent.key");
        assert_eq!(json["data"]["found"], false);
    }

    #[test]
    fn test_unsupported_language_rejected() {
        let dir = tempdir().unwrap();
        focusboard(dir.path())
            .args(["lang", "set", "fr-FR"])
            .assert()
            .failure();
    }

    #[test]
    fn test_theme_toggle() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["theme", "get"]);
        assert_eq!(json["data"]["theme"], "dark");

        let json = run_ok(dir.path(), &["theme", "toggle"]);
        assert_eq!(json["data"]["theme"], "light");

        let json = run_ok(dir.path(), &["theme", "get"]);
        assert_eq!(json["data"]["theme"], "light");
    }
}

mod auth_tests {
    use super::*;

    #[test]
    fn test_login_whoami_logout() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "login_delay_ms = 0");
        let json = run_ok(
            dir.path(),
            &[
                "auth",
                "login",
                "--email",
                "joao@example.com",
                "--password",
                "123456",
            ],
        );
        assert_eq!(json["data"]["name"], "João Silva");

        let json = run_ok(dir.path(), &["auth", "whoami"]);
        assert_eq!(json["data"]["id"], "1");

        add_task(dir.path(), "Will be wiped");
        run_ok(dir.path(), &["theme", "set", "light"]);
        run_ok(dir.path(), &["auth", "logout"]);

        let tasks = run_ok(dir.path(), &["task", "list"]);
        assert_eq!(tasks["data"]["count"], 0);
        let theme = run_ok(dir.path(), &["theme", "get"]);
        assert_eq!(theme["data"]["theme"], "dark");
        focusboard(dir.path())
            .args(["auth", "whoami"])
            .assert()
            .failure();
    }

    #[test]
    fn test_wrong_password_is_field_message() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "login_delay_ms = 0");
        focusboard(dir.path())
            .args([
                "auth",
                "login",
                "--email",
                "joao@example.com",
                "--password",
                "nope",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("E-mail ou senha incorretos"));
    }
}

#[test]
fn test_completions_generate() {
    let dir = tempdir().unwrap();
    focusboard(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focusboard"));
}
