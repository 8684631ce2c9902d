use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rolodex() -> Command {
    let mut cmd = Command::cargo_bin("rolodex").expect("Failed to find rolodex binary");
    // Shield the tests from the caller's environment
    cmd.env_remove("ROLODEX_CONFIG");
    cmd.env_remove("ROLODEX_API_URL");
    cmd.env_remove("ROLODEX_LOG");
    cmd
}

#[test]
fn test_bare_invocation_prints_guidance() {
    rolodex()
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands:"))
        .stdout(predicate::str::contains("rolodex browse"))
        .stdout(predicate::str::contains("rolodex --help"));
}

#[test]
fn test_help_lists_subcommands() {
    rolodex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("companies"));
}

#[test]
fn test_users_list_help_documents_filters() {
    rolodex()
        .args(["users", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--company"))
        .stdout(predicate::str::contains("--sort"))
        .stdout(predicate::str::contains("--order"));
}

#[test]
fn test_users_show_rejects_zero_id() {
    // Ids are positive integers; zero must die at argument parsing
    rolodex()
        .args(["users", "show", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_users_show_rejects_non_numeric_id() {
    rolodex()
        .args(["users", "show", "abc"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_unknown_subcommand_is_a_usage_error() {
    rolodex().arg("frobnicate").assert().failure().code(2);
}

#[test]
fn test_invalid_sort_field_is_a_usage_error() {
    rolodex()
        .args(["users", "list", "--sort", "height"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_browse_refuses_non_terminal_stdout() {
    rolodex()
        .arg("browse")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("needs a terminal"));
}

#[test]
fn test_invalid_base_url_fails_before_any_request() {
    rolodex()
        .args(["--base-url", "not a url", "companies"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid base URL"));
}

#[test]
fn test_invalid_base_url_env_var_fails_the_same_way() {
    rolodex()
        .env("ROLODEX_API_URL", "::: nope")
        .arg("companies")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid base URL"));
}

#[test]
fn test_config_flag_points_at_the_given_file() {
    // A malformed file must surface as an error, proving the flag is honored
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "this is not toml [").expect("Failed to write config");

    rolodex()
        .args(["--config"])
        .arg(&config_path)
        .arg("companies")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_config_env_var_points_at_the_given_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "this is not toml [").expect("Failed to write config");

    rolodex()
        .env("ROLODEX_CONFIG", &config_path)
        .arg("companies")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_version_flag_reports_the_package_version() {
    rolodex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
