use crate::common::{DEFAULT_SCOPE, TestEnv, env, stderr, stdout};
use insta::assert_snapshot;
use rstest::rstest;

#[rstest]
fn test_log_substitutes_placeholders(env: TestEnv) {
    env.run_ok(&["log", "Processing {0} items in {1}", "5", "src"]);

    assert_snapshot!(env.channel_log(DEFAULT_SCOPE), @r"
    extension-kit activated
    Processing 5 items in src
    extension-kit deactivated
    ");
}

#[rstest]
#[case::no_args(&["log", "plain text"], "plain text")]
#[case::missing_arg(&["log", "{0} and {1}", "a"], "a and {1}")]
#[case::repeated(&["log", "{0}{0}", "x"], "xx")]
#[case::not_a_token(&["log", "{name} {-1} {}", "x"], "{name} {-1} {}")]
#[case::values_not_rescanned(&["log", "{0}", "{1}", "boom"], "{1}")]
fn test_log_formatting(env: TestEnv, #[case] args: &[&str], #[case] expected: &str) {
    env.run_ok(args);

    let log = env.channel_log(DEFAULT_SCOPE);
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines[1], expected);
}

#[rstest]
fn test_log_appends_across_runs(env: TestEnv) {
    env.run_ok(&["log", "first"]);
    env.run_ok(&["log", "second"]);

    assert_snapshot!(env.channel_log(DEFAULT_SCOPE), @r"
    extension-kit activated
    first
    extension-kit deactivated
    extension-kit activated
    second
    extension-kit deactivated
    ");
}

#[rstest]
fn test_show_prints_channel(env: TestEnv) {
    env.run_ok(&["log", "hello {0}", "there"]);

    let output = env.run_ok(&["show"]);

    // The show run's own activation line is already on disk when it reads the file
    assert_snapshot!(stdout(&output), @r"
    extension-kit activated
    hello there
    extension-kit deactivated
    extension-kit activated
    ");
    let stderr = stderr(&output);
    assert!(stderr.starts_with("⚪ Output channel: "), "{stderr}");
    assert!(stderr.contains("extension-kit.log"), "{stderr}");
}

#[rstest]
fn test_scope_names_channel_file(env: TestEnv) {
    env.run_ok(&["--scope", "my.ext", "log", "scoped"]);

    assert_eq!(env.channel_log(DEFAULT_SCOPE), "");
    assert_snapshot!(env.channel_log("my.ext"), @r"
    my.ext activated
    scoped
    my.ext deactivated
    ");
}

#[rstest]
fn test_log_dir_flag_overrides_env(env: TestEnv) {
    let other = env.root().join("elsewhere");
    env.run_ok(&["--log-dir", other.to_str().unwrap(), "log", "moved"]);

    assert_eq!(env.channel_log(DEFAULT_SCOPE), "");
    let log = std::fs::read_to_string(other.join("extension-kit.log")).unwrap();
    assert!(log.contains("moved\n"));
}
