use crate::common::{DEFAULT_SCOPE, TestEnv, env, stdout};
use insta::assert_snapshot;
use rstest::rstest;

#[rstest]
fn test_hello_uses_fallback_when_unset(env: TestEnv) {
    let output = env.run_ok(&["hello"]);

    assert_snapshot!(stdout(&output), @"⚪ Hello World!");
    assert_snapshot!(env.channel_log(DEFAULT_SCOPE), @r"
    extension-kit activated
    Hello World command executed with message: Hello World!
    extension-kit deactivated
    ");
}

#[rstest]
fn test_hello_uses_custom_message(env: TestEnv) {
    env.run_ok(&["config", "set", "customMessage", "Howdy"]);

    let output = env.run_ok(&["hello"]);

    assert_snapshot!(stdout(&output), @"⚪ Howdy");
    assert!(
        env.channel_log(DEFAULT_SCOPE)
            .contains("Hello World command executed with message: Howdy\n")
    );
}

#[rstest]
fn test_deactivation_logged_after_failure(env: TestEnv) {
    let output = env.run(&["config", "set", "maxItems", "0"]);
    assert!(!output.status.success());

    let log = env.channel_log(DEFAULT_SCOPE);
    assert!(log.ends_with("extension-kit deactivated\n"), "{log}");
}

#[rstest]
fn test_verbose_logs_to_stderr_only(env: TestEnv) {
    let output = env.run_ok(&["-vv", "log", "quiet"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Activated extension-kit"), "{stderr}");
    // Diagnostics never reach the channel
    assert!(!env.channel_log(DEFAULT_SCOPE).contains("Activated"));
}
