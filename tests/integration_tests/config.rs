use crate::common::{DEFAULT_SCOPE, TestEnv, env, stderr, stdout};
use insta::assert_snapshot;
use rstest::rstest;

#[rstest]
#[case::enable_feature("enableFeature", "true")]
#[case::max_items("maxItems", "10")]
#[case::custom_message("customMessage", "Hello from Extension!")]
#[case::log_level("logLevel", "info")]
fn test_get_unset_prints_default(env: TestEnv, #[case] key: &str, #[case] default: &str) {
    let output = env.run_ok(&["config", "get", key]);

    assert_eq!(stdout(&output).trim_end(), default);
    assert!(stderr(&output).contains("is not set; showing the default"));
}

#[rstest]
fn test_set_persists_and_logs(env: TestEnv) {
    let output = env.run_ok(&["config", "set", "maxItems", "25"]);
    assert_snapshot!(stderr(&output), @"✅ maxItems updated to: 25");

    assert_snapshot!(env.config_contents(), @r#"
    [extension-kit]
    maxItems = 25
    "#);

    let output = env.run_ok(&["config", "get", "maxItems"]);
    assert_eq!(stdout(&output), "25\n");
    assert_eq!(stderr(&output), "");

    assert!(
        env.channel_log(DEFAULT_SCOPE)
            .contains("maxItems updated to: 25\n")
    );
}

#[rstest]
#[case::max_items_low(
    "maxItems",
    "0",
    "invalid value for maxItems: 0 (must be between 1 and 100)"
)]
#[case::max_items_high(
    "maxItems",
    "101",
    "invalid value for maxItems: 101 (must be between 1 and 100)"
)]
#[case::custom_message_empty(
    "customMessage",
    "",
    "invalid value for customMessage:  (must not be empty)"
)]
#[case::enable_feature_text(
    "enableFeature",
    "yes",
    "invalid value for enableFeature: yes (provided string was not `true` or `false`)"
)]
fn test_set_rejects_invalid(
    env: TestEnv,
    #[case] key: &str,
    #[case] value: &str,
    #[case] message: &str,
) {
    let output = env.run(&["config", "set", key, value]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim_end(), format!("❌ {message}"));
    assert_eq!(env.config_contents(), "");
    assert!(
        env.channel_log(DEFAULT_SCOPE)
            .contains(&format!("Failed to update {key}: {message}\n"))
    );
}

#[rstest]
fn test_custom_message_length_limit(env: TestEnv) {
    let at_limit = "x".repeat(100);
    env.run_ok(&["config", "set", "customMessage", &at_limit]);

    let over = "x".repeat(101);
    let output = env.run(&["config", "set", "customMessage", &over]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("must be at most 100 characters (got 101)"));

    let output = env.run_ok(&["config", "get", "customMessage"]);
    assert_eq!(stdout(&output).trim_end(), at_limit);
}

#[rstest]
fn test_reset_single_key(env: TestEnv) {
    env.run_ok(&["config", "set", "maxItems", "25"]);
    env.run_ok(&["config", "set", "logLevel", "debug"]);

    let output = env.run_ok(&["config", "reset", "maxItems"]);
    assert_snapshot!(stderr(&output), @"✅ Reset maxItems to its default");
    assert_snapshot!(env.config_contents(), @r#"
    [extension-kit]
    logLevel = "debug"
    "#);

    let output = env.run_ok(&["config", "reset", "maxItems"]);
    assert_snapshot!(stderr(&output), @"⚪ maxItems was not set");
}

#[rstest]
fn test_reset_all(env: TestEnv) {
    env.run_ok(&["config", "set", "maxItems", "25"]);
    env.run_ok(&["config", "set", "enableFeature", "false"]);

    let output = env.run_ok(&["config", "reset"]);
    assert_snapshot!(stderr(&output), @"✅ Settings reset to default values");
    assert_eq!(env.config_contents(), "");

    let output = env.run_ok(&["config", "get", "enableFeature"]);
    assert_eq!(stdout(&output), "true\n");
}

#[rstest]
fn test_list_text(env: TestEnv) {
    env.run_ok(&["config", "set", "maxItems", "42"]);

    let output = env.run_ok(&["config", "list"]);
    assert_snapshot!(stdout(&output), @r"
    enableFeature = true (default)
    maxItems = 42
    customMessage = Hello from Extension! (default)
    logLevel = info (default)
    ");
}

#[rstest]
fn test_list_json(env: TestEnv) {
    env.run_ok(&["config", "set", "logLevel", "warn"]);

    let output = env.run_ok(&["config", "list", "--format", "json"]);
    assert_snapshot!(stdout(&output), @r#"
    {
      "enableFeature": true,
      "maxItems": 10,
      "customMessage": "Hello from Extension!",
      "logLevel": "warn"
    }
    "#);
}

#[rstest]
fn test_scopes_are_independent(env: TestEnv) {
    env.run_ok(&["--scope", "a", "config", "set", "maxItems", "5"]);
    env.run_ok(&["--scope", "b", "config", "set", "maxItems", "7"]);

    assert_snapshot!(env.config_contents(), @r#"
    [a]
    maxItems = 5

    [b]
    maxItems = 7
    "#);

    let output = env.run_ok(&["--scope", "a", "config", "get", "maxItems"]);
    assert_eq!(stdout(&output), "5\n");
}

#[rstest]
fn test_config_flag_overrides_env(env: TestEnv) {
    let other = env.root().join("other.toml");
    env.run_ok(&[
        "--config",
        other.to_str().unwrap(),
        "config",
        "set",
        "maxItems",
        "3",
    ]);

    assert_eq!(env.config_contents(), "");
    assert!(std::fs::read_to_string(&other).unwrap().contains("maxItems = 3"));
}

#[rstest]
fn test_wrong_typed_stored_value_is_reported(env: TestEnv) {
    std::fs::write(env.config_path(), "[extension-kit]\nmaxItems = \"lots\"\n").unwrap();

    let output = env.run(&["config", "get", "maxItems"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("maxItems"), "{}", stderr(&output));
}

#[rstest]
fn test_reset_clears_wrong_typed_value(env: TestEnv) {
    std::fs::write(
        env.config_path(),
        "[extension-kit]\nmaxItems = \"lots\"\nlogLevel = \"warn\"\n",
    )
    .unwrap();

    let output = env.run_ok(&["config", "reset", "maxItems"]);
    assert_snapshot!(stderr(&output), @"✅ Reset maxItems to its default");

    assert_snapshot!(env.config_contents(), @r#"
    [extension-kit]
    logLevel = "warn"
    "#);
    let output = env.run_ok(&["config", "get", "maxItems"]);
    assert_eq!(stdout(&output), "10\n");
}

#[rstest]
fn test_list_marks_only_stored_keys(env: TestEnv) {
    env.run_ok(&["config", "set", "enableFeature", "false"]);

    let output = env.run_ok(&["config", "list"]);
    let listing = stdout(&output);
    assert!(listing.contains("enableFeature = false\n"), "{listing}");
    assert!(listing.contains("maxItems = 10 (default)\n"), "{listing}");
}

#[rstest]
fn test_unknown_key_rejected_by_parser(env: TestEnv) {
    let output = env.run(&["config", "get", "nope"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(env.channel_log(DEFAULT_SCOPE), "");
}
