//! Tests for `satchel run`.

mod harness;
use harness::{
    assert_failure, assert_stderr_contains, assert_stdout_contains, assert_success, TestEnv,
};

#[cfg(unix)]
#[test]
fn test_run_injects_env_vars() {
    let env = TestEnv::new();
    env.write(".env.enc", "INJECTED_VAR=injected_value\n");
    let sops = env.passthrough_sops();

    let output = env.run(&sops, &["sh", "-c", "echo $INJECTED_VAR"]);
    assert_success(&output);
    assert_stdout_contains(&output, "injected_value");
}

#[cfg(unix)]
#[test]
fn test_run_uses_default_secrets_file() {
    let env = TestEnv::new();
    env.write(".env.enc", "DEFAULT_FILE_VAR=found\n");
    let sops = env.passthrough_sops();

    // No --file flag; .env.enc in the working directory is the default.
    let output = env.run(&sops, &["sh", "-c", "echo $DEFAULT_FILE_VAR"]);
    assert_success(&output);
    assert_stdout_contains(&output, "found");
}

#[cfg(unix)]
#[test]
fn test_run_explicit_file_flag() {
    let env = TestEnv::new();
    env.write("prod.enc", "WHICH_FILE=prod\n");
    let sops = env.passthrough_sops();

    let output = env
        .cmd()
        .arg("--sops")
        .arg(&sops)
        .args(["--file", "prod.enc", "run", "--", "sh", "-c", "echo $WHICH_FILE"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "prod");
}

#[cfg(unix)]
#[test]
fn test_run_strips_outer_quotes() {
    let env = TestEnv::new();
    env.write(".env.enc", "API_KEY=abc123\n# comment\n\nDB_HOST=\"localhost\"\n");
    let sops = env.passthrough_sops();

    let output = env.run(&sops, &["sh", "-c", "echo $API_KEY:$DB_HOST"]);
    assert_success(&output);
    assert_stdout_contains(&output, "abc123:localhost");
}

#[cfg(unix)]
#[test]
fn test_run_exit_code_passthrough() {
    let env = TestEnv::new();
    env.write(".env.enc", "A=1\n");
    let sops = env.passthrough_sops();

    let output = env.run(&sops, &["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[cfg(unix)]
#[test]
fn test_run_missing_secrets_file_never_decrypts_or_runs() {
    let env = TestEnv::new();
    // Record any invocation of the decryption tool.
    let sops = env.fake_sops("touch \"$(dirname \"$0\")/sops-was-called\"; cat \"$4\"");

    let output = env.run(&sops, &["sh", "-c", "touch command-was-run"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
    assert!(!env.dir.path().join("sops-was-called").exists());
    assert!(!env.dir.path().join("command-was-run").exists());
}

#[cfg(unix)]
#[test]
fn test_run_decryption_failure_aborts() {
    let env = TestEnv::new();
    env.write(".env.enc", "ciphertext");
    let sops = env.fake_sops("echo 'bad key' >&2; exit 1");

    let output = env.run(&sops, &["sh", "-c", "touch command-was-run"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
    assert_stderr_contains(&output, "bad key");
    assert!(!env.dir.path().join("command-was-run").exists());
}

#[cfg(unix)]
#[test]
fn test_run_empty_secrets_warns_but_still_runs() {
    let env = TestEnv::new();
    env.write(".env.enc", "# nothing but comments\n\n");
    let sops = env.passthrough_sops();

    let output = env.run(&sops, &["sh", "-c", "echo ran"]);
    assert_success(&output);
    assert_stdout_contains(&output, "ran");
    assert_stderr_contains(&output, "no secrets loaded");
}

#[cfg(unix)]
#[test]
fn test_run_requests_yaml_format_for_yaml_file() {
    let env = TestEnv::new();
    env.write("secrets.yaml", "ciphertext");
    // Echo the requested --output-type back as a flat yaml payload.
    let sops = env.fake_sops("printf 'fmt: %s\\n' \"$3\"");

    let output = env
        .cmd()
        .arg("--sops")
        .arg(&sops)
        .args(["--file", "secrets.yaml", "run", "--", "sh", "-c", "echo $fmt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "yaml");
}

#[cfg(unix)]
#[test]
fn test_run_json_payload() {
    let env = TestEnv::new();
    env.write("secrets.json", "ciphertext");
    let sops = env.fake_sops("printf '{\"token\": \"xyz\", \"port\": 8080}\\n'");

    let output = env
        .cmd()
        .arg("--sops")
        .arg(&sops)
        .args(["--file", "secrets.json", "run", "--", "sh", "-c", "echo $token:$port"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "xyz:8080");
}

#[cfg(unix)]
#[test]
fn test_run_unstartable_command_reports_and_fails() {
    let env = TestEnv::new();
    env.write(".env.enc", "A=1\n");
    let sops = env.passthrough_sops();

    let output = env.run(&sops, &["satchel-test-no-such-binary"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "failed to start");
}

#[cfg(unix)]
#[test]
fn test_run_missing_sops_binary_is_decryption_error() {
    let env = TestEnv::new();
    env.write(".env.enc", "A=1\n");

    let output = env.run(std::path::Path::new("satchel-test-no-such-sops"), &["sh", "-c", "true"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
}
