use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USERNAME: &str = "wazuh-wui";
pub const TEST_PASSWORD: &str = "test-password";
pub const TEST_TOKEN: &str = "test-token";

/// Mounts a successful authentication endpoint.
pub async fn mount_auth(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/security/user/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"token": TEST_TOKEN},
            "error": 0
        })))
        .mount(server)
        .await;
}

/// Run the CLI binary against a manager URL, with credentials from the
/// environment.
pub fn run_cli(args: &[&str], url: &str) -> Output {
    run_cli_with_env(args, url, &[])
}

/// Like [`run_cli`], with extra environment variables set.
pub fn run_cli_with_env(args: &[&str], url: &str, vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wazuh"));
    cmd.args(args);
    cmd.env("WAZUH_URL", url);
    cmd.env("WAZUH_USERNAME", TEST_USERNAME);
    cmd.env("WAZUH_PASSWORD", TEST_PASSWORD);
    cmd.env_remove("WAZUH_INSECURE");
    cmd.env_remove("RUST_LOG");
    cmd.envs(vars.iter().copied());
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], url: &str) -> String {
    let output = run_cli(args, url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
