//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an awsenv command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory (no real AWS profiles)
    /// - Current directory set to the test project directory
    /// - awsenv environment overrides removed
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("awsenv").expect("failed to find awsenv binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in ["AWSENV_FILE", "AWSENV_REGION", "AWSENV_PROFILE", "AWSENV_LOG"] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Command pointed at an unreachable AWS endpoint with dummy credentials.
    ///
    /// Any lookup fails fast with a connection error instead of touching a
    /// real account.
    pub fn offline_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("AWS_ACCESS_KEY_ID", "AKIDTEST")
            .env("AWS_SECRET_ACCESS_KEY", "secret")
            .env_remove("AWS_SESSION_TOKEN")
            .env_remove("AWS_PROFILE")
            .env("AWS_REGION", "us-east-1")
            .env("AWS_ENDPOINT_URL", "http://127.0.0.1:9")
            .env("AWS_EC2_METADATA_DISABLED", "true")
            .env("AWS_MAX_ATTEMPTS", "1");
        cmd
    }

    /// Command with dummy credentials whose HTTPS traffic goes to `proxy`.
    ///
    /// No endpoint override, so requests target the real regional endpoint
    /// and can only reach it via the proxy.
    pub fn proxied_cmd(&self, proxy: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("AWS_ACCESS_KEY_ID", "AKIDTEST")
            .env("AWS_SECRET_ACCESS_KEY", "secret")
            .env_remove("AWS_SESSION_TOKEN")
            .env_remove("AWS_PROFILE")
            .env_remove("AWS_ENDPOINT_URL")
            .env_remove("NO_PROXY")
            .env_remove("no_proxy")
            .env("AWS_REGION", "us-east-1")
            .env("AWS_EC2_METADATA_DISABLED", "true")
            .env("AWS_MAX_ATTEMPTS", "1")
            .env("HTTPS_PROXY", proxy);
        cmd
    }

    /// Shortcut for `awsenv list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run awsenv list")
    }

    /// Shortcut for `awsenv list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run awsenv list --json")
    }

    /// Shortcut for `awsenv` with no command (export in shell format).
    pub fn export(&self) -> Output {
        self.cmd().output().expect("failed to run awsenv")
    }
}
