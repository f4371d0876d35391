//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keyprops command running in the project root.
    ///
    /// Path environment variables are cleared so the host environment
    /// cannot leak into the test, and NO_COLOR keeps output plain.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keyprops").expect("failed to find keyprops binary");
        cmd.env_remove("KEYPROPS_PROJECT");
        cmd.env_remove("KEYPROPS_PROPERTIES");
        cmd.env_remove("KEYPROPS_BASE_DIR");
        cmd.env_remove("KEYPROPS_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `keyprops check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run keyprops check")
    }

    /// Shortcut for `keyprops show`.
    pub fn show(&self) -> Output {
        self.cmd()
            .arg("show")
            .output()
            .expect("failed to run keyprops show")
    }

    /// Shortcut for `keyprops show --json`, parsed.
    pub fn show_json(&self, extra: &[&str]) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["show", "--json"])
            .args(extra)
            .output()
            .expect("failed to run keyprops show --json");
        super::assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("show --json did not print JSON")
    }
}
