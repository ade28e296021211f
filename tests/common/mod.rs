//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_config("[server]\nport=9090\n");
//! fixture.command().arg("run").assert().success();
//! ```

use assert_cmd::Command;
use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A temporary directory holding the config file for one test.
pub struct TestFixture {
    pub temp: assert_fs::TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp: assert_fs::TempDir::new().unwrap(),
        }
    }

    /// Write `content` to the fixture's `.env` config file.
    pub fn with_config(self, content: &str) -> Self {
        self.temp.child(".env").write_str(content).unwrap();
        self
    }

    /// Path of the fixture's config file (which may not exist).
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp.child(".env").path().to_path_buf()
    }

    /// The `overlay-run` binary pointed at this fixture's config file,
    /// with the launcher's own environment settings cleared.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("overlay-run");
        cmd.current_dir(self.temp.path())
            .env_remove("OVERLAY_RUN_CONFIG")
            .env_remove("OVERLAY_RUN_OVERRIDE_ENV")
            .env_remove("OVERLAY_RUN_OVERRIDE_CONFIG")
            .env_remove("OVERLAY_RUN_PREFIX_FLAG")
            .env_remove("OVERLAY_RUN_LOG")
            .arg("--overlay-config")
            .arg(self.config_path());
        cmd
    }
}
