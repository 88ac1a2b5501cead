//! Installing a text capability when none is compiled in.
//!
//! Capabilities are cargo features, so "installing" one means rebuilding the
//! CLI with the primary capability enabled. The new binary only takes effect
//! on the next invocation.

use std::process::Command;

use crate::error::{Error, Result};

/// Crate that ships the `pagetext` binary.
pub const CLI_CRATE_NAME: &str = "pagetext-cli";

/// Feature that enables the primary capability.
pub const PRIMARY_FEATURE: &str = "lopdf-backend";

/// Something that can make a text capability available for the next run.
pub trait Installer {
    /// Human-readable description of what will be run.
    fn description(&self) -> String;

    /// Perform the installation.
    fn install(&self) -> Result<()>;
}

/// Installs the CLI with the primary capability through `cargo install`.
#[derive(Debug, Clone)]
pub struct CargoInstaller {
    program: String,
    crate_name: String,
    feature: String,
}

impl CargoInstaller {
    /// Installer for `pagetext-cli` with the lopdf capability.
    pub fn new() -> Self {
        Self {
            program: "cargo".to_string(),
            crate_name: CLI_CRATE_NAME.to_string(),
            feature: PRIMARY_FEATURE.to_string(),
        }
    }

    /// Use a different cargo executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to cargo.
    pub fn args(&self) -> Vec<String> {
        vec![
            "install".to_string(),
            self.crate_name.clone(),
            "--features".to_string(),
            self.feature.clone(),
        ]
    }
}

impl Default for CargoInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer for CargoInstaller {
    fn description(&self) -> String {
        format!("{} {}", self.program, self.args().join(" "))
    }

    fn install(&self) -> Result<()> {
        log::info!("Running {}", self.description());

        let status = Command::new(&self.program)
            .args(self.args())
            .status()
            .map_err(|e| Error::Install(format!("cannot run {}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::Install(format!(
                "{} exited with {}",
                self.description(),
                status
            )))
        }
    }
}
