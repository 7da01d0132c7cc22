use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod clean;
mod init;
mod stats;
mod translate;

const BIN_NAME: &str = "tscat";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    /// An empty project in a fresh temporary directory.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        // canonical so paths printed by the binary match `root()`
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let target = self.project_dir.join(path);
        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        fs::write(&target, content).with_context(|| format!("writing {}", target.display()))
    }

    /// Write a catalog whose `<TS>` element wraps `body`.
    pub fn write_catalog(&self, path: &str, language: &str, body: &str) -> Result<()> {
        self.write_file(path, &catalog(language, body))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let source = self.project_dir.join(path);
        fs::read_to_string(&source).with_context(|| format!("reading {}", source.display()))
    }

    /// The binary, run from the project root with a clean environment and
    /// colors off.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir)
            .env_clear()
            .env("NO_COLOR", "1");
        cmd
    }

    /// `tscat <subcommand>`; further arguments are appended by the test.
    pub fn tscat(&self, subcommand: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg(subcommand);
        cmd
    }
}

pub fn catalog(language: &str, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"{language}\">\n{body}</TS>\n"
    )
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
