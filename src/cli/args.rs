//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tscat commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Validate catalogs (empty sources, placeholders, coverage, etc.)
//! - `clean`: Remove duplicate and obsolete entries from catalogs
//! - `translate`: Resolve one string through the installed catalogs
//! - `stats`: Print translation coverage per catalog
//! - `init`: Initialize tscat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Directory to scan for catalogs (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CleanRule {
    Duplicate,
    Obsolete,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Rules to clean (default: all)
    /// Can be specified multiple times: --rules duplicate --rules obsolete
    #[arg(long, value_enum)]
    pub rules: Vec<CleanRule>,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Context name (usually the UI class)
    pub context: String,

    /// Source text to look up
    pub source: String,

    /// Target locale (default: system locale, then the primary locale)
    #[arg(long, short)]
    pub locale: Option<String>,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Positional placeholder value ({0}, {1}, {}); repeatable
    #[arg(long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,

    /// Named placeholder value; repeatable
    #[arg(long = "named", value_name = "NAME=VALUE", value_parser = parse_named_arg)]
    pub named: Vec<(String, String)>,

    /// Count for plural (numerus) messages; replaces %n
    #[arg(short = 'n', long = "count")]
    pub count: Option<u64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (empty sources, placeholder mismatches, missing translations)
    Check(CheckCommand),
    /// Remove duplicate or obsolete entries from catalogs
    Clean(CleanCommand),
    /// Resolve a string the way the application would
    Translate(TranslateCommand),
    /// Show translation coverage per catalog
    Stats(StatsCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}

fn parse_named_arg(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, arg)) if !name.is_empty() => Ok((name.to_string(), arg.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{value}'")),
    }
}
