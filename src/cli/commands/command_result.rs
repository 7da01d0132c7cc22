use crate::core::CatalogStats;
use crate::issues::{DuplicateIssue, Issue, ObsoleteIssue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Check,
    Clean,
    Translate,
    Stats,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Clean(CleanSummary),
    Translate(TranslateSummary),
    Stats(StatsSummary),
    Init(InitSummary),
}

impl CommandSummary {
    pub fn kind(&self) -> CommandKind {
        match self {
            CommandSummary::Check => CommandKind::Check,
            CommandSummary::Clean(_) => CommandKind::Clean,
            CommandSummary::Translate(_) => CommandKind::Translate,
            CommandSummary::Stats(_) => CommandKind::Stats,
            CommandSummary::Init(_) => CommandKind::Init,
        }
    }
}

#[derive(Debug)]
pub struct CleanSummary {
    pub duplicate_count: usize,
    pub obsolete_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    /// Entries actually removed (0 in dry-run).
    pub removed_count: usize,
    pub duplicate_issues: Vec<DuplicateIssue>,
    pub obsolete_issues: Vec<ObsoleteIssue>,
}

#[derive(Debug)]
pub struct TranslateSummary {
    /// The resolved, substituted text.
    pub text: String,
    /// Locale the lookup ran for.
    pub locale: String,
    /// Catalog files that were installed, in install order.
    pub installed: Vec<String>,
    /// False when the text is the source fallback.
    pub translated: bool,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
    /// Primary messages each catalog lacks, in the same order as `catalogs`.
    pub lagging: Vec<Option<usize>>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tscat commands
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found by the command.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were checked.
    pub catalog_files_checked: usize,
}
