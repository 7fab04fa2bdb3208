use colored::{ColoredString, Colorize};

/// Where a path shows up in the status report. Every reported path has
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChange {
    /// Staged for the next commit and identical to the working file
    Staged,
    /// Staged for removal and gone from the working directory
    Removed,
    /// Working content differs from what is staged or committed
    Modified,
    /// Staged or committed but missing from the working directory
    Deleted,
    /// Neither committed nor staged, or staged for removal but present again
    Untracked,
}

/// Report sections, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Staged,
    Removed,
    Modified,
    Untracked,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Staged,
        Section::Removed,
        Section::Modified,
        Section::Untracked,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Section::Staged => "=== Staged Files ===",
            Section::Removed => "=== Removed Files ===",
            Section::Modified => "=== Modified Files ===",
            Section::Untracked => "=== Untracked Files ===",
        }
    }
}

impl FileChange {
    pub fn section(&self) -> Section {
        match self {
            FileChange::Staged => Section::Staged,
            FileChange::Removed => Section::Removed,
            FileChange::Modified | FileChange::Deleted => Section::Modified,
            FileChange::Untracked => Section::Untracked,
        }
    }

    /// The line printed for `path` in its section.
    pub fn label(&self, path: &str) -> String {
        match self {
            FileChange::Modified => format!("{path} (modified)"),
            FileChange::Deleted => format!("{path} (deleted)"),
            FileChange::Staged | FileChange::Removed | FileChange::Untracked => path.to_string(),
        }
    }

    pub fn colored_label(&self, path: &str) -> ColoredString {
        match self {
            FileChange::Staged => self.label(path).green(),
            FileChange::Removed | FileChange::Modified | FileChange::Deleted => {
                self.label(path).red()
            }
            FileChange::Untracked => self.label(path).normal(),
        }
    }
}
