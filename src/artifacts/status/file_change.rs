use colored::Colorize;

/// Classification of the index (staged) column of a porcelain entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum IndexChangeType {
    #[default]
    None,
    Added,
    Removed,
    Modified,
}

impl From<char> for IndexChangeType {
    fn from(code: char) -> Self {
        match code {
            ' ' => IndexChangeType::None,
            // untracked files count as additions
            'A' | '?' => IndexChangeType::Added,
            'D' => IndexChangeType::Removed,
            _ => IndexChangeType::Modified,
        }
    }
}

/// Classification of the working tree column of a porcelain entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WorkspaceChangeType {
    #[default]
    None,
    Untracked,
    Modified,
    Deleted,
    Unmerged,
}

impl From<char> for WorkspaceChangeType {
    fn from(code: char) -> Self {
        match code {
            ' ' => WorkspaceChangeType::None,
            '?' => WorkspaceChangeType::Untracked,
            'D' => WorkspaceChangeType::Deleted,
            'U' => WorkspaceChangeType::Unmerged,
            _ => WorkspaceChangeType::Modified,
        }
    }
}

/// One line of `git status --porcelain=v1`: a two-character code and a path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileChange {
    index_code: char,
    workspace_code: char,
    path: String,
}

impl FileChange {
    pub fn new(index_code: char, workspace_code: char, path: impl Into<String>) -> Self {
        FileChange {
            index_code,
            workspace_code,
            path: path.into(),
        }
    }

    pub fn try_parse(line: &str) -> anyhow::Result<Self> {
        let mut chars = line.chars();

        let (Some(index_code), Some(workspace_code), Some(' ')) =
            (chars.next(), chars.next(), chars.next())
        else {
            anyhow::bail!("malformed porcelain status line: {line:?}");
        };

        let path = chars.as_str();
        if path.is_empty() {
            anyhow::bail!("porcelain status line without a path: {line:?}");
        }

        Ok(FileChange::new(index_code, workspace_code, path))
    }

    pub fn code(&self) -> String {
        format!("{}{}", self.index_code, self.workspace_code)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn index_change(&self) -> IndexChangeType {
        self.index_code.into()
    }

    pub fn workspace_change(&self) -> WorkspaceChangeType {
        self.workspace_code.into()
    }

    pub fn is_unstaged(&self) -> bool {
        self.workspace_change() != WorkspaceChangeType::None
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {}",
            self.index_code.to_string().green(),
            self.workspace_code.to_string().red(),
            self.path
        )
    }
}
