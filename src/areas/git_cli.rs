use crate::artifacts::status::backend::{GitBackend, RefreshFuture, RefreshMode, StatusOptions};
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::repo_status::{Divergence, RepoStatus};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const GIT: &str = "git";
const DETACHED_BRANCH: &str = "(detached)";
const REFERENCE_CANDIDATES: [&str; 3] = ["main", "master", "develop"];

/// [`GitBackend`] driving the `git` executable found on `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        GitCli
    }

    fn run(&self, path: &Path, args: &[&str]) -> anyhow::Result<Output> {
        log::debug!("$ git {} (in {})", args.join(" "), path.display());

        Command::new(GIT)
            .current_dir(path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to run git {}", args.join(" ")))
    }

    /// Run git and return its trimmed stdout, failing on a non-zero exit
    fn run_checked(&self, path: &Path, args: &[&str]) -> anyhow::Result<String> {
        let output = self.run(path, args)?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }

    fn succeeds(&self, path: &Path, args: &[&str]) -> bool {
        self.run(path, args)
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn branch(&self, path: &Path) -> anyhow::Result<String> {
        let branch = self.run_checked(path, &["branch", "--show-current"])?;

        if branch.is_empty() {
            Ok(DETACHED_BRANCH.to_string())
        } else {
            Ok(branch)
        }
    }

    fn remote_count(&self, path: &Path) -> anyhow::Result<usize> {
        let remotes = self.run_checked(path, &["remote"])?;

        Ok(remotes.lines().filter(|line| !line.trim().is_empty()).count())
    }

    fn divergence(&self, path: &Path, other: &str) -> Divergence {
        let range = format!("{other}...HEAD");

        self.run_checked(path, &["rev-list", "--count", "--left-right", &range])
            .ok()
            .and_then(|counts| parse_left_right(&counts))
            .unwrap_or_default()
    }

    fn reference_divergence(&self, path: &Path, reference: Option<&str>) -> Divergence {
        let reference = match reference {
            Some(reference) => reference.to_string(),
            None => match self.default_branch(path) {
                Some(reference) => reference,
                None => return Divergence::Unknown,
            },
        };

        let commit = format!("{reference}^{{commit}}");
        if !self.succeeds(path, &["rev-parse", "--verify", "--quiet", &commit]) {
            log::debug!("reference {} not found in {}", reference, path.display());
            return Divergence::Unknown;
        }

        if !self.succeeds(path, &["merge-base", &reference, "HEAD"]) {
            log::debug!(
                "no common ancestor between HEAD and {} in {}",
                reference,
                path.display()
            );
            return Divergence::Unknown;
        }

        self.divergence(path, &reference)
    }

    /// Branch other branches are compared against: the remote's HEAD, else the first
    /// conventional name that exists locally or on origin
    fn default_branch(&self, path: &Path) -> Option<String> {
        if let Ok(head) =
            self.run_checked(path, &["symbolic-ref", "--short", "refs/remotes/origin/HEAD"])
            && !head.is_empty()
        {
            return Some(head);
        }

        REFERENCE_CANDIDATES.iter().find_map(|candidate| {
            let remote = format!("origin/{candidate}");
            [candidate.to_string(), remote].into_iter().find(|name| {
                self.succeeds(path, &["rev-parse", "--verify", "--quiet", name])
            })
        })
    }

    fn changes(&self, path: &Path) -> anyhow::Result<Vec<FileChange>> {
        let porcelain =
            self.run_checked(path, &["status", "--porcelain=v1", "--untracked-files=all"])?;

        porcelain.lines().map(FileChange::try_parse).collect()
    }
}

impl GitBackend for GitCli {
    fn status(&self, path: &Path, options: &StatusOptions) -> anyhow::Result<RepoStatus> {
        let branch = self.branch(path)?;
        let remote_count = self.remote_count(path)?;
        let changes = self.changes(path)?;

        let remote = if remote_count == 0 {
            Divergence::Unknown
        } else {
            self.divergence(path, "@{upstream}")
        };

        let reference = options
            .compare_reference
            .then(|| self.reference_divergence(path, options.reference_branch.as_deref()));

        Ok(RepoStatus::new(
            branch,
            remote_count,
            remote,
            reference,
            changes,
        ))
    }

    fn refresh(&self, path: PathBuf, mode: RefreshMode) -> RefreshFuture {
        Box::pin(async move {
            let args: &[&str] = match mode {
                RefreshMode::None => return Ok(()),
                RefreshMode::Fetch => &["fetch"],
                RefreshMode::FetchAll => &["fetch", "--all"],
                RefreshMode::Pull => &["pull", "--ff-only"],
            };

            log::debug!("$ git {} (in {})", args.join(" "), path.display());

            let output = tokio::process::Command::new(GIT)
                .current_dir(&path)
                .args(args)
                .env("GIT_TERMINAL_PROMPT", "0")
                .stdin(Stdio::null())
                .output()
                .await
                .with_context(|| format!("failed to run git {}", args.join(" ")))?;

            if !output.status.success() {
                anyhow::bail!(
                    "git {} failed: {}",
                    args.join(" "),
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }

            Ok(())
        })
    }
}

/// Parse `rev-list --left-right --count <other>...HEAD` output: `<behind>\t<ahead>`
fn parse_left_right(counts: &str) -> Option<Divergence> {
    let mut fields = counts.split_whitespace();
    let behind = fields.next()?.parse().ok()?;
    let ahead = fields.next()?.parse().ok()?;

    if fields.next().is_some() {
        return None;
    }

    Some(Divergence::Known { ahead, behind })
}
