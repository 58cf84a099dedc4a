use anyhow::Result;
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use rgst::areas::git_cli::GitCli;
use rgst::areas::inventory::Inventory;
use rgst::artifacts::core::options::Options;
use rgst::artifacts::status::backend::RefreshMode;
use rgst::artifacts::tree::repo_filter::RepoFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rgst",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Recursive git status for a tree of repositories",
    long_about = "This tool walks a directory tree, finds the git repositories in it \
    and prints one aligned line per folder with the branch, the divergence from the \
    upstream and the number of added, removed, modified and unstaged files.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, default_value = ".", help = "The folder to take the inventory of")]
    path: PathBuf,
    #[arg(
        short,
        long,
        default_value_t = 1,
        help = "How many folder levels below the root to scan (at most 5)"
    )]
    depth: usize,
    #[arg(short, long, help = "Fetch every repository before reporting")]
    fetch: bool,
    #[arg(short = 'a', long, help = "Fetch all remotes of every repository before reporting")]
    fetch_all: bool,
    #[arg(short, long, help = "Pull (fast-forward only) every repository before reporting")]
    pull: bool,
    #[arg(long, help = "List the changed files below each repository")]
    files: bool,
    #[arg(
        short = 'b',
        long,
        help = "Also compare each branch with the reference branch"
    )]
    branch_compare: bool,
    #[arg(
        long,
        value_name = "BRANCH",
        help = "Reference branch to compare with (detected when omitted)"
    )]
    reference: Option<String>,
    #[arg(
        short = 'F',
        long,
        value_name = "REGEX",
        help = "Only report repositories whose path matches"
    )]
    filter: Option<String>,
    #[arg(
        short,
        long,
        requires = "filter",
        help = "Report the repositories whose path does not match the filter instead"
    )]
    invert: bool,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to color the report")]
    color: ColorChoice,
    #[arg(short, long, help = "Log every git invocation to stderr")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn apply(&self) {
        let enabled = match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        colored::control::set_override(enabled);
    }
}

impl Cli {
    fn options(&self) -> Result<Options> {
        Ok(Options {
            path: self.path.clone(),
            depth: Options::clamp_depth(self.depth),
            refresh: RefreshMode::from_flags(self.fetch, self.fetch_all, self.pull),
            show_files: self.files,
            compare_reference: self.branch_compare,
            reference_branch: self.reference.clone(),
            filter: RepoFilter::try_new(self.filter.as_deref(), self.invert)?,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    cli.color.apply();

    let options = cli.options()?;
    let inventory = Inventory::new(options, Box::new(GitCli::new()), Box::new(std::io::stdout()))?;

    inventory.status().await
}
