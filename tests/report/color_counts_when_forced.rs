use crate::common::command::{
    clone_repository, commit_file, create_origin, origins_dir, rgst_stdout, workspace_dir,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::forced("always", true)]
#[case::disabled("never", false)]
#[case::not_a_terminal("auto", false)]
fn color_counts_when_forced(
    workspace_dir: TempDir,
    origins_dir: TempDir,
    #[case] color: &str,
    #[case] colored: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let origin = create_origin(origins_dir.path(), "service");
    let repository = clone_repository(&origin, &workspace_dir.path().join("service"));
    commit_file(&repository, "feature.txt");

    let actual_output = rgst_stdout(workspace_dir.path(), &["--color", color])?;

    assert_eq!(actual_output.contains("\u{1b}[32m↑1"), colored);
    assert!(!actual_output.contains("\u{1b}[31m↓0"));

    Ok(())
}
