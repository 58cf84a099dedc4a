use crate::common::command::{init_repository, rgst_stdout, workspace_dir};
use crate::common::file::write_generated_file;
use crate::common::line_of;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn count_untracked_files_without_remote(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = init_repository(&workspace_dir.path().join("scratch"));
    write_generated_file(&repository, "first.txt");
    write_generated_file(&repository, "second.txt");

    let actual_output = rgst_stdout(workspace_dir.path(), &[])?;
    let line = line_of(&actual_output, "scratch");

    assert!(
        line.ends_with("master ↑? ↓? +2 -0 ~0 x2"),
        "unexpected line: {line}"
    );

    Ok(())
}
