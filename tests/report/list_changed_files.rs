use crate::common::command::{
    clone_repository, create_origin, git, origins_dir, rgst_stdout, workspace_dir,
};
use crate::common::file::write_generated_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_changed_files(
    workspace_dir: TempDir,
    origins_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let origin = create_origin(origins_dir.path(), "docs");
    let repository = clone_repository(&origin, &workspace_dir.path().join("docs"));
    write_generated_file(&repository, "README.md");
    write_generated_file(&repository, "staged.md");
    git(&repository, &["add", "staged.md"]);

    let actual_output = rgst_stdout(workspace_dir.path(), &["--files"])?;
    let lines = actual_output.lines().collect::<Vec<_>>();
    let repository_line = lines
        .iter()
        .position(|line| line.contains("|-- docs"))
        .expect("repository line");

    let mut files = lines[repository_line + 1..]
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>();
    files.sort();
    assert_eq!(
        files,
        vec![
            format!("{} M README.md", " ".repeat(6)),
            format!("{}A  staged.md", " ".repeat(6)),
        ]
    );
    assert!(lines[repository_line].ends_with("master ↑0 ↓0 +1 -0 ~0 x1"));

    let without_files = rgst_stdout(workspace_dir.path(), &[])?;
    assert_eq!(without_files.lines().count(), 2);

    Ok(())
}
