use crate::common::command::{init_repository, rgst_stdout, run_rgst_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::default_depth(&[], false)]
#[case::one_level(&["-d", "1"], false)]
#[case::two_levels(&["--depth", "2"], true)]
fn limit_scan_depth(
    workspace_dir: TempDir,
    #[case] args: &[&str],
    #[case] nested_listed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    init_repository(&workspace_dir.path().join("top"));
    init_repository(&workspace_dir.path().join("clients").join("nested"));

    let actual_output = rgst_stdout(workspace_dir.path(), args)?;

    assert!(actual_output.contains("|-- top"));
    assert_eq!(actual_output.contains("|-- nested"), nested_listed);
    assert_eq!(actual_output.contains("  |-- clients"), nested_listed);

    Ok(())
}

#[rstest]
fn warn_when_depth_is_clamped(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let deep = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .fold(workspace_dir.path().to_path_buf(), |path, name| path.join(name));
    init_repository(&deep);
    init_repository(&workspace_dir.path().join("a").join("b").join("c").join("d").join("shallow"));

    let assert = run_rgst_command(workspace_dir.path(), &["--depth", "9"])
        .assert()
        .success()
        .stderr(predicate::str::contains("clamped to 5"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(stdout.contains("|-- shallow"));
    assert!(!stdout.contains("|-- f"));

    Ok(())
}
