use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// A fresh repository with `a.txt = hello\n` committed as `add a`.
#[fixture]
pub fn initialized_repository(repository_dir: TempDir) -> TempDir {
    gitlet(repository_dir.path(), &["init"]).assert().success();

    super::file::write_file(repository_dir.path(), "a.txt", "hello\n");
    gitlet(repository_dir.path(), &["add", "a.txt"]).assert().success();
    gitlet(repository_dir.path(), &["commit", "add a"]).assert().success();

    repository_dir
}

pub fn gitlet(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("failed to find gitlet binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Commit hashes printed by `log`, newest first.
pub fn log_hashes(dir: &Path) -> Vec<String> {
    let output = gitlet(dir, &["log"]).output().expect("failed to run log");
    let stdout = String::from_utf8(output.stdout).expect("log output is not UTF-8");

    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(|hash| hash.to_string())
        .collect()
}

/// Contents of a branch pointer file.
pub fn branch_pointer(dir: &Path, branch: &str) -> String {
    super::file::read_file(dir, &format!(".gitlet/branch_pointers/{branch}"))
}
