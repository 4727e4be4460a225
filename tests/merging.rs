//! Three-way merges: fast-forwards, clean merges, and conflicts.

mod common;

use common::{branch_pointer, gitlet, initialized_repository, log_hashes, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_preconditions_fail_in_order(initialized_repository: TempDir) {
    let dir = initialized_repository.path();

    write_file(dir, "b.txt", "pending\n");
    gitlet(dir, &["add", "b.txt"]).assert().success();
    gitlet(dir, &["merge", "main"])
        .assert()
        .success()
        .stdout(predicate::eq("You have uncommitted changes.\n"));

    gitlet(dir, &["rm", "b.txt"]).assert().success();
    gitlet(dir, &["merge", "main"])
        .assert()
        .success()
        .stdout(predicate::eq("Cannot merge a branch with itself.\n"));

    gitlet(dir, &["merge", "ghost"])
        .assert()
        .success()
        .stdout(predicate::eq("A branch with that name does not exist.\n"));
}

#[rstest]
fn merging_an_ancestor_changes_nothing(initialized_repository: TempDir) {
    let dir = initialized_repository.path();

    gitlet(dir, &["branch", "dev"]).assert().success();
    write_file(dir, "a.txt", "hello2\n");
    gitlet(dir, &["add", "a.txt"]).assert().success();
    gitlet(dir, &["commit", "edit on main"]).assert().success();

    gitlet(dir, &["merge", "dev"])
        .assert()
        .success()
        .stdout(predicate::eq("Given branch is an ancestor of the current branch.\n"));

    assert_eq!(log_hashes(dir).len(), 3);
    assert_eq!(read_file(dir, "a.txt"), "hello2\n");
}

#[rstest]
fn merging_a_descendant_fast_forwards(initialized_repository: TempDir) {
    let dir = initialized_repository.path();

    gitlet(dir, &["branch", "dev"]).assert().success();
    write_file(dir, "a.txt", "hello2\n");
    gitlet(dir, &["add", "a.txt"]).assert().success();
    gitlet(dir, &["commit", "edit on main"]).assert().success();
    gitlet(dir, &["switch", "dev"]).assert().success();

    gitlet(dir, &["merge", "main"])
        .assert()
        .success()
        .stdout(predicate::eq("Current branch fast-forwarded.\n"));

    // dev caught up to main's head; no merge commit was created.
    assert_eq!(branch_pointer(dir, "dev"), branch_pointer(dir, "main"));
    assert_eq!(read_file(dir, "a.txt"), "hello2\n");
    assert_eq!(read_file(dir, ".gitlet/index"), "");
}

#[rstest]
fn disjoint_additions_merge_cleanly(initialized_repository: TempDir) {
    let dir = initialized_repository.path();

    gitlet(dir, &["branch", "dev"]).assert().success();

    write_file(dir, "b.txt", "B\n");
    gitlet(dir, &["add", "b.txt"]).assert().success();
    gitlet(dir, &["commit", "add b"]).assert().success();

    gitlet(dir, &["switch", "dev"]).assert().success();
    write_file(dir, "c.txt", "C\n");
    gitlet(dir, &["add", "c.txt"]).assert().success();
    gitlet(dir, &["commit", "add c"]).assert().success();

    gitlet(dir, &["merge", "main"]).assert().success().stdout(predicate::str::is_empty());

    assert_eq!(read_file(dir, "a.txt"), "hello\n");
    assert_eq!(read_file(dir, "b.txt"), "B\n");
    assert_eq!(read_file(dir, "c.txt"), "C\n");

    // The merge commit carries both parents and the combined snapshot.
    gitlet(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^===\ncommit [0-9a-f]{40}\nMerge: [0-9a-f]{7} [0-9a-f]{7}\nDate: [^\n]+\nMerged main into dev\. \n\n",
        ).unwrap());
    assert_eq!(read_file(dir, ".gitlet/index"), "");
}

#[rstest]
fn merge_takes_the_given_side_of_unchanged_files(initialized_repository: TempDir) {
    let dir = initialized_repository.path();

    gitlet(dir, &["branch", "dev"]).assert().success();

    // main edits a.txt; dev leaves it alone but adds its own file.
    write_file(dir, "a.txt", "hello2\n");
    gitlet(dir, &["add", "a.txt"]).assert().success();
    gitlet(dir, &["commit", "edit a on main"]).assert().success();

    gitlet(dir, &["switch", "dev"]).assert().success();
    write_file(dir, "c.txt", "C\n");
    gitlet(dir, &["add", "c.txt"]).assert().success();
    gitlet(dir, &["commit", "add c"]).assert().success();

    gitlet(dir, &["merge", "main"]).assert().success();
    assert_eq!(read_file(dir, "a.txt"), "hello2\n");
}

#[rstest]
fn merge_removes_files_deleted_on_the_given_side(initialized_repository: TempDir) {
    let dir = initialized_repository.path();

    gitlet(dir, &["branch", "dev"]).assert().success();

    gitlet(dir, &["rm", "a.txt"]).assert().success();
    gitlet(dir, &["commit", "drop a on main"]).assert().success();

    gitlet(dir, &["switch", "dev"]).assert().success();
    write_file(dir, "c.txt", "C\n");
    gitlet(dir, &["add", "c.txt"]).assert().success();
    gitlet(dir, &["commit", "add c"]).assert().success();

    gitlet(dir, &["merge", "main"]).assert().success();
    assert!(!dir.join("a.txt").exists());
}

#[rstest]
fn conflicting_edits_produce_marked_contents(initialized_repository: TempDir) {
    let dir = initialized_repository.path();

    gitlet(dir, &["branch", "dev"]).assert().success();

    write_file(dir, "a.txt", "main version\n");
    gitlet(dir, &["add", "a.txt"]).assert().success();
    gitlet(dir, &["commit", "edit a on main"]).assert().success();

    gitlet(dir, &["switch", "dev"]).assert().success();
    write_file(dir, "a.txt", "dev version\n");
    gitlet(dir, &["add", "a.txt"]).assert().success();
    gitlet(dir, &["commit", "edit a on dev"]).assert().success();

    gitlet(dir, &["merge", "main"])
        .assert()
        .success()
        .stdout(predicate::eq("Encountered a merge conflict.\n"));

    assert_eq!(
        read_file(dir, "a.txt"),
        "<<<<<<< HEAD\ndev version\n=======\nmain version\n>>>>>>>\n"
    );

    // The merge commit was still written and dev advanced to it.
    gitlet(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged main into dev."));
    assert_eq!(read_file(dir, ".gitlet/index"), "");
}

#[rstest]
fn merge_refuses_to_clobber_untracked_files(initialized_repository: TempDir) {
    let dir = initialized_repository.path();

    gitlet(dir, &["branch", "dev"]).assert().success();

    write_file(dir, "b.txt", "on main\n");
    gitlet(dir, &["add", "b.txt"]).assert().success();
    gitlet(dir, &["commit", "add b"]).assert().success();

    gitlet(dir, &["switch", "dev"]).assert().success();
    write_file(dir, "c.txt", "C\n");
    gitlet(dir, &["add", "c.txt"]).assert().success();
    gitlet(dir, &["commit", "add c"]).assert().success();

    write_file(dir, "b.txt", "untracked work\n");
    gitlet(dir, &["merge", "main"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        ));

    assert_eq!(read_file(dir, "b.txt"), "untracked work\n");
}
