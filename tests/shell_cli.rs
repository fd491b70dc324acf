// Scripted sessions against `tg shell` via piped stdin. The shell must
// surface notices for bad input and keep the session alive until `ex`.
use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use assert_cmd::Command;

fn make_fixture() -> assert_fs::TempDir {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    tmp.child("titlegraph.toml")
        .write_str(
            "keywords_file = \"keywords.txt\"\n\
             exclusions_file = \"skippedwords.txt\"\n\
             collections_file = \"collections.txt\"\n\
             feed_dir = \"feeds\"\n\
             \n\
             [scan]\n\
             trim_floor = 1\n\
             \n\
             [report]\n\
             output_file = \"output.txt\"\n\
             link_base = \"https://example.test/\"\n",
        )
        .expect("write config");

    tmp.child("feeds/games/hot.jsonl")
        .write_str("{\"title\": \"indie game of the year\", \"id\": \"g1\"}\n")
        .expect("write hot feed");

    tmp
}

#[test]
fn session_adds_terms_scans_and_exits() {
    let tmp = make_fixture();

    Command::cargo_bin("tg")
        .expect("bin")
        .current_dir(tmp.path())
        .args(["--no-color", "shell"])
        .write_stdin("as games\nak game\nks\nex\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("collection 'games' added to the list."))
        .stdout(predicate::str::contains("game: 1 matches"))
        .stdout(predicate::str::contains("\thttps://example.test/g1"))
        .stdout(predicate::str::contains("exit"));
}

#[test]
fn duplicate_add_and_missing_delete_are_notices() {
    let tmp = make_fixture();

    Command::cargo_bin("tg")
        .expect("bin")
        .current_dir(tmp.path())
        .args(["--no-color", "shell"])
        .write_stdin("ak foo\nak foo\ndk bar\nex\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword 'foo' is already in the list"))
        .stdout(predicate::str::contains("keyword 'bar' is not in the list"));
}

#[test]
fn invalid_command_does_not_end_the_session() {
    let tmp = make_fixture();

    Command::cargo_bin("tg")
        .expect("bin")
        .current_dir(tmp.path())
        .args(["--no-color", "shell"])
        .write_stdin("nonsense\npw\nex\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid input"))
        .stdout(predicate::str::contains("Skipped Words:"));
}

#[test]
fn save_report_from_the_shell() {
    let tmp = make_fixture();

    Command::cargo_bin("tg")
        .expect("bin")
        .current_dir(tmp.path())
        .args(["--no-color", "shell"])
        .write_stdin("as games\nbs\nsf\nex\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("report saved to"));

    let report = std::fs::read_to_string(tmp.path().join("output.txt")).expect("report");
    assert!(report.contains("games:"), "missing banner:\n{report}");
    assert!(report.contains("indie: 1"), "missing counts:\n{report}");
}
