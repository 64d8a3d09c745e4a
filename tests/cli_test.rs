use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[cfg(test)]
mod tests {
    use super::*;

    fn sprm() -> Command {
        Command::cargo_bin("sprm").unwrap()
    }

    #[test]
    fn test_no_arguments_prints_usage_and_exits_1() {
        sprm()
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Usage: sprm"));
    }

    #[test]
    fn test_conflicting_dash_and_underscore_exit_1() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a b.txt");
        fs::write(&file, b"x").unwrap();

        sprm()
            .arg("-d")
            .arg("-u")
            .arg(&file)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("mutually exclusive"));

        // The usage error must fire before any file is touched
        assert!(file.exists());
        assert!(!dir.path().join("a-b.txt").exists());
        assert!(!dir.path().join("a_b.txt").exists());
    }

    #[test]
    fn test_version_exits_0() {
        sprm()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("0.0.1"));
    }

    #[test]
    fn test_help_goes_to_stderr_and_exits_0() {
        for flag in ["-h", "-?", "--help"] {
            sprm()
                .arg(flag)
                .assert()
                .success()
                .stderr(predicate::str::contains("--underscore"))
                .stdout(predicate::str::is_empty());
        }
    }

    #[test]
    fn test_rename_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("my file.txt");
        fs::write(&file, b"content").unwrap();

        sprm().arg("-d").arg(&file).assert().success();

        assert!(!file.exists());
        assert_eq!(
            fs::read(dir.path().join("my-file.txt")).unwrap(),
            b"content"
        );
    }

    #[test]
    fn test_backup_copies_and_reports_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("my file.txt");
        fs::write(&file, b"content").unwrap();

        sprm()
            .arg("-b")
            .arg("-u")
            .arg("-v")
            .arg(&file)
            .assert()
            .success()
            .stdout(
                predicate::str::contains("copied file:")
                    .and(predicate::str::contains("(7 bytes)")),
            );

        assert!(file.exists(), "Backup mode preserves the original");
        assert_eq!(
            fs::read(dir.path().join("my_file.txt")).unwrap(),
            b"content"
        );
    }

    #[test]
    fn test_strip_characters() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a (1).jpg");
        fs::write(&file, b"jpeg").unwrap();

        sprm().arg("-s").arg("()").arg(&file).assert().success();

        assert!(dir.path().join("a1.jpg").exists());
    }

    #[test]
    fn test_interactive_decline_leaves_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("my file.txt");
        fs::write(&file, b"content").unwrap();

        sprm()
            .arg("-i")
            .arg("-d")
            .arg(&file)
            .write_stdin("n\n")
            .assert()
            .success();

        assert!(file.exists(), "Declining must leave the source in place");
        assert!(!dir.path().join("my-file.txt").exists());
    }

    #[test]
    fn test_interactive_accept_renames() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("my file.txt");
        fs::write(&file, b"content").unwrap();

        sprm()
            .arg("-i")
            .arg("-d")
            .arg(&file)
            .write_stdin("y\n")
            .assert()
            .success();

        assert!(!file.exists());
        assert!(dir.path().join("my-file.txt").exists());
    }

    #[test]
    fn test_per_file_error_does_not_change_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does not exist.txt");
        let present = dir.path().join("real file.txt");
        fs::write(&present, b"x").unwrap();

        sprm()
            .arg("-d")
            .arg(&missing)
            .arg(&present)
            .assert()
            .success()
            .stderr(predicate::str::contains("Error:"));

        assert!(
            dir.path().join("real-file.txt").exists(),
            "Files after a failure must still be processed"
        );
    }
}
