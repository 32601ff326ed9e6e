use std::fs;

use flashdock_profile::ProfileError;
use flashdock_scratch::{MemScratch, Origin};
use flashdock_shell::{Catalog, FixedClock, FixedPicker, LoadOutcome, MemNav, Shell, ShellError};

fn catalog() -> Catalog {
    Catalog::from_json(r#"[{"id":"g1","name":"Gravity One"}]"#).expect("feed parses")
}

fn shell(picker: FixedPicker) -> Shell<MemNav, MemScratch, FixedPicker, FixedClock> {
    Shell::new(
        catalog(),
        Origin::new("games.test"),
        MemNav::new(),
        MemScratch::new(),
        picker,
        FixedClock::new(1_000),
    )
}

#[test]
fn load_adopts_and_re_saves_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("user.fp");
    let original = r#"{"name":"A","games":{"g1":{"time":100,"data":{"games.test/slot":"v"}}}}"#;
    fs::write(&path, original).expect("seed file");

    let mut shell = shell(FixedPicker::opening(&path));
    let outcome = shell.load_profile().expect("load");
    assert_eq!(outcome, LoadOutcome::Loaded);

    let profile = shell.profile().expect("profile adopted");
    assert_eq!(profile.name, "A");
    assert_eq!(profile.games.len(), 1);

    // The re-save-on-load touch must round-trip the games mapping unchanged.
    let rewritten = fs::read_to_string(&path).expect("file rewritten");
    assert_eq!(rewritten, original);
}

#[test]
fn corrupt_file_fails_the_action_and_adopts_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("user.fp");
    fs::write(&path, "definitely not a profile").expect("seed file");

    let mut shell = shell(FixedPicker::opening(&path));
    let err = shell.load_profile().expect_err("corrupt profile must fail");
    assert!(matches!(
        err,
        ShellError::Profile(ProfileError::Corrupt(_))
    ));
    assert!(shell.profile().is_none());

    // The malformed file is left as-is; no normalization happened.
    assert_eq!(
        fs::read_to_string(&path).expect("file intact"),
        "definitely not a profile"
    );
}

#[test]
fn schema_violations_are_corrupt_too() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("user.fp");
    fs::write(&path, r#"{"name":"A","games":{"g1":{"minutes":5}}}"#).expect("seed file");

    let mut shell = shell(FixedPicker::opening(&path));
    assert!(matches!(
        shell.load_profile(),
        Err(ShellError::Profile(ProfileError::Corrupt(_)))
    ));
    assert!(shell.profile().is_none());
}

#[test]
fn dismissed_picker_loads_nothing() {
    let mut shell = shell(FixedPicker::default());
    let outcome = shell.load_profile().expect("load");
    assert_eq!(outcome, LoadOutcome::Dismissed);
    assert!(shell.profile().is_none());
}
