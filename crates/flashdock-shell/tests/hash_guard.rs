use flashdock_profile::GameId;
use flashdock_scratch::{MemScratch, Origin};
use flashdock_shell::{Catalog, FixedClock, FixedPicker, MemNav, Navigator, Shell};

fn catalog() -> Catalog {
    Catalog::from_json(r#"[{"id":"g1","name":"Gravity One"}]"#).expect("feed parses")
}

fn shell_with_nav(nav: MemNav, picker: FixedPicker) -> Shell<MemNav, MemScratch, FixedPicker, FixedClock> {
    Shell::new(
        catalog(),
        Origin::new("games.test"),
        nav,
        MemScratch::new(),
        picker,
        FixedClock::new(1_000),
    )
}

#[test]
fn boot_clears_a_leftover_hash() {
    let shell = shell_with_nav(MemNav::with_hash("#g1"), FixedPicker::default());
    assert_eq!(shell.nav().hash(), "");
}

#[test]
fn foreign_hash_is_reset_and_closes_the_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut shell = shell_with_nav(
        MemNav::new(),
        FixedPicker::saving_to(dir.path().join("user.fp")),
    );
    shell.create_profile("A").expect("create");
    shell.launch(&GameId::from("g1")).expect("launch");

    // Manual URL edit while a game is open.
    shell.nav_mut().set_hash("#somewhere-else");
    shell.on_hash_change().expect("hash change");

    assert_eq!(shell.nav().hash(), "");
    assert_eq!(shell.current(), None);
    assert_eq!(shell.nav().scrolls(), 1);
}

#[test]
fn mirrored_hash_is_left_alone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut shell = shell_with_nav(
        MemNav::new(),
        FixedPicker::saving_to(dir.path().join("user.fp")),
    );
    shell.create_profile("A").expect("create");
    shell.launch(&GameId::from("g1")).expect("launch");

    // The browser echoes our own assignment back as an event.
    shell.on_hash_change().expect("hash change");

    assert_eq!(shell.nav().hash(), "#g1");
    assert_eq!(shell.current(), Some(&GameId::from("g1")));
    assert_eq!(shell.nav().scrolls(), 0);
}

#[test]
fn any_hash_is_cleared_when_no_profile_is_loaded() {
    let mut shell = shell_with_nav(MemNav::new(), FixedPicker::default());
    shell.nav_mut().set_hash("#g1");
    shell.on_hash_change().expect("hash change");
    assert_eq!(shell.nav().hash(), "");
    // No session to close, so no scroll either.
    assert_eq!(shell.nav().scrolls(), 0);
}

#[test]
fn clearing_the_hash_exits_the_active_game() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut shell = shell_with_nav(
        MemNav::new(),
        FixedPicker::saving_to(dir.path().join("user.fp")),
    );
    shell.create_profile("A").expect("create");
    shell.launch(&GameId::from("g1")).expect("launch");

    shell.nav_mut().set_hash("");
    shell.on_hash_change().expect("hash change");

    assert_eq!(shell.current(), None);
    assert_eq!(shell.nav().scrolls(), 1);
}
