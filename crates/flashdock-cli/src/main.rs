#![forbid(unsafe_code)]

//! Native harness for the launcher core: create and inspect profile files,
//! and replay a scripted launch → play → exit session without a browser.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use flashdock_profile::{file_type, FileStore, GameId, Profile, ProfileStore};
use flashdock_scratch::{MemScratch, Origin, ScratchStore};
use flashdock_shell::{Catalog, FixedPicker, LoadOutcome, MemNav, Navigator, Shell, SystemClock};

#[derive(Debug, Parser)]
#[command(about = "Profile-file tool and scripted session runner for the flashdock launcher core")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a new, empty profile file.
    New {
        /// Profile name (whitespace is trimmed; must not be empty).
        #[arg(long)]
        name: String,

        /// Destination file; the conventional extension is `.fp`.
        path: PathBuf,
    },

    /// Print a profile file's name and per-game records.
    Inspect { path: PathBuf },

    /// Replay a scripted session: load a profile, launch a game, apply the
    /// scratch writes the game would make, then exit and harvest.
    Play {
        /// Library feed (JSON array of `{id, name}`).
        #[arg(long)]
        catalog: PathBuf,

        /// Profile file to load and update.
        #[arg(long)]
        profile: PathBuf,

        /// Game id to launch.
        #[arg(long)]
        game: String,

        /// Origin prefix the emulator uses for its scratch keys.
        #[arg(long, default_value = "flashdock.local")]
        origin: String,

        /// Scratch entries written during play, as `KEY=VALUE` (repeatable).
        /// Keys must carry the origin prefix to be harvested.
        #[arg(long = "write", value_name = "KEY=VALUE")]
        writes: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Args::parse().command {
        Command::New { name, path } => cmd_new(&name, path),
        Command::Inspect { path } => cmd_inspect(path),
        Command::Play {
            catalog,
            profile,
            game,
            origin,
            writes,
        } => cmd_play(catalog, profile, &game, origin, &writes),
    }
}

fn cmd_new(name: &str, path: PathBuf) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("profile name must not be empty");
    }
    let mut store = FileStore::new(&path);
    store
        .save(&Profile::new(name))
        .with_context(|| format!("writing {}", path.display()))?;
    println!(
        "created profile {name:?} at {} ({})",
        path.display(),
        file_type::MIME
    );
    Ok(())
}

fn cmd_inspect(path: PathBuf) -> Result<()> {
    let profile = FileStore::new(&path)
        .load()
        .with_context(|| format!("reading {}", path.display()))?;
    println!("profile: {}", profile.name);
    if profile.games.is_empty() {
        println!("no games played yet");
        return Ok(());
    }
    println!("{:<24} {:>16} {:>10}", "game", "last played (ms)", "save keys");
    for (id, record) in &profile.games {
        let keys = record.data.as_ref().map_or(0, |data| data.len());
        println!("{:<24} {:>16} {:>10}", id.as_str(), record.time, keys);
    }
    Ok(())
}

fn cmd_play(
    catalog: PathBuf,
    profile: PathBuf,
    game: &str,
    origin: String,
    writes: &[String],
) -> Result<()> {
    let feed = fs::read_to_string(&catalog)
        .with_context(|| format!("reading {}", catalog.display()))?;
    let catalog = Catalog::from_json(&feed)?;

    let mut shell = Shell::new(
        catalog,
        Origin::new(origin),
        MemNav::new(),
        MemScratch::new(),
        FixedPicker::opening(&profile),
        SystemClock,
    );
    match shell.load_profile()? {
        LoadOutcome::Loaded => {}
        LoadOutcome::Dismissed => bail!("profile picker unexpectedly dismissed"),
    }

    let id = GameId::from(game);
    shell.launch(&id)?;
    let restored = shell.scratch().len();
    println!("launched {game}: {restored} scratch entries restored");

    for write in writes {
        let (key, value) = write
            .split_once('=')
            .with_context(|| format!("malformed --write {write:?}, expected KEY=VALUE"))?;
        shell.scratch_mut().set(key, value)?;
    }
    if !writes.is_empty() {
        shell.on_scratch_change()?;
    }

    // Close the game the way the browser does: by clearing the hash.
    shell.nav_mut().set_hash("");
    shell.on_hash_change()?;

    let profile = shell.profile().context("profile disappeared mid-session")?;
    match profile.games.get(&id).and_then(|record| record.data.as_ref()) {
        Some(data) => println!("session over: {} save keys harvested", data.len()),
        None => println!("session over: no save data recorded"),
    }
    Ok(())
}
