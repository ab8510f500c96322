//! Interactive task list manager.
//!
//! Presents a numbered menu over stdin/stdout for viewing, adding,
//! completing, and removing tasks, persisted one per line in a flat text
//! file (`tasks.txt` by default).

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use taskman::io::console::StdConsole;
use taskman::io::store::TaskStore;
use taskman::{logging, menu};

#[derive(Parser)]
#[command(name = "taskman", version, about = "Interactive task list manager")]
struct Cli {
    /// Backing file for the task list.
    #[arg(long, default_value = "tasks.txt")]
    file: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let store = TaskStore::new(cli.file);
    let mut console = StdConsole;
    menu::run(&store, &mut console)
}
