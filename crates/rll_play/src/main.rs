use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rll_engine::{LevelStore, TileGrid, codec, editor::EditState};

#[derive(Parser)]
pub struct Cli {
    #[arg(help = "Level store file.", long, default_value = "levels.rll")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List the levels in the store")]
    List,

    #[command(about = "Print a level as rows of tile symbols")]
    Show {
        #[arg(help = "1-based level number")]
        level: usize,
    },

    #[command(about = "Append a new empty level")]
    New {
        #[arg(long, default_value_t = 20)]
        width: i32,

        #[arg(long, default_value_t = 20)]
        height: i32,
    },

    #[command(about = "Delete a level and renumber the rest")]
    Delete {
        #[arg(help = "1-based level number")]
        level: usize,
    },

    #[command(about = "Write a level's encoded text to a standalone file")]
    Export {
        #[arg(help = "1-based level number")]
        level: usize,
        path: PathBuf,
    },

    #[command(about = "Append a level from a standalone encoded file")]
    Import { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let mut store = LevelStore::load(&args.store);

    match args.command {
        Commands::List => {
            if store.is_empty() {
                println!("no levels in {}", store.path().display());
            }
            for (i, record) in store.records().iter().enumerate() {
                println!("{:3}  {}  ({} chars)", i + 1, record.name, record.encoded.len());
            }
        }
        Commands::Show { level } => {
            let record = store.get(index(level, &store)?).context("level not found")?;
            let mut state = EditState::new((1, 1));
            state
                .load_encoded(&record.encoded)
                .with_context(|| format!("cannot decode {}", record.name))?;
            print_grid(state.get_grid());
            let links = state.get_links();
            if !links.is_none() {
                println!("links: {links}");
            }
        }
        Commands::New { width, height } => {
            if width < 1 || height < 1 {
                bail!("level dimensions must be positive");
            }
            let record = store.add(codec::encode(&TileGrid::new((width, height)), None))?;
            println!("added {}", record.name);
        }
        Commands::Delete { level } => {
            store.delete(index(level, &store)?)?;
            println!("deleted level {level}, remaining levels renumbered");
        }
        Commands::Export { level, path } => {
            store.export_level(index(level, &store)?, &path)?;
            println!("exported to {}", path.display());
        }
        Commands::Import { path } => {
            let record = store.import_level(&path)?;
            println!("imported as {}", record.name);
        }
    }
    Ok(())
}

fn index(level: usize, store: &LevelStore) -> anyhow::Result<usize> {
    if level == 0 || level > store.len() {
        bail!("no level {level} (store holds {})", store.len());
    }
    Ok(level - 1)
}

fn print_grid(grid: &TileGrid) {
    for y in 0..grid.get_height() {
        let row: String = (0..grid.get_width()).map(|x| grid.symbol((x, y))).collect();
        println!("{row}");
    }
}
