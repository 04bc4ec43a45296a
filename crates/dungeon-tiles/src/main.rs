//! Dungeon tile previewer
//!
//! Classifies an ASCII dungeon map and prints the chosen tile variants.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::style::{Color, Stylize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dt_assets::TilesetRegistry;
use dt_core::{parse_ascii, GameRng, LogicalGrid, Materializer, TileLayer, VariantRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Colored glyph preview, north at the top
    Ascii,
    /// JSON array of tile records
    Json,
}

/// Dungeon tile previewer
#[derive(Parser, Debug)]
#[command(name = "dungeon-tiles")]
#[command(author, version, about = "Classify an ASCII dungeon map into tile variants", long_about = None)]
struct Args {
    /// Map file ('.' room, '#' corridor, '+' door, '>' stairs (drawn as wall), '%' stairs in a room)
    map: PathBuf,

    /// Seed for floor variations (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Tileset mapping file
    #[arg(short = 't', long = "tileset", default_value = "assets/tileset.json")]
    tileset: PathBuf,

    /// Classify rows in parallel
    #[arg(short = 'p', long = "parallel")]
    parallel: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let text = std::fs::read_to_string(&args.map)
        .with_context(|| format!("Failed to read map {}", args.map.display()))?;
    let grid = parse_ascii(&text)
        .with_context(|| format!("Failed to parse map {}", args.map.display()))?;
    let registry = TilesetRegistry::load_from_file(&args.tileset)
        .with_context(|| format!("Failed to load tileset {}", args.tileset.display()))?;
    info!(
        height = grid.height(),
        width = grid.width(),
        "map loaded"
    );

    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    debug!(seed, parallel = args.parallel, "classifying");
    let materializer = Materializer::new(*registry.palette());
    let records = if args.parallel {
        materializer.materialize_level_par(&grid, seed)?
    } else {
        materializer.materialize_level(&grid, &mut GameRng::new(seed))?
    };

    let mut out = io::stdout().lock();
    match args.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
        Format::Ascii => write_preview(&mut out, &grid, records, &registry)?,
    }
    Ok(())
}

/// Print one glyph per cell, north row first
fn write_preview<W: Write>(
    out: &mut W,
    grid: &LogicalGrid,
    records: Vec<VariantRecord>,
    registry: &TilesetRegistry,
) -> Result<()> {
    let layer = TileLayer::from_records(records);
    for render_row in (0..grid.height()).rev() {
        for column in 0..grid.width() {
            let Some(record) = layer.get(render_row, column) else {
                write!(out, " ")?;
                continue;
            };
            let tile = registry.get(record.texture_id)?;
            let color = TilesetRegistry::parse_color(&tile.tui_color).unwrap_or(Color::Reset);
            write!(out, "{}", tile.tui_char.with(color))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
