//! CLI tool for virtual-grid - computes the rendered window for a scroll state
//!
//! Usage:
//!   virtual_grid_cli --rows 10000 --columns 10000 --width 1280 --height 640 --top 1000
//!   virtual_grid_cli --config grid.json --width 1280 --height 640 --format cells

#![allow(clippy::exit)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use virtual_grid::render::RainbowCells;
use virtual_grid::{ContainerSize, GridConfig, GridController, GridError, ScrollPosition};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// The full frame as JSON
    Json,
    /// One line: window size, first indices, padding
    Summary,
    /// One line per rendered cell with its rainbow color
    Cells,
}

#[derive(Debug, Parser)]
#[command(name = "virtual_grid_cli", version, about = "Compute the rendered window of a virtual grid")]
struct Args {
    /// JSON grid config (rowCount, columnCount, cellWidth, cellHeight, overScan)
    #[arg(long, conflicts_with_all = ["rows", "columns"])]
    config: Option<PathBuf>,

    /// Total rows (when no config file is given)
    #[arg(long, default_value_t = 10_000)]
    rows: u32,

    /// Total columns (when no config file is given)
    #[arg(long, default_value_t = 10_000)]
    columns: u32,

    #[arg(long)]
    cell_width: Option<f64>,

    #[arg(long)]
    cell_height: Option<f64>,

    #[arg(long)]
    overscan: Option<u32>,

    /// Viewport width in pixels
    #[arg(long)]
    width: f64,

    /// Viewport height in pixels
    #[arg(long)]
    height: f64,

    /// Scroll offset from the top in pixels
    #[arg(long, default_value_t = 0.0)]
    top: f64,

    /// Scroll offset from the left in pixels
    #[arg(long, default_value_t = 0.0)]
    left: f64,

    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,
}

fn load_config(args: &Args) -> Result<GridConfig, GridError> {
    let mut config = match &args.config {
        Some(path) => GridConfig::from_json(&fs::read_to_string(path)?)?,
        None => GridConfig::new(args.rows, args.columns),
    };
    if let Some(width) = args.cell_width {
        config.cell_width = width;
    }
    if let Some(height) = args.cell_height {
        config.cell_height = height;
    }
    if let Some(overscan) = args.overscan {
        config.over_scan = overscan;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), GridError> {
    let config = load_config(args)?;
    let mut grid = GridController::new(config)?;
    let scroll = ScrollPosition::new(args.top, args.left);
    let container = ContainerSize::new(args.width, args.height);

    let mut out = io::stdout().lock();
    match args.format {
        Format::Json => {
            let frame = grid.frame(scroll, container);
            serde_json::to_writer_pretty(&mut out, &frame)?;
            writeln!(out)?;
        }
        Format::Summary => {
            let frame = grid.frame(scroll, container);
            writeln!(
                out,
                "window {}x{} from row {} column {}, padding top {}px left {}px ({} cells)",
                frame.window.rendered_row_count,
                frame.window.rendered_column_count,
                frame.row_offset.first_index,
                frame.column_offset.first_index,
                frame.row_offset.padding,
                frame.column_offset.padding,
                frame.indices.len()
            )?;
        }
        Format::Cells => {
            let rendered = grid.render(scroll, container, &mut RainbowCells::default());
            for cell in &rendered.cells {
                writeln!(out, "{}\t{}\t{}", cell.coord.x, cell.coord.y, cell.content)?;
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
