//! `staychart` CLI — render and inspect occupancy charts from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Render a payload as a plain-text grid (stdin → stdout)
//! curl -s $BACKEND/chart | staychart render
//!
//! # Render from file to file
//! staychart render -i payload.json -o chart.txt
//!
//! # Emit the assembled row model as JSON ("null" for a no-data payload)
//! staychart model -i payload.json
//!
//! # Show occupancy statistics
//! staychart stats -i payload.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use staychart_engine::{assemble_chart, parse_response, CellShape, ChartResponse, RowModel};
use std::io::{self, Read};

/// Content width of one day column in the text grid.
const CELL_WIDTH: usize = 12;
/// Width of the unit-code gutter.
const GUTTER_WIDTH: usize = 12;
/// Separator between day columns.
const SEPARATOR: &str = " | ";

#[derive(Parser)]
#[command(
    name = "staychart",
    version,
    about = "Occupancy chart renderer for hospitality calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the chart as a plain-text grid
    Render {
        /// Input payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Emit the assembled row model as pretty-printed JSON
    Model {
        /// Input payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show occupancy statistics for a payload
    Stats {
        /// Input payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output } => {
            let response = load_response(input.as_deref())?;
            let text = match assemble_chart(&response) {
                Some(model) => render_text(&model),
                None => "No data available.\n".to_string(),
            };
            write_output(output.as_deref(), &text)?;
        }
        Commands::Model { input, output } => {
            let response = load_response(input.as_deref())?;
            let json = match assemble_chart(&response) {
                Some(model) => {
                    serde_json::to_string_pretty(&model).context("Failed to serialize row model")?
                }
                None => "null".to_string(),
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Stats { input } => {
            let response = load_response(input.as_deref())?;
            match assemble_chart(&response) {
                Some(model) => print_stats(&response, &model),
                None => println!("No data available."),
            }
        }
    }

    Ok(())
}

/// Read and parse a payload from a file or stdin.
fn load_response(path: Option<&str>) -> Result<ChartResponse> {
    let json = read_input(path)?;
    parse_response(&json).context("Failed to parse chart payload")
}

/// Render the row model as a fixed-width text grid: a header row of day
/// labels, then one section per category with one row per unit. Merged
/// cells stretch across their colspan.
fn render_text(model: &RowModel) -> String {
    let mut out = String::new();

    let header: Vec<String> = model
        .date_range
        .iter()
        .map(|day| pad(day, CELL_WIDTH))
        .collect();
    out.push_str(&format!(
        "{}{}{}\n",
        " ".repeat(GUTTER_WIDTH),
        SEPARATOR,
        header.join(SEPARATOR)
    ));

    for category in &model.categories {
        out.push_str(&format!("\n== {} ==\n", category.name));
        for unit in &category.units {
            let cells: Vec<String> = unit
                .cells
                .iter()
                .map(|cell| {
                    // A span over k columns owns the k-1 separators between them.
                    let width = cell.colspan * CELL_WIDTH + (cell.colspan - 1) * SEPARATOR.len();
                    pad(&cell.attributes.display_text, width)
                })
                .collect();
            out.push_str(&format!(
                "{}{}{}\n",
                pad(&unit.unit_code, GUTTER_WIDTH),
                SEPARATOR,
                cells.join(SEPARATOR)
            ));
        }
    }

    out
}

/// Truncate or right-pad `text` to exactly `width` characters.
fn pad(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Print summary statistics in the style of `render`-independent tooling:
/// one aligned `label: value` line per figure.
fn print_stats(response: &ChartResponse, model: &RowModel) {
    let units: usize = model.categories.iter().map(|c| c.units.len()).sum();
    let days = model.date_range.len();

    let bookings: usize = response
        .data()
        .map(|data| {
            data.categories
                .iter()
                .flat_map(|c| &c.units)
                .map(|u| u.bookings.len())
                .sum()
        })
        .unwrap_or(0);

    let mut occupied_days = 0;
    let mut fixed = 0;
    let mut moves = 0;
    for cell in model
        .categories
        .iter()
        .flat_map(|c| &c.units)
        .flat_map(|u| &u.cells)
    {
        if cell.attributes.shape != CellShape::Empty {
            occupied_days += cell.colspan;
            if cell.attributes.is_fixed {
                fixed += 1;
            }
            if cell.attributes.is_move_suggestion {
                moves += 1;
            }
        }
    }

    let capacity = units * days;
    let occupancy = if capacity > 0 {
        occupied_days as f64 / capacity as f64 * 100.0
    } else {
        0.0
    };

    println!("Categories:        {}", model.categories.len());
    println!("Units:             {}", units);
    println!("Days:              {}", days);
    println!("Bookings:          {}", bookings);
    println!("Occupied days:     {}", occupied_days);
    println!("Occupancy:         {:.1}%", occupancy);
    println!("Fixed bookings:    {}", fixed);
    println!("Move suggestions:  {}", moves);
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
