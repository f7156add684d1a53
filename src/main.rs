//! Planimeter CLI - area calculator for plane figures
//!
//! Usage: planimeter <COMMAND>
//!
//! Commands:
//!   rect    Area of a rectangle
//!   square  Area of a square
//!   circle  Area of a circle

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use planimeter::cli::{Cli, Commands};
use planimeter::{AreaCalculator, Circle, Rectangle, Square};

/// Machine-readable output for `--json` mode
#[derive(Debug, Serialize)]
struct AreaReport {
    shape: &'static str,
    area: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let calculator = AreaCalculator::new();

    let report = match cli.command {
        Commands::Rect { width, height } => {
            let rect = Rectangle::new(width, height)?;
            AreaReport {
                shape: "rectangle",
                area: calculator.area(&rect),
            }
        }
        Commands::Square { side } => {
            let square = Square::new(side)?;
            AreaReport {
                shape: "square",
                area: calculator.area(&square),
            }
        }
        Commands::Circle { radius } => {
            let circle = Circle::new(radius)?;
            AreaReport {
                shape: "circle",
                area: calculator.area(&circle),
            }
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("area: {}", report.area);
    }

    Ok(())
}
