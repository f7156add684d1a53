//! CLI definition for the `planimeter` binary.

use clap::{Parser, Subcommand};

/// Planimeter - area calculator for plane figures
#[derive(Parser, Debug)]
#[command(name = "planimeter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Area of a rectangle
    // Negative dimensions must reach the domain constructors so the error
    // names the offending dimension instead of clap rejecting "-1" as a flag.
    #[command(allow_negative_numbers = true)]
    Rect {
        /// Width of the rectangle
        width: f64,

        /// Height of the rectangle
        height: f64,
    },

    /// Area of a square
    #[command(allow_negative_numbers = true)]
    Square {
        /// Side length of the square
        side: f64,
    },

    /// Area of a circle
    #[command(allow_negative_numbers = true)]
    Circle {
        /// Radius of the circle
        radius: f64,
    },
}
