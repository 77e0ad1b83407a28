use crate::minefield::FieldParams;
use clap::Parser;
use std::path::PathBuf;

/// Generate a minesweeper field and export it as text or Discord emoji
#[derive(Parser, Clone, Default, Debug)]
#[command(version, about, long_about = None)]
pub struct FieldArgs {
    /// width
    #[arg(short = 'x', long, default_value_t = 8)]
    pub width: u16,
    /// height, defaults to the width
    #[arg(short = 'y', long)]
    pub height: Option<u16>,
    /// amount of mines
    #[arg(short, long, default_value_t = 15)]
    pub mines: u32,
    /// seed for a reproducible field
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// write the emoji grid to this file
    #[arg(long)]
    pub emoji_out: Option<PathBuf>,
    /// write the plain field to this file
    #[arg(long)]
    pub field_out: Option<PathBuf>,
    /// don't wrap the emoji in spoilers
    #[arg(long)]
    pub no_spoilers: bool,
    /// don't print the grid
    #[arg(long)]
    pub no_display: bool,
    /// enable debug messages
    #[arg(short, long)]
    pub debug: bool,
}

impl FieldArgs {
    pub fn params(&self) -> FieldParams {
        FieldParams {
            width: self.width,
            height: self.height.unwrap_or(self.width),
            mines: self.mines,
            seed: self.seed,
        }
    }

    pub fn spoilers(&self) -> bool {
        !self.no_spoilers
    }
}
