use crate::cell_content::CellContent;
use crate::cell_content::CellContent::*;
use crate::error::{FieldError, Result};
use crate::util::{DIRS_8, i_xy, valid_neighbors, xy_i};
use log::{debug, info};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldParams {
    pub width: u16,
    pub height: u16,
    pub mines: u32,
    /// `None` draws a fresh seed from the OS
    pub seed: Option<u64>,
}

impl FieldParams {
    pub fn total_cells(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.mines > self.total_cells() {
            return Err(FieldError::InvalidParameters {
                width: self.width,
                height: self.height,
                mines: self.mines,
            });
        }
        Ok(())
    }
}

/// A generated field, row-major with the origin at the top left.
///
/// The cells are fixed once [`Minefield::create`] returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minefield {
    params: FieldParams,
    effective_seed: u64,
    cells: Vec<CellContent>,
}

impl Minefield {
    pub fn create(width: u16, height: u16, mines: u32, seed: Option<u64>) -> Result<Self> {
        Self::from_params(FieldParams {
            width,
            height,
            mines,
            seed,
        })
    }

    pub fn from_params(params: FieldParams) -> Result<Self> {
        params.validate()?;

        let effective_seed = match params.seed {
            Some(seed) => seed,
            None => OsRng
                .try_next_u64()
                .map_err(|e| FieldError::Entropy(e.to_string()))?,
        };
        info!(
            "generating {} x {} field with {} mines, seed {effective_seed}",
            params.width, params.height, params.mines
        );

        let mut rng = StdRng::seed_from_u64(effective_seed);
        let mut cells = place_mines(&mut rng, params);
        count_neighbors(&mut cells, params.width, params.height);

        Ok(Self {
            params,
            effective_seed,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.params.width
    }

    pub fn height(&self) -> u16 {
        self.params.height
    }

    pub fn mines(&self) -> u32 {
        self.params.mines
    }

    /// Seed requested by the caller, if any.
    pub fn seed(&self) -> Option<u64> {
        self.params.seed
    }

    /// Seed the generator actually ran with, drawn from the OS when none was requested.
    pub fn effective_seed(&self) -> u64 {
        self.effective_seed
    }

    pub fn params(&self) -> FieldParams {
        self.params
    }

    pub fn get(&self, x: u16, y: u16) -> Option<CellContent> {
        xy_i((x, y), self.width(), self.height()).map(|i| self.cells[i])
    }

    pub fn cells(&self) -> &[CellContent] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellContent]> {
        self.cells.chunks_exact(self.width() as usize)
    }

    pub fn summary(&self) -> String {
        format!(
            "Size: {} x {} Mines: {}",
            self.width(),
            self.height(),
            self.mines()
        )
    }

    pub fn display_field(&self) {
        print!("{self}");
        println!("{}", self.summary());
    }

    /// Writes the plain field, one row of space separated symbols per line.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| FieldError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
        write!(out, "{self}").map_err(io_err)?;
        out.flush().map_err(io_err)?;
        debug!("wrote plain field to {}", path.display());
        Ok(())
    }
}

fn place_mines(rng: &mut impl Rng, params: FieldParams) -> Vec<CellContent> {
    let FieldParams {
        width: w,
        height: h,
        mines,
        ..
    } = params;
    let size = params.total_cells() as usize;

    // optimize for full boards
    if mines as usize == size {
        return vec![Mine; size];
    }

    let mut cells = vec![CellContent::default(); size];
    let mut placed = 0;
    let mut draws = 0u64;
    while placed < mines {
        let x = rng.random_range(0..w);
        let y = rng.random_range(0..h);
        draws += 1;
        let Some(i) = xy_i((x, y), w, h) else {
            continue;
        };
        if !cells[i].is_mine() {
            cells[i] = Mine;
            placed += 1;
        }
    }
    debug!("placed {placed} mines in {draws} draws");
    cells
}

fn count_neighbors(cells: &mut [CellContent], w: u16, h: u16) {
    for i in 0..cells.len() {
        if cells[i].is_mine() {
            continue;
        }
        let Some(cursor) = i_xy(i, w, h) else {
            continue;
        };
        let n = valid_neighbors(&DIRS_8, cursor, w, h)
            .filter_map(|neigh| xy_i(neigh, w, h))
            .filter(|&j| cells[j].is_mine())
            .count();
        cells[i] = Empty(n as u8);
    }
}

impl Display for Minefield {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.rows() {
            for (i, cell) in line.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
