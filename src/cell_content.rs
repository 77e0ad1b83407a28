use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    /// Number of mines among the 8 neighbors
    Empty(u8),
    Mine,
}

impl CellContent {
    pub fn is_mine(self) -> bool {
        self == Self::Mine
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty(0)
    }
}

impl Display for CellContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(neighbor_mines) => write!(f, "{neighbor_mines}"),
            Self::Mine => f.write_str("*"),
        }
    }
}
