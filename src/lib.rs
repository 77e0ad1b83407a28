pub mod args;
pub mod cell_content;
pub mod emoji;
pub mod error;
pub mod minefield;
pub mod util;

pub use cell_content::CellContent;
pub use error::{FieldError, Result};
pub use minefield::{FieldParams, Minefield};
