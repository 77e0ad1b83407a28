//! Emoji rendering of a [`Minefield`] for pasting into Discord.

use crate::cell_content::CellContent;
use crate::error::{FieldError, Result};
use crate::minefield::Minefield;
use log::debug;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const DIGITS: [&str; 9] = [
    "0️⃣", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣",
];
const MINE: &str = "💣";
const SPOILER: &str = "||";

pub fn glyph(cell: CellContent) -> Cow<'static, str> {
    match cell {
        CellContent::Mine => Cow::Borrowed(MINE),
        CellContent::Empty(n) => match DIGITS.get(n as usize) {
            Some(digit) => Cow::Borrowed(digit),
            // can't happen with 8 neighbors, keep the count readable anyway
            None => Cow::Owned(n.to_string()),
        },
    }
}

pub fn spoiler(glyph: &str) -> String {
    format!("{SPOILER}{glyph}{SPOILER}")
}

/// The plain symbols, as strings so they go through [`render`] like the emoji do.
pub fn display_symbols(field: &Minefield) -> Vec<Vec<String>> {
    field
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

pub fn emoji_grid(field: &Minefield, spoilers: bool) -> Vec<Vec<String>> {
    field
        .rows()
        .map(|row| {
            row.iter()
                .map(|&cell| {
                    let g = glyph(cell);
                    if spoilers { spoiler(&g) } else { g.into_owned() }
                })
                .collect()
        })
        .collect()
}

pub fn render(grid: &[Vec<String>]) -> String {
    grid.iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_emoji(field: &Minefield, out: &mut impl Write, spoilers: bool) -> std::io::Result<()> {
    for row in emoji_grid(field, spoilers) {
        // Discord drops a spoiler that ends the line, the trailing space keeps it
        writeln!(out, "{} ", row.join(" "))?;
    }
    writeln!(out, "{}", field.summary())?;
    match field.seed() {
        Some(seed) => writeln!(out, "Seed: {seed}"),
        None => writeln!(out, "Seed: None"),
    }
}

pub fn export_emoji(field: &Minefield, path: impl AsRef<Path>, spoilers: bool) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| FieldError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    write_emoji(field, &mut out, spoilers).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    debug!("wrote emoji field to {} (spoilers: {spoilers})", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_has_a_glyph() {
        let mut seen = Vec::new();
        for cell in (0..=8).map(CellContent::Empty).chain([CellContent::Mine]) {
            let g = glyph(cell);
            assert!(!g.is_empty());
            assert!(!seen.contains(&g), "duplicate glyph {g}");
            seen.push(g);
        }
        assert_eq!(glyph(CellContent::Mine), "💣");
        assert_eq!(glyph(CellContent::Empty(3)), "3️⃣");
        assert_eq!(glyph(CellContent::Empty(9)), "9");
    }

    #[test]
    fn spoiler_wraps_glyph() {
        assert_eq!(spoiler("💣"), "||💣||");
    }

    #[test]
    fn grids_follow_field_shape() {
        let field = Minefield::create(3, 2, 0, None).unwrap();
        assert_eq!(
            emoji_grid(&field, false),
            vec![vec!["0️⃣".to_string(); 3]; 2]
        );
        assert_eq!(
            emoji_grid(&field, true),
            vec![vec!["||0️⃣||".to_string(); 3]; 2]
        );
        assert_eq!(render(&display_symbols(&field)), "0 0 0\n0 0 0");
    }

    #[test]
    fn render_joins_rows() {
        let grid = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];
        assert_eq!(render(&grid), "a b\nc d");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn export_spoilered_zero_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji.txt");
        let field = Minefield::create(2, 2, 0, None).unwrap();
        export_emoji(&field, &path, true).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "||0️⃣|| ||0️⃣|| \n||0️⃣|| ||0️⃣|| \nSize: 2 x 2 Mines: 0\nSeed: None\n"
        );
    }

    #[test]
    fn export_reports_requested_seed() {
        let field = Minefield::create(3, 3, 9, Some(42)).unwrap();
        let mut out = Vec::new();
        write_emoji(&field, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[..3].iter().all(|l| *l == "💣 💣 💣 "));
        assert_eq!(lines[3], "Size: 3 x 3 Mines: 9");
        assert_eq!(lines[4], "Seed: 42");
    }

    #[test]
    fn export_overwrites_and_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji.txt");
        std::fs::write(&path, "old\nold\nold\nold\nold\nold\nold\n").unwrap();
        let field = Minefield::create(1, 1, 1, Some(5)).unwrap();
        export_emoji(&field, &path, false).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "💣 \nSize: 1 x 1 Mines: 1\nSeed: 5\n"
        );

        let bad = dir.path().join("nope").join("emoji.txt");
        assert!(matches!(
            export_emoji(&field, &bad, true),
            Err(FieldError::Io { .. })
        ));
    }
}
