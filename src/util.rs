/// (dx, dy) offsets of the 8 surrounding cells
pub const DIRS_8: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub type Cursor = (u16, u16);

pub fn xy_i((x, y): Cursor, w: u16, h: u16) -> Option<usize> {
    if w <= x || h <= y {
        None
    } else {
        Some(y as usize * w as usize + x as usize)
    }
}

pub fn i_xy(index: usize, w: u16, h: u16) -> Option<Cursor> {
    let ws = w as usize;
    let hs = h as usize;
    if index >= (ws * hs) {
        None
    } else {
        Some(((index % ws) as u16, (index / ws) as u16))
    }
}

/// Neighbors of `(x, y)` that fall inside a `w` x `h` grid, no wraparound.
pub fn valid_neighbors(
    dirs: &[(i8, i8)],
    (x, y): Cursor,
    w: u16,
    h: u16,
) -> impl Iterator<Item = Cursor> {
    dirs.iter()
        .map(|(dx, dy)| (*dx as i16, *dy as i16))
        .filter_map(move |(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
        .filter(move |(i, j)| w > *i && h > *j)
}
