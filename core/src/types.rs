/// Tiles per grid row, the grid is always square.
pub type GridSide = u8;

/// Flat row-major index of a tile.
pub type TileIndex = u16;

/// Count type used for total tiles and pattern sizes.
pub type TileCount = u16;

/// Durations are whole milliseconds.
pub type Millis = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (GridSide, GridSide);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: GridSide, b: GridSide) -> TileCount {
    let a = a as TileCount;
    let b = b as TileCount;
    a.saturating_mul(b)
}

/// Coordinates of `index` on a grid with `side` tiles per row.
pub const fn tile_coords(index: TileIndex, side: GridSide) -> Coord2 {
    let side = side as TileIndex;
    ((index % side) as GridSide, (index / side) as GridSide)
}

/// Inverse of [`tile_coords`].
pub const fn tile_index((x, y): Coord2, side: GridSide) -> TileIndex {
    (y as TileIndex) * (side as TileIndex) + (x as TileIndex)
}
