//! One face of the cube: a size x size grid of tiles.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{CubeError, Direction, Position, Side, Tile};

use super::slice::Slice;

/// A size x size row-major tile grid.
///
/// Every cell holds exactly one tile at all times after construction.
/// Renderers read faces through [`row`](Face::row), [`column`](Face::column)
/// and [`get`](Face::get); all mutation goes through the owning
/// [`Cube`](crate::cube::Cube), which is the single writer.
///
/// The grid is an `im::Vector`, so cloning a face for a snapshot is cheap
/// regardless of cube size.
#[derive(Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: serde::Serialize + Clone",
    deserialize = "P: serde::Deserialize<'de> + Clone"
))]
pub struct Face<P> {
    size: usize,
    grid: Vector<Tile<P>>,
}

// `im::Vector`'s trait impls all require `A: Clone`, so these cannot be
// derived with the bounds a derive would pick.
impl<P: Clone + PartialEq> PartialEq for Face<P> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.grid == other.grid
    }
}

impl<P: Clone + Eq> Eq for Face<P> {}

impl<P: Clone + std::fmt::Debug> std::fmt::Debug for Face<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Face")
            .field("size", &self.size)
            .field("grid", &self.grid)
            .finish()
    }
}

impl<P: Clone> Face<P> {
    /// Build a solved face: every tile carries this face's color.
    pub(crate) fn solved<F>(side: Side, size: usize, tilefn: &mut F) -> Self
    where
        F: FnMut(Side, Position) -> P,
    {
        let mut grid = Vector::new();
        for y in 0..size {
            for x in 0..size {
                let home = Position::new(x, y);
                let payload = tilefn(side, home);
                grid.push_back(Tile::new(side, home, payload));
            }
        }
        Self { size, grid }
    }

    /// Build a face from an explicit color grid, validating its shape.
    pub(crate) fn from_rows<F>(
        side: Side,
        expected: usize,
        rows: &[Vec<Side>],
        tilefn: &mut F,
    ) -> Result<Self, CubeError>
    where
        F: FnMut(Side, Position) -> P,
    {
        let malformed = |rows_seen: usize, cols_seen: usize| CubeError::MalformedFace {
            side,
            expected,
            rows: rows_seen,
            cols: cols_seen,
        };
        if rows.len() != expected {
            return Err(malformed(rows.len(), rows.first().map_or(0, Vec::len)));
        }
        let mut grid = Vector::new();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(malformed(rows.len(), row.len()));
            }
            for (x, &color) in row.iter().enumerate() {
                let home = Position::new(x, y);
                let payload = tilefn(color, home);
                grid.push_back(Tile::new(color, home, payload));
            }
        }
        Ok(Self {
            size: expected,
            grid,
        })
    }

    /// Edge length of the face.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at column `x`, row `y`, if in range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Tile<P>> {
        if x < self.size && y < self.size {
            self.grid.get(y * self.size + x)
        } else {
            None
        }
    }

    /// Tile at a position, if in range.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<&Tile<P>> {
        self.get(pos.x, pos.y)
    }

    /// Iterate over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile<P>> {
        self.grid.iter()
    }

    /// Fresh snapshot of row `y`, in column order.
    ///
    /// Does not mutate the grid. Panics if `y` is out of range.
    #[must_use]
    pub fn row(&self, y: usize) -> Slice<P> {
        assert!(y < self.size, "row {} out of range for size {}", y, self.size);
        let tiles = (0..self.size)
            .map(|x| self.grid[y * self.size + x].clone())
            .collect();
        Slice::from_tiles(tiles)
    }

    /// Fresh snapshot of column `x`, in row order.
    ///
    /// Does not mutate the grid. Panics if `x` is out of range.
    #[must_use]
    pub fn column(&self, x: usize) -> Slice<P> {
        assert!(x < self.size, "column {} out of range for size {}", x, self.size);
        let tiles = (0..self.size)
            .map(|y| self.grid[y * self.size + x].clone())
            .collect();
        Slice::from_tiles(tiles)
    }

    /// `Some(color)` when every tile on the face shares one color.
    #[must_use]
    pub fn uniform_color(&self) -> Option<Side> {
        let first = self.grid.get(0)?.color();
        self.grid
            .iter()
            .all(|tile| tile.color() == first)
            .then_some(first)
    }

    /// Overwrite row `y` positionally with `slice`.
    pub(crate) fn merge_row(&mut self, slice: Slice<P>, y: usize) {
        debug_assert_eq!(slice.len(), self.size);
        for (x, tile) in slice.into_iter().enumerate() {
            self.grid.set(y * self.size + x, tile);
        }
    }

    /// Overwrite column `x` positionally with `slice`.
    pub(crate) fn merge_column(&mut self, slice: Slice<P>, x: usize) {
        debug_assert_eq!(slice.len(), self.size);
        for (y, tile) in slice.into_iter().enumerate() {
            self.grid.set(y * self.size + x, tile);
        }
    }

    /// Permute the whole grid by a 90 degree turn, adjusting every tile's
    /// visual rotation by +90 (clockwise) or -90 (anticlockwise).
    ///
    /// Clockwise maps `old[row][col]` to `new[col][size-1-row]`;
    /// anticlockwise maps `old[col][size-1-row]` to `new[row][col]`.
    pub(crate) fn spin(&mut self, direction: Direction) {
        let size = self.size;
        let angle = i16::from(direction.signum()) * 90;
        let mut next = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let (src_row, src_col) = match direction {
                    Direction::Clockwise => (size - 1 - col, row),
                    Direction::AntiClockwise => (col, size - 1 - row),
                };
                let mut tile = self.grid[src_row * size + src_col].clone();
                tile.rotate_by(angle);
                next.push(tile);
            }
        }
        self.grid = next.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_payload(_: Side, _: Position) {}

    fn face(size: usize) -> Face<()> {
        Face::solved(Side::Front, size, &mut no_payload)
    }

    fn homes(face: &Face<()>) -> Vec<Position> {
        face.tiles().map(|t| t.home()).collect()
    }

    #[test]
    fn test_solved_face_is_uniform() {
        let face = face(3);
        assert_eq!(face.size(), 3);
        assert_eq!(face.tiles().count(), 9);
        assert_eq!(face.uniform_color(), Some(Side::Front));
    }

    #[test]
    fn test_homes_are_row_major() {
        let face = face(2);
        assert_eq!(
            homes(&face),
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_row_and_column_extraction() {
        let face = face(3);
        let row = face.row(1);
        assert_eq!(row.len(), 3);
        assert!(row.iter().enumerate().all(|(x, t)| t.home() == Position::new(x, 1)));

        let column = face.column(2);
        assert!(column.iter().enumerate().all(|(y, t)| t.home() == Position::new(2, y)));
    }

    #[test]
    fn test_extraction_does_not_mutate() {
        let face = face(3);
        let before = face.clone();
        let _ = face.row(0).rotated_by(180).reversed();
        assert_eq!(face, before);
    }

    #[test]
    fn test_merge_row_overwrites_positionally() {
        let mut face = face(2);
        let replacement = Face::<()>::solved(Side::Back, 2, &mut no_payload).row(0);
        face.merge_row(replacement, 1);
        assert_eq!(face.get(0, 1).unwrap().color(), Side::Back);
        assert_eq!(face.get(1, 1).unwrap().color(), Side::Back);
        assert_eq!(face.get(0, 0).unwrap().color(), Side::Front);
    }

    #[test]
    fn test_merge_column_overwrites_positionally() {
        let mut face = face(2);
        let replacement = Face::<()>::solved(Side::Up, 2, &mut no_payload).column(1);
        face.merge_column(replacement, 0);
        assert_eq!(face.get(0, 0).unwrap().color(), Side::Up);
        assert_eq!(face.get(0, 1).unwrap().color(), Side::Up);
        assert_eq!(face.get(1, 0).unwrap().color(), Side::Front);
    }

    #[test]
    fn test_spin_clockwise_moves_top_left_to_top_right() {
        let mut face = face(3);
        face.spin(Direction::Clockwise);
        let moved = face.get(2, 0).unwrap();
        assert_eq!(moved.home(), Position::new(0, 0));
        assert_eq!(moved.rotation(), 90);
    }

    #[test]
    fn test_spin_anticlockwise_moves_top_left_to_bottom_left() {
        let mut face = face(3);
        face.spin(Direction::AntiClockwise);
        let moved = face.get(0, 2).unwrap();
        assert_eq!(moved.home(), Position::new(0, 0));
        assert_eq!(moved.rotation(), 270);
    }

    #[test]
    fn test_spin_round_trip_restores_grid() {
        let mut face = face(4);
        let before = face.clone();
        face.spin(Direction::Clockwise);
        assert_ne!(face, before);
        face.spin(Direction::AntiClockwise);
        assert_eq!(face, before);
    }

    #[test]
    fn test_four_spins_restore_grid() {
        let mut face = face(3);
        let before = face.clone();
        for _ in 0..4 {
            face.spin(Direction::Clockwise);
        }
        assert_eq!(face, before);
    }

    #[test]
    fn test_from_rows_validates_shape() {
        let good = vec![
            vec![Side::Up, Side::Down],
            vec![Side::Left, Side::Right],
        ];
        let face = Face::<()>::from_rows(Side::Front, 2, &good, &mut no_payload).unwrap();
        assert_eq!(face.get(1, 0).unwrap().color(), Side::Down);

        let ragged = vec![vec![Side::Up, Side::Down], vec![Side::Left]];
        let err = Face::<()>::from_rows(Side::Front, 2, &ragged, &mut no_payload).unwrap_err();
        assert_eq!(
            err,
            CubeError::MalformedFace {
                side: Side::Front,
                expected: 2,
                rows: 2,
                cols: 1,
            }
        );
    }

    #[test]
    fn test_size_one_face() {
        let mut face = face(1);
        face.spin(Direction::Clockwise);
        assert_eq!(face.get(0, 0).unwrap().home(), Position::new(0, 0));
        assert_eq!(face.get(0, 0).unwrap().rotation(), 90);
    }
}
