use std::fmt::{Display, Formatter};

use array2d::Array2D;
use itertools::Itertools;

use crate::core::point::Point;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TileColor {
    #[default]
    Empty,
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// Geometry template of one piece type.
///
/// `relations_to_center[state]` holds the offsets of tiles `1..size` from the
/// reference tile (tile 0) while the piece is in `state`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Shape {
    size: usize,
    color: TileColor,
    relations_to_center: Vec<Vec<Point>>,
}

impl Shape {
    pub fn new(size: usize, color: TileColor, relations: Vec<Vec<Point>>) -> Self {
        debug_assert!(size >= 1, "a shape needs at least its reference tile");
        debug_assert!(
            relations.iter().all(|state| state.len() + 1 == size),
            "every state must list size - 1 relations"
        );

        Self {
            size,
            color,
            relations_to_center: relations,
        }
    }

    /// Builds every state by turning the state 0 offsets a quarter clockwise
    /// around the reference tile, once per state.
    pub fn from_base(color: TileColor, base: &[Point], number_of_states: usize) -> Self {
        let relations = (0..number_of_states)
            .scan(base.to_vec(), |offsets, _| {
                let current = offsets.clone();
                offsets
                    .iter_mut()
                    .for_each(|offset| *offset = offset.rotated_clockwise());
                Some(current)
            })
            .collect();

        Self::new(base.len() + 1, color, relations)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn number_of_states(&self) -> usize {
        self.relations_to_center.len()
    }

    pub fn color(&self) -> TileColor {
        self.color
    }

    pub fn relations_to_center(&self) -> &[Vec<Point>] {
        &self.relations_to_center
    }

    /// Offsets for `state`; empty when the state does not exist.
    pub fn relations(&self, state: usize) -> &[Point] {
        self.relations_to_center
            .get(state)
            .map_or(&[], Vec::as_slice)
    }

    /// Tile offsets of `state` including the reference tile at the origin.
    pub fn tiles(&self, state: usize) -> impl Iterator<Item = Point> + '_ {
        (self.size > 0)
            .then_some(Point::default())
            .into_iter()
            .chain(self.relations(state).iter().copied())
    }

    /// Occupancy grid of `state`, cropped to its bounding box.
    pub fn preview(&self, state: usize) -> Array2D<bool> {
        let (min_x, max_x) = self.tiles(state).map(|p| p.x).minmax().into_option().unwrap_or((0, -1));
        let (min_y, max_y) = self.tiles(state).map(|p| p.y).minmax().into_option().unwrap_or((0, -1));

        let columns = (max_x - min_x + 1) as usize;
        let rows = (max_y - min_y + 1) as usize;
        let mut grid = Array2D::filled_with(false, rows, columns);

        for tile in self.tiles(state) {
            grid[((tile.y - min_y) as usize, (tile.x - min_x) as usize)] = true;
        }

        grid
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for state in 0..self.number_of_states() {
            writeln!(f, "state {state}:")?;
            for row in self.preview(state).as_rows() {
                let line: String = row.iter().map(|&filled| if filled { 'X' } else { '.' }).collect();
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
