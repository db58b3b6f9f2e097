use bevy::prelude::Resource;

use crate::core::constants::{bases, states, Offset};
use crate::core::map_object::MapObject;
use crate::core::point::Point;
use crate::core::shape::{Shape, TileColor};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceType {
    pub fn all() -> Vec<PieceType> {
        vec![
            PieceType::I,
            PieceType::J,
            PieceType::L,
            PieceType::O,
            PieceType::S,
            PieceType::T,
            PieceType::Z,
        ]
    }

    /// Position of this piece in [`ShapeCatalog::standard`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn color(&self) -> TileColor {
        match self {
            PieceType::I => TileColor::Cyan,
            PieceType::J => TileColor::Blue,
            PieceType::L => TileColor::Orange,
            PieceType::O => TileColor::Yellow,
            PieceType::S => TileColor::Green,
            PieceType::T => TileColor::Purple,
            PieceType::Z => TileColor::Red,
        }
    }

    pub fn shape(&self) -> Shape {
        let (base, number_of_states) = match self {
            PieceType::I => (&bases::I, states::I),
            PieceType::J => (&bases::J, states::J),
            PieceType::L => (&bases::L, states::L),
            PieceType::O => (&bases::O, states::O),
            PieceType::S => (&bases::S, states::S),
            PieceType::T => (&bases::T, states::T),
            PieceType::Z => (&bases::Z, states::Z),
        };

        let base: Vec<Point> = base.iter().map(|&offset: &Offset| offset.into()).collect();
        Shape::from_base(self.color(), &base, number_of_states)
    }
}

/// The set of shapes a game draws its pieces from.
#[derive(Resource, Clone, Debug)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// The seven tetrominoes, in [`PieceType`] order.
    pub fn standard() -> Self {
        Self::new(PieceType::all().iter().map(PieceType::shape).collect())
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn spawn(&self, index: usize, height: usize) -> Option<MapObject> {
        self.get(index).map(|shape| MapObject::new(shape, height))
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

    #[test]
    fn test_standard_catalog_layout() {
        let catalog = ShapeCatalog::standard();
        assert_eq!(catalog.len(), 7);

        for piece_type in PieceType::all() {
            let shape = catalog.get(piece_type.index()).unwrap();
            assert_eq!(shape.size(), 4);
            assert_eq!(shape.color(), piece_type.color());
            assert!(shape.relations_to_center().iter().all(|state| state.len() == 3));
        }

        assert_eq!(catalog.get(PieceType::O.index()).unwrap().number_of_states(), 1);
        assert_eq!(catalog.get(PieceType::I.index()).unwrap().number_of_states(), 2);
        assert_eq!(catalog.get(PieceType::T.index()).unwrap().number_of_states(), 4);
        assert!(catalog.get(7).is_none());
    }

    #[test]
    fn test_states_are_distinct() {
        for piece_type in PieceType::all() {
            let shape = piece_type.shape();
            for a in 0..shape.number_of_states() {
                for b in (a + 1)..shape.number_of_states() {
                    let mut left: Vec<_> = shape.tiles(a).collect();
                    let mut right: Vec<_> = shape.tiles(b).collect();
                    left.sort_by_key(|p| (p.x, p.y));
                    right.sort_by_key(|p| (p.x, p.y));
                    assert_ne!(left, right, "{:?} states {} and {}", piece_type, a, b);
                }
            }
        }
    }

    #[test]
    fn test_standard_pieces_spawn_in_bounds() {
        let catalog = ShapeCatalog::standard();
        for index in 0..catalog.len() {
            let object = catalog.spawn(index, DEFAULT_GRID_HEIGHT).unwrap();
            assert!(!object.invalid_coordinates(DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH));
            assert_eq!(object.coordinates().iter().map(|p| p.x).min(), Some(0));
        }
        assert!(catalog.spawn(catalog.len(), DEFAULT_GRID_HEIGHT).is_none());
    }

    #[test]
    fn test_standard_pieces_rotate_full_cycle() {
        for piece_type in PieceType::all() {
            let mut object = MapObject::new(&piece_type.shape(), DEFAULT_GRID_HEIGHT);
            object.move_forward(DEFAULT_GRID_WIDTH);
            object.move_forward(DEFAULT_GRID_WIDTH);
            let start = object.clone();

            for _ in 0..object.number_of_states() {
                assert!(object.rotate_clockwise(DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH));
            }
            assert_eq!(object, start, "{:?}", piece_type);
        }
    }

    #[test]
    fn test_piece_display() {
        // print all pieces and rotations
        for piece_type in PieceType::all() {
            println!("{:?}\n{}", piece_type, piece_type.shape());
        }

        assert_eq!(PieceType::O.shape().to_string(), "state 0:\nXX\nXX\n");
    }
}
