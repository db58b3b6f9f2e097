mod constants;
mod generator;
mod map_object;
mod pieces;
mod point;
mod shape;

pub use constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
pub use generator::PieceGenerator;
pub use map_object::{MapObject, MoveDirection};
pub use pieces::{PieceType, ShapeCatalog};
pub use point::Point;
pub use shape::{Shape, TileColor};
