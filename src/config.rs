use bevy::prelude::Resource;

use crate::core::{MapObject, Shape, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// Dimensions of the play field pieces are checked against.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn spawn(&self, shape: &Shape) -> MapObject {
        MapObject::new(shape, self.height)
    }

    pub fn fits(&self, object: &MapObject) -> bool {
        !object.invalid_coordinates(self.height, self.width)
    }
}
