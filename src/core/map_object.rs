use bevy::log::{debug, trace};
use bevy::prelude::Component;

use crate::core::point::Point;
use crate::core::shape::{Shape, TileColor};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MoveDirection {
    Left,
    Right,
    Down,
    Up,
}

/// A shape placed on the grid.
///
/// `coordinates[0]` is the reference tile; every other tile sits at the
/// reference plus its offset for the current `state`. Movement and rotation
/// only check the grid bounds handed in by the caller; occupancy by other
/// pieces is the caller's business.
///
/// Cloning keeps `state` and `coordinates` as they are in the source.
#[derive(Component, Clone, PartialEq, Eq, Debug, Default)]
pub struct MapObject {
    state: usize,
    shape: Shape,
    coordinates: Vec<Point>,
}

impl MapObject {
    /// Spawns `shape` in state 0, shifted right so that no tile has a negative
    /// x and vertically at `height / 2`.
    pub fn new(shape: &Shape, height: usize) -> Self {
        let min_x = shape
            .relations(0)
            .iter()
            .map(|offset| offset.x)
            .fold(0, isize::min);

        let mut coordinates = vec![Point::default(); shape.size()];
        if let Some(reference) = coordinates.first_mut() {
            *reference = Point::new(-min_x, (height / 2) as isize);
        }

        let mut object = Self {
            state: 0,
            shape: shape.clone(),
            coordinates,
        };
        object.set_coordinates();

        trace!("spawned {:?} piece at {:?}", object.color(), object.coordinates);
        object
    }

    pub fn state(&self) -> usize {
        self.state
    }

    pub fn size(&self) -> usize {
        self.shape.size()
    }

    pub fn color(&self) -> TileColor {
        self.shape.color()
    }

    pub fn number_of_states(&self) -> usize {
        self.shape.number_of_states()
    }

    pub fn relations_to_center(&self) -> &[Vec<Point>] {
        self.shape.relations_to_center()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }

    pub fn reference(&self) -> Option<Point> {
        self.coordinates.first().copied()
    }

    /// Recomputes every tile from the reference tile and the current state.
    pub fn set_coordinates(&mut self) {
        let Some(&reference) = self.coordinates.first() else {
            return;
        };

        let relations = self.shape.relations(self.state);
        for (tile, offset) in self.coordinates.iter_mut().skip(1).zip(relations) {
            *tile = reference + *offset;
        }
    }

    pub fn invalid_coordinates(&self, height: usize, width: usize) -> bool {
        self.coordinates
            .iter()
            .any(|tile| !tile.within(width, height))
    }

    pub fn rotate_clockwise(&mut self, height: usize, width: usize) -> bool {
        if self.number_of_states() == 0 {
            return false;
        }

        let previous = self.state;
        self.set_state(self.next_state());

        if self.invalid_coordinates(height, width) {
            debug!("clockwise rotation out of bounds, staying in state {previous}");
            self.set_state(previous);
            return false;
        }

        true
    }

    pub fn rotate_anti_clockwise(&mut self, height: usize, width: usize) -> bool {
        if self.number_of_states() == 0 {
            return false;
        }

        let previous = self.state;
        self.set_state(self.previous_state());

        if self.invalid_coordinates(height, width) {
            debug!("anti-clockwise rotation out of bounds, staying in state {previous}");
            self.set_state(previous);
            return false;
        }

        true
    }

    pub fn move_down(&mut self, height: usize) -> bool {
        let floor = height as isize - 1;
        self.shift(Point::new(0, 1), |tile| tile.y >= floor)
    }

    pub fn move_up(&mut self, _height: usize) -> bool {
        self.shift(Point::new(0, -1), |tile| tile.y < 1)
    }

    pub fn move_forward(&mut self, width: usize) -> bool {
        let wall = width as isize - 1;
        self.shift(Point::new(1, 0), |tile| tile.x >= wall)
    }

    pub fn move_back(&mut self) -> bool {
        self.shift(Point::new(-1, 0), |tile| tile.x < 1)
    }

    pub fn try_move(&mut self, direction: MoveDirection, height: usize, width: usize) -> bool {
        match direction {
            MoveDirection::Left => self.move_back(),
            MoveDirection::Right => self.move_forward(width),
            MoveDirection::Down => self.move_down(height),
            MoveDirection::Up => self.move_up(height),
        }
    }

    fn next_state(&self) -> usize {
        (self.state + 1) % self.number_of_states()
    }

    fn previous_state(&self) -> usize {
        match self.state {
            0 => self.number_of_states() - 1,
            state => state - 1,
        }
    }

    fn set_state(&mut self, state: usize) {
        self.state = state;
        self.set_coordinates();
    }

    // all tiles move or none do
    fn shift(&mut self, delta: Point, blocked: impl Fn(&Point) -> bool) -> bool {
        if self.coordinates.iter().any(blocked) {
            debug!("move by {:?} blocked at {:?}", delta, self.coordinates);
            return false;
        }

        for tile in self.coordinates.iter_mut() {
            *tile += delta;
        }
        true
    }
}
