// State 0 offsets of the standard tetrominoes, relative to the reference tile.
// y grows downwards, so (0, -1) is the cell above the reference.
pub type Offset = (isize, isize);

type Base = [Offset; 3];

pub mod bases {
    use super::Base;

    pub static I: Base = [(-1, 0), (1, 0), (2, 0)];
    pub static J: Base = [(-1, -1), (-1, 0), (1, 0)];
    pub static L: Base = [(1, -1), (-1, 0), (1, 0)];
    pub static O: Base = [(1, 0), (0, 1), (1, 1)];
    pub static S: Base = [(1, -1), (0, -1), (-1, 0)];
    pub static T: Base = [(0, -1), (-1, 0), (1, 0)];
    pub static Z: Base = [(-1, -1), (0, -1), (1, 0)];
}

// Distinct orientations per piece. Symmetric pieces cycle through fewer.
pub mod states {
    pub const I: usize = 2;
    pub const J: usize = 4;
    pub const L: usize = 4;
    pub const O: usize = 1;
    pub const S: usize = 2;
    pub const T: usize = 4;
    pub const Z: usize = 2;
}

pub const DEFAULT_GRID_WIDTH: usize = 10;
pub const DEFAULT_GRID_HEIGHT: usize = 20;
