use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Grid coordinate. `x` grows to the right, `y` grows downwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn within(&self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width as isize && self.y < height as isize
    }

    /// Quarter turn clockwise around the origin.
    pub fn rotated_clockwise(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (isize, isize) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(2, -1);
        let b = Point::from((1, 3));

        assert_eq!(a + b, Point::new(3, 2));
        assert_eq!(a - b, Point::new(1, -4));

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
        assert_eq!(<(isize, isize)>::from(a), (2, -1));
    }

    #[test]
    fn test_point_within() {
        assert!(Point::new(0, 0).within(4, 4));
        assert!(Point::new(3, 3).within(4, 4));
        assert!(!Point::new(4, 0).within(4, 4));
        assert!(!Point::new(0, -1).within(4, 4));
    }

    #[test]
    fn test_point_rotation() {
        // right -> down -> left -> up
        let mut p = Point::new(1, 0);
        p = p.rotated_clockwise();
        assert_eq!(p, Point::new(0, 1));
        p = p.rotated_clockwise();
        assert_eq!(p, Point::new(-1, 0));
        p = p.rotated_clockwise().rotated_clockwise();
        assert_eq!(p, Point::new(1, 0));
    }
}
