use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

/// Geometric primitive representing a point.
/// Equality is exact, no tolerance is applied.
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub const ORIGIN: Point = Point(0.0, 0.0);

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).hypot(self.1 - other.1)
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point(self.0 - other.0, self.1 - other.1)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_point_is_origin() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn add_and_sub() {
        assert_eq!(Point(2.0, 1.0) + Point(3.0, 2.0), Point(5.0, 3.0));
        assert_eq!(Point(5.0, 1.0) - Point(6.0, 0.0), Point(-1.0, 1.0));
    }

    #[test]
    fn distance_3_4_5() {
        assert_eq!(Point::ORIGIN.distance(&Point(3.0, 4.0)), 5.0);
        assert_eq!(Point::ORIGIN.sq_distance(&Point(3.0, 4.0)), 25.0);
    }

    #[test]
    fn display() {
        assert_eq!(Point(3.25, 6.7).to_string(), "(3.25, 6.7)");
        assert_eq!(Point(-50.0, 60.0).to_string(), "(-50, 60)");
    }
}
