use crate::geometry::primitives::{Point, Rect};

/// Position of a shape relative to a convex hull.
/// Ordered so that `Outside < OnBoundary < Inside`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Containment {
    /// At least one test point lies strictly outside the hull
    Outside,
    /// Every test point lies on the boundary of the hull
    OnBoundary,
    /// No test point lies outside, and at least one lies strictly inside
    Inside,
}

impl Containment {
    /// Numeric encoding: 1 for inside, 0 for on the boundary, -1 for outside.
    pub fn as_i8(self) -> i8 {
        match self {
            Containment::Outside => -1,
            Containment::OnBoundary => 0,
            Containment::Inside => 1,
        }
    }

    /// True for [`Containment::Inside`] and [`Containment::OnBoundary`]
    pub fn is_contained(self) -> bool {
        self >= Containment::OnBoundary
    }
}

/// Selector for a corner of a [`Rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Bottom left (`min`)
    Dl,
    /// Bottom right
    Dr,
    /// Top right (`max`)
    Tr,
    /// Top left
    Tl,
}

impl Corner {
    /// Counter-clockwise order starting at the bottom left corner
    pub const CCW: [Corner; 4] = [Corner::Dl, Corner::Dr, Corner::Tr, Corner::Tl];
}

/// A shape that can be tested against a convex hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TestShape {
    Point(Point),
    Rect(Rect),
}

impl TestShape {
    /// The points that are tested against a hull: the point itself, or the four corners of the rectangle.
    pub fn test_points(&self) -> Vec<Point> {
        match self {
            TestShape::Point(p) => vec![*p],
            TestShape::Rect(r) => r.corners().to_vec(),
        }
    }
}

impl From<Point> for TestShape {
    fn from(p: Point) -> Self {
        TestShape::Point(p)
    }
}

impl From<Rect> for TestShape {
    fn from(r: Rect) -> Self {
        TestShape::Rect(r)
    }
}

impl From<&Rect> for TestShape {
    fn from(r: &Rect) -> Self {
        TestShape::Rect(*r)
    }
}
