use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};

use crate::geometry::geo_enums::Corner;
use crate::geometry::primitives::Point;

/// Axis-aligned rectangle ("box"), tracked by its center.
///
/// `min` and `max` are derived from the center and dimensions and are only ever
/// moved together with the center.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    width: f64,
    height: f64,
    center: Point,
    min: Point,
    max: Point,
}

impl Rect {
    /// Creates a rectangle of the given dimensions centered at the origin.
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "invalid rectangle dimensions, width: {width}, height: {height}"
        );
        Ok(Rect {
            width,
            height,
            center: Point::ORIGIN,
            min: Point(-width / 2.0, -height / 2.0),
            max: Point(width / 2.0, height / 2.0),
        })
    }

    /// Creates a rectangle of the given dimensions centered at `center`.
    pub fn try_new_at(width: f64, height: f64, center: Point) -> Result<Self> {
        ensure!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid rectangle center: {center}"
        );
        let mut rect = Rect::try_new(width, height)?;
        rect.translate_to(center);
        Ok(rect)
    }

    /// Creates a rectangle from its bottom left and top right corners.
    pub fn from_min_max(min: Point, max: Point) -> Result<Self> {
        let width = max.0 - min.0;
        let height = max.1 - min.1;
        let center = Point(min.0 + width / 2.0, min.1 + height / 2.0);
        Rect::try_new_at(width, height, center)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Bottom left corner
    pub fn min(&self) -> Point {
        self.min
    }

    /// Top right corner
    pub fn max(&self) -> Point {
        self.max
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Moves the center to `p`, shifting `min` and `max` by the same delta.
    pub fn translate_to(&mut self, p: Point) -> &mut Self {
        let delta = p - self.center;
        self.center = p;
        self.min = self.min + delta;
        self.max = self.max + delta;
        self
    }

    /// Returns a copy of `self` with its center moved to `p`.
    pub fn translated(&self, p: Point) -> Self {
        let mut copy = *self;
        copy.translate_to(p);
        copy
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::Dl => self.min,
            Corner::Dr => Point(self.max.0, self.min.1),
            Corner::Tr => self.max,
            Corner::Tl => Point(self.min.0, self.max.1),
        }
    }

    /// The four corners, counter-clockwise starting at the bottom left: (dl, dr, tr, tl).
    pub fn corners(&self) -> [Point; 4] {
        Corner::CCW.map(|c| self.corner(c))
    }

    /// The convex hull of the rectangle, which are its corners in the same order as [`Rect::corners`].
    pub fn hull(&self) -> Vec<Point> {
        self.corners().to_vec()
    }
}

/// Rectangles are equal when their dimensions and centers are, `min` and `max` are not compared.
impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.center == other.center
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rect_is_centered_at_origin() {
        let r = Rect::try_new(5.0, 10.0).unwrap();
        assert_eq!(r.width(), 5.0);
        assert_eq!(r.height(), 10.0);
        assert_eq!(r.center(), Point::ORIGIN);
        assert_eq!(r.corner(Corner::Tl), Point(-2.5, 5.0));
        assert_eq!(r.corner(Corner::Tr), Point(2.5, 5.0));
        assert_eq!(r.corner(Corner::Dr), Point(2.5, -5.0));
        assert_eq!(r.corner(Corner::Dl), Point(-2.5, -5.0));
    }

    #[test]
    fn corners_are_ccw_from_bottom_left() {
        let r = Rect::try_new_at(2.0, 4.0, Point(1.0, 2.0)).unwrap();
        assert_eq!(
            r.corners(),
            [Point(0.0, 0.0), Point(2.0, 0.0), Point(2.0, 4.0), Point(0.0, 4.0)]
        );
        assert_eq!(r.hull(), r.corners().to_vec());
    }

    #[test]
    fn translate_moves_min_and_max() {
        let mut r = Rect::try_new(5.0, 10.0).unwrap();
        r.translate_to(Point(2.5, 5.0));
        assert_eq!(r.min(), Point(0.0, 0.0));
        assert_eq!(r.max(), Point(5.0, 10.0));
        assert_eq!(r.center(), Point(2.5, 5.0));
    }

    #[test]
    fn translated_leaves_original_untouched() {
        let r = Rect::try_new(2.0, 2.0).unwrap();
        let moved = r.translated(Point(4.0, -1.0));
        assert_eq!(r.center(), Point::ORIGIN);
        assert_eq!(moved.min(), Point(3.0, -2.0));
        assert_eq!(moved.max(), Point(5.0, 0.0));
    }

    #[test]
    fn from_min_max() {
        let r = Rect::from_min_max(Point(1.0, 2.0), Point(4.0, 8.0)).unwrap();
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 6.0);
        assert_eq!(r.center(), Point(2.5, 5.0));
        assert!(Rect::from_min_max(Point(1.0, 2.0), Point(1.0, 8.0)).is_err());
    }

    #[test]
    fn equality_compares_dimensions_and_center() {
        let a = Rect::try_new_at(2.0, 3.0, Point(1.0, 1.0)).unwrap();
        let b = Rect::try_new(2.0, 3.0).unwrap().translated(Point(1.0, 1.0));
        let c = Rect::try_new_at(3.0, 2.0, Point(1.0, 1.0)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        assert!(Rect::try_new(0.0, 1.0).is_err());
        assert!(Rect::try_new(1.0, -1.0).is_err());
        assert!(Rect::try_new(f64::NAN, 1.0).is_err());
        assert!(Rect::try_new_at(1.0, 1.0, Point(f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn display() {
        let r = Rect::try_new(5.0, 10.0).unwrap();
        assert_eq!(r.to_string(), "(-2.5, -5) by (2.5, 5)");
    }
}
