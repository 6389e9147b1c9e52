use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::geo_enums::{Containment, TestShape};
use crate::geometry::primitives::{Point, Rect};

/// Cross product of the vectors `p0 -> p1` and `p0 -> p2`.
///
/// Positive if `p2` lies left of the directed line `p0 -> p1` (counter-clockwise turn),
/// zero if the three points are collinear and negative if `p2` lies to the right.
#[inline(always)]
pub fn cross(p0: Point, p1: Point, p2: Point) -> f64 {
    (p1.0 - p0.0) * (p2.1 - p0.1) - (p1.1 - p0.1) * (p2.0 - p0.0)
}

/// Returns the convex hull of a set of points, in counter-clockwise order.
/// Collinear points on the boundary of the hull are not part of it.
pub fn convex_hull_from_points(mut points: Vec<Point>) -> Vec<Point> {
    //https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

    //sort the points by x coordinate, ties broken by y
    points.sort_by_key(|p| (OrderedFloat(p.0), OrderedFloat(p.1)));

    let mut lower_hull = points
        .iter()
        .fold(vec![], |hull, p| grow_convex_hull(hull, *p));
    let mut upper_hull = points
        .iter()
        .rev()
        .fold(vec![], |hull, p| grow_convex_hull(hull, *p));

    //First and last element of both hull parts are the same point
    upper_hull.pop();
    lower_hull.pop();

    lower_hull.append(&mut upper_hull);
    lower_hull
}

/// Returns the convex hull of the corners of a set of rectangles, in counter-clockwise order.
/// Corners shared by multiple rectangles are only considered once.
pub fn convex_hull_from_rects<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Vec<Point> {
    let corners = rects
        .into_iter()
        .flat_map(|r| r.corners())
        .sorted_by_key(|p| (OrderedFloat(p.0), OrderedFloat(p.1)))
        .dedup()
        .collect_vec();

    convex_hull_from_points(corners)
}

fn grow_convex_hull(mut h: Vec<Point>, next: Point) -> Vec<Point> {
    //pop all points from the hull which will be made irrelevant due to the new point
    while h.len() >= 2 && cross(h[h.len() - 2], h[h.len() - 1], next) <= 0.0 {
        h.pop();
    }
    h.push(next);
    h
}

/// Determines where `shape` lies relative to a counter-clockwise convex `hull`.
///
/// Returns [`Containment::Outside`] as soon as one test point is found outside the hull,
/// [`Containment::OnBoundary`] if all test points lie on its boundary and
/// [`Containment::Inside`] otherwise.
///
/// # Panics
/// If `hull` is empty.
pub fn containment(shape: impl Into<TestShape>, hull: &[Point]) -> Containment {
    assert!(!hull.is_empty(), "containment test against an empty hull");

    let shape: TestShape = shape.into();
    let test_points = shape.test_points();
    let mut n_on_boundary = 0;
    for p in &test_points {
        for (&start, &end) in hull.iter().circular_tuple_windows() {
            let c = cross(start, end, *p);
            if c < 0.0 {
                //right of the edge
                return Containment::Outside;
            } else if c == 0.0 {
                if !in_segment_bounds(start, end, *p) {
                    //on the line through the edge, but beyond its endpoints
                    return Containment::Outside;
                }
                n_on_boundary += 1;
                break;
            }
        }
    }

    match n_on_boundary == test_points.len() {
        true => Containment::OnBoundary,
        false => Containment::Inside,
    }
}

/// Returns true if `shape` and the counter-clockwise convex `hull` do not overlap.
///
/// The shapes overlap if any test point of `shape` lies strictly left of every edge of the hull.
/// For rectangles, they also overlap if any vertex of the hull lies inside or on the boundary of the rectangle.
///
/// # Panics
/// If `hull` is empty.
pub fn is_disjoint(shape: impl Into<TestShape>, hull: &[Point]) -> bool {
    assert!(!hull.is_empty(), "disjointness test against an empty hull");

    let shape: TestShape = shape.into();
    let n_edges = hull.len();

    let surrounded = shape.test_points().into_iter().any(|p| {
        hull.iter()
            .circular_tuple_windows()
            .filter(|&(&start, &end)| cross(start, end, p) > 0.0)
            .count()
            == n_edges
    });
    if surrounded {
        return false;
    }

    if let TestShape::Rect(rect) = shape {
        //the hull could also be (partially) engulfed by the rectangle
        let rect_hull = rect.hull();
        if hull
            .iter()
            .any(|&v| containment(v, &rect_hull).is_contained())
        {
            return false;
        }
    }

    true
}

fn in_segment_bounds(start: Point, end: Point, p: Point) -> bool {
    p.0 >= f64::min(start.0, end.0)
        && p.0 <= f64::max(start.0, end.0)
        && p.1 >= f64::min(start.1, end.1)
        && p.1 <= f64::max(start.1, end.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Corner;

    fn rect(w: f64, h: f64, cx: f64, cy: f64) -> Rect {
        Rect::try_new_at(w, h, Point(cx, cy)).unwrap()
    }

    #[test]
    fn cross_sign_convention() {
        let (p0, p1) = (Point(0.0, 0.0), Point(1.0, 0.0));
        assert!(cross(p0, p1, Point(0.5, 1.0)) > 0.0);
        assert!(cross(p0, p1, Point(0.5, -1.0)) < 0.0);
        assert_eq!(cross(p0, p1, Point(3.0, 0.0)), 0.0);
    }

    #[test]
    fn hull_of_single_rect_is_its_corners() {
        let r = Rect::try_new(5.0, 10.0).unwrap();
        let hull = convex_hull_from_rects([&r]);
        assert_eq!(hull, r.hull());
    }

    #[test]
    fn hull_of_two_adjacent_rects() {
        let rects = [rect(5.0, 10.0, 2.5, 5.0), rect(5.0, 10.0, -2.5, 5.0)];
        let hull = convex_hull_from_rects(&rects);
        assert_eq!(
            hull,
            vec![Point(-5.0, 0.0), Point(5.0, 0.0), Point(5.0, 10.0), Point(-5.0, 10.0)]
        );
    }

    #[test]
    fn hull_of_three_rects_elides_collinear_vertex() {
        let rects = [
            rect(5.0, 10.0, 2.5, 5.0),
            rect(5.0, 10.0, -2.5, 5.0),
            rect(5.0, 10.0, 2.5, 15.0),
        ];
        let hull = convex_hull_from_rects(&rects);
        assert_eq!(
            hull,
            vec![
                Point(-5.0, 0.0),
                Point(5.0, 0.0),
                Point(5.0, 20.0),
                Point(0.0, 20.0),
                Point(-5.0, 10.0)
            ]
        );
    }

    #[test]
    fn hull_from_points_drops_interior_and_collinear_points() {
        let points = vec![
            Point(0.0, 0.0),
            Point(2.0, 0.0),
            Point(4.0, 0.0),
            Point(4.0, 4.0),
            Point(2.0, 2.0),
            Point(0.0, 4.0),
        ];
        let hull = convex_hull_from_points(points);
        assert_eq!(
            hull,
            vec![Point(0.0, 0.0), Point(4.0, 0.0), Point(4.0, 4.0), Point(0.0, 4.0)]
        );
    }

    #[test]
    fn containment_of_rect_in_its_own_hull_is_on_boundary() {
        let r = Rect::try_new(5.0, 10.0).unwrap();
        let hull = convex_hull_from_rects([&r]);
        assert_eq!(containment(r, &hull), Containment::OnBoundary);
        assert_eq!(containment(r, &hull).as_i8(), 0);
    }

    #[test]
    fn containment_of_shifted_rect() {
        let hull = convex_hull_from_rects([&Rect::try_new(5.0, 10.0).unwrap()]);
        let other = rect(5.0, 10.0, 2.5, 0.0);

        assert_eq!(containment(other, &hull), Containment::Outside);
        assert_eq!(containment(other, &hull).as_i8(), -1);
        assert_eq!(containment(other.corner(Corner::Dl), &hull), Containment::OnBoundary);
        assert_eq!(containment(other.corner(Corner::Tl), &hull), Containment::OnBoundary);
        assert_eq!(containment(other.corner(Corner::Dr), &hull), Containment::Outside);
        assert_eq!(containment(other.corner(Corner::Tr), &hull), Containment::Outside);
        assert_eq!(containment(Point::ORIGIN, &hull), Containment::Inside);
        assert_eq!(containment(Point::ORIGIN, &hull).as_i8(), 1);
    }

    #[test]
    fn containment_partially_on_boundary_is_inside() {
        let hull = convex_hull_from_rects([&Rect::try_new(5.0, 10.0).unwrap()]);
        let touching_left_edge = rect(2.0, 2.0, -1.5, 0.0);
        assert_eq!(containment(touching_left_edge, &hull), Containment::Inside);
    }

    #[test]
    fn point_on_edge_line_beyond_segment_is_outside() {
        //(3, 0) lies on the line through the bottom edge
        let hull = vec![Point(0.0, 0.0), Point(2.0, 0.0), Point(0.0, 2.0)];
        assert_eq!(containment(Point(1.0, 1.0), &hull), Containment::OnBoundary);
        assert_eq!(containment(Point(3.0, 0.0), &hull), Containment::Outside);
    }

    #[test]
    #[should_panic]
    fn containment_against_empty_hull_panics() {
        containment(Point::ORIGIN, &[]);
    }

    #[test]
    fn separated_rects_are_disjoint() {
        let a = rect(2.0, 2.0, 0.0, 0.0);
        let b = rect(2.0, 2.0, 3.0, 0.0);
        assert!(is_disjoint(a, &b.hull()));
        assert!(is_disjoint(b, &a.hull()));
    }

    #[test]
    fn overlapping_rects_are_not_disjoint() {
        let a = rect(2.0, 2.0, 0.0, 0.0);
        let b = rect(2.0, 2.0, 1.0, 1.0);
        assert!(!is_disjoint(a, &b.hull()));
        assert!(!is_disjoint(b, &a.hull()));
    }

    #[test]
    fn engulfing_rect_is_not_disjoint() {
        let big = rect(10.0, 10.0, 0.0, 0.0);
        let small = rect(2.0, 2.0, 1.0, 1.0);
        //no corner of the big rect lies in the small one, but the small hull lies in the big rect
        assert!(!is_disjoint(big, &small.hull()));
        assert!(!is_disjoint(small, &big.hull()));
    }

    #[test]
    fn crossing_rects_count_as_disjoint() {
        //no corner of either rect lies inside the other
        let wide = rect(30.0, 2.0, 0.0, 3.0);
        let tall = rect(2.0, 20.0, -3.0, 6.0);
        assert!(is_disjoint(tall, &wide.hull()));
        assert!(is_disjoint(wide, &tall.hull()));
    }

    #[test]
    fn point_inside_polygon_with_many_edges_is_not_disjoint() {
        let hexagon = vec![
            Point(2.0, 0.0),
            Point(1.0, 1.7),
            Point(-1.0, 1.7),
            Point(-2.0, 0.0),
            Point(-1.0, -1.7),
            Point(1.0, -1.7),
        ];
        let hexagon = convex_hull_from_points(hexagon);
        assert_eq!(hexagon.len(), 6);
        assert!(!is_disjoint(Point::ORIGIN, &hexagon));
        assert!(is_disjoint(Point(5.0, 0.0), &hexagon));
    }

    #[test]
    fn point_on_hull_boundary_is_disjoint() {
        let hull = rect(2.0, 2.0, 0.0, 0.0).hull();
        assert!(is_disjoint(Point(1.0, 0.0), &hull));
    }
}
