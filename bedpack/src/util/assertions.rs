use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::Bed;
use crate::geometry::convex_hull::{cross, is_disjoint};
use crate::geometry::primitives::Point;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every three consecutive vertices make a strict counter-clockwise turn.
/// The outline is scaled to unit size first, so the turns of very small or very large beds
/// do not underflow or overflow.
pub fn outline_is_ccw_convex(outline: &[Point]) -> bool {
    if outline.len() < 3 {
        error!("outline has only {} vertices", outline.len());
        return false;
    }
    let scale = outline
        .iter()
        .map(|p| f64::max(p.0.abs(), p.1.abs()))
        .fold(0.0, f64::max);
    if scale == 0.0 {
        error!("outline collapses to the origin: {outline:?}");
        return false;
    }
    let convex = outline
        .iter()
        .map(|p| Point(p.0 / scale, p.1 / scale))
        .circular_tuple_windows()
        .all(|(a, b, c)| cross(a, b, c) > 0.0);
    if !convex {
        error!("outline is not strictly convex in counter-clockwise order: {outline:?}");
    }
    convex
}

/// Every vertex lies on the circle with the given radius around the origin, relative to the radius
pub fn outline_on_circle(outline: &[Point], radius: f64) -> bool {
    outline.iter().all(|p| {
        let on_circle = approx_eq!(f64, p.distance(&Point::ORIGIN) / radius, 1.0, epsilon = 1e-9);
        if !on_circle {
            error!("outline vertex {p} is not on the circle with radius {radius}");
        }
        on_circle
    })
}

/// The most recently placed box lies on the bed and does not overlap with any box placed before it
pub fn last_placement_is_valid(bed: &Bed) -> bool {
    let Some((last, others)) = bed.placed_boxes().split_last() else {
        return true;
    };
    if !bed.is_on_bed(last) {
        error!("placed box {last} is not on the bed");
        return false;
    }
    for other in others {
        if other == last || !is_disjoint(last, &other.hull()) {
            error!("placed box {last} overlaps with {other}");
            return false;
        }
    }
    true
}
