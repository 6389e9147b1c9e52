use std::f64::consts::PI;

use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{debug, trace};

use crate::entities::{BedShape, Direction, Origin};
use crate::geometry::convex_hull::{containment, convex_hull_from_rects, is_disjoint};
use crate::geometry::primitives::{Point, Rect};
use crate::util::BedConfig;
use crate::util::assertions;

/// Angular step (in radians) between consecutive vertices of a round bed's outline
pub const ROUND_OUTLINE_STEP: f64 = 0.2;

/// A [`Bed`] is the surface on which boxes are placed.
/// Its outline is computed once, boxes are added one at a time by a greedy spiral heuristic
/// and can only be removed in reverse order of placement.
#[derive(Clone, Debug)]
pub struct Bed {
    shape: BedShape,
    origin: Origin,
    config: BedConfig,
    center: Point,
    /// Boundary polygon of the bed, counter-clockwise
    outline: Vec<Point>,
    /// All boxes placed on the bed, in order of placement
    placed_boxes: Vec<Rect>,
}

/// Number of boxes on a [`Bed`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BedState {
    Empty,
    Populated(usize),
}

impl Bed {
    /// Creates an empty bed.
    /// The origin is ignored for round beds, whose center always lies at `(0, 0)`.
    pub fn try_new(shape: BedShape, origin: Origin, config: BedConfig) -> Result<Self> {
        shape.validate()?;
        ensure!(
            config.margin.is_finite() && config.margin >= 0.0,
            "invalid bed margin: {}",
            config.margin
        );

        let center = match (shape, origin) {
            (BedShape::Round { .. }, Origin::Corner) => {
                debug!("[BED] round beds have no corner, origin is placed at the center");
                Point::ORIGIN
            }
            (BedShape::Round { .. }, Origin::Center) => Point::ORIGIN,
            (BedShape::Rectangular { width, height }, Origin::Corner) => {
                Point(width / 2.0, height / 2.0)
            }
            (BedShape::Rectangular { .. }, Origin::Center) => Point::ORIGIN,
        };

        let outline = match shape {
            BedShape::Rectangular { width, height } => {
                Rect::try_new_at(width, height, center)?.hull()
            }
            BedShape::Round { diameter } => round_outline(diameter / 2.0),
        };

        debug_assert!(assertions::outline_is_ccw_convex(&outline));
        debug_assert!(match shape {
            BedShape::Round { diameter } => assertions::outline_on_circle(&outline, diameter / 2.0),
            BedShape::Rectangular { .. } => true,
        });

        Ok(Bed {
            shape,
            origin,
            config,
            center,
            outline,
            placed_boxes: vec![],
        })
    }

    /// Adds a box to the bed using the spiral heuristic.
    ///
    /// The first box is placed at the center of the bed. Every following box is attempted
    /// above, left, below and right (in that order) of the most recently placed box.
    /// The first position where the box lies on the bed without colliding is accepted.
    ///
    /// Returns the center of the placed box, or `None` if no position was found.
    /// In that case the bed is left untouched.
    pub fn add_box(&mut self, new_box: Rect) -> Option<Point> {
        let position = match self.last_box() {
            None => {
                let center = self.center;
                self.can_place(&new_box.translated(center))
                    .then_some(center)
            }
            Some(anchor) => {
                let anchor = *anchor;
                Direction::SPIRAL
                    .into_iter()
                    .find_map(|dir| self.try_at(dir, &new_box, &anchor))
            }
        };

        match position {
            Some(position) => {
                self.add_box_at_position(new_box, position);
                debug!(
                    "[BED] placed {}x{} box at {position} ({} boxes on bed)",
                    new_box.width(),
                    new_box.height(),
                    self.placed_boxes.len()
                );
                debug_assert!(assertions::last_placement_is_valid(self));
            }
            None => debug!(
                "[BED] no position found for {}x{} box",
                new_box.width(),
                new_box.height()
            ),
        }
        position
    }

    /// Attempts to place `new_box` next to `anchor` in the given direction, separated by the margin.
    /// Returns the position if the box fits there, the bed is not modified.
    pub fn try_at(&self, direction: Direction, new_box: &Rect, anchor: &Rect) -> Option<Point> {
        let position = self.candidate_position(direction, new_box, anchor);
        let fits = self.can_place(&new_box.translated(position));
        trace!(
            "[BED] {direction} of {}: {position} {}",
            anchor.center(),
            if fits { "accepted" } else { "rejected" }
        );
        fits.then_some(position)
    }

    /// Center for `new_box` when placed next to `anchor` in the given direction.
    pub fn candidate_position(&self, direction: Direction, new_box: &Rect, anchor: &Rect) -> Point {
        let hdist = 0.5 * (anchor.width() + new_box.width()) + self.config.margin;
        let vdist = 0.5 * (anchor.height() + new_box.height()) + self.config.margin;
        let Point(x, y) = anchor.center();

        match direction {
            Direction::Above => Point(x, y + vdist),
            Direction::Left => Point(x - hdist, y),
            Direction::Below => Point(x, y - vdist),
            Direction::Right => Point(x + hdist, y),
        }
    }

    /// Places a box at `position` without checking whether it fits.
    /// Used to restore boxes that are already known to be valid.
    pub fn add_box_at_position(&mut self, mut rect: Rect, position: Point) {
        rect.translate_to(position);
        self.placed_boxes.push(rect);
    }

    /// Removes the most recently placed box, if any.
    pub fn remove_box(&mut self) -> Option<Rect> {
        self.placed_boxes.pop()
    }

    /// True if `rect` lies inside or on the boundary of the bed's outline
    pub fn is_on_bed(&self, rect: &Rect) -> bool {
        containment(rect, &self.outline).is_contained()
    }

    /// True if `rect` is identical to, or overlaps with, any placed box
    pub fn collides(&self, rect: &Rect) -> bool {
        self.placed_boxes
            .iter()
            .any(|pb| pb == rect || !is_disjoint(rect, &pb.hull()))
    }

    /// True if `rect` lies on the bed and does not collide with any placed box
    pub fn can_place(&self, rect: &Rect) -> bool {
        self.is_on_bed(rect) && !self.collides(rect)
    }

    pub fn state(&self) -> BedState {
        match self.placed_boxes.len() {
            0 => BedState::Empty,
            n => BedState::Populated(n),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placed_boxes.is_empty()
    }

    /// The most recently placed box, anchor of the next placement
    pub fn last_box(&self) -> Option<&Rect> {
        self.placed_boxes.last()
    }

    pub fn placed_boxes(&self) -> &[Rect] {
        &self.placed_boxes
    }

    pub fn shape(&self) -> BedShape {
        self.shape
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn config(&self) -> BedConfig {
        self.config
    }

    pub fn margin(&self) -> f64 {
        self.config.margin
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Radius of a round bed
    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            BedShape::Round { diameter } => Some(diameter / 2.0),
            BedShape::Rectangular { .. } => None,
        }
    }

    /// Width of a rectangular bed
    pub fn width(&self) -> Option<f64> {
        match self.shape {
            BedShape::Rectangular { width, .. } => Some(width),
            BedShape::Round { .. } => None,
        }
    }

    /// Height of a rectangular bed
    pub fn height(&self) -> Option<f64> {
        match self.shape {
            BedShape::Rectangular { height, .. } => Some(height),
            BedShape::Round { .. } => None,
        }
    }

    /// Convex hull around all placed boxes, empty if no boxes are placed
    pub fn placed_hull(&self) -> Vec<Point> {
        convex_hull_from_rects(&self.placed_boxes)
    }

    /// Area enclosed by the outline
    pub fn area(&self) -> f64 {
        //shoelace formula
        self.outline
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| a.0 * b.1 - b.0 * a.1)
            .sum::<f64>()
            / 2.0
    }

    pub fn placed_area(&self) -> f64 {
        self.placed_boxes.iter().map(|pb| pb.area()).sum()
    }

    /// Ratio of the area covered by placed boxes to the area of the bed
    pub fn density(&self) -> f64 {
        self.placed_area() / self.area()
    }
}

/// Samples a circle around the origin, starting at angle 2π and stepping clockwise in angle,
/// which traces the circle counter-clockwise since `x = r·sin(a)` and `y = r·cos(a)`.
fn round_outline(radius: f64) -> Vec<Point> {
    let mut outline = vec![];
    let mut angle = 2.0 * PI;
    while angle > 0.0 {
        outline.push(Point(radius * angle.sin(), radius * angle.cos()));
        angle -= ROUND_OUTLINE_STEP;
    }
    outline
}
