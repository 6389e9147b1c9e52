//! Places rectangular boxes on a rectangular or round build bed without overlap,
//! using a greedy spiral heuristic backed by convex hull geometry.

/// Entities to model a build bed and the boxes placed on it
pub mod entities;

/// Geometric primitives and the convex hull engine
pub mod geometry;

/// Importing bed and box descriptions into, and exporting placements out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
