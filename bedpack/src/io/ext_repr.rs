use serde::{Deserialize, Serialize};

/// Kind of printer the bed belongs to, which determines its shape
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtPrinterType {
    /// Rectangular bed of `xLength` by `yLength`
    Cartesian,
    /// Round bed with diameter `xLength`
    Delta,
}

/// Place of the origin of the bed's coordinate system
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtOrigin {
    Corner,
    Center,
}

/// External representation of a [`Bed`](crate::entities::Bed).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtBed {
    pub printer_type: ExtPrinterType,
    pub place_of_origin: ExtOrigin,
    /// Width of a cartesian bed or diameter of a delta bed
    pub x_length: f64,
    /// Height of a cartesian bed, ignored for delta beds
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y_length: Option<f64>,
}

/// External representation of a [`Point`](crate::geometry::primitives::Point).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPoint {
    pub x: f64,
    pub y: f64,
}

/// External representation of a [`Rect`](crate::geometry::primitives::Rect):
/// the 2D bounding box around a model, given by its bottom left and top right corners.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtBox {
    pub min: ExtPoint,
    pub max: ExtPoint,
}

/// A bed, the boxes already on it and the boxes that should be added to it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtJob {
    pub bed: ExtBed,
    /// Boxes already on the bed, restored at their current position without any checks
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub current_boxes: Vec<ExtBox>,
    /// Boxes to place, their current position is ignored
    pub new_boxes: Vec<ExtBox>,
    /// Minimum clearance between boxes, overrides the configured margin if present
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub margin: Option<f64>,
}

/// Outcome of the attempt to place a box
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement {
    /// The box at its final position, or as it was submitted if it could not be placed
    #[serde(rename = "box")]
    pub ext_box: ExtBox,
    /// Center of the placed box, absent if the box could not be placed
    pub position: Option<ExtPoint>,
}
