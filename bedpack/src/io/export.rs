use crate::entities::{Bed, BedShape, Origin};
use crate::geometry::primitives::{Point, Rect};
use crate::io::ext_repr::{ExtBed, ExtBox, ExtOrigin, ExtPoint, ExtPrinterType};

pub fn export_point(p: Point) -> ExtPoint {
    ExtPoint { x: p.x(), y: p.y() }
}

pub fn export_box(rect: &Rect) -> ExtBox {
    ExtBox {
        min: export_point(rect.min()),
        max: export_point(rect.max()),
    }
}

pub fn export_bed(bed: &Bed) -> ExtBed {
    let place_of_origin = match bed.origin() {
        Origin::Corner => ExtOrigin::Corner,
        Origin::Center => ExtOrigin::Center,
    };
    match bed.shape() {
        BedShape::Rectangular { width, height } => ExtBed {
            printer_type: ExtPrinterType::Cartesian,
            place_of_origin,
            x_length: width,
            y_length: Some(height),
        },
        BedShape::Round { diameter } => ExtBed {
            printer_type: ExtPrinterType::Delta,
            place_of_origin,
            x_length: diameter,
            y_length: None,
        },
    }
}
