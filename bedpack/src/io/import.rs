use anyhow::{Context, Result, bail};
use log::warn;

use crate::entities::{Bed, BedShape, Origin};
use crate::geometry::primitives::{Point, Rect};
use crate::io::ext_repr::{ExtBed, ExtBox, ExtOrigin, ExtPoint, ExtPrinterType};
use crate::util::BedConfig;

/// Converts external representations of beds and boxes into internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    pub bed_config: BedConfig,
}

impl Importer {
    /// Creates a new instance with the given configuration.
    ///
    /// * `bed_config` - Configuration applied to every imported [`Bed`].
    pub fn new(bed_config: BedConfig) -> Importer {
        Importer { bed_config }
    }

    pub fn import_bed(&self, ext_bed: &ExtBed) -> Result<Bed> {
        let shape = match ext_bed.printer_type {
            ExtPrinterType::Cartesian => {
                let Some(y_length) = ext_bed.y_length else {
                    bail!("yLength is required for cartesian printers");
                };
                BedShape::try_rectangular(ext_bed.x_length, y_length)?
            }
            ExtPrinterType::Delta => {
                if ext_bed.y_length.is_some() {
                    warn!("[IMPORT] yLength is ignored for delta printers");
                }
                if ext_bed.place_of_origin == ExtOrigin::Corner {
                    warn!("[IMPORT] delta printers have their origin in the center, ignoring CORNER");
                }
                BedShape::try_round(ext_bed.x_length)?
            }
        };
        let origin = match ext_bed.place_of_origin {
            ExtOrigin::Corner => Origin::Corner,
            ExtOrigin::Center => Origin::Center,
        };

        Bed::try_new(shape, origin, self.bed_config).context("could not create bed")
    }

    /// Converts a bounding box into a [`Rect`] centered in the middle of it.
    pub fn import_box(&self, ext_box: &ExtBox) -> Result<Rect> {
        Rect::from_min_max(import_point(&ext_box.min), import_point(&ext_box.max))
            .with_context(|| format!("invalid box: {ext_box:?}"))
    }
}

pub fn import_point(ext_point: &ExtPoint) -> Point {
    Point(ext_point.x, ext_point.y)
}
