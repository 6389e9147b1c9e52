use anyhow::Result;
use bedpack::entities::Bed;
use bedpack::geometry::primitives::{Point, Rect};
use bedpack::io::export::{export_box, export_point};
use bedpack::io::ext_repr::{ExtBed, ExtBox, ExtJob, ExtPlacement};
use bedpack::io::import::Importer;
use itertools::Itertools;
use log::{debug, info, warn};

use crate::config::SpiralConfig;

/// Places boxes one after the other on a [`Bed`], spiralling outwards from its center.
pub struct SpiralPacker {
    pub bed: Bed,
    n_placed: usize,
    n_failed: usize,
}

impl SpiralPacker {
    pub fn new(bed: Bed) -> Self {
        Self {
            bed,
            n_placed: 0,
            n_failed: 0,
        }
    }

    /// Builds the bed described by `ext_bed` and restores `current_boxes` on it.
    pub fn from_ext(importer: &Importer, ext_bed: &ExtBed, current_boxes: &[ExtBox]) -> Result<Self> {
        let bed = importer.import_bed(ext_bed)?;
        let current: Vec<Rect> = current_boxes
            .iter()
            .map(|ext_box| importer.import_box(ext_box))
            .collect::<Result<_>>()?;

        let mut packer = Self::new(bed);
        packer.replay(&current);
        Ok(packer)
    }

    /// Restores boxes at their own center, without checking whether they fit.
    /// The last one becomes the anchor for the next placement.
    pub fn replay(&mut self, boxes: &[Rect]) {
        for rect in boxes {
            self.bed.add_box_at_position(*rect, rect.center());
        }
        debug!("[SPIRAL] restored {} boxes", boxes.len());
    }

    pub fn place(&mut self, new_box: Rect) -> Option<Point> {
        let position = self.bed.add_box(new_box);
        match position {
            Some(p) => {
                self.n_placed += 1;
                info!(
                    "[SPIRAL] placed {} x {} box at {p} ({} on bed)",
                    new_box.width(),
                    new_box.height(),
                    self.bed.placed_boxes().len()
                );
            }
            None => {
                self.n_failed += 1;
                warn!(
                    "[SPIRAL] no position found for {} x {} box",
                    new_box.width(),
                    new_box.height()
                );
            }
        }
        position
    }

    pub fn place_all(&mut self, new_boxes: impl IntoIterator<Item = Rect>) -> Vec<Option<Point>> {
        let positions = new_boxes.into_iter().map(|b| self.place(b)).collect_vec();
        self.log_summary();
        positions
    }

    pub fn log_summary(&self) {
        info!(
            "[SPIRAL] finished, {} placed, {} failed, density: {:.3}%",
            self.n_placed,
            self.n_failed,
            self.bed.density() * 100.0
        );
    }

    pub fn n_placed(&self) -> usize {
        self.n_placed
    }

    pub fn n_failed(&self) -> usize {
        self.n_failed
    }
}

/// Finds a position for `new_box` on a bed already holding `current_boxes`.
/// Returns the center the box should be moved to, or `None` if it does not fit.
pub fn add_box(
    ext_bed: &ExtBed,
    new_box: &ExtBox,
    current_boxes: &[ExtBox],
    config: SpiralConfig,
) -> Result<Option<Point>> {
    let importer = Importer::new(config.bed_config);
    let mut packer = SpiralPacker::from_ext(&importer, ext_bed, current_boxes)?;
    let new_box = importer.import_box(new_box)?;
    Ok(packer.place(new_box))
}

/// Same as [`add_box`] for several boxes, placed in the given order.
/// Boxes that do not fit get `None` and do not affect the boxes after them.
pub fn add_boxes(
    ext_bed: &ExtBed,
    new_boxes: &[ExtBox],
    current_boxes: &[ExtBox],
    config: SpiralConfig,
) -> Result<Vec<Option<Point>>> {
    let importer = Importer::new(config.bed_config);
    let mut packer = SpiralPacker::from_ext(&importer, ext_bed, current_boxes)?;
    let new_boxes: Vec<Rect> = new_boxes
        .iter()
        .map(|ext_box| importer.import_box(ext_box))
        .collect::<Result<_>>()?;
    Ok(packer.place_all(new_boxes))
}

/// Places all new boxes of `ext_job`.
/// The job's margin, if present, overrides the one in `config`.
pub fn solve(ext_job: &ExtJob, config: SpiralConfig) -> Result<(Bed, Vec<ExtPlacement>)> {
    let config = config.with_margin(ext_job.margin);
    let importer = Importer::new(config.bed_config);
    let mut packer = SpiralPacker::from_ext(&importer, &ext_job.bed, &ext_job.current_boxes)?;

    info!(
        "[SPIRAL] placing {} boxes on a {:?} bed holding {} boxes, margin: {}",
        ext_job.new_boxes.len(),
        packer.bed.shape(),
        ext_job.current_boxes.len(),
        packer.bed.margin()
    );

    let mut placements = Vec::with_capacity(ext_job.new_boxes.len());
    for ext_box in &ext_job.new_boxes {
        let new_box = importer.import_box(ext_box)?;
        let placement = match packer.place(new_box) {
            Some(p) => ExtPlacement {
                ext_box: export_box(&new_box.translated(p)),
                position: Some(export_point(p)),
            },
            None => ExtPlacement {
                ext_box: *ext_box,
                position: None,
            },
        };
        placements.push(placement);
    }
    packer.log_summary();

    Ok((packer.bed, placements))
}
