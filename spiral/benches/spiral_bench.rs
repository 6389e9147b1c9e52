use std::hint::black_box;

use bedpack::entities::{Bed, BedShape, Origin};
use bedpack::geometry::primitives::Rect;
use bedpack::util::BedConfig;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spiral::opt::spiral::SpiralPacker;

criterion_main!(benches);
criterion_group!(benches, fill_rectangular_bed_bench, fill_round_bed_bench);

const BOX_SIZES: [f64; 3] = [5.0, 10.0, 20.0];
const N_BOXES: usize = 200;

fn boxes(size: f64) -> Vec<Rect> {
    (0..N_BOXES)
        .map(|i| Rect::try_new(size, size + (i % 3) as f64).unwrap())
        .collect()
}

/// Fills a 250 x 210 bed with boxes until the spiral runs out of room.
/// Failed placements keep the same anchor, so later boxes are all tried against the full bed.
fn fill_rectangular_bed_bench(c: &mut Criterion) {
    let bed_shape = BedShape::try_rectangular(250.0, 210.0).unwrap();
    let bed = Bed::try_new(bed_shape, Origin::Corner, BedConfig::default()).unwrap();

    let mut group = c.benchmark_group("fill_rectangular_bed");
    for size in BOX_SIZES {
        let boxes = boxes(size);
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut packer = SpiralPacker::new(bed.clone());
                for rect in &boxes {
                    black_box(packer.place(*rect));
                }
            })
        });
    }
    group.finish();
}

fn fill_round_bed_bench(c: &mut Criterion) {
    let bed_shape = BedShape::try_round(170.0).unwrap();
    let bed = Bed::try_new(bed_shape, Origin::Center, BedConfig::default()).unwrap();

    let mut group = c.benchmark_group("fill_round_bed");
    for size in BOX_SIZES {
        let boxes = boxes(size);
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut packer = SpiralPacker::new(bed.clone());
                for rect in &boxes {
                    black_box(packer.place(*rect));
                }
            })
        });
    }
    group.finish();
}
