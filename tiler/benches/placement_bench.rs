use std::fs::File;
use std::hint::black_box;
use std::io::BufReader;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use tiler::entities::PatternStyle;
use tiler::io::ext_repr::{ExtInstance, ExtLength};
use tiler::io::import::Importer;
use tiler::placement::PlacementEngine;

criterion_main!(benches);
criterion_group!(benches, placement_bench);

const SHOWER_PATH: &str = "../assets/shower.json";

const PATTERNS: [PatternStyle; 3] = [
    PatternStyle::Straight,
    PatternStyle::HalfOffset,
    PatternStyle::ThirdOffset,
];

/// Benchmark a complete layout run of the shower instance for every row pattern
fn placement_bench(c: &mut Criterion) {
    let mut ext_instance: ExtInstance =
        serde_json::from_reader(BufReader::new(File::open(SHOWER_PATH).unwrap())).unwrap();
    //smaller tiles to get a few thousand placements per run
    ext_instance.tile.width = ExtLength::Inches(3.0);
    ext_instance.tile.height = ExtLength::Inches(3.0);

    let mut group = c.benchmark_group("placement");
    for pattern in PATTERNS {
        ext_instance.pattern = pattern;
        let instance = Importer::default().import_instance(&ext_instance).unwrap();
        group.bench_function(BenchmarkId::from_parameter(format!("{pattern:?}")), |b| {
            b.iter(|| PlacementEngine::new(black_box(&instance)).run())
        });
    }
    group.finish();
}
