use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use inspectxml::xml::{build_tree, tokenize};
use inspectxml::from_str;
use inspectxml::report::map_report;

const INSPECTIONS: &str = include_str!("../tests/fixtures/Inspections.xml");

fn large_export(instances: usize) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<InspectionsExport>\n  <Inspections>\n");
    for i in 0..instances {
        doc.push_str(&format!(
            "    <InspectionInstance Id=\"RULE{}\" Line=\"{i}\" Severity=\"WARN\">\n      \
             <Message>finding {i}</Message>\n      \
             <FilePath>/repo/src/file{i}.cs</FilePath>\n    </InspectionInstance>\n",
            i % 7
        ));
    }
    doc.push_str("  </Inspections>\n</InspectionsExport>\n");
    doc
}

fn bench_stages(c: &mut Criterion) {
    c.bench_function("inspectxml_tokenize", |b| {
        b.iter(|| tokenize(black_box(INSPECTIONS)))
    });

    let tokens = tokenize(INSPECTIONS).unwrap_or_default();
    c.bench_function("inspectxml_build_tree", |b| {
        b.iter(|| build_tree(black_box(&tokens), black_box(INSPECTIONS)))
    });

    if let Ok(root) = build_tree(&tokens, INSPECTIONS) {
        c.bench_function("inspectxml_map_report", |b| {
            b.iter(|| map_report(black_box(root.clone())))
        });
    }
}

fn bench_full(c: &mut Criterion) {
    c.bench_function("inspectxml_fixture", |b| {
        b.iter(|| from_str(black_box(INSPECTIONS)))
    });

    let large = large_export(500);
    c.bench_function("inspectxml_500_instances", |b| {
        b.iter(|| from_str(black_box(&large)))
    });
}

criterion_group!(benches, bench_stages, bench_full);
criterion_main!(benches);
