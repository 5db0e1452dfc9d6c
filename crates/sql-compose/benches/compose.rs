use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sql_compose::prelude::*;

/// Build an UPDATE with `n` SET assignments:
/// UPDATE "t" SET "col0" = :p0, "col1" = :p1, ...
fn build_update(n: usize) -> Sequence {
    let assignment = Literal::new("{c} = {v}");
    let sets = Literal::new(", ").join((0..n).map(|i| {
        Fragment::from(
            assignment
                .format([
                    (
                        "c",
                        Fragment::from(Identifier::new([format!("col{i}")]).unwrap()),
                    ),
                    (
                        "v",
                        Fragment::from(Placeholder::new(format!("p{i}")).unwrap()),
                    ),
                ])
                .unwrap(),
        )
    }));

    Literal::new("UPDATE {t} SET {sets}")
        .format([
            ("t", Fragment::from(Identifier::new(["t"]).unwrap())),
            ("sets", Fragment::from(sets)),
        ])
        .unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/render");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_update(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let stmt = build_update(n);
                black_box(stmt.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/join");

    for n in [5, 20, 100, 500] {
        let markers: Vec<Fragment> = (0..n)
            .map(|i| Placeholder::new(format!("p{i}")).unwrap().into())
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &markers, |b, markers| {
            b.iter(|| {
                let list = Literal::new(", ").join(markers.iter().cloned());
                black_box(list.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_identifier_quoting(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/identifier_quoting");

    for n in [1, 3, 8] {
        let ident = Identifier::new(vec![r#"re"al"ly"qu"ot"ed"#; n]).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &ident, |b, ident| {
            b.iter(|| black_box(ident.to_sql()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_build_and_render,
    bench_join,
    bench_identifier_quoting
);
criterion_main!(benches);
