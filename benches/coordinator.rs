// benches/coordinator.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ssa_dashboard::{
    engine::{stats::compute_baseline, view::update_view, FilterSelection, KpiCalculator},
    fixtures::quickstart_rows,
    model::{RawRow, SsaColumn},
    store::DataSet,
};

const OWNERS: [&str; 8] = ["Alice", "Bob", "Carlos", "Daniel", "Elisa", "Fábio", "Gabi", "Hugo"];
const STATES: [&str; 4] = ["Aberta", "Em Execução", "Programada", "Fechada"];

/// Quickstart rows cycled into a report-sized dataset with varied owners/weeks.
fn synthetic(n: usize) -> DataSet {
    let base = quickstart_rows();
    let rows = (0..n)
        .map(|i| {
            let mut cells = base[i % base.len()].cells().to_vec();
            let mut set = |col: SsaColumn, v: String| cells[col.index()] = Some(v);
            set(SsaColumn::Numero, format!("SSA-{i:06}"));
            set(SsaColumn::Situacao, STATES[i % STATES.len()].to_string());
            set(SsaColumn::ResponsavelProgramacao, OWNERS[i % OWNERS.len()].to_string());
            set(SsaColumn::ResponsavelExecucao, OWNERS[(i / 3) % OWNERS.len()].to_string());
            set(SsaColumn::SemanaProgramada, format!("2024-W{:02}", 1 + i % 52));
            RawRow::new(cells)
        })
        .collect();
    DataSet::new(rows)
}

fn bench_coordinator(c: &mut Criterion) {
    let ds = synthetic(10_000);
    let none = FilterSelection::none();
    let one = FilterSelection::new(Some("Carlos".into()), None);
    let both = FilterSelection::new(Some("Carlos".into()), Some("Bob".into()));

    c.bench_function("update_view_unfiltered", |b| {
        b.iter(|| black_box(update_view(black_box(&ds), &none)))
    });

    c.bench_function("update_view_one_filter", |b| {
        b.iter(|| black_box(update_view(black_box(&ds), &one)))
    });

    c.bench_function("update_view_both_filters", |b| {
        b.iter(|| black_box(update_view(black_box(&ds), &both)))
    });

    c.bench_function("baseline_and_kpis", |b| {
        b.iter(|| {
            let stats = compute_baseline(black_box(&ds));
            let score = KpiCalculator::new(&ds).overall_health_score();
            black_box((stats.map(|s| s.total), score))
        })
    });
}

criterion_group!(benches, bench_coordinator);
criterion_main!(benches);
