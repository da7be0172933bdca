use criterion::{criterion_group, criterion_main, Criterion};
use recipe_stats_core::{Calculator, Filter, Record, SummaryCalculator};

const RECIPES: [&str; 6] = [
    "American One-Pan Mushroom",
    "Cherry Balsamic Pork Chops",
    "Grilled Cheese and Veggie Jumble",
    "Hot Honey Barbecue Chicken Legs",
    "Tex-Mex Tilapia",
    "Speedy Steak Fajitas",
];
const DELIVERIES: [&str; 4] =
    ["Thursday 10AM - 2PM", "Saturday 1AM - 8PM", "Friday 11AM - 3PM", "Monday 9AM - 12PM"];

fn mk_record(index: usize) -> Record {
    Record::new(
        format!("10{:03}", index % 250),
        RECIPES[index % RECIPES.len()],
        DELIVERIES[index % DELIVERIES.len()],
    )
}

fn bench_filter() -> Filter {
    Filter::new("10120", "10AM - 3PM", ["Potato", "Veggie", "Mushroom"])
}

fn bench_validate(c: &mut Criterion) {
    let records = (0..10_000).map(mk_record).collect::<Vec<_>>();

    c.bench_function("validate_10000_records", |b| {
        b.iter(|| records.iter().filter(|record| record.is_valid()).count());
    });
}

fn bench_calculate_and_aggregate(c: &mut Criterion) {
    let records = (0..10_000).map(mk_record).collect::<Vec<_>>();

    c.bench_function("calculate_and_aggregate_10000_records", |b| {
        b.iter(|| {
            let mut calculator = SummaryCalculator::new(bench_filter());
            for record in &records {
                calculator.calculate(record);
            }
            calculator.aggregate()
        });
    });
}

criterion_group!(calculator_benches, bench_validate, bench_calculate_and_aggregate);
criterion_main!(calculator_benches);
