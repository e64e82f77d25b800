//! Filter form benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `aggregate` | Distinct-value collection over a cached result |
//! | `render` | Full form build and serialisation, search included |
//! | `cardinality` | Render cost as the number of distinct values grows |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench render_bench
//! open target/criterion/report/index.html
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use struct_filter::model::{Column, ColumnType, RawValue, Row, Schema, Value};
use struct_filter::{FilterForm, InMemorySearch, Lang};

/// `rows` rows over four columns, each column cycling through `distinct`
/// values. One column is multi-valued.
fn catalogue(rows: usize, distinct: usize) -> InMemorySearch {
    let author = Column::new("author", "Author");
    let year = Column::new("year", "Year").with_type(ColumnType::Integer);
    let tags = Column::new("tags", "Tags").multi(true);
    let page = Column::pseudo("%pageid%", "Page");

    let mut search = InMemorySearch::default().with_schema(Schema::new("books"));
    for i in 0..rows {
        let k = i % distinct;
        let mut row = Row::new();
        row.insert("author".into(), Value::new(author.clone(), format!("Author {k}")));
        row.insert("year".into(), Value::new(year.clone(), 1900 + k as i64));
        row.insert(
            "tags".into(),
            Value::new(tags.clone(), vec![format!("tag{k}"), format!("tag{}", k + 1)]),
        );
        row.insert("%pageid%".into(), Value::new(page.clone(), RawValue::Text(format!("p:{k}"))));
        search.push_row(row);
    }
    search
}

fn aggregate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for rows in [100usize, 1_000, 10_000] {
        let search = catalogue(rows, 50);
        let form = FilterForm::new(&search).unwrap();
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &form, |b, form| {
            b.iter(|| black_box(form.column_values()))
        });
    }
    group.finish();
}

fn render_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let lang = Lang::english();
    for rows in [100usize, 1_000, 10_000] {
        let search = catalogue(rows, 50);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &search, |b, search| {
            b.iter(|| {
                let mut doc = String::new();
                FilterForm::new(search)
                    .unwrap()
                    .render("wiki:books", &lang, &mut doc)
                    .unwrap();
                black_box(doc)
            })
        });
    }
    group.finish();
}

fn cardinality_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cardinality");
    let lang = Lang::english();
    for distinct in [10usize, 100, 1_000] {
        let search = catalogue(5_000, distinct);
        let form = FilterForm::new(&search).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(distinct), &form, |b, form| {
            b.iter(|| {
                let mut doc = String::with_capacity(64 * 1024);
                form.render("wiki:books", &lang, &mut doc).unwrap();
                black_box(doc)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, aggregate_bench, render_bench, cardinality_bench);
criterion_main!(benches);
