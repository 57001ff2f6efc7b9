// benches/search.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use assembly_search::{
    dataset::{self, Dataset},
    notes::NoteStore,
    render,
    search,
    store::MemoryKv,
};

/// ~300 members with three staff fields each, roughly the size of one assembly.
fn synthetic(n: usize) -> Dataset {
    let mut rows = Vec::with_capacity(n + 1);
    rows.push(r#"{"HG_NM":"이름","STAFF":"보좌관","SECRETARY":"선임비서관","SECRETARY2":"비서관"}"#.to_string());
    for i in 0..n {
        rows.push(format!(
            r#"{{"HG_NM":"의원{i}","POLY_NM":"정당{p}","TEL_NO":"02-784-{i:04}","STAFF":"보좌{i}a, 보좌{i}b","SECRETARY":"선임{i}","SECRETARY2":"비서{i}a, 비서{i}b, 비서{i}c","STATUS_CD":"현직"}}"#,
            p = i % 5
        ));
    }
    dataset::parse(&format!("[{}]", rows.join(","))).expect("synthetic dataset parses")
}

fn bench_search(c: &mut Criterion) {
    let ds = synthetic(300);
    let notes = NoteStore::new(MemoryKv::new());

    c.bench_function("search_subject_hit", |b| {
        b.iter(|| search::search(black_box("의원299"), black_box(&ds)).map(|r| r.len()))
    });

    c.bench_function("search_last_role_hit", |b| {
        b.iter(|| search::search(black_box("비서150c"), black_box(&ds)).map(|r| r.len()))
    });

    c.bench_function("search_miss", |b| {
        b.iter(|| search::search(black_box("없음"), black_box(&ds)).map(|r| r.len()))
    });

    c.bench_function("search_and_render_broad", |b| {
        b.iter(|| {
            let doc = render::search_and_render(black_box("보좌1"), black_box(&ds), &notes);
            black_box(doc.blocks().len())
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
