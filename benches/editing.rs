//! Benchmarks for buffer operations on large notes.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use notepad::editor::{self, EditorState, SelectionRange};

fn large_note() -> String {
    "The quick brown fox jumps over the lazy dog. café 漢字\n".repeat(2_000)
}

fn bench_insert_middle(c: &mut Criterion) {
    let text = large_note();
    let mid = text.chars().count() / 2;
    let state = EditorState::new(text, SelectionRange::collapsed(mid)).unwrap();
    c.bench_function("insert_middle", |b| {
        b.iter(|| black_box(&state).insert_at(black_box("hello")))
    });
}

fn bench_delete_selection(c: &mut Criterion) {
    let text = large_note();
    let len = text.chars().count();
    let state = EditorState::new(text, SelectionRange::new(len / 4, len / 2)).unwrap();
    c.bench_function("delete_selection", |b| {
        b.iter(|| black_box(&state).delete_effective())
    });
}

fn bench_effective_text(c: &mut Criterion) {
    let text = large_note();
    let len = text.chars().count();
    let state = EditorState::new(text, SelectionRange::new(len / 3, len - 10)).unwrap();
    c.bench_function("effective_text", |b| {
        b.iter(|| black_box(&state).effective_text().len())
    });
}

fn bench_line_col(c: &mut Criterion) {
    let text = large_note();
    let end = text.chars().count();
    c.bench_function("line_col_end", |b| {
        b.iter(|| editor::line_col(black_box(&text), black_box(end)))
    });
}

criterion_group!(
    benches,
    bench_insert_middle,
    bench_delete_selection,
    bench_effective_text,
    bench_line_col
);
criterion_main!(benches);
