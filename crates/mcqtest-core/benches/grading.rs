use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;

use mcqtest_core::codec;
use mcqtest_core::grading::grade;
use mcqtest_core::model::{QuestionRecord, RecordStore};
use mcqtest_core::validator::VALID_OPTIONS;

fn make_records(count: u32, offset: usize) -> Vec<QuestionRecord> {
    (1..=count)
        .map(|n| QuestionRecord {
            question_number: n,
            answer: String::new(),
            response: VALID_OPTIONS[(n as usize + offset) % VALID_OPTIONS.len()].to_string(),
            response_time_secs: f64::from(n % 90) + 0.25,
            correctness: None,
        })
        .collect()
}

fn bench_grade(c: &mut Criterion) {
    let responses = RecordStore::from_records(make_records(200, 0));
    let key = RecordStore::from_records(make_records(200, 1));

    c.bench_function("grade_200_questions", |b| {
        b.iter(|| grade(black_box(&responses), black_box(&key)))
    });
}

fn bench_codec(c: &mut Criterion) {
    let records = make_records(200, 0);
    let mut table = Vec::new();
    codec::write_to(&mut table, &records, Path::new("bench")).unwrap();

    c.bench_function("write_200_rows", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(table.len());
            codec::write_to(&mut out, black_box(&records), Path::new("bench")).unwrap();
            out
        })
    });

    c.bench_function("read_200_rows", |b| {
        b.iter(|| codec::read_from(black_box(table.as_slice()), Path::new("bench")).unwrap())
    });
}

criterion_group!(benches, bench_grade, bench_codec);
criterion_main!(benches);
