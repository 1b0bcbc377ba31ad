use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fsreport::locale::Language;
use fsreport::output::{csv, pdf};
use fsreport::scan::analyze;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_directory_structure(dir: &Path, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    for i in 0..files_per_dir {
        let file_path = dir.join(format!("file_{}.txt", i));
        fs::write(&file_path, format!("Content of file {}", i)).unwrap();
    }
    fs::write(dir.join("bundle.zip"), "PK").unwrap();

    for i in 0..3 {
        let subdir_path = dir.join(format!("subdir_{}", i));
        fs::create_dir_all(&subdir_path).unwrap();
        create_test_directory_structure(&subdir_path, depth - 1, files_per_dir);
    }
}

fn bench_scan_and_render(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_test_directory_structure(temp_dir.path(), 4, 10);
    let records = analyze(temp_dir.path()).unwrap();
    let labels = Language::English.labels();

    c.bench_function("analyze", |b| {
        b.iter(|| analyze(black_box(temp_dir.path())).unwrap())
    });

    c.bench_function("render_csv", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            csv::render(black_box(&records), labels, &mut buffer).unwrap();
            buffer
        })
    });

    c.bench_function("render_pdf", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            pdf::render(black_box(&records), &mut buffer).unwrap();
            buffer
        })
    });
}

criterion_group!(benches, bench_scan_and_render);
criterion_main!(benches);
