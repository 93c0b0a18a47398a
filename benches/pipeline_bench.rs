//! Parse, bind and check timing on generated Galaxy documents of increasing
//! size. Each phase is measured on its own so regressions point at a crate.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gx::binder::{WorkspaceSymbolTable, bind_source_file};
use gx::checker::{CheckerOptions, check_source_file};
use gx::parse_file;
use std::hint::black_box;
use std::time::Duration;

/// Generate a document with `decl_count` top-level declarations.
fn generate_galaxy_file(decl_count: usize) -> String {
    let mut src = String::with_capacity(decl_count * 200);
    src.push_str("// generated for pipeline_bench\n\n");
    for i in 0..decl_count {
        match i % 4 {
            0 => src.push_str(&format!(
                "struct Wave{i} {{\n    int count;\n    fixed delay;\n    unit[8] units;\n}};\n\n"
            )),
            1 => src.push_str(&format!("static const int c_limit{i} = {i} * 2;\n\n")),
            2 => src.push_str(&format!(
                "int Accumulate{i}(int n, fixed scale) {{\n    int total = 0;\n    int j;\n    \
                 for (j = 0; j < n; j += 1) {{\n        if (j % 2 == 0) {{ total += j; }}\n        \
                 else {{ continue; }}\n    }}\n    while (total > 100) {{ total -= 10; }}\n    \
                 return total;\n}}\n\n"
            )),
            _ => src.push_str(&format!(
                "void Run{i}() {{\n    Wave{w} w;\n    w.count = Accumulate{a}(4, 1.5);\n    \
                 w.delay = w.count * 0.5;\n}}\n\n",
                w = i - 3,
                a = i - 1
            )),
        }
    }
    src
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(30);

    for decl_count in [40, 400, 2000] {
        let source = generate_galaxy_file(decl_count);
        let label = format!("{decl_count}_decls");

        group.bench_with_input(BenchmarkId::new("1_parse", &label), &source, |b, src| {
            b.iter(|| black_box(parse_file("bench.galaxy", src)));
        });

        group.bench_with_input(BenchmarkId::new("2_bind", &label), &source, |b, src| {
            b.iter_batched(
                || parse_file("bench.galaxy", src),
                |mut file| {
                    let mut workspace = WorkspaceSymbolTable::new();
                    bind_source_file(&mut workspace, &mut file);
                    black_box(workspace.symbols().len())
                },
                criterion::BatchSize::LargeInput,
            );
        });

        let mut workspace = WorkspaceSymbolTable::new();
        let mut file = parse_file("bench.galaxy", &source);
        bind_source_file(&mut workspace, &mut file);
        group.bench_function(BenchmarkId::new("3_check", &label), |b| {
            b.iter(|| {
                let diagnostics = check_source_file(
                    &workspace,
                    [&file],
                    &file,
                    CheckerOptions::default(),
                );
                black_box(diagnostics.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
