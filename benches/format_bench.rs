//! Format Benchmark
//!
//! Measures parse and print throughput (bytes/sec) for the tsgen pipeline.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tsgen::emitter::{PrintOptions, print_to_string};
use tsgen::parser::parse_source;

// =============================================================================
// Test Sources
// =============================================================================

const SIMPLE_SOURCE: &str = r#"
function add(a: number, b: number): number {
    return a + b;
}

const result = add(1, 2);
console.log(result);
"#;

const MEDIUM_SOURCE: &str = r#"
/** A registered user. */
interface User {
    id: number;
    name: string;
    email?: string;
}

class UserService {
    private users: User[] = [];

    addUser(user: User): void {
        this.users.push(user);
    }

    getUser(id: number): User | undefined {
        return this.users.find((u) => u.id === id);
    }
}

const service = new UserService();
service.addUser({ id: 1, name: "Alice" });
const alice = service.getUser(1);
console.log(alice?.name);
"#;

/// Generate a source with `functions` documented functions of `statements`
/// statements each.
fn generate_large_source(functions: usize, statements: usize) -> String {
    let mut source = String::new();
    for i in 0..functions {
        source.push_str(&format!(
            "/**\n * Function {i}.\n * @param x the input\n */\nexport function fn{i}(x: number): number {{\n"
        ));
        for j in 0..statements {
            source.push_str(&format!("    const v{j} = x * {j} + {i}; // step {j}\n"));
        }
        source.push_str("    return x;\n}\n\n");
    }
    source
}

fn format(source: &str) -> String {
    match parse_source("bench.ts", source) {
        Ok(statements) => print_to_string(&statements, PrintOptions::default()),
        Err(err) => panic!("benchmark source failed to parse: {err}"),
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_format_simple(c: &mut Criterion) {
    c.bench_function("format_simple", |b| b.iter(|| black_box(format(SIMPLE_SOURCE))));
}

fn bench_format_medium(c: &mut Criterion) {
    c.bench_function("format_medium", |b| b.iter(|| black_box(format(MEDIUM_SOURCE))));
}

/// Benchmark: parse + print throughput for various sizes
fn bench_format_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_throughput");

    for (functions, statements) in [(10, 5), (50, 5), (100, 10)] {
        let source = generate_large_source(functions, statements);
        let label = format!("{functions}fn_{statements}stmt");
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("format", &label), &source, |b, source| {
            b.iter(|| black_box(format(source)))
        });
    }

    group.finish();
}

/// Benchmark: print only, with the tree parsed once outside the loop
fn bench_print_only(c: &mut Criterion) {
    let source = generate_large_source(50, 10);
    let statements = match parse_source("bench.ts", &source) {
        Ok(statements) => statements,
        Err(err) => panic!("benchmark source failed to parse: {err}"),
    };

    c.bench_function("print_only", |b| {
        b.iter(|| black_box(print_to_string(&statements, PrintOptions::default())))
    });
}

criterion_group!(
    benches,
    bench_format_simple,
    bench_format_medium,
    bench_format_throughput,
    bench_print_only
);
criterion_main!(benches);
