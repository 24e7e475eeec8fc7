//! Extraction Performance Benchmarks
//!
//! Measures parsing plus model extraction over generated message files of
//! growing size, and rendering of the extracted model.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eextract::{
    DeclarationWalker, EntityExtractor, RenderOptions, ServiceExtractor, render_entity,
};
use std::fmt::Write;
use std::hint::black_box;

/// Generate a protoc-style messages file with `count` structs
fn create_messages_code(count: usize) -> String {
    let mut code = String::from(
        "package bench\n\nimport (\n\tprotoimpl \"google.golang.org/protobuf/runtime/protoimpl\"\n\ttimestamppb \"google.golang.org/protobuf/types/known/timestamppb\"\n)\n\n",
    );
    for i in 0..count {
        let _ = write!(
            code,
            "type Message{i} struct {{\n\
             \tstate         protoimpl.MessageState\n\
             \tsizeCache     protoimpl.SizeCache\n\
             \tunknownFields protoimpl.UnknownFields\n\n\
             \tId        string                 `json:\"id,omitempty\"`\n\
             \tTags      []string               `json:\"tags,omitempty\"`\n\
             \tChildren  []*Message{i}          `json:\"children,omitempty\"`\n\
             \tCreatedAt *timestamppb.Timestamp `json:\"created_at,omitempty\"`\n\
             }}\n\n"
        );
    }
    code
}

/// Generate a gRPC server interface with `count` methods
fn create_service_code(count: usize) -> String {
    let mut code = String::from("package bench\n\nimport \"context\"\n\ntype BenchServiceServer interface {\n");
    for i in 0..count {
        let _ = writeln!(
            code,
            "\tCall{i}(context.Context, *Call{i}Request) (*Call{i}Response, error)"
        );
    }
    code.push_str("\tmustEmbedUnimplementedBenchServiceServer()\n}\n");
    code
}

fn bench_entity_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity_extraction");

    for count in [10, 100, 1000] {
        let code = create_messages_code(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("structs", count), &code, |b, code| {
            let mut walker = DeclarationWalker::new().expect("Failed to create walker");
            let extractor = EntityExtractor::new();
            b.iter(|| {
                let entities = walker.walk_source(black_box(code), &extractor);
                black_box(entities)
            });
        });
    }

    group.finish();
}

fn bench_service_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("service_extraction");

    for count in [10, 100] {
        let code = create_service_code(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("methods", count), &code, |b, code| {
            let mut walker = DeclarationWalker::new().expect("Failed to create walker");
            let extractor = ServiceExtractor::default();
            b.iter(|| {
                let services = walker.walk_source(black_box(code), &extractor);
                black_box(services)
            });
        });
    }

    group.finish();
}

fn bench_fixture_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixture_files");
    let messages = include_str!("../tests/fixtures/go/thing.pb.go");
    let services = include_str!("../tests/fixtures/go/thing_grpc.pb.go");

    group.throughput(Throughput::Bytes(messages.len() as u64));
    group.bench_function("thing.pb.go", |b| {
        let mut walker = DeclarationWalker::new().expect("Failed to create walker");
        b.iter(|| black_box(walker.walk_source(black_box(messages), &EntityExtractor::new())));
    });

    group.throughput(Throughput::Bytes(services.len() as u64));
    group.bench_function("thing_grpc.pb.go", |b| {
        let mut walker = DeclarationWalker::new().expect("Failed to create walker");
        let extractor = ServiceExtractor::default();
        b.iter(|| black_box(walker.walk_source(black_box(services), &extractor)));
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let code = create_messages_code(100);
    let mut walker = DeclarationWalker::new().expect("Failed to create walker");
    let entities = walker
        .walk_source(&code, &EntityExtractor::new())
        .expect("Failed to extract entities");
    let options = RenderOptions::default();

    c.bench_function("render_entities_100", |b| {
        b.iter(|| {
            for entity in &entities {
                black_box(render_entity(black_box(entity), &options));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_entity_extraction,
    bench_service_extraction,
    bench_fixture_files,
    bench_rendering
);
criterion_main!(benches);
