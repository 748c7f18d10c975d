//! Encoding, fusion and end-to-end inference benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mindwatch_core::types::{Modality, ModalitySet};
use mindwatch_core::{Encoder, InferenceRequest};
use mindwatch_fusion::{AttentionFusion, EncoderSet, InferenceService, StandardizingEncoder};
use mindwatch_test_utils::generate_embedding;

// =============================================================================
// Encoder Benchmarks
// =============================================================================

fn bench_encode_vision(c: &mut Criterion) {
    let encoder = StandardizingEncoder::with_defaults(Modality::Vision);
    let raw = generate_embedding(512, 42);

    c.bench_function("encode_vision_512raw", |b| {
        b.iter(|| encoder.encode(black_box(&raw)))
    });
}

fn bench_encode_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_text_scaling");
    let encoder = StandardizingEncoder::with_defaults(Modality::Text);

    for len in [8, 32, 256, 2048, 16384].iter() {
        let raw = generate_embedding(*len, 7);
        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &raw, |b, raw| {
            b.iter(|| encoder.encode(black_box(raw)))
        });
    }

    group.finish();
}

// =============================================================================
// Fusion Benchmarks
// =============================================================================

fn bench_fuse_all_modalities(c: &mut Criterion) {
    let encoders = EncoderSet::default();
    let fusion = AttentionFusion::with_defaults();
    let vision = generate_embedding(64, 1);
    let audio = generate_embedding(64, 2);
    let text = generate_embedding(32, 3);
    let context = generate_embedding(16, 4);
    let raw = ModalitySet::new()
        .with(Modality::Vision, &vision[..])
        .with(Modality::Audio, &audio[..])
        .with(Modality::Text, &text[..])
        .with(Modality::Context, &context[..]);
    let encoded = match encoders.encode_all(&raw) {
        Ok(encoded) => encoded,
        Err(e) => panic!("encoding failed: {e}"),
    };

    c.bench_function("fuse_4_modalities", |b| {
        b.iter(|| fusion.fuse(black_box(&encoded)))
    });
}

// =============================================================================
// End-to-end Inference Benchmarks
// =============================================================================

fn bench_infer(c: &mut Criterion) {
    let service = InferenceService::default();
    let mut group = c.benchmark_group("infer");

    let text_only = InferenceRequest::default()
        .with_embedding(Modality::Text, generate_embedding(384, 42));
    group.bench_function("text_only_384raw", |b| {
        b.iter(|| service.infer(black_box(&text_only)))
    });

    let all = Modality::ALL
        .into_iter()
        .fold(InferenceRequest::default(), |req, m| {
            req.with_embedding(m, generate_embedding(768, m.index() as u64))
        });
    group.bench_function("all_modalities_768raw", |b| {
        b.iter(|| service.infer(black_box(&all)))
    });

    group.finish();
}

criterion_group!(encoder_benches, bench_encode_vision, bench_encode_scaling);
criterion_group!(fusion_benches, bench_fuse_all_modalities);
criterion_group!(inference_benches, bench_infer);
criterion_main!(encoder_benches, fusion_benches, inference_benches);
