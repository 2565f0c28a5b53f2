//! Benchmark-only crate. See `benches/stream_bench.rs`.
