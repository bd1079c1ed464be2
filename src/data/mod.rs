//! Data module - Benchmark measurements

mod series;

pub use series::{training_benchmarks, BenchmarkSeries};
