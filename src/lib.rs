//! Measures CPU throughput by timing trial-division primality testing, first on one
//! thread and then across every logical processor, and reports the parallel speedup.

pub mod config;
pub mod error;
pub mod executor;
pub mod io;
pub mod metrics;
pub mod parallel;
pub mod partition;
pub mod primality;
pub mod report;
pub mod system;

pub use error::BenchError;
