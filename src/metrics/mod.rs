//! Metrics for the pitch-rating service
//!
//! This module provides Prometheus metrics collection for rating outcomes
//! and calculation performance.

pub mod collector;

pub use collector::{MetricsCollector, PerformanceMetrics, RatingMetrics};
