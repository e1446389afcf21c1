//! Metrics collection using Prometheus
//!
//! This module provides metrics collection for the pitch-rating service
//! using Prometheus metrics.

use crate::rating::RatingResult;
use anyhow::Result;
use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use std::time::Duration;

/// Main metrics collector for the rating service
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Rating outcome metrics
    rating_metrics: RatingMetrics,

    /// Performance metrics
    performance_metrics: PerformanceMetrics,
}

/// Rating outcome metrics
#[derive(Clone)]
pub struct RatingMetrics {
    /// Total ratings computed by position
    pub ratings_total: IntCounterVec,

    /// Distribution of final ratings by position
    pub rating_value: HistogramVec,

    /// Submissions rejected before rating, by reason
    pub rejected_total: IntCounterVec,

    /// Ratings whose total fell outside the bounds
    pub clamped_total: IntCounter,

    /// Ratings that earned the versatility bonus
    pub versatility_bonus_total: IntCounter,
}

/// Performance metrics
#[derive(Clone)]
pub struct PerformanceMetrics {
    /// Time spent validating and rating one submission
    pub calculation_duration: Histogram,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let rating_metrics = RatingMetrics::new(&registry)?;
        let performance_metrics = PerformanceMetrics::new(&registry)?;

        Ok(Self {
            registry,
            rating_metrics,
            performance_metrics,
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Get rating metrics
    pub fn rating(&self) -> &RatingMetrics {
        &self.rating_metrics
    }

    /// Get performance metrics
    pub fn performance(&self) -> &PerformanceMetrics {
        &self.performance_metrics
    }

    /// Record a computed rating
    pub fn record_rating(&self, result: &RatingResult, duration: Duration) {
        let position = result.position.as_str();

        self.rating_metrics
            .ratings_total
            .with_label_values(&[position])
            .inc();
        self.rating_metrics
            .rating_value
            .with_label_values(&[position])
            .observe(result.rating);

        if result.was_clamped() {
            self.rating_metrics.clamped_total.inc();
        }
        if result.has_versatility_bonus() {
            self.rating_metrics.versatility_bonus_total.inc();
        }

        self.performance_metrics
            .calculation_duration
            .observe(duration.as_secs_f64());
    }

    /// Record a submission rejected before rating
    pub fn record_rejection(&self, reason: &str) {
        self.rating_metrics
            .rejected_total
            .with_label_values(&[reason])
            .inc();
    }

    /// Export all metrics in Prometheus text format
    pub fn export_text(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl RatingMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let ratings_total = IntCounterVec::new(
            Opts::new("pitch_rating_ratings_total", "Total ratings computed"),
            &["position"],
        )?;
        registry.register(Box::new(ratings_total.clone()))?;

        let rating_value = HistogramVec::new(
            HistogramOpts::new("pitch_rating_rating_value", "Distribution of final ratings")
                .buckets(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]),
            &["position"],
        )?;
        registry.register(Box::new(rating_value.clone()))?;

        let rejected_total = IntCounterVec::new(
            Opts::new(
                "pitch_rating_rejected_total",
                "Submissions rejected before rating",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(rejected_total.clone()))?;

        let clamped_total = IntCounter::new(
            "pitch_rating_clamped_total",
            "Ratings clamped to the 1.0 or 10.0 bound",
        )?;
        registry.register(Box::new(clamped_total.clone()))?;

        let versatility_bonus_total = IntCounter::new(
            "pitch_rating_versatility_bonus_total",
            "Ratings awarded the versatility bonus",
        )?;
        registry.register(Box::new(versatility_bonus_total.clone()))?;

        Ok(Self {
            ratings_total,
            rating_value,
            rejected_total,
            clamped_total,
            versatility_bonus_total,
        })
    }
}

impl PerformanceMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let calculation_duration = Histogram::with_opts(
            HistogramOpts::new(
                "pitch_rating_calculation_duration_seconds",
                "Time spent validating and rating a submission",
            )
            .buckets(vec![0.000001, 0.00001, 0.0001, 0.001, 0.01, 0.1]),
        )?;
        registry.register(Box::new(calculation_duration.clone()))?;

        Ok(Self {
            calculation_duration,
        })
    }
}
