use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::{FailureKind, Resource};

/// Hvor et svar til slutt kom fra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fixture,
    Unavailable,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Fixture => "fixture",
            DataSource::Unavailable => "unavailable",
        }
    }
}

/// Tellere per klient; eget register slik at tester ikke deler tilstand.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    fetch_total: IntCounterVec,
    fetch_failures_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let fetch_total = IntCounterVec::new(
            Opts::new("sportsee_fetch_total", "Resolved resource fetches by source"),
            &["resource", "source"],
        )?;
        let fetch_failures_total = IntCounterVec::new(
            Opts::new(
                "sportsee_fetch_failures_total",
                "Absorbed live fetch failures by kind",
            ),
            &["resource", "kind"],
        )?;

        registry.register(Box::new(fetch_total.clone()))?;
        registry.register(Box::new(fetch_failures_total.clone()))?;

        Ok(Self {
            registry,
            fetch_total,
            fetch_failures_total,
        })
    }

    pub fn record_source(&self, resource: Resource, source: DataSource) {
        self.fetch_total
            .with_label_values(&[resource.as_str(), source.as_str()])
            .inc();
    }

    pub fn record_failure(&self, resource: Resource, kind: FailureKind) {
        self.fetch_failures_total
            .with_label_values(&[resource.as_str(), kind.as_str()])
            .inc();
    }

    pub fn source_count(&self, resource: Resource, source: DataSource) -> u64 {
        self.fetch_total
            .with_label_values(&[resource.as_str(), source.as_str()])
            .get()
    }

    pub fn failure_count(&self, resource: Resource, kind: FailureKind) -> u64 {
        self.fetch_failures_total
            .with_label_values(&[resource.as_str(), kind.as_str()])
            .get()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prometheus tekstformat.
    pub fn gather_text(&self) -> String {
        let mut buf = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buf) {
            log::warn!("metrics encode failed: {e}");
            return String::new();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
