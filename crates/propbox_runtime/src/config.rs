//! Configuration for the apartment.

use std::fmt;

use crate::trace::TracerConfig;

/// Threading model requested when entering an apartment.
///
/// The kind is a label: it is kept on the apartment and traced, but every
/// apartment is bound to its entering thread either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApartmentKind {
    /// Single-threaded apartment.
    SingleThreaded,
    /// Multi-threaded apartment.
    #[default]
    MultiThreaded,
}

impl fmt::Display for ApartmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleThreaded => write!(f, "single-threaded"),
            Self::MultiThreaded => write!(f, "multi-threaded"),
        }
    }
}

/// Configuration for entering an apartment.
#[derive(Clone, Debug, Default)]
pub struct ApartmentConfig {
    /// The threading model.
    pub kind: ApartmentKind,
    /// Tracing of boxing activity.
    pub tracer: TracerConfig,
}

impl ApartmentConfig {
    /// Creates the default configuration (multi-threaded, tracing off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-threaded configuration.
    #[must_use]
    pub fn single_threaded() -> Self {
        Self::default().with_kind(ApartmentKind::SingleThreaded)
    }

    /// Creates a multi-threaded configuration.
    #[must_use]
    pub fn multi_threaded() -> Self {
        Self::default().with_kind(ApartmentKind::MultiThreaded)
    }

    /// Builder method to set the threading model.
    #[must_use]
    pub fn with_kind(mut self, kind: ApartmentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder method to enable tracing into the in-memory buffer.
    #[must_use]
    pub fn with_tracing(mut self) -> Self {
        self.tracer = self.tracer.enabled();
        self
    }

    /// Builder method to replace the tracer configuration.
    #[must_use]
    pub fn with_tracer(mut self, tracer: TracerConfig) -> Self {
        self.tracer = tracer;
        self
    }
}
