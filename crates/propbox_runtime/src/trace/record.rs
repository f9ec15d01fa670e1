//! Trace event and record types.

use std::fmt;

use propbox_foundation::TypeTag;

use crate::config::ApartmentKind;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced while an apartment is live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// The apartment was entered.
    ApartmentInit {
        /// The threading model requested.
        kind: ApartmentKind,
    },

    /// The apartment was torn down.
    ApartmentUninit {
        /// Number of records traced before teardown.
        records: usize,
    },

    /// A value was boxed.
    ValueBoxed {
        /// The tag of the new value.
        tag: TypeTag,
    },

    /// A value was retrieved with the matching accessor.
    ValueUnboxed {
        /// The tag of the retrieved value.
        tag: TypeTag,
    },

    /// A retrieval asked for the wrong shape.
    UnboxRejected {
        /// The tag the retrieval asked for.
        expected: TypeTag,
        /// The tag the value carries.
        actual: TypeTag,
    },
}

impl TraceEvent {
    /// Returns the event type name, used for filtering.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::ApartmentInit { .. } => "apartment-init",
            Self::ApartmentUninit { .. } => "apartment-uninit",
            Self::ValueBoxed { .. } => "value-boxed",
            Self::ValueUnboxed { .. } => "value-unboxed",
            Self::UnboxRejected { .. } => "unbox-rejected",
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApartmentInit { kind } => write!(f, "apartment-init {kind}"),
            Self::ApartmentUninit { records } => {
                write!(f, "apartment-uninit after {records} records")
            }
            Self::ValueBoxed { tag } => write!(f, "value-boxed {tag}"),
            Self::ValueUnboxed { tag } => write!(f, "value-unboxed {tag}"),
            Self::UnboxRejected { expected, actual } => {
                write!(f, "unbox-rejected expected {expected}, got {actual}")
            }
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A recorded event with its id and timestamp.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Monotonically increasing record id.
    pub id: u64,
    /// Nanoseconds since the tracer started.
    pub timestamp_ns: u64,
    /// The event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

impl fmt::Display for TraceRecord {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let us = self.timestamp_ns / 1000;
        if us >= 1000 {
            write!(f, "[{:06}] {:.3}ms {}", self.id, us as f64 / 1000.0, self.event)
        } else {
            write!(f, "[{:06}] {us}us {}", self.id, self.event)
        }
    }
}
