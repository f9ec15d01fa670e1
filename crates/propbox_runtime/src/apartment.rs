//! The apartment: the scoped runtime context that brackets all boxing.
//!
//! An [`Apartment`] is entered once per thread with [`Apartment::init`] and
//! torn down when the guard is dropped (or consumed by [`Apartment::uninit`]).
//! The live marker is thread-local and belongs to this crate only; the engine
//! holds no global state.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

use propbox_engine::{BoxedValue, Unbox};
use propbox_foundation::{Error, ErrorContext, ErrorKind, Result, TypeTag};

use crate::config::{ApartmentConfig, ApartmentKind};
use crate::trace::{TraceBufferStats, TraceEvent, TraceRecord, Tracer};

thread_local! {
    static LIVE: Cell<bool> = const { Cell::new(false) };
}

/// Guard for a live apartment on the current thread.
///
/// Not `Send`: an apartment belongs to the thread that entered it.
pub struct Apartment {
    kind: ApartmentKind,
    tracer: RefCell<Tracer>,
    closed: bool,
    _thread_bound: PhantomData<*const ()>,
}

impl Apartment {
    /// Enters an apartment on the current thread.
    ///
    /// # Errors
    ///
    /// Returns `ApartmentAlreadyInitialized` if this thread already has a live
    /// apartment.
    pub fn init(config: ApartmentConfig) -> Result<Self> {
        if LIVE.with(Cell::get) {
            return Err(Error::new(ErrorKind::ApartmentAlreadyInitialized));
        }
        LIVE.with(|live| live.set(true));

        let mut tracer = Tracer::new(config.tracer);
        tracer.record(TraceEvent::ApartmentInit { kind: config.kind });

        Ok(Self {
            kind: config.kind,
            tracer: RefCell::new(tracer),
            closed: false,
            _thread_bound: PhantomData,
        })
    }

    /// Returns true if the current thread has a live apartment.
    #[must_use]
    pub fn is_initialized() -> bool {
        LIVE.with(Cell::get)
    }

    /// Returns the threading model this apartment was entered with.
    #[must_use]
    pub fn kind(&self) -> ApartmentKind {
        self.kind
    }

    /// Tears the apartment down and returns the final trace statistics,
    /// including the teardown event itself.
    #[must_use]
    pub fn uninit(mut self) -> TraceBufferStats {
        self.close();
        self.tracer.get_mut().stats()
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let tracer = self.tracer.get_mut();
        let records = tracer.buffer().len();
        tracer.record(TraceEvent::ApartmentUninit { records });
    }

    /// Boxes a native value.
    pub fn box_value(&self, value: impl Into<BoxedValue>) -> BoxedValue {
        self.track(value.into())
    }

    /// Boxes the result of a fallible creation such as `BoxedValue::create_uint8`.
    ///
    /// # Errors
    ///
    /// Passes through the creation error (for example `OutOfRange`).
    pub fn box_checked(&self, created: Result<BoxedValue>) -> Result<BoxedValue> {
        created.map(|value| self.track(value))
    }

    fn track(&self, value: BoxedValue) -> BoxedValue {
        self.tracer.borrow_mut().record(TraceEvent::ValueBoxed {
            tag: value.value_type(),
        });
        value
    }

    /// Returns the tag of a boxed value.
    #[must_use]
    pub fn value_type(&self, value: &BoxedValue) -> TypeTag {
        value.value_type()
    }

    /// Retrieves a boxed value as `T`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch`, with context naming the retrieval operation, if
    /// the value was not boxed as `T`.
    pub fn unbox<T: Unbox>(&self, value: &BoxedValue) -> Result<T> {
        match value.get::<T>() {
            Ok(native) => {
                self.tracer
                    .borrow_mut()
                    .record(TraceEvent::ValueUnboxed { tag: T::TAG });
                Ok(native)
            }
            Err(err) => {
                self.tracer.borrow_mut().record(TraceEvent::UnboxRejected {
                    expected: T::TAG,
                    actual: value.value_type(),
                });
                Err(err.with_context(
                    ErrorContext::new().with_operation(format!("Get{}", T::TAG.name())),
                ))
            }
        }
    }

    /// Returns true if tracing is enabled.
    #[must_use]
    pub fn is_tracing(&self) -> bool {
        self.tracer.borrow().is_enabled()
    }

    /// Returns copies of the most recent N trace records.
    #[must_use]
    pub fn recent_traces(&self, count: usize) -> Vec<TraceRecord> {
        self.tracer
            .borrow()
            .recent(count)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns trace statistics so far.
    #[must_use]
    pub fn trace_stats(&self) -> TraceBufferStats {
        self.tracer.borrow().stats()
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        self.close();
        LIVE.with(|live| live.set(false));
    }
}

impl std::fmt::Debug for Apartment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Apartment")
            .field("kind", &self.kind)
            .field("tracer", &self.tracer)
            .finish_non_exhaustive()
    }
}
