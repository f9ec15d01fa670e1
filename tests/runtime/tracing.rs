//! Integration tests for apartment tracing

use propbox_foundation::TypeTag;
use propbox_runtime::{Apartment, ApartmentConfig, ApartmentKind, TraceEvent, TracerConfig};

#[test]
fn events_in_order() {
    let apt = Apartment::init(ApartmentConfig::single_threaded().with_tracing()).unwrap();
    let v = apt.box_value(5_u8);
    apt.unbox::<u8>(&v).unwrap();
    assert!(apt.unbox::<i16>(&v).is_err());

    let events: Vec<TraceEvent> = apt.recent_traces(3).into_iter().map(|r| r.event).collect();
    assert_eq!(
        events,
        vec![
            TraceEvent::ValueBoxed { tag: TypeTag::UInt8 },
            TraceEvent::ValueUnboxed { tag: TypeTag::UInt8 },
            TraceEvent::UnboxRejected {
                expected: TypeTag::Int16,
                actual: TypeTag::UInt8,
            },
        ]
    );
}

#[test]
fn filtered_tracing_keeps_rejections_only() {
    let tracer = TracerConfig::new()
        .enabled()
        .filter_events(vec!["unbox-rejected".to_string()]);
    let apt = Apartment::init(ApartmentConfig::new().with_tracer(tracer)).unwrap();

    let v = apt.box_value(true);
    apt.unbox::<bool>(&v).unwrap();
    let _ = apt.unbox::<u8>(&v);
    let _ = apt.unbox::<String>(&v);

    let stats = apt.trace_stats();
    assert_eq!(stats.record_count, 2);
    assert_eq!(stats.event_counts.get("unbox-rejected"), Some(&2));
}

#[test]
fn bounded_buffer() {
    let tracer = TracerConfig::new().enabled().with_buffer_size(4);
    let apt = Apartment::init(ApartmentConfig::new().with_tracer(tracer)).unwrap();
    for i in 0..10_u32 {
        apt.box_value(i);
    }
    let stats = apt.uninit();
    assert_eq!(stats.record_count, 4);
    assert_eq!(stats.total_pushed, 12);
}

#[test]
fn kind_is_traced_at_init() {
    let apt = Apartment::init(ApartmentConfig::single_threaded().with_tracing()).unwrap();
    let first = apt.recent_traces(1).remove(0);
    assert_eq!(
        first.event,
        TraceEvent::ApartmentInit {
            kind: ApartmentKind::SingleThreaded
        }
    );
}

#[test]
fn uninit_stats_include_teardown() {
    let apt = Apartment::init(ApartmentConfig::new().with_tracing()).unwrap();
    let v = apt.box_value(2.5_f64);
    apt.unbox::<f64>(&v).unwrap();

    let stats = apt.uninit();
    assert_eq!(stats.record_count, 4);
    assert_eq!(stats.event_counts.get("apartment-uninit"), Some(&1));
}

#[test]
fn stderr_output_with_zero_size_buffer() {
    let tracer = TracerConfig::new()
        .enabled()
        .with_buffer_size(0)
        .to_stderr();
    let apt = Apartment::init(ApartmentConfig::new().with_tracer(tracer)).unwrap();
    apt.box_value(1_u8);

    let stats = apt.trace_stats();
    assert_eq!(stats.record_count, 0);
    assert_eq!(stats.total_pushed, 2);
}
