//! Integration tests for the apartment lifecycle

use propbox_foundation::ErrorKind;
use propbox_runtime::{Apartment, ApartmentConfig, ApartmentKind};

#[test]
fn init_uninit_cycle() {
    for _ in 0..3 {
        let apt = Apartment::init(ApartmentConfig::multi_threaded()).unwrap();
        assert!(Apartment::is_initialized());
        let _ = apt.uninit();
        assert!(!Apartment::is_initialized());
    }
}

#[test]
fn second_init_is_rejected() {
    let _apt = Apartment::init(ApartmentConfig::default()).unwrap();
    let err = Apartment::init(ApartmentConfig::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ApartmentAlreadyInitialized);
    assert!(Apartment::is_initialized());
}

#[test]
fn kind_is_kept() {
    let apt = Apartment::init(ApartmentConfig::single_threaded()).unwrap();
    assert_eq!(apt.kind(), ApartmentKind::SingleThreaded);
}

#[test]
fn threads_enter_independently() {
    let _apt = Apartment::init(ApartmentConfig::default()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let apt = Apartment::init(ApartmentConfig::default()).unwrap();
                let v = apt.box_value(7_u32);
                apt.unbox::<u32>(&v).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 7);
    }
}

#[test]
fn values_outlive_apartment() {
    let apt = Apartment::init(ApartmentConfig::default()).unwrap();
    let v = apt.box_value("kept");
    drop(apt);
    assert_eq!(v.get_string().unwrap(), "kept");
}
