//! Property tests for equality and hashing of boxed values

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use propbox_engine::{BoxedValue, Point};

fn hash_of(value: &BoxedValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn equal_values_hash_equal(x in any::<f64>(), y in any::<f64>()) {
        let a = BoxedValue::create_point(Point::new(x, y));
        let b = BoxedValue::create_point(Point::new(x, y));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn same_bits_different_shape_differ(n in any::<u16>()) {
        let number = BoxedValue::create_uint16(i128::from(n)).unwrap();
        let unit = BoxedValue::create_char16(n);
        prop_assert_ne!(number, unit);
    }

    #[test]
    fn doubles_compare_by_bits(bits in any::<u64>()) {
        let a = BoxedValue::create_double(f64::from_bits(bits));
        prop_assert_eq!(a.clone(), a);
    }
}
