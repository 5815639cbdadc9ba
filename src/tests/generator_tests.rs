//! Facade tests with injected serial sources

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::ops::Range;

    use crate::tests::test_utils::{at, may_11};
    use crate::*;

    #[test]
    fn test_quick_generate_defaults() {
        let seen = Cell::new(None);
        let source = |range: Range<i64>| {
            seen.set(Some(range));
            5
        };
        let id = DateSerialGenerator::quick_generate(may_11(), &source).unwrap();

        assert_eq!(id, 25051111000005);
        assert_eq!(seen.take(), Some(1..999));
    }

    #[test]
    fn test_quick_generate_in_custom_range() {
        let source = |range: Range<i64>| range.end - 1;
        let id = DateSerialGenerator::quick_generate_in(may_11(), 10, 5_000, &source).unwrap();
        assert_eq!(id, 25051111004999);
    }

    #[test]
    fn test_invalid_ranges() {
        let source = |range: Range<i64>| range.start;
        for (min, max) in [(5, 5), (10, 5), (-1, 10)] {
            assert_eq!(
                DateSerialGenerator::quick_generate_in(may_11(), min, max, &source),
                Err(DateSerialError::InvalidSerialRange { min, max })
            );
        }
    }

    #[test]
    fn test_source_serial_too_large_for_budget() {
        // 12 date digits + 4 filler leave 3 serial digits; the fixed 4-digit
        // padding then overflows regardless
        let source = |_: Range<i64>| 5;
        let result = DateSerialGenerator::get_generator(at(2025, 5, 11, 22, 0), 1, 999, &source)
            .unwrap()
            .with_full_year()
            .with_time()
            .with_filler(DateSerialGenerator::DEFAULT_FILLER)
            .unwrap()
            .generate();
        assert!(matches!(
            result,
            Err(DateSerialError::EncodingOverflow { .. })
        ));
    }

    #[test]
    fn test_get_generator_returns_default_request() {
        let source = |_: Range<i64>| 102;
        let request = DateSerialGenerator::get_generator(may_11(), 1, 999, &source).unwrap();

        assert_eq!(request.serial(), 102);
        assert_eq!(request.filler(), 0);
        assert!(request.two_digit_year());
        assert_eq!(request.generate().unwrap(), 2505110102);
    }

    #[test]
    fn test_dyn_source() {
        let source: &dyn SerialSource = &|range: Range<i64>| range.start;
        let id = DateSerialGenerator::quick_generate(may_11(), source).unwrap();
        assert_eq!(id, 25051111000001);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_thread_random_serial_in_range() {
        let base = 25051111000000;
        for _ in 0..500 {
            let id = DateSerialGenerator::quick_generate(may_11(), &ThreadRandom).unwrap();
            assert!((1..999).contains(&(id - base)), "serial out of range in {id}");
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_seeded_source_repeats() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let a = SharedRandom::new(StdRng::seed_from_u64(7));
        let b = SharedRandom::new(StdRng::seed_from_u64(7));
        for _ in 0..32 {
            assert_eq!(
                DateSerialGenerator::quick_generate(may_11(), &a),
                DateSerialGenerator::quick_generate(may_11(), &b)
            );
        }
    }
}
