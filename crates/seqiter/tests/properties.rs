use proptest::prelude::*;
use seqiter::{SeqIterator, slice};

proptest! {
    #[test]
    fn prop_collect_is_identity(xs: Vec<i32>) {
        prop_assert_eq!(slice(&xs).collect().unwrap(), xs);
    }

    #[test]
    fn prop_filter_keeps_matching_subsequence(xs: Vec<i32>, m in 1i32..7) {
        let expected: Vec<i32> = xs.iter().copied().filter(|x| x % m == 0).collect();
        let got = slice(&xs).filter(|x| x % m == 0).collect().unwrap();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_map_applies_to_every_element(xs: Vec<i32>) {
        let expected: Vec<i32> = xs.iter().map(|x| x.wrapping_mul(3)).collect();
        let got = slice(&xs).map(|x| x.wrapping_mul(3)).collect().unwrap();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_filter_after_map_tests_mapped_values(xs: Vec<i16>) {
        let f = |x: i16| x.wrapping_add(1);
        let p = |x: &i16| x % 2 == 0;
        let expected: Vec<i16> = xs.iter().copied().map(f).filter(p).collect();
        let got = slice(&xs).map(f).filter(p).collect().unwrap();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_reduce_matches_fold(xs: Vec<i64>) {
        let expected = xs.iter().fold(0i64, |acc, x| acc.wrapping_add(*x));
        let got = slice(&xs).reduce(|acc: i64, x| acc.wrapping_add(x)).unwrap();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_count_matches_len(xs: Vec<u8>) {
        prop_assert_eq!(slice(&xs).count(), xs.len());
    }

    #[test]
    fn prop_never_resurrects(xs: Vec<u8>, extra in 1usize..5) {
        let mut iter = slice(&xs).filter(|x| x % 3 != 0);
        while iter.advance() {}
        for _ in 0..extra {
            prop_assert!(!iter.advance());
        }
        prop_assert!(iter.current().is_err());
    }
}
