use dotmap::{to_bits, to_index, BitVector, MAX_INDEX};
use proptest::prelude::*;

proptest! {
    #[test]
    fn index_roundtrip(n in 0u16..=MAX_INDEX) {
        prop_assert_eq!(to_index(&to_bits(n)), n);
    }

    #[test]
    fn bits_roundtrip(raw in prop::array::uniform11(any::<bool>())) {
        let bits = BitVector::from_array(raw);
        let index = to_index(&bits);
        prop_assert!(index <= MAX_INDEX);
        prop_assert_eq!(to_bits(index), bits);
        prop_assert_eq!(to_index(&to_bits(index)), index);
    }

    #[test]
    fn binary_string_matches_bits(n in 0u16..=MAX_INDEX) {
        let text = to_bits(n).to_string();
        prop_assert_eq!(text.len(), 11);
        prop_assert_eq!(u16::from_str_radix(&text, 2).unwrap(), n);
        prop_assert_eq!(text.parse::<BitVector>().unwrap().index(), n);
    }
}

#[test]
fn every_index_is_distinct() {
    let mut seen = std::collections::HashSet::new();
    for n in 0..=MAX_INDEX {
        assert!(seen.insert(to_bits(n)));
    }
    assert_eq!(seen.len(), 2048);
}

#[test]
fn edge_patterns() {
    assert_eq!(to_index(&BitVector::zero()), 0);
    assert_eq!(to_index(&BitVector::from_array([true; 11])), 2047);
    assert_eq!(to_bits(1024).to_string(), "10000000000");
    assert_eq!(to_bits(1).to_string(), "00000000001");
}

#[test]
fn slices_must_be_eleven_long() {
    assert!(BitVector::from_slice(&[true; 10]).is_err());
    assert!(BitVector::from_slice(&[true; 12]).is_err());
    assert_eq!(BitVector::from_slice(&[true; 11]).unwrap().index(), 2047);
}
