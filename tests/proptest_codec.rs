//! Property-based tests for the Huffman container.
//!
//! Run with: cargo test --test proptest_codec

use proptest::prelude::*;

use huffzip::container::Container;
use huffzip::{FrequencyTable, HuffmanCodec, HuffmanTree};

/// Inputs ranging over a small alphabet, where symbols repeat a lot.
fn small_alphabet_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c'), Just(b'#')], 0..200)
}

/// Arbitrary bytes, covering every marker and delimiter value.
fn any_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..1024)
}

/// Inputs with at least two distinct symbols, so a real tree is built.
fn multi_symbol_strategy() -> impl Strategy<Value = Vec<u8>> {
    (any::<u8>(), any::<u8>(), any_bytes_strategy())
        .prop_filter("needs two symbols", |(a, b, _)| a != b)
        .prop_map(|(a, b, mut rest)| {
            rest.push(a);
            rest.push(b);
            rest
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_roundtrip_any_bytes(input in any_bytes_strategy()) {
        let codec = HuffmanCodec::new();
        let encoded = codec.encode(&input);
        let decoded = codec.decode(encoded.data()).unwrap();
        prop_assert_eq!(decoded.data(), &input[..]);
    }

    #[test]
    fn prop_roundtrip_small_alphabet(input in small_alphabet_strategy()) {
        let codec = HuffmanCodec::new();
        let decoded = codec.decode(codec.encode(&input).data()).unwrap();
        prop_assert_eq!(decoded.into_data(), input);
    }

    #[test]
    fn prop_single_symbol_roundtrip(symbol in any::<u8>(), count in 0usize..2000) {
        let input = vec![symbol; count];
        let codec = HuffmanCodec::new();
        let decoded = codec.decode(codec.encode(&input).data()).unwrap();
        prop_assert_eq!(decoded.into_data(), input);
    }

    #[test]
    fn prop_size_fields(input in any_bytes_strategy()) {
        let encoded = HuffmanCodec::new().encode(&input);
        prop_assert_eq!(encoded.original_size(), input.len());
        prop_assert_eq!(encoded.compressed_size(), encoded.data().len());
    }

    #[test]
    fn prop_codes_are_prefix_free(input in multi_symbol_strategy()) {
        let frequencies = FrequencyTable::from_bytes(&input);
        let codes = HuffmanTree::build(&frequencies).unwrap().code_table();
        prop_assert_eq!(codes.len(), frequencies.len());
        prop_assert!(codes.is_prefix_free());
        prop_assert!(codes.iter().all(|(_, c)| !c.is_empty()));
    }

    #[test]
    fn prop_tree_string_roundtrip(input in multi_symbol_strategy()) {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&input)).unwrap();
        let back = HuffmanTree::deserialize(&tree.serialize()).unwrap();
        prop_assert!(tree.root.same_shape(&back.root));
        prop_assert_eq!(tree.code_table(), back.code_table());
    }

    #[test]
    fn prop_padding_matches_bit_length(input in multi_symbol_strategy()) {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&input)).unwrap();
        let bits = tree.code_table().encoded_bits(&input).unwrap();

        let encoded = HuffmanCodec::new().encode(&input);
        match Container::parse(encoded.data()).unwrap() {
            Container::Coded { padding, payload, .. } => {
                prop_assert!(padding <= 7);
                prop_assert_eq!(padding as usize, (8 - bits % 8) % 8);
                prop_assert_eq!(payload.len() * 8 - padding as usize, bits);
            }
            other => prop_assert!(false, "expected a coded container, got {:?}", other),
        }
    }

    #[test]
    fn prop_garbage_never_panics(input in any_bytes_strategy()) {
        // either a clean decode or a format error
        if let Err(e) = HuffmanCodec::new().decode(&input) {
            prop_assert!(e.is_format());
        }
    }
}
