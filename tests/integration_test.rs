//! Integration tests for huffman-codec

use huffman_codec::code::derive_codes;
use huffman_codec::config::CodecConfig;
use huffman_codec::error::HuffmanError;
use huffman_codec::freq::count_frequencies;
use huffman_codec::tree::build_tree;
use huffman_codec::{decode, encode, HuffmanCodec};

#[test]
fn test_full_lifecycle() {
    let data: Vec<u8> = b"the quick brown fox jumps over the lazy dog".repeat(50);
    let encoded = encode(&data).unwrap();
    assert!(encoded.encoded_bits > 0);
    assert_eq!(encoded.original_bits, data.len() * 8);
    let decoded = decode(&encoded.stream, &encoded.tree).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_huffman_scenario() {
    let input: Vec<char> = "Huffman".chars().collect();
    let encoded = encode(&input).unwrap();

    // f is the only weight-2 leaf; no weight-1 leaf may sit above it.
    let f_len = encoded.codes[&'f'].len();
    for (sym, code) in &encoded.codes {
        if *sym != 'f' {
            assert!(f_len <= code.len(), "f got a longer code than {sym:?}");
        }
    }

    let freq = count_frequencies(&input);
    let weighted: usize = freq
        .iter()
        .map(|(s, &f)| f as usize * encoded.codes[s].len())
        .sum();
    assert_eq!(encoded.stream.len(), weighted);

    let decoded: String = decode(&encoded.stream, &encoded.tree)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(decoded, "Huffman");
}

#[test]
fn test_degenerate_single_symbol() {
    let input: Vec<char> = "aaaa".chars().collect();
    let encoded = encode(&input).unwrap();
    assert_eq!(encoded.codes.len(), 1);
    assert!(!encoded.codes[&'a'].is_empty());
    assert_eq!(decode(&encoded.stream, &encoded.tree).unwrap(), input);
}

#[test]
fn test_mismatched_table_reports_unknown_symbol() {
    let tree = build_tree(&count_frequencies(b"ab")).unwrap();
    let codes = derive_codes(&tree);
    let err = huffman_codec::encoder::encode_with(b"abc", &codes).unwrap_err();
    assert!(matches!(err, HuffmanError::UnknownSymbol(_)));
}

#[test]
fn test_truncated_stream_reports_malformed() {
    let input: Vec<u8> = b"abracadabra".to_vec();
    let encoded = encode(&input).unwrap();
    // The rarest symbol's code has at least two bits; its proper prefix is
    // a stream cut off before reaching a leaf.
    let long = encoded
        .codes
        .values()
        .max_by_key(|c| c.len())
        .unwrap();
    let truncated = &long[..long.len() - 1];
    assert!(matches!(
        decode(truncated, &encoded.tree),
        Err(HuffmanError::MalformedStream(_))
    ));
}

#[test]
fn test_codec_config_limit() {
    let codec = HuffmanCodec::new(CodecConfig { max_input_len: 8 });
    let result = codec.encode(b"under the limit");
    assert!(matches!(
        result,
        Err(HuffmanError::InputTooLarge { len: 15, max: 8 })
    ));
    assert!(codec.encode(b"ok").is_ok());
}

#[test]
fn test_random_roundtrips() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..25 {
        let len = rng.gen_range(1..400);
        let data: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'p')).collect();
        let encoded = encode(&data).unwrap();
        assert_eq!(
            decode(&encoded.stream, &encoded.tree).unwrap(),
            data,
            "roundtrip failed for {data:?}"
        );
    }
}
