//! Demonstration entry point: encode a fixed sample string, print the code
//! table and stream with size statistics, then decode and print the result.

use anyhow::Result;
use std::collections::BTreeMap;

fn main() -> Result<()> {
    let text = "Huffman";
    let symbols: Vec<char> = text.chars().collect();

    let encoded = huffman_codec::encode(&symbols)?;

    let table: BTreeMap<char, &str> = encoded
        .codes
        .iter()
        .map(|(sym, code)| (*sym, code.as_str()))
        .collect();
    println!("Huffman codes: {}", serde_json::to_string(&table)?);
    println!("Encoded stream: {}", encoded.stream);
    println!("Original size: {} bits", encoded.original_bits);
    println!("Compressed size: {} bits", encoded.encoded_bits);

    let decoded: String = huffman_codec::decode(&encoded.stream, &encoded.tree)?
        .into_iter()
        .collect();
    println!("Decoded data: {decoded}");

    Ok(())
}
