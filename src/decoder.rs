//! Decoding a textual bitstream against a prefix-code tree

use crate::error::HuffmanError;
use crate::tree::Node;

/// Walk the tree bit by bit: '0' descends left, '1' descends right; reaching
/// a leaf emits its symbol and resets the walk to the root. The stream must
/// consist of a whole number of complete codes.
///
/// A tree that is a single leaf has nowhere to descend; each digit then
/// stands for one emission of the sole symbol, matching the one-bit fallback
/// code the encoder uses for that alphabet.
pub fn decode<S: Clone>(stream: &str, root: &Node<S>) -> Result<Vec<S>, HuffmanError> {
    if let Node::Leaf { symbol, .. } = root {
        let mut output = Vec::with_capacity(stream.len());
        for (pos, bit) in stream.chars().enumerate() {
            if bit != '0' && bit != '1' {
                return Err(HuffmanError::MalformedStream(format!(
                    "invalid digit {bit:?} at bit {pos}"
                )));
            }
            output.push(symbol.clone());
        }
        return Ok(output);
    }

    let mut output = Vec::new();
    let mut current = root;
    for (pos, bit) in stream.chars().enumerate() {
        current = match (bit, current) {
            ('0', Node::Internal { left, .. }) => left,
            ('1', Node::Internal { right, .. }) => right,
            ('0' | '1', Node::Leaf { .. }) => {
                return Err(HuffmanError::MalformedStream(format!(
                    "no descent possible at bit {pos}"
                )))
            }
            _ => {
                return Err(HuffmanError::MalformedStream(format!(
                    "invalid digit {bit:?} at bit {pos}"
                )))
            }
        };
        if let Node::Leaf { symbol, .. } = current {
            output.push(symbol.clone());
            current = root;
        }
    }

    if !std::ptr::eq(current, root) {
        return Err(HuffmanError::MalformedStream(
            "stream ends mid-code".to_string(),
        ));
    }
    Ok(output)
}
