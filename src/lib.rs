//! huffman-codec: Huffman prefix-code compression over textual bitstreams.
//!
//! Builds an optimal prefix-code tree from symbol frequencies via greedy
//! minimal-pair merging, derives a code table from the tree's leaf paths, and
//! provides the two symmetric operations:
//! - encoding a symbol sequence into a '0'/'1' stream
//! - decoding such a stream back to symbols with the tree that produced it
//!
//! The stream is textual by design: bits are characters, not packed bytes,
//! and the tree travels in-process between encode and decode; no serialized
//! tree format is defined.

pub mod code;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod freq;
pub mod tree;

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::code::{derive_codes, CodeTable};
use crate::config::CodecConfig;
use crate::error::HuffmanError;
use crate::freq::{count_frequencies, shannon_entropy};
use crate::tree::{build_tree, Node};

/// Everything one encoding pass produces: the bitstream plus the code table
/// and tree needed to decode it, alongside compression statistics.
#[derive(Debug, Clone)]
pub struct Encoded<S> {
    pub stream: String,
    pub codes: CodeTable<S>,
    pub tree: Node<S>,
    /// Input size assuming 8-bit symbols.
    pub original_bits: usize,
    /// Length of the encoded stream in bits (characters).
    pub encoded_bits: usize,
    pub ratio: f64,
    /// Shannon entropy of the input, in bits per symbol.
    pub entropy_bits: f64,
}

/// The codec engine
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Encode a symbol sequence: count frequencies, build the tree, derive
    /// codes, and concatenate them into the output stream.
    pub fn encode<S>(&self, input: &[S]) -> Result<Encoded<S>, HuffmanError>
    where
        S: Eq + Hash + Ord + Clone + Debug,
    {
        if input.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }
        if input.len() > self.config.max_input_len {
            return Err(HuffmanError::InputTooLarge {
                len: input.len(),
                max: self.config.max_input_len,
            });
        }

        let freq = count_frequencies(input);
        let entropy_bits = shannon_entropy(&freq);
        let tree = build_tree(&freq)?;
        let codes = derive_codes(&tree);
        let stream = encoder::encode_with(input, &codes)?;

        let original_bits = input.len() * 8;
        let encoded_bits = stream.len();
        let ratio = encoded_bits as f64 / original_bits as f64;
        debug!(
            symbols = input.len(),
            distinct = codes.len(),
            encoded_bits,
            "encoded input"
        );

        Ok(Encoded {
            stream,
            codes,
            tree,
            original_bits,
            encoded_bits,
            ratio,
            entropy_bits,
        })
    }

    /// Decode a stream against the tree that produced it
    pub fn decode<S: Clone>(&self, stream: &str, root: &Node<S>) -> Result<Vec<S>, HuffmanError> {
        decoder::decode(stream, root)
    }
}

impl Default for HuffmanCodec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

/// Encode with the default configuration
pub fn encode<S>(input: &[S]) -> Result<Encoded<S>, HuffmanError>
where
    S: Eq + Hash + Ord + Clone + Debug,
{
    HuffmanCodec::default().encode(input)
}

/// Decode a stream against the tree that produced it
pub fn decode<S: Clone>(stream: &str, root: &Node<S>) -> Result<Vec<S>, HuffmanError> {
    decoder::decode(stream, root)
}
