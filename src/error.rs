//! Error types for huffman-codec

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("empty input")]
    EmptyInput,

    #[error("input too large: {len} symbols exceeds limit of {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("symbol {0} has no entry in the code table")]
    UnknownSymbol(String),

    #[error("malformed stream: {0}")]
    MalformedStream(String),
}
