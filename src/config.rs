//! Configuration for huffman-codec

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    pub max_input_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_input_len: 100 * 1024 * 1024, // 100M symbols
        }
    }
}
