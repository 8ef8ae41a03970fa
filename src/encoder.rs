//! Encoding a symbol sequence through a code table

use crate::code::CodeTable;
use crate::error::HuffmanError;
use std::fmt::Debug;
use std::hash::Hash;

/// Concatenate the code of each input symbol, in input order.
///
/// Fails with `UnknownSymbol` on the first symbol missing from the table; no
/// partial stream is returned. Pure function of its two arguments.
pub fn encode_with<S>(input: &[S], codes: &CodeTable<S>) -> Result<String, HuffmanError>
where
    S: Eq + Hash + Debug,
{
    let mut stream = String::new();
    for sym in input {
        let code = codes
            .get(sym)
            .ok_or_else(|| HuffmanError::UnknownSymbol(format!("{sym:?}")))?;
        stream.push_str(code);
    }
    Ok(stream)
}
