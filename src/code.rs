//! Code table derivation from a prefix-code tree

use crate::tree::Node;
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from symbol to its '0'/'1' code string. Codes correspond to
/// distinct leaf paths, so no code is a prefix of another.
pub type CodeTable<S> = HashMap<S, String>;

/// Walk the tree depth-first and record each leaf's path: '0' for a left
/// descent, '1' for a right one.
///
/// A root that is itself a leaf (single-symbol alphabet) would get the empty
/// string from the plain recursion, which cannot be decoded; it is assigned
/// the one-bit fallback code "0" instead.
pub fn derive_codes<S: Eq + Hash + Clone>(root: &Node<S>) -> CodeTable<S> {
    let mut codes = HashMap::new();
    walk(root, String::new(), &mut codes);
    codes
}

fn walk<S: Eq + Hash + Clone>(node: &Node<S>, prefix: String, codes: &mut CodeTable<S>) {
    match node {
        Node::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix
            };
            codes.insert(symbol.clone(), code);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            walk(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push('1');
            walk(right, right_prefix, codes);
        }
    }
}
