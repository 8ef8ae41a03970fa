//! Prefix-code tree construction via minimal-pair merging

use crate::error::HuffmanError;
use crate::freq::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// A node of the prefix-code tree. Leaves carry a symbol; internal nodes own
/// exactly two children and weigh the sum of their subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

// Heap entry ordered by (weight, seq), reversed for min-heap behavior in
// BinaryHeap. The sequence number makes the order total: leaves get 0..k in
// ascending symbol order, merged nodes take the next number, so construction
// is deterministic regardless of HashMap iteration order.
struct HeapEntry<S> {
    weight: u64,
    seq: u64,
    node: Node<S>,
}

impl<S> Eq for HeapEntry<S> {}
impl<S> PartialEq for HeapEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl<S> PartialOrd for HeapEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<S> Ord for HeapEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// Build the optimal prefix-code tree by repeatedly merging the two nodes of
/// smallest weight. Runs in O(k log k) for k distinct symbols.
///
/// A single-entry table produces a tree that is just the lone leaf; the code
/// generator and decoder handle that degenerate shape explicitly.
pub fn build_tree<S>(freq: &FrequencyTable<S>) -> Result<Node<S>, HuffmanError>
where
    S: Eq + Hash + Ord + Clone + Debug,
{
    if freq.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let mut symbols: Vec<(&S, u64)> = freq.iter().map(|(s, &f)| (s, f)).collect();
    symbols.sort_by(|a, b| a.0.cmp(b.0));

    let mut heap = BinaryHeap::with_capacity(symbols.len());
    let mut seq = 0u64;
    for (sym, f) in symbols {
        heap.push(HeapEntry {
            weight: f,
            seq,
            node: Node::Leaf {
                symbol: sym.clone(),
                weight: f,
            },
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let a = heap.pop().unwrap();
        let b = heap.pop().unwrap();
        let weight = a.weight + b.weight;
        heap.push(HeapEntry {
            weight,
            seq,
            node: Node::Internal {
                weight,
                left: Box::new(a.node),
                right: Box::new(b.node),
            },
        });
        seq += 1;
    }

    let root = heap.pop().map(|e| e.node).ok_or(HuffmanError::EmptyInput)?;
    debug!(
        leaves = freq.len(),
        total_weight = root.weight(),
        "built prefix-code tree"
    );
    Ok(root)
}
