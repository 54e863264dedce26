/*!
# Node Representation

Vertices are `Node = u32` values in `0..n`. Paths and predecessor arrays are
stored as plain `Vec<Node>`, so keeping nodes at 32 bit halves the footprint
of every per-vertex buffer compared to `usize`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// Used as the "no predecessor" marker in predecessor arrays.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Returns `Some(u)` if `u != INVALID_NODE` and `None` otherwise
#[inline]
pub const fn valid_node(u: Node) -> Option<Node> {
    if u == INVALID_NODE { None } else { Some(u) }
}
