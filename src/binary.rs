//! First-child/next-sibling transformation to a binary tree.

use tracing::instrument;

use crate::arena::NaryTree;

/// Binary node produced by the first-child/next-sibling encoding.
///
/// The vertical link always means "first child"; the horizontal link
/// chains the remaining siblings of a slot group into a singly linked
/// list. This type is output-only: nothing consumes it besides display.
#[derive(Debug, PartialEq, Eq)]
pub struct BinaryNode {
    pub label: String,
    pub first_child: Option<Box<BinaryNode>>,
    pub next_sibling: Option<Box<BinaryNode>>,
}

impl BinaryNode {
    fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            first_child: None,
            next_sibling: None,
        }
    }

    /// Number of nodes reachable from this one.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some(child) = node.first_child.as_deref() {
                stack.push(child);
            }
            if let Some(sibling) = node.next_sibling.as_deref() {
                stack.push(sibling);
            }
        }
        count
    }
}

impl NaryTree {
    /// Encodes the tree as a binary tree: left link = first child,
    /// right link = next sibling. `None` for the empty tree.
    ///
    /// Slot 0 drives the encoding: only when it holds a child are the
    /// remaining slots walked and chained as siblings, skipping empty
    /// slots without breaking the chain. A node whose slot 0 is empty
    /// therefore contributes no child chain at all, matching the
    /// reference behavior of the transform.
    #[instrument(level = "debug", skip(self))]
    pub fn to_binary(&self) -> Option<BinaryNode> {
        self.root().and_then(|root| self.binary_at(root))
    }

    fn binary_at(&self, idx: generational_arena::Index) -> Option<BinaryNode> {
        let node = self.get_node(idx)?;
        let mut binary = BinaryNode::leaf(node.label.clone());

        if let Some(mut first) = node.slots[0].and_then(|child| self.binary_at(child)) {
            // chain slots 1..ARITY right-to-left so each non-empty result
            // becomes the next sibling of the previous one
            let mut tail: Option<Box<BinaryNode>> = None;
            for slot in node.slots[1..].iter().rev() {
                let Some(child) = *slot else { continue };
                if let Some(mut sibling) = self.binary_at(child) {
                    sibling.next_sibling = tail;
                    tail = Some(Box::new(sibling));
                }
            }
            first.next_sibling = tail;
            binary.first_child = Some(Box::new(first));
        }
        Some(binary)
    }
}
