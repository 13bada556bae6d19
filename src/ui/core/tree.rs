use super::geom::{Pos, Rect};
use super::id::Id;
use crate::models::Step;
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sense(u16);

impl Sense {
    pub const NONE: Self = Self(0);
    pub const HOVER: Self = Self(1 << 0);
    pub const CLICK: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Sense {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sense {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Unknown,
    StepperButton { stepper: u32, step: Step },
    StepperValue { stepper: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub layer: u8,
    pub z: u32,
    pub sense: Sense,
    pub kind: NodeKind,
}

impl Node {
    pub fn contains(&self, p: Pos) -> bool {
        self.rect.contains(p)
    }
}

/// Nodes registered by widgets during a frame, queried for hit-testing.
#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn push(&mut self, mut node: Node) {
        // z defaults to insertion order.
        if node.z == 0 {
            node.z = self.nodes.len() as u32;
        }
        self.nodes.push(node);
    }

    /// Topmost node under `p`: highest layer, then highest z.
    pub fn hit_test(&self, p: Pos) -> Option<&Node> {
        self.hit_test_with_sense(p, Sense::NONE)
    }

    pub fn hit_test_with_sense(&self, p: Pos, required: Sense) -> Option<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.sense.contains(required) && n.contains(p))
            .max_by_key(|n| (n.layer, n.z))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
