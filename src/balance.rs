//! Height bookkeeping and the AVL balance test.

/// The balance state of a single binary search tree node, derived from the heights of its
/// immediate children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceState {
    /// The left subtree is at least two levels taller than the right.
    LeftHeavy,
    /// The right subtree is at least two levels taller than the left.
    RightHeavy,
    /// The subtree heights differ by at most one.
    Balanced,
}

impl BalanceState {
    /// Classifies a node from the heights of its left and right subtrees.
    pub fn of(left_height: usize, right_height: usize) -> Self {
        match factor(left_height, right_height) {
            d if d >= 2 => BalanceState::LeftHeavy,
            d if d <= -2 => BalanceState::RightHeavy,
            _ => BalanceState::Balanced,
        }
    }
}

/// Returns the signed difference `left_height - right_height`.
pub fn factor(left_height: usize, right_height: usize) -> isize {
    left_height as isize - right_height as isize
}

/// Returns the height of a node whose children have the given heights.
pub fn parent_height(left_height: usize, right_height: usize) -> usize {
    1 + left_height.max(right_height)
}
