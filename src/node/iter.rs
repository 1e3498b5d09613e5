use std::collections::VecDeque;
use super::{Link, Node};

pub trait NodeRef: Sized {
    type Item;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Item = (&'a K, &'a V);
    fn item(self) -> (&'a K, &'a V) { (&self.key, &self.value) }
    fn left(&mut self) -> Option<&'a Node<K, V>> { self.left.as_deref() }
    fn right(&mut self) -> Option<&'a Node<K, V>> { self.right.as_deref() }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Item = (K, V);
    fn item(self) -> (K, V) { self.into_key_value() }
    fn left(&mut self) -> Link<K, V> { self.left.take() }
    fn right(&mut self) -> Link<K, V> { self.right.take() }
}

/// A double-ended in-order walk.
///
/// The back of `frames` is the forward frontier and the front is the backward frontier. Each
/// frame records which of its children have already been expanded, so the two ends meet in the
/// middle without yielding any node twice.
#[derive(Clone)]
pub struct InOrder<N> where N: NodeRef {
    frames: VecDeque<Frame<N>>,
    size: usize,
}

impl<N> InOrder<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Self {
        InOrder { frames: root.into_iter().map(Frame::new).collect(), size }
    }
}

impl<N> Iterator for InOrder<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        loop {
            let frame = self.frames.back_mut()?;

            match frame.expanded {
                Expanded::Neither | Expanded::Right => {
                    if let Some(left) = frame.expand_left() {
                        self.frames.push_back(Frame::new(left));
                    }
                }
                Expanded::Left | Expanded::Both => {
                    let right = frame.expand_right();
                    let frame = self.frames.pop_back()?;
                    if let Some(right) = right { self.frames.push_back(Frame::new(right)); }
                    self.size -= 1;
                    return Some(frame.node.item());
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> DoubleEndedIterator for InOrder<N> where N: NodeRef {
    fn next_back(&mut self) -> Option<N::Item> {
        loop {
            let frame = self.frames.front_mut()?;

            match frame.expanded {
                Expanded::Neither | Expanded::Left => {
                    if let Some(right) = frame.expand_right() {
                        self.frames.push_front(Frame::new(right));
                    }
                }
                Expanded::Right | Expanded::Both => {
                    let left = frame.expand_left();
                    let frame = self.frames.pop_front()?;
                    if let Some(left) = left { self.frames.push_front(Frame::new(left)); }
                    self.size -= 1;
                    return Some(frame.node.item());
                }
            }
        }
    }
}

impl<N> ExactSizeIterator for InOrder<N> where N: NodeRef {}

#[derive(Clone)]
struct Frame<N> {
    node: N,
    expanded: Expanded,
}

impl<N> Frame<N> where N: NodeRef {
    fn new(node: N) -> Self { Frame { node, expanded: Expanded::Neither } }

    fn expand_left(&mut self) -> Option<N> {
        self.expanded = match self.expanded {
            Expanded::Neither => Expanded::Left,
            Expanded::Right => Expanded::Both,
            Expanded::Left | Expanded::Both => return None,
        };
        self.node.left()
    }

    fn expand_right(&mut self) -> Option<N> {
        self.expanded = match self.expanded {
            Expanded::Neither => Expanded::Right,
            Expanded::Left => Expanded::Both,
            Expanded::Right | Expanded::Both => return None,
        };
        self.node.right()
    }
}

#[derive(Clone, Copy)]
enum Expanded {
    Neither,
    Left,
    Right,
    Both,
}

/// A borrowed walk in one of the four canonical orders, yielding each node with its depth.
pub enum Traverse<'a, K, V> {
    Pre(Vec<(&'a Node<K, V>, usize)>),
    In { stack: Vec<(&'a Node<K, V>, usize)>, next: Option<(&'a Node<K, V>, usize)> },
    Post(Vec<(&'a Node<K, V>, usize, bool)>),
    Level(VecDeque<(&'a Node<K, V>, usize)>),
}

impl<'a, K, V> Traverse<'a, K, V> {
    pub fn pre(root: &'a Link<K, V>) -> Self {
        Traverse::Pre(root.as_deref().map(|node| (node, 0)).into_iter().collect())
    }

    pub fn in_order(root: &'a Link<K, V>) -> Self {
        Traverse::In { stack: Vec::new(), next: root.as_deref().map(|node| (node, 0)) }
    }

    pub fn post(root: &'a Link<K, V>) -> Self {
        Traverse::Post(root.as_deref().map(|node| (node, 0, false)).into_iter().collect())
    }

    pub fn level(root: &'a Link<K, V>) -> Self {
        Traverse::Level(root.as_deref().map(|node| (node, 0)).into_iter().collect())
    }
}

impl<'a, K, V> Iterator for Traverse<'a, K, V> {
    type Item = (&'a Node<K, V>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traverse::Pre(stack) => {
                let (node, level) = stack.pop()?;
                stack.extend(node.right().map(|right| (right, level + 1)));
                stack.extend(node.left().map(|left| (left, level + 1)));
                Some((node, level))
            }
            Traverse::In { stack, next } => {
                while let Some((node, level)) = next.take() {
                    stack.push((node, level));
                    *next = node.left().map(|left| (left, level + 1));
                }

                let (node, level) = stack.pop()?;
                *next = node.right().map(|right| (right, level + 1));
                Some((node, level))
            }
            Traverse::Post(stack) => loop {
                let (node, level, expanded) = stack.pop()?;
                if expanded { return Some((node, level)); }

                stack.push((node, level, true));
                stack.extend(node.right().map(|right| (right, level + 1, false)));
                stack.extend(node.left().map(|left| (left, level + 1, false)));
            },
            Traverse::Level(queue) => {
                let (node, level) = queue.pop_front()?;
                queue.extend(node.left().map(|left| (left, level + 1)));
                queue.extend(node.right().map(|right| (right, level + 1)));
                Some((node, level))
            }
        }
    }
}
