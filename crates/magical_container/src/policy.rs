//! Ordering policies shared by every traversal view.
//!
//! A policy maps the container's elements (in insertion order) to the
//! sequence of indices a traversal visits. Views and cursors are generic over
//! the policy, so the cursor machinery exists once.

use crate::prime::is_prime;

pub trait OrderPolicy {
    const KIND: TraversalKind;

    /// Indices into `elements`, in visiting order.
    fn compute_order(elements: &[i32]) -> Vec<usize>;
}

/// Ascending by value; equal values keep insertion order.
#[derive(Clone, Copy, Debug)]
pub enum Ascending {}

/// Smallest, largest, second-smallest, second-largest, ... converging on
/// the middle of the ascending order.
#[derive(Clone, Copy, Debug)]
pub enum SideCross {}

/// Prime-valued elements only, ascending.
#[derive(Clone, Copy, Debug)]
pub enum Prime {}

impl OrderPolicy for Ascending {
    const KIND: TraversalKind = TraversalKind::Ascending;

    fn compute_order(elements: &[i32]) -> Vec<usize> {
        ascending_order(elements)
    }
}

impl OrderPolicy for SideCross {
    const KIND: TraversalKind = TraversalKind::SideCross;

    fn compute_order(elements: &[i32]) -> Vec<usize> {
        side_cross_order(elements)
    }
}

impl OrderPolicy for Prime {
    const KIND: TraversalKind = TraversalKind::Prime;

    fn compute_order(elements: &[i32]) -> Vec<usize> {
        prime_order(elements)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TraversalKind {
    Ascending,
    SideCross,
    Prime,
}

pub const ALL_TRAVERSALS: [TraversalKind; 3] = [
    TraversalKind::Ascending,
    TraversalKind::SideCross,
    TraversalKind::Prime,
];

pub fn all_traversals() -> &'static [TraversalKind] {
    &ALL_TRAVERSALS
}

pub fn traversal_name(kind: TraversalKind) -> &'static str {
    match kind {
        TraversalKind::Ascending => "ascending",
        TraversalKind::SideCross => "side_cross",
        TraversalKind::Prime => "prime",
    }
}

pub fn compute_order(kind: TraversalKind, elements: &[i32]) -> Vec<usize> {
    match kind {
        TraversalKind::Ascending => Ascending::compute_order(elements),
        TraversalKind::SideCross => SideCross::compute_order(elements),
        TraversalKind::Prime => Prime::compute_order(elements),
    }
}

pub fn ascending_order(elements: &[i32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..elements.len()).collect();
    // Stable, so ties stay in insertion order.
    order.sort_by_key(|&i| elements[i]);
    order
}

pub fn side_cross_order(elements: &[i32]) -> Vec<usize> {
    let sorted = ascending_order(elements);
    let mut order = Vec::with_capacity(sorted.len());
    let (mut lo, mut hi) = (0, sorted.len());
    while lo < hi {
        order.push(sorted[lo]);
        lo += 1;
        if lo < hi {
            hi -= 1;
            order.push(sorted[hi]);
        }
    }
    order
}

pub fn prime_order(elements: &[i32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..elements.len())
        .filter(|&i| is_prime(elements[i]))
        .collect();
    order.sort_by_key(|&i| elements[i]);
    order
}
