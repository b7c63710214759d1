//! Region growing over any adjacency relation.
//!
//! Every flood in the crate is an instance of [`grow_until`]: a breadth-first expansion from
//! a seed set, one ring per iteration, bounded by a [`Barrier`] and capped at `max_iters`.
//! The cap only exists to guarantee termination on malformed input; hitting it is reported
//! through [`Region::capped`] and never fails.
//!
//! ```
//! use hashbrown::HashSet;
//! use meshtopo::flood::{Barrier, grow};
//!
//! // Integers on a line, each adjacent to its successor and predecessor
//! let region = grow([5u32], |n: u32| [n.saturating_sub(1), n + 1], Barrier::Within(&(3..=8).collect()), 100);
//! assert_eq!(region.elements, (3..=8).collect::<HashSet<u32>>());
//! assert!(!region.capped);
//! ```

use hashbrown::HashSet;
use std::hash::Hash;
use tracing::{debug, warn};

pub mod faces;
pub mod flat;
pub mod verts;

pub use faces::{
    MeshEnd, flood_edge_loop, flood_faces, flood_faces_strict, grow_selection, grow_to_find_face,
    grow_to_find_mesh_end,
};
pub use flat::linked_flat_faces;
pub use verts::{
    VertSeed, decrease_vert_selection, flood_vertex_perimeter, flood_within_verts,
    increase_vert_selection,
};

/// Iteration cap used by the named face floods.
pub const DEFAULT_MAX_ITERS: usize = 1000;

/// Iteration cap for a single island flood while partitioning.
pub const ISLAND_MAX_ITERS: usize = 10_000;

/// Island cap used when partitioning a whole mesh.
pub const DEFAULT_MAX_ISLANDS: usize = 100;

/// Limits on which elements a flood may claim.
pub enum Barrier<'a, T> {
    /// Grow until the adjacency runs out.
    Open,
    /// Elements pre-included in the result; since they are already claimed the flood never
    /// expands through them. Used to fill one side of a closed seam.
    Levy(&'a HashSet<T>),
    /// Only elements of this pool may be claimed.
    Within(&'a HashSet<T>),
    /// Only elements passing the predicate may be claimed.
    Accept(&'a dyn Fn(&T) -> bool),
}

impl<T: Eq + Hash> Barrier<'_, T> {
    fn admits(&self, item: &T) -> bool {
        match self {
            Barrier::Open | Barrier::Levy(_) => true,
            Barrier::Within(pool) => pool.contains(item),
            Barrier::Accept(pred) => pred(item),
        }
    }
}

/// Outcome of a flood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<T: Eq + Hash> {
    /// Seeds plus everything claimed (plus the levy set, if any).
    pub elements: HashSet<T>,
    /// Expansion rounds run after the first ring.
    pub iterations: usize,
    /// True when the flood stopped at its cap with elements still unexpanded.
    pub capped: bool,
}

impl<T: Eq + Hash> Region<T> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.elements.contains(item)
    }

    pub fn into_elements(self) -> HashSet<T> {
        self.elements
    }

    /// Log a warning naming `operation` if the flood hit its cap.
    pub(crate) fn warn_if_capped(self, operation: &str) -> Self {
        if self.capped {
            warn!(
                "{}: max iterations reached ({}) with {} elements claimed",
                operation,
                self.iterations,
                self.elements.len()
            );
        }
        self
    }
}

/// Flood from `seeds` through `neighbors_of`.
///
/// The first ring (neighbors of the seeds) is claimed immediately, then each iteration claims
/// the unclaimed neighbors of the previous ring, up to `max_iters` iterations. Every element
/// is expanded at most once, and the seeds are always part of the result.
pub fn grow<T, N, I>(
    seeds: impl IntoIterator<Item = T>,
    neighbors_of: N,
    barrier: Barrier<'_, T>,
    max_iters: usize,
) -> Region<T>
where
    T: Copy + Eq + Hash,
    N: FnMut(T) -> I,
    I: IntoIterator<Item = T>,
{
    grow_until(seeds, neighbors_of, barrier, max_iters, |_| false)
}

/// [`grow`], additionally stopping as soon as `halt` accepts a freshly claimed ring.
///
/// `halt` sees the first ring too, so a goal adjacent to the seeds stops the flood before
/// the first iteration.
pub fn grow_until<T, N, I, H>(
    seeds: impl IntoIterator<Item = T>,
    mut neighbors_of: N,
    barrier: Barrier<'_, T>,
    max_iters: usize,
    mut halt: H,
) -> Region<T>
where
    T: Copy + Eq + Hash,
    N: FnMut(T) -> I,
    I: IntoIterator<Item = T>,
    H: FnMut(&HashSet<T>) -> bool,
{
    let seeds: HashSet<T> = seeds.into_iter().collect();
    let mut total = seeds.clone();
    if let Barrier::Levy(levy) = &barrier {
        total.extend(levy.iter().copied());
    }

    let mut frontier: HashSet<T> = HashSet::new();
    for &s in &seeds {
        for n in neighbors_of(s) {
            if !total.contains(&n) && barrier.admits(&n) {
                frontier.insert(n);
            }
        }
    }
    total.extend(frontier.iter().copied());

    let mut iterations = 0;
    let mut halted = !frontier.is_empty() && halt(&frontier);
    while !halted && !frontier.is_empty() && iterations < max_iters {
        iterations += 1;

        let mut next = HashSet::new();
        for &f in &frontier {
            for n in neighbors_of(f) {
                if !total.contains(&n) && barrier.admits(&n) {
                    next.insert(n);
                }
            }
        }

        frontier = next;
        if !frontier.is_empty() {
            total.extend(frontier.iter().copied());
            halted = halt(&frontier);
        }
    }

    let capped = !halted && !frontier.is_empty();
    debug!(
        "flood: {} seeds grew to {} elements in {} iterations{}",
        seeds.len(),
        total.len(),
        iterations,
        if capped { " (capped)" } else { "" }
    );

    Region { elements: total, iterations, capped }
}
