//! The four generation stages and their orchestration
//!
//! Stages run strictly in sequence over one shared [`crate::spatial::TileGrid`]:
//! room placement, corridor carving, region connection, dead-end resolution.

/// Candidate connection discovery and randomized region merging
pub mod connections;
/// Self-avoiding randomized-walk corridor growth
pub mod corridors;
/// Dead-end loop-opening, stub trimming and corner recomputation
pub mod deadends;
/// Configuration, validation and the generation entry point
pub mod executor;
/// Rectangular room placement with overlap rejection
pub mod rooms;

use rand::{Rng, rngs::StdRng};

// Uniform over the whole slice, last element included.
pub(crate) fn choose<T: Copy>(rng: &mut StdRng, items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len())).copied()
}
