//! The nine instrumented sorting routines.
//!
//! Every routine sorts a private working copy in place and reports each
//! comparison and mutation through [`RunContext::step`]. The terminal event is
//! emitted by the session, not by the routine.

mod binary_insertion;
mod bubble;
mod counting;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

use serde::{Deserialize, Serialize};

use crate::session::{Interrupted, RunContext};

/// Sorting algorithms raced in every session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
    Shell,
    BinaryInsertion,
    Counting,
}

impl Algorithm {
    /// All algorithms in display order
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::BinaryInsertion,
        Algorithm::Counting,
    ];

    /// Human-readable name shown next to the run
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::BinaryInsertion => "Binary Insertion Sort",
            Algorithm::Counting => "Counting Sort",
        }
    }

    /// Short identifier (thread names, exports)
    pub fn slug(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Shell => "shell",
            Algorithm::BinaryInsertion => "binary-insertion",
            Algorithm::Counting => "counting",
        }
    }

    /// One-line description of the strategy
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Compares adjacent elements and swaps them when out of order",
            Algorithm::Selection => "Finds the minimum and moves it to the front",
            Algorithm::Insertion => "Inserts each element into its place in the sorted prefix",
            Algorithm::Quick => "Partitions around a pivot and sorts each side recursively",
            Algorithm::Merge => "Splits the sequence and merges sorted halves",
            Algorithm::Heap => "Builds a max-heap and extracts the root repeatedly",
            Algorithm::Shell => "Insertion sort over shrinking gaps",
            Algorithm::BinaryInsertion => "Insertion sort that finds the slot by binary search",
            Algorithm::Counting => "Counts occurrences of each value and rebuilds the sequence",
        }
    }

    /// Look up an algorithm by its slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.slug() == slug)
    }

    /// Sort `data` in place, emitting every step through `ctx`
    pub fn sort(&self, data: &mut [u32], ctx: &mut RunContext<'_>) -> Result<(), Interrupted> {
        match self {
            Algorithm::Bubble => bubble::sort(data, ctx),
            Algorithm::Selection => selection::sort(data, ctx),
            Algorithm::Insertion => insertion::sort(data, ctx),
            Algorithm::Quick => quick::sort(data, ctx),
            Algorithm::Merge => merge::sort(data, ctx),
            Algorithm::Heap => heap::sort(data, ctx),
            Algorithm::Shell => shell::sort(data, ctx),
            Algorithm::BinaryInsertion => binary_insertion::sort(data, ctx),
            Algorithm::Counting => counting::sort(data, ctx),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
