//! The Rule 30 elementary cellular automaton.
//!
//! Rule 30 maps every cell of a bit array to `left XOR (center OR right)`
//! over its three-cell neighborhood. A single seeded cell grows into an
//! aperiodic triangle of activity, which is what makes the rule usable as a
//! mixing function: after enough generations a one-bit difference has spread
//! across the whole array.

use alloc::{vec, vec::Vec};
use core::fmt::Debug;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-width ring of cells evolving under Rule 30.
///
/// Neighbor lookups wrap around the ends of the array, so the topology is
/// circular and no cell sits at a privileged edge. The ring is updated
/// synchronously: each generation is computed entirely from the previous one
/// into a scratch buffer, and the two buffers swap afterwards. Width never
/// changes over the lifetime of the value.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rule30 {
    cells: Vec<u8>,
    scratch: Vec<u8>,
}

/// Equality is over the live generation; scratch contents are transient.
impl PartialEq for Rule30 {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Rule30 {}

impl Rule30 {
    /// Creates an all-zero ring of `width` cells.
    ///
    /// The ring itself accepts any width; geometry constraints live in the
    /// sponge on top of it.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![0; width],
            scratch: vec![0; width],
        }
    }

    /// Number of cells in the ring.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Reads the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Overwrites the cell at `index` with `bit`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, bit: u8) {
        debug_assert!(bit <= 1);
        self.cells[index] = bit;
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Advances the ring by one generation.
    pub fn step(&mut self) {
        let n = self.cells.len();
        for i in 0..n {
            let left = self.cells[if i == 0 { n - 1 } else { i - 1 }];
            let center = self.cells[i];
            let right = self.cells[if i + 1 == n { 0 } else { i + 1 }];
            self.scratch[i] = left ^ (center | right);
        }
        core::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Advances the ring by `count` generations.
    pub fn steps(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }
}

/// Censored version of Debug
impl Debug for Rule30 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule30")
            .field("width", &self.width())
            .field("cells", &"<redacted>")
            .finish()
    }
}
