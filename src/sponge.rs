//! The absorb/squeeze state machine.
//!
//! [`Rule30Sponge`] pairs a [`Rule30`] ring with two fixed taps. Absorbed
//! bits overwrite the cell at `width / 2 + steps`; squeezed bits are read
//! from the middle cell `width / 2`. After every bit, in either direction,
//! the automaton runs `steps` generations. The mixing between bits carries
//! absorbed material away from the injection tap and makes each output bit
//! depend on all earlier input and output, so neither tap needs to advance.
//! Injection overwrites rather than XORs, like a duplex sponge operating in
//! overwrite mode.
//!
//! Bytes are split and reassembled least-significant-bit first on both the
//! absorb and squeeze sides.

use alloc::vec::Vec;
use core::fmt::Debug;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    automaton::Rule30,
    error::{SpongeError, SpongeResult},
};

/// Canonical state width, in cells.
pub const DEFAULT_WIDTH: usize = 512;

/// Canonical number of automaton generations per absorbed or squeezed bit.
pub const DEFAULT_STEPS: usize = 20;

/// Which phase a sponge is in.
///
/// A sponge starts out `Absorbing`. The first squeeze flips it to
/// `Squeezing`, and only [`Rule30Sponge::reset`] flips it back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Absorbing,
    Squeezing,
}

/// A sponge whose mixing function is the Rule 30 automaton.
///
/// The sponge owns its state exclusively; dropping it zeroizes the cell
/// buffers. Instances are independent of each other, and a single instance
/// must be driven from one caller at a time (every call mutates the state in
/// place).
///
/// The initial state is all-zero except for the middle cell, which is set
/// to 1 so that a sponge squeezed without any absorption still produces
/// non-degenerate output. Output is fully determined by the geometry and the
/// absorbed bits.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Rule30Sponge {
    ring: Rule30,
    steps: usize,
    #[zeroize(skip)]
    mode: Mode,
}

impl Rule30Sponge {
    /// Creates a sponge with `width` cells and `steps` generations per bit.
    ///
    /// Fails with [`SpongeError::Configuration`] when `width` or `steps` is
    /// zero, or when the injection tap `width / 2 + steps` would fall
    /// outside the state.
    pub fn new(width: usize, steps: usize) -> SpongeResult<Self> {
        if width == 0 || steps == 0 || width / 2 + steps >= width {
            return Err(SpongeError::Configuration { width, steps });
        }
        let mut ring = Rule30::new(width);
        ring.set(width / 2, 1);
        Ok(Self {
            ring,
            steps,
            mode: Mode::Absorbing,
        })
    }

    /// Number of cells in the state.
    #[must_use]
    pub fn width(&self) -> usize {
        self.ring.width()
    }

    /// Automaton generations run per absorbed or squeezed bit.
    #[must_use]
    pub fn steps_per_bit(&self) -> usize {
        self.steps
    }

    /// Current phase of the sponge.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Absorbs a single bit.
    ///
    /// Fails with [`SpongeError::InvalidInput`] for values other than 0
    /// and 1, and with [`SpongeError::InvalidState`] once the sponge has
    /// been squeezed. A rejected call leaves the state untouched.
    pub fn absorb_bit(&mut self, bit: u8) -> SpongeResult<()> {
        if bit > 1 {
            return Err(SpongeError::InvalidInput { bit });
        }
        if self.mode != Mode::Absorbing {
            return Err(SpongeError::InvalidState);
        }
        self.inject_bit(bit);
        Ok(())
    }

    /// Absorbs a byte, least-significant bit first.
    pub fn absorb_byte(&mut self, byte: u8) -> SpongeResult<()> {
        if self.mode != Mode::Absorbing {
            return Err(SpongeError::InvalidState);
        }
        self.inject_byte(byte);
        Ok(())
    }

    /// Absorbs a slice of bytes.
    ///
    /// Byte-identical to calling [`Self::absorb_byte`] for each byte in
    /// order, so input may be fed in chunks of arbitrary length.
    pub fn absorb(&mut self, bytes: &[u8]) -> SpongeResult<()> {
        if self.mode != Mode::Absorbing {
            return Err(SpongeError::InvalidState);
        }
        for &byte in bytes {
            self.inject_byte(byte);
        }
        Ok(())
    }

    /// Squeezes a single bit.
    ///
    /// The first squeeze irrevocably moves the sponge to [`Mode::Squeezing`].
    /// The bit is read before the mixing generations run, mirroring the
    /// inject-then-mix ordering on the absorb side.
    pub fn squeeze_bit(&mut self) -> u8 {
        self.mode = Mode::Squeezing;
        let bit = self.ring.get(self.ring.width() / 2);
        self.ring.steps(self.steps);
        bit
    }

    /// Squeezes a byte, assembled least-significant bit first.
    pub fn squeeze_byte(&mut self) -> u8 {
        let mut byte = 0;
        for i in 0..8 {
            byte |= self.squeeze_bit() << i;
        }
        byte
    }

    /// Squeezes `count` raw bits, each 0 or 1.
    pub fn squeeze_bits(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.squeeze_bit()).collect()
    }

    /// Squeezes `count` bytes.
    ///
    /// Identical to `count` calls of [`Self::squeeze_byte`]; the automaton
    /// trajectory does not depend on how output is batched.
    pub fn squeeze_bytes(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.squeeze_byte()).collect()
    }

    /// Fills `out` with squeezed bytes.
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        for slot in out {
            *slot = self.squeeze_byte();
        }
    }

    /// Returns the sponge to its freshly constructed state.
    ///
    /// Re-seeds the cells exactly as construction does and re-enters
    /// [`Mode::Absorbing`]. No other operation resets anything.
    pub fn reset(&mut self) {
        self.ring.clear();
        let mid = self.ring.width() / 2;
        self.ring.set(mid, 1);
        self.mode = Mode::Absorbing;
    }

    fn inject_byte(&mut self, byte: u8) {
        for i in 0..8 {
            self.inject_bit((byte >> i) & 1);
        }
    }

    fn inject_bit(&mut self, bit: u8) {
        let tap = self.ring.width() / 2 + self.steps;
        self.ring.set(tap, bit);
        self.ring.steps(self.steps);
    }
}

impl Default for Rule30Sponge {
    fn default() -> Self {
        let mut ring = Rule30::new(DEFAULT_WIDTH);
        ring.set(DEFAULT_WIDTH / 2, 1);
        Self {
            ring,
            steps: DEFAULT_STEPS,
            mode: Mode::Absorbing,
        }
    }
}

/// Censored version of Debug
impl Debug for Rule30Sponge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule30Sponge")
            .field("width", &self.width())
            .field("steps", &self.steps)
            .field("mode", &self.mode)
            .field("cells", &"<redacted>")
            .finish()
    }
}

/// Absorbs `msg` into a default-geometry sponge and squeezes `out_len` bytes.
///
/// One-shot convenience for hashing; exactly equivalent to constructing a
/// [`Rule30Sponge::default`], absorbing `msg` and squeezing.
#[must_use]
pub fn hash(msg: &[u8], out_len: usize) -> Vec<u8> {
    let mut sponge = Rule30Sponge::default();
    for &byte in msg {
        sponge.inject_byte(byte);
    }
    sponge.squeeze_bytes(out_len)
}
