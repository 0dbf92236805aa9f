//! A cryptographic sponge built on the Rule 30 elementary cellular automaton.
//!
//! A sponge function absorbs a message of any length into a fixed-size
//! internal state and can then be squeezed for an output stream of any
//! desired length. This crate drives the state with [Rule 30], the chaotic
//! elementary automaton, instead of a conventional permutation: every
//! absorbed or squeezed bit is followed by a fixed number of automaton
//! generations that diffuse it through the whole state.
//!
//! # Examples
//!
//! The starting point is a [`Rule30Sponge`], absorbed into and then squeezed:
//! ```
//! use rule30_sponge::Rule30Sponge;
//!
//! let mut sponge = Rule30Sponge::default();
//! sponge.absorb(b"Hello world!")?;
//! assert_eq!(sponge.squeeze_bytes(5), [231, 190, 6, 124, 69]);
//! # Ok::<(), rule30_sponge::SpongeError>(())
//! ```
//!
//! One-shot hashing is available as [`hash`]:
//! ```
//! let digest = rule30_sponge::hash(b"some data", 32);
//! assert_eq!(digest.len(), 32);
//! ```
//!
//! The same two phases cover hashing, deterministic random generation and
//! stream keys; once a sponge has been squeezed it refuses further input
//! until [`Rule30Sponge::reset`].
//!
//! # Security considerations
//!
//! Rule 30 sponges have seen nothing like the cryptanalysis of Keccak or
//! Ascon. Treat this construction as an experiment in chaotic automata, not
//! as a vetted cryptographic hash.
//!
//! [Rule 30]: https://en.wikipedia.org/wiki/Rule_30

#![no_std]

extern crate alloc;

/// The Rule 30 automaton ring used as the sponge's mixing function.
pub mod automaton;

/// Defines [`SpongeError`].
mod error;

/// The absorb/squeeze state machine on top of [`automaton::Rule30`].
pub mod sponge;

pub use automaton::Rule30;
pub use error::{SpongeError, SpongeResult};
pub use sponge::{hash, Mode, Rule30Sponge, DEFAULT_STEPS, DEFAULT_WIDTH};

// Make sure sponge instances can move between threads; each instance still
// needs a single caller at a time.
#[allow(unused)]
fn _assert_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Rule30Sponge>();
    assert_send::<Rule30>();
}
