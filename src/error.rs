use thiserror::Error;

/// Errors raised by sponge operations.
///
/// Every error is local and synchronous: the offending call is rejected
/// before it touches the state, so the sponge remains usable afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum SpongeError {
    /// The sponge has been squeezed and no longer accepts input.
    #[error("sponge is squeezing; absorbing again requires reset()")]
    InvalidState,
    /// A bit value outside {0, 1}.
    #[error("invalid bit value {bit}, expected 0 or 1")]
    InvalidInput { bit: u8 },
    /// A width/steps combination whose injection tap falls outside the state.
    #[error("invalid sponge geometry: width {width} with {steps} steps per bit")]
    Configuration { width: usize, steps: usize },
}

/// Result alias for sponge operations.
pub type SpongeResult<T> = Result<T, SpongeError>;
