//! A quick-and-dirty random number generator seeded from the clock.

use std::time::{SystemTime, UNIX_EPOCH};

use rule30_sponge::{Rule30Sponge, SpongeError};

fn main() -> Result<(), SpongeError> {
    let mut sponge = Rule30Sponge::default();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before the epoch");
    sponge.absorb(&now.as_nanos().to_le_bytes())?;

    let mut out = [0u8; 8];
    sponge.squeeze_into(&mut out);
    println!("Random number: {}", u64::from_le_bytes(out));
    Ok(())
}
