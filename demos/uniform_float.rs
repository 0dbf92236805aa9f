//! Map the sponge's output stream to floats in [-1, 1].

use rule30_sponge::{Rule30Sponge, SpongeError};

fn random_uniform(sponge: &mut Rule30Sponge) -> f64 {
    let mut out = [0u8; 8];
    sponge.squeeze_into(&mut out);
    (u64::from_le_bytes(out) as f64 / u64::MAX as f64) * 2.0 - 1.0
}

fn main() -> Result<(), SpongeError> {
    let mut sponge = Rule30Sponge::default();
    sponge.absorb(b"This should be seeded randomly")?;

    for _ in 0..10 {
        println!("Random float between -1 and 1: {}", random_uniform(&mut sponge));
    }
    Ok(())
}
