//! Hash data fed to the sponge in chunks of arbitrary length.

use rule30_sponge::{Rule30Sponge, SpongeError};

fn main() -> Result<(), SpongeError> {
    let mut sponge = Rule30Sponge::default();

    sponge.absorb(b"Let's hash some data")?;
    sponge.absorb(b"You can read the data in chunks of arbitrary length.")?;

    println!("{}", hex::encode(sponge.squeeze_bytes(8)));
    Ok(())
}
