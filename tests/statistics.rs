use rule30_sponge::{hash, Rule30Sponge};
use sha2::{Digest, Sha256};

fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum()
}

// --- Output bit balance ---
#[test]
fn squeezed_bits_are_balanced() {
    let mut sponge = Rule30Sponge::default();
    let ones: usize = sponge
        .squeeze_bits(5000)
        .iter()
        .map(|&b| b as usize)
        .sum();

    println!("ones: {ones} / 5000");
    // A fair stream gives 2500; tolerate a few percent either way.
    assert!(
        (2350..=2650).contains(&ones),
        "squeezed bit stream is biased: {ones} ones out of 5000"
    );
}

// --- Avalanche Effect Comparison Test ---
#[test]
fn avalanche_comparison() {
    let input_data = [0x5Au8; 64];
    let num_bytes_to_flip = 2; // 16 single-bit flips keeps the test quick
    let num_bits_to_flip = num_bytes_to_flip * 8;

    let baseline_rule30 = hash(&input_data, 32);
    let baseline_sha256 = Sha256::digest(input_data);
    let baseline_blake3 = blake3::hash(&input_data);

    let mut total_dist_rule30: u64 = 0;
    let mut total_dist_sha256: u64 = 0;
    let mut total_dist_blake3: u64 = 0;

    for byte_index in 0..num_bytes_to_flip {
        for bit_index in 0..8 {
            let mut modified_input = input_data;
            modified_input[byte_index] ^= 1 << bit_index;

            let modified_rule30 = hash(&modified_input, 32);
            let modified_sha256 = Sha256::digest(modified_input);
            let modified_blake3 = blake3::hash(&modified_input);

            let dist = hamming_distance(&baseline_rule30, &modified_rule30);
            // Every single flip should move a large share of the digest.
            assert!(
                (80..=176).contains(&dist),
                "flip {byte_index}:{bit_index} moved only {dist} of 256 bits"
            );

            total_dist_rule30 += dist as u64;
            total_dist_sha256 +=
                hamming_distance(baseline_sha256.as_slice(), modified_sha256.as_slice()) as u64;
            total_dist_blake3 +=
                hamming_distance(baseline_blake3.as_bytes(), modified_blake3.as_bytes()) as u64;
        }
    }

    let avg_dist_rule30 = total_dist_rule30 as f64 / num_bits_to_flip as f64;
    let avg_dist_sha256 = total_dist_sha256 as f64 / num_bits_to_flip as f64;
    let avg_dist_blake3 = total_dist_blake3 as f64 / num_bits_to_flip as f64;

    println!(
        "\n--- Avalanche (average Hamming distance over {num_bits_to_flip} bit flips) ---"
    );
    println!("Rule 30 sponge: {avg_dist_rule30:.2}");
    println!("SHA-256:        {avg_dist_sha256:.2}");
    println!("BLAKE3:         {avg_dist_blake3:.2}");
    println!("Ideal (256-bit output): 128.00");

    // Within roughly 10% of the ideal 128-bit average.
    assert!(
        avg_dist_rule30 > 115.0 && avg_dist_rule30 < 141.0,
        "average Hamming distance {avg_dist_rule30:.2} outside 115.0..141.0"
    );
    assert!(
        avg_dist_rule30 > avg_dist_sha256 - 12.0,
        "Rule 30 sponge diffuses significantly worse than SHA-256"
    );
    assert!(
        avg_dist_rule30 > avg_dist_blake3 - 12.0,
        "Rule 30 sponge diffuses significantly worse than BLAKE3"
    );
}
