use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Root under which replacement identifiers are issued
const UID_ROOT: &str = "2.25";

/// Number of random digits appended after the timestamp
const RANDOM_DIGITS: usize = 10;

/// Generates a replacement unique identifier
///
/// Identifiers take the form `2.25.<unix millis><random digits>`. The scheme
/// is valid UID syntax by construction: dot-separated numeric components
/// with no leading zeros, well under the 64-character limit. Each call
/// produces a fresh value; generation is intentionally non-deterministic.
pub fn generate_uid() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let mut rng = rand::thread_rng();
    let suffix: String = (0..RANDOM_DIGITS)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect();

    format!("{}.{}{}", UID_ROOT, millis, suffix)
}
