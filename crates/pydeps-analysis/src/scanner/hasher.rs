//! Content hashing for cache keys.

use xxhash_rust::xxh3::xxh3_64;

/// xxh3 hash of raw file content.
pub fn hash_content(content: &[u8]) -> u64 {
    xxh3_64(content)
}
