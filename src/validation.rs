//! Input checks for posts and tips.
//!
//! - Content hashes must be non-empty; their format is otherwise opaque
//! - Post ids are valid in `1..=post_count`
//! - Tip amounts must not be negative; zero is accepted

use soroban_sdk::String;

/// Returns true if the hash can be stored on a post.
pub fn validate_content_hash(hash: &String) -> bool {
    hash.len() > 0
}

/// Returns true if `id` refers to an uploaded post.
#[inline]
pub fn is_valid_post_id(id: u64, post_count: u64) -> bool {
    id > 0 && id <= post_count
}

/// Returns true if `amount` can be sent as a tip.
#[inline]
pub fn is_valid_tip_amount(amount: i128) -> bool {
    amount >= 0
}
