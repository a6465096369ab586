//! Post struct and tip accounting.

use soroban_sdk::{contracttype, Address, String};

/// A post uploaded by an NFT holder.
///
/// `tip_amount` is the only field that changes after creation, and it only
/// ever grows.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Post {
    /// Post id, starting at 1.
    pub id: u64,

    /// Content hash (typically an IPFS CID). Never empty.
    pub hash: String,

    /// Sum of all tips received, in stroops of the native asset.
    pub tip_amount: i128,

    /// Account that uploaded the post.
    pub author: Address,
}

impl Post {
    /// Create a new post with no tips.
    pub fn new(id: u64, hash: String, author: Address) -> Self {
        Self {
            id,
            hash,
            tip_amount: 0,
            author,
        }
    }

    /// Add a tip to the running total.
    ///
    /// Returns `None` on overflow, leaving the post untouched.
    pub fn add_tip(&mut self, amount: i128) -> Option<i128> {
        let total = self.tip_amount.checked_add(amount)?;
        self.tip_amount = total;
        Some(total)
    }

    pub fn is_authored_by(&self, account: &Address) -> bool {
        self.author == *account
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn test_new_post_has_no_tips() {
        let env = Env::default();
        let author = Address::generate(&env);
        let post = Post::new(1, String::from_str(&env, "SampleHash"), author.clone());

        assert_eq!(post.tip_amount, 0);
        assert!(post.is_authored_by(&author));
        assert!(!post.is_authored_by(&Address::generate(&env)));
    }

    #[test]
    fn test_add_tip_accumulates() {
        let env = Env::default();
        let mut post = Post::new(1, String::from_str(&env, "h"), Address::generate(&env));

        assert_eq!(post.add_tip(10), Some(10));
        assert_eq!(post.add_tip(0), Some(10));
        assert_eq!(post.add_tip(5), Some(15));
        assert_eq!(post.tip_amount, 15);
    }

    #[test]
    fn test_add_tip_overflow_leaves_total() {
        let env = Env::default();
        let mut post = Post::new(1, String::from_str(&env, "h"), Address::generate(&env));
        post.add_tip(i128::MAX);

        assert_eq!(post.add_tip(1), None);
        assert_eq!(post.tip_amount, i128::MAX);
    }
}
