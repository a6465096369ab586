//! Profile NFT record.

use soroban_sdk::{contracttype, Address, String};

/// Collection name reported by `name()`.
pub const COLLECTION_NAME: &str = "Decentratwitter";

/// Collection symbol reported by `symbol()`.
pub const COLLECTION_SYMBOL: &str = "DAPP";

/// A minted profile NFT.
///
/// Created by `mint` and never destroyed. Only `owner` changes, through
/// `transfer`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nft {
    /// Token id, starting at 1.
    pub id: u64,

    /// Current owner.
    pub owner: Address,

    /// Opaque metadata URI. May be empty.
    pub uri: String,
}

impl Nft {
    pub fn new(id: u64, owner: Address, uri: String) -> Self {
        Self { id, owner, uri }
    }

    pub fn is_owned_by(&self, account: &Address) -> bool {
        self.owner == *account
    }
}
