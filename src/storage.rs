//! Storage key definitions for the Decentratwitter registry.

use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage keys for the registry.
///
/// Singletons live in instance storage; per-token, per-post and per-account
/// entries live in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Contract administrator address.
    Admin,

    /// Stellar Asset Contract used to move tips.
    NativeToken,

    /// Number of NFTs minted so far. Also the id of the latest NFT.
    TokenCount,

    /// Number of posts uploaded so far. Also the id of the latest post.
    PostCount,

    /// Maps token id to Nft.
    Nft(u64),

    /// Maps post id to Post.
    Post(u64),

    /// Ids of the NFTs currently owned by an address, in acquisition order.
    OwnedNfts(Address),

    /// Token id an address selected as its profile.
    Profile(Address),
}

/// Time-to-live for persistent entries.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PERSISTENT_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Time-to-live for instance storage (admin, token, counters).
pub const INSTANCE_TTL_THRESHOLD: u32 = 120960; // ~7 days
pub const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

pub fn extend_persistent(env: &Env, key: &RegistryKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Read a `u64` counter from instance storage, defaulting to zero.
pub fn read_counter(env: &Env, key: &RegistryKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Largest page returned by paged getters.
pub const MAX_PAGE_SIZE: u32 = 100;

pub fn read_owned_nfts(env: &Env, owner: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&RegistryKey::OwnedNfts(owner.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn write_owned_nfts(env: &Env, owner: &Address, ids: &Vec<u64>) {
    let key = RegistryKey::OwnedNfts(owner.clone());
    if ids.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, ids);
    extend_persistent(env, &key);
}

pub fn read_balance(env: &Env, owner: &Address) -> u64 {
    read_owned_nfts(env, owner).len() as u64
}
