//! # Decentratwitter
//!
//! NFT-gated micro-blogging registry for the Soroban blockchain.
//!
//! Accounts mint profile NFTs, pick one of them as their profile, and once they
//! hold at least one NFT they can upload posts (content hashes). Other accounts
//! tip a post's author in the native asset; tips accumulate on the post.
//!
//! - Profile NFTs with an opaque metadata URI
//! - Per-account profile selection
//! - Posts gated on NFT ownership
//! - Native-asset tipping, settled atomically with the post update
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.init(&admin, &native_token);
//!
//! let nft_id = client.mint(&uri, &caller);
//! let post_id = client.upload_post(&hash, &caller);
//!
//! // Tip 1 XLM (10^7 stroops)
//! client.tip_post_owner(&post_id, &10_000_000, &tipper);
//! ```

#![no_std]

mod events;
mod nft;
mod post;
mod storage;
mod validation;

pub use nft::{Nft, COLLECTION_NAME, COLLECTION_SYMBOL};
pub use post::Post;
pub use storage::RegistryKey;
pub use validation::{is_valid_post_id, is_valid_tip_amount, validate_content_hash};

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, BytesN, Env, String, Vec,
};

use crate::events::*;
use crate::storage::{
    extend_instance, extend_persistent, read_balance, read_counter, read_owned_nfts,
    write_owned_nfts, MAX_PAGE_SIZE,
};

/// Error codes for the Decentratwitter registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller tried to select an NFT it does not own as its profile.
    NotNftOwner = 3,
    /// Caller owns no NFT and cannot post.
    NoNftOwned = 4,
    /// Post content hash is empty.
    EmptyHash = 5,
    /// Post id does not refer to an uploaded post.
    InvalidPostId = 6,
    /// Author tried to tip their own post.
    SelfTip = 7,
    /// Token id was never minted.
    NonexistentToken = 8,
    /// Tip amount is negative.
    InvalidTipAmount = 9,
    /// Accumulated tip amount would overflow.
    TipOverflow = 10,
    /// Caller is not authorized for this operation.
    NotAuthorized = 11,
}

impl RegistryError {
    /// Reason string reported to users for this error.
    pub fn message(&self) -> &'static str {
        match self {
            RegistryError::AlreadyInitialized => "Contract has already been initialized",
            RegistryError::NotInitialized => "Contract has not been initialized",
            RegistryError::NotNftOwner => "You must own the NFT you want to select as your profile",
            RegistryError::NoNftOwned => "Must own a decentratwitter nft to post",
            RegistryError::EmptyHash => "Cannot pass an empty hash",
            RegistryError::InvalidPostId => "Invalid post id",
            RegistryError::SelfTip => "Cannot tip your own post",
            RegistryError::NonexistentToken => "ERC721: invalid token ID",
            RegistryError::InvalidTipAmount => "Tip amount cannot be negative",
            RegistryError::TipOverflow => "Tip amount overflow",
            RegistryError::NotAuthorized => "Caller is not authorized for this operation",
        }
    }
}

impl From<RegistryError> for soroban_sdk::Error {
    fn from(e: RegistryError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

/// Abort the invocation with `err`, logging its reason string first.
fn fail(env: &Env, err: RegistryError) -> ! {
    log!(env, "registry error", String::from_str(env, err.message()));
    panic_with_error!(env, err)
}

#[contract]
pub struct Decentratwitter;

#[contractimpl]
impl Decentratwitter {
    // ========== Initialization ==========

    /// Initialize the registry.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to upgrade the contract
    /// * `native_token` - Stellar Asset Contract that tips are paid in
    pub fn init(env: Env, admin: Address, native_token: Address) {
        if env.storage().instance().has(&RegistryKey::Admin) {
            fail(&env, RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&RegistryKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&RegistryKey::NativeToken, &native_token);
        env.storage().instance().set(&RegistryKey::TokenCount, &0u64);
        env.storage().instance().set(&RegistryKey::PostCount, &0u64);
        extend_instance(&env);
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&RegistryKey::Admin)
            .unwrap_or_else(|| fail(&env, RegistryError::NotInitialized))
    }

    /// Get the token contract tips are paid in.
    pub fn native_token(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&RegistryKey::NativeToken)
            .unwrap_or_else(|| fail(&env, RegistryError::NotInitialized))
    }

    // ========== Collection ==========

    pub fn name(env: Env) -> String {
        String::from_str(&env, COLLECTION_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, COLLECTION_SYMBOL)
    }

    /// Mint a new profile NFT to `caller`.
    ///
    /// The new NFT becomes the caller's profile, replacing any earlier
    /// selection.
    ///
    /// # Returns
    /// The id of the minted NFT
    pub fn mint(env: Env, uri: String, caller: Address) -> u64 {
        caller.require_auth();
        Self::require_initialized(&env);

        let id = read_counter(&env, &RegistryKey::TokenCount) + 1;
        let nft = Nft::new(id, caller.clone(), uri.clone());

        let nft_key = RegistryKey::Nft(id);
        env.storage().persistent().set(&nft_key, &nft);
        extend_persistent(&env, &nft_key);

        let mut owned = read_owned_nfts(&env, &caller);
        owned.push_back(id);
        write_owned_nfts(&env, &caller, &owned);
        Self::write_profile(&env, &caller, id);

        env.storage().instance().set(&RegistryKey::TokenCount, &id);
        extend_instance(&env);

        log!(&env, "nft minted", id, caller);
        emit_nft_minted(&env, id, &caller, &uri);

        id
    }

    /// Total number of NFTs minted.
    pub fn token_count(env: Env) -> u64 {
        read_counter(&env, &RegistryKey::TokenCount)
    }

    /// Number of NFTs currently owned by `account`.
    pub fn balance_of(env: Env, account: Address) -> u64 {
        read_balance(&env, &account)
    }

    /// Metadata URI of a token.
    ///
    /// # Panics
    /// - If the token was never minted
    pub fn token_uri(env: Env, id: u64) -> String {
        Self::load_nft(&env, id).uri
    }

    /// Current owner of a token.
    ///
    /// # Panics
    /// - If the token was never minted
    pub fn owner_of(env: Env, id: u64) -> Address {
        Self::load_nft(&env, id).owner
    }

    pub fn get_nft(env: Env, id: u64) -> Option<Nft> {
        env.storage().persistent().get(&RegistryKey::Nft(id))
    }

    /// Transfer a token between accounts.
    ///
    /// Profile selections are left alone, so `from` may keep pointing at a
    /// token it no longer owns until it calls `set_profile` or mints again.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();
        Self::require_initialized(&env);

        let mut nft = Self::load_nft(&env, token_id);
        if !nft.is_owned_by(&from) {
            fail(&env, RegistryError::NotAuthorized);
        }

        if from == to {
            return;
        }

        nft.owner = to.clone();
        let nft_key = RegistryKey::Nft(token_id);
        env.storage().persistent().set(&nft_key, &nft);
        extend_persistent(&env, &nft_key);

        let mut from_owned = read_owned_nfts(&env, &from);
        if let Some(index) = from_owned.first_index_of(token_id) {
            from_owned.remove(index);
        }
        write_owned_nfts(&env, &from, &from_owned);

        let mut to_owned = read_owned_nfts(&env, &to);
        to_owned.push_back(token_id);
        write_owned_nfts(&env, &to, &to_owned);

        extend_instance(&env);
        emit_nft_transferred(&env, token_id, &from, &to);
    }

    /// All NFTs currently owned by `caller`, in the order they were
    /// acquired.
    pub fn get_my_nfts(env: Env, caller: Address) -> Vec<Nft> {
        let mut result = Vec::new(&env);

        for id in read_owned_nfts(&env, &caller).iter() {
            result.push_back(Self::load_nft(&env, id));
        }

        result
    }

    // ========== Profiles ==========

    /// Select one of the caller's NFTs as its profile.
    ///
    /// # Panics
    /// - If the token was never minted
    /// - If the caller does not own the token
    pub fn set_profile(env: Env, nft_id: u64, caller: Address) {
        caller.require_auth();
        Self::require_initialized(&env);

        let nft = Self::load_nft(&env, nft_id);
        if !nft.is_owned_by(&caller) {
            fail(&env, RegistryError::NotNftOwner);
        }

        Self::write_profile(&env, &caller, nft_id);
        extend_instance(&env);
        emit_profile_set(&env, &caller, nft_id);
    }

    /// Token id `account` selected as its profile, or 0 if none.
    ///
    /// The selection is not revalidated after transfers; pair it with
    /// `owner_of` when current ownership matters.
    pub fn profiles(env: Env, account: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&RegistryKey::Profile(account))
            .unwrap_or(0)
    }

    // ========== Posts ==========

    /// Upload a post.
    ///
    /// # Arguments
    /// * `hash` - Content hash of the post body, must not be empty
    /// * `caller` - Author, must own at least one NFT
    ///
    /// # Returns
    /// The id of the new post
    pub fn upload_post(env: Env, hash: String, caller: Address) -> u64 {
        caller.require_auth();
        Self::require_initialized(&env);

        if read_balance(&env, &caller) == 0 {
            fail(&env, RegistryError::NoNftOwned);
        }

        if !validation::validate_content_hash(&hash) {
            fail(&env, RegistryError::EmptyHash);
        }

        let id = read_counter(&env, &RegistryKey::PostCount) + 1;
        let post = Post::new(id, hash, caller.clone());
        Self::write_post(&env, &post);

        env.storage().instance().set(&RegistryKey::PostCount, &id);
        extend_instance(&env);

        log!(&env, "post uploaded", id, caller);
        emit_post_created(&env, &post);

        id
    }

    /// Tip the author of a post.
    ///
    /// `amount` stroops of the native token move from `caller` to the
    /// author, and the post's tip total grows by the same amount. Either
    /// both happen or the invocation fails.
    ///
    /// # Panics
    /// - If `post_id` does not refer to an uploaded post
    /// - If the caller authored the post
    /// - If `amount` is negative
    /// - If the caller cannot cover `amount`
    pub fn tip_post_owner(env: Env, post_id: u64, amount: i128, caller: Address) {
        caller.require_auth();
        let native_token = Self::native_token(env.clone());

        let post_count = read_counter(&env, &RegistryKey::PostCount);
        if !validation::is_valid_post_id(post_id, post_count) {
            fail(&env, RegistryError::InvalidPostId);
        }

        let mut post: Post = env
            .storage()
            .persistent()
            .get(&RegistryKey::Post(post_id))
            .unwrap_or_else(|| fail(&env, RegistryError::InvalidPostId));

        if post.is_authored_by(&caller) {
            fail(&env, RegistryError::SelfTip);
        }

        if !validation::is_valid_tip_amount(amount) {
            fail(&env, RegistryError::InvalidTipAmount);
        }

        if post.add_tip(amount).is_none() {
            fail(&env, RegistryError::TipOverflow);
        }

        token::TokenClient::new(&env, &native_token).transfer(&caller, &post.author, &amount);

        Self::write_post(&env, &post);
        extend_instance(&env);

        log!(&env, "post tipped", post_id, amount, caller);
        emit_post_tipped(&env, &post);
    }

    /// Total number of posts uploaded.
    pub fn post_count(env: Env) -> u64 {
        read_counter(&env, &RegistryKey::PostCount)
    }

    /// Get a post by id.
    pub fn posts(env: Env, id: u64) -> Option<Post> {
        env.storage().persistent().get(&RegistryKey::Post(id))
    }

    /// All posts, oldest first.
    ///
    /// Reads one entry per post; large registries should page through
    /// `get_posts` instead.
    pub fn get_all_posts(env: Env) -> Vec<Post> {
        let count = read_counter(&env, &RegistryKey::PostCount);
        Self::collect_posts(&env, 1, count)
    }

    /// Up to `limit` posts starting at id `start`, oldest first.
    ///
    /// `limit` is capped at `MAX_PAGE_SIZE`. A `start` past the last post
    /// yields an empty page.
    pub fn get_posts(env: Env, start: u64, limit: u32) -> Vec<Post> {
        let count = read_counter(&env, &RegistryKey::PostCount);
        let first = start.max(1);
        let limit = limit.min(MAX_PAGE_SIZE) as u64;
        if limit == 0 || first > count {
            return Vec::new(&env);
        }

        let last = count.min(first.saturating_add(limit - 1));
        Self::collect_posts(&env, first, last)
    }

    // ========== Admin Functions ==========

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = Self::admin(env.clone());
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // ========== Internal Helpers ==========

    fn require_initialized(env: &Env) {
        if !env.storage().instance().has(&RegistryKey::Admin) {
            fail(env, RegistryError::NotInitialized);
        }
    }

    fn load_nft(env: &Env, id: u64) -> Nft {
        env.storage()
            .persistent()
            .get(&RegistryKey::Nft(id))
            .unwrap_or_else(|| fail(env, RegistryError::NonexistentToken))
    }

    fn write_profile(env: &Env, owner: &Address, id: u64) {
        let key = RegistryKey::Profile(owner.clone());
        env.storage().persistent().set(&key, &id);
        extend_persistent(env, &key);
    }

    fn collect_posts(env: &Env, first: u64, last: u64) -> Vec<Post> {
        let mut result = Vec::new(env);

        for id in first..=last {
            if let Some(post) = env
                .storage()
                .persistent()
                .get::<_, Post>(&RegistryKey::Post(id))
            {
                result.push_back(post);
            }
        }

        result
    }

    fn write_post(env: &Env, post: &Post) {
        let key = RegistryKey::Post(post.id);
        env.storage().persistent().set(&key, post);
        extend_persistent(env, &key);
    }
}
