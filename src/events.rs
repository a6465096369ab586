//! Event emission helpers for the Decentratwitter registry.

use soroban_sdk::{Address, Env, String, Symbol};

use crate::post::Post;

/// Emit an event when an NFT is minted.
pub fn emit_nft_minted(env: &Env, id: u64, owner: &Address, uri: &String) {
    let topics = (Symbol::new(env, "nft_minted"),);
    env.events().publish(topics, (id, owner.clone(), uri.clone()));
}

/// Emit an event when an account selects a profile NFT.
pub fn emit_profile_set(env: &Env, owner: &Address, id: u64) {
    let topics = (Symbol::new(env, "profile_set"),);
    env.events().publish(topics, (owner.clone(), id));
}

/// Emit an event when an NFT changes hands.
pub fn emit_nft_transferred(env: &Env, id: u64, from: &Address, to: &Address) {
    let topics = (Symbol::new(env, "nft_transferred"),);
    env.events().publish(topics, (id, from.clone(), to.clone()));
}

/// Emit `PostCreated` (topic `post_created`) with the post as stored.
pub fn emit_post_created(env: &Env, post: &Post) {
    let topics = (Symbol::new(env, "post_created"),);
    env.events().publish(topics, post_data(post));
}

/// Emit `PostTipped` (topic `post_tipped`). `tip_amount` is the new running
/// total.
pub fn emit_post_tipped(env: &Env, post: &Post) {
    let topics = (Symbol::new(env, "post_tipped"),);
    env.events().publish(topics, post_data(post));
}

fn post_data(post: &Post) -> (u64, String, i128, Address) {
    (
        post.id,
        post.hash.clone(),
        post.tip_amount,
        post.author.clone(),
    )
}
