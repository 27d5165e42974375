use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{CropType, Stage};

pub fn registered(env: &Env, farmer: Address, referrer: Option<Address>) {
    env.events()
        .publish((symbol_short!("register"), farmer), referrer);
}

pub fn checked_in(env: &Env, farmer: Address, streak: u32, reward: i128) {
    env.events()
        .publish((symbol_short!("check_in"), farmer), (streak, reward));
}

pub fn staked(env: &Env, farmer: Address, pool_id: u32, amount: i128) {
    env.events()
        .publish((symbol_short!("stake"), farmer, pool_id), amount);
}

pub fn unstaked(env: &Env, farmer: Address, pool_id: u32, amount: i128) {
    env.events()
        .publish((symbol_short!("unstake"), farmer, pool_id), amount);
}

pub fn claimed(env: &Env, farmer: Address, pool_id: u32, amount: i128) {
    env.events()
        .publish((symbol_short!("claim"), farmer, pool_id), amount);
}

pub fn referral_paid(env: &Env, referrer: Address, farmer: Address, bonus: i128) {
    env.events()
        .publish((symbol_short!("referral"), referrer, farmer), bonus);
}

pub fn planted(env: &Env, farmer: Address, crop_id: u64, crop_type: CropType, multiplier: u32) {
    env.events().publish(
        (symbol_short!("plant"), farmer, crop_id),
        (crop_type, multiplier),
    );
}

pub fn watered(env: &Env, crop_id: u64, harvestable_at: u64, stage: Stage) {
    env.events()
        .publish((symbol_short!("water"), crop_id), (harvestable_at, stage));
}

pub fn harvested(env: &Env, farmer: Address, crop_id: u64, reward: i128) {
    env.events()
        .publish((symbol_short!("harvest"), farmer, crop_id), reward);
}

pub fn pool_created(env: &Env, pool_id: u32, reward_rate: i128, min_stake: i128) {
    env.events()
        .publish((symbol_short!("pool_new"), pool_id), (reward_rate, min_stake));
}

pub fn pool_updated(env: &Env, pool_id: u32, reward_rate: i128, active: bool) {
    env.events()
        .publish((symbol_short!("pool_set"), pool_id), (reward_rate, active));
}

pub fn paused(env: &Env, paused: bool) {
    let topic = if paused {
        symbol_short!("pause")
    } else {
        symbol_short!("unpause")
    };

    env.events().publish((topic,), env.ledger().timestamp());
}

pub fn recovered(env: &Env, asset: Address, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("recover"), asset, to), amount);
}
