use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

use crate::{
    types::{Pool, Stake},
    SCALE,
};

/// Pool accumulator as of `now`. Frozen while nothing is staked.
pub fn reward_per_unit(env: &Env, pool: &Pool, now: u64) -> i128 {
    if pool.total_staked == 0 || now <= pool.last_update {
        return pool.reward_per_unit;
    }

    let elapsed = (now - pool.last_update) as i128;

    pool.reward_per_unit
        + (elapsed * pool.reward_rate).fixed_mul_floor(env, &SCALE, &pool.total_staked)
}

fn earned_at(env: &Env, reward_per_unit: i128, stake: &Stake) -> i128 {
    stake
        .amount
        .fixed_mul_floor(env, &(reward_per_unit - stake.reward_per_unit_paid), &SCALE)
        + stake.pending
}

/// Rewards owed to `stake` as of `now`, without touching either record.
pub fn earned(env: &Env, pool: &Pool, stake: &Stake, now: u64) -> i128 {
    earned_at(env, reward_per_unit(env, pool, now), stake)
}

/// Folds elapsed accrual into `pool` and, when given, into `stake`.
///
/// Must run before any change to a stake amount, a pool total or a pool rate so
/// the old values are settled at the old terms.
pub fn checkpoint(env: &Env, pool: &mut Pool, stake: Option<&mut Stake>, now: u64) {
    pool.reward_per_unit = reward_per_unit(env, pool, now);
    pool.last_update = now;

    if let Some(stake) = stake {
        stake.pending = earned_at(env, pool.reward_per_unit, stake);
        stake.reward_per_unit_paid = pool.reward_per_unit;
    }
}
