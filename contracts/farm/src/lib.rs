#![no_std]

use soroban_sdk::{contract, Address, BytesN, Env, Vec};

mod accrual;
mod contract_farm;
mod contract_farmer;
mod contract_garden;
mod contract_homestead;
mod contract_view;
mod errors;
mod events;
mod growth;
mod registry;
mod storage;
mod tests;
mod types;

pub use errors::Errors;
pub use registry::{CropRegistry, CropRegistryClient};
pub use types::{CheckIn, Crop, CropType, Farmer, FarmerStats, Pool, Stage, Stake};

pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub const SCALE: i128 = 1_000_000_000_000_000_000;
pub const UNIT: i128 = 1_0000000;

pub const HOUR: u64 = 60 * 60;
pub const DAY: u64 = HOUR * 24;

pub const CHECK_IN_REWARD: i128 = 10 * UNIT;
pub const CHECK_IN_COOLDOWN: u64 = 20 * HOUR;
pub const CHECK_IN_WINDOW: u64 = 28 * HOUR;
pub const MAX_STREAK: u32 = 30;
pub const STREAK_BONUS_PCT: i128 = 5;

pub const REFERRAL_PCT: i128 = 10;

pub const WATER_INTERVAL: u64 = HOUR;

pub const BASE_MULTIPLIER: u32 = 100;
pub const TIER_1_STAKE: i128 = 1_000 * UNIT;
pub const TIER_1_MULTIPLIER: u32 = 125;
pub const TIER_2_STAKE: i128 = 10_000 * UNIT;
pub const TIER_2_MULTIPLIER: u32 = 150;

pub const DEFAULT_POOL: u32 = 0;
pub const DEFAULT_REWARD_RATE: i128 = UNIT; // per second, shared by the whole pool
pub const DEFAULT_MIN_STAKE: i128 = UNIT;

#[contract]
pub struct Contract;

pub trait HomesteadTrait {
    fn create_pool(env: Env, reward_rate: i128, min_stake: i128) -> u32;

    fn update_pool(env: Env, pool_id: u32, reward_rate: i128, active: bool);

    fn pause(env: Env);

    fn unpause(env: Env);

    fn recover(env: Env, asset: Address, to: Address, amount: i128);

    fn set_admin(env: Env, admin: Address);

    fn upgrade(env: Env, hash: BytesN<32>);
}

pub trait FarmerTrait {
    fn register(env: Env, farmer: Address, referrer: Option<Address>);

    fn check_in(env: Env, farmer: Address) -> i128;
}

pub trait FarmTrait {
    fn stake(env: Env, farmer: Address, pool_id: u32, amount: i128);

    fn unstake(env: Env, farmer: Address, pool_id: u32, amount: i128);

    fn claim(env: Env, farmer: Address, pool_id: u32) -> i128;
}

pub trait GardenTrait {
    fn plant(env: Env, farmer: Address, crop_type: CropType) -> u64;

    fn water(env: Env, farmer: Address, crop_id: u64);

    fn refresh(env: Env, crop_id: u64) -> Stage;

    fn harvest(env: Env, farmer: Address, crop_id: u64) -> i128;
}

pub trait ViewTrait {
    fn get_pool(env: Env, pool_id: u32) -> Pool;

    fn pool_count(env: Env) -> u32;

    fn get_stake(env: Env, farmer: Address, pool_id: u32) -> Stake;

    fn earned(env: Env, farmer: Address, pool_id: u32) -> i128;

    fn get_farmer(env: Env, farmer: Address) -> Option<Farmer>;

    fn farmer_stats(env: Env, farmer: Address) -> FarmerStats;

    fn farmer_crops(env: Env, farmer: Address) -> Vec<u64>;

    fn farmer_count(env: Env) -> u32;

    fn get_crop(env: Env, crop_id: u64) -> Crop;

    fn crop_stage(env: Env, crop_id: u64) -> Stage;

    fn crop_info(env: Env, crop_type: CropType) -> (u64, i128);

    fn is_paused(env: Env) -> bool;
}
