use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    errors::Errors,
    types::{Crop, Farmer, Pool, Stake, Storage},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

fn extend_persistent_ttl(env: &Env, key: &Storage) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .persistent()
        .extend_ttl(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn get_farm_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Admin)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmMissing))
}
pub fn set_farm_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Admin, admin);
}

pub fn get_farm_asset(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Asset)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmMissing))
}
pub fn set_farm_asset(env: &Env, asset: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Asset, asset);
}

pub fn get_farm_registry(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Registry)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmMissing))
}
pub fn set_farm_registry(env: &Env, registry: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Registry, registry);
}

pub fn get_farm_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<Storage, bool>(&Storage::Paused)
        .unwrap_or(false)
}
pub fn set_farm_paused(env: &Env, paused: bool) {
    env.storage()
        .instance()
        .set::<Storage, bool>(&Storage::Paused, &paused);
}

pub fn get_pool_index(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<Storage, u32>(&Storage::PoolIndex)
        .unwrap_or(0)
}
pub fn bump_pool_index(env: &Env) -> u32 {
    let index = get_pool_index(env);

    env.storage()
        .instance()
        .set::<Storage, u32>(&Storage::PoolIndex, &(index + 1));

    index
}

pub fn get_crop_index(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get::<Storage, u64>(&Storage::CropIndex)
        .unwrap_or(0)
}
pub fn bump_crop_index(env: &Env) -> u64 {
    let index = get_crop_index(env);

    env.storage()
        .instance()
        .set::<Storage, u64>(&Storage::CropIndex, &(index + 1));

    index
}

pub fn get_farmer_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<Storage, u32>(&Storage::FarmerCount)
        .unwrap_or(0)
}
pub fn bump_farmer_count(env: &Env) {
    let count = get_farmer_count(env);

    env.storage()
        .instance()
        .set::<Storage, u32>(&Storage::FarmerCount, &(count + 1));
}

pub fn get_pool(env: &Env, pool_id: u32) -> Option<Pool> {
    env.storage()
        .persistent()
        .get::<Storage, Pool>(&Storage::Pool(pool_id))
}
pub fn set_pool(env: &Env, pool_id: u32, pool: &Pool) {
    let pool_key = Storage::Pool(pool_id);

    env.storage()
        .persistent()
        .set::<Storage, Pool>(&pool_key, pool);

    extend_persistent_ttl(env, &pool_key);
}

pub fn get_stake(env: &Env, farmer: Address, pool_id: u32) -> Stake {
    let stake_key = Storage::Stake(farmer, pool_id);

    env.storage()
        .persistent()
        .get::<Storage, Stake>(&stake_key)
        .unwrap_or_default()
}
pub fn set_stake(env: &Env, farmer: Address, pool_id: u32, stake: &Stake) {
    let stake_key = Storage::Stake(farmer, pool_id);

    env.storage()
        .persistent()
        .set::<Storage, Stake>(&stake_key, stake);

    extend_persistent_ttl(env, &stake_key);
}

pub fn has_farmer(env: &Env, farmer: Address) -> bool {
    env.storage()
        .persistent()
        .has::<Storage>(&Storage::Farmer(farmer))
}
pub fn get_farmer(env: &Env, farmer: Address) -> Option<Farmer> {
    env.storage()
        .persistent()
        .get::<Storage, Farmer>(&Storage::Farmer(farmer))
}
pub fn set_farmer(env: &Env, farmer: Address, record: &Farmer) {
    let farmer_key = Storage::Farmer(farmer);

    env.storage()
        .persistent()
        .set::<Storage, Farmer>(&farmer_key, record);

    extend_persistent_ttl(env, &farmer_key);
}

pub fn get_crop(env: &Env, crop_id: u64) -> Option<Crop> {
    env.storage()
        .persistent()
        .get::<Storage, Crop>(&Storage::Crop(crop_id))
}
pub fn set_crop(env: &Env, crop_id: u64, crop: &Crop) {
    let crop_key = Storage::Crop(crop_id);

    env.storage()
        .persistent()
        .set::<Storage, Crop>(&crop_key, crop);

    extend_persistent_ttl(env, &crop_key);
}
