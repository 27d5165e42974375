use soroban_sdk::{contractimpl, panic_with_error, Address, Env, Vec};

use crate::{
    accrual, growth,
    errors::Errors,
    storage::{
        get_crop, get_farm_paused, get_farmer, get_farmer_count, get_pool, get_pool_index,
        get_stake,
    },
    types::{CheckIn, Crop, CropType, Farmer, FarmerStats, Pool, Stage, Stake},
    Contract, ContractArgs, ContractClient, ViewTrait,
};

#[contractimpl]
impl ViewTrait for Contract {
    fn get_pool(env: Env, pool_id: u32) -> Pool {
        get_pool(&env, pool_id).unwrap_or_else(|| panic_with_error!(&env, &Errors::PoolMissing))
    }

    fn pool_count(env: Env) -> u32 {
        get_pool_index(&env)
    }

    fn get_stake(env: Env, farmer: Address, pool_id: u32) -> Stake {
        get_stake(&env, farmer, pool_id)
    }

    fn earned(env: Env, farmer: Address, pool_id: u32) -> i128 {
        let pool = get_pool(&env, pool_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::PoolMissing));
        let stake = get_stake(&env, farmer, pool_id);

        accrual::earned(&env, &pool, &stake, env.ledger().timestamp())
    }

    fn get_farmer(env: Env, farmer: Address) -> Option<Farmer> {
        get_farmer(&env, farmer)
    }

    fn farmer_stats(env: Env, farmer: Address) -> FarmerStats {
        match get_farmer(&env, farmer) {
            Some(record) => FarmerStats {
                check_in: record.check_in,
                streak: record.streak,
                total_staked: record.total_staked,
                total_earned: record.total_earned,
                referral_earned: record.referral_earned,
                crop_count: record.crops.len(),
            },
            None => FarmerStats {
                check_in: CheckIn::Unregistered,
                streak: 0,
                total_staked: 0,
                total_earned: 0,
                referral_earned: 0,
                crop_count: 0,
            },
        }
    }

    fn farmer_crops(env: Env, farmer: Address) -> Vec<u64> {
        get_farmer(&env, farmer)
            .map(|record| record.crops)
            .unwrap_or_else(|| Vec::new(&env))
    }

    fn farmer_count(env: Env) -> u32 {
        get_farmer_count(&env)
    }

    fn get_crop(env: Env, crop_id: u64) -> Crop {
        get_crop(&env, crop_id).unwrap_or_else(|| panic_with_error!(&env, &Errors::CropMissing))
    }

    fn crop_stage(env: Env, crop_id: u64) -> Stage {
        let crop = get_crop(&env, crop_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::CropMissing));

        if crop.harvested {
            return crop.stage;
        }

        growth::stage_at(&crop, env.ledger().timestamp())
    }

    fn crop_info(_env: Env, crop_type: CropType) -> (u64, i128) {
        growth::crop_info(crop_type)
    }

    fn is_paused(env: Env) -> bool {
        get_farm_paused(&env)
    }
}
