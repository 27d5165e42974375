use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contractimpl, panic_with_error, token, Address, Env};

use crate::{
    accrual, events,
    errors::Errors,
    storage::{
        extend_instance_ttl, get_farm_asset, get_farm_paused, get_farmer, get_pool, get_stake,
        set_farmer, set_pool, set_stake,
    },
    types::Pool,
    Contract, ContractArgs, ContractClient, FarmTrait, REFERRAL_PCT,
};

// Every entry point validates first, then checkpoints the pool and the caller's
// stake together, then writes state, and only then calls out to the asset.
#[contractimpl]
impl FarmTrait for Contract {
    fn stake(env: Env, farmer: Address, pool_id: u32, amount: i128) {
        farmer.require_auth();

        let asset = get_farm_asset(&env);
        let now = env.ledger().timestamp();
        let mut pool = load_pool(&env, pool_id);
        let mut record = get_farmer(&env, farmer.clone())
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmerMissing));
        let mut stake = get_stake(&env, farmer.clone(), pool_id);

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        if !pool.active {
            panic_with_error!(&env, &Errors::PoolInactive);
        }

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountInvalid);
        }

        if amount < pool.min_stake {
            panic_with_error!(&env, &Errors::StakeBelowMinimum);
        }

        accrual::checkpoint(&env, &mut pool, Some(&mut stake), now);

        stake.amount += amount;
        stake.staked_at = now;
        pool.total_staked += amount;
        record.total_staked += amount;

        set_stake(&env, farmer.clone(), pool_id, &stake);
        set_pool(&env, pool_id, &pool);
        set_farmer(&env, farmer.clone(), &record);

        token::Client::new(&env, &asset).transfer(
            &farmer,
            &env.current_contract_address(),
            &amount,
        );

        events::staked(&env, farmer, pool_id, amount);

        extend_instance_ttl(&env);
    }

    fn unstake(env: Env, farmer: Address, pool_id: u32, amount: i128) {
        farmer.require_auth();

        let asset = get_farm_asset(&env);
        let now = env.ledger().timestamp();
        let mut pool = load_pool(&env, pool_id);
        let mut record = get_farmer(&env, farmer.clone())
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmerMissing));
        let mut stake = get_stake(&env, farmer.clone(), pool_id);

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountInvalid);
        }

        if amount > stake.amount {
            panic_with_error!(&env, &Errors::StakeTooLow);
        }

        accrual::checkpoint(&env, &mut pool, Some(&mut stake), now);

        stake.amount -= amount;
        pool.total_staked -= amount;
        record.total_staked -= amount;

        set_stake(&env, farmer.clone(), pool_id, &stake);
        set_pool(&env, pool_id, &pool);
        set_farmer(&env, farmer.clone(), &record);

        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &farmer,
            &amount,
        );

        events::unstaked(&env, farmer, pool_id, amount);

        extend_instance_ttl(&env);
    }

    fn claim(env: Env, farmer: Address, pool_id: u32) -> i128 {
        farmer.require_auth();

        let asset = get_farm_asset(&env);
        let now = env.ledger().timestamp();
        let mut pool = load_pool(&env, pool_id);
        let mut record = get_farmer(&env, farmer.clone())
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmerMissing));
        let mut stake = get_stake(&env, farmer.clone(), pool_id);

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        accrual::checkpoint(&env, &mut pool, Some(&mut stake), now);

        let reward = stake.pending;

        if reward <= 0 {
            panic_with_error!(&env, &Errors::NothingToClaim);
        }

        stake.pending = 0;
        stake.last_claim = now;
        stake.total_claimed += reward;
        record.total_earned += reward;

        set_stake(&env, farmer.clone(), pool_id, &stake);
        set_pool(&env, pool_id, &pool);
        set_farmer(&env, farmer.clone(), &record);

        // referral bonus is paid inside the same claim, on top of the reward
        let referral = record.referrer.clone().and_then(|referrer| {
            let bonus = reward.fixed_mul_floor(&env, &REFERRAL_PCT, &100);

            if bonus <= 0 {
                return None;
            }

            let mut referrer_record = get_farmer(&env, referrer.clone())
                .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmerMissing));

            referrer_record.referral_earned += bonus;

            set_farmer(&env, referrer.clone(), &referrer_record);

            Some((referrer, bonus))
        });

        let asset_client = token::StellarAssetClient::new(&env, &asset);

        asset_client.mint(&farmer, &reward);
        events::claimed(&env, farmer.clone(), pool_id, reward);

        if let Some((referrer, bonus)) = referral {
            asset_client.mint(&referrer, &bonus);
            events::referral_paid(&env, referrer, farmer, bonus);
        }

        extend_instance_ttl(&env);

        reward
    }
}

fn load_pool(env: &Env, pool_id: u32) -> Pool {
    get_pool(env, pool_id).unwrap_or_else(|| panic_with_error!(env, &Errors::PoolMissing))
}
