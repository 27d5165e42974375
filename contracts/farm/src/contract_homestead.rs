use soroban_sdk::{contractimpl, log, panic_with_error, token, Address, BytesN, Env};

use crate::{
    accrual, events,
    errors::Errors,
    storage::{
        bump_pool_index, extend_instance_ttl, get_farm_admin, get_farm_asset, get_farm_paused,
        get_pool, set_farm_admin, set_farm_asset, set_farm_paused, set_farm_registry, set_pool,
    },
    types::Pool,
    Contract, ContractArgs, ContractClient, HomesteadTrait, DEFAULT_MIN_STAKE,
    DEFAULT_REWARD_RATE,
};

#[contractimpl]
impl Contract {
    pub fn __constructor(env: Env, admin: Address, asset: Address, registry: Address) {
        set_farm_admin(&env, &admin);
        set_farm_asset(&env, &asset);
        set_farm_registry(&env, &registry);

        new_pool(&env, DEFAULT_REWARD_RATE, DEFAULT_MIN_STAKE);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl HomesteadTrait for Contract {
    fn create_pool(env: Env, reward_rate: i128, min_stake: i128) -> u32 {
        let admin = get_farm_admin(&env);

        admin.require_auth();

        if reward_rate < 0 {
            panic_with_error!(&env, &Errors::RateInvalid);
        }

        if min_stake < 0 {
            panic_with_error!(&env, &Errors::AmountInvalid);
        }

        let pool_id = new_pool(&env, reward_rate, min_stake);

        log!(&env, "pool created", pool_id, reward_rate, min_stake);

        extend_instance_ttl(&env);

        pool_id
    }

    fn update_pool(env: Env, pool_id: u32, reward_rate: i128, active: bool) {
        let admin = get_farm_admin(&env);

        admin.require_auth();

        if reward_rate < 0 {
            panic_with_error!(&env, &Errors::RateInvalid);
        }

        let mut pool =
            get_pool(&env, pool_id).unwrap_or_else(|| panic_with_error!(&env, &Errors::PoolMissing));

        // settle everything accrued so far at the old rate
        accrual::checkpoint(&env, &mut pool, None, env.ledger().timestamp());

        pool.reward_rate = reward_rate;
        pool.active = active;

        set_pool(&env, pool_id, &pool);

        events::pool_updated(&env, pool_id, reward_rate, active);
        log!(&env, "pool updated", pool_id, reward_rate, active);

        extend_instance_ttl(&env);
    }

    fn pause(env: Env) {
        let admin = get_farm_admin(&env);
        let paused = get_farm_paused(&env);

        admin.require_auth();

        if paused {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        set_farm_paused(&env, true);

        events::paused(&env, true);

        // no `extend_instance_ttl` as the farm is being paused
    }

    fn unpause(env: Env) {
        let admin = get_farm_admin(&env);
        let paused = get_farm_paused(&env);

        admin.require_auth();

        if !paused {
            panic_with_error!(&env, &Errors::FarmNotPaused);
        }

        set_farm_paused(&env, false);

        events::paused(&env, false);

        extend_instance_ttl(&env);
    }

    fn recover(env: Env, asset: Address, to: Address, amount: i128) {
        let admin = get_farm_admin(&env);

        admin.require_auth();

        // the farm asset is staker custody, never a stray deposit
        if asset == get_farm_asset(&env) {
            panic_with_error!(&env, &Errors::RecoverAssetInvalid);
        }

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountInvalid);
        }

        token::Client::new(&env, &asset).transfer(&env.current_contract_address(), &to, &amount);

        events::recovered(&env, asset, to, amount);

        extend_instance_ttl(&env);
    }

    fn set_admin(env: Env, admin: Address) {
        let current = get_farm_admin(&env);

        current.require_auth();
        admin.require_auth();

        set_farm_admin(&env, &admin);

        log!(&env, "admin changed", current, admin);

        extend_instance_ttl(&env);
    }

    fn upgrade(env: Env, hash: BytesN<32>) {
        let admin = get_farm_admin(&env);

        admin.require_auth();

        env.deployer().update_current_contract_wasm(hash);

        extend_instance_ttl(&env);
    }
}

fn new_pool(env: &Env, reward_rate: i128, min_stake: i128) -> u32 {
    let pool_id = bump_pool_index(env);
    let pool = Pool {
        reward_rate,
        total_staked: 0,
        last_update: env.ledger().timestamp(),
        reward_per_unit: 0,
        min_stake,
        active: true,
    };

    set_pool(env, pool_id, &pool);

    events::pool_created(env, pool_id, reward_rate, min_stake);

    pool_id
}
