use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contractimpl, panic_with_error, token, Address, Env, Vec};

use crate::{
    events,
    errors::Errors,
    storage::{
        bump_farmer_count, extend_instance_ttl, get_farm_asset, get_farm_paused, get_farmer,
        has_farmer, set_farmer,
    },
    types::{CheckIn, Farmer},
    Contract, ContractArgs, ContractClient, FarmerTrait, CHECK_IN_COOLDOWN, CHECK_IN_REWARD,
    CHECK_IN_WINDOW, MAX_STREAK, STREAK_BONUS_PCT,
};

#[contractimpl]
impl FarmerTrait for Contract {
    fn register(env: Env, farmer: Address, referrer: Option<Address>) {
        farmer.require_auth();

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        if has_farmer(&env, farmer.clone()) {
            panic_with_error!(&env, &Errors::FarmerExists);
        }

        // unknown or self referrers are dropped, not rejected
        let referrer = referrer.filter(|r| *r != farmer && has_farmer(&env, r.clone()));

        let record = Farmer {
            check_in: CheckIn::Registered,
            streak: 0,
            referrer: referrer.clone(),
            total_staked: 0,
            total_earned: 0,
            referral_earned: 0,
            crops: Vec::new(&env),
        };

        set_farmer(&env, farmer.clone(), &record);
        bump_farmer_count(&env);

        events::registered(&env, farmer, referrer);

        extend_instance_ttl(&env);
    }

    fn check_in(env: Env, farmer: Address) -> i128 {
        farmer.require_auth();

        let asset = get_farm_asset(&env);
        let now = env.ledger().timestamp();
        let mut record = get_farmer(&env, farmer.clone())
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmerMissing));

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        record.streak = match record.check_in {
            CheckIn::At(last) => {
                if now < last + CHECK_IN_COOLDOWN {
                    panic_with_error!(&env, &Errors::CheckInTooSoon);
                }

                if now <= last + CHECK_IN_WINDOW {
                    (record.streak + 1).min(MAX_STREAK)
                } else {
                    1
                }
            }
            _ => 1,
        };

        let reward = check_in_reward(&env, record.streak);

        record.check_in = CheckIn::At(now);
        record.total_earned += reward;

        set_farmer(&env, farmer.clone(), &record);

        token::StellarAssetClient::new(&env, &asset).mint(&farmer, &reward);

        events::checked_in(&env, farmer, record.streak, reward);

        extend_instance_ttl(&env);

        reward
    }
}

fn check_in_reward(env: &Env, streak: u32) -> i128 {
    CHECK_IN_REWARD.fixed_mul_floor(env, &(100 + streak as i128 * STREAK_BONUS_PCT), &100)
}
