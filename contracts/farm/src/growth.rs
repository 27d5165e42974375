use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{Address, Env};

use crate::{
    errors::Errors,
    types::{Crop, CropType, Stage},
    BASE_MULTIPLIER, DAY, TIER_1_MULTIPLIER, TIER_1_STAKE, TIER_2_MULTIPLIER, TIER_2_STAKE,
    UNIT, WATER_INTERVAL,
};

/// Nominal growth duration (seconds) and base harvest reward.
pub fn crop_info(crop_type: CropType) -> (u64, i128) {
    match crop_type {
        CropType::Wheat => (3 * DAY, 5 * UNIT),
        CropType::Corn => (5 * DAY, 8 * UNIT),
        CropType::Tomato => (7 * DAY, 10 * UNIT),
        CropType::Pumpkin => (14 * DAY, 25 * UNIT),
    }
}

pub fn bonus_multiplier(total_staked: i128) -> u32 {
    if total_staked >= TIER_2_STAKE {
        TIER_2_MULTIPLIER
    } else if total_staked >= TIER_1_STAKE {
        TIER_1_MULTIPLIER
    } else {
        BASE_MULTIPLIER
    }
}

pub fn harvest_reward(env: &Env, base_reward: i128, multiplier: u32) -> i128 {
    base_reward.fixed_mul_floor(env, &(multiplier as i128), &(BASE_MULTIPLIER as i128))
}

pub fn new_crop(
    planter: Address,
    crop_type: CropType,
    multiplier: u32,
    now: u64,
) -> Result<Crop, Errors> {
    if multiplier < BASE_MULTIPLIER {
        return Err(Errors::MultiplierInvalid);
    }

    let (duration, _) = crop_info(crop_type);

    Ok(Crop {
        planter,
        crop_type,
        stage: Stage::Seed,
        planted_at: now,
        last_watered: now,
        harvestable_at: now + duration,
        harvested: false,
        multiplier,
    })
}

/// Stage the crop would be in at `now`. Never looks at the stored stage.
pub fn stage_at(crop: &Crop, now: u64) -> Stage {
    if now >= crop.harvestable_at {
        return Stage::Harvestable;
    }

    let (duration, _) = crop_info(crop.crop_type);
    let progress = now.saturating_sub(crop.planted_at) * 100 / duration;

    match progress {
        0..=24 => Stage::Seed,
        25..=49 => Stage::Sprouting,
        50..=74 => Stage::Growing,
        _ => Stage::Mature,
    }
}

/// Returns true when the stored stage moved.
pub fn refresh(crop: &mut Crop, now: u64) -> bool {
    let stage = stage_at(crop, now);

    if stage == crop.stage {
        return false;
    }

    crop.stage = stage;

    true
}

/// Pulls `harvestable_at` one interval closer, never past half the nominal
/// duration. Cooldown still resets once the floor is reached.
pub fn water(crop: &mut Crop, now: u64) -> Result<(), Errors> {
    if crop.harvested {
        return Err(Errors::CropHarvested);
    }

    if now < crop.last_watered + WATER_INTERVAL {
        return Err(Errors::WaterTooSoon);
    }

    let (duration, _) = crop_info(crop.crop_type);
    let floor = crop.planted_at + duration / 2;

    crop.last_watered = now;

    if crop.harvestable_at > floor {
        crop.harvestable_at = crop
            .harvestable_at
            .saturating_sub(WATER_INTERVAL)
            .max(floor);
    }

    refresh(crop, now);

    Ok(())
}

/// Marks the crop harvested and returns its payout. Relies on the stored stage,
/// so a crop must have been refreshed into `Harvestable` first.
pub fn harvest(env: &Env, crop: &mut Crop) -> Result<i128, Errors> {
    if crop.harvested {
        return Err(Errors::CropHarvested);
    }

    if crop.stage != Stage::Harvestable {
        return Err(Errors::HarvestNotReady);
    }

    let (_, base_reward) = crop_info(crop.crop_type);

    crop.harvested = true;

    Ok(harvest_reward(env, base_reward, crop.multiplier))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::HOUR;
    use soroban_sdk::testutils::Address as _;

    const PLANTED: u64 = 1_700_000_000;

    fn tomato(env: &Env) -> Crop {
        new_crop(Address::generate(env), CropType::Tomato, BASE_MULTIPLIER, PLANTED).unwrap()
    }

    #[test]
    fn stages_follow_progress() {
        let env = Env::default();
        let crop = tomato(&env);
        let week = 7 * DAY;

        assert_eq!(stage_at(&crop, PLANTED), Stage::Seed);
        assert_eq!(stage_at(&crop, PLANTED + week / 4 - 1), Stage::Seed);
        assert_eq!(stage_at(&crop, PLANTED + week / 4), Stage::Sprouting);
        assert_eq!(stage_at(&crop, PLANTED + week / 2), Stage::Growing);
        assert_eq!(stage_at(&crop, PLANTED + week * 3 / 4), Stage::Mature);
        assert_eq!(stage_at(&crop, PLANTED + week - 1), Stage::Mature);
        assert_eq!(stage_at(&crop, PLANTED + week), Stage::Harvestable);
    }

    #[test]
    fn refresh_is_idempotent() {
        let env = Env::default();
        let mut crop = tomato(&env);

        assert!(!refresh(&mut crop, PLANTED + 1));
        assert!(refresh(&mut crop, PLANTED + 2 * DAY));
        assert_eq!(crop.stage, Stage::Sprouting);
        assert!(!refresh(&mut crop, PLANTED + 2 * DAY));
        assert_eq!(crop.stage, Stage::Sprouting);
    }

    #[test]
    fn water_cooldown() {
        let env = Env::default();
        let mut crop = tomato(&env);

        assert_eq!(water(&mut crop, PLANTED + HOUR - 1), Err(Errors::WaterTooSoon));

        water(&mut crop, PLANTED + HOUR).unwrap();

        assert_eq!(crop.harvestable_at, PLANTED + 7 * DAY - HOUR);
        assert_eq!(crop.last_watered, PLANTED + HOUR);
        assert_eq!(water(&mut crop, PLANTED + 2 * HOUR - 1), Err(Errors::WaterTooSoon));
    }

    #[test]
    fn watering_is_capped_at_half_duration() {
        let env = Env::default();
        let mut crop = tomato(&env);
        let mut now = PLANTED;

        for _ in 0..200 {
            now += HOUR;

            water(&mut crop, now).unwrap();

            assert!(crop.harvestable_at >= PLANTED + 7 * DAY / 2);
        }

        assert_eq!(crop.harvestable_at, PLANTED + 7 * DAY / 2);
        assert_eq!(crop.harvestable_at, PLANTED + 3 * DAY + 12 * HOUR);
        assert_eq!(crop.last_watered, now);
        assert_eq!(crop.stage, Stage::Harvestable);
    }

    #[test]
    fn harvest_requires_refreshed_stage() {
        let env = Env::default();
        let mut crop = tomato(&env);

        // time has passed, but the stored stage has not been refreshed
        assert_eq!(harvest(&env, &mut crop), Err(Errors::HarvestNotReady));

        refresh(&mut crop, PLANTED + 7 * DAY);

        assert_eq!(harvest(&env, &mut crop), Ok(10 * UNIT));
        assert!(crop.harvested);
        assert_eq!(harvest(&env, &mut crop), Err(Errors::CropHarvested));
        assert_eq!(water(&mut crop, PLANTED + 8 * DAY), Err(Errors::CropHarvested));
    }

    #[test]
    fn reward_truncates() {
        let env = Env::default();

        assert_eq!(harvest_reward(&env, 10, 125), 12);
        assert_eq!(harvest_reward(&env, 10, 150), 15);
        assert_eq!(harvest_reward(&env, 3, 125), 3);
        assert_eq!(harvest_reward(&env, 10 * UNIT, TIER_1_MULTIPLIER), 12_5000000);
    }

    #[test]
    fn multiplier_tiers() {
        let env = Env::default();

        assert_eq!(bonus_multiplier(0), 100);
        assert_eq!(bonus_multiplier(TIER_1_STAKE - 1), 100);
        assert_eq!(bonus_multiplier(TIER_1_STAKE), 125);
        assert_eq!(bonus_multiplier(TIER_2_STAKE - 1), 125);
        assert_eq!(bonus_multiplier(TIER_2_STAKE), 150);

        assert_eq!(
            new_crop(Address::generate(&env), CropType::Wheat, 99, PLANTED),
            Err(Errors::MultiplierInvalid)
        );
    }
}
