use soroban_sdk::{contractimpl, panic_with_error, token, Address, Env, Vec};

use crate::{
    events, growth,
    errors::Errors,
    registry::CropRegistryClient,
    storage::{
        bump_crop_index, extend_instance_ttl, get_crop, get_farm_asset, get_farm_paused,
        get_farm_registry, get_farmer, has_farmer, set_crop, set_farmer,
    },
    types::{Crop, CropType, Stage},
    Contract, ContractArgs, ContractClient, GardenTrait,
};

#[contractimpl]
impl GardenTrait for Contract {
    fn plant(env: Env, farmer: Address, crop_type: CropType) -> u64 {
        farmer.require_auth();

        let registry = get_farm_registry(&env);
        let mut record = get_farmer(&env, farmer.clone())
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmerMissing));

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        // tier is read from the stake held at planting time and fixed for the crop's life
        let multiplier = growth::bonus_multiplier(record.total_staked);
        let now = env.ledger().timestamp();
        let crop = growth::new_crop(farmer.clone(), crop_type, multiplier, now)
            .unwrap_or_else(|error| panic_with_error!(&env, error));
        let crop_id = bump_crop_index(&env);

        record.crops.push_back(crop_id);

        set_crop(&env, crop_id, &crop);
        set_farmer(&env, farmer.clone(), &record);

        CropRegistryClient::new(&env, &registry).create(&farmer, &crop_id);

        events::planted(&env, farmer, crop_id, crop_type, multiplier);

        extend_instance_ttl(&env);

        crop_id
    }

    fn water(env: Env, farmer: Address, crop_id: u64) {
        farmer.require_auth();

        let mut crop = load_crop(&env, crop_id);

        if !has_farmer(&env, farmer.clone()) {
            panic_with_error!(&env, &Errors::FarmerMissing);
        }

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        require_owner(&env, &farmer, crop_id, &crop);

        growth::water(&mut crop, env.ledger().timestamp())
            .unwrap_or_else(|error| panic_with_error!(&env, error));

        set_crop(&env, crop_id, &crop);

        events::watered(&env, crop_id, crop.harvestable_at, crop.stage);

        extend_instance_ttl(&env);
    }

    fn refresh(env: Env, crop_id: u64) -> Stage {
        // No auth_require here so anyone can advance a crop on the owner's behalf

        let mut crop = load_crop(&env, crop_id);

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        if !crop.harvested && growth::refresh(&mut crop, env.ledger().timestamp()) {
            set_crop(&env, crop_id, &crop);
        }

        crop.stage
    }

    fn harvest(env: Env, farmer: Address, crop_id: u64) -> i128 {
        farmer.require_auth();

        let asset = get_farm_asset(&env);
        let registry = get_farm_registry(&env);
        let mut crop = load_crop(&env, crop_id);
        let mut record = get_farmer(&env, farmer.clone())
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::FarmerMissing));

        if get_farm_paused(&env) {
            panic_with_error!(&env, &Errors::FarmPaused);
        }

        require_owner(&env, &farmer, crop_id, &crop);

        let reward = growth::harvest(&env, &mut crop)
            .unwrap_or_else(|error| panic_with_error!(&env, error));

        // the id lives in the planter's list even after a registry transfer
        if crop.planter == farmer {
            remove_crop_id(&mut record.crops, crop_id);
        } else if let Some(mut planter) = get_farmer(&env, crop.planter.clone()) {
            remove_crop_id(&mut planter.crops, crop_id);
            set_farmer(&env, crop.planter.clone(), &planter);
        }

        record.total_earned += reward;

        set_crop(&env, crop_id, &crop);
        set_farmer(&env, farmer.clone(), &record);

        CropRegistryClient::new(&env, &registry).destroy(&crop_id);
        token::StellarAssetClient::new(&env, &asset).mint(&farmer, &reward);

        events::harvested(&env, farmer, crop_id, reward);

        extend_instance_ttl(&env);

        reward
    }
}

fn load_crop(env: &Env, crop_id: u64) -> Crop {
    get_crop(env, crop_id).unwrap_or_else(|| panic_with_error!(env, &Errors::CropMissing))
}

// order of the list carries no meaning, so swap the last id into the hole
fn remove_crop_id(crops: &mut Vec<u64>, crop_id: u64) {
    if let Some(index) = crops.first_index_of(crop_id) {
        if let Some(last) = crops.pop_back() {
            if index < crops.len() {
                crops.set(index, last);
            }
        }
    }
}

fn require_owner(env: &Env, farmer: &Address, crop_id: u64, crop: &Crop) {
    if crop.harvested {
        panic_with_error!(env, &Errors::CropHarvested);
    }

    let owner = CropRegistryClient::new(env, &get_farm_registry(env)).owner_of(&crop_id);

    if owner.as_ref() != Some(farmer) {
        panic_with_error!(env, &Errors::NotCropOwner);
    }
}
