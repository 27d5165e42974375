use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Pool {
    pub reward_rate: i128, // reward units per second, split across total_staked
    pub total_staked: i128,
    pub last_update: u64,
    pub reward_per_unit: i128, // SCALE fixed point
    pub min_stake: i128,
    pub active: bool,
}

// Keyed by (farmer, pool) so stakes in different pools accumulate independently
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stake {
    pub amount: i128,
    pub staked_at: u64,
    pub last_claim: u64,
    pub total_claimed: i128,
    pub reward_per_unit_paid: i128,
    pub pending: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckIn {
    Unregistered,
    Registered,
    At(u64),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Farmer {
    pub check_in: CheckIn,
    pub streak: u32,
    pub referrer: Option<Address>,
    pub total_staked: i128,
    pub total_earned: i128,
    pub referral_earned: i128,
    pub crops: Vec<u64>,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FarmerStats {
    pub check_in: CheckIn,
    pub streak: u32,
    pub total_staked: i128,
    pub total_earned: i128,
    pub referral_earned: i128,
    pub crop_count: u32,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CropType {
    Wheat = 0,
    Corn = 1,
    Tomato = 2,
    Pumpkin = 3,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Stage {
    Seed = 0,
    Sprouting = 1,
    Growing = 2,
    Mature = 3,
    Harvestable = 4,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Crop {
    pub planter: Address,
    pub crop_type: CropType,
    pub stage: Stage,
    pub planted_at: u64,
    pub last_watered: u64,
    pub harvestable_at: u64,
    pub harvested: bool,
    pub multiplier: u32, // 100 = 1.0x
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Admin,               // : address
    Asset,               // : address
    Registry,            // : address
    Paused,              // : bool
    PoolIndex,           // : u32
    CropIndex,           // : u64
    FarmerCount,         // : u32
    Pool(u32),           // (pool) : Pool
    Stake(Address, u32), // (farmer, pool) : Stake
    Farmer(Address),     // (farmer) : Farmer
    Crop(u64),           // (crop) : Crop
}
