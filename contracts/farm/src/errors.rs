use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Errors {
    // validation
    PoolMissing = 1,
    PoolInactive = 2,
    AmountInvalid = 3,
    StakeBelowMinimum = 4,
    FarmerMissing = 5,
    CropMissing = 6,
    NotCropOwner = 7,
    MultiplierInvalid = 8,
    RateInvalid = 9,
    RecoverAssetInvalid = 10,

    // state conflict
    FarmerExists = 20,
    StakeTooLow = 21,
    NothingToClaim = 22,
    CheckInTooSoon = 23,
    CropHarvested = 24,
    HarvestNotReady = 25,
    WaterTooSoon = 26,
    FarmPaused = 27,
    FarmNotPaused = 28,

    // setup
    FarmMissing = 40,
}
