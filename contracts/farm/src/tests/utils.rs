use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error,
    testutils::{Address as _, EnvTestConfig, Ledger},
    token, Address, Env,
};

use crate::{registry::CropRegistry, Contract, ContractClient, UNIT};

pub const GENESIS: u64 = 1_700_000_000;

pub struct Setup {
    pub env: Env,
    pub admin: Address,
    pub farm: ContractClient<'static>,
    pub asset: token::Client<'static>,
    pub asset_admin: token::StellarAssetClient<'static>,
    pub registry: RegistryClient<'static>,
}

impl Setup {
    pub fn new() -> Self {
        let env = new_env();
        let admin = Address::generate(&env);
        let asset_sac = env.register_stellar_asset_contract_v2(admin.clone());
        let setup = Self::build(env, admin, asset_sac.address());

        setup.asset_admin.set_admin(&setup.farm.address);

        setup
    }

    /// Farm wired to a ledger enforcing a supply ceiling and a per-transfer cap.
    pub fn with_capped_ledger(max_supply: i128, transfer_cap: i128) -> Self {
        let env = new_env();
        let admin = Address::generate(&env);
        let ledger_address = env.register(CappedLedger, ());
        let setup = Self::build(env, admin, ledger_address);

        CappedLedgerClient::new(&setup.env, &setup.asset.address).init(
            &setup.farm.address,
            &max_supply,
            &transfer_cap,
        );

        setup
    }

    fn build(env: Env, admin: Address, asset_address: Address) -> Self {
        let registry_address = env.register(Registry, ());
        let farm_address = env.register(Contract, (&admin, &asset_address, &registry_address));

        let registry = RegistryClient::new(&env, &registry_address);

        registry.bind(&farm_address);

        Self {
            farm: ContractClient::new(&env, &farm_address),
            asset: token::Client::new(&env, &asset_address),
            asset_admin: token::StellarAssetClient::new(&env, &asset_address),
            registry,
            admin,
            env,
        }
    }

    pub fn farmer(&self) -> Address {
        let farmer = Address::generate(&self.env);

        self.farm.register(&farmer, &None);

        farmer
    }

    pub fn funded_farmer(&self, amount: i128) -> Address {
        let farmer = self.farmer();

        self.asset_admin.mint(&farmer, &amount);

        farmer
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn forward(&self, seconds: u64) {
        forward(&self.env, seconds);
    }
}

fn new_env() -> Env {
    let mut env: Env = Env::default();

    env.set_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });

    env.mock_all_auths();
    env.ledger().set_timestamp(GENESIS);

    env
}

pub fn forward(env: &Env, seconds: u64) {
    env.ledger()
        .set_timestamp(env.ledger().get().timestamp + seconds);
}

pub fn units(amount: i128) -> i128 {
    amount * UNIT
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
enum RegistryStorage {
    Farm,
    Owner(u64),
}

#[contract]
pub struct Registry;

#[contractimpl]
impl Registry {
    pub fn bind(env: Env, farm: Address) {
        env.storage()
            .instance()
            .set::<RegistryStorage, Address>(&RegistryStorage::Farm, &farm);
    }

    pub fn move_crop(env: Env, from: Address, to: Address, id: u64) {
        from.require_auth();

        let owner = env
            .storage()
            .persistent()
            .get::<RegistryStorage, Address>(&RegistryStorage::Owner(id));

        assert_eq!(owner, Some(from));

        env.storage()
            .persistent()
            .set::<RegistryStorage, Address>(&RegistryStorage::Owner(id), &to);
    }
}

#[contractimpl]
impl CropRegistry for Registry {
    fn create(env: Env, owner: Address, id: u64) {
        registry_farm(&env).require_auth();

        let key = RegistryStorage::Owner(id);

        assert!(!env.storage().persistent().has(&key), "crop exists");

        env.storage()
            .persistent()
            .set::<RegistryStorage, Address>(&key, &owner);
    }

    fn owner_of(env: Env, id: u64) -> Option<Address> {
        env.storage()
            .persistent()
            .get::<RegistryStorage, Address>(&RegistryStorage::Owner(id))
    }

    fn destroy(env: Env, id: u64) {
        registry_farm(&env).require_auth();

        let key = RegistryStorage::Owner(id);

        assert!(env.storage().persistent().has(&key), "crop missing");

        env.storage().persistent().remove(&key);
    }
}

fn registry_farm(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<RegistryStorage, Address>(&RegistryStorage::Farm)
        .unwrap()
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LedgerErrors {
    SupplyExceeded = 100,
    TransferCapExceeded = 101,
    BalanceTooLow = 102,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
enum LedgerStorage {
    Admin,
    MaxSupply,
    TransferCap,
    Supply,
    Balance(Address),
}

#[contract]
pub struct CappedLedger;

#[contractimpl]
impl CappedLedger {
    pub fn init(env: Env, admin: Address, max_supply: i128, transfer_cap: i128) {
        let storage = env.storage().instance();

        storage.set(&LedgerStorage::Admin, &admin);
        storage.set(&LedgerStorage::MaxSupply, &max_supply);
        storage.set(&LedgerStorage::TransferCap, &transfer_cap);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        let storage = env.storage().instance();
        let admin: Address = storage.get(&LedgerStorage::Admin).unwrap();
        let max_supply: i128 = storage.get(&LedgerStorage::MaxSupply).unwrap();
        let supply: i128 = storage.get(&LedgerStorage::Supply).unwrap_or(0);

        admin.require_auth();

        if supply + amount > max_supply {
            panic_with_error!(&env, LedgerErrors::SupplyExceeded);
        }

        storage.set(&LedgerStorage::Supply, &(supply + amount));
        set_balance(&env, &to, balance_of(&env, &to) + amount);
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        let transfer_cap: i128 = env
            .storage()
            .instance()
            .get(&LedgerStorage::TransferCap)
            .unwrap();

        from.require_auth();

        if amount > transfer_cap {
            panic_with_error!(&env, LedgerErrors::TransferCapExceeded);
        }

        let from_balance = balance_of(&env, &from);

        if from_balance < amount {
            panic_with_error!(&env, LedgerErrors::BalanceTooLow);
        }

        set_balance(&env, &from, from_balance - amount);
        set_balance(&env, &to, balance_of(&env, &to) + amount);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        balance_of(&env, &id)
    }
}

fn balance_of(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&LedgerStorage::Balance(id.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&LedgerStorage::Balance(id.clone()), &amount);
}
