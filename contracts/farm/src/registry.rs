use soroban_sdk::{contractclient, Address, Env};

/// Ownership ledger for planted crops.
///
/// The farm assigns crop ids and mirrors `create`/`destroy` into the registry on
/// plant and harvest. Transfers happen on the registry directly, so the farm
/// always asks `owner_of` before letting a caller touch a crop. The registry is
/// expected to only accept `create` and `destroy` from the farm contract.
#[contractclient(name = "CropRegistryClient")]
pub trait CropRegistry {
    fn create(env: Env, owner: Address, id: u64);

    fn owner_of(env: Env, id: u64) -> Option<Address>;

    fn destroy(env: Env, id: u64);
}
