use soroban_sdk::{contracttype, Address, Bytes, String};

// Enum to represent different data keys in storage
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Owner(u64),
    MinterApproval(Address),
    Uri(u64),
    Config,
    IsInitialized,
}

// Struct to represent token URI
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct URIValue {
    pub uri: Bytes,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub name: String,
    pub symbol: String,
}

pub mod utils {

    use soroban_sdk::{Address, Env};

    use crate::{
        error::ContractError,
        ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
    };

    use super::{Config, DataKey};

    pub fn read_owner(env: &Env, id: u64) -> Option<Address> {
        let key = DataKey::Owner(id);
        let owner: Option<Address> = env.storage().persistent().get(&key);

        if owner.is_some() {
            env.storage()
                .persistent()
                .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
        }

        owner
    }

    pub fn write_owner(env: &Env, id: u64, owner: &Address) {
        let key = DataKey::Owner(id);
        env.storage().persistent().set(&key, owner);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn read_minter_approval(env: &Env, operator: &Address) -> bool {
        let key = DataKey::MinterApproval(operator.clone());
        let approved = env.storage().persistent().get(&key).unwrap_or(false);

        env.storage().persistent().has(&key).then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
        });

        approved
    }

    pub fn write_minter_approval(env: &Env, operator: &Address, approved: bool) {
        let key = DataKey::MinterApproval(operator.clone());
        env.storage().persistent().set(&key, &approved);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn save_config(env: &Env, config: Config) {
        env.storage().persistent().set(&DataKey::Config, &config);
    }

    pub fn get_config(env: &Env) -> Result<Config, ContractError> {
        let config = env
            .storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(ContractError::ConfigNotFound)?;

        Ok(config)
    }

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().persistent().set(&DataKey::Admin, &admin);
    }

    pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
        let admin = env
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(ContractError::AdminNotSet)?;

        Ok(admin)
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::IsInitialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage()
            .persistent()
            .set(&DataKey::IsInitialized, &true);
    }
}
