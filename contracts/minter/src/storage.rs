use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::{
    error::ContractError,
    ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
};

/// 1.0 in the fixed-point scale shared with the market contract.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    IsInitialized,
    Config,
}

/// Where mint requests are forwarded to and who sponsors their gas on the
/// relay side.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct RelayConfig {
    pub relay: Address,
    pub sponsor: Address,
    pub sponsor_wallet: Address,
    pub endpoint_id: BytesN<32>,
    pub requester: Address,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub admin: Address,
    pub registry: Address,
    pub payment_token: Address,
    pub protocol_wallet: Address,
    pub mint_price: i128,
    pub percent_protocol: i128,
    pub percent_relay: i128,
    pub relay: RelayConfig,
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

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(ContractError::ConfigNotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, LIFETIME_THRESHOLD, BUMP_AMOUNT);

    Ok(config)
}
