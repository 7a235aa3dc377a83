use soroban_sdk::{contracttype, Address, Env};

use crate::{
    error::ContractError,
    ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
};

#[derive(Clone)]
#[contracttype]
pub struct BalanceKey {
    pub holder: Address,
    pub nft_id: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    IsInitialized,
    Config,
    Supply(u64),
    Balance(BalanceKey),
    Royalty(u64),
    Dividend(u64),
}

/// Market-wide configuration. Written once at initialization, mutated only
/// through the admin setters; every fee computation reads the percentages
/// from here so changes apply from the next trade on.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub admin: Address,
    pub directory: Address,
    pub payment_token: Address,
    pub protocol_wallet: Address,
    pub protocol_fee_percentage: i128,
    pub nft_royalty_percentage: i128,
    pub dividend_percentage: i128,
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

pub fn read_supply(env: &Env, nft_id: u64) -> u64 {
    let key = DataKey::Supply(nft_id);
    let supply = env.storage().persistent().get(&key).unwrap_or(0u64);

    env.storage().persistent().has(&key).then(|| {
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
    });

    supply
}

pub fn write_supply(env: &Env, nft_id: u64, supply: u64) {
    let key = DataKey::Supply(nft_id);
    env.storage().persistent().set(&key, &supply);
    env.storage()
        .persistent()
        .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn read_key_balance(env: &Env, holder: &Address, nft_id: u64) -> u64 {
    let key = DataKey::Balance(BalanceKey {
        holder: holder.clone(),
        nft_id,
    });
    let balance = env.storage().persistent().get(&key).unwrap_or(0u64);

    env.storage().persistent().has(&key).then(|| {
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
    });

    balance
}

pub fn write_key_balance(env: &Env, holder: &Address, nft_id: u64, balance: u64) {
    let key = DataKey::Balance(BalanceKey {
        holder: holder.clone(),
        nft_id,
    });
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn read_accrued_royalty(env: &Env, nft_id: u64) -> i128 {
    let key = DataKey::Royalty(nft_id);
    let accrued = env.storage().persistent().get(&key).unwrap_or(0i128);

    env.storage().persistent().has(&key).then(|| {
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
    });

    accrued
}

pub fn write_accrued_royalty(env: &Env, nft_id: u64, accrued: i128) {
    let key = DataKey::Royalty(nft_id);
    env.storage().persistent().set(&key, &accrued);
    env.storage()
        .persistent()
        .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn read_accrued_dividend(env: &Env, nft_id: u64) -> i128 {
    let key = DataKey::Dividend(nft_id);
    let accrued = env.storage().persistent().get(&key).unwrap_or(0i128);

    env.storage().persistent().has(&key).then(|| {
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
    });

    accrued
}

pub fn write_accrued_dividend(env: &Env, nft_id: u64, accrued: i128) {
    let key = DataKey::Dividend(nft_id);
    env.storage().persistent().set(&key, &accrued);
    env.storage()
        .persistent()
        .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}
