use soroban_sdk::{
    contract, contractimpl, testutils::Address as _, token, Address, Env,
};

use crate::contract::{MarketContract, MarketContractClient};

// Reference deployment percentages, 18-decimal fixed point.
pub const PROTOCOL_FEE_PERCENTAGE: i128 = 50_000_000_000_000_000; // 0.05
pub const NFT_ROYALTY_PERCENTAGE: i128 = 25_000_000_000_000_000; // 0.025
pub const DIVIDEND_PERCENTAGE: i128 = 25_000_000_000_000_000; // 0.025

/// Creator registry test double satisfying the directory interface the
/// market is initialized with. `mint` overwrites the owner, which doubles
/// as an ownership transfer in tests.
#[contract]
pub struct TestRegistry;

#[contractimpl]
impl TestRegistry {
    pub fn mint(env: Env, id: u64, owner: Address) {
        env.storage().persistent().set(&id, &owner);
    }

    pub fn exists(env: Env, id: u64) -> bool {
        env.storage().persistent().has(&id)
    }

    pub fn owner_of(env: Env, id: u64) -> Address {
        env.storage().persistent().get(&id).unwrap()
    }
}

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let token_addr = env.register_stellar_asset_contract(admin.clone());

    (
        token::Client::new(env, &token_addr),
        token::StellarAssetClient::new(env, &token_addr),
    )
}

pub struct TestMarket<'a> {
    pub market: MarketContractClient<'a>,
    pub registry: TestRegistryClient<'a>,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub admin: Address,
    pub protocol_wallet: Address,
}

pub fn deploy_market<'a>(env: &Env) -> TestMarket<'a> {
    let admin = Address::generate(env);
    let protocol_wallet = Address::generate(env);

    let registry = TestRegistryClient::new(env, &env.register_contract(None, TestRegistry {}));
    let (token, token_admin) = deploy_token_contract(env, &admin);

    let market = MarketContractClient::new(env, &env.register_contract(None, MarketContract {}));
    market.initialize(
        &admin,
        &registry.address,
        &token.address,
        &protocol_wallet,
        &PROTOCOL_FEE_PERCENTAGE,
        &NFT_ROYALTY_PERCENTAGE,
        &DIVIDEND_PERCENTAGE,
    );

    TestMarket {
        market,
        registry,
        token,
        token_admin,
        admin,
        protocol_wallet,
    }
}
