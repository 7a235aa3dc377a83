use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

use crate::{
    error::ContractError,
    relay::RelayClient,
    storage::{get_config, is_initialized, save_config, set_initialized, Config, RelayConfig, UNIT},
};

#[contract]
pub struct Minter;

#[contractimpl]
impl Minter {
    #[allow(dead_code)]
    pub fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        payment_token: Address,
        protocol_wallet: Address,
        mint_price: i128,
        percent_protocol: i128,
        percent_relay: i128,
        relay: RelayConfig,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Minter: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        save_config(
            &env,
            &Config {
                admin,
                registry: registry.clone(),
                payment_token,
                protocol_wallet,
                mint_price,
                percent_protocol,
                percent_relay,
                relay,
            },
        );

        set_initialized(&env);

        env.events()
            .publish(("initialize", "minter for registry: "), registry);

        Ok(())
    }

    /// Takes the mint fee, splits it between the protocol wallet and the
    /// relay sponsor wallet, and forwards the request to the oracle relay
    /// for asynchronous fulfilment. Returns the relay's request id. Any
    /// payment above the mint price is retained, not refunded.
    #[allow(dead_code)]
    pub fn mint_request(
        env: Env,
        requester: Address,
        name: String,
        uri: String,
        collection: String,
        payment: i128,
    ) -> Result<u64, ContractError> {
        requester.require_auth();

        let config = get_config(&env)?;

        if payment < config.mint_price {
            log!(
                &env,
                "Minter: Mint request: Insufficient amount. Offered: ",
                payment,
                " mint price: ",
                config.mint_price
            );
            return Err(ContractError::InsufficientAmount);
        }

        let protocol_share = config.mint_price * config.percent_protocol / UNIT;
        let relay_share = config.mint_price * config.percent_relay / UNIT;

        let token = token::Client::new(&env, &config.payment_token);
        token.transfer(&requester, &env.current_contract_address(), &payment);
        token.transfer(
            &env.current_contract_address(),
            &config.protocol_wallet,
            &protocol_share,
        );
        token.transfer(
            &env.current_contract_address(),
            &config.relay.sponsor_wallet,
            &relay_share,
        );

        let relay = RelayClient::new(&env, &config.relay.relay);
        let request_id = relay.request_mint(&requester, &name, &uri, &collection);

        env.events()
            .publish(("mint request", "request id: "), request_id);
        env.events()
            .publish(("mint request", "requester: "), requester);
        env.events().publish(("mint request", "paid: "), payment);

        Ok(request_id)
    }

    #[allow(dead_code)]
    pub fn set_percentages(
        env: Env,
        percent_relay: i128,
        percent_protocol: i128,
    ) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();

        config.percent_relay = percent_relay;
        config.percent_protocol = percent_protocol;
        save_config(&env, &config);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn set_mint_price(env: Env, mint_price: i128) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();

        config.mint_price = mint_price;
        save_config(&env, &config);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn set_protocol_wallet(env: Env, wallet: Address) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();

        config.protocol_wallet = wallet;
        save_config(&env, &config);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn show_admin(env: Env) -> Result<Address, ContractError> {
        Ok(get_config(&env)?.admin)
    }

    #[allow(dead_code)]
    pub fn show_config(env: Env) -> Result<Config, ContractError> {
        get_config(&env)
    }
}
