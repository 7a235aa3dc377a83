use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

use crate::{
    curve,
    directory::DirectoryClient,
    error::ContractError,
    events::{self, ClaimEvent, ClaimKind, TradeEvent, TradeSide},
    storage::{
        get_config, is_initialized, read_accrued_dividend, read_accrued_royalty, read_key_balance,
        read_supply, save_config, set_initialized, write_accrued_dividend, write_accrued_royalty,
        write_key_balance, write_supply, Config,
    },
};

#[contract]
pub struct MarketContract;

#[contractimpl]
impl MarketContract {
    #[allow(dead_code)]
    pub fn initialize(
        env: Env,
        admin: Address,
        directory: Address,
        payment_token: Address,
        protocol_wallet: Address,
        protocol_fee_percentage: i128,
        nft_royalty_percentage: i128,
        dividend_percentage: i128,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Market: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        save_config(
            &env,
            &Config {
                admin,
                directory: directory.clone(),
                payment_token,
                protocol_wallet,
                protocol_fee_percentage,
                nft_royalty_percentage,
                dividend_percentage,
            },
        );

        set_initialized(&env);

        env.events()
            .publish(("initialize", "creator keys market for directory: "), directory);

        Ok(())
    }

    /// Buys `amount` keys of the creator NFT `nft_id`. The buyer offers
    /// `payment`, which must cover the curve price plus all three fees;
    /// any excess over the total due is retained by the market rather
    /// than refunded.
    #[allow(dead_code)]
    pub fn buy_keys(
        env: Env,
        buyer: Address,
        nft_id: u64,
        amount: u64,
        payment: i128,
    ) -> Result<(), ContractError> {
        buyer.require_auth();

        let config = get_config(&env)?;

        let directory = DirectoryClient::new(&env, &config.directory);
        if !directory.exists(&nft_id) {
            log!(&env, "Market: Buy keys: No creator NFT with id: ", nft_id);
            return Err(ContractError::NftNotFound);
        }

        if amount == 0 {
            log!(&env, "Market: Buy keys: Amount cannot be zero");
            return Err(ContractError::InvalidAmount);
        }

        let supply = read_supply(&env, nft_id);
        let base_price = curve::price(supply, amount);
        let protocol_fee = fee_of(base_price, config.protocol_fee_percentage);
        let royalty_fee = fee_of(base_price, config.nft_royalty_percentage);
        let dividend_fee = fee_of(base_price, config.dividend_percentage);
        let total_due = base_price + protocol_fee + royalty_fee + dividend_fee;

        if payment < total_due {
            log!(
                &env,
                "Market: Buy keys: Insufficient payment. Offered: ",
                payment,
                " due: ",
                total_due
            );
            return Err(ContractError::InsufficientPayment);
        }

        // ledger first, value movement last
        write_supply(&env, nft_id, supply + amount);
        let balance = read_key_balance(&env, &buyer, nft_id);
        write_key_balance(&env, &buyer, nft_id, balance + amount);
        write_accrued_royalty(
            &env,
            nft_id,
            read_accrued_royalty(&env, nft_id) + royalty_fee,
        );
        write_accrued_dividend(
            &env,
            nft_id,
            read_accrued_dividend(&env, nft_id) + dividend_fee,
        );

        let token = token::Client::new(&env, &config.payment_token);
        token.transfer(&buyer, &env.current_contract_address(), &payment);
        token.transfer(
            &env.current_contract_address(),
            &config.protocol_wallet,
            &protocol_fee,
        );

        events::emit_trade(
            &env,
            TradeEvent {
                nft_id,
                trader: buyer,
                side: TradeSide::Buy,
                amount,
                base_price,
                protocol_fee,
                royalty_fee,
                dividend_fee,
                total_paid: payment,
            },
        );

        Ok(())
    }

    /// Sells `amount` keys back to the curve. The payout walks the curve
    /// down over the same range a buy of `amount` walked up; no fees are
    /// charged on the sell side.
    #[allow(dead_code)]
    pub fn sell_keys(
        env: Env,
        seller: Address,
        nft_id: u64,
        amount: u64,
    ) -> Result<(), ContractError> {
        seller.require_auth();

        let config = get_config(&env)?;

        if amount == 0 {
            log!(&env, "Market: Sell keys: Amount cannot be zero");
            return Err(ContractError::InvalidAmount);
        }

        let balance = read_key_balance(&env, &seller, nft_id);
        if balance < amount {
            log!(
                &env,
                "Market: Sell keys: Insufficient shares. Held: ",
                balance,
                " to sell: ",
                amount
            );
            return Err(ContractError::InsufficientShares);
        }

        let supply = read_supply(&env, nft_id);
        let base_price = curve::price(supply - amount, amount);

        write_supply(&env, nft_id, supply - amount);
        write_key_balance(&env, &seller, nft_id, balance - amount);

        let token = token::Client::new(&env, &config.payment_token);
        token.transfer(&env.current_contract_address(), &seller, &base_price);

        events::emit_trade(
            &env,
            TradeEvent {
                nft_id,
                trader: seller,
                side: TradeSide::Sell,
                amount,
                base_price,
                protocol_fee: 0,
                royalty_fee: 0,
                dividend_fee: 0,
                total_paid: base_price,
            },
        );

        Ok(())
    }

    /// Pays the full accrued royalty pool of `nft_id` to the current NFT
    /// owner. Ownership is read from the directory at call time, so a
    /// transferred NFT carries its unclaimed royalties to the new owner.
    #[allow(dead_code)]
    pub fn claim_royalty(env: Env, claimant: Address, nft_id: u64) -> Result<(), ContractError> {
        claimant.require_auth();

        let config = get_config(&env)?;

        let directory = DirectoryClient::new(&env, &config.directory);
        if !directory.exists(&nft_id) {
            log!(
                &env,
                "Market: Claim royalty: No creator NFT with id: ",
                nft_id
            );
            return Err(ContractError::NftNotFound);
        }

        let owner = directory.owner_of(&nft_id);
        if claimant != owner {
            log!(
                &env,
                "Market: Claim royalty: Claimant is not the NFT owner: ",
                claimant
            );
            return Err(ContractError::Unauthorized);
        }

        let accrued = read_accrued_royalty(&env, nft_id);
        if accrued == 0 {
            log!(&env, "Market: Claim royalty: Nothing to claim");
            return Err(ContractError::NothingToClaim);
        }

        // the pool is zeroed before the payout leaves the contract
        write_accrued_royalty(&env, nft_id, 0);

        let token = token::Client::new(&env, &config.payment_token);
        token.transfer(&env.current_contract_address(), &claimant, &accrued);

        events::emit_claim(
            &env,
            ClaimEvent {
                nft_id,
                claimant,
                kind: ClaimKind::Royalty,
                amount: accrued,
            },
        );

        Ok(())
    }

    /// Pays the claimant their share of the accrued dividend pool,
    /// proportional to the keys they hold at claim time. The share is
    /// removed from the pool, so payouts can never exceed what trades
    /// accrued.
    #[allow(dead_code)]
    pub fn claim_dividend(env: Env, claimant: Address, nft_id: u64) -> Result<(), ContractError> {
        claimant.require_auth();

        let config = get_config(&env)?;

        let accrued = read_accrued_dividend(&env, nft_id);
        let balance = read_key_balance(&env, &claimant, nft_id);
        let supply = read_supply(&env, nft_id);

        let share = if supply == 0 {
            0
        } else {
            accrued * balance as i128 / supply as i128
        };

        if share == 0 {
            log!(&env, "Market: Claim dividend: Nothing to claim");
            return Err(ContractError::NothingToClaim);
        }

        write_accrued_dividend(&env, nft_id, accrued - share);

        let token = token::Client::new(&env, &config.payment_token);
        token.transfer(&env.current_contract_address(), &claimant, &share);

        events::emit_claim(
            &env,
            ClaimEvent {
                nft_id,
                claimant,
                kind: ClaimKind::Dividend,
                amount: share,
            },
        );

        Ok(())
    }

    #[allow(dead_code)]
    pub fn set_protocol_fee_percentage(
        env: Env,
        percentage: i128,
    ) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();

        config.protocol_fee_percentage = percentage;
        save_config(&env, &config);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn set_nft_royalty_percentage(env: Env, percentage: i128) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();

        config.nft_royalty_percentage = percentage;
        save_config(&env, &config);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn set_dividend_percentage(env: Env, percentage: i128) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();

        config.dividend_percentage = percentage;
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

    /// Curve price for `amount` keys on top of an arbitrary `supply`.
    #[allow(dead_code)]
    pub fn get_price(_env: Env, supply: u64, amount: u64) -> i128 {
        curve::price(supply, amount)
    }

    #[allow(dead_code)]
    pub fn get_buy_price(env: Env, nft_id: u64, amount: u64) -> i128 {
        curve::price(read_supply(&env, nft_id), amount)
    }

    #[allow(dead_code)]
    pub fn get_buy_price_after_fee(
        env: Env,
        nft_id: u64,
        amount: u64,
    ) -> Result<i128, ContractError> {
        let config = get_config(&env)?;
        let base_price = curve::price(read_supply(&env, nft_id), amount);

        Ok(base_price
            + fee_of(base_price, config.protocol_fee_percentage)
            + fee_of(base_price, config.nft_royalty_percentage)
            + fee_of(base_price, config.dividend_percentage))
    }

    #[allow(dead_code)]
    pub fn get_sell_price(env: Env, nft_id: u64, amount: u64) -> i128 {
        let supply = read_supply(&env, nft_id);
        if supply < amount {
            // more keys than the market has issued cannot be sold
            return 0;
        }

        curve::price(supply - amount, amount)
    }

    #[allow(dead_code)]
    pub fn get_key_supply(env: Env, nft_id: u64) -> u64 {
        read_supply(&env, nft_id)
    }

    #[allow(dead_code)]
    pub fn get_key_balance(env: Env, holder: Address, nft_id: u64) -> u64 {
        read_key_balance(&env, &holder, nft_id)
    }

    #[allow(dead_code)]
    pub fn get_accrued_royalty(env: Env, nft_id: u64) -> i128 {
        read_accrued_royalty(&env, nft_id)
    }

    #[allow(dead_code)]
    pub fn get_accrued_dividend(env: Env, nft_id: u64) -> i128 {
        read_accrued_dividend(&env, nft_id)
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

fn fee_of(base_price: i128, percentage: i128) -> i128 {
    base_price * percentage / curve::UNIT
}
