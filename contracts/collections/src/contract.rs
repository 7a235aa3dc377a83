use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env, String};

use crate::{
    error::ContractError,
    storage::{
        utils::{
            get_admin, get_config, is_initialized, read_minter_approval, read_owner, save_admin,
            save_config, set_initialized, write_minter_approval, write_owner,
        },
        Config, DataKey, URIValue,
    },
    ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
};

#[contract]
pub struct Collections;

#[contractimpl]
impl Collections {
    // takes an address and uses it as an administrator of the registry
    #[allow(dead_code)]
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Collections: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        save_config(
            &env,
            Config {
                name: name.clone(),
                symbol: symbol.clone(),
            },
        );
        save_admin(&env, &admin);

        set_initialized(&env);

        env.events()
            .publish(("initialize", "collection name: "), name);
        env.events()
            .publish(("initialize", "collection symbol: "), symbol);

        Ok(())
    }

    // Records a new single-edition creator NFT with `to` as its first owner
    #[allow(dead_code)]
    pub fn mint(
        env: Env,
        sender: Address,
        to: Address,
        id: u64,
        uri: Bytes,
    ) -> Result<(), ContractError> {
        if !Self::is_authorized_minter(&env, &sender)? {
            log!(&env, "Collections: Mint: Unauthorized. Sender: ", sender);
            return Err(ContractError::Unauthorized);
        }

        sender.require_auth();

        if read_owner(&env, id).is_some() {
            log!(&env, "Collections: Mint: Id already minted: ", id);
            return Err(ContractError::AlreadyMinted);
        }

        write_owner(&env, id, &to);

        env.storage()
            .persistent()
            .set(&DataKey::Uri(id), &URIValue { uri: uri.clone() });
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Uri(id), LIFETIME_THRESHOLD, BUMP_AMOUNT);

        env.events().publish(("mint", "to: "), to);
        env.events().publish(("mint", "id: "), id);
        env.events().publish(("mint", "uri: "), uri);

        Ok(())
    }

    // Returns true if the creator NFT `id` has been minted
    #[allow(dead_code)]
    pub fn exists(env: Env, id: u64) -> bool {
        read_owner(&env, id).is_some()
    }

    // Returns the current owner of the creator NFT `id`
    #[allow(dead_code)]
    pub fn owner_of(env: Env, id: u64) -> Result<Address, ContractError> {
        match read_owner(&env, id) {
            Some(owner) => Ok(owner),
            None => {
                log!(&env, "Collections: Owner of: No NFT with id: ", id);
                Err(ContractError::NotMinted)
            }
        }
    }

    // Moves the creator NFT `id` from its current owner to `to`; unclaimed
    // market royalties follow the NFT
    #[allow(dead_code)]
    pub fn transfer(env: Env, from: Address, to: Address, id: u64) -> Result<(), ContractError> {
        from.require_auth();

        let owner = Self::owner_of(env.clone(), id)?;
        if owner != from {
            log!(
                &env,
                "Collections: Transfer: Unauthorized. ",
                from,
                " is not the owner of id ",
                id
            );
            return Err(ContractError::Unauthorized);
        }

        write_owner(&env, id, &to);

        env.events().publish(("transfer", "from: "), from);
        env.events().publish(("transfer", "to: "), to);
        env.events().publish(("transfer", "id: "), id);

        Ok(())
    }

    // Grants or revokes `operator` the permission to mint new ids
    #[allow(dead_code)]
    pub fn set_minter(env: Env, operator: Address, approved: bool) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        if admin == operator {
            log!(
                &env,
                "Collections: Set minter: Cannot set approval for self. Operator: ",
                operator
            );
            return Err(ContractError::CannotApproveSelf);
        }

        write_minter_approval(&env, &operator, approved);

        env.events().publish(("set minter", "operator: "), operator);
        env.events().publish(("set minter", "approved: "), approved);

        Ok(())
    }

    // Returns true if `operator` is allowed to mint
    #[allow(dead_code)]
    pub fn is_minter(env: Env, operator: Address) -> bool {
        read_minter_approval(&env, &operator)
    }

    // Sets a new URI for the creator NFT `id`
    #[allow(dead_code)]
    pub fn set_uri(env: Env, sender: Address, id: u64, uri: Bytes) -> Result<(), ContractError> {
        if !Self::is_authorized_minter(&env, &sender)? {
            log!(&env, "Collections: Set uri: Unauthorized. Sender: ", sender);
            return Err(ContractError::Unauthorized);
        }
        sender.require_auth();

        env.storage()
            .persistent()
            .set(&DataKey::Uri(id), &URIValue { uri: uri.clone() });
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Uri(id), LIFETIME_THRESHOLD, BUMP_AMOUNT);

        env.events().publish(("set uri", "id: "), id);
        env.events().publish(("set uri", "uri: "), uri);

        Ok(())
    }

    // Returns the URI for the creator NFT `id`
    #[allow(dead_code)]
    pub fn uri(env: Env, id: u64) -> Result<URIValue, ContractError> {
        if let Some(uri) = env.storage().persistent().get(&DataKey::Uri(id)) {
            env.storage().persistent().extend_ttl(
                &DataKey::Uri(id),
                LIFETIME_THRESHOLD,
                BUMP_AMOUNT,
            );
            Ok(uri)
        } else {
            log!(&env, "Collections: Uri: No uri set for the given id");
            Err(ContractError::NoUriSet)
        }
    }

    pub fn show_admin(env: &Env) -> Result<Address, ContractError> {
        get_admin(env)
    }

    pub fn show_config(env: &Env) -> Result<Config, ContractError> {
        get_config(env)
    }

    fn is_authorized_minter(env: &Env, sender: &Address) -> Result<bool, ContractError> {
        let admin = get_admin(env)?;

        Ok(admin == sender.clone() || read_minter_approval(env, sender))
    }
}
