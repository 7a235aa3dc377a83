use soroban_sdk::{testutils::Address as _, Address, Bytes, Env, String};

use crate::{
    contract::{Collections, CollectionsClient},
    error::ContractError,
    storage::{Config, URIValue},
};

use super::setup::initialize_collection_contract;
use test_case::test_case;

#[test]
fn proper_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);

    let name = &String::from_str(&env, "Creator keys");
    let symbol = &String::from_str(&env, "CKEY");

    let collections_client =
        initialize_collection_contract(&env, Some(&admin), Some(name), Some(symbol));

    let actual_admin_addr = collections_client.show_admin();
    assert_eq!(admin, actual_admin_addr);

    let actual_config = collections_client.show_config();
    let expected_config = Config {
        name: name.clone(),
        symbol: symbol.clone(),
    };

    assert_eq!(actual_config, expected_config);
}

#[test]
fn initialization_should_fail_when_done_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);

    let name = &String::from_str(&env, "Creator keys");
    let symbol = &String::from_str(&env, "CKEY");

    let collections = CollectionsClient::new(&env, &env.register_contract(None, Collections {}));

    collections.initialize(&admin, name, symbol);

    assert_eq!(
        collections.try_initialize(&admin, name, symbol),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test_case(1; "lowest id")]
#[test_case(42; "arbitrary id")]
#[test_case(u64::MAX; "largest id")]
fn mint_records_existence_and_ownership(id: u64) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let creator = Address::generate(&env);

    let client = initialize_collection_contract(&env, Some(&admin), None, None);

    assert!(!client.exists(&id));

    client.mint(&admin, &creator, &id, &Bytes::from_slice(&env, b"ipfs://creator"));

    assert!(client.exists(&id));
    assert_eq!(client.owner_of(&id), creator);
}

#[test]
fn minting_the_same_id_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let creator = Address::generate(&env);

    let client = initialize_collection_contract(&env, Some(&admin), None, None);

    let uri = Bytes::from_slice(&env, b"ipfs://creator");
    client.mint(&admin, &creator, &1, &uri);

    assert_eq!(
        client.try_mint(&admin, &creator, &1, &uri),
        Err(Ok(ContractError::AlreadyMinted))
    );
}

#[test]
fn mint_rejects_unapproved_sender() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let outsider = Address::generate(&env);

    let client = initialize_collection_contract(&env, Some(&admin), None, None);

    assert_eq!(
        client.try_mint(&outsider, &outsider, &1, &Bytes::from_slice(&env, b"x")),
        Err(Ok(ContractError::Unauthorized))
    );
}

#[test]
fn approved_minter_can_mint() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let creator = Address::generate(&env);

    let client = initialize_collection_contract(&env, Some(&admin), None, None);

    client.set_minter(&minter, &true);
    assert!(client.is_minter(&minter));

    client.mint(&minter, &creator, &7, &Bytes::from_slice(&env, b"ipfs://7"));
    assert_eq!(client.owner_of(&7), creator);

    // revoking takes the permission away again
    client.set_minter(&minter, &false);
    assert_eq!(
        client.try_mint(&minter, &creator, &8, &Bytes::from_slice(&env, b"ipfs://8")),
        Err(Ok(ContractError::Unauthorized))
    );
}

#[test]
fn admin_cannot_approve_self_as_minter() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);

    let client = initialize_collection_contract(&env, Some(&admin), None, None);

    assert_eq!(
        client.try_set_minter(&admin, &true),
        Err(Ok(ContractError::CannotApproveSelf))
    );
}

#[test]
fn transfer_moves_ownership() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let creator = Address::generate(&env);
    let new_owner = Address::generate(&env);

    let client = initialize_collection_contract(&env, Some(&admin), None, None);

    client.mint(&admin, &creator, &1, &Bytes::from_slice(&env, b"ipfs://1"));

    client.transfer(&creator, &new_owner, &1);
    assert_eq!(client.owner_of(&1), new_owner);

    // the previous owner no longer controls the NFT
    assert_eq!(
        client.try_transfer(&creator, &new_owner, &1),
        Err(Ok(ContractError::Unauthorized))
    );
}

#[test]
fn owner_of_fails_for_unminted_id() {
    let env = Env::default();
    env.mock_all_auths();

    let client = initialize_collection_contract(&env, None, None, None);

    assert_eq!(client.try_owner_of(&1), Err(Ok(ContractError::NotMinted)));
}

#[test]
fn uri_can_be_read_and_replaced() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let creator = Address::generate(&env);

    let client = initialize_collection_contract(&env, Some(&admin), None, None);

    assert_eq!(client.try_uri(&1), Err(Ok(ContractError::NoUriSet)));

    client.mint(&admin, &creator, &1, &Bytes::from_slice(&env, b"ipfs://old"));
    assert_eq!(
        client.uri(&1),
        URIValue {
            uri: Bytes::from_slice(&env, b"ipfs://old")
        }
    );

    client.set_uri(&admin, &1, &Bytes::from_slice(&env, b"ipfs://new"));
    assert_eq!(
        client.uri(&1),
        URIValue {
            uri: Bytes::from_slice(&env, b"ipfs://new")
        }
    );
}
