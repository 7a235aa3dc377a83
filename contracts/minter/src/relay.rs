use soroban_sdk::{contractclient, Address, Env, String};

/// Outbound interface of the oracle relay. The relay gates minting on
/// off-chain data; it answers a request with an id and later fulfils it
/// through its own entry points, which is where the actual NFT mint
/// happens. This contract only ever submits requests.
#[contractclient(name = "RelayClient")]
pub trait OracleRelay {
    fn request_mint(
        env: Env,
        requester: Address,
        name: String,
        uri: String,
        collection: String,
    ) -> u64;
}
