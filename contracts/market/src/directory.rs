use soroban_sdk::{contractclient, Address, Env};

/// Interface of the creator NFT registry the market consults. Existence
/// gates every buy; ownership gates royalty claims and is read at call
/// time, never cached.
#[contractclient(name = "DirectoryClient")]
pub trait CreatorDirectory {
    fn exists(env: Env, id: u64) -> bool;

    fn owner_of(env: Env, id: u64) -> Address;
}
