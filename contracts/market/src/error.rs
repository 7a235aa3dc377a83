use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    ConfigNotFound = 1,
    Unauthorized = 2,
    NftNotFound = 3,
    InvalidAmount = 4,
    InsufficientPayment = 5,
    InsufficientShares = 6,
    NothingToClaim = 7,
}
