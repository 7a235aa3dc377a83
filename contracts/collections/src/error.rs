use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    AdminNotSet = 1,
    ConfigNotFound = 2,
    Unauthorized = 3,
    CannotApproveSelf = 4,
    AlreadyMinted = 5,
    NotMinted = 6,
    NoUriSet = 7,
}
