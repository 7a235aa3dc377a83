use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub enum ClaimKind {
    Royalty,
    Dividend,
}

/// Emitted once per buy or sell; the fee fields are zero on sells since
/// fees are charged on the buy side only.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct TradeEvent {
    pub nft_id: u64,
    pub trader: Address,
    pub side: TradeSide,
    pub amount: u64,
    pub base_price: i128,
    pub protocol_fee: i128,
    pub royalty_fee: i128,
    pub dividend_fee: i128,
    pub total_paid: i128,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct ClaimEvent {
    pub nft_id: u64,
    pub claimant: Address,
    pub kind: ClaimKind,
    pub amount: i128,
}

pub fn emit_trade(env: &Env, event: TradeEvent) {
    env.events().publish(("market", "trade"), event);
}

pub fn emit_claim(env: &Env, event: ClaimEvent) {
    env.events().publish(("market", "claim"), event);
}
