multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — a disbursement request from the treasury
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub description: ManagedBuffer<M>,
    /// Requested EGLD amount, paid out on finalization
    pub amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    /// Sum of the stake weights of every voter, sampled when each vote was cast
    pub votes: BigUint<M>,
    /// One-way flag. Set once funds have been sent to the recipient.
    pub finalized: bool,
    pub creator: ManagedAddress<M>,
}

// ============================================================
// Vote Record — one voter and the weight counted for them
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub weight: BigUint<M>,
}

// ============================================================
// Stake Source — where voting weight is read from
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum StakeSource<M: ManagedTypeApi> {
    /// Fungible ESDT governance token locked in this contract through `stake`.
    LockedToken(TokenIdentifier<M>),
    /// External contract exposing `weightOf(address) -> BigUint`.
    Oracle(ManagedAddress<M>),
}
