multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("propose")]
    fn propose_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] amount: &BigUint,
        #[indexed] recipient: &ManagedAddress,
        creator: &ManagedAddress,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("finalize")]
    fn finalize_event(&self, #[indexed] proposal_id: u64);

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    #[event("stake")]
    fn stake_event(&self, #[indexed] participant: &ManagedAddress, amount: &BigUint);

    #[event("unstake")]
    fn unstake_event(&self, #[indexed] participant: &ManagedAddress, amount: &BigUint);
}
