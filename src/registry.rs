multiversx_sc::imports!();

use crate::errors::ERR_NOT_FOUND;
use crate::types::Proposal;

#[multiversx_sc::module]
pub trait RegistryModule {
    /// Stores a fresh open proposal under the next id and returns that id.
    fn insert_proposal(
        &self,
        creator: ManagedAddress,
        description: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        let proposal_id = self.proposal_count().get() + 1u64;

        let proposal = Proposal {
            id: proposal_id,
            description,
            amount,
            recipient,
            votes: BigUint::zero(),
            finalized: false,
            creator,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        proposal_id
    }

    fn proposal_exists(&self, proposal_id: u64) -> bool {
        proposal_id > 0 && proposal_id <= self.proposal_count().get()
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(self.proposal_exists(proposal_id), ERR_NOT_FOUND);
        self.proposals(proposal_id).get()
    }

    #[view(proposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;
}
