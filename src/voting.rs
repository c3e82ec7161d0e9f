multiversx_sc::imports!();

use crate::errors::ERR_ALREADY_VOTED;
use crate::types::VoteRecord;

// ============================================================
// Voting ledger: who voted on which proposal, and with how much
// weight. Entries are never removed.
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule {
    /// Adds `voter` to the proposal's voter set with the weight sampled now.
    /// Fails if the voter is already in the set.
    fn record_vote(&self, proposal_id: u64, voter: &ManagedAddress, weight: &BigUint) {
        require!(self.voters(proposal_id).insert(voter.clone()), ERR_ALREADY_VOTED);
        self.vote_weight(proposal_id, voter).set(weight);
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(voter)
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id).iter() {
            let weight = self.vote_weight(proposal_id, &voter).get();
            result.push(VoteRecord { voter, weight });
        }
        result
    }

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("voteWeight")]
    fn vote_weight(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
