#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod errors;
pub mod events;
pub mod registry;
pub mod stake_oracle_proxy;
pub mod treasury;
pub mod types;
pub mod voting;

use errors::{
    ERR_ALREADY_FINALIZED, ERR_INSUFFICIENT_FUNDS, ERR_INVALID_AMOUNT, ERR_INVALID_QUORUM,
    ERR_QUORUM_NOT_MET,
};
use types::{Proposal, StakeSource};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait StakeDao:
    access::AccessModule
    + events::EventsModule
    + registry::RegistryModule
    + treasury::TreasuryModule
    + voting::VotingModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, quorum: BigUint, stake_source: StakeSource<Self::Api>) {
        require!(quorum > 0u64, ERR_INVALID_QUORUM);

        self.set_stake_source(&stake_source);
        self.quorum().set(&quorum);
        self.treasury_balance().set(BigUint::zero());
        self.proposal_count().set(0u64);
    }

    /// Quorum and stake source are fixed for the lifetime of the contract.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Stakeholders request a payout. No funds move yet.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        description: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_investor(&caller);

        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        require!(self.has_funds_for(&amount), ERR_INSUFFICIENT_FUNDS);

        let proposal_id =
            self.insert_proposal(caller.clone(), description, amount.clone(), recipient.clone());

        self.propose_event(proposal_id, &amount, &recipient, &caller);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Adds the caller's current stake to the proposal, once.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);
        let weight = self.require_investor(&caller);
        require!(!proposal.finalized, ERR_ALREADY_FINALIZED);

        self.record_vote(proposal_id, &caller, &weight);
        proposal.votes += &weight;
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &caller, &weight);
    }

    // ========================================================
    // ENDPOINT: finalizeProposal
    // Pays the recipient once quorum is reached. A failed check
    // reverts the debit and the transfer together. A transfer to
    // a contract in another shard settles asynchronously: if that
    // contract is not payable the EGLD bounces back to this
    // contract after the proposal is already finalized, and stays
    // outside the treasury balance.
    // ========================================================

    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.finalized, ERR_ALREADY_FINALIZED);
        self.require_investor(&caller);
        require!(proposal.votes >= self.quorum().get(), ERR_QUORUM_NOT_MET);

        self.debit(&proposal.amount);
        proposal.finalized = true;
        self.proposals(proposal_id).set(&proposal);

        self.send().direct_egld(&proposal.recipient, &proposal.amount);
        self.finalize_event(proposal_id);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getOpenProposals)]
    fn get_open_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();

        for id in 1..=total {
            let proposal = self.proposals(id).get();
            if !proposal.finalized {
                result.push(proposal);
            }
        }
        result
    }

    /// Whether `finalizeProposal` would pass every proposal-side check right now.
    /// The caller's own eligibility is not considered.
    #[view(canFinalize)]
    fn can_finalize(&self, proposal_id: u64) -> bool {
        if !self.proposal_exists(proposal_id) {
            return false;
        }
        let proposal = self.proposals(proposal_id).get();
        !proposal.finalized
            && proposal.votes >= self.quorum().get()
            && self.has_funds_for(&proposal.amount)
    }

    #[view(quorum)]
    fn get_quorum(&self) -> BigUint {
        self.quorum().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<BigUint>;
}
