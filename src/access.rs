multiversx_sc::imports!();

use crate::errors::{
    ERR_EXTERNAL_STAKE, ERR_INVALID_STAKE_SOURCE, ERR_INVALID_UNSTAKE_AMOUNT, ERR_NOT_INVESTOR,
    ERR_WRONG_STAKE_TOKEN,
};
use crate::stake_oracle_proxy;
use crate::types::StakeSource;

// ============================================================
// Access gate: only participants holding stake may propose,
// vote or finalize.
// ============================================================

#[multiversx_sc::module]
pub trait AccessModule: crate::events::EventsModule {
    fn set_stake_source(&self, stake_source: &StakeSource<Self::Api>) {
        match stake_source {
            StakeSource::LockedToken(token_id) => {
                require!(token_id.is_valid_esdt_identifier(), ERR_INVALID_STAKE_SOURCE);
            }
            StakeSource::Oracle(address) => {
                require!(
                    self.blockchain().is_smart_contract(address),
                    ERR_INVALID_STAKE_SOURCE
                );
            }
        }
        self.stake_source().set(stake_source);
    }

    /// Current stake weight of `participant`, read from the configured source.
    fn weight_of(&self, participant: &ManagedAddress) -> BigUint {
        match self.stake_source().get() {
            StakeSource::LockedToken(_) => self.locked_stake(participant).get(),
            StakeSource::Oracle(oracle_address) => self
                .tx()
                .to(&oracle_address)
                .typed(stake_oracle_proxy::StakeOracleProxy)
                .weight_of(participant.clone())
                .returns(ReturnsResult)
                .sync_call_readonly(),
        }
    }

    fn is_eligible_participant(&self, participant: &ManagedAddress) -> bool {
        self.weight_of(participant) > 0u64
    }

    /// Fails with the not-investor error unless `participant` holds stake.
    /// Returns the weight so callers sample it only once.
    fn require_investor(&self, participant: &ManagedAddress) -> BigUint {
        let weight = self.weight_of(participant);
        require!(weight > 0u64, ERR_NOT_INVESTOR);
        weight
    }

    // ========================================================
    // ENDPOINT: stake / unstake
    // Governance tokens locked here are the caller's weight.
    // Votes already cast keep the weight they were cast with.
    // ========================================================

    #[endpoint(stake)]
    #[payable("*")]
    fn stake(&self) {
        let token_id = self.require_locked_token();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == token_id && payment.token_nonce == 0,
            ERR_WRONG_STAKE_TOKEN
        );
        require!(payment.amount > 0u64, ERR_WRONG_STAKE_TOKEN);

        self.locked_stake(&caller)
            .update(|locked| *locked += &payment.amount);

        self.stake_event(&caller, &payment.amount);
    }

    #[endpoint(unstake)]
    fn unstake(&self, amount: BigUint) {
        let token_id = self.require_locked_token();
        let caller = self.blockchain().get_caller();
        let locked = self.locked_stake(&caller).get();
        require!(
            amount > 0u64 && amount <= locked,
            ERR_INVALID_UNSTAKE_AMOUNT
        );

        self.locked_stake(&caller).set(&locked - &amount);

        self.send().direct_esdt(&caller, &token_id, 0, &amount);
        self.unstake_event(&caller, &amount);
    }

    fn require_locked_token(&self) -> TokenIdentifier {
        match self.stake_source().get() {
            StakeSource::LockedToken(token_id) => token_id,
            StakeSource::Oracle(_) => sc_panic!(ERR_EXTERNAL_STAKE),
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isEligible)]
    fn is_eligible(&self, participant: ManagedAddress) -> bool {
        self.is_eligible_participant(&participant)
    }

    #[view(getVotingPower)]
    fn get_voting_power(&self, participant: ManagedAddress) -> BigUint {
        self.weight_of(&participant)
    }

    #[view(getStakeSource)]
    fn get_stake_source(&self) -> StakeSource<Self::Api> {
        self.stake_source().get()
    }

    #[storage_mapper("stakeSource")]
    fn stake_source(&self) -> SingleValueMapper<StakeSource<Self::Api>>;

    #[storage_mapper("lockedStake")]
    fn locked_stake(&self, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
