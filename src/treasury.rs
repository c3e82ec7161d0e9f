multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_INVALID_AMOUNT};

// ============================================================
// Treasury: EGLD under governance custody. Grows only through
// deposit, shrinks only through a finalized proposal.
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule: crate::events::EventsModule {
    /// Anyone may fund the treasury.
    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let funder = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.treasury_balance().update(|balance| *balance += &amount);

        self.deposit_event(&funder, &amount);
    }

    /// Reserved for finalization. Checked against the balance at call time,
    /// which may have dropped since the proposal was created.
    fn debit(&self, amount: &BigUint) {
        let balance = self.treasury_balance().get();
        require!(amount <= &balance, ERR_INSUFFICIENT_FUNDS);

        self.treasury_balance().set(balance - amount);
    }

    fn has_funds_for(&self, amount: &BigUint) -> bool {
        amount <= &self.treasury_balance().get()
    }

    #[view(treasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.treasury_balance().get()
    }

    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;
}
