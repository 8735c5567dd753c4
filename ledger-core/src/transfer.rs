//! Taxed transfers.

use crate::{
    account::AccountId,
    error::{LedgerError, LedgerResult},
    events::LedgerEvent,
    ledger::Ledger,
    oracle::PriceOracle,
};

impl<O: PriceOracle> Ledger<O> {
    /// Move `amount` from `from` to `to`, splitting `tax` off to the
    /// treasury.
    ///
    /// Supply-neutral by construction: the sender loses `amount`, the
    /// recipient gains `amount − tax` and the treasury gains `tax`, so the
    /// three deltas sum to zero. The transfer is also recorded in the
    /// velocity window and announced to observers; velocity has no feedback
    /// into minting.
    pub fn transfer_with_tax(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: i128,
        tax: i128,
    ) -> LedgerResult<()> {
        let (treasury, _) = self.system_accounts()?;
        if from == to {
            return Err(LedgerError::SelfTransfer);
        }
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        if tax < 0 {
            return Err(LedgerError::NegativeTax(tax));
        }
        if tax > amount {
            return Err(LedgerError::TaxExceedsAmount { tax, amount });
        }
        let available = self.balances.balance(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                available,
                requested: amount,
            });
        }

        // All preconditions hold. Conservation makes the credits
        // infallible: every balance stays bounded by total_supply, so the
        // checked adds below cannot overflow and no partial split can be
        // committed. `to` may itself be the treasury.
        self.balances.debit(from, amount)?;
        self.balances.credit(to, amount - tax)?;
        self.balances.credit(treasury, tax)?;

        self.velocity.record(self.height, amount);
        self.events.publish(LedgerEvent::TransferVelocity { amount });
        tracing::debug!(%from, %to, amount, tax, "taxed transfer");
        Ok(())
    }
}
