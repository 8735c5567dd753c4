//! Error taxonomy for ledger operations.

use displaydoc::Display;

use crate::account::AccountId;

/// Type alias for ledger operation results.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Broad failure classes.
///
/// Callers that only need to pick a corrective action (re-prompt for a
/// field, top up an account, abort) can branch on the class instead of the
/// exact variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Malformed or out-of-range arguments.
    Precondition,
    /// Debiting or burning more than is available.
    InsufficientResource,
    /// A value or supply computation left the 128-bit range.
    ArithmeticOverflow,
    /// Operation invoked in the wrong lifecycle phase.
    State,
}

/// Reasons why a ledger operation may fail.
///
/// Every error is terminal for the invoking operation: no partial state is
/// committed and no internal retry occurs.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum LedgerError {
    /// Ledger has not been initialized
    NotInitialized,

    /// Ledger is already initialized
    AlreadyInitialized,

    /// Treasury and distribution pool must be distinct accounts
    TreasuryPoolCollision,

    /// Product category must be non-empty
    EmptyProductCategory,

    /// Quantity must be positive, got {0}
    NonPositiveQuantity(i128),

    /// Unit price must be positive, got {0}
    NonPositiveUnitPrice(i128),

    /// No price quote for product category `{0}`
    UnpricedCategory(String),

    /// Expiration height {expiration} is not beyond the current height {current}
    ExpirationNotInFuture { expiration: u64, current: u64 },

    /// Transfer amount must be positive, got {0}
    NonPositiveAmount(i128),

    /// Tax must be non-negative, got {0}
    NegativeTax(i128),

    /// Tax {tax} exceeds transfer amount {amount}
    TaxExceedsAmount { tax: i128, amount: i128 },

    /// Sender and recipient must be distinct accounts
    SelfTransfer,

    /// Burn value must be positive, got {0}
    NonPositiveBurnValue(i128),

    /// Insufficient balance on account {account}: have {available}, need {requested}
    InsufficientBalance {
        account: AccountId,
        available: i128,
        requested: i128,
    },

    /// Burn of {requested} exceeds registered collateral {registered}
    InsufficientCollateral { registered: i128, requested: i128 },

    /// Burn of {requested} exceeds rotted collateral {rotted} at height {height}
    InsufficientRottedCollateral {
        rotted: i128,
        requested: i128,
        height: u64,
    },

    /// Arithmetic overflow while computing {0}
    Overflow(&'static str),

    /// Height may not decrease: current {current}, requested {requested}
    HeightRegression { current: u64, requested: u64 },
}

impl LedgerError {
    /// The broad class this error belongs to.
    pub fn class(&self) -> ErrorClass {
        match self {
            LedgerError::NotInitialized | LedgerError::AlreadyInitialized => ErrorClass::State,

            LedgerError::TreasuryPoolCollision
            | LedgerError::EmptyProductCategory
            | LedgerError::NonPositiveQuantity(_)
            | LedgerError::NonPositiveUnitPrice(_)
            | LedgerError::UnpricedCategory(_)
            | LedgerError::ExpirationNotInFuture { .. }
            | LedgerError::NonPositiveAmount(_)
            | LedgerError::NegativeTax(_)
            | LedgerError::TaxExceedsAmount { .. }
            | LedgerError::SelfTransfer
            | LedgerError::NonPositiveBurnValue(_)
            | LedgerError::HeightRegression { .. } => ErrorClass::Precondition,

            LedgerError::InsufficientBalance { .. }
            | LedgerError::InsufficientCollateral { .. }
            | LedgerError::InsufficientRottedCollateral { .. } => {
                ErrorClass::InsufficientResource
            }

            LedgerError::Overflow(_) => ErrorClass::ArithmeticOverflow,
        }
    }
}

impl std::error::Error for LedgerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert_eq!(LedgerError::NotInitialized.class(), ErrorClass::State);
        assert_eq!(
            LedgerError::NonPositiveQuantity(0).class(),
            ErrorClass::Precondition
        );
        assert_eq!(
            LedgerError::InsufficientBalance {
                account: AccountId::new(7),
                available: 10,
                requested: 20,
            }
            .class(),
            ErrorClass::InsufficientResource
        );
        assert_eq!(
            LedgerError::Overflow("batch value").class(),
            ErrorClass::ArithmeticOverflow
        );
    }

    #[test]
    fn test_display_carries_payload() {
        let err = LedgerError::TaxExceedsAmount { tax: 11, amount: 10 };
        assert_eq!(err.to_string(), "Tax 11 exceeds transfer amount 10");
    }
}
