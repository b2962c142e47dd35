//! Wager validation.
//!
//! A raw integer from the player is one of three things:
//!
//! - `0`: an intentional quit signal, not a playable bet
//! - a valid stake: positive and no more than the current balance
//! - invalid: negative, or exceeding the balance (rejected with a reason)
//!
//! The two rejection conditions are independent; a stake is invalid when
//! *either* holds.

use thiserror::Error;

/// What a syntactically valid wager input means for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WagerDecision {
    /// Zero stake: end the session cleanly.
    Quit,
    /// A playable stake, `1 <= stake <= balance`.
    Play(i64),
}

/// Why a wager was rejected. Recovered by re-prompting, never fatal.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum WagerError {
    /// The stake was below zero.
    #[error("stake cannot be negative")]
    Negative,
    /// The stake was more than the player has.
    #[error("stake of ${stake} exceeds balance of ${balance}")]
    ExceedsBalance {
        /// The offered stake.
        stake: i64,
        /// The balance it was checked against.
        balance: i64,
    },
}

/// Classify a raw stake against the current balance.
pub fn evaluate(stake: i64, balance: i64) -> Result<WagerDecision, WagerError> {
    if stake == 0 {
        return Ok(WagerDecision::Quit);
    }
    if stake < 0 {
        return Err(WagerError::Negative);
    }
    if stake > balance {
        return Err(WagerError::ExceedsBalance { stake, balance });
    }
    Ok(WagerDecision::Play(stake))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_quit() {
        assert_eq!(evaluate(0, 10), Ok(WagerDecision::Quit));
        // Quit stays available even with nothing left to bet
        assert_eq!(evaluate(0, 0), Ok(WagerDecision::Quit));
    }

    #[test]
    fn test_valid_range() {
        assert_eq!(evaluate(1, 10), Ok(WagerDecision::Play(1)));
        assert_eq!(evaluate(5, 10), Ok(WagerDecision::Play(5)));
        // Betting the whole balance is allowed
        assert_eq!(evaluate(10, 10), Ok(WagerDecision::Play(10)));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(evaluate(-3, 10), Err(WagerError::Negative));
        assert_eq!(evaluate(-1, 0), Err(WagerError::Negative));
    }

    #[test]
    fn test_over_balance_rejected() {
        // Either condition alone must reject; no input can be both negative
        // and over-balance, so the checks cannot be conjoined.
        assert_eq!(
            evaluate(20, 10),
            Err(WagerError::ExceedsBalance {
                stake: 20,
                balance: 10
            })
        );
        assert_eq!(
            evaluate(1, 0),
            Err(WagerError::ExceedsBalance {
                stake: 1,
                balance: 0
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WagerError::Negative.to_string(),
            "stake cannot be negative"
        );
        assert_eq!(
            WagerError::ExceedsBalance {
                stake: 20,
                balance: 10
            }
            .to_string(),
            "stake of $20 exceeds balance of $10"
        );
    }
}
