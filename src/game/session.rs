//! Game session state: one mutable balance, resolved turn by turn.
//!
//! The session owns the balance outright. Each completed turn applies
//! exactly one of {add stake, subtract stake}; validation failures apply
//! neither. Nothing is persisted across sessions.

use crate::core::OutcomeSource;

/// How one resolved turn went, with the amount that changed hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnResult {
    /// The flip came up in the player's favor; the stake was added.
    Won(i64),
    /// The flip went against the player; the stake was subtracted.
    Lost(i64),
}

/// Terminal outcome of a session. No further transitions occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player quit with a zero stake (or closed the input stream).
    UserQuit {
        /// Balance remaining at the moment of quitting.
        balance: i64,
    },
    /// The balance reached zero; no playable wager remains.
    BalanceExhausted,
}

/// Configuration for a new session.
pub struct SessionConfig {
    starting_balance: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_balance: 10,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_balance(mut self, balance: i64) -> Self {
        assert!(balance > 0, "Starting balance must be positive");
        self.starting_balance = balance;
        self
    }

    /// Build the session with the configured starting balance.
    #[must_use]
    pub fn build(self) -> Session {
        Session {
            starting_balance: self.starting_balance,
            balance: self.starting_balance,
        }
    }
}

/// A live game session.
#[derive(Clone, Debug)]
pub struct Session {
    starting_balance: i64,
    balance: i64,
}

impl Session {
    /// Current balance.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// The balance the session started with.
    #[must_use]
    pub fn starting_balance(&self) -> i64 {
        self.starting_balance
    }

    /// True when no playable wager remains.
    ///
    /// With validation capping stakes at the balance, the balance bottoms
    /// out at exactly zero; the `<=` guards the invariant rather than an
    /// expected state.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.balance <= 0
    }

    /// Resolve one turn with an already-validated stake.
    ///
    /// Draws a single outcome and applies exactly one balance update.
    /// Panics if handed a stake that validation would have rejected.
    pub fn resolve(&mut self, stake: i64, outcomes: &mut impl OutcomeSource) -> TurnResult {
        assert!(
            stake >= 1 && stake <= self.balance,
            "stake must be validated before resolving"
        );

        if outcomes.flip() {
            self.balance += stake;
            TurnResult::Won(stake)
        } else {
            self.balance -= stake;
            TurnResult::Lost(stake)
        }
    }
}
