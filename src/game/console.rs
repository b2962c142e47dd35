//! The interactive loop: prompt, read, validate, resolve, repeat.
//!
//! ## I/O model
//!
//! Blocking and single-threaded. Input is whitespace-delimited tokens, one
//! wager per prompt; a line may carry several tokens and they are consumed
//! in order. All player-facing text goes to the supplied writer.
//!
//! The loop is generic over `BufRead`, `Write`, and `OutcomeSource`, so the
//! binary wires stdin/stdout/`FairRng` while tests use in-memory buffers
//! and scripted flips.
//!
//! ## Recovery
//!
//! Invalid stakes and non-numeric tokens print `Invalid stake.` and
//! re-prompt without touching the balance. End of input while awaiting a
//! wager ends the session like an explicit quit. Only real I/O errors
//! propagate.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use super::session::{Session, SessionEnd, TurnResult};
use super::wager::{self, WagerDecision};
use crate::core::OutcomeSource;

/// Pulls whitespace-delimited tokens off a line-based reader.
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}

fn print_intro(out: &mut impl Write, starting_balance: i64) -> io::Result<()> {
    writeln!(out, "Welcome!")?;
    writeln!(out, "In this game, you start with ${}.", starting_balance)?;
    writeln!(out, "Every turn, you can bet some of your money (a stake).")?;
    writeln!(
        out,
        "There is a 50% chance it is doubled, and a 50% chance you lose it."
    )?;
    writeln!(
        out,
        "You can quit at any time. The game also ends if you reach $0."
    )?;
    writeln!(out)
}

/// Run one session to a terminal state.
///
/// Prints the rules once, then loops: show the balance, prompt for a stake,
/// validate it, resolve a fair flip, update the balance. Returns when the
/// player quits (zero stake or closed input) or the balance is exhausted.
pub fn run<R, W, O>(
    session: &mut Session,
    input: R,
    mut output: W,
    mut outcomes: O,
) -> io::Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    O: OutcomeSource,
{
    print_intro(&mut output, session.starting_balance())?;

    let mut reader = TokenReader::new(input);

    loop {
        if session.is_exhausted() {
            writeln!(output, "You're out of money!")?;
            return Ok(SessionEnd::BalanceExhausted);
        }

        writeln!(output, "MONEY: ${}", session.balance())?;
        write!(output, "Enter the stake, or 0 to quit: $")?;
        output.flush()?;

        let Some(token) = reader.next_token()? else {
            // Input closed mid-prompt; finish the prompt line and quit.
            writeln!(output)?;
            writeln!(output, "You ended with ${}.", session.balance())?;
            return Ok(SessionEnd::UserQuit {
                balance: session.balance(),
            });
        };

        let stake: i64 = match token.parse() {
            Ok(stake) => stake,
            Err(_) => {
                writeln!(output, "Invalid stake.")?;
                continue;
            }
        };

        match wager::evaluate(stake, session.balance()) {
            Ok(WagerDecision::Quit) => {
                writeln!(output, "You ended with ${}.", session.balance())?;
                return Ok(SessionEnd::UserQuit {
                    balance: session.balance(),
                });
            }
            Ok(WagerDecision::Play(stake)) => match session.resolve(stake, &mut outcomes) {
                TurnResult::Won(amount) => writeln!(output, "You won! (+${})", amount)?,
                TurnResult::Lost(amount) => writeln!(output, "You lost! (-${})", amount)?,
            },
            Err(_) => {
                writeln!(output, "Invalid stake.")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_token_reader_splits_whitespace() {
        let mut reader = TokenReader::new(Cursor::new("5 7\n  0\n"));

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("5"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("7"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("0"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_token_reader_skips_blank_lines() {
        let mut reader = TokenReader::new(Cursor::new("\n\n42\n"));

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("42"));
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
