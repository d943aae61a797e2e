//! The damage oracle.
//!
//! Combat asks an oracle for a multiplier before every player strike. The
//! production oracle poses a trivia question; tests substitute a fixed one.

mod fixed;
mod trivia;

pub use fixed::FixedOracle;
pub use trivia::{AnswerSource, Question, TriviaOracle, default_questions};

use std::fmt;

use vg_core::Stats;

/// The two possible damage multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    /// ×0.5, after a wrong answer.
    Weak,
    /// ×1.5, after a right answer.
    Strong,
}

impl Multiplier {
    /// The multiplier as a factor.
    pub fn factor(&self) -> f64 {
        match self {
            Self::Weak => 0.5,
            Self::Strong => 1.5,
        }
    }

    /// Scale a base damage, rounding halves up, with a floor of 1.
    ///
    /// `11 → 17` when strong and `11 → 6` when weak.
    pub fn apply(&self, base: u32) -> u32 {
        let scaled = match self {
            Self::Weak => base.div_ceil(2),
            Self::Strong => base.saturating_mul(3).saturating_add(1) / 2,
        };
        scaled.max(1)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{}", self.factor())
    }
}

/// What the oracle decided for one strike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleOutcome {
    /// The multiplier to apply.
    pub multiplier: Multiplier,
    /// Lines to show the player (question, verdict).
    pub transcript: Vec<String>,
}

impl OracleOutcome {
    /// An outcome with no text.
    pub fn silent(multiplier: Multiplier) -> Self {
        Self {
            multiplier,
            transcript: Vec::new(),
        }
    }
}

/// Cumulative right/wrong counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleTally {
    /// Strong outcomes so far.
    pub correct: u32,
    /// Weak outcomes so far.
    pub incorrect: u32,
}

impl OracleTally {
    /// Count one outcome.
    pub fn record(&mut self, multiplier: Multiplier) {
        match multiplier {
            Multiplier::Strong => self.correct += 1,
            Multiplier::Weak => self.incorrect += 1,
        }
    }

    /// Total outcomes.
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Whole-percent success rate, truncated.
    pub fn success_rate(&self) -> Option<u32> {
        let total = self.total();
        (total > 0).then(|| self.correct * 100 / total)
    }

    /// Status text for the `ia` command.
    pub fn summary(&self) -> String {
        match self.success_rate() {
            None => "Tactical AI: no questions answered yet.".to_string(),
            Some(rate) => format!(
                "Tactical AI: {} correct, {} wrong ({rate}% success).",
                self.correct, self.incorrect
            ),
        }
    }
}

/// A source of combat multipliers.
pub trait Oracle {
    /// Decide the multiplier for the next player strike.
    fn outcome(&mut self, player: &Stats) -> OracleOutcome;

    /// Counters so far.
    fn tally(&self) -> OracleTally;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rounding_boundaries() {
        assert_eq!(Multiplier::Strong.apply(11), 17);
        assert_eq!(Multiplier::Weak.apply(11), 6);
        assert_eq!(Multiplier::Strong.apply(1), 2);
        assert_eq!(Multiplier::Weak.apply(1), 1);
        assert_eq!(Multiplier::Strong.apply(10), 15);
        assert_eq!(Multiplier::Weak.apply(10), 5);
    }

    #[test]
    fn tally_summary() {
        let mut tally = OracleTally::default();
        assert_eq!(tally.summary(), "Tactical AI: no questions answered yet.");
        tally.record(Multiplier::Strong);
        tally.record(Multiplier::Strong);
        tally.record(Multiplier::Weak);
        assert_eq!(tally.success_rate(), Some(66));
        assert_eq!(
            tally.summary(),
            "Tactical AI: 2 correct, 1 wrong (66% success)."
        );
    }

    proptest! {
        #[test]
        fn apply_rounds_half_up(base in 1u32..100_000) {
            for m in [Multiplier::Weak, Multiplier::Strong] {
                let exact = f64::from(base) * m.factor();
                let expected = ((exact + 0.5).floor() as u32).max(1);
                prop_assert_eq!(m.apply(base), expected);
            }
        }
    }
}
