//! A deterministic oracle.

use vg_core::Stats;

use super::{Multiplier, Oracle, OracleOutcome, OracleTally};

/// Always answers with the same multiplier. Counts like the trivia oracle.
#[derive(Debug, Clone)]
pub struct FixedOracle {
    multiplier: Multiplier,
    tally: OracleTally,
}

impl FixedOracle {
    /// An oracle that always returns `multiplier`.
    pub fn new(multiplier: Multiplier) -> Self {
        Self {
            multiplier,
            tally: OracleTally::default(),
        }
    }
}

impl Oracle for FixedOracle {
    fn outcome(&mut self, _player: &Stats) -> OracleOutcome {
        self.tally.record(self.multiplier);
        OracleOutcome::silent(self.multiplier)
    }

    fn tally(&self) -> OracleTally {
        self.tally
    }
}
