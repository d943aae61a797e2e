//! Combat mechanics for Voidgate.
//!
//! Provides the damage oracle (a substitutable source of the 0.5 / 1.5
//! multiplier), the combat resolver with its shared defeat routine, and the
//! multi-wave ambush orchestration built on the single-strike primitive.

pub mod combat;
pub mod error;
pub mod oracle;

pub use combat::{AmbushReport, Combat, DefeatCause, Phase, Strike, StrikeOutcome, run_ambush};
pub use error::{MechError, MechResult};
pub use oracle::{
    FixedOracle, Multiplier, Oracle, OracleOutcome, OracleTally, Question, TriviaOracle,
};
