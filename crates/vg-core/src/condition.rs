//! Condition evaluation over the story progress vector.

use crate::story::{Fact, Story};

/// A condition that can be evaluated against the story.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Condition {
    /// A named fact holds.
    Fact(Fact),
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    And(Vec<Condition>),
    /// Logical OR.
    Or(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Shorthand for `Condition::Not(Box::new(..))`.
    pub fn not(inner: Condition) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Evaluate the condition against the current story.
    pub fn evaluate(&self, story: &Story) -> bool {
        match self {
            Condition::Fact(fact) => story.holds(*fact),
            Condition::Not(inner) => !inner.evaluate(story),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(story)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.evaluate(story)),
            Condition::Always => true,
        }
    }
}

impl From<Fact> for Condition {
    fn from(fact: Fact) -> Self {
        Self::Fact(fact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::{Cover, PrisonPlan};

    #[test]
    fn fact_condition() {
        let mut story = Story::new();
        let cond = Condition::Fact(Fact::ChoseReveal);
        assert!(!cond.evaluate(&story));
        story.choose_cover(Cover::Reveal);
        assert!(cond.evaluate(&story));
    }

    #[test]
    fn not_condition() {
        let story = Story::new();
        assert!(Condition::not(Fact::MetRalen.into()).evaluate(&story));
    }

    #[test]
    fn and_or_conditions() {
        let mut story = Story::new();
        story.choose_prison_plan(PrisonPlan::Robbery);

        let both = Condition::And(vec![
            Fact::CiviliansRobbed.into(),
            Fact::PrisonLiberated.into(),
        ]);
        assert!(both.evaluate(&story));

        let either = Condition::Or(vec![Fact::GeneralCorrupted.into(), Fact::MetRalen.into()]);
        assert!(!either.evaluate(&story));
    }

    #[test]
    fn always_is_default() {
        assert!(Condition::default().evaluate(&Story::new()));
    }
}
