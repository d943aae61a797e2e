//! The trivia oracle: a right answer powers up the strike.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vg_core::Stats;

use super::{Multiplier, Oracle, OracleOutcome, OracleTally};

/// A question with its accepted answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// What is asked.
    pub prompt: String,
    /// Accepted answers, compared case-insensitively.
    pub answers: Vec<String>,
}

impl Question {
    /// Build a question.
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        answers: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `reply` is an accepted answer.
    pub fn accepts(&self, reply: &str) -> bool {
        let reply = reply.trim().to_lowercase();
        self.answers.iter().any(|a| a.to_lowercase() == reply)
    }
}

/// The built-in question bank.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the largest volcano in the solar system?",
            ["Olympus Mons"],
        ),
        Question::new(
            "Who was the first person to walk on the Moon?",
            ["Neil Armstrong", "Armstrong"],
        ),
        Question::new("Who wrote Dune?", ["Frank Herbert", "Herbert"]),
        Question::new(
            "What is the name of our galaxy?",
            ["Milky Way", "The Milky Way", "Voie lactée"],
        ),
    ]
}

/// Where answers come from. Returns `None` when no answer can be read.
pub type AnswerSource = Box<dyn FnMut(&str) -> Option<String>>;

/// Poses a random question before each strike.
pub struct TriviaOracle {
    questions: Vec<Question>,
    answer: AnswerSource,
    rng: StdRng,
    tally: OracleTally,
}

impl TriviaOracle {
    /// A trivia oracle over the built-in questions.
    pub fn new(seed: u64, answer: AnswerSource) -> Self {
        Self::with_questions(default_questions(), seed, answer)
    }

    /// A trivia oracle over custom questions.
    pub fn with_questions(questions: Vec<Question>, seed: u64, answer: AnswerSource) -> Self {
        Self {
            questions,
            answer,
            rng: StdRng::seed_from_u64(seed),
            tally: OracleTally::default(),
        }
    }
}

impl std::fmt::Debug for TriviaOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriviaOracle")
            .field("questions", &self.questions.len())
            .field("tally", &self.tally)
            .finish_non_exhaustive()
    }
}

impl Oracle for TriviaOracle {
    fn outcome(&mut self, _player: &Stats) -> OracleOutcome {
        if self.questions.is_empty() {
            self.tally.record(Multiplier::Weak);
            return OracleOutcome::silent(Multiplier::Weak);
        }

        let question = &self.questions[self.rng.random_range(0..self.questions.len())];
        let mut transcript = vec![format!("Tactical AI asks: {}", question.prompt)];
        let reply = (self.answer)(&question.prompt);

        let multiplier = match reply {
            Some(ref r) if question.accepts(r) => {
                transcript.push("Correct! Strike amplified (×1.5).".to_string());
                Multiplier::Strong
            }
            _ => {
                let expected = question.answers.first().map(String::as_str).unwrap_or("?");
                transcript.push(format!("Wrong. It was {expected}. Strike weakened (×0.5)."));
                Multiplier::Weak
            }
        };

        tracing::debug!(correct = multiplier == Multiplier::Strong, "trivia answered");
        self.tally.record(multiplier);
        OracleOutcome {
            multiplier,
            transcript,
        }
    }

    fn tally(&self) -> OracleTally {
        self.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(answer: &'static str) -> TriviaOracle {
        TriviaOracle::with_questions(
            vec![Question::new("Who wrote Dune?", ["Frank Herbert"])],
            7,
            Box::new(move |_| Some(answer.to_string())),
        )
    }

    #[test]
    fn right_answer_is_strong() {
        let mut oracle = single("  frank HERBERT ");
        let out = oracle.outcome(&Stats::default());
        assert_eq!(out.multiplier, Multiplier::Strong);
        assert_eq!(out.transcript[0], "Tactical AI asks: Who wrote Dune?");
        assert_eq!(oracle.tally().correct, 1);
    }

    #[test]
    fn wrong_answer_is_weak() {
        let mut oracle = single("Asimov");
        let out = oracle.outcome(&Stats::default());
        assert_eq!(out.multiplier, Multiplier::Weak);
        assert!(out.transcript[1].contains("Frank Herbert"));
        assert_eq!(oracle.tally().incorrect, 1);
    }

    #[test]
    fn closed_input_counts_as_wrong() {
        let mut oracle = TriviaOracle::new(1, Box::new(|_| None));
        assert_eq!(
            oracle.outcome(&Stats::default()).multiplier,
            Multiplier::Weak
        );
    }

    #[test]
    fn bank_answers_are_accepted() {
        for q in default_questions() {
            assert!(q.accepts(&q.answers[0].to_uppercase()));
        }
    }
}
