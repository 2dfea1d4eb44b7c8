//! Architecture advisor: questionnaire answers in, ranked architecture
//! recommendation out.
//!
//! Scoring is a fixed sequence of independent rules over [`Answers`]; each fired
//! rule adds weights to the options it favors and records one [`Explanation`].
//! The engine holds no state, so [`recommend`] can be called from any thread.

pub mod answers;
pub mod engine;
pub mod glossary;
pub mod options;
pub mod questionnaire;
pub mod router;
pub mod rules;
pub mod store;

#[cfg(test)]
mod tests;

pub use answers::{
    clamp_integrations, Answers, BackgroundWork, Budget, Consistency, LatencyTarget, OpsMaturity,
    ParseAnswerError, Regulation, TeamSize, Throughput,
};
pub use engine::{confidence_from_margin, recommend, Recommendation, ScoreEntry, TippingPoint};
pub use glossary::GlossaryEntry;
pub use options::ArchitectureOption;
pub use questionnaire::{questions, ChoiceOption, InputKind, Question};
pub use router::advisor_router;
pub use rules::{Explanation, Impact, RuleOutcome};
pub use store::{AnswerStore, InMemoryStore, JsonFileStore, KeyValueStore, StoreError, ANSWERS_KEY};
