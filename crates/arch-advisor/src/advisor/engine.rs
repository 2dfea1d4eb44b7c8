use serde::Serialize;
use tracing::debug;

use super::answers::Answers;
use super::options::ArchitectureOption;
use super::rules::{score_answers, Explanation, INDEPENDENT_DEPLOYS};

pub const MIN_CONFIDENCE: f64 = 0.3;
pub const MAX_CONFIDENCE: f64 = 0.95;

const MAX_REASONS: usize = 4;
const RUNNER_UP_REASONS: usize = 3;

const ASYNC_ADDONS: [&str; 3] = [
    "Async work queue",
    "Idempotent job handlers",
    "Dead-letter + retries",
];
const FALLBACK_ADDON: &str = "Basic background worker for emails/exports";

const TIPPING_POINTS: [TippingPoint; 2] = [
    TippingPoint {
        condition: "RPS > 1,000 sustained or heavy spikes + tighter p95 < 150ms",
        new_rec: "Modular monolith + explicit async boundaries",
        why: "Keeps latency predictable while isolating bursty workloads.",
    },
    TippingPoint {
        condition: "3+ teams demand independent deploys and ownership boundaries",
        new_rec: "Modular monolith (short term) → Microservices (long term)",
        why: "Avoids a big-bang split; evolve along module seams.",
    },
];

/// Ranked position of one architecture option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub option: ArchitectureOption,
    pub score: i16,
    pub reasons: Vec<String>,
}

/// Threshold under which the recommendation would change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TippingPoint {
    pub condition: &'static str,
    pub new_rec: &'static str,
    pub why: &'static str,
}

/// Complete advisor output for one answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub primary: ArchitectureOption,
    pub addons: Vec<&'static str>,
    pub rationale: Vec<String>,
    pub starter_stack: Vec<&'static str>,
    pub confidence: f64,
    pub scores: Vec<ScoreEntry>,
    pub explanations: Vec<Explanation>,
    pub tradeoffs: Vec<&'static str>,
    pub tipping_points: Vec<TippingPoint>,
}

impl Recommendation {
    pub fn runner_up(&self) -> &ScoreEntry {
        &self.scores[1]
    }

    /// Leading reasons the primary option beat the runner-up.
    pub fn why_over_runner_up(&self) -> &[String] {
        let reasons = &self.scores[0].reasons;
        &reasons[..reasons.len().min(RUNNER_UP_REASONS)]
    }

    /// Confidence expressed as a whole percentage.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }
}

/// Maps an answer set to a ranked architecture recommendation.
///
/// Pure and total: the same answers always produce the same recommendation.
pub fn recommend(answers: &Answers) -> Recommendation {
    let (board, explanations) = score_answers(answers);

    let mut scores: Vec<ScoreEntry> = ArchitectureOption::ALL
        .iter()
        .map(|&option| ScoreEntry {
            option,
            score: board.get(option),
            reasons: reasons_for(option, &explanations),
        })
        .collect();
    // Stable sort keeps enumeration order between equal scores.
    scores.sort_by(|left, right| right.score.cmp(&left.score));

    let primary = scores[0].option;
    let runner_up = scores[1].option;
    let confidence = confidence_from_margin(scores[0].score - scores[1].score);

    let addons = if answers.has_async_pressure() {
        ASYNC_ADDONS.to_vec()
    } else {
        vec![FALLBACK_ADDON]
    };

    let rationale = vec![
        format!(
            "Your team/ops profile and targets tilt toward {} with clear module boundaries and minimal coordination overhead.",
            primary.label().to_lowercase()
        ),
        format!(
            "The runner-up ({}) is close; consider it if the tipping conditions happen.",
            runner_up.label()
        ),
    ];

    debug!(
        primary = primary.label(),
        runner_up = runner_up.label(),
        confidence,
        fired_rules = explanations.len(),
        "computed architecture recommendation"
    );

    Recommendation {
        primary,
        addons,
        rationale,
        starter_stack: primary.starter_stack().to_vec(),
        confidence,
        scores,
        explanations,
        tradeoffs: primary.tradeoffs().to_vec(),
        tipping_points: TIPPING_POINTS.to_vec(),
    }
}

/// Normalizes the lead over the runner-up into `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
pub fn confidence_from_margin(margin: i16) -> f64 {
    (f64::from(margin) / 10.0 + 0.5).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

// Monolith reasons skip the independent-deploys rule unless its text argues for
// fewer or single units.
fn reasons_for(option: ArchitectureOption, explanations: &[Explanation]) -> Vec<String> {
    explanations
        .iter()
        .filter(|explanation| explanation.contribution > 0)
        .filter(|explanation| {
            option != ArchitectureOption::WellStructuredMonolith
                || explanation.because.contains("fewer")
                || explanation.because.contains("single")
                || explanation.criterion != INDEPENDENT_DEPLOYS
        })
        .take(MAX_REASONS)
        .map(|explanation| format!("{}: {}", explanation.criterion, explanation.because))
        .collect()
}
