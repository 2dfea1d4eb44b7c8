//! Static description of the questionnaire so any front end can render the form
//! without duplicating answer values or help text keys.

use serde::Serialize;

use super::answers::{
    BackgroundWork, Budget, Consistency, LatencyTarget, OpsMaturity, Regulation, TeamSize,
    Throughput, INTEGRATIONS_MAX, INTEGRATIONS_MIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    Choice { options: &'static [ChoiceOption] },
    Toggle,
    Number { min: u8, max: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Field name in the persisted answers object.
    pub key: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    /// Glossary terms offered as inline help.
    pub help: &'static [&'static str],
}

const fn choice(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

const THROUGHPUT_CHOICES: [ChoiceOption; 3] = [
    choice(Throughput::Under100.as_str(), "< 100"),
    choice(Throughput::From100To1000.as_str(), "100–1000"),
    choice(Throughput::Over1000.as_str(), "> 1000"),
];

const QUESTIONS: [Question; 12] = [
    Question {
        key: "team",
        label: "Team size",
        input: InputKind::Choice {
            options: &[
                choice(TeamSize::Solo.as_str(), "Solo"),
                choice(TeamSize::Small.as_str(), "2–5 devs"),
                choice(TeamSize::Multi.as_str(), "Multiple teams"),
            ],
        },
        help: &[],
    },
    Question {
        key: "rpsNow",
        label: "RPS now",
        input: InputKind::Choice {
            options: &THROUGHPUT_CHOICES,
        },
        help: &["RPS"],
    },
    Question {
        key: "rpsSoon",
        label: "RPS in ~12 months",
        input: InputKind::Choice {
            options: &THROUGHPUT_CHOICES,
        },
        help: &[],
    },
    Question {
        key: "spikes",
        label: "Traffic spikes/bursts?",
        input: InputKind::Toggle,
        help: &[],
    },
    Question {
        key: "bgWork",
        label: "Background work (emails, exports, jobs)",
        input: InputKind::Choice {
            options: &[
                choice(BackgroundWork::Idle.as_str(), "None"),
                choice(BackgroundWork::Occasional.as_str(), "Some"),
                choice(BackgroundWork::Heavy.as_str(), "Heavy"),
            ],
        },
        help: &[],
    },
    Question {
        key: "latency",
        label: "Latency target (p95 / SLO)",
        input: InputKind::Choice {
            options: &[
                choice(LatencyTarget::Under150.as_str(), "< 150ms"),
                choice(LatencyTarget::From150To500.as_str(), "150–500ms"),
                choice(LatencyTarget::Over500.as_str(), "> 500ms"),
            ],
        },
        help: &["SLO", "p95"],
    },
    Question {
        key: "consistency",
        label: "Consistency",
        input: InputKind::Choice {
            options: &[
                choice(Consistency::Strong.as_str(), "Strong"),
                choice(Consistency::Eventual.as_str(), "Eventual"),
            ],
        },
        help: &["Consistency"],
    },
    Question {
        key: "integrations",
        label: "Integrations",
        input: InputKind::Number {
            min: INTEGRATIONS_MIN,
            max: INTEGRATIONS_MAX,
        },
        help: &["Integrations"],
    },
    Question {
        key: "indepDeploys",
        label: "Independent deploys needed?",
        input: InputKind::Toggle,
        help: &[],
    },
    Question {
        key: "ops",
        label: "Ops maturity",
        input: InputKind::Choice {
            options: &[
                choice(OpsMaturity::Low.as_str(), "Low (no K8s)"),
                choice(OpsMaturity::Mid.as_str(), "Moderate"),
                choice(OpsMaturity::High.as_str(), "High (K8s/obs)"),
            ],
        },
        help: &[],
    },
    Question {
        key: "budget",
        label: "Budget",
        input: InputKind::Choice {
            options: &[
                choice(Budget::Lean.as_str(), "Lean"),
                choice(Budget::Moderate.as_str(), "Moderate"),
                choice(Budget::ManagedOk.as_str(), "Managed OK"),
            ],
        },
        help: &[],
    },
    Question {
        key: "regulation",
        label: "Regulatory/data boundaries",
        input: InputKind::Choice {
            options: &[
                choice(Regulation::Unregulated.as_str(), "None"),
                choice(Regulation::Light.as_str(), "Light"),
                choice(Regulation::Strict.as_str(), "Strict"),
            ],
        },
        help: &[],
    },
];

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::answers::Answers;
    use crate::advisor::glossary;
    use serde_json::{Map, Value};

    #[test]
    fn question_keys_match_persisted_answer_fields() {
        let persisted = serde_json::to_value(Answers::default()).expect("answers serialize");
        let fields = persisted.as_object().expect("answers are an object");

        assert_eq!(questions().len(), fields.len());
        for question in questions() {
            assert!(fields.contains_key(question.key), "{} not persisted", question.key);
        }
    }

    #[test]
    fn every_choice_value_parses_as_an_answer() {
        for question in questions() {
            if let InputKind::Choice { options } = question.input {
                for option in options {
                    let mut payload = Map::new();
                    payload.insert(question.key.to_string(), Value::from(option.value));
                    let parsed: Result<Answers, _> = serde_json::from_value(Value::Object(payload));
                    assert!(parsed.is_ok(), "{}={} rejected", question.key, option.value);
                }
            }
        }
    }

    #[test]
    fn help_terms_resolve_in_glossary() {
        for term in questions().iter().flat_map(|question| question.help.iter()) {
            assert!(glossary::lookup(term).is_some(), "{term} missing from glossary");
        }
    }

    #[test]
    fn input_kind_serializes_with_tag() {
        let value = serde_json::to_value(InputKind::Number { min: 0, max: 20 })
            .expect("input kind serializes");
        assert_eq!(value["kind"], "number");
        assert_eq!(value["max"], 20);
    }
}
