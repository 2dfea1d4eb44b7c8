use serde::Serialize;

use super::answers::{
    Answers, Budget, Consistency, LatencyTarget, OpsMaturity, Regulation, TeamSize,
};
use super::options::ArchitectureOption::{self, *};

/// How heavily a fired rule should weigh in a reader's mind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Strong,
    Medium,
    Weak,
}

impl Impact {
    pub const fn as_str(self) -> &'static str {
        match self {
            Impact::Strong => "strong",
            Impact::Medium => "medium",
            Impact::Weak => "weak",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence trail entry for a single fired rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub criterion: &'static str,
    pub your_answer: String,
    pub impact: Impact,
    pub because: &'static str,
    /// Weight added to the option the rule primarily favors. Display only; the
    /// scoreboard holds the authoritative totals.
    pub contribution: i16,
}

/// Score deltas and explanation produced by one rule whose guard matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub deltas: Vec<(ArchitectureOption, i16)>,
    pub explanation: Explanation,
}

pub type Rule = fn(&Answers) -> Option<RuleOutcome>;

/// Rules in evaluation order. Order matters for explanation and reason listings.
pub const RULES: [Rule; 9] = [
    team_size,
    throughput,
    spiky_traffic,
    latency_target,
    consistency,
    integrations,
    independent_deploys,
    ops_and_budget,
    regulation,
];

/// Running per-option totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    totals: [i16; 4],
}

impl Scoreboard {
    pub fn apply(&mut self, deltas: &[(ArchitectureOption, i16)]) {
        for (option, delta) in deltas {
            self.totals[option.index()] += delta;
        }
    }

    pub fn get(&self, option: ArchitectureOption) -> i16 {
        self.totals[option.index()]
    }
}

pub(crate) fn score_answers(answers: &Answers) -> (Scoreboard, Vec<Explanation>) {
    let mut board = Scoreboard::default();
    let mut explanations = Vec::with_capacity(RULES.len());

    for rule in RULES {
        if let Some(outcome) = rule(answers) {
            board.apply(&outcome.deltas);
            explanations.push(outcome.explanation);
        }
    }

    (board, explanations)
}

pub fn team_size(answers: &Answers) -> Option<RuleOutcome> {
    let outcome = match answers.team {
        TeamSize::Solo | TeamSize::Small => RuleOutcome {
            deltas: vec![(WellStructuredMonolith, 4), (ModularMonolith, 2)],
            explanation: Explanation {
                criterion: "Team size",
                your_answer: answers.team.to_string(),
                impact: Impact::Strong,
                because: "Smaller teams move faster with one deployable unit and fewer boundaries to manage.",
                contribution: 4,
            },
        },
        TeamSize::Multi => RuleOutcome {
            deltas: vec![(ModularMonolith, 2), (Microservices, 2)],
            explanation: Explanation {
                criterion: "Team size",
                your_answer: answers.team.to_string(),
                impact: Impact::Medium,
                because: "Multiple teams benefit from clearer module boundaries and independent work streams.",
                contribution: 2,
            },
        },
    };
    Some(outcome)
}

pub fn throughput(answers: &Answers) -> Option<RuleOutcome> {
    let your_answer = format!("{} → {}", answers.rps_now, answers.rps_soon);
    let outcome = if answers.high_load_soon() {
        RuleOutcome {
            deltas: vec![(ModularMonolith, 3), (Microservices, 2)],
            explanation: Explanation {
                criterion: "Throughput (RPS)",
                your_answer,
                impact: Impact::Strong,
                because: "Higher sustained RPS benefits from internal separation and async paths before full service split.",
                contribution: 3,
            },
        }
    } else {
        RuleOutcome {
            deltas: vec![(WellStructuredMonolith, 2)],
            explanation: Explanation {
                criterion: "Throughput (RPS)",
                your_answer,
                impact: Impact::Medium,
                because: "Sub-1k RPS rarely justifies distributed overhead early on.",
                contribution: 2,
            },
        }
    };
    Some(outcome)
}

pub fn spiky_traffic(answers: &Answers) -> Option<RuleOutcome> {
    if !answers.has_async_pressure() {
        return None;
    }
    Some(RuleOutcome {
        deltas: vec![(ServerlessQueue, 3), (ModularMonolith, 1)],
        explanation: Explanation {
            criterion: "Spiky traffic & jobs",
            your_answer: format!("spikes={}, bg={}", answers.spikes, answers.bg_work),
            impact: Impact::Strong,
            because: "Queues and functions handle bursty workloads without resizing the main app.",
            contribution: 3,
        },
    })
}

pub fn latency_target(answers: &Answers) -> Option<RuleOutcome> {
    if answers.latency != LatencyTarget::Under150 {
        return None;
    }
    Some(RuleOutcome {
        deltas: vec![
            (WellStructuredMonolith, 2),
            (ModularMonolith, 2),
            (Microservices, -1),
        ],
        explanation: Explanation {
            criterion: "Latency target",
            your_answer: answers.latency.to_string(),
            impact: Impact::Medium,
            because: "Cross-service hops add tail latency; tight SLOs favor fewer network boundaries.",
            contribution: 2,
        },
    })
}

pub fn consistency(answers: &Answers) -> Option<RuleOutcome> {
    let outcome = match answers.consistency {
        Consistency::Strong => RuleOutcome {
            deltas: vec![(WellStructuredMonolith, 2), (ModularMonolith, 1)],
            explanation: Explanation {
                criterion: "Consistency",
                your_answer: answers.consistency.to_string(),
                impact: Impact::Medium,
                because: "Single DB and transaction scope simplify strong consistency guarantees.",
                contribution: 2,
            },
        },
        Consistency::Eventual => RuleOutcome {
            deltas: vec![(ServerlessQueue, 1), (Microservices, 1)],
            explanation: Explanation {
                criterion: "Consistency",
                your_answer: answers.consistency.to_string(),
                impact: Impact::Weak,
                because: "Eventual consistency tolerates async processing and service boundaries.",
                contribution: 1,
            },
        },
    };
    Some(outcome)
}

pub fn integrations(answers: &Answers) -> Option<RuleOutcome> {
    if answers.integrations < 6 {
        return None;
    }
    Some(RuleOutcome {
        deltas: vec![(ModularMonolith, 1), (Microservices, 1)],
        explanation: Explanation {
            criterion: "Integrations",
            your_answer: answers.integrations.to_string(),
            impact: Impact::Weak,
            because: "Many third-party integrations often benefit from adapters/edges separated from core.",
            contribution: 1,
        },
    })
}

pub fn independent_deploys(answers: &Answers) -> Option<RuleOutcome> {
    if !answers.indep_deploys {
        return None;
    }
    Some(RuleOutcome {
        deltas: vec![(ModularMonolith, 3), (Microservices, 2)],
        explanation: Explanation {
            criterion: INDEPENDENT_DEPLOYS,
            your_answer: answers.indep_deploys.to_string(),
            impact: Impact::Strong,
            because: "Separate modules/services allow teams to ship on their own cadence.",
            contribution: 3,
        },
    })
}

pub fn ops_and_budget(answers: &Answers) -> Option<RuleOutcome> {
    let your_answer = format!("ops={}, budget={}", answers.ops, answers.budget);

    if answers.ops == OpsMaturity::Low || answers.budget == Budget::Lean {
        return Some(RuleOutcome {
            deltas: vec![
                (WellStructuredMonolith, 3),
                (ServerlessQueue, 1),
                (Microservices, -3),
            ],
            explanation: Explanation {
                criterion: "Ops maturity & budget",
                your_answer,
                impact: Impact::Strong,
                because: "Distributed systems add infra/observability cost; start simple if ops are light and budget is lean.",
                contribution: 3,
            },
        });
    }

    // Budget cannot be lean here; the first branch already took that case.
    if answers.ops == OpsMaturity::High {
        return Some(RuleOutcome {
            deltas: vec![(Microservices, 2)],
            explanation: Explanation {
                criterion: "Ops maturity & budget",
                your_answer,
                impact: Impact::Medium,
                because: "If you already run k8s/obs, the platform cost is a lesser concern.",
                contribution: 2,
            },
        });
    }

    None
}

pub fn regulation(answers: &Answers) -> Option<RuleOutcome> {
    if answers.regulation != Regulation::Strict {
        return None;
    }
    Some(RuleOutcome {
        deltas: vec![(ModularMonolith, 1), (Microservices, -1)],
        explanation: Explanation {
            criterion: "Regulatory/data boundaries",
            your_answer: answers.regulation.to_string(),
            impact: Impact::Weak,
            because: "Fewer moving parts often makes audits and change control easier.",
            contribution: 1,
        },
    })
}

pub(crate) const INDEPENDENT_DEPLOYS: &str = "Independent deploys";
