use serde::Serialize;

/// Short definition shown next to questionnaire jargon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

const ENTRIES: [GlossaryEntry; 10] = [
    GlossaryEntry {
        term: "RPS",
        definition: "Requests Per Second — throughput: how many requests your system handles each second.",
    },
    GlossaryEntry {
        term: "Integrations",
        definition: "How many third-party systems your app must talk to (Slack, email provider, calendar, payments, CRM, AI APIs, etc.). Used to judge coupling and whether event-driven/plugins are helpful.",
    },
    GlossaryEntry {
        term: "SLO",
        definition: "Service Level Objective — your target for reliability/speed (e.g., p95 < 300ms).",
    },
    GlossaryEntry {
        term: "SLA",
        definition: "Service Level Agreement — contractual promise often based on SLOs.",
    },
    GlossaryEntry {
        term: "SLI",
        definition: "Service Level Indicator — the measured metric (e.g., p95 latency, error rate).",
    },
    GlossaryEntry {
        term: "p95",
        definition: "95th percentile latency — 95% of requests finish under this time.",
    },
    GlossaryEntry {
        term: "Consistency",
        definition: "Strong = everyone sees the same truth immediately. Eventual = it settles shortly after.",
    },
    GlossaryEntry {
        term: "Idempotency",
        definition: "Running the same operation multiple times has the same final effect as once.",
    },
    GlossaryEntry {
        term: "Broker",
        definition: "Messaging middleman (Redis Streams, RabbitMQ, Kafka) routing events/queues.",
    },
    GlossaryEntry {
        term: "Saga",
        definition: "Multi-step workflow with compensations if later steps fail (an orchestrated business process).",
    },
];

pub fn entries() -> &'static [GlossaryEntry] {
    &ENTRIES
}

/// Case-insensitive term lookup.
pub fn lookup(term: &str) -> Option<&'static GlossaryEntry> {
    let term = term.trim();
    ENTRIES.iter().find(|entry| entry.term.eq_ignore_ascii_case(term))
}
