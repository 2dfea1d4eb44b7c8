use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of architecture styles the advisor ranks.
///
/// Declaration order is the tie-break order when two options score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArchitectureOption {
    #[serde(rename = "Well-structured monolith")]
    WellStructuredMonolith,
    #[serde(rename = "Modular monolith")]
    ModularMonolith,
    #[serde(rename = "Microservices")]
    Microservices,
    #[serde(rename = "Serverless + queue")]
    ServerlessQueue,
}

impl ArchitectureOption {
    pub const ALL: [ArchitectureOption; 4] = [
        ArchitectureOption::WellStructuredMonolith,
        ArchitectureOption::ModularMonolith,
        ArchitectureOption::Microservices,
        ArchitectureOption::ServerlessQueue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArchitectureOption::WellStructuredMonolith => "Well-structured monolith",
            ArchitectureOption::ModularMonolith => "Modular monolith",
            ArchitectureOption::Microservices => "Microservices",
            ArchitectureOption::ServerlessQueue => "Serverless + queue",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            ArchitectureOption::WellStructuredMonolith => 0,
            ArchitectureOption::ModularMonolith => 1,
            ArchitectureOption::Microservices => 2,
            ArchitectureOption::ServerlessQueue => 3,
        }
    }

    /// What a team gives up by adopting this style.
    pub fn tradeoffs(&self) -> &'static [&'static str] {
        match self {
            ArchitectureOption::WellStructuredMonolith => &[
                "Fewer independent deploys than services; coordinate releases.",
                "Module boundaries must be enforced by convention/tooling to avoid spaghetti.",
            ],
            ArchitectureOption::ModularMonolith => &[
                "Still one runtime → blast radius on resource exhaustion.",
                "Requires discipline on module boundaries and ownership.",
            ],
            ArchitectureOption::Microservices => &[
                "Higher ops/observability cost and cross-service debugging complexity.",
                "Tail latency from network hops; data consistency harder.",
            ],
            ArchitectureOption::ServerlessQueue => &[
                "Cold starts and local dev parity can complicate tight latency SLOs.",
                "Vendor limits and concurrency controls need planning.",
            ],
        }
    }

    /// Opinionated starting point for the technology stack.
    pub fn starter_stack(&self) -> &'static [&'static str] {
        match self {
            ArchitectureOption::WellStructuredMonolith => &[
                "Postgres + Prisma",
                "Node/Express API (modular folders by domain)",
                "React SPA + TanStack Query",
                "BullMQ/Redis for async jobs (optional)",
                "OpenTelemetry + structured logs",
            ],
            ArchitectureOption::ModularMonolith => &[
                "Postgres (schemas per module or namespaces)",
                "Node/NestJS modules per bounded context",
                "Async via queue for non-critical paths",
                "OPA or module-level ACLs",
                "OTel tracing across modules",
            ],
            ArchitectureOption::Microservices => &[
                "Postgres per service (start with shared cluster, migrate later)",
                "gRPC/HTTP with a gateway",
                "Async events via Kafka/Redpanda",
                "Service mesh / centralized tracing",
                "Infra as code + CI per service",
            ],
            ArchitectureOption::ServerlessQueue => &[
                "API routes via serverless functions",
                "SQS/Cloud Tasks + workers for jobs",
                "Serverless Postgres or Dynamo",
                "Edge cache/CDN for burst handling",
                "Function-aware tracing",
            ],
        }
    }
}

impl fmt::Display for ArchitectureOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
