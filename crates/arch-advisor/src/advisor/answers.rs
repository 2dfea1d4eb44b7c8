use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Inclusive bounds accepted for the integrations count.
pub const INTEGRATIONS_MIN: u8 = 0;
pub const INTEGRATIONS_MAX: u8 = 20;

/// Rejected textual answer, e.g. an unknown `--team` flag value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field} answer (expected one of: {expected})")]
pub struct ParseAnswerError {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Persisted and displayed form of the answer.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseAnswerError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let trimmed = raw.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ParseAnswerError {
                        field: $field,
                        value: raw.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|candidate| candidate.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

answer_enum! {
    /// How many people ship the system.
    TeamSize as "team" {
        Solo => "solo",
        Small => "small",
        Multi => "multi",
    }
}

answer_enum! {
    /// Requests-per-second bucket, used for both current and projected load.
    Throughput as "throughput" {
        Under100 => "<100",
        From100To1000 => "100-1000",
        Over1000 => ">1000",
    }
}

answer_enum! {
    BackgroundWork as "background work" {
        Idle => "none",
        Occasional => "some",
        Heavy => "heavy",
    }
}

answer_enum! {
    /// p95 latency target in milliseconds.
    LatencyTarget as "latency" {
        Under150 => "<150",
        From150To500 => "150-500",
        Over500 => ">500",
    }
}

answer_enum! {
    Consistency as "consistency" {
        Strong => "strong",
        Eventual => "eventual",
    }
}

answer_enum! {
    OpsMaturity as "ops" {
        Low => "low",
        Mid => "mid",
        High => "high",
    }
}

answer_enum! {
    Budget as "budget" {
        Lean => "lean",
        Moderate => "mod",
        ManagedOk => "managedOK",
    }
}

answer_enum! {
    Regulation as "regulation" {
        Unregulated => "none",
        Light => "light",
        Strict => "strict",
    }
}

/// Questionnaire answers describing the engineering context of an organization.
///
/// The serialized form doubles as the persisted representation: missing keys are
/// filled from [`Answers::default`] and unknown keys are ignored, so answers saved
/// by older versions of the questionnaire keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Answers {
    pub team: TeamSize,
    pub rps_now: Throughput,
    pub rps_soon: Throughput,
    pub spikes: bool,
    pub bg_work: BackgroundWork,
    pub latency: LatencyTarget,
    pub consistency: Consistency,
    #[serde(deserialize_with = "deserialize_integrations")]
    pub integrations: u8,
    pub indep_deploys: bool,
    pub ops: OpsMaturity,
    pub budget: Budget,
    pub regulation: Regulation,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            team: TeamSize::Small,
            rps_now: Throughput::Under100,
            rps_soon: Throughput::Under100,
            spikes: false,
            bg_work: BackgroundWork::Idle,
            latency: LatencyTarget::From150To500,
            consistency: Consistency::Strong,
            integrations: 0,
            indep_deploys: false,
            ops: OpsMaturity::Low,
            budget: Budget::Lean,
            regulation: Regulation::Light,
        }
    }
}

impl Answers {
    /// Rebuilds answers from their persisted JSON form, layered over the defaults.
    ///
    /// Anything unparsable degrades to [`Answers::default`]; stored state is never
    /// allowed to break an evaluation.
    pub fn merge_persisted(raw: &str) -> Self {
        match serde_json::from_str::<Answers>(raw) {
            Ok(answers) => answers,
            Err(err) => {
                debug!(error = %err, "discarding unreadable persisted answers");
                Answers::default()
            }
        }
    }

    /// Persisted JSON form of the answers.
    pub fn to_persisted(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Sets the integrations count, clamping it into the accepted range.
    pub fn with_integrations(mut self, raw: i64) -> Self {
        self.integrations = clamp_integrations(raw);
        self
    }

    /// True when either the current or the projected load exceeds 1k RPS.
    pub fn high_load_soon(&self) -> bool {
        self.rps_now == Throughput::Over1000 || self.rps_soon == Throughput::Over1000
    }

    /// True when traffic is bursty or there is any background work to absorb.
    pub fn has_async_pressure(&self) -> bool {
        self.spikes || self.bg_work != BackgroundWork::Idle
    }
}

pub fn clamp_integrations(raw: i64) -> u8 {
    raw.clamp(i64::from(INTEGRATIONS_MIN), i64::from(INTEGRATIONS_MAX)) as u8
}

fn deserialize_integrations<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_integrations(raw))
}
