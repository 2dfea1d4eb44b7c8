use crate::infra::open_answer_store;
use arch_advisor::advisor::{
    glossary, questions, recommend, Answers, BackgroundWork, Budget, Consistency, InputKind,
    LatencyTarget, OpsMaturity, Question, Recommendation, Regulation, TeamSize, Throughput,
};
use arch_advisor::config::AppConfig;
use arch_advisor::error::AppError;
use clap::{Args, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Read answers from a JSON file instead of the saved answers
    #[arg(long, conflicts_with = "fresh")]
    pub(crate) answers: Option<PathBuf>,
    /// Start from the default answers, ignoring anything saved
    #[arg(long)]
    pub(crate) fresh: bool,
    /// Persist the resulting answers for later runs and the HTTP service
    #[arg(long)]
    pub(crate) save: bool,
    /// Print the full recommendation as JSON
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) overrides: AnswerOverrides,
}

/// Per-question overrides layered on top of the loaded answers.
#[derive(Args, Debug, Default)]
pub(crate) struct AnswerOverrides {
    /// Team size: solo, small, multi
    #[arg(long)]
    pub(crate) team: Option<TeamSize>,
    /// Current requests per second: <100, 100-1000, >1000
    #[arg(long)]
    pub(crate) rps_now: Option<Throughput>,
    /// Requests per second expected in ~12 months
    #[arg(long)]
    pub(crate) rps_soon: Option<Throughput>,
    /// Whether traffic arrives in spikes or bursts
    #[arg(long)]
    pub(crate) spikes: Option<bool>,
    /// Background work: none, some, heavy
    #[arg(long)]
    pub(crate) bg_work: Option<BackgroundWork>,
    /// p95 latency target in ms: <150, 150-500, >500
    #[arg(long)]
    pub(crate) latency: Option<LatencyTarget>,
    /// Consistency needs: strong, eventual
    #[arg(long)]
    pub(crate) consistency: Option<Consistency>,
    /// Number of third-party integrations (clamped to 0-20)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) integrations: Option<i64>,
    /// Whether parts of the system must deploy independently
    #[arg(long)]
    pub(crate) indep_deploys: Option<bool>,
    /// Ops maturity: low, mid, high
    #[arg(long)]
    pub(crate) ops: Option<OpsMaturity>,
    /// Budget: lean, mod, managedOK
    #[arg(long)]
    pub(crate) budget: Option<Budget>,
    /// Regulatory or data boundaries: none, light, strict
    #[arg(long)]
    pub(crate) regulation: Option<Regulation>,
}

impl AnswerOverrides {
    pub(crate) fn apply(self, mut answers: Answers) -> Answers {
        if let Some(team) = self.team {
            answers.team = team;
        }
        if let Some(rps_now) = self.rps_now {
            answers.rps_now = rps_now;
        }
        if let Some(rps_soon) = self.rps_soon {
            answers.rps_soon = rps_soon;
        }
        if let Some(spikes) = self.spikes {
            answers.spikes = spikes;
        }
        if let Some(bg_work) = self.bg_work {
            answers.bg_work = bg_work;
        }
        if let Some(latency) = self.latency {
            answers.latency = latency;
        }
        if let Some(consistency) = self.consistency {
            answers.consistency = consistency;
        }
        if let Some(integrations) = self.integrations {
            answers = answers.with_integrations(integrations);
        }
        if let Some(indep_deploys) = self.indep_deploys {
            answers.indep_deploys = indep_deploys;
        }
        if let Some(ops) = self.ops {
            answers.ops = ops;
        }
        if let Some(budget) = self.budget {
            answers.budget = budget;
        }
        if let Some(regulation) = self.regulation {
            answers.regulation = regulation;
        }
        answers
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum AnswersCommand {
    /// Print the saved answers (defaults when nothing usable is saved)
    Show,
    /// Forget the saved answers
    Reset,
    /// Print where answers are saved
    Path,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GlossaryArgs {
    /// Term to define (all terms when omitted)
    pub(crate) term: Option<String>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        answers,
        fresh,
        save,
        json,
        overrides,
    } = args;

    let config = AppConfig::load()?;
    let store = open_answer_store(&config.storage);

    let base = match answers {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str::<Answers>(&raw)?
        }
        None if fresh => Answers::default(),
        None => store.load(),
    };
    let answers = overrides.apply(base);

    if save {
        store.save(&answers)?;
    }

    let recommendation = recommend(&answers);
    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        print!("{}", render_recommendation(&recommendation));
        if save {
            println!("\nAnswers saved to {}", store.inner().path().display());
        }
    }

    Ok(())
}

pub(crate) fn run_answers(command: AnswersCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let store = open_answer_store(&config.storage);

    match command {
        AnswersCommand::Show => {
            println!("{}", serde_json::to_string_pretty(&store.load())?);
        }
        AnswersCommand::Reset => {
            store.reset()?;
            println!("Saved answers cleared; defaults apply on the next run");
        }
        AnswersCommand::Path => {
            println!("{}", store.inner().path().display());
        }
    }

    Ok(())
}

pub(crate) fn run_glossary(args: GlossaryArgs) -> Result<(), AppError> {
    match render_glossary(args.term.as_deref()) {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(err) => {
            let known: Vec<&str> = glossary::entries().iter().map(|entry| entry.term).collect();
            eprintln!("Known terms: {}", known.join(", "));
            Err(err)
        }
    }
}

pub(crate) fn render_glossary(term: Option<&str>) -> Result<String, AppError> {
    let entries = match term {
        Some(term) => {
            let entry =
                glossary::lookup(term).ok_or_else(|| AppError::UnknownTerm(term.to_string()))?;
            std::slice::from_ref(entry)
        }
        None => glossary::entries(),
    };

    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}: {}", entry.term, entry.definition);
    }
    Ok(out)
}

pub(crate) fn run_questionnaire() -> Result<(), AppError> {
    print!("{}", render_questionnaire(questions()));
    Ok(())
}

pub(crate) fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Recommendation: {} (confidence {}%)",
        recommendation.primary,
        recommendation.confidence_percent()
    );

    write_list(&mut out, "Why", &recommendation.rationale);
    write_list(&mut out, "Add-ons", &recommendation.addons);
    write_list(&mut out, "Starter stack", &recommendation.starter_stack);

    let _ = writeln!(out, "\nScores:");
    for entry in &recommendation.scores {
        let _ = writeln!(out, "  - {}: {} pts", entry.option, entry.score);
    }

    write_list(
        &mut out,
        &format!("Why this over {}", recommendation.runner_up().option),
        recommendation.why_over_runner_up(),
    );

    let _ = writeln!(out, "\nEvidence from your answers:");
    for explanation in &recommendation.explanations {
        let _ = writeln!(
            out,
            "  - {} = {} — {} ({}, {:+})",
            explanation.criterion,
            explanation.your_answer,
            explanation.because,
            explanation.impact,
            explanation.contribution
        );
    }

    write_list(&mut out, "Trade-offs to accept", &recommendation.tradeoffs);

    let _ = writeln!(out, "\nWhat would change the recommendation?");
    for tipping_point in &recommendation.tipping_points {
        let _ = writeln!(
            out,
            "  - If {}, switch to {}. {}",
            tipping_point.condition, tipping_point.new_rec, tipping_point.why
        );
    }

    out
}

pub(crate) fn render_questionnaire(questions: &[Question]) -> String {
    let mut out = String::new();
    for question in questions {
        let accepted = match question.input {
            InputKind::Choice { options } => options
                .iter()
                .map(|option| format!("{} ({})", option.value, option.label))
                .collect::<Vec<_>>()
                .join(", "),
            InputKind::Toggle => "true, false".to_string(),
            InputKind::Number { min, max } => format!("whole number {min}-{max}"),
        };
        let _ = writeln!(out, "{} [{}]: {}", question.label, question.key, accepted);
        for term in question.help {
            if let Some(entry) = glossary::lookup(term) {
                let _ = writeln!(out, "    {}: {}", entry.term, entry.definition);
            }
        }
    }
    out
}

fn write_list<T: std::fmt::Display>(out: &mut String, heading: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{heading}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_the_given_answers() {
        let overrides = AnswerOverrides {
            team: Some(TeamSize::Multi),
            integrations: Some(42),
            indep_deploys: Some(true),
            ..AnswerOverrides::default()
        };

        let answers = overrides.apply(Answers::default());

        assert_eq!(
            answers,
            Answers {
                team: TeamSize::Multi,
                integrations: 20,
                indep_deploys: true,
                ..Answers::default()
            }
        );
    }

    #[test]
    fn rendered_recommendation_lists_every_section() {
        let recommendation = recommend(&Answers::default());
        let text = render_recommendation(&recommendation);

        assert!(text.starts_with("Recommendation: Well-structured monolith (confidence 95%)"));
        assert!(text.contains("  - Well-structured monolith: 11 pts"));
        assert!(text.contains("  - Microservices: -3 pts"));
        assert!(text.contains("Why this over Modular monolith:"));
        assert!(text.contains("  - Team size = small — "));
        assert!(text.contains("(strong, +4)"));
        assert!(text.contains("Trade-offs to accept:"));
        assert!(text.contains("  - If 3+ teams demand independent deploys"));
        assert!(text.contains("Basic background worker for emails/exports"));
    }

    #[test]
    fn glossary_lookup_matches_http_not_found() {
        let text = render_glossary(Some("slo")).expect("known term renders");
        assert!(text.starts_with("SLO: Service Level Objective"));
        assert_eq!(text.lines().count(), 1);

        assert_eq!(render_glossary(None).expect("all terms render").lines().count(), 10);

        match render_glossary(Some("mesh")) {
            Err(AppError::UnknownTerm(term)) => assert_eq!(term, "mesh"),
            other => panic!("expected unknown term error, got {other:?}"),
        }
    }

    #[test]
    fn rendered_questionnaire_shows_values_and_help() {
        let text = render_questionnaire(questions());

        assert!(text.contains("Team size [team]: solo (Solo), small (2–5 devs), multi (Multiple teams)"));
        assert!(text.contains("Integrations [integrations]: whole number 0-20"));
        assert!(text.contains("Traffic spikes/bursts? [spikes]: true, false"));
        assert!(text.contains("    p95: 95th percentile latency"));
    }
}
