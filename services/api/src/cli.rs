use crate::console::{
    run_answers, run_glossary, run_questionnaire, run_recommend, AnswersCommand, GlossaryArgs,
    RecommendArgs,
};
use crate::server;
use arch_advisor::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Architecture Advisor",
    about = "Recommend an architecture style from a short engineering-context questionnaire",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score the saved answers (plus any overrides) and print the recommendation
    Recommend(RecommendArgs),
    /// Inspect or clear the saved questionnaire answers
    Answers {
        #[command(subcommand)]
        command: AnswersCommand,
    },
    /// Print glossary definitions for questionnaire jargon
    Glossary(GlossaryArgs),
    /// List the questionnaire with accepted answer values
    Questionnaire,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Answers { command } => run_answers(command),
        Command::Glossary(args) => run_glossary(args),
        Command::Questionnaire => run_questionnaire(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch_advisor::advisor::{Budget, TeamSize};
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn recommend_flags_parse_answer_values() {
        let cli = Cli::try_parse_from([
            "arch-advisor",
            "recommend",
            "--team",
            "multi",
            "--budget",
            "managedOK",
            "--integrations",
            "-3",
            "--spikes",
            "true",
            "--json",
        ])
        .expect("flags parse");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.overrides.team, Some(TeamSize::Multi));
                assert_eq!(args.overrides.budget, Some(Budget::ManagedOk));
                assert_eq!(args.overrides.integrations, Some(-3));
                assert_eq!(args.overrides.spikes, Some(true));
                assert!(args.json);
                assert!(!args.save);
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_answer_values_are_rejected() {
        let result = Cli::try_parse_from(["arch-advisor", "recommend", "--latency", "fast"]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["arch-advisor"]).expect("no args parse");
        assert!(cli.command.is_none());
    }
}
