use std::{fs, path::Path, sync::Arc, time::Duration};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use cds_cards::{
    cli::{Command, DEFAULT_CONFIG_PATH, cli_args_from_env},
    config::Config,
    feedback::{DispatchHandle, FeedbackDispatcher, HttpFeedbackTransport},
    interaction::{CardSession, DismissalOutcome, InteractionCallbacks, SuggestionOutcome},
    links::{LaunchOutcome, LinkResolver, SystemNavigator},
    logging::init_tracing,
    mode::{InteractionContext, Mode},
    signing::{DisabledTokenSigner, HmacJwtSigner, TokenSigner},
    store::InMemoryCardStore,
    types::{CardResponse, OverrideReason},
    view::RenderedCards,
};

#[derive(Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum ActionReport {
    Render,
    Accept { status: &'static str, feedback_sent: bool },
    Dismiss { status: &'static str, feedback_sent: bool },
    Launch { outcome: LaunchOutcome },
}

#[derive(Serialize)]
struct Report {
    mode: Mode,
    #[serde(flatten)]
    action: ActionReport,
    rendered: RenderedCards,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli_args_from_env()?;
    let config = load_config(args.config_path.as_deref())?;
    let logging = init_tracing(&config.logging, config.mode)?;

    let response_text = fs::read_to_string(&args.response_path)
        .with_context(|| format!("failed to read {}", args.response_path.display()))?;
    let response: CardResponse = serde_json::from_str(&response_text)
        .with_context(|| format!("failed to parse {}", args.response_path.display()))?;
    tracing::info!(
        target: "cli",
        run_id = logging.run_id(),
        mode = config.mode.as_str(),
        cards = response.cards.len(),
        "cards_loaded"
    );

    // The secret is only required when this run can actually send feedback.
    let signer: Arc<dyn TokenSigner> = match config.mode {
        Mode::Live if args.command.sends_feedback() => Arc::new(
            HmacJwtSigner::from_env(&config.signing)
                .context("failed to configure feedback token signer")?,
        ),
        Mode::Live | Mode::Demonstration => Arc::new(DisabledTokenSigner),
    };
    let transport = Arc::new(
        HttpFeedbackTransport::new(&config.feedback)
            .context("failed to build feedback transport")?,
    );

    let callbacks = InteractionCallbacks::new(|suggestion| {
        tracing::info!(
            target: "cli",
            label = ?suggestion.label,
            uuid = ?suggestion.uuid,
            actions = suggestion.actions.len(),
            "suggestion_taken"
        );
    })
    .with_app_launch(|link, outcome| {
        tracing::info!(target: "cli", label = %link.label, outcome = ?outcome, "app_launch_attempted");
    });

    let session = CardSession::new(
        InteractionContext::new(config.mode),
        Arc::new(InMemoryCardStore::new(response)),
        FeedbackDispatcher::new(signer, transport),
        LinkResolver::new(
            config.launch.smart_context.clone(),
            Arc::new(SystemNavigator),
        ),
        callbacks,
    );

    let (action, pending) = run_command(&session, &args.command)?;

    // A short-lived process would otherwise exit before the detached delivery runs.
    let wait = Duration::from_millis(config.feedback.timeout_ms.saturating_add(1_000));
    for handle in pending {
        let card = handle.card().to_string();
        match tokio::time::timeout(wait, handle.outcome()).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => eprintln!("feedback for card {card} was not delivered: {err}"),
            Err(_) => eprintln!("feedback for card {card} still pending after {wait:?}"),
        }
    }

    let report = Report {
        mode: config.mode,
        action,
        rendered: session.render(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to serialize report")?
    );

    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                Config::load(default_path).with_context(|| {
                    format!("failed to load config from {}", default_path.display())
                })
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn run_command(
    session: &CardSession,
    command: &Command,
) -> Result<(ActionReport, Vec<DispatchHandle>)> {
    match command {
        Command::Render => Ok((ActionReport::Render, Vec::new())),
        Command::Accept {
            card_uuid,
            suggestion,
        } => {
            let card = session
                .find_card(card_uuid)
                .ok_or_else(|| anyhow!("no card with uuid {card_uuid}"))?;
            let selected = card
                .suggestions
                .iter()
                .find(|candidate| {
                    candidate.uuid.as_deref() == Some(suggestion.as_str())
                        || candidate.label.as_deref() == Some(suggestion.as_str())
                })
                .ok_or_else(|| anyhow!("card {card_uuid} has no suggestion {suggestion}"))?;

            let (status, feedback) = match session.take_suggestion(&card, selected) {
                SuggestionOutcome::Suppressed => ("suppressed", None),
                SuggestionOutcome::MissingLabel => ("missing_label", None),
                SuggestionOutcome::Accepted { feedback } => ("accepted", feedback),
            };
            Ok((
                ActionReport::Accept {
                    status,
                    feedback_sent: feedback.is_some(),
                },
                feedback.into_iter().collect(),
            ))
        }
        Command::Dismiss {
            card_uuid,
            override_code,
        } => {
            let card = session
                .find_card(card_uuid)
                .ok_or_else(|| anyhow!("no card with uuid {card_uuid}"))?;
            let reason = override_code.as_ref().map(|code| {
                card.override_reasons
                    .iter()
                    .find(|reason| &reason.code == code)
                    .cloned()
                    .unwrap_or_else(|| OverrideReason {
                        code: code.clone(),
                        system: None,
                        display: code.clone(),
                    })
            });

            let (status, feedback) = match session.dismiss(&card, reason.as_ref()) {
                DismissalOutcome::Suppressed => ("suppressed", None),
                DismissalOutcome::MissingCardUuid => ("missing_card_uuid", None),
                DismissalOutcome::Dismissed { feedback, .. } => ("dismissed", Some(feedback)),
            };
            Ok((
                ActionReport::Dismiss {
                    status,
                    feedback_sent: feedback.is_some(),
                },
                feedback.into_iter().collect(),
            ))
        }
        Command::Launch {
            card_uuid,
            link_index,
        } => {
            let card = session
                .find_card(card_uuid)
                .ok_or_else(|| anyhow!("no card with uuid {card_uuid}"))?;
            let link = card
                .links
                .get(*link_index)
                .ok_or_else(|| anyhow!("card {card_uuid} has no link at index {link_index}"))?;

            Ok((
                ActionReport::Launch {
                    outcome: session.click_link(link),
                },
                Vec::new(),
            ))
        }
    }
}
