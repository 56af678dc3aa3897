use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showcase::config::Config;
use showcase::conversation::Dispatcher;
use showcase::errors::AppError;
use showcase::llm_client::{self, LlmClient};
use showcase::models::{ActivityRecord, ActivityType, ChatMessage};
use showcase::post::{apply_quick_edit, format_post, QuickEdit, ToneStyle};

const PROMPT: &str = "> ";
const HELP: &str = "\
Commands:
  /draft <activity> <json record>   render a post locally from a JSON record
  /edit <shorter|longer|more_technical|less_technical>   edit the last draft
  /tone <formal|balanced|narrative>   tone for /draft
  /quit   end the session
Anything else is sent to the assistant.";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    // Logs go to stderr so replies on stdout stay clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Showcase v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let dispatcher = Dispatcher::new(Arc::new(llm));
    run_session(&dispatcher, config.default_tone).await?;

    info!("Session ended");
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Input {
    Quit,
    Help,
    Draft {
        activity: ActivityType,
        record: ActivityRecord,
    },
    Edit(QuickEdit),
    Tone(ToneStyle),
    Chat(String),
}

/// Parses one line of user input. `Err` carries a message for the user.
fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        return Ok(Input::Chat(line.to_string()));
    };
    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map(|(n, r)| (n, r.trim()))
        .unwrap_or((command, ""));

    match name {
        "quit" | "exit" => Ok(Input::Quit),
        "help" => Ok(Input::Help),
        "draft" => {
            let (activity, json) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, "{}"));
            let record: ActivityRecord = serde_json::from_str(json.trim())
                .map_err(|e| format!("Could not read the record as JSON: {e}"))?;
            Ok(Input::Draft {
                activity: ActivityType::lenient(activity),
                record,
            })
        }
        "edit" => rest.parse().map(Input::Edit).map_err(|e| e.to_string()),
        "tone" => rest.parse().map(Input::Tone).map_err(|e| e.to_string()),
        _ => Err(format!("Unknown command '/{name}'. Type /help for commands.")),
    }
}

async fn run_session(dispatcher: &Dispatcher, default_tone: ToneStyle) -> Result<(), AppError> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut history: Vec<ChatMessage> = Vec::new();
    let mut tone = default_tone;
    let mut last_draft: Option<String> = None;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match parse_input(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => HELP.to_string(),
            Ok(Input::Tone(style)) => {
                tone = style;
                format!("Drafts will use the {tone} tone.")
            }
            Ok(Input::Draft { activity, record }) => {
                let draft = format_post(&record, activity, tone);
                if draft.is_ready() {
                    last_draft = Some(draft.text().to_string());
                }
                draft.text().to_string()
            }
            Ok(Input::Edit(edit)) => match last_draft.as_deref() {
                Some(post) => {
                    let edited = apply_quick_edit(post, edit);
                    last_draft = Some(edited.clone());
                    edited
                }
                None => "There is no draft to edit yet. Use /draft first.".to_string(),
            },
            Ok(Input::Chat(message)) => {
                history.push(ChatMessage::user(message));
                match dispatcher.respond(&history).await {
                    Ok(reply) => {
                        history.push(ChatMessage::assistant(reply.clone()));
                        reply
                    }
                    Err(e) => {
                        // Drop the unanswered turn so the user can retry it
                        warn!("Completion failed: {e}");
                        history.pop();
                        format!("Sorry, I couldn't reach the assistant ({e}). Please try again.")
                    }
                }
            }
            Err(message) => message,
        };

        stdout.write_all(reply.as_bytes()).await?;
        stdout.write_all(b"\n\n").await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_chat() {
        assert_eq!(
            parse_input("  help me with my profile "),
            Ok(Input::Chat("help me with my profile".to_string()))
        );
    }

    #[test]
    fn test_quit_and_help() {
        assert_eq!(parse_input("/quit"), Ok(Input::Quit));
        assert_eq!(parse_input("/help"), Ok(Input::Help));
    }

    #[test]
    fn test_draft_reads_activity_and_record() {
        let input = parse_input(r#"/draft hackathon {"event_name": "HackMIT", "tech_stack": ["Rust"]}"#)
            .unwrap();
        let Input::Draft { activity, record } = input else {
            panic!("expected a draft command");
        };
        assert_eq!(activity, ActivityType::Hackathon);
        assert_eq!(record.text("event_name").as_deref(), Some("HackMIT"));
        assert_eq!(record.list("tech_stack"), vec!["Rust".to_string()]);
    }

    #[test]
    fn test_draft_without_record_is_empty() {
        let Ok(Input::Draft { record, .. }) = parse_input("/draft project") else {
            panic!("expected a draft command");
        };
        assert!(record.is_empty());
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = parse_input("/draft hackathon {not json").unwrap_err();
        assert!(err.starts_with("Could not read the record as JSON"));
    }

    #[test]
    fn test_edit_and_tone_parse() {
        assert_eq!(
            parse_input("/edit more technical"),
            Ok(Input::Edit(QuickEdit::MoreTechnical))
        );
        assert_eq!(parse_input("/tone formal"), Ok(Input::Tone(ToneStyle::Formal)));
        assert!(parse_input("/edit funnier").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_input("/dance").unwrap_err().contains("/help"));
    }
}
