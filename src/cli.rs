//! Terminal front end: pick languages, translate text, find a language.

use crate::config::Config;
use crate::i18n::{Language, LanguageRegistry};
use crate::search::search_message;
use crate::translation::{TranslationClient, TranslationRequest};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "quick-translate")]
#[command(version)]
#[command(about = "Translate text between languages through a hosted translation API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate text (read from stdin when TEXT is omitted)
    Translate {
        /// Source language display name
        #[arg(short, long, default_value = "Automatic", value_parser = parse_language)]
        from: Language,

        /// Target language display name
        #[arg(short, long, default_value = "English", value_parser = parse_language)]
        to: Language,

        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Find languages whose name contains TERM (prompted when omitted)
    Search {
        #[arg(value_name = "TERM")]
        term: Option<String>,
    },

    /// List supported languages
    Languages,
}

/// Only names from the registry are accepted, so code lookup cannot fail later.
fn parse_language(name: &str) -> Result<Language, String> {
    Language::from_name(name).map_err(|e| {
        let names: Vec<_> = LanguageRegistry::get()
            .sorted_by_name()
            .iter()
            .map(|lang| lang.name)
            .collect();
        format!("{} (expected one of: {})", e, names.join(", "))
    })
}

/// One `code  name` line per language, sorted by name
pub fn languages_listing() -> String {
    LanguageRegistry::get()
        .sorted_by_name()
        .iter()
        .map(|lang| format!("{:<5} {}", lang.code, lang.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Translate { from, to, text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let input = io::read_to_string(io::stdin())
                        .context("Failed to read text from stdin")?;
                    strip_line_ending(&input).to_string()
                }
            };
            run_translate(from, to, text).await
        }
        Commands::Search { term } => {
            let term = match term {
                Some(term) => term,
                None => prompt("Enter language name to search: ")?,
            };
            if let Some(message) = search_message(&term) {
                println!("{}", message);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Languages => {
            println!("{}", languages_listing());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Result of a translate command: the translation, or the single failure line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateOutcome {
    Translated(String),
    Failed(String),
}

impl TranslateOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, TranslateOutcome::Failed(_))
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Translations go to `out`, failures to `err`
    pub fn write_to(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        match self {
            TranslateOutcome::Translated(text) => writeln!(out, "{}", text),
            TranslateOutcome::Failed(message) => writeln!(err, "{}", message),
        }
    }
}

/// Send one request and turn the result into what the shell shows
pub async fn translate_outcome(
    client: &TranslationClient,
    request: &TranslationRequest,
) -> TranslateOutcome {
    match client.translate(request).await {
        Ok(translated) => TranslateOutcome::Translated(translated),
        Err(e) => TranslateOutcome::Failed(e.user_message()),
    }
}

async fn run_translate(from: Language, to: Language, text: String) -> Result<ExitCode> {
    let outcome = match TranslationRequest::new(from, to, text) {
        Ok(request) => {
            let config = Config::from_env()?;
            debug!("Loaded config: {:?}", config);
            let client = TranslationClient::new(&config)?;
            translate_outcome(&client, &request).await
        }
        Err(e) => TranslateOutcome::Failed(e.user_message()),
    };

    outcome.write_to(&mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(outcome.exit_code())
}

/// Drop one trailing `\n` or `\r\n`
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}

/// Ask on stderr so stdout only carries results
fn prompt(question: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", question)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read search term")?;
    Ok(strip_line_ending(&line).to_string())
}
