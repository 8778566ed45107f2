use anyhow::{Context, Result};

use crate::auth::{ClientCredentials, TokenClient};
use crate::config::Endpoints;
use crate::input::InputReader;
use crate::report::RoundTripReport;
use crate::translation::{TranslationClient, TranslationRequest};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub from: String,
    pub to: String,
    pub text: String,
    pub json: bool,
    pub round_trip: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let text = resolve_text(&options)?;

    let endpoints = Endpoints::from_env();
    let credentials = ClientCredentials::from_env();

    let spinner = Spinner::start("Authenticating...");
    let token = TokenClient::new(endpoints.token_url)
        .obtain(&credentials)
        .await
        .context("Failed to obtain access token")?;
    spinner.finish();

    let client = TranslationClient::new(endpoints.translate_url);

    let spinner = Spinner::start("Translating...");
    let forward = TranslationRequest::new(&options.from, &options.to, &text);
    let translated = client
        .translate(&forward, &token)
        .await
        .context("Translation failed")?;
    spinner.finish();

    if !(options.round_trip || options.json) {
        println!("{translated}");
        return Ok(());
    }

    // Same token, reversed language pair, translated text as input.
    let spinner = Spinner::start("Translating back...");
    let reverse = TranslationRequest::new(&options.to, &options.from, &translated);
    let round_tripped = client
        .translate(&reverse, &token)
        .await
        .context("Reverse translation failed")?;
    spinner.finish();

    if !options.json {
        println!("{round_tripped}");
        return Ok(());
    }

    let report = RoundTripReport {
        from: options.from,
        to: options.to,
        original: text,
        translated,
        round_tripped,
    };
    println!("{}", report.to_json_line()?);

    Ok(())
}

fn resolve_text(options: &TranslateOptions) -> Result<String> {
    if options.text.is_empty() {
        InputReader::read_stdin()
    } else {
        Ok(options.text.clone())
    }
}
