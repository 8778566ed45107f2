use anyhow::Result;
use clap::Parser;

use btranslate::cli::Args;
use btranslate::cli::commands::translate::{self, TranslateOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let options = TranslateOptions {
        from: args.from,
        to: args.to,
        text: args.text,
        json: args.json,
        round_trip: args.round_trip,
    };
    translate::run_translate(options).await
}
