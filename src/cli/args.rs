use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "btranslate")]
#[command(about = "Round-trip translation CLI for the Microsoft Translator API")]
#[command(version)]
pub struct Args {
    /// Language code of the text to translate
    #[arg(short = 'f', long, default_value = "ja")]
    pub from: String,

    /// Language code to translate the text to
    #[arg(short = 't', long, default_value = "en")]
    pub to: String,

    /// Text to translate (reads from stdin if omitted)
    #[arg(short = 'x', long, default_value = "")]
    pub text: String,

    /// Emit a JSON round-trip report (implies --round-trip)
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Also translate the result back to the source language
    #[arg(short = 'r', long, alias = "round_trip")]
    pub round_trip: bool,
}
