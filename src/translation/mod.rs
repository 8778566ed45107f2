mod client;
mod xml;

pub use client::{TranslationClient, TranslationRequest};
pub use xml::parse_string_payload;
