use anyhow::{Result, bail};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Extracts the character content of the root element of an XML document.
///
/// The translation endpoint wraps its result as
/// `<string xmlns="...">translated text</string>`; only text directly under
/// the root is collected, so markup nested inside the root is skipped along
/// with its content.
pub fn parse_string_payload(body: &str) -> Result<String> {
    let mut reader = Reader::from_str(body);

    let mut depth: usize = 0;
    let mut content = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::Empty(_) => {
                if depth == 0 {
                    // Self-closing root, e.g. `<string/>`.
                    return Ok(String::new());
                }
            }
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(content);
                }
            }
            Event::Text(text) if depth == 1 => content.push_str(&text.unescape()?),
            Event::CData(cdata) if depth == 1 => {
                content.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
            }
            Event::Eof => bail!("response body contains no XML element"),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parses_namespaced_string_payload() {
        let body = r#"<string xmlns="http://schemas.microsoft.com/2003/10/Serialization/">Bonjour</string>"#;
        assert_eq!(parse_string_payload(body).unwrap(), "Bonjour");
    }

    #[test]
    fn test_unescapes_entities() {
        let body = "<string>fish &amp; chips</string>";
        assert_eq!(parse_string_payload(body).unwrap(), "fish & chips");
    }

    #[test]
    fn test_preserves_interior_whitespace_and_newlines() {
        let body = "<string>line one\nline two </string>";
        assert_eq!(parse_string_payload(body).unwrap(), "line one\nline two ");
    }

    #[test]
    fn test_empty_element_yields_empty_string() {
        assert_eq!(parse_string_payload("<string></string>").unwrap(), "");
        assert_eq!(parse_string_payload("<string/>").unwrap(), "");
    }

    #[test]
    fn test_skips_nested_markup() {
        let body = "<a>be<c>d</c>fore</a>";
        assert_eq!(parse_string_payload(body).unwrap(), "before");
    }

    #[test]
    fn test_accepts_xml_declaration() {
        let body = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<string>hi</string>";
        assert_eq!(parse_string_payload(body).unwrap(), "hi");
    }

    #[test]
    fn test_rejects_plain_text_body() {
        let result = parse_string_payload("503 Service Unavailable");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_body() {
        assert!(parse_string_payload("").is_err());
    }

    #[test]
    fn test_rejects_truncated_document() {
        assert!(parse_string_payload("<string>Bonjou").is_err());
    }
}
