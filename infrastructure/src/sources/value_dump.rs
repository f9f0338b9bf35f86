//! Value dump parser
//!
//! The provisioning tool prints one `KEY="VALUE"` entry per line. Values are
//! taken verbatim: only the surrounding double quotes are removed, nothing
//! inside them is unescaped.

use materializer_domain::EnvValueSet;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("value dump pattern is valid")
});

/// Parse a value dump into a value set
///
/// Lines that are not entries are skipped. When a key repeats, the first
/// entry wins.
pub fn parse_value_dump(text: &str) -> EnvValueSet {
    let mut values = EnvValueSet::new();

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        let Some(caps) = ENTRY.captures(line) else {
            if !line.trim().is_empty() {
                trace!("Skipping non-entry line: {}", line);
            }
            continue;
        };

        let key = &caps[1];
        let value = strip_quotes(caps[2].trim_end());
        if !values.insert_first(key, value) {
            trace!("Ignoring repeated key {}", key);
        }
    }

    values
}

fn strip_quotes(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"AZURE_ENV_NAME="dev"
AZURE_LOCATION="eastus2"
AZURE_OPENAI_ENDPOINT="https://y.openai.azure.com/"
COSMOSDB_CONTAINER_NAME="medical_records"
COSMOSDB_DATABASE_NAME="medicaldata"
COSMOS_ENDPOINT="https://x.documents.azure.com:443/"
"#;

    #[test]
    fn test_parses_azd_dump() {
        let values = parse_value_dump(DUMP);
        assert_eq!(values.len(), 6);
        assert_eq!(
            values.get("COSMOS_ENDPOINT"),
            Some("https://x.documents.azure.com:443/")
        );
        assert_eq!(values.get("COSMOSDB_DATABASE_NAME"), Some("medicaldata"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let values = parse_value_dump("COSMOS_ENDPOINT=\"https://x/\"\r\nAZURE_OPENAI_ENDPOINT=\"https://y/\"\r\n");
        assert_eq!(values.get("COSMOS_ENDPOINT"), Some("https://x/"));
        assert_eq!(values.get("AZURE_OPENAI_ENDPOINT"), Some("https://y/"));
    }

    #[test]
    fn test_first_match_wins() {
        let values = parse_value_dump("COSMOS_ENDPOINT=\"first\"\nCOSMOS_ENDPOINT=\"second\"\n");
        assert_eq!(values.get("COSMOS_ENDPOINT"), Some("first"));
    }

    #[test]
    fn test_only_outer_quotes_are_removed() {
        let values = parse_value_dump(r#"A=" padded "
B="say \"hi\""
C=unquoted
D=""
E="
"#);
        assert_eq!(values.get("A"), Some(" padded "));
        assert_eq!(values.get("B"), Some(r#"say \"hi\""#));
        assert_eq!(values.get("C"), Some("unquoted"));
        assert_eq!(values.get("D"), Some(""));
        assert_eq!(values.get("E"), Some("\""));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let values = parse_value_dump("CONN=\"AccountEndpoint=https://x/;Key=abc==\"\n");
        assert_eq!(values.get("CONN"), Some("AccountEndpoint=https://x/;Key=abc=="));
    }

    #[test]
    fn test_skips_noise_lines() {
        let text = "\nWARNING: newer version available\n  COSMOS_ENDPOINT=\"https://x/\"\n# comment\n";
        let values = parse_value_dump(text);
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("COSMOS_ENDPOINT"), Some("https://x/"));
    }

    #[test]
    fn test_key_match_is_exact() {
        let values = parse_value_dump("MY_COSMOS_ENDPOINT=\"nope\"\n");
        assert_eq!(values.get("COSMOS_ENDPOINT"), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_value_dump("").is_empty());
    }
}
