#![forbid(unsafe_code)]

//! JSON output for machine consumption
//!
//! The `json` command prints the bare hotword array; `export` wraps it in a
//! document carrying the export time and entry count. Both are pretty-printed
//! so diffs against earlier exports stay readable.

use crate::error::Error;
use crate::hotwords::{ExportDocument, Hotword};

/// The hotword list as a pretty-printed JSON array
pub fn hotwords_json(hotwords: &[Hotword]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(hotwords)?)
}

/// A full export document as pretty-printed JSON
pub fn export_json(document: &ExportDocument) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(trigger: &str, text: &str) -> Hotword {
        Hotword {
            hw_id: "1".to_string(),
            key: trigger.to_string(),
            text: text.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_hotwords_json_is_an_array() {
        let json = hotwords_json(&[sample("sig", "Best regards")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["key"], "sig");
        assert_eq!(value[0]["text"], "Best regards");
    }

    #[test]
    fn test_hotwords_json_empty_list() {
        let json = hotwords_json(&[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn test_hotwords_json_keeps_unicode_unescaped() {
        let json = hotwords_json(&[sample("签名", "此致敬礼")]).unwrap();
        assert!(json.contains("签名"));
        assert!(json.contains("此致敬礼"));
    }

    #[test]
    fn test_export_json_document_shape() {
        let doc = ExportDocument::new(vec![sample("sig", "hi")]);
        let json = export_json(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 1);
        assert!(value["exported_at"].is_u64());
        assert!(value["hotwords"].is_array());
    }
}
