//! Request and response values exchanged with document renderers.
//!
//! Field names are camelCase on the wire to line up with the preview UI and
//! the server-side renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::fit::{DigitGrouping, NumericValue};
use crate::metrics::GlyphWidthTable;

/// One fitting operation, tagged by `op`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum FitRequest {
    Measure {
        #[serde(default)]
        text: Option<String>,
        #[serde(rename = "fontSize", alias = "font_size")]
        font_size: f64,
    },
    Truncate {
        #[serde(default)]
        text: Option<String>,
        #[serde(rename = "maxWidth", alias = "max_width")]
        max_width: f64,
        #[serde(rename = "fontSize", alias = "font_size")]
        font_size: f64,
    },
    Format {
        #[serde(default)]
        value: NumericValue,
        #[serde(rename = "maxWidth", alias = "max_width")]
        max_width: f64,
        #[serde(rename = "fontSize", alias = "font_size")]
        font_size: f64,
        #[serde(default)]
        grouping: DigitGrouping,
    },
    Wrap {
        #[serde(default)]
        text: Option<String>,
        #[serde(rename = "maxWidth", alias = "max_width")]
        max_width: f64,
        #[serde(rename = "fontSize", alias = "font_size")]
        font_size: f64,
    },
}

impl FitRequest {
    /// Parse a single JSON request.
    pub fn from_json(input: &str) -> Result<Self, String> {
        serde_json::from_str(input).map_err(|e| format!("Invalid request: {}", e))
    }

    pub fn font_size(&self) -> f64 {
        match self {
            FitRequest::Measure { font_size, .. }
            | FitRequest::Truncate { font_size, .. }
            | FitRequest::Format { font_size, .. }
            | FitRequest::Wrap { font_size, .. } => *font_size,
        }
    }
}

/// Outcome of a [`FitRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// The fitted text. For `wrap`, the lines joined with `\n`.
    pub text: String,
    /// Measured width of `text`; the widest line for `wrap`.
    pub width: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
}

/// The width table in a form other renderers can load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableExport {
    pub default_width: f64,
    pub space_width: f64,
    /// Multi-character keys that only apply when measured as a whole.
    pub atomic: BTreeMap<String, f64>,
    pub glyphs: BTreeMap<char, f64>,
}

impl TableExport {
    pub fn from_table(table: &GlyphWidthTable) -> Self {
        let mut atomic = BTreeMap::new();
        atomic.insert(crate::metrics::RS_KEY.to_string(), crate::metrics::RS_WIDTH);
        Self {
            default_width: crate::metrics::DEFAULT_WIDTH,
            space_width: crate::metrics::SPACE_WIDTH,
            atomic,
            glyphs: table.entries().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_truncate_request() {
        let req = FitRequest::from_json(
            r#"{"op":"truncate","text":"Hello","maxWidth":20,"fontSize":10}"#,
        )
        .unwrap();
        assert_eq!(
            req,
            FitRequest::Truncate {
                text: Some("Hello".into()),
                max_width: 20.0,
                font_size: 10.0,
            }
        );
    }

    #[test]
    fn test_snake_case_aliases() {
        let req = FitRequest::from_json(r#"{"op":"measure","text":"a","font_size":12}"#).unwrap();
        assert_eq!(req.font_size(), 12.0);
    }

    #[test]
    fn test_format_request_defaults() {
        let req = FitRequest::from_json(r#"{"op":"format","maxWidth":40,"fontSize":8}"#).unwrap();
        match req {
            FitRequest::Format { value, grouping, .. } => {
                assert_eq!(value, NumericValue::Null);
                assert_eq!(grouping, DigitGrouping::Indian);
            }
            other => panic!("Expected format request, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_op_is_error() {
        let err = FitRequest::from_json(r#"{"op":"render","fontSize":8}"#).unwrap_err();
        assert!(err.starts_with("Invalid request"));
    }

    #[test]
    fn test_table_export_json() {
        let export = TableExport::from_table(GlyphWidthTable::get());
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["defaultWidth"], serde_json::json!(0.556));
        assert_eq!(json["atomic"]["Rs"], serde_json::json!(0.889));
        assert_eq!(json["glyphs"]["H"], serde_json::json!(0.722));
    }
}
