//! Narrative extraction from analysis backend responses.
//!
//! The backend embeds the generated narrative in its JSON response bodies
//! under a field whose name depends on the endpoint. A missing or non-string
//! field means "nothing to render", never an error; only a body that is not
//! JSON at all fails.

use crate::error::Result;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Where a narrative lives inside a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeField {
    /// `llm_analysis.analysis` on a region analysis response
    LlmAnalysis,
    /// `analysis.comparative_analysis` on a region comparison response
    NestedComparison,
    /// Top-level `comparative_analysis` on a bare comparison result
    ComparativeAnalysis,
    /// Top-level `analysis` on a bare analysis result
    Analysis,
}

impl NarrativeField {
    /// Lookup order used by [`narrative_from_value`].
    pub const SEARCH_ORDER: [NarrativeField; 4] = [
        NarrativeField::LlmAnalysis,
        NarrativeField::NestedComparison,
        NarrativeField::ComparativeAnalysis,
        NarrativeField::Analysis,
    ];

    /// JSON pointer to the field.
    pub fn pointer(self) -> &'static str {
        match self {
            NarrativeField::LlmAnalysis => "/llm_analysis/analysis",
            NarrativeField::NestedComparison => "/analysis/comparative_analysis",
            NarrativeField::ComparativeAnalysis => "/comparative_analysis",
            NarrativeField::Analysis => "/analysis",
        }
    }
}

/// Get the narrative at a specific field, if it is a string.
pub fn narrative_at(body: &Value, field: NarrativeField) -> Option<&str> {
    body.pointer(field.pointer()).and_then(Value::as_str)
}

/// Find the narrative in a response body, trying each known field in turn.
///
/// # Example
///
/// ```
/// use narrative_outline::input::narrative_from_value;
/// use serde_json::json;
///
/// let body = json!({"msa_name": "Denver", "llm_analysis": {"analysis": "1. Recommendations: Act"}});
/// assert_eq!(narrative_from_value(&body), Some("1. Recommendations: Act"));
///
/// let body = json!({"msa_name": "Denver", "llm_analysis": {"analysis": null}});
/// assert_eq!(narrative_from_value(&body), None);
/// ```
pub fn narrative_from_value(body: &Value) -> Option<&str> {
    NarrativeField::SEARCH_ORDER
        .into_iter()
        .find_map(|field| narrative_at(body, field))
}

/// Decode a response body and find its narrative.
///
/// Returns `Ok(None)` when the body is valid JSON without a narrative.
pub fn narrative_from_json(body: &str) -> Result<Option<String>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(narrative_from_value(&value).map(str::to_owned))
}

/// Response body of a single-region analysis request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Region name
    #[serde(default)]
    pub msa_name: String,

    /// Server timestamp, as sent
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Precomputed regional statistics (opaque to this crate)
    #[serde(default)]
    pub health_metrics: Value,

    /// Generated narrative, when requested and available
    #[serde(default)]
    pub llm_analysis: Option<LlmAnalysis>,
}

impl AnalysisResponse {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The narrative, if present.
    pub fn narrative(&self) -> Option<&str> {
        self.llm_analysis.as_ref()?.analysis.as_deref()
    }

    /// Parsed server timestamp.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }
}

/// Generated narrative for one region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmAnalysis {
    /// Region name
    #[serde(default)]
    pub msa_name: String,

    /// Narrative text
    #[serde(default, deserialize_with = "lenient_string")]
    pub analysis: Option<String>,

    /// Risk profile the narrative was generated from (opaque to this crate)
    #[serde(default)]
    pub source_data: Value,

    /// Generation timestamp, as sent
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Response body of a region comparison request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonResponse {
    /// Region the others are compared against
    #[serde(default)]
    pub base_msa: String,

    /// Regions compared against the base
    #[serde(default)]
    pub compared_msas: Vec<String>,

    /// Server timestamp, as sent
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Precomputed statistics per region (opaque to this crate)
    #[serde(default)]
    pub profiles: Value,

    /// Generated comparison, when available
    #[serde(default)]
    pub analysis: Option<ComparativeAnalysis>,
}

impl ComparisonResponse {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The comparison narrative, if present.
    pub fn narrative(&self) -> Option<&str> {
        self.analysis.as_ref()?.comparative_analysis.as_deref()
    }

    /// Parsed server timestamp.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }
}

/// Generated comparison narrative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparativeAnalysis {
    /// Region the others are compared against
    #[serde(default)]
    pub base_region: String,

    /// Narrative text
    #[serde(default, deserialize_with = "lenient_string")]
    pub comparative_analysis: Option<String>,

    /// Regions that had data
    #[serde(default)]
    pub regions_compared: Vec<String>,

    /// Generation timestamp, as sent
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Accept any JSON value; keep it only if it is a string.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Parse an ISO-8601 timestamp with or without offset.
///
/// Offset-carrying timestamps are converted to their UTC wall-clock time.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
}
