//! Request/response shapes for the insight API
//!
//! Wire field names follow the Power BI visual's camelCase JSON. All values
//! live for a single request; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// One raw row from the visual's data view
///
/// Rows are open-ended: the visual sends whatever fields the chart binds,
/// and the known fields may be absent on any given row. Unknown keys are
/// kept in `extra` so payloads deserialize losslessly. The defaulting
/// accessors are the formatter's missing-field contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure_name: Option<String>,
    /// Any additional fields the visual attached to this row
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DataPoint {
    /// First category label, or `N/A` when the row has none
    pub fn category1_label(&self) -> &str {
        self.category1.as_deref().unwrap_or("N/A")
    }

    /// Second category label, or `N/A` when the row has none
    pub fn category2_label(&self) -> &str {
        self.category2.as_deref().unwrap_or("N/A")
    }

    /// Measure display name, or `Measure` when the row has none
    pub fn measure_label(&self) -> &str {
        self.measure_name.as_deref().unwrap_or("Measure")
    }

    /// Measure value, or `0` when the row has none
    pub fn measure_value(&self) -> f64 {
        self.measure.unwrap_or(0.0)
    }
}

/// Categorical/numeric payload describing one chart's data
///
/// The category arrays, measure values, and raw rows are independently
/// sized; no cardinality match is enforced between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub category1_data: Vec<String>,
    pub category2_data: Vec<String>,
    pub measures_data: Vec<f64>,
    /// Optional on the wire; missing means no named measures
    #[serde(default)]
    pub measure_names: Vec<String>,
    pub raw_data: Vec<DataPoint>,
}

/// Inbound request: chart data plus the questions to answer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub data: ChartData,
    pub questions: Vec<String>,
    /// Declared by the visual; not validated against `questions.len()`,
    /// accepted for compatibility and used only in diagnostics
    pub number_of_questions: usize,
}

/// One question/answer pair in the response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    /// 1-based position of the question in the request
    pub id: usize,
    pub question: String,
    pub answer: String,
}

/// Ordered per-question outcomes, same order as submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightResponse {
    pub insights: Vec<Insight>,
}
