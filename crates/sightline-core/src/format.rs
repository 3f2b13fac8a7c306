//! Chart data formatter
//!
//! Turns a [`ChartData`] value into the plain-text block embedded in every
//! prompt. Pure and deterministic; never fails.

use crate::models::ChartData;

/// Render chart data as a human-readable text block for the model prompt
///
/// Emits the comma-joined category and measure arrays, then an enumerated
/// list of the raw rows with missing fields substituted per the
/// [`DataPoint`](crate::models::DataPoint) defaulting accessors. No escaping
/// is performed; this is plain text, not a structured format.
pub fn format_chart_data(data: &ChartData) -> String {
    let mut formatted = String::from("Data Analysis Request:\n\n");

    formatted.push_str(&format!(
        "Category 1 Values: {}\n",
        data.category1_data.join(", ")
    ));
    formatted.push_str(&format!(
        "Category 2 Values: {}\n",
        data.category2_data.join(", ")
    ));
    if !data.measure_names.is_empty() {
        formatted.push_str(&format!(
            "Measure Names: {}\n",
            data.measure_names.join(", ")
        ));
    }
    let measures = data
        .measures_data
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    formatted.push_str(&format!("Measure Values: {}\n\n", measures));

    formatted.push_str("Detailed Data Points:\n");
    for (i, point) in data.raw_data.iter().enumerate() {
        formatted.push_str(&format!(
            "{}. Category 1: {}, Category 2: {}, {}: {}\n",
            i + 1,
            point.category1_label(),
            point.category2_label(),
            point.measure_label(),
            point.measure_value(),
        ));
    }

    formatted
}
