//! Result reporter: flattens an [`ExecutionResult`] into ordered key/value
//! pairs for display and export, and reads the output back.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ReportError;
use crate::harness::ExecutionResult;
use crate::value::Output;

/// Keys of a formatted report, in order.
pub const FIELDS: [&str; 8] = [
    "id",
    "category",
    "outcome",
    "output",
    "duration_ns",
    "operations",
    "stage",
    "error",
];

/// Ordered key/value rendering of one execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    fields: Vec<(String, String)>,
}

impl Report {
    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    fn push(&mut self, key: &str, value: impl Into<String>) {
        self.fields.push((key.to_string(), value.into()));
    }

    /// One CSV line with the values in field order.
    pub fn to_csv_row(&self) -> String {
        self.fields
            .iter()
            .map(|(_, value)| csv_escape(value))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// CSV header matching [`Report::to_csv_row`].
pub fn csv_header() -> String {
    FIELDS.join(",")
}

fn csv_escape(value: &str) -> String {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render `result` as a report. Output is JSON text, empty on failure; stage
/// and error are empty on success.
pub fn format(result: &ExecutionResult) -> Report {
    let mut report = Report::default();
    report.push("id", result.id.as_str());
    report.push("category", result.category.slug());
    report.push("outcome", if result.is_success() { "success" } else { "failure" });
    report.push(
        "output",
        result
            .output()
            .and_then(|output| serde_json::to_string(output).ok())
            .unwrap_or_default(),
    );
    report.push("duration_ns", result.elapsed.as_nanos().to_string());
    report.push("operations", result.operations.to_string());
    report.push(
        "stage",
        result.failure().map(|f| f.stage.as_str()).unwrap_or_default(),
    );
    report.push("error", result.error().unwrap_or_default());
    report
}

/// Parse the output of a formatted report back into an [`Output`].
///
/// `Ok(None)` for a failed run.
pub fn import_output(report: &Report) -> Result<Option<Output>, ReportError> {
    let outcome = report
        .get("outcome")
        .ok_or(ReportError::MissingField("outcome"))?;
    if outcome != "success" {
        return Ok(None);
    }
    let text = report
        .get("output")
        .ok_or(ReportError::MissingField("output"))?;
    Ok(Some(serde_json::from_str(text)?))
}

/// Reports of every run in a session, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    reports: Vec<Report>,
}

impl History {
    /// Format `result` and append it.
    pub fn record(&mut self, result: &ExecutionResult) -> &Report {
        self.push(format(result))
    }

    /// Append an already formatted report.
    pub fn push(&mut self, report: Report) -> &Report {
        self.reports.push(report);
        &self.reports[self.reports.len() - 1]
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Report> {
        self.reports.iter()
    }

    pub fn last(&self) -> Option<&Report> {
        self.reports.last()
    }

    /// Reports of the runs of unit `id`.
    pub fn for_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Report> + 'a {
        self.reports.iter().filter(move |r| r.get("id") == Some(id))
    }

    /// Number of successful runs.
    pub fn successes(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.get("outcome") == Some("success"))
            .count()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Report;
    type IntoIter = std::slice::Iter<'a, Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.fields {
            writeln!(f, "{:>12}: {}", key, value)?;
        }
        Ok(())
    }
}

// Serialized as a JSON object whose keys keep report order.
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = Report;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of report fields to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Report, A::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(FIELDS.len()));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    fields.push(entry);
                }
                Ok(Report { fields })
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}
