//! Data model for extraction results
//!
//! These mirror the JSON shapes served by the extraction backend. Row and
//! analytics maps are `IndexMap`s so the order the backend emitted survives
//! rendering and export.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One uploaded PDF, identified by the integer id the backend assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub filename: String,
}

/// One flat record of named scalar fields (string, number, or null).
///
/// The column set is not declared anywhere; each row carries its own keys
/// in serialization order.
pub type Row = IndexMap<String, Value>;

/// One named, ordered extraction result.
///
/// Row order is fetch order and is preserved verbatim for display and
/// export. The column list is inferred from the first row and frozen for
/// the render pass: later rows with a divergent key set neither widen nor
/// reorder it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl RecordSet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Column list inferred from the first row's key order.
    ///
    /// An empty row sequence yields an empty column list; renderers treat
    /// that as "nothing to show", not as an error.
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Column name as shown in a header cell: underscores become spaces.
/// Purely cosmetic; the underlying key is untouched.
pub fn display_column(name: &str) -> String {
    name.replace('_', " ")
}

/// Per-column numeric summary.
///
/// `None` means the backend could not compute the statistic (non-numeric
/// or empty column). That absence is meaningful and renders as a
/// placeholder, never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

/// Statistics per column of one table, in the order the backend emitted
/// them. Not necessarily the table's own column order.
pub type TableStats = IndexMap<String, ColumnStats>;

/// Statistics per table. Keys are a subset of the document's table names;
/// a table without an entry simply has no analytics.
pub type AnalyticsReport = IndexMap<String, TableStats>;

/// The fully assembled view model for one document.
///
/// Owned by one presenter at a time and replaced wholesale on every load;
/// the renderer never sees a partially filled result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregationResult {
    pub tables: Vec<RecordSet>,
    pub analytics: AnalyticsReport,
    pub full_text: String,
}

// ============================================================================
// Wire shapes
// ============================================================================

/// Entry in the `GET /pdf_ids` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfEntry {
    pub pdf_id: i64,
    pub filename: String,
}

/// Response to `POST /upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub pdf_id: i64,
}

/// Response to `GET /pdf/{id}/tables`.
#[derive(Debug, Clone, Deserialize)]
pub struct TableListResponse {
    pub tables: Vec<String>,
}

/// Response to `GET /analytics/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsResponse {
    pub analytics: TableStats,
}

/// Response to `GET /text/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FullTextResponse {
    pub full_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn columns_follow_first_row_key_order() {
        let table = RecordSet::new(
            "t",
            vec![row(&[
                ("Account", json!("Cash")),
                ("Amount", json!(100)),
                ("Notes", Value::Null),
            ])],
        );

        assert_eq!(table.columns(), vec!["Account", "Amount", "Notes"]);
    }

    #[test]
    fn columns_are_frozen_on_the_first_row() {
        let table = RecordSet::new(
            "t",
            vec![
                row(&[("A", json!(1)), ("B", json!(2))]),
                row(&[("B", json!(3)), ("C", json!(4))]),
            ],
        );

        // The second row's divergent key set must not widen or reorder the
        // inferred column list.
        assert_eq!(table.columns(), vec!["A", "B"]);
    }

    #[test]
    fn empty_rows_yield_empty_columns() {
        let table = RecordSet::new("t", vec![]);
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn display_column_replaces_underscores() {
        assert_eq!(display_column("unit_price_usd"), "unit price usd");
        assert_eq!(display_column("Amount"), "Amount");
    }

    #[test]
    fn rows_decode_in_document_order() {
        let rows: Vec<Row> =
            serde_json::from_str(r#"[{"Zeta":1,"Alpha":"x","Mid":null}]"#).unwrap();

        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(rows[0]["Zeta"], json!(1));
        assert_eq!(rows[0]["Alpha"], json!("x"));
        assert_eq!(rows[0]["Mid"], Value::Null);
    }

    #[test]
    fn analytics_decode_preserves_null_fields() {
        let response: AnalyticsResponse = serde_json::from_str(
            r#"{
                "table": "pdf_table_1_7",
                "analytics": {
                    "Amount": {"min": 10.0, "max": 250.5, "avg": 97.3},
                    "Description": {"min": null, "max": null, "avg": null}
                }
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = response.analytics.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Amount", "Description"]);
        assert_eq!(response.analytics["Amount"].max, Some(250.5));
        assert_eq!(response.analytics["Description"], ColumnStats::default());
    }

    #[test]
    fn pdf_listing_decodes() {
        let entries: Vec<PdfEntry> = serde_json::from_str(
            r#"[{"pdf_id": 1, "filename": "report.pdf"}, {"pdf_id": 2, "filename": "invoice.pdf"}]"#,
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                PdfEntry {
                    pdf_id: 1,
                    filename: "report.pdf".to_string()
                },
                PdfEntry {
                    pdf_id: 2,
                    filename: "invoice.pdf".to_string()
                },
            ]
        );
    }

    #[test]
    fn table_list_and_text_decode() {
        let tables: TableListResponse =
            serde_json::from_str(r#"{"tables": ["pdf_table_1_7", "pdf_table_2_7"]}"#).unwrap();
        assert_eq!(tables.tables.len(), 2);

        let text: FullTextResponse =
            serde_json::from_str(r#"{"full_text": "Quarterly results..."}"#).unwrap();
        assert_eq!(text.full_text, "Quarterly results...");
    }
}
