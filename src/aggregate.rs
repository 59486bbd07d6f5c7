//! Client-side aggregation of one document's extraction results
//!
//! One document view is assembled from several dependent fetches: the
//! table-name list, then rows and analytics for each table, then the full
//! document text. The chain is strictly sequential and fail-fast: the
//! first failure aborts the remaining steps and no partial result is ever
//! surfaced to a caller.

use indexmap::IndexMap;
use tracing::{debug, error};

use crate::api::{ApiError, DocumentApi};
use crate::types::{AggregationResult, AnalyticsReport, RecordSet};

/// Which step of an aggregation failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("failed to fetch the table list: {0}")]
    ListFetch(#[source] ApiError),

    #[error("failed to fetch rows for table `{table}`: {source}")]
    TableFetch {
        table: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to fetch analytics for table `{table}`: {source}")]
    AnalyticsFetch {
        table: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to fetch the document text: {0}")]
    TextFetch(#[source] ApiError),
}

/// Fetch and assemble everything the document view needs.
///
/// The returned table sequence preserves the server-declared name order;
/// duplicate names in that list are carried through untouched. Analytics
/// entries are inserted only when the table's analytics fetch succeeded,
/// which under the fail-fast policy means a returned result covers every
/// listed table.
///
/// No caching: calling this again for the same id repeats every fetch.
pub async fn load_for_document(
    api: &impl DocumentApi,
    pdf_id: i64,
) -> Result<AggregationResult, AggregateError> {
    debug!(pdf_id, "loading document");

    let names = api.table_names(pdf_id).await.map_err(|e| {
        error!(pdf_id, error = %e, "table list fetch failed");
        AggregateError::ListFetch(e)
    })?;

    let mut tables = Vec::with_capacity(names.len());
    let mut analytics: AnalyticsReport = IndexMap::new();

    for name in names {
        let rows = api.table_rows(&name).await.map_err(|e| {
            error!(table = %name, error = %e, "row fetch failed");
            AggregateError::TableFetch {
                table: name.clone(),
                source: e,
            }
        })?;

        let stats = api.table_analytics(&name).await.map_err(|e| {
            error!(table = %name, error = %e, "analytics fetch failed");
            AggregateError::AnalyticsFetch {
                table: name.clone(),
                source: e,
            }
        })?;

        analytics.insert(name.clone(), stats);
        tables.push(RecordSet::new(name, rows));
    }

    let full_text = api.full_text(pdf_id).await.map_err(|e| {
        error!(pdf_id, error = %e, "text fetch failed");
        AggregateError::TextFetch(e)
    })?;

    debug!(pdf_id, tables = tables.len(), "document loaded");

    Ok(AggregationResult {
        tables,
        analytics,
        full_text,
    })
}
