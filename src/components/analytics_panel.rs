//! Per-table analytics renderer

use dioxus::prelude::*;

use crate::types::{display_column, TableStats};

/// Placeholder shown for statistics the backend could not compute.
const PLACEHOLDER: &str = "\u{2014}"; // —

#[derive(Props, Clone, PartialEq)]
pub struct AnalyticsPanelProps {
    pub stats: TableStats,
}

/// Min/max/avg per column, one row per column key.
///
/// Rows follow the analytics map's own insertion order, which is not
/// necessarily the table's column order.
#[component]
pub fn AnalyticsPanel(props: AnalyticsPanelProps) -> Element {
    if props.stats.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "analytics-card",
            h4 { "Column statistics" }
            table {
                thead {
                    tr {
                        th { "Column" }
                        th { "Min" }
                        th { "Max" }
                        th { "Avg" }
                    }
                }
                tbody {
                    for (column, stats) in props.stats.iter() {
                        tr {
                            td { class: "stat-column", {display_column(column)} }
                            td { {stat_text(stats.min)} }
                            td { {stat_text(stats.max)} }
                            td { {stat_text(stats.avg)} }
                        }
                    }
                }
            }
        }
    }
}

/// A missing statistic shows the placeholder glyph, never `0`.
fn stat_text(value: Option<f64>) -> String {
    match value {
        Some(number) => number.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}
