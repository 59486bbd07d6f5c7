//! Schema-less table renderer

use dioxus::prelude::*;
use serde_json::Value;

use crate::export;
use crate::state::ViewMode;
use crate::types::{display_column, RecordSet};

#[derive(Props, Clone, PartialEq)]
pub struct DynamicTableProps {
    pub table: RecordSet,
    pub mode: ViewMode,
    pub on_mode_change: EventHandler<ViewMode>,
}

/// Renders one extracted table in the selected projection.
///
/// The header comes from the frozen first-row column snapshot
/// ([`RecordSet::columns`]): rows with extra keys show only the snapshot
/// columns, rows missing a key get a blank cell. Both projections present
/// the identical row sequence; the JSON view uses the same serialization
/// as the export artifact. An empty table renders nothing.
#[component]
pub fn DynamicTable(props: DynamicTableProps) -> Element {
    let table = &props.table;
    if table.is_empty() {
        return rsx! {};
    }

    let columns: Vec<String> = table.columns().iter().map(|c| c.to_string()).collect();

    let handle_export = {
        let table = table.clone();
        move |_| {
            if let Err(err) = export_table(&table) {
                tracing::error!(table = %table.name, error = %err, "export failed");
            }
        }
    };

    let body = match props.mode {
        ViewMode::Table => rsx! {
            div {
                class: "table-scroll",
                table {
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { {display_column(column)} }
                            }
                        }
                    }
                    tbody {
                        for row in table.rows.iter() {
                            tr {
                                for column in columns.iter() {
                                    td { {cell_text(row.get(column.as_str()))} }
                                }
                            }
                        }
                    }
                }
            }
        },
        ViewMode::Json => {
            let json_text = export::rows_json(&table.rows).unwrap_or_default();
            rsx! {
                pre { class: "json-view", "{json_text}" }
            }
        }
    };

    rsx! {
        div {
            class: "table-card",

            div {
                class: "table-toolbar",
                div {
                    class: "mode-toggle",
                    for mode in ViewMode::variants().iter().copied() {
                        button {
                            class: if props.mode == mode { "toggle-btn active" } else { "toggle-btn" },
                            onclick: move |_| props.on_mode_change.call(mode),
                            {mode.label()}
                        }
                    }
                }
                button {
                    class: "export-btn",
                    onclick: handle_export,
                    "Export"
                }
            }

            {body}
        }
    }
}

/// Cell text for one column of one row. Missing keys and JSON nulls both
/// render as an empty cell.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(feature = "web")]
fn export_table(table: &RecordSet) -> Result<(), export::ExportError> {
    export::download(&table.name, &table.rows)
}

#[cfg(not(feature = "web"))]
fn export_table(table: &RecordSet) -> Result<(), export::ExportError> {
    // No browser to hand an artifact to; serialization failures still surface.
    export::rows_json(&table.rows).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_text_renders_scalars_and_blanks() {
        assert_eq!(cell_text(Some(&json!("Cash"))), "Cash");
        assert_eq!(cell_text(Some(&json!(100))), "100");
        assert_eq!(cell_text(Some(&json!(12.5))), "12.5");
        assert_eq!(cell_text(Some(&Value::Null)), "");
        assert_eq!(cell_text(None), "");
    }
}
