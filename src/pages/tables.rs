//! Document view: aggregated tables, analytics, and full text

use dioxus::prelude::*;

use crate::aggregate;
use crate::api::RestClient;
use crate::components::{AnalyticsPanel, DynamicTable, LoadingSpinner};
use crate::routes::Route;
use crate::state::{LoadState, Presenter};

/// Document view - owns one [`Presenter`] and drives the aggregation for
/// the routed document id.
///
/// The load task is scoped to this component, and completions are epoch
/// checked, so navigating away mid-load cannot resurface stale data.
#[component]
pub fn DocumentTables(pdf_id: i64) -> Element {
    let mut presenter = use_signal(Presenter::new);

    let start_load = move || {
        let epoch = presenter.write().request();
        spawn(async move {
            let api = RestClient::configured();
            let outcome = aggregate::load_for_document(&api, pdf_id).await;
            presenter.write().complete(epoch, pdf_id, outcome);
        });
    };

    use_effect(move || {
        let mut start_load = start_load;
        start_load()
    });

    let view = presenter.read();
    let mode = view.view_mode();

    let body = if let Some(result) = view.result() {
        rsx! {
            if result.tables.is_empty() {
                p { class: "empty", "No tables found." }
            }

            for (idx, table) in result.tables.iter().enumerate() {
                section {
                    key: "{idx}",
                    class: "table-section",
                    h3 { class: "table-name", "{table.name}" }
                    DynamicTable {
                        table: table.clone(),
                        mode: mode,
                        on_mode_change: move |m| presenter.write().set_view_mode(m),
                    }
                    if let Some(stats) = result.analytics.get(&table.name) {
                        AnalyticsPanel { stats: stats.clone() }
                    }
                }
            }

            section {
                class: "text-section",
                h3 { "Extracted text" }
                pre { class: "full-text", "{result.full_text}" }
            }
        }
    } else if let LoadState::Failed { error, .. } = view.state() {
        rsx! {
            div {
                class: "error-banner",
                p { "Loading this document failed." }
                p { class: "error-detail", "{error}" }
                button {
                    class: "btn",
                    onclick: move |_| {
                        let mut start_load = start_load;
                        start_load()
                    },
                    "Try again"
                }
            }
        }
    } else {
        // Idle or Loading: nothing is exposed yet.
        rsx! {
            LoadingSpinner {}
        }
    };

    rsx! {
        div {
            class: "page wide",
            Link { to: Route::History {}, class: "back-link", "\u{2190} All PDFs" }
            h2 { "Extracted data (PDF #{pdf_id})" }

            {body}
        }
    }
}
