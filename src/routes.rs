//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{DocumentTables, History, Home, Upload};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/upload")]
    Upload {},

    #[route("/history")]
    History {},

    #[route("/pdf/:pdf_id/tables")]
    DocumentTables { pdf_id: i64 },
}
