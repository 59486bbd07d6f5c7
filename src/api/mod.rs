//! REST client for communicating with the extraction backend

mod client;

pub use client::*;
