//! HTTP client for the cPanel API 2 ZoneEdit module.
//!
//! This crate provides the [`CpanelClient`] used to fetch, add, edit and
//! remove zone records, and [`CredentialsFile`] for loading the API token
//! from `~/.cpanel/config`.

#![doc(html_root_url = "https://docs.rs/cpanel-client/1.0.1")]

mod client;
mod config;
mod envelope;
pub mod api;

pub use client::{CpanelClient, CpanelClientBuilder};
pub use config::*;
pub use cpanel_core::{CpanelError, Result};
