//! Core types and traits for cPanel ZoneEdit DNS-01 automation.
//!
//! This crate provides the foundational types shared by the client and the
//! challenge reconciler:
//!
//! - **Types**: zone records, credentials and challenge requests
//! - **Errors**: every remote or configuration failure as a [`CpanelError`]
//! - **Traits**: [`ZoneEditor`], the four zone operations the reconciler needs
//!
//! # Example
//!
//! ```rust,ignore
//! use cpanel_core::{ChallengeRequest, FetchedRecords, RecordFilter, ZoneEditor, Result};
//!
//! async fn current_value(editor: &impl ZoneEditor, request: &ChallengeRequest) -> Result<Option<String>> {
//!     let filter = RecordFilter::txt(request.record_fqdn());
//!     let found = editor.fetch_records(request.zone(), &filter).await?;
//!     Ok(found.into_single().map(|record| record.data))
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/cpanel-core/1.0.1")]

mod editor;
mod error;
pub mod types;

pub use editor::ZoneEditor;
pub use error::{CpanelError, Result};
pub use types::*;
