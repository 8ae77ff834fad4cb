//! API module wrappers.

mod zone_edit;

pub use zone_edit::{FetchRequestBuilder, ZoneEditApi};
