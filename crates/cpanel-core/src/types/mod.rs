mod challenge;
mod credentials;
mod zone;

pub use challenge::*;
pub use credentials::*;
pub use zone::*;
