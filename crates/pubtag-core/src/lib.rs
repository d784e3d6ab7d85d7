pub mod error;
mod settings;
mod tag;
pub mod types;
mod version;

pub use error::*;
pub use settings::{DEFAULT_REGISTRY, PublishSettings, TagNames};
pub use tag::{select_tag, should_publish};
pub use types::*;
pub use version::parse_version;
