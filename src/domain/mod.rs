pub mod format;
pub mod menu;
pub mod payload;
pub mod source;

pub use format::FeedFormat;
pub use menu::{MenuFeed, MenuItem};
pub use payload::{FeedDocument, Payload};
pub use source::Source;
