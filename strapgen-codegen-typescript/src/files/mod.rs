//! TypeScript file generators.

mod media_format_ts;
mod media_ts;
mod payload_ts;
mod schema_ts;
mod user_ts;

pub use media_format_ts::MediaFormatTs;
pub use media_ts::MediaTs;
pub use payload_ts::PayloadTs;
pub use schema_ts::SchemaTs;
pub use user_ts::UserTs;
