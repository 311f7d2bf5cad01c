mod error;
mod http_client;
mod query;
mod source;

pub use error::{PlatformHttpError, PlatformHttpErrorKind};
pub use http_client::{LogResponse, PlatformClient};
pub use query::{LogQuery, DEFAULT_LINES};
pub use source::HttpByteSource;
