pub mod config;
pub mod error;
pub mod message;
mod session;
pub mod transport;

pub use config::TdConfig;
pub use error::ClientError;
pub use session::{TdClient, TdSession};
