mod mock;
mod ws;

pub use mock::MockTransport;
pub use ws::WsTransport;

use crate::error::ClientError;

/// One text frame in, one text frame out. Implemented by the live
/// websocket and by `MockTransport` for tests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&mut self, text: String) -> Result<(), ClientError>;

    async fn recv(&mut self) -> Result<String, ClientError>;

    async fn close(&mut self) -> Result<(), ClientError>;
}
