use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use super::Transport;
use crate::error::ClientError;

/// Live websocket transport over tokio-tungstenite.
pub struct WsTransport {
    inner: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsTransport {
    pub async fn connect(url: &str) -> Result<Self, ClientError> {
        let (inner, _) = connect_async(url).await?;

        Ok(WsTransport { inner })
    }
}

impl Transport for WsTransport {
    async fn send(&mut self, text: String) -> Result<(), ClientError> {
        self.inner.send(Message::Text(text)).await?;

        Ok(())
    }

    async fn recv(&mut self) -> Result<String, ClientError> {
        while let Some(message) = self.inner.next().await {
            match message? {
                Message::Text(text) => return Ok(text),
                // Keep-alive pings are answered here so callers only ever
                // see protocol frames.
                Message::Ping(payload) => self.inner.send(Message::Pong(payload)).await?,
                Message::Close(frame) => {
                    tracing::warn!(?frame, "websocket closed by peer");
                    return Err(ClientError::ConnectionClosed);
                }
                _ => {}
            }
        }

        Err(ClientError::ConnectionClosed)
    }

    async fn close(&mut self) -> Result<(), ClientError> {
        self.inner.close(None).await?;

        Ok(())
    }
}
