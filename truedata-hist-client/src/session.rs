use truedata_hist_base::{Bar, Symbol, Timeframe};

use crate::config::TdConfig;
use crate::error::ClientError;
use crate::message::{Request, ServerMessage};
use crate::transport::{Transport, WsTransport};

/// Entry point: holds the immutable config and opens sessions.
#[derive(Debug, Clone)]
pub struct TdClient {
    config: TdConfig,
}

impl TdClient {
    pub fn new(config: TdConfig) -> Self {
        TdClient { config }
    }

    pub async fn connect(&self) -> Result<TdSession<WsTransport>, ClientError> {
        let url = self.config.ws_url();
        tracing::info!(url = %url, "connecting to TrueData websocket");

        let transport = WsTransport::connect(&url).await?;

        Ok(TdSession::with_transport(transport, self.config.clone()))
    }
}

/// One authenticated request/response session. Owns the transport
/// exclusively; dropping the session drops the socket, so every exit
/// path releases the connection.
pub struct TdSession<T: Transport> {
    transport: T,
    config: TdConfig,
}

impl<T: Transport> TdSession<T> {
    pub fn with_transport(transport: T, config: TdConfig) -> Self {
        TdSession { transport, config }
    }

    /// Next protocol frame, with vendor heartbeats filtered out.
    async fn next_message(&mut self) -> Result<(ServerMessage, String), ClientError> {
        loop {
            let raw = self.transport.recv().await?;
            let message: ServerMessage = serde_json::from_str(&raw)?;

            if let ServerMessage::Heartbeat { .. } = message {
                tracing::trace!(frame = %raw, "heartbeat");
                continue;
            }

            return Ok((message, raw));
        }
    }

    async fn send(&mut self, request: &Request) -> Result<(), ClientError> {
        self.transport.send(serde_json::to_string(request)?).await
    }

    /// Performs the authorization handshake. Any reply other than
    /// `authorized` fails the session; no further request may be sent.
    pub async fn login(&mut self) -> Result<(), ClientError> {
        let request = Request::Login {
            username: self.config.username.clone(),
            password: self.config.password.clone(),
            app_key: self.config.app_key.clone(),
            heartbeat: self.config.heartbeat_secs,
        };
        self.send(&request).await?;

        match self.next_message().await? {
            (ServerMessage::Authorized { .. }, _) => {
                tracing::info!(username = %self.config.username, "logged in");
                Ok(())
            }
            (_, raw) => Err(ClientError::AuthenticationFailed(raw)),
        }
    }

    /// Sends one `get_history` request and awaits its reply. The `&mut`
    /// receiver guarantees at most one outstanding request.
    pub async fn get_history(
        &mut self,
        symbol: &Symbol,
        timeframe: Timeframe,
        from_ms: i64,
        to_ms: i64,
    ) -> Result<Vec<Bar>, ClientError> {
        let request = Request::GetHistory {
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
            from: from_ms,
            to: to_ms,
        };
        self.send(&request).await?;

        match self.next_message().await? {
            (ServerMessage::History { data }, _) => {
                tracing::debug!(count = data.len(), symbol = %symbol, "history received");
                Ok(data)
            }
            (_, raw) => Err(ClientError::RequestFailed(raw)),
        }
    }

    /// Best-effort logout notice; the server does not acknowledge it.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        self.send(&Request::Logout).await
    }

    /// Graceful close. Consumes the session so the socket cannot be
    /// reused after teardown.
    pub async fn disconnect(mut self) -> Result<(), ClientError> {
        self.transport.close().await
    }
}
