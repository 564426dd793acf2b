use anyhow::Result;
use std::io::Write;
use truedata_hist_base::{ist_to_utc_ms, Symbol, Timeframe};
use truedata_hist_client::{
    transport::Transport, ClientError, TdClient, TdConfig, TdSession,
};

use crate::render::render_bars;
use crate::setting::Setting;

/// Connects and runs the whole fetch once: login → history → render →
/// logout → disconnect. No retry on any step.
pub async fn run(setting: &Setting, out: &mut impl Write) -> Result<()> {
    let config = TdConfig::builder()
        .username(setting.username.clone())
        .password(setting.password.clone())
        .app_key(setting.app_key.clone())
        .host(setting.host.clone())
        .port(setting.port)
        .heartbeat_secs(setting.heartbeat_secs)
        .build();

    let client = TdClient::new(config);
    let session = client.connect().await?;

    run_session(setting, session, out).await
}

/// The post-connect flow, generic over the transport so tests can drive
/// it with a scripted mock. The session is consumed; on every early
/// return its drop releases the socket.
pub(crate) async fn run_session<T: Transport>(
    setting: &Setting,
    mut session: TdSession<T>,
    out: &mut impl Write,
) -> Result<()> {
    match session.login().await {
        Ok(()) => {}
        Err(ClientError::AuthenticationFailed(raw)) => {
            tracing::error!(response = %raw, "authentication failed");
            writeln!(out, "authentication failed: {}", raw)?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    let symbol = Symbol::new(setting.symbol.clone());
    let timeframe = setting
        .timeframe
        .parse::<Timeframe>()
        .map_err(|_| anyhow::anyhow!("invalid timeframe: {}", setting.timeframe))?;
    let from_ms = ist_to_utc_ms(&setting.from_local)?;
    let to_ms = ist_to_utc_ms(&setting.to_local)?;

    match session.get_history(&symbol, timeframe, from_ms, to_ms).await {
        Ok(bars) => {
            tracing::info!(count = bars.len(), symbol = %symbol, "history received");
            writeln!(
                out,
                "Received {} bars for {} from {} to {}.",
                bars.len(),
                symbol,
                setting.from_local,
                setting.to_local,
            )?;
            render_bars(out, &bars)?;
        }
        Err(ClientError::RequestFailed(raw)) => {
            tracing::error!(response = %raw, "history request failed");
            writeln!(out, "failed to fetch history: {}", raw)?;
        }
        Err(err) => return Err(err.into()),
    }

    // Best-effort teardown; failures here are diagnostics, not errors.
    if let Err(err) = session.logout().await {
        tracing::warn!(?err, "logout failed");
    }
    if let Err(err) = session.disconnect().await {
        tracing::warn!(?err, "disconnect failed");
    }

    Ok(())
}
