use anyhow::Result;
use truedata_hist_base::{ist_to_utc_ms, Symbol, Timeframe};
use truedata_hist_client::{TdClient, TdConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TdConfig::builder()
        .username(std::env::var("TD_USERNAME")?)
        .password(std::env::var("TD_PASSWORD")?)
        .app_key(std::env::var("TD_APP_KEY")?)
        .build();

    let client = TdClient::new(config);
    let mut session = client.connect().await?;
    session.login().await?;

    let symbol = Symbol::new("NIFTY 50 SEP24 18000 CE");
    let from_ms = ist_to_utc_ms("2024-06-08 09:15:00")?;
    let to_ms = ist_to_utc_ms("2024-06-08 15:30:00")?;

    let bars = session
        .get_history(&symbol, Timeframe::OneMinute, from_ms, to_ms)
        .await?;

    println!("bars count: {:?}", bars.len());

    for bar in bars.iter().take(5) {
        println!("{:?}", bar);
    }

    session.logout().await?;
    session.disconnect().await?;

    Ok(())
}
