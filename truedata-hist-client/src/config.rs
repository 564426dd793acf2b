use bon::Builder;
use truedata_hist_base::Symbol;

pub const DEFAULT_HOST: &str = "realtime.truedata.in";
pub const DEFAULT_PORT: u16 = 7709;
pub const DEFAULT_HEARTBEAT_SECS: u64 = 30;

/// Connection parameters for one TrueData session. Immutable once built.
#[derive(Builder, Debug, Clone)]
#[builder(on(String, into))]
pub struct TdConfig {
    pub username: String,
    pub password: String,
    pub app_key: String,
    #[builder(default = DEFAULT_HOST.to_string())]
    pub host: String,
    #[builder(default = DEFAULT_PORT)]
    pub port: u16,
    #[builder(default = DEFAULT_HEARTBEAT_SECS)]
    pub heartbeat_secs: u64,
    // This tool only pulls history, so the list stays empty.
    #[builder(default)]
    pub subscribe_to: Vec<Symbol>,
}

impl TdConfig {
    pub fn ws_url(&self) -> String {
        format!("ws://{}:{}", self.host, self.port)
    }
}
