use serde::{Deserialize, Serialize};
use truedata_hist_base::Bar;

/// Client-to-server frames, `"type"`-discriminated JSON.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    Login {
        username: String,
        password: String,
        app_key: String,
        heartbeat: u64,
    },
    GetHistory {
        symbol: String,
        timeframe: String,
        from: i64,
        to: i64,
    },
    Logout,
}

/// Server-to-client frames. Anything with an unrecognized discriminant
/// (`rejected`, error payloads, ...) lands in `Unknown`; callers keep the
/// raw frame text around for diagnostics.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Authorized {
        #[serde(default)]
        message: Option<String>,
    },
    History {
        #[serde(default)]
        data: Vec<Bar>,
    },
    Heartbeat {
        #[serde(default)]
        timestamp: Option<i64>,
    },
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_get_history_request_wire_form() -> Result<()> {
        let request = Request::GetHistory {
            symbol: "NIFTY 50 SEP24 18000 CE".to_string(),
            timeframe: "1Min".to_string(),
            from: 1717818300000,
            to: 1749282000000,
        };

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "type": "get_history",
                "symbol": "NIFTY 50 SEP24 18000 CE",
                "timeframe": "1Min",
                "from": 1717818300000_i64,
                "to": 1749282000000_i64,
            })
        );

        Ok(())
    }

    #[test]
    fn test_login_request_wire_form() -> Result<()> {
        let request = Request::Login {
            username: "trial992".to_string(),
            password: "secret".to_string(),
            app_key: "app-key".to_string(),
            heartbeat: 30,
        };

        let value = serde_json::to_value(&request)?;
        assert_eq!(value["type"], "login");
        assert_eq!(value["username"], "trial992");
        assert_eq!(value["heartbeat"], 30);

        Ok(())
    }

    #[test]
    fn test_server_message_discriminants() -> Result<()> {
        let authorized: ServerMessage = serde_json::from_str(r#"{"type": "authorized"}"#)?;
        assert!(matches!(authorized, ServerMessage::Authorized { .. }));

        let history: ServerMessage =
            serde_json::from_str(r#"{"type": "history", "data": [[1717830900000, 100, 105, 99, 104, 1000, 500]]}"#)?;
        match history {
            ServerMessage::History { data } => assert_eq!(data.len(), 1),
            other => panic!("expected history, got {:?}", other),
        }

        let rejected: ServerMessage = serde_json::from_str(r#"{"type": "rejected"}"#)?;
        assert!(matches!(rejected, ServerMessage::Unknown));

        Ok(())
    }
}
