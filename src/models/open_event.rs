use serde::{Deserialize, Serialize};

/// One pixel fetch, as handed to the store. `id` is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOpenEvent {
    pub timestamp: String, // ! UTC, ISO-8601 with `Z`
    pub recipient_id: String,
    pub message_id: String,

    // ? Observed request metadata
    pub user_agent: Option<String>,
    pub client_ip: Option<String>,
    pub country: Option<String>, // ! e.g `NG`, CDN supplied
    pub referer: Option<String>,
}

impl NewOpenEvent {
    pub fn new(timestamp: String, recipient_id: String, message_id: String) -> Self {
        Self {
            timestamp,
            recipient_id,
            message_id,
            user_agent: None,
            client_ip: None,
            country: None,
            referer: None,
        }
    }
}

/// Row shape served by `/stats`. `ua` is already truncated by the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenStat {
    pub ts: String,
    pub rid: Option<String>,
    pub mid: Option<String>,
    pub ip: Option<String>,
    pub ua: Option<String>,
    pub referer: Option<String>,
}
