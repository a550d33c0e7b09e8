//! Response shapes of the session/game directory API. The directory is the
//! source of truth for sessions and players; the relay's in-memory rooms are
//! a transient cache of it for fast fan-out.

use serde::{Deserialize, Serialize};

use crate::ws::PlayerInfo;
use crate::SessionCode;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SessionResponse {
    pub code: SessionCode,
    #[serde(default)]
    pub players: Vec<PlayerInfo>,
    #[serde(default, rename = "hostId")]
    pub host_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameSummary {
    pub id: String,
    pub name: String,
}
