use serde::{Deserialize, Serialize};

use crate::SessionCode;

#[cfg(feature = "axum")]
mod axum;
#[cfg(feature = "reqwasm")]
mod reqwasm;

#[cfg(feature = "axum")]
pub use self::axum::TryFromError;

/// A player as known to the relay. The id is assigned by the caller (stable
/// per browser tab), never by the relay itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Controller d-pad input. The wire format is an open string; anything not
/// recognized maps to `Unrecognized`, which displays treat as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Action,
    Unrecognized,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Action => "action",
            Direction::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "up" => Direction::Up,
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            "action" => Direction::Action,
            _ => Direction::Unrecognized,
        }
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        value.as_str().to_owned()
    }
}

/// Events a client sends to the relay. All of them are fire-and-forget: the
/// relay never acknowledges, and malformed events are dropped server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientMsg {
    /// `player` is optional on the wire; the relay drops joins that carry no
    /// usable identity instead of erroring.
    #[serde(rename = "joinSession")]
    JoinSession {
        code: SessionCode,
        #[serde(default)]
        player: Option<PlayerInfo>,
    },
    #[serde(rename = "leaveSession")]
    LeaveSession {
        code: SessionCode,
        #[serde(rename = "playerId")]
        player_id: String,
    },
    #[serde(rename = "controller_input")]
    ControllerInput {
        code: SessionCode,
        direction: Direction,
    },
}

/// Events the relay fans out to a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServerMsg {
    #[serde(rename = "player_joined")]
    PlayerJoined { id: String, name: String },
    /// Payload is just the departed player's id.
    #[serde(rename = "player_left")]
    PlayerLeft(String),
    #[serde(rename = "controller_input")]
    ControllerInput {
        code: SessionCode,
        direction: Direction,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_uses_wire_event_name() {
        let msg = ClientMsg::JoinSession {
            code: SessionCode::new("ab12cd"),
            player: Some(PlayerInfo {
                id: "p1".into(),
                name: "Alice".into(),
            }),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "joinSession": {
                    "code": "AB12CD",
                    "player": { "id": "p1", "name": "Alice" },
                }
            })
        );
    }

    #[test]
    fn join_without_player_parses_to_none() {
        let msg: ClientMsg =
            serde_json::from_str(r#"{"joinSession":{"code":"AB12CD"}}"#).unwrap();
        assert_eq!(
            msg,
            ClientMsg::JoinSession {
                code: SessionCode::new("AB12CD"),
                player: None,
            }
        );
    }

    #[test]
    fn player_left_payload_is_bare_id() {
        let json = serde_json::to_string(&ServerMsg::PlayerLeft("p2".into())).unwrap();
        assert_eq!(json, r#"{"player_left":"p2"}"#);
    }

    #[test]
    fn unknown_direction_falls_back_to_unrecognized() {
        let msg: ClientMsg = serde_json::from_str(
            r#"{"controller_input":{"code":"ab12cd","direction":"diagonal"}}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            ClientMsg::ControllerInput {
                code: SessionCode::new("AB12CD"),
                direction: Direction::Unrecognized,
            }
        );
    }

    #[test]
    fn direction_round_trips_lowercase() {
        let json = serde_json::to_string(&Direction::Action).unwrap();
        assert_eq!(json, "\"action\"");
        assert_eq!(Direction::from("up".to_owned()), Direction::Up);
        // Case-sensitive on purpose, matching the wire contract.
        assert_eq!(Direction::from("UP".to_owned()), Direction::Unrecognized);
    }
}
