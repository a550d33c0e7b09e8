//! Per-browser player identity. The relay never assigns ids; we mint one on
//! first visit and keep it in localStorage so reloads re-join as the same
//! player.

use common::ws::PlayerInfo;
use uuid::Uuid;
use web_sys::Storage;

const ID_KEY: &str = "player_id";
const NAME_KEY: &str = "player_name";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn stored_player() -> PlayerInfo {
    let storage = storage();
    let id = storage
        .as_ref()
        .and_then(|s| s.get_item(ID_KEY).ok().flatten())
        .unwrap_or_else(|| {
            let id = Uuid::new_v4().to_string();
            if let Some(s) = &storage {
                let _ = s.set_item(ID_KEY, &id);
            }
            id
        });
    let name = storage
        .as_ref()
        .and_then(|s| s.get_item(NAME_KEY).ok().flatten())
        .unwrap_or_default();
    PlayerInfo { id, name }
}

pub fn store_name(name: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(NAME_KEY, name);
    }
}
