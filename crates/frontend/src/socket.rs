//! Relay connection for one page. Both roles go through here: the controller
//! emits joins and d-pad input, the display listens for room events.

use common::ws::{ClientMsg, Direction, PlayerInfo, ServerMsg};
use common::SessionCode;
use futures::channel::mpsc::{channel, Sender};
use futures::{SinkExt, StreamExt};
use log::info;
use reqwasm::websocket::futures::WebSocket;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// Handle to an open relay connection. Cloning shares the connection. All
/// sends are fire-and-forget: the relay never acknowledges, and a failed send
/// just means the page is tearing the connection down.
#[derive(Clone)]
pub struct RelayClient {
    tx: Sender<ClientMsg>,
}

impl RelayClient {
    /// Open the websocket and wire up both halves: inbound frames are decoded
    /// and handed to `on_msg`, outbound events drain from the handle's queue.
    pub fn connect(on_msg: Callback<ServerMsg>) -> Result<Self, String> {
        let ws = WebSocket::open(&relay_url()).map_err(|err| err.to_string())?;
        let (mut send, mut receive) = ws.split();
        let (tx, mut rx) = channel::<ClientMsg>(0);

        spawn_local(async move {
            while let Some(msg) = receive.next().await {
                match msg {
                    Ok(msg) => match ServerMsg::try_from(msg) {
                        Ok(msg) => on_msg.emit(msg),
                        Err(err) => info!("error deserializing message: {err}"),
                    },
                    Err(err) => {
                        info!("error receiving message: {err}");
                        break;
                    }
                }
            }
        });
        spawn_local(async move {
            while let Some(msg) = rx.next().await {
                if send.send(msg.into()).await.is_err() {
                    break;
                }
            }
        });

        Ok(Self { tx })
    }

    pub fn join(&self, code: SessionCode, player: PlayerInfo) {
        self.emit(ClientMsg::JoinSession {
            code,
            player: Some(player),
        });
    }

    pub fn leave(&self, code: SessionCode, player_id: String) {
        self.emit(ClientMsg::LeaveSession { code, player_id });
    }

    pub fn send_input(&self, code: SessionCode, direction: Direction) {
        self.emit(ClientMsg::ControllerInput { code, direction });
    }

    fn emit(&self, msg: ClientMsg) {
        let mut tx = self.tx.clone();
        spawn_local(async move {
            let _ = tx.send(msg).await;
        });
    }
}

/// Relay endpoint on the host that served the app, ws/wss following the page
/// scheme. Falls back to the local dev server address.
fn relay_url() -> String {
    web_sys::window()
        .and_then(|window| {
            let location = window.location();
            let protocol = location.protocol().ok()?;
            let host = location.host().ok()?;
            let scheme = if protocol == "https:" { "wss" } else { "ws" };
            Some(format!("{scheme}://{host}/ws"))
        })
        .unwrap_or_else(|| "ws://127.0.0.1:4000/ws".to_owned())
}
