//! Transport-agnostic relay core. The websocket layer decodes frames into
//! [`ClientMsg`] values and feeds them in here; everything the relay says
//! back goes out through one mpsc sender per connection, so a room broadcast
//! is just a walk over the room's member list.
//!
//! The whole struct lives behind a single async mutex, so one event is
//! handled at a time and no finer locking is needed.

use std::collections::HashMap;

use common::ws::{ClientMsg, Direction, PlayerInfo, ServerMsg};
use common::SessionCode;
use log::{debug, warn};
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::directory::{AddOutcome, InMemoryRooms, RoomStore};

pub type ConnId = Uuid;

/// Live connection state: where broadcasts go, and which player identity the
/// connection registered in each room it joined. A connection may join any
/// number of rooms over its lifetime.
struct Connection {
    tx: UnboundedSender<ServerMsg>,
    joined: HashMap<SessionCode, String>,
}

pub struct Relay<S = InMemoryRooms> {
    store: S,
    conns: HashMap<ConnId, Connection>,
    /// Fan-out list per room, in join order.
    members: HashMap<SessionCode, Vec<ConnId>>,
}

impl<S: RoomStore> Relay<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            conns: HashMap::new(),
            members: HashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a newly opened connection. `tx` is where this connection's
    /// share of every room broadcast will be sent.
    pub fn connect(&mut self, tx: UnboundedSender<ServerMsg>) -> ConnId {
        let conn = Uuid::new_v4();
        self.conns.insert(
            conn,
            Connection {
                tx,
                joined: HashMap::new(),
            },
        );
        debug!("connection {conn} opened");
        conn
    }

    pub fn handle(&mut self, conn: ConnId, msg: ClientMsg) {
        match msg {
            ClientMsg::JoinSession { code, player } => self.join(conn, code, player),
            ClientMsg::LeaveSession { code, player_id } => self.leave(conn, code, player_id),
            ClientMsg::ControllerInput { code, direction } => self.input(code, direction),
        }
    }

    /// The connection is gone. Drop its state and, for every room it had
    /// joined, remove its player from the roster unless another live
    /// connection in that room still represents the same player id (e.g. a
    /// reloaded tab that already re-joined).
    pub fn disconnect(&mut self, conn: ConnId) {
        let Some(connection) = self.conns.remove(&conn) else {
            return;
        };
        for (code, player_id) in connection.joined {
            let emptied = self.members.get_mut(&code).map_or(false, |list| {
                list.retain(|id| *id != conn);
                list.is_empty()
            });
            if emptied {
                self.members.remove(&code);
            }
            let still_represented = self.members.get(&code).map_or(false, |list| {
                list.iter().any(|id| {
                    self.conns
                        .get(id)
                        .and_then(|c| c.joined.get(&code))
                        .map_or(false, |pid| *pid == player_id)
                })
            });
            if !still_represented && self.store.remove_player(&code, &player_id) {
                self.broadcast(&code, ServerMsg::PlayerLeft(player_id.clone()), None);
                debug!("{player_id} dropped from {code} on disconnect");
            }
        }
        debug!("connection {conn} closed");
    }

    fn join(&mut self, conn: ConnId, code: SessionCode, player: Option<PlayerInfo>) {
        let Some(player) = player.filter(|p| !p.id.is_empty()) else {
            warn!("dropping joinSession for {code}: no player identity");
            return;
        };
        let player = PlayerInfo {
            name: display_name(&player),
            id: player.id,
        };

        let outcome = self.store.add_player(&code, player.clone());
        // Associate the connection either way, so an idempotent re-join (page
        // reload) still receives future broadcasts.
        self.associate(conn, &code, &player.id);

        match outcome {
            AddOutcome::Added => {
                debug!("{} ({}) joined {code}", player.name, player.id);
                self.broadcast(
                    &code,
                    ServerMsg::PlayerJoined {
                        id: player.id.clone(),
                        name: player.name,
                    },
                    Some(conn),
                );
            }
            AddOutcome::AlreadyPresent => {
                debug!("{} already in {code}", player.id);
            }
        }
    }

    fn leave(&mut self, conn: ConnId, code: SessionCode, player_id: String) {
        self.store.remove_player(&code, &player_id);
        self.disassociate(conn, &code);
        self.broadcast(&code, ServerMsg::PlayerLeft(player_id.clone()), None);
        debug!("{player_id} left {code}");
    }

    /// No membership validation: the event is fanned out verbatim to everyone
    /// in the room, the sender included. Unknown rooms are a silent no-op.
    fn input(&mut self, code: SessionCode, direction: Direction) {
        self.broadcast(
            &code,
            ServerMsg::ControllerInput {
                code: code.clone(),
                direction,
            },
            None,
        );
    }

    fn associate(&mut self, conn: ConnId, code: &SessionCode, player_id: &str) {
        let list = self.members.entry(code.clone()).or_default();
        if !list.contains(&conn) {
            list.push(conn);
        }
        if let Some(connection) = self.conns.get_mut(&conn) {
            connection
                .joined
                .insert(code.clone(), player_id.to_owned());
        }
    }

    fn disassociate(&mut self, conn: ConnId, code: &SessionCode) {
        let emptied = self.members.get_mut(code).map_or(false, |list| {
            list.retain(|id| *id != conn);
            list.is_empty()
        });
        if emptied {
            self.members.remove(code);
        }
        if let Some(connection) = self.conns.get_mut(&conn) {
            connection.joined.remove(code);
        }
    }

    fn broadcast(&self, code: &SessionCode, msg: ServerMsg, exclude: Option<ConnId>) {
        let Some(members) = self.members.get(code) else {
            return;
        };
        for id in members {
            if Some(*id) == exclude {
                continue;
            }
            if let Some(conn) = self.conns.get(id) {
                // Fire and forget: a closed receiver means the connection is
                // mid-teardown and disconnect() will reap it shortly.
                let _ = conn.tx.send(msg.clone());
            }
        }
    }
}

/// Display name for a joining player: the given name, or a guest name derived
/// from the id when none was provided.
fn display_name(player: &PlayerInfo) -> String {
    let name = player.name.trim();
    if name.is_empty() {
        let prefix: String = player.id.chars().take(4).collect();
        format!("Guest-{prefix}")
    } else {
        name.to_owned()
    }
}
