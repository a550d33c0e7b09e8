use common::http::{GameSummary, SessionResponse};
use common::ws::{PlayerInfo, ServerMsg};
use common::SessionCode;
use log::{info, warn};
use reqwasm::http::Request;
use yew::prelude::*;

use crate::grid::{GridNav, Step};
use crate::identity;
use crate::socket::RelayClient;

const GRID_COLS: usize = 4;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub code: String,
}

/// The TV role: shows the game grid and the roster. The initial roster and
/// catalog come from the directory API; after that, relayed events keep both
/// the roster and the selection cursor up to date.
pub struct Display {
    code: SessionCode,
    client: Option<RelayClient>,
    games: Vec<GameSummary>,
    players: Vec<PlayerInfo>,
    nav: GridNav,
    started: Option<GameSummary>,
    output: Option<String>,
}

pub enum Msg {
    ReceivedMsg(ServerMsg),
    Session(SessionResponse),
    Games(Vec<GameSummary>),
    Error(String),
}

impl Component for Display {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let code = SessionCode::new(&ctx.props().code);

        {
            let code = code.clone();
            ctx.link().send_future(async move {
                match Request::get(&format!("/api/sessions/{code}")).send().await {
                    Ok(response) => match response.json::<SessionResponse>().await {
                        Ok(session) => Msg::Session(session),
                        Err(err) => Msg::Error(err.to_string()),
                    },
                    Err(err) => Msg::Error(err.to_string()),
                }
            });
        }
        {
            let code = code.clone();
            ctx.link().send_future(async move {
                match Request::get(&format!("/api/games/{code}")).send().await {
                    Ok(response) => match response.json::<Vec<GameSummary>>().await {
                        Ok(games) => Msg::Games(games),
                        Err(err) => Msg::Error(err.to_string()),
                    },
                    Err(err) => Msg::Error(err.to_string()),
                }
            });
        }

        // The display joins the room too; broadcasts only reach connections
        // associated with the code.
        let client = match RelayClient::connect(ctx.link().callback(Msg::ReceivedMsg)) {
            Ok(client) => {
                client.join(code.clone(), identity::stored_player());
                Some(client)
            }
            Err(err) => {
                warn!("failed to open relay connection: {err}");
                None
            }
        };

        Self {
            code,
            client,
            games: Vec::new(),
            players: Vec::new(),
            nav: GridNav::new(GRID_COLS, 0),
            started: None,
            output: None,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let games: Html = self
            .games
            .iter()
            .enumerate()
            .map(|(idx, game)| {
                let selected = (idx == self.nav.selected()).then_some("selected");
                html! {
                    <div class={classes!("game", selected)}>{&game.name}</div>
                }
            })
            .collect();
        let players: Html = self
            .players
            .iter()
            .map(|player| html! { <li>{&player.name}</li> })
            .collect();

        html! {
            <div class={"display"}>
                <h1>{"Session "}{&self.code}</h1>
                if self.client.is_none() {
                    <p>{"Could not reach the relay."}</p>
                }
                if let Some(output) = &self.output {
                    <p>{output}</p>
                }
                <h2>{"Players"}</h2>
                <ul>{players}</ul>
                <div class={"game-grid"}>{games}</div>
                if let Some(game) = &self.started {
                    <p class={"starting"}>{"Starting "}{&game.name}{"..."}</p>
                }
            </div>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Session(session) => {
                self.players = session.players;
                true
            }
            Msg::Games(games) => {
                self.nav.set_len(games.len());
                self.games = games;
                true
            }
            Msg::Error(err) => {
                // Directory fetch failed; the grid still works off events.
                info!("directory request failed: {err}");
                self.output = Some(format!("Session directory unavailable: {err}"));
                true
            }
            Msg::ReceivedMsg(msg) => match msg {
                ServerMsg::PlayerJoined { id, name } => {
                    if !self.players.iter().any(|p| p.id == id) {
                        self.players.push(PlayerInfo { id, name });
                        return true;
                    }
                    false
                }
                ServerMsg::PlayerLeft(id) => {
                    let before = self.players.len();
                    self.players.retain(|p| p.id != id);
                    self.players.len() != before
                }
                ServerMsg::ControllerInput { code, direction } => {
                    if code != self.code {
                        return false;
                    }
                    match self.nav.step(direction) {
                        Step::Moved(_) => true,
                        Step::Select(idx) => {
                            self.started = self.games.get(idx).cloned();
                            true
                        }
                        Step::Unchanged => false,
                    }
                }
            },
        }
    }
}
