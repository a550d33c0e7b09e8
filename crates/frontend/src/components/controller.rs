use common::ws::{Direction, ServerMsg};
use common::SessionCode;
use log::{info, warn};
use yew::prelude::*;

use crate::identity;
use crate::socket::RelayClient;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub code: String,
}

/// The phone role: a d-pad plus an action button, every press emitted to the
/// relay with no acknowledgement expected.
pub struct Controller {
    client: Option<RelayClient>,
    code: SessionCode,
    player_id: String,
    error: Option<String>,
}

pub enum Msg {
    Send(Direction),
    ReceivedMsg(ServerMsg),
}

impl Component for Controller {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let code = SessionCode::new(&ctx.props().code);
        let player = identity::stored_player();
        let player_id = player.id.clone();

        let (client, error) = match RelayClient::connect(ctx.link().callback(Msg::ReceivedMsg)) {
            Ok(client) => {
                client.join(code.clone(), player);
                (Some(client), None)
            }
            Err(err) => {
                warn!("failed to open relay connection: {err}");
                (None, Some(err))
            }
        };

        Self {
            client,
            code,
            player_id,
            error,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(err) = &self.error {
            return html! { <p>{"Could not reach the relay: "}{err}</p> };
        }

        let send = |direction: Direction| ctx.link().callback(move |_| Msg::Send(direction));

        html! {
            <div class={"controller"}>
                <h1>{"Controller — "}{&self.code}</h1>
                <div class={"dpad"}>
                    <button class={"up"} onclick={send(Direction::Up)}>{"▲"}</button>
                    <div>
                        <button class={"left"} onclick={send(Direction::Left)}>{"◀"}</button>
                        <button class={"action"} onclick={send(Direction::Action)}>{"●"}</button>
                        <button class={"right"} onclick={send(Direction::Right)}>{"▶"}</button>
                    </div>
                    <button class={"down"} onclick={send(Direction::Down)}>{"▼"}</button>
                </div>
            </div>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Send(direction) => {
                if let Some(client) = &self.client {
                    client.send_input(self.code.clone(), direction);
                }
                false
            }
            Msg::ReceivedMsg(msg) => {
                // The controller only talks; room events are just logged.
                info!("received {msg:?}");
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(client) = &self.client {
            client.leave(self.code.clone(), self.player_id.clone());
        }
    }
}
