use common::SessionCode;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::identity;
use crate::Route;

/// Landing page: enter a session code and a display name, then open either
/// role. The code itself comes from the session directory (outside this app).
#[derive(Debug, Default)]
pub struct Menu {
    code_ref: NodeRef,
    name_ref: NodeRef,
    output: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Error(String),
}

#[derive(Clone, Copy)]
enum Role {
    Controller,
    Display,
}

impl Component for Menu {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = |role: Role| {
            let code_ref = self.code_ref.clone();
            let name_ref = self.name_ref.clone();
            let link = ctx.link().clone();
            let navigator = link.navigator().unwrap();
            move |_| {
                let code_input: HtmlInputElement = code_ref.cast().unwrap();
                let code = code_input.value();
                if code.trim().is_empty() {
                    link.send_message(Msg::Error("Enter a session code first".to_owned()));
                    return;
                }
                let name_input: HtmlInputElement = name_ref.cast().unwrap();
                identity::store_name(name_input.value().trim());
                let code = SessionCode::new(code).to_string();
                navigator.push(&match role {
                    Role::Controller => Route::Controller { code },
                    Role::Display => Route::Display { code },
                });
            }
        };

        html! {
            <div>
                <div>
                    <input placeholder={"Session code"} ref={&self.code_ref}/>
                    <input placeholder={"Your name"} ref={&self.name_ref}/>
                </div>
                <div>
                    <button onclick={open(Role::Controller)}>{"Open controller"}</button>
                    <button onclick={open(Role::Display)}>{"Open display"}</button>
                </div>
                <p>{&self.output}</p>
            </div>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Msg) -> bool {
        match msg {
            Msg::Error(err) => {
                self.output = err;
            }
        }
        true
    }
}
