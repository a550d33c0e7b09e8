use crate::components::{controller::Controller, display::Display, menu::Menu};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod grid;
mod identity;
mod socket;

#[derive(Routable, PartialEq, Clone, Debug)]
enum Route {
    #[at("/")]
    Home,
    #[at("/sessions/:code/controller")]
    Controller { code: String },
    #[at("/sessions/:code/display")]
    Display { code: String },
    #[at("/not-found")]
    #[not_found]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Menu /> },
        Route::Controller { code } => html! { <Controller {code} /> },
        Route::Display { code } => html! { <Display {code} /> },
        Route::NotFound => html! { "Not Found." },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
