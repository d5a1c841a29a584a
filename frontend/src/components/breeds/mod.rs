//! Breed catalog list: root module wiring the Yew `Component` implementation
//! with submodules for state, view rendering and the card markup.
//!
//! On first render the component fetches `GET /api/breeds` once and renders a
//! card per breed, in the order the server returns them (newest first).

use common::model::breed::Breed;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod card;
mod messages;
mod state;
mod view;

use messages::Msg;
pub use state::BreedListComponent;

const API_PATH: &str = "/api/breeds";

impl Component for BreedListComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        BreedListComponent::new()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.apply(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.requested {
            self.requested = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_breeds().await {
                    Ok(breeds) => link.send_message(Msg::Loaded(breeds)),
                    Err(reason) => {
                        gloo_console::error!(format!("Failed to load breeds: {}", reason));
                        link.send_message(Msg::Failed(reason));
                    }
                }
            });
        }
    }
}

async fn fetch_breeds() -> Result<Vec<Breed>, String> {
    let response = Request::get(API_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json::<Vec<Breed>>().await.map_err(|e| e.to_string())
}
