//! View rendering for the breed list.

use super::card::render_breed_card;
use super::state::{BreedListComponent, LoadState};
use yew::prelude::*;

pub fn view(component: &BreedListComponent, _ctx: &Context<BreedListComponent>) -> Html {
    html! {
        <main id="dogs" class="dog-grid">
            { render_state(&component.state) }
        </main>
    }
}

fn render_state(state: &LoadState) -> Html {
    match state {
        LoadState::Loading => html! { <p class="dog-state">{"Loading breeds..."}</p> },
        LoadState::Empty => html! { <p class="dog-state">{"There are no breeds in the catalog yet."}</p> },
        LoadState::Failed(_) => html! {
            <p class="dog-state error">{"Could not load breeds. Check that the server is running."}</p>
        },
        LoadState::Loaded(breeds) => breeds.iter().map(render_breed_card).collect::<Html>(),
    }
}
