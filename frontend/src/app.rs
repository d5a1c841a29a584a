use crate::components::breeds::BreedListComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <header>
                    <h1>{"Dog Breeds"}</h1>
                </header>
                <BreedListComponent />
            </>
        }
    }
}
