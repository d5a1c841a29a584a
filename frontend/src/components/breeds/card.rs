//! Rendering of a single breed card.

use common::model::breed::{Breed, DEFAULT_IMAGE};
use web_sys::HtmlImageElement;
use yew::prelude::*;

/// Transparent 1x1 gif shown when a cover image cannot be loaded, so the
/// layout keeps its shape.
pub const FALLBACK_IMG: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///ywAAAAAAQABAAACAUwAOw==";

/// Image source for `breed`, falling back to the default path for blank values.
pub fn cover_src(breed: &Breed) -> &str {
    if breed.image.trim().is_empty() {
        DEFAULT_IMAGE
    } else {
        &breed.image
    }
}

pub fn render_breed_card(breed: &Breed) -> Html {
    // Swap to the fallback once; the data URI itself never fails.
    let on_error = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
            if img.src() != FALLBACK_IMG {
                img.set_src(FALLBACK_IMG);
            }
        }
    });

    html! {
        <article class="dog-card" key={breed.id.to_string()}>
            <img
                class="dog-cover"
                alt={format!("Photo of the breed: {}", breed.title)}
                src={cover_src(breed).to_string()}
                onerror={on_error}
            />
            <div class="dog-body">
                <h3 class="dog-title">{ &breed.title }</h3>
                <div class="dog-meta">{ format!("Origin: {}", breed.origin) }</div>
                <div class="dog-meta">{ format!("Year: {}", breed.year) }</div>
                <p class="dog-desc">{ &breed.description }</p>
            </div>
        </article>
    }
}
