//! Fallback for unknown paths.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let path = use_location().map(|location| location.path().to_string());

    html! {
        <main class="page not-found-page">
            <h1>{"Nothing here"}</h1>
            if let Some(path) = path {
                <p>{format!("The panel has no page at {path}.")}</p>
            }
            <Link<Route> to={Route::Home}>{"Edit animations"}</Link<Route>>
        </main>
    }
}
