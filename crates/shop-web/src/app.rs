use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::ShopPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p>"404 - Stránka sa nenašla"</p> }>
                <Route path=path!("/") view=ShopPage />
            </Routes>
        </Router>
    }
}
