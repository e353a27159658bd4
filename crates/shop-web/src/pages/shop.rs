use leptos::prelude::*;

use crate::components::VirtualShopSection;

#[component]
pub fn ShopPage() -> impl IntoView {
    log::debug!("mounting shop page");

    view! {
        <main class="min-h-screen">
            <VirtualShopSection />
        </main>
    }
}
