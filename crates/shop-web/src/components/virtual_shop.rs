use leptos::prelude::*;
use shared::CONFIG;

const SECTION_CLASS: &str = "w-full py-12 md:py-16 lg:py-20";
const CONTAINER_CLASS: &str = "container mx-auto px-4 md:px-6 text-center";
const TITLE_CLASS: &str = "text-2xl font-bold tracking-tight mb-4 sm:text-3xl md:text-4xl lg:text-5xl";
const DESCRIPTION_CLASS: &str = "max-w-[700px] mx-auto text-gray-500 md:text-lg lg:text-xl";

/// Virtual shop intro block - heading plus one line of copy
#[component]
pub fn VirtualShopSection() -> impl IntoView {
    let copy = &CONFIG.virtual_shop;

    view! {
        <section class=SECTION_CLASS>
            <div class=CONTAINER_CLASS>
                <h2 class=TITLE_CLASS>{copy.title}</h2>
                <p class=DESCRIPTION_CLASS>{copy.description}</p>
            </div>
        </section>
    }
}

/// Render the section to an HTML string outside the browser
#[cfg(feature = "ssr")]
pub fn render_section_html() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <VirtualShopSection /> }.to_html())
}
