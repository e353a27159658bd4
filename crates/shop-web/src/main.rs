fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("starting {}", shared::CONFIG.name);
    leptos::mount::mount_to_body(shop_web::App);
}
