mod app;
mod bridge;
mod components;
mod dom;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app::start();
}
