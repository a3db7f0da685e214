mod config;
mod error;
mod behaviors {
    pub mod mobile_menu;
    pub mod navigation;
    pub mod payment;
    pub mod scroll_reveal;
    pub mod search_box;
    pub mod service_cards;
}
mod components {
    pub mod modal;
    pub mod notification;
}
mod models {
    pub mod forms;
}
mod pages {
    pub mod landing;
}
mod utils {
    pub mod clipboard;
    pub mod dom;
    pub mod messages;
    pub mod recent_searches;
    pub mod search;
    pub mod styles;
    pub mod timers;
    pub mod ui_state;
    pub mod viewport;
}

use pages::landing::Landing;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));

    match utils::dom::ensure_overlay_root(config::get_overlay_root_id()) {
        Ok(root) => {
            yew::Renderer::<Landing>::with_root(root).render();
        }
        Err(e) => log::error!("Cannot mount landing overlays: {}", e),
    }
}
