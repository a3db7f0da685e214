use crate::error::FrontendError;
use crate::utils::dom;
use crate::utils::styles;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEALED_CLASS: &str = "animate-in";

/// Fades service cards in as they scroll into view.
pub fn install() -> Result<(), FrontendError> {
    let cards = dom::query_all(".service-card");
    if cards.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    if let Err(e) = entry.target().class_list().add_1(REVEALED_CLASS) {
                        log::warn!("Failed to reveal card: {:?}", e);
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    // Without the observer the cards must stay visible, so the hiding
    // stylesheet is only added once observation works.
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            log::debug!("IntersectionObserver unavailable, skipping scroll reveal: {:?}", e);
            return Ok(());
        }
    };
    callback.forget();

    for card in &cards {
        observer.observe(card);
    }
    styles::ensure_stylesheet(styles::SCROLL_REVEAL_STYLE_ID, styles::SCROLL_REVEAL_CSS)
}
