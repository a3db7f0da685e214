use crate::behaviors::{mobile_menu, navigation, payment, scroll_reveal, search_box, service_cards};
use crate::components::modal::ModalHost;
use crate::components::notification::NotificationToast;
use crate::error::FrontendError;
use crate::utils::recent_searches::RecentSearches;
use crate::utils::ui_state::{Ui, UiState};
use std::cell::Cell;
use yew::prelude::*;

/// Wires the static landing markup. A feature whose elements are missing
/// stays inert; one that fails is logged and the rest still install.
fn install_page_behaviors(ui: &Ui) {
    let installers: [(&str, Box<dyn Fn(&Ui) -> Result<(), FrontendError>>); 7] = [
        ("search", Box::new(search_box::install)),
        ("service cards", Box::new(service_cards::install)),
        ("payment", Box::new(payment::install)),
        ("navigation", Box::new(navigation::install)),
        ("account buttons", Box::new(navigation::install_account_buttons)),
        ("mobile menu", Box::new(|_: &Ui| mobile_menu::install())),
        ("scroll reveal", Box::new(|_: &Ui| scroll_reveal::install())),
    ];
    for (name, install) in installers.iter() {
        if let Err(e) = install(ui) {
            log::error!("Failed to set up {}: {}", name, e);
        }
    }
}

fn log_recent_searches() {
    match RecentSearches::browser().and_then(|recent| recent.load()) {
        Ok(list) if !list.is_empty() => {
            gloo_console::log!(format!("Recent searches: {:?}", list.entries()));
        }
        Ok(_) => {}
        Err(e) => log::warn!("Recent searches unavailable: {}", e),
    }
}

/// Root of the overlay layer: owns the UI state and renders the toast and
/// the open modal on top of the static page.
#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(UiState::default);
    let modal_ids = use_memo(|_| Cell::new(0u64), ());
    let ui = Ui::new(state.dispatcher(), modal_ids);

    {
        let ui = ui.clone();
        use_effect_with_deps(
            move |_| {
                install_page_behaviors(&ui);
                log_recent_searches();
                log::info!("BDeskGigs landing behaviors ready");
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <NotificationToast ui={ui.clone()} notification={state.notification.clone()} />
            <ModalHost ui={ui} modal={state.modal.clone()} />
        </>
    }
}
