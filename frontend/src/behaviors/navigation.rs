use crate::error::FrontendError;
use crate::utils::dom;
use crate::utils::messages;
use crate::utils::ui_state::{ModalVariant, NotificationKind, Ui};
use web_sys::MouseEvent;

/// In-page links only announce the section; nothing navigates yet.
pub fn install(ui: &Ui) -> Result<(), FrontendError> {
    for link in dom::query_all("nav a") {
        let ui = ui.clone();
        let target = link.clone();
        dom::listen(&link, "click", move |e: MouseEvent| {
            e.prevent_default();
            let href = target.get_attribute("href").unwrap_or_default();
            if href.starts_with('#') {
                let text = target.text_content().unwrap_or_default();
                ui.notify(messages::page_loading(text.trim()), NotificationKind::Info);
            }
        })?;
    }
    Ok(())
}

/// "Join" and "Sign In" header buttons open the account modals.
pub fn install_account_buttons(ui: &Ui) -> Result<(), FrontendError> {
    let targets = [
        (".btn-primary", "Join", ModalVariant::Registration),
        (".btn-outline", "Sign In", ModalVariant::Login),
    ];
    for (selector, label, variant) in targets {
        for button in dom::query_all(selector) {
            if !button.text_content().unwrap_or_default().contains(label) {
                continue;
            }
            let ui = ui.clone();
            let variant = variant.clone();
            dom::listen(&button, "click", move |_: MouseEvent| {
                let modal = ui.open_modal(variant.clone());
                log::debug!("Opened {} as modal {}", variant.element_id(), modal.id());
            })?;
        }
    }
    Ok(())
}
