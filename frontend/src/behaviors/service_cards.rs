use crate::error::FrontendError;
use crate::utils::dom;
use crate::utils::messages;
use crate::utils::search::ServiceCardView;
use crate::utils::ui_state::{ModalVariant, Ui};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Reads a `.service-card` the way the search and the modals see it.
pub fn card_view(card: &Element) -> ServiceCardView {
    ServiceCardView {
        title: dom::text_in(card, "h3"),
        description: dom::text_in(card, "p"),
        price: dom::text_in(card, ".service-price"),
    }
}

fn service_modal(card: &Element) -> ModalVariant {
    let view = card_view(card);
    ModalVariant::Service {
        title: view.title,
        price: view.price,
    }
}

fn is_on_button(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("button").ok().flatten())
        .is_some()
}

pub fn install(ui: &Ui) -> Result<(), FrontendError> {
    for card in dom::query_all(".service-card") {
        {
            let ui = ui.clone();
            let target = card.clone();
            dom::listen(&card, "click", move |e: MouseEvent| {
                if is_on_button(&e) {
                    return;
                }
                ui.open_modal(service_modal(&target));
            })?;
        }

        if dom::query_in(&card, ".btn-order").is_none() {
            if let Some(footer) = dom::query_in(&card, ".service-footer") {
                add_order_button(ui, &card, &footer)?;
            }
        }
    }
    Ok(())
}

fn add_order_button(ui: &Ui, card: &Element, footer: &Element) -> Result<(), FrontendError> {
    let button = dom::document()?.create_element("button")?;
    button.set_class_name("btn btn-primary btn-order");
    button.set_text_content(Some(messages::ORDER_BUTTON));
    dom::set_style(&button, "margin-top", "10px")?;
    dom::set_style(&button, "width", "100%")?;
    footer.append_child(&button)?;

    let ui = ui.clone();
    let card = card.clone();
    dom::listen(&button, "click", move |e: MouseEvent| {
        e.stop_propagation();
        ui.open_modal(service_modal(&card));
    })
}
