use crate::error::FrontendError;
use crate::utils::dom;
use crate::utils::viewport;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Node};

const OPEN_NAV_STYLE: &[(&str, &str)] = &[
    ("display", "block"),
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("right", "0"),
    ("background", "white"),
    ("padding", "20px"),
    ("box-shadow", "0 10px 20px rgba(0,0,0,0.1)"),
    ("z-index", "1000"),
];

fn open(nav: &Element) -> Result<(), FrontendError> {
    for (property, value) in OPEN_NAV_STYLE {
        dom::set_style(nav, property, value)?;
    }
    if let Some(list) = dom::query_in(nav, "ul") {
        dom::set_style(&list, "flex-direction", "column")?;
        dom::set_style(&list, "gap", "15px")?;
    }
    Ok(())
}

fn close(nav: &Element) -> Result<(), FrontendError> {
    dom::set_style(nav, "display", "none")
}

/// Collapses `nav` behind a hamburger button. Only set up when the page
/// loads on a mobile-width viewport.
pub fn install() -> Result<(), FrontendError> {
    let Some(header) = dom::query(".header-container") else {
        return Ok(());
    };
    let Some(nav) = dom::query("nav") else {
        return Ok(());
    };
    if !dom::inner_width().map(viewport::is_mobile).unwrap_or(false) {
        return Ok(());
    }

    let document = dom::document()?;
    let toggle = document.create_element("button")?;
    toggle.set_class_name("mobile-menu-toggle");
    toggle.set_inner_html(r#"<i class="fas fa-bars"></i>"#);
    for (property, value) in [
        ("background", "none"),
        ("border", "none"),
        ("font-size", "24px"),
        ("color", "var(--dark)"),
        ("cursor", "pointer"),
    ] {
        dom::set_style(&toggle, property, value)?;
    }
    let nav_node: &Node = &nav;
    header.insert_before(&toggle, Some(nav_node))?;
    close(&nav)?;

    let is_open = Rc::new(Cell::new(false));

    {
        let is_open = is_open.clone();
        let nav = nav.clone();
        dom::listen(&toggle, "click", move |_: MouseEvent| {
            let result = if is_open.get() { close(&nav) } else { open(&nav) };
            match result {
                Ok(()) => is_open.set(!is_open.get()),
                Err(e) => log::warn!("Failed to toggle mobile menu: {}", e),
            }
        })?;
    }

    dom::listen(&document, "click", move |e: MouseEvent| {
        if !is_open.get() {
            return;
        }
        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
        let target = target.as_ref();
        if nav.contains(target) || toggle.contains(target) {
            return;
        }
        match close(&nav) {
            Ok(()) => is_open.set(false),
            Err(e) => log::warn!("Failed to close mobile menu: {}", e),
        }
    })
}
