use crate::config;
use crate::error::FrontendError;
use crate::utils::clipboard;
use crate::utils::dom;
use crate::utils::messages;
use crate::utils::timers;
use crate::utils::ui_state::{NotificationKind, Ui};
use crate::utils::viewport::{self, InstructionsLayout};
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Element, Event, MouseEvent};

pub fn install(ui: &Ui) -> Result<(), FrontendError> {
    if dom::query(".payment-details").is_none() {
        return Ok(());
    }
    if let Some(number) = dom::query(".payment-number .number") {
        install_copy(ui, &number)?;
    }
    if let Some(instructions) = dom::query(".payment-instructions") {
        install_instructions_toggle(&instructions)?;
    }
    Ok(())
}

/// The payment number as the page first shows it. Clicks copy this value,
/// never whatever the element shows at the time.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PaymentNumber {
    displayed: String,
}

impl PaymentNumber {
    fn capture(displayed: &str) -> Option<Self> {
        let trimmed = displayed.trim();
        if trimmed.is_empty() || trimmed == messages::COPIED_LABEL {
            return None;
        }
        Some(Self {
            displayed: displayed.to_string(),
        })
    }

    fn copy_text(&self) -> String {
        self.displayed.trim().to_string()
    }
}

fn install_copy(ui: &Ui, number: &Element) -> Result<(), FrontendError> {
    let Some(captured) = PaymentNumber::capture(&number.text_content().unwrap_or_default()) else {
        log::warn!("Payment number element is empty; copy disabled");
        return Ok(());
    };
    dom::set_style(number, "cursor", "pointer")?;
    number.set_attribute("title", messages::COPY_HINT)?;

    let ui = ui.clone();
    let target = number.clone();
    dom::listen(number, "click", move |_: MouseEvent| {
        let ui = ui.clone();
        let target = target.clone();
        let captured = captured.clone();
        clipboard::copy_text(captured.copy_text(), move || {
            show_copied(&target, &captured);
            ui.notify(messages::PAYMENT_NUMBER_COPIED, NotificationKind::Success);
        });
    })
}

/// Swaps the number for a "copied" label and restores it afterwards.
fn show_copied(number: &Element, captured: &PaymentNumber) {
    number.set_text_content(Some(messages::COPIED_LABEL));
    if let Err(e) = dom::set_style(number, "color", "var(--secondary)") {
        log::warn!("Failed to style copied label: {}", e);
    }
    let number = number.clone();
    let original = captured.displayed.clone();
    timers::after(config::COPY_FEEDBACK_MS, move || {
        number.set_text_content(Some(original.as_str()));
        if let Err(e) = dom::set_style(&number, "color", "") {
            log::warn!("Failed to reset payment number color: {}", e);
        }
    })
    .detach();
}

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

fn apply_layout(
    instructions: &Element,
    toggle: &Element,
    layout: InstructionsLayout,
) -> Result<(), FrontendError> {
    dom::set_style(instructions, "display", display(layout.instructions_visible))?;
    dom::set_style(toggle, "display", display(layout.toggle_visible))?;
    toggle.set_text_content(Some(if layout.instructions_visible {
        messages::INSTRUCTIONS_COLLAPSE
    } else {
        messages::INSTRUCTIONS_EXPAND
    }));
    Ok(())
}

fn install_instructions_toggle(instructions: &Element) -> Result<(), FrontendError> {
    let Some(parent) = instructions.parent_node() else {
        return Ok(());
    };
    let toggle = dom::document()?.create_element("button")?;
    toggle.set_class_name("btn btn-outline");
    dom::set_style(&toggle, "margin-top", "15px")?;
    dom::set_style(&toggle, "width", "100%")?;
    parent.insert_before(&toggle, instructions.next_sibling().as_ref())?;

    let width = dom::inner_width().unwrap_or(config::MOBILE_BREAKPOINT_PX + 1.0);
    let layout = Rc::new(Cell::new(InstructionsLayout::initial(width)));
    apply_layout(instructions, &toggle, layout.get())?;
    log::debug!(
        "Payment instructions start {} (mobile: {})",
        display(layout.get().instructions_visible),
        viewport::is_mobile(width)
    );

    {
        let layout = layout.clone();
        let instructions = instructions.clone();
        let button = toggle.clone();
        dom::listen(&toggle, "click", move |_: MouseEvent| {
            layout.set(layout.get().toggled());
            if let Err(e) = apply_layout(&instructions, &button, layout.get()) {
                log::warn!("Failed to toggle payment instructions: {}", e);
            }
        })?;
    }

    let window = dom::window()?;
    let instructions = instructions.clone();
    dom::listen(&window, "resize", move |_: Event| {
        let Some(width) = dom::inner_width() else {
            return;
        };
        layout.set(layout.get().after_resize(width));
        if let Err(e) = apply_layout(&instructions, &toggle, layout.get()) {
            log::warn!("Failed to relayout payment instructions: {}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_the_trimmed_number() {
        let number = PaymentNumber::capture("  ০১৩১২-১৮৫২৭৭\n").unwrap();
        assert_eq!(number.copy_text(), "০১৩১২-১৮৫২৭৭");
    }

    #[test]
    fn second_click_during_feedback_copies_the_number() {
        let installed = PaymentNumber::capture("০১৩১২-১৮৫২৭৭").unwrap();
        // What the element shows right after the first copy.
        let shown = messages::COPIED_LABEL;
        assert_eq!(PaymentNumber::capture(shown), None);
        assert_eq!(installed.copy_text(), "০১৩১২-১৮৫২৭৭");
    }

    #[test]
    fn label_or_blank_text_is_not_a_number() {
        assert_eq!(PaymentNumber::capture(messages::COPIED_LABEL), None);
        assert_eq!(PaymentNumber::capture("   "), None);
    }
}
