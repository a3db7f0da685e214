use crate::behaviors::service_cards;
use crate::config;
use crate::error::FrontendError;
use crate::utils::dom;
use crate::utils::messages;
use crate::utils::recent_searches::RecentSearches;
use crate::utils::search::{self, SearchQuery};
use crate::utils::timers;
use crate::utils::ui_state::{NotificationKind, Ui};
use std::rc::Rc;
use web_sys::{Element, HtmlButtonElement, HtmlInputElement, KeyboardEvent, MouseEvent};

const HIGHLIGHT_SHADOW: &str = "0 0 0 3px var(--primary)";

pub fn install(ui: &Ui) -> Result<(), FrontendError> {
    let (Some(button), Some(input)) = (
        dom::query(".search-box button"),
        dom::query(".search-box input"),
    ) else {
        return Ok(());
    };
    let button: HtmlButtonElement = dom::cast(button, "a search <button>")?;
    let input: HtmlInputElement = dom::cast(input, "a search <input>")?;

    let perform: Rc<dyn Fn()> = {
        let ui = ui.clone();
        let button = button.clone();
        let input = input.clone();
        Rc::new(move || perform_search(&ui, &input, &button))
    };

    {
        let perform = perform.clone();
        dom::listen(&button, "click", move |_: MouseEvent| perform())?;
    }
    dom::listen(&input, "keypress", move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            perform();
        }
    })?;
    Ok(())
}

fn perform_search(ui: &Ui, input: &HtmlInputElement, button: &HtmlButtonElement) {
    // Enter while a lookup runs would capture the busy label as the idle one.
    if button.disabled() {
        return;
    }
    let query = match search::search_request(&input.value()) {
        Ok(query) => query,
        Err(warning) => {
            ui.dispatch(warning);
            if let Err(e) = input.focus() {
                log::debug!("Could not focus search input: {:?}", e);
            }
            return;
        }
    };

    ui.notify(messages::search_started(query.as_str()), NotificationKind::Success);
    simulate_lookup(ui, button, query.clone());

    match RecentSearches::browser().and_then(|recent| recent.record(query.as_str())) {
        Ok(true) => log::debug!("Saved \"{}\" to recent searches", query.as_str()),
        Ok(false) => {}
        Err(e) => log::warn!("Could not save recent search: {}", e),
    }
}

/// Shows a busy button for the simulated latency, then highlights the
/// matching cards and reports how many there were.
fn simulate_lookup(ui: &Ui, button: &HtmlButtonElement, query: SearchQuery) {
    let idle_label = button.text_content().unwrap_or_default();
    button.set_text_content(Some(messages::SEARCH_BUSY_LABEL));
    button.set_disabled(true);

    let ui = ui.clone();
    let button = button.clone();
    timers::after(config::SEARCH_LATENCY_MS, move || {
        button.set_text_content(Some(idle_label.as_str()));
        button.set_disabled(false);

        let cards = dom::query_all(".service-card");
        let views: Vec<_> = cards.iter().map(service_cards::card_view).collect();
        let matches = search::find_matches(&query, &views);
        for index in &matches {
            highlight(&cards[*index]);
        }
        log::debug!("Search \"{}\" matched {} of {} cards", query.as_str(), matches.len(), cards.len());

        let (message, kind) = search::report(&query, matches.len());
        ui.notify(message, kind);
    })
    .detach();
}

/// Each card clears its own highlight; a later search does not extend it.
fn highlight(card: &Element) {
    if let Err(e) = dom::set_style(card, "box-shadow", HIGHLIGHT_SHADOW) {
        log::warn!("Failed to highlight card: {}", e);
        return;
    }
    let card = card.clone();
    timers::after(config::HIGHLIGHT_DURATION_MS, move || {
        if let Err(e) = dom::set_style(&card, "box-shadow", "") {
            log::warn!("Failed to clear card highlight: {}", e);
        }
    })
    .detach();
}
