use crate::config;
use crate::utils::styles;
use crate::utils::timers;
use crate::utils::ui_state::{Notification, Ui};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub ui: Ui,
    pub notification: Option<Notification>,
}

/// The single toast. Every new notification gets its own expiry timer; the
/// reducer ignores expiries of toasts that were already replaced.
#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    {
        let ui = props.ui.clone();
        let current = props.notification.as_ref().map(|n| n.id);
        use_effect_with_deps(
            move |current: &Option<u64>| {
                if let Some(id) = *current {
                    if let Err(e) = styles::ensure_stylesheet(
                        styles::NOTIFICATION_STYLE_ID,
                        styles::NOTIFICATION_CSS,
                    ) {
                        log::warn!("Failed to install notification styles: {}", e);
                    }
                    timers::after(config::NOTIFICATION_LIFETIME_MS, move || {
                        ui.dismiss_notification(id)
                    })
                    .detach();
                }
                || ()
            },
            current,
        );
    }

    match &props.notification {
        Some(notification) => html! {
            <div
                key={notification.id.to_string()}
                class={classes!("notification", notification.kind.css_class())}
            >
                {notification.message.clone()}
            </div>
        },
        None => html! {},
    }
}
