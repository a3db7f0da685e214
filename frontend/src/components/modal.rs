use crate::config;
use crate::models::forms::{LoginForm, OrderForm, RegistrationForm};
use crate::utils::clipboard;
use crate::utils::messages;
use crate::utils::styles;
use crate::utils::timers;
use crate::utils::ui_state::{Modal, ModalVariant, Ui};
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn heading(variant: &ModalVariant) -> String {
    match variant {
        ModalVariant::Service { title, .. } => title.clone(),
        ModalVariant::Registration => "BDeskGigs এ অ্যাকাউন্ট তৈরি করুন".to_string(),
        ModalVariant::Login => "BDeskGigs এ সাইন ইন করুন".to_string(),
    }
}

/// Text input that writes its value back through `apply`.
fn text_input<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    apply: fn(&mut T, String),
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.value());
        state.set(next);
    })
}

fn checkbox<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    apply: fn(&mut T, bool),
) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.checked());
        state.set(next);
    })
}

fn switch_link(ui: &Ui, modal_id: u64) -> Callback<MouseEvent> {
    let ui = ui.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        ui.switch_modal(modal_id);
    })
}

#[derive(Properties, PartialEq)]
pub struct ModalHostProps {
    pub ui: Ui,
    pub modal: Option<Modal>,
}

/// Renders the open modal, if any, inside the shared overlay shell.
#[function_component(ModalHost)]
pub fn modal_host(props: &ModalHostProps) -> Html {
    let is_open = props.modal.is_some();
    use_effect_with_deps(
        |open: &bool| {
            if *open {
                if let Err(e) = styles::ensure_stylesheet(styles::MODAL_STYLE_ID, styles::MODAL_CSS) {
                    log::warn!("Failed to install modal styles: {}", e);
                }
            }
            || ()
        },
        is_open,
    );

    let Some(modal) = props.modal.as_ref() else {
        return html! {};
    };
    let ui = props.ui.clone();
    let modal_id = modal.id;

    let on_close = {
        let handle = ui.modal(modal_id);
        Callback::from(move |_: MouseEvent| handle.close())
    };
    // Clicks inside the content never reach the overlay's close handler.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match &modal.variant {
        ModalVariant::Service { price, .. } => html! {
            <ServiceModalBody
                ui={ui.clone()}
                modal_id={modal_id}
                price={price.clone()}
                submitted={modal.submitted}
            />
        },
        ModalVariant::Registration => html! {
            <RegistrationModalBody ui={ui.clone()} modal_id={modal_id} submitted={modal.submitted} />
        },
        ModalVariant::Login => html! {
            <LoginModalBody ui={ui.clone()} modal_id={modal_id} submitted={modal.submitted} />
        },
    };

    html! {
        <div
            class="modal-overlay"
            id={modal.variant.element_id()}
            key={modal_id.to_string()}
            onclick={on_close.clone()}
        >
            <div class="modal-content" onclick={keep_open}>
                <div class="modal-header">
                    <h3>{heading(&modal.variant)}</h3>
                    <button class="modal-close" onclick={on_close}>{"×"}</button>
                </div>
                <div class="modal-body">
                    {body}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceModalBodyProps {
    pub ui: Ui,
    pub modal_id: u64,
    pub price: String,
    pub submitted: bool,
}

#[function_component(ServiceModalBody)]
pub fn service_modal_body(props: &ServiceModalBodyProps) -> Html {
    let form = use_state(OrderForm::default);
    let copied = use_state(|| false);

    // Reset the copy label; the pending reset dies with the modal.
    {
        let reset = copied.clone();
        use_effect_with_deps(
            move |is_copied: &bool| {
                let pending = is_copied.then(|| {
                    timers::after(config::COPY_FEEDBACK_MS, move || reset.set(false))
                });
                move || {
                    if let Some(task) = pending {
                        task.cancel();
                    }
                }
            },
            *copied,
        );
    }

    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            clipboard::copy_text(config::get_payment_number().trim().to_string(), move || {
                copied.set(true)
            });
        })
    };

    let onsubmit = {
        let ui = props.ui.clone();
        let form = form.clone();
        let modal_id = props.modal_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            ui.submit_form(modal_id, &*form);
        })
    };

    html! {
        <>
            <div class="modal-price">{props.price.clone()}</div>
            <p>{"এই সার্ভিসটি অর্ডার করতে পেমেন্ট করুন নিচের নম্বরটিতে:"}</p>
            <div class="payment-number-modal">
                <div class="number">{config::get_payment_number()}</div>
                <button class="btn btn-primary copy-btn" type="button" onclick={on_copy}>
                    {if *copied { messages::COPIED_LABEL } else { messages::COPY_LABEL }}
                </button>
            </div>
            <p>{"পেমেন্ট করে ট্রানজেকশন আইডি নিচের ফর্মে জমা দিন:"}</p>
            <form id="paymentForm" novalidate=true onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="trxId">{"ট্রানজেকশন আইডি (TrxID)"}</label>
                    <input
                        type="text"
                        id="trxId"
                        placeholder="উদাহরণ: 8A7BC9D2E1F"
                        value={form.trx_id.clone()}
                        oninput={text_input(&form, |f: &mut OrderForm, v| f.trx_id = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="userPhone">{"আপনার মোবাইল নম্বর"}</label>
                    <input
                        type="tel"
                        id="userPhone"
                        placeholder="০১৭XXXXXXXX"
                        value={form.phone.clone()}
                        oninput={text_input(&form, |f: &mut OrderForm, v| f.phone = v)}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={props.submitted}>
                    {"অর্ডার কনফার্ম করুন"}
                </button>
            </form>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountModalBodyProps {
    pub ui: Ui,
    pub modal_id: u64,
    pub submitted: bool,
}

#[function_component(RegistrationModalBody)]
pub fn registration_modal_body(props: &AccountModalBodyProps) -> Html {
    let form = use_state(RegistrationForm::default);

    let onsubmit = {
        let ui = props.ui.clone();
        let form = form.clone();
        let modal_id = props.modal_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            ui.submit_form(modal_id, &*form);
        })
    };

    html! {
        <>
            <form id="registrationForm" novalidate=true onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="regName">{"পূর্ণ নাম"}</label>
                    <input
                        type="text"
                        id="regName"
                        placeholder="আপনার পূর্ণ নাম"
                        value={form.name.clone()}
                        oninput={text_input(&form, |f: &mut RegistrationForm, v| f.name = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="regEmail">{"ইমেইল ঠিকানা"}</label>
                    <input
                        type="email"
                        id="regEmail"
                        placeholder="example@email.com"
                        value={form.email.clone()}
                        oninput={text_input(&form, |f: &mut RegistrationForm, v| f.email = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="regPhone">{"মোবাইল নম্বর"}</label>
                    <input
                        type="tel"
                        id="regPhone"
                        placeholder="০১৭XXXXXXXX"
                        value={form.phone.clone()}
                        oninput={text_input(&form, |f: &mut RegistrationForm, v| f.phone = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="regPassword">{"পাসওয়ার্ড"}</label>
                    <input
                        type="password"
                        id="regPassword"
                        placeholder="অন্তত ৮ অক্ষর"
                        value={form.password.clone()}
                        oninput={text_input(&form, |f: &mut RegistrationForm, v| f.password = v)}
                    />
                </div>
                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            checked={form.accepted_terms}
                            onchange={checkbox(&form, |f: &mut RegistrationForm, v| f.accepted_terms = v)}
                        />
                        {" আমি "}<a href="#">{"Terms of Service"}</a>{" এবং "}
                        <a href="#">{"Privacy Policy"}</a>{" এর শর্তাবলী মেনে চলতে সম্মত"}
                    </label>
                </div>
                <button type="submit" class="btn btn-primary" disabled={props.submitted}>
                    {"অ্যাকাউন্ট তৈরি করুন"}
                </button>
            </form>
            <p class="modal-switch">
                {"ইতিমধ্যে অ্যাকাউন্ট আছে? "}
                <a href="#" class="switch-to-login" onclick={switch_link(&props.ui, props.modal_id)}>
                    {"সাইন ইন করুন"}
                </a>
            </p>
        </>
    }
}

#[function_component(LoginModalBody)]
pub fn login_modal_body(props: &AccountModalBodyProps) -> Html {
    let form = use_state(LoginForm::default);

    let onsubmit = {
        let ui = props.ui.clone();
        let form = form.clone();
        let modal_id = props.modal_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.remember_me {
                log::debug!("Sign-in requested with remember-me");
            }
            ui.submit_form(modal_id, &*form);
        })
    };

    html! {
        <>
            <form id="loginForm" novalidate=true onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="loginEmail">{"ইমেইল বা মোবাইল নম্বর"}</label>
                    <input
                        type="text"
                        id="loginEmail"
                        placeholder="example@email.com বা ০১৭XXXXXXXX"
                        value={form.identifier.clone()}
                        oninput={text_input(&form, |f: &mut LoginForm, v| f.identifier = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="loginPassword">{"পাসওয়ার্ড"}</label>
                    <input
                        type="password"
                        id="loginPassword"
                        placeholder="আপনার পাসওয়ার্ড"
                        value={form.password.clone()}
                        oninput={text_input(&form, |f: &mut LoginForm, v| f.password = v)}
                    />
                </div>
                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            checked={form.remember_me}
                            onchange={checkbox(&form, |f: &mut LoginForm, v| f.remember_me = v)}
                        />
                        {" আমাকে মনে রাখুন"}
                    </label>
                </div>
                <button type="submit" class="btn btn-primary" disabled={props.submitted}>
                    {"সাইন ইন করুন"}
                </button>
            </form>
            <p class="modal-switch">
                {"অ্যাকাউন্ট নেই? "}
                <a href="#" class="switch-to-register" onclick={switch_link(&props.ui, props.modal_id)}>
                    {"অ্যাকাউন্ট তৈরি করুন"}
                </a>
            </p>
        </>
    }
}
