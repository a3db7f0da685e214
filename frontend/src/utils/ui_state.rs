//! Page-wide transient UI: the single notification toast and the single
//! open modal. Everything that shows or hides them goes through [`UiAction`].

use crate::config;
use crate::models::forms::ModalForm;
use crate::utils::messages;
use crate::utils::timers;
use std::cell::Cell;
use std::rc::Rc;
use yew::functional::{Reducible, UseReducerDispatcher};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Warning => "notification-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalVariant {
    /// Service details and order form; also used by the card order buttons.
    Service { title: String, price: String },
    Registration,
    Login,
}

impl ModalVariant {
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalVariant::Service { .. } => "serviceModal",
            ModalVariant::Registration => "registrationModal",
            ModalVariant::Login => "loginModal",
        }
    }

    /// The modal reached through the "switch" link, if this one has it.
    pub fn counterpart(&self) -> Option<ModalVariant> {
        match self {
            ModalVariant::Registration => Some(ModalVariant::Login),
            ModalVariant::Login => Some(ModalVariant::Registration),
            ModalVariant::Service { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modal {
    pub id: u64,
    pub variant: ModalVariant,
    /// Set once the form was accepted; the modal closes shortly after.
    pub submitted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    Notify { message: String, kind: NotificationKind },
    DismissNotification(u64),
    OpenModal { id: u64, variant: ModalVariant },
    CloseModal(u64),
    /// Replaces modal `from` with its counterpart, opened under `id`.
    SwitchModal { from: u64, id: u64 },
    MarkSubmitted(u64),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub notification: Option<Notification>,
    pub modal: Option<Modal>,
    next_id: u64,
}

impl UiState {
    fn issue_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn is_current_modal(&self, id: u64) -> bool {
        self.modal.as_ref().map(|m| m.id) == Some(id)
    }

    fn open(&mut self, id: u64, variant: ModalVariant) {
        if let Some(previous) = self.modal.take() {
            log::debug!("Replacing {} with {}", previous.variant.element_id(), variant.element_id());
        }
        self.modal = Some(Modal {
            id,
            variant,
            submitted: false,
        });
    }
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UiAction::Notify { message, kind } => {
                let id = next.issue_id();
                next.notification = Some(Notification { id, message, kind });
            }
            UiAction::DismissNotification(id) => {
                // Expiry timers of replaced toasts must not hide their successor.
                if next.notification.as_ref().map(|n| n.id) != Some(id) {
                    return self;
                }
                next.notification = None;
            }
            UiAction::OpenModal { id, variant } => next.open(id, variant),
            UiAction::CloseModal(id) => {
                if !next.is_current_modal(id) {
                    return self;
                }
                next.modal = None;
            }
            UiAction::SwitchModal { from, id } => {
                let target = next
                    .modal
                    .as_ref()
                    .filter(|m| m.id == from)
                    .and_then(|m| m.variant.counterpart());
                let Some(target) = target else {
                    return self;
                };
                next.open(id, target);
            }
            UiAction::MarkSubmitted(id) => match next.modal.as_mut() {
                Some(modal) if modal.id == id => modal.submitted = true,
                _ => return self,
            },
        }
        Rc::new(next)
    }
}

/// What a modal form submission does to the UI: a warning when a
/// required field is empty, otherwise the confirmation and the submitted mark.
pub fn submission_actions<F: ModalForm>(modal_id: u64, form: &F) -> Vec<UiAction> {
    if !form.is_complete() {
        return vec![UiAction::Notify {
            message: messages::FORM_INCOMPLETE.to_string(),
            kind: NotificationKind::Warning,
        }];
    }
    vec![
        UiAction::Notify {
            message: form.success_message().to_string(),
            kind: NotificationKind::Success,
        },
        UiAction::MarkSubmitted(modal_id),
    ]
}

fn allocate(counter: &Cell<u64>) -> u64 {
    let id = counter.get() + 1;
    counter.set(id);
    id
}

/// Handle through which components and page listeners drive [`UiState`].
///
/// Modal ids are allocated here so that opening a modal can hand the caller
/// its id right away.
#[derive(Clone)]
pub struct Ui {
    dispatcher: UseReducerDispatcher<UiState>,
    modal_ids: Rc<Cell<u64>>,
}

impl PartialEq for Ui {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.modal_ids, &other.modal_ids)
    }
}

/// An opened modal; closing it is a no-op once another modal replaced it.
#[derive(Clone, PartialEq)]
pub struct ModalHandle {
    ui: Ui,
    id: u64,
}

impl ModalHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn close(&self) {
        self.ui.close_modal(self.id);
    }
}

impl Ui {
    pub fn new(dispatcher: UseReducerDispatcher<UiState>, modal_ids: Rc<Cell<u64>>) -> Self {
        Self {
            dispatcher,
            modal_ids,
        }
    }

    pub fn dispatch(&self, action: UiAction) {
        self.dispatcher.dispatch(action);
    }

    /// Shows `message`, replacing whatever toast is visible.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        self.dispatch(UiAction::Notify {
            message: message.into(),
            kind,
        });
    }

    pub fn dismiss_notification(&self, id: u64) {
        self.dispatch(UiAction::DismissNotification(id));
    }

    pub fn open_modal(&self, variant: ModalVariant) -> ModalHandle {
        let id = allocate(&self.modal_ids);
        self.dispatch(UiAction::OpenModal { id, variant });
        self.modal(id)
    }

    /// Handle for a modal opened earlier, e.g. the one a component renders.
    pub fn modal(&self, id: u64) -> ModalHandle {
        ModalHandle {
            ui: self.clone(),
            id,
        }
    }

    pub fn close_modal(&self, id: u64) {
        self.dispatch(UiAction::CloseModal(id));
    }

    pub fn switch_modal(&self, from: u64) {
        let id = allocate(&self.modal_ids);
        self.dispatch(UiAction::SwitchModal { from, id });
    }

    /// Applies [`submission_actions`]; an accepted form also closes its
    /// modal after the fixed delay.
    pub fn submit_form<F: ModalForm>(&self, modal_id: u64, form: &F) {
        let actions = submission_actions(modal_id, form);
        let accepted = actions.contains(&UiAction::MarkSubmitted(modal_id));
        for action in actions {
            self.dispatch(action);
        }
        if accepted {
            let dispatcher = self.dispatcher.clone();
            timers::after(config::MODAL_CLOSE_DELAY_MS, move || {
                dispatcher.dispatch(UiAction::CloseModal(modal_id));
            })
            .detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forms::{LoginForm, OrderForm};

    fn apply(state: Rc<UiState>, actions: Vec<UiAction>) -> Rc<UiState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn notify(message: &str, kind: NotificationKind) -> UiAction {
        UiAction::Notify {
            message: message.to_string(),
            kind,
        }
    }

    fn open(id: u64, variant: ModalVariant) -> UiAction {
        UiAction::OpenModal { id, variant }
    }

    fn service() -> ModalVariant {
        ModalVariant::Service {
            title: "Logo Design".to_string(),
            price: "৳৫০০".to_string(),
        }
    }

    fn filled_order() -> OrderForm {
        OrderForm {
            trx_id: "8A7BC9D2E1F".to_string(),
            phone: "01712345678".to_string(),
        }
    }

    #[test]
    fn second_notification_replaces_the_first() {
        let state = apply(
            Rc::new(UiState::default()),
            vec![
                notify("first", NotificationKind::Info),
                notify("second", NotificationKind::Success),
            ],
        );
        let shown = state.notification.as_ref().unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.kind, NotificationKind::Success);
    }

    #[test]
    fn stale_expiry_keeps_the_newer_notification() {
        let state = Rc::new(UiState::default()).reduce(notify("first", NotificationKind::Info));
        let first_id = state.notification.as_ref().unwrap().id;
        let state = state.reduce(notify("second", NotificationKind::Warning));
        let state = state.reduce(UiAction::DismissNotification(first_id));
        assert_eq!(state.notification.as_ref().unwrap().message, "second");
    }

    #[test]
    fn expiry_dismisses_the_current_notification() {
        let state = Rc::new(UiState::default()).reduce(notify("hi", NotificationKind::Info));
        let id = state.notification.as_ref().unwrap().id;
        let state = state.reduce(UiAction::DismissNotification(id));
        assert!(state.notification.is_none());
    }

    #[test]
    fn modal_ids_are_allocated_in_order() {
        let counter = Cell::new(0);
        assert_eq!(allocate(&counter), 1);
        assert_eq!(allocate(&counter), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn opened_modal_carries_the_allocated_id() {
        let counter = Cell::new(0);
        let id = allocate(&counter);
        let state = Rc::new(UiState::default()).reduce(open(id, ModalVariant::Login));
        assert_eq!(state.modal.as_ref().unwrap().id, id);
    }

    #[test]
    fn closing_by_id_only_closes_that_modal() {
        let counter = Cell::new(0);
        let first = allocate(&counter);
        let second = allocate(&counter);
        let state = apply(
            Rc::new(UiState::default()),
            vec![open(first, service()), open(second, ModalVariant::Registration)],
        );
        let state = state.reduce(UiAction::CloseModal(first));
        assert_eq!(state.modal.as_ref().unwrap().id, second);
        let state = state.reduce(UiAction::CloseModal(second));
        assert!(state.modal.is_none());
    }

    #[test]
    fn opening_a_modal_replaces_the_open_one() {
        let state = apply(
            Rc::new(UiState::default()),
            vec![open(1, ModalVariant::Registration), open(2, service())],
        );
        assert_eq!(state.modal.as_ref().unwrap().variant, service());
    }

    #[test]
    fn switching_from_registration_leaves_only_login() {
        let state = Rc::new(UiState::default()).reduce(open(1, ModalVariant::Registration));
        let state = state.reduce(UiAction::SwitchModal { from: 1, id: 2 });
        let modal = state.modal.as_ref().unwrap();
        assert_eq!(modal.variant, ModalVariant::Login);
        assert_eq!(modal.id, 2);

        let state = state.reduce(UiAction::CloseModal(1));
        assert_eq!(state.modal.as_ref().unwrap().variant, ModalVariant::Login);
    }

    #[test]
    fn switching_back_from_login() {
        let state = Rc::new(UiState::default()).reduce(open(1, ModalVariant::Login));
        let state = state.reduce(UiAction::SwitchModal { from: 1, id: 2 });
        assert_eq!(state.modal.as_ref().unwrap().variant, ModalVariant::Registration);
    }

    #[test]
    fn switch_from_a_replaced_modal_is_ignored() {
        let state = apply(
            Rc::new(UiState::default()),
            vec![open(1, ModalVariant::Registration), open(2, ModalVariant::Login)],
        );
        let after = state.clone().reduce(UiAction::SwitchModal { from: 1, id: 3 });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn service_modal_has_no_switch() {
        let state = Rc::new(UiState::default()).reduce(open(1, service()));
        let after = state.clone().reduce(UiAction::SwitchModal { from: 1, id: 2 });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn delayed_close_only_affects_its_own_modal() {
        let state = apply(
            Rc::new(UiState::default()),
            vec![
                open(1, service()),
                UiAction::MarkSubmitted(1),
                open(2, ModalVariant::Login),
                UiAction::CloseModal(1),
            ],
        );
        let modal = state.modal.as_ref().unwrap();
        assert_eq!(modal.variant, ModalVariant::Login);
        assert!(!modal.submitted);
    }

    #[test]
    fn incomplete_form_only_warns() {
        let form = OrderForm {
            trx_id: "8A7BC9D2E1F".to_string(),
            phone: String::new(),
        };
        let actions = submission_actions(1, &form);
        assert_eq!(
            actions,
            vec![notify(messages::FORM_INCOMPLETE, NotificationKind::Warning)]
        );

        let state = apply(
            Rc::new(UiState::default()).reduce(open(1, service())),
            actions,
        );
        let modal = state.modal.as_ref().unwrap();
        assert!(!modal.submitted);
        assert_eq!(state.notification.as_ref().unwrap().kind, NotificationKind::Warning);
    }

    #[test]
    fn complete_form_confirms_then_closes() {
        let actions = submission_actions(1, &filled_order());
        assert_eq!(
            actions,
            vec![
                notify(messages::ORDER_ACCEPTED, NotificationKind::Success),
                UiAction::MarkSubmitted(1),
            ]
        );

        let state = apply(
            Rc::new(UiState::default()).reduce(open(1, service())),
            actions,
        );
        assert!(state.modal.as_ref().unwrap().submitted);
        assert_eq!(state.notification.as_ref().unwrap().kind, NotificationKind::Success);

        // The delayed close scheduled for the accepted form.
        let state = state.reduce(UiAction::CloseModal(1));
        assert!(state.modal.is_none());
    }

    #[test]
    fn login_success_uses_its_own_message() {
        let form = LoginForm {
            identifier: "rahim@example.com".to_string(),
            password: "secret123".to_string(),
            remember_me: true,
        };
        let actions = submission_actions(4, &form);
        assert_eq!(actions[0], notify(messages::SIGNED_IN, NotificationKind::Success));
        assert_eq!(actions[1], UiAction::MarkSubmitted(4));
    }

    #[test]
    fn modal_and_notification_are_independent() {
        let state = apply(
            Rc::new(UiState::default()),
            vec![
                open(1, ModalVariant::Login),
                notify("warn", NotificationKind::Warning),
            ],
        );
        assert!(state.modal.is_some());
        assert!(state.notification.is_some());
    }
}
