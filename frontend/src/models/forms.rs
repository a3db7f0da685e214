use crate::utils::messages;

/// A modal form with required fields and a canned confirmation.
pub trait ModalForm {
    fn is_complete(&self) -> bool;
    fn success_message(&self) -> &'static str;
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderForm {
    pub trx_id: String,
    pub phone: String,
}

impl ModalForm for OrderForm {
    fn is_complete(&self) -> bool {
        filled(&self.trx_id) && filled(&self.phone)
    }

    fn success_message(&self) -> &'static str {
        messages::ORDER_ACCEPTED
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub accepted_terms: bool,
}

impl ModalForm for RegistrationForm {
    fn is_complete(&self) -> bool {
        filled(&self.name)
            && filled(&self.email)
            && filled(&self.phone)
            && filled(&self.password)
            && self.accepted_terms
    }

    fn success_message(&self) -> &'static str {
        messages::ACCOUNT_CREATED
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
    pub remember_me: bool,
}

impl ModalForm for LoginForm {
    fn is_complete(&self) -> bool {
        filled(&self.identifier) && filled(&self.password)
    }

    fn success_message(&self) -> &'static str {
        messages::SIGNED_IN
    }
}
