use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const MIN_PHONE_DIGITS: usize = 10;

/// What the visitor typed into the contact form. Every field is always present,
/// an untouched field is just an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

impl FormField {
    /// The `name`/`id` attribute of the matching input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Company => "company",
            FormField::Message => "message",
        }
    }
}

impl ContactFormData {
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        }
    }

    /// Checks run in a fixed order and stop at the first failure:
    /// required fields, then email shape, then phone digit count.
    /// Whitespace is not trimmed, a single space counts as filled in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.email, &self.phone, &self.message];
        if required.iter().any(|value| value.is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Formatting characters like `+`, spaces and dashes are ignored, only digits count.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMsg {
    Edit(FormField, String),
    Submit,
    Delivered(String),
    Failed(String),
}

/// What the component has to do after a message was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    None,
    /// Hand this snapshot to the submission gateway.
    Send(ContactFormData),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub data: ContactFormData,
    pub status: FormStatus,
    pub error_message: String,
    pub success_message: String,
}

impl ContactFormState {
    pub fn apply(&mut self, msg: FormMsg) -> FormEffect {
        match msg {
            // Banners stay up until the next submit.
            FormMsg::Edit(field, value) => {
                *self.data.field_mut(field) = value;
                FormEffect::None
            }
            FormMsg::Submit => {
                if self.is_loading() {
                    log::debug!("Ignoring submit while a submission is in flight");
                    return FormEffect::None;
                }
                self.error_message.clear();
                self.success_message.clear();
                match self.data.validate() {
                    Ok(()) => {
                        self.status = FormStatus::Loading;
                        FormEffect::Send(self.data.clone())
                    }
                    Err(e) => {
                        log::debug!("Contact form rejected: {:?}", e);
                        self.error_message = e.to_string();
                        self.status = FormStatus::Error;
                        FormEffect::None
                    }
                }
            }
            FormMsg::Delivered(message) => {
                self.status = FormStatus::Success;
                self.success_message = message;
                self.data = ContactFormData::default();
                FormEffect::None
            }
            FormMsg::Failed(message) => {
                self.status = FormStatus::Error;
                self.error_message = message;
                FormEffect::None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FormStatus::Loading
    }

    pub fn success_banner(&self) -> Option<&str> {
        (self.status == FormStatus::Success && !self.success_message.is_empty())
            .then_some(self.success_message.as_str())
    }

    pub fn error_banner(&self) -> Option<&str> {
        (self.status == FormStatus::Error && !self.error_message.is_empty())
            .then_some(self.error_message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> ContactFormData {
        ContactFormData {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "9999999999".into(),
            company: String::new(),
            message: "Hello".into(),
        }
    }

    fn state_with(data: ContactFormData) -> ContactFormState {
        ContactFormState {
            data,
            ..Default::default()
        }
    }

    #[test]
    fn any_missing_required_field_is_rejected_before_loading() {
        for field in [
            FormField::Name,
            FormField::Email,
            FormField::Phone,
            FormField::Message,
        ] {
            let mut data = valid_form();
            data.field_mut(field).clear();
            let mut state = state_with(data);

            assert_eq!(state.apply(FormMsg::Submit), FormEffect::None);
            assert_eq!(state.status, FormStatus::Error, "{:?}", field);
            assert_eq!(
                state.error_banner(),
                Some("Please fill in all required fields.")
            );
        }
    }

    #[test]
    fn company_is_optional() {
        let mut data = valid_form();
        data.company.clear();
        assert_eq!(data.validate(), Ok(()));
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let mut data = valid_form();
        data.name = " ".into();
        assert_eq!(data.validate(), Ok(()));
    }

    #[test]
    fn missing_field_wins_over_bad_email_and_phone() {
        let data = ContactFormData {
            name: String::new(),
            email: "not-an-email".into(),
            phone: "123".into(),
            company: String::new(),
            message: "Hi".into(),
        };
        assert_eq!(data.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn email_shape() {
        for good in ["john@example.com", "a@b.c", "first.last@sub.domain.co.in"] {
            assert!(is_valid_email(good), "{}", good);
        }
        for bad in [
            "john",
            "john@example",
            "@example.com",
            "john@.com",
            "john@example.",
            "jo hn@example.com",
            "john@@example.com",
        ] {
            assert!(!is_valid_email(bad), "{}", bad);
        }
    }

    #[test]
    fn bad_email_is_reported_before_bad_phone() {
        let mut data = valid_form();
        data.email = "john@example".into();
        data.phone = "12".into();
        assert_eq!(data.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn phone_counts_digits_only() {
        assert!(is_valid_phone("+91 99995-08755"));
        assert!(is_valid_phone("(999) 999-9999"));
        assert!(!is_valid_phone("+1 555 0100"));
        assert!(!is_valid_phone("phone: nine"));
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut state = state_with(ContactFormData {
            phone: "999-999-999".into(),
            ..valid_form()
        });
        state.apply(FormMsg::Submit);
        assert_eq!(state.status, FormStatus::Error);
        assert_eq!(
            state.error_banner(),
            Some("Please enter a valid phone number.")
        );
    }

    #[test]
    fn valid_submit_loads_then_succeeds_and_clears() {
        let mut state = state_with(valid_form());

        let effect = state.apply(FormMsg::Submit);
        assert_eq!(effect, FormEffect::Send(valid_form()));
        assert_eq!(state.status, FormStatus::Loading);
        assert!(state.is_loading());
        assert_eq!(state.error_banner(), None);

        state.apply(FormMsg::Delivered(SUCCESS_MESSAGE.to_string()));
        assert_eq!(state.status, FormStatus::Success);
        assert_eq!(state.success_banner(), Some(SUCCESS_MESSAGE));
        assert_eq!(state.data, ContactFormData::default());
    }

    #[test]
    fn resubmitting_cleared_form_shows_missing_field_not_stale_success() {
        let mut state = state_with(valid_form());
        state.apply(FormMsg::Submit);
        state.apply(FormMsg::Delivered(SUCCESS_MESSAGE.to_string()));

        state.apply(FormMsg::Submit);
        assert_eq!(state.status, FormStatus::Error);
        assert_eq!(state.success_banner(), None);
        assert_eq!(state.success_message, "");
        assert_eq!(
            state.error_banner(),
            Some("Please fill in all required fields.")
        );
    }

    #[test]
    fn editing_keeps_status_and_banners() {
        let mut state = ContactFormState::default();
        state.apply(FormMsg::Submit);
        let error = state.error_message.clone();

        state.apply(FormMsg::Edit(FormField::Name, "Anita".into()));
        state.apply(FormMsg::Edit(FormField::Company, "NeoTech".into()));

        assert_eq!(state.status, FormStatus::Error);
        assert_eq!(state.error_message, error);
        assert_eq!(state.data.name, "Anita");
        assert_eq!(state.data.company, "NeoTech");
    }

    #[test]
    fn error_then_valid_submit_goes_to_loading() {
        let mut state = state_with(ContactFormData {
            email: "nope".into(),
            ..valid_form()
        });
        state.apply(FormMsg::Submit);
        assert_eq!(state.status, FormStatus::Error);

        state.apply(FormMsg::Edit(FormField::Email, "john@example.com".into()));
        assert!(matches!(state.apply(FormMsg::Submit), FormEffect::Send(_)));
        assert_eq!(state.status, FormStatus::Loading);
        assert_eq!(state.error_banner(), None);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut state = state_with(valid_form());
        state.apply(FormMsg::Submit);

        assert_eq!(state.apply(FormMsg::Submit), FormEffect::None);
        assert_eq!(state.status, FormStatus::Loading);
    }

    #[test]
    fn failed_delivery_keeps_fields() {
        let mut state = state_with(valid_form());
        state.apply(FormMsg::Submit);
        state.apply(FormMsg::Failed("Submission failed: offline".into()));

        assert_eq!(state.status, FormStatus::Error);
        assert_eq!(state.error_banner(), Some("Submission failed: offline"));
        assert_eq!(state.data, valid_form());
    }
}
