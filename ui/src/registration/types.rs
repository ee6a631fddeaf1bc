// Core types for the registration form - no dioxus imports needed here
use super::submission::SubmissionOutcome;

pub const SUBMITTING_MESSAGE: &str = "Submitting your ticket...";
pub const SUCCESS_MESSAGE: &str = "Thanks! We have received your details.";

/// Ticket tiers offered by the event
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TicketType {
    #[default]
    Standard,
    Vip,
    Vvip,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Standard, TicketType::Vip, TicketType::Vvip];

    /// Value sent to the backend and bound to the select input
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Standard => "standard",
            TicketType::Vip => "vip",
            TicketType::Vvip => "vvip",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Standard => "Standard",
            TicketType::Vip => "VIP",
            TicketType::Vvip => "VVIP",
        }
    }
}

/// Gender choices shown in the attendee section
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gender {
    Female,
    Male,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::PreferNotToSay];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    /// Option value is the lowercased label
    pub fn value(&self) -> String {
        self.label().to_lowercase()
    }
}

/// Identifies one controlled input of the form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    FullName,
    Email,
    Phone,
    IdNumber,
    Gender,
    TicketType,
    Quantity,
    EventDate,
    EventLocation,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::FullName,
        FormField::Email,
        FormField::Phone,
        FormField::IdNumber,
        FormField::Gender,
        FormField::TicketType,
        FormField::Quantity,
        FormField::EventDate,
        FormField::EventLocation,
    ];

    /// HTML `name` attribute of the bound input
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::IdNumber => "idNumber",
            FormField::Gender => "gender",
            FormField::TicketType => "ticketType",
            FormField::Quantity => "quantity",
            FormField::EventDate => "eventDate",
            FormField::EventLocation => "eventLocation",
        }
    }

    /// Whether the browser enforces the `required` constraint on this field
    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            FormField::IdNumber | FormField::Gender | FormField::EventLocation
        )
    }
}

/// Current values of every input on the registration form
#[derive(Clone, PartialEq, Debug)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    pub gender: String,
    pub ticket_type: String,
    pub quantity: String,
    pub event_date: String,
    pub event_location: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            id_number: String::new(),
            gender: String::new(),
            ticket_type: TicketType::default().as_str().to_string(),
            quantity: "1".to_string(),
            event_date: String::new(),
            event_location: String::new(),
        }
    }
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::IdNumber => &self.id_number,
            FormField::Gender => &self.gender,
            FormField::TicketType => &self.ticket_type,
            FormField::Quantity => &self.quantity,
            FormField::EventDate => &self.event_date,
            FormField::EventLocation => &self.event_location,
        }
    }

    /// Replace a single field, leaving every other field untouched
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::IdNumber => &mut self.id_number,
            FormField::Gender => &mut self.gender,
            FormField::TicketType => &mut self.ticket_type,
            FormField::Quantity => &mut self.quantity,
            FormField::EventDate => &mut self.event_date,
            FormField::EventLocation => &mut self.event_location,
        };
        *slot = value;
    }
}

/// Progress of the most recent submission
#[derive(Clone, PartialEq, Debug, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    /// Text rendered under the form; empty while idle
    pub fn message(&self) -> &str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Submitting => SUBMITTING_MESSAGE,
            SubmissionStatus::Succeeded => SUCCESS_MESSAGE,
            SubmissionStatus::Failed(message) => message,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    UpdateField(FormField, String),
    SubmitStarted,
    SubmitFinished(SubmissionOutcome),
    DismissSuccess,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegistrationState {
    pub form: FormState,
    pub status: SubmissionStatus,
    pub show_success: bool,
}

impl RegistrationState {
    /// Reduces the state based on an action
    pub fn reduce(mut self, action: RegistrationAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::UpdateField(field, value) => {
                self.form.set(field, value);
            }
            RegistrationAction::SubmitStarted => {
                self.status = SubmissionStatus::Submitting;
            }
            RegistrationAction::SubmitFinished(Ok(_)) => {
                self.status = SubmissionStatus::Succeeded;
                self.form = FormState::default();
                self.show_success = true;
            }
            RegistrationAction::SubmitFinished(Err(error)) => {
                self.status = SubmissionStatus::Failed(error.user_message());
                self.show_success = false;
            }
            RegistrationAction::DismissSuccess => {
                self.show_success = false;
            }
        }
    }

    /// Status line to show, if any
    pub fn status_text(&self) -> Option<&str> {
        match self.status.message() {
            "" => None,
            message => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::submission::SubmissionError;
    use crate::services::client::ApiResponse;

    fn filled_form() -> FormState {
        FormState {
            full_name: "Ama Mensah".to_string(),
            email: "ama@example.com".to_string(),
            phone: "+233 555 123 456".to_string(),
            id_number: "GHA-123".to_string(),
            gender: "female".to_string(),
            ticket_type: "vip".to_string(),
            quantity: "3".to_string(),
            event_date: "2025-05-01".to_string(),
            event_location: "Accra".to_string(),
        }
    }

    #[test]
    fn test_default_form_state() {
        let form = FormState::default();
        assert_eq!(form.ticket_type, "standard");
        assert_eq!(form.quantity, "1");
        assert!(form.full_name.is_empty());
        assert!(form.event_date.is_empty());
        assert!(form.event_location.is_empty());
    }

    #[test]
    fn test_field_update_is_isolated() {
        for field in FormField::ALL {
            let original = filled_form();
            let mut state = RegistrationState {
                form: original.clone(),
                ..Default::default()
            };

            state.reduce_in_place(RegistrationAction::UpdateField(field, "changed".to_string()));

            for other in FormField::ALL {
                if other == field {
                    assert_eq!(state.form.get(other), "changed");
                } else {
                    assert_eq!(
                        state.form.get(other),
                        original.get(other),
                        "updating {:?} altered {:?}",
                        field,
                        other
                    );
                }
            }
        }
    }

    #[test]
    fn test_submit_started_sets_submitting_message() {
        let state = RegistrationState::default().reduce(RegistrationAction::SubmitStarted);
        assert_eq!(state.status_text(), Some(SUBMITTING_MESSAGE));
        assert!(state.status.is_submitting());
    }

    #[test]
    fn test_success_resets_form_and_shows_modal() {
        let state = RegistrationState {
            form: filled_form(),
            status: SubmissionStatus::Submitting,
            show_success: false,
        };

        let state = state.reduce(RegistrationAction::SubmitFinished(Ok(ApiResponse::new(
            201,
            "{}".to_string(),
        ))));

        assert_eq!(state.form, FormState::default());
        assert!(state.show_success);
        assert_eq!(state.status_text(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_failure_retains_form() {
        let state = RegistrationState {
            form: filled_form(),
            status: SubmissionStatus::Submitting,
            show_success: true,
        };

        let state = state.reduce(RegistrationAction::SubmitFinished(Err(
            SubmissionError::Rejected {
                status: 400,
                body: "Invalid email".to_string(),
            },
        )));

        assert_eq!(state.form, filled_form());
        assert!(!state.show_success);
        assert_eq!(state.status_text(), Some("Invalid email"));
    }

    #[test]
    fn test_dismiss_success_only_hides_modal() {
        let mut state = RegistrationState {
            form: filled_form(),
            status: SubmissionStatus::Succeeded,
            show_success: true,
        };

        state.reduce_in_place(RegistrationAction::DismissSuccess);

        assert!(!state.show_success);
        assert_eq!(state.status, SubmissionStatus::Succeeded);
        assert_eq!(state.form, filled_form());
    }

    #[test]
    fn test_idle_has_no_status_text() {
        assert_eq!(RegistrationState::default().status_text(), None);
    }

    #[test]
    fn test_default_ticket_type_is_standard() {
        assert_eq!(TicketType::default(), TicketType::Standard);
        assert_eq!(FormState::default().ticket_type, TicketType::default().as_str());
    }

    #[test]
    fn test_option_values() {
        let tickets: Vec<_> = TicketType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(tickets, vec!["standard", "vip", "vvip"]);
        assert_eq!(Gender::PreferNotToSay.value(), "prefer not to say");
        assert!(!FormField::IdNumber.is_required());
        assert!(FormField::Quantity.is_required());
    }
}
