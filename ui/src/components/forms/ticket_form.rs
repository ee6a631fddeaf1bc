use dioxus::prelude::*;

use crate::components::{
    display::StatusMessage,
    inputs::{FieldInput, FieldSelect, InputType, SelectOption},
};
use crate::registration::*;
use crate::services::client::TicketClient;

// Import console macros
use crate::{console_debug, console_error};

#[derive(Props, PartialEq, Clone)]
pub struct TicketFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
}

fn ticket_options() -> Vec<SelectOption> {
    TicketType::ALL
        .iter()
        .map(|ticket| SelectOption::new(ticket.as_str(), ticket.label()))
        .collect()
}

fn gender_options() -> Vec<SelectOption> {
    Gender::ALL
        .iter()
        .map(|gender| SelectOption::new(gender.value(), gender.label()))
        .collect()
}

#[component]
pub fn TicketForm(props: TicketFormProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;
    let client = use_context::<Option<TicketClient>>();

    let update = move |field: FormField| {
        move |value: String| dispatch.call(RegistrationAction::UpdateField(field, value))
    };

    let form = state().form;

    rsx! {
        form {
            class: "ticket-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                // Snapshot before spawning so edits made while in flight are not sent
                let payload = state.with_mut(begin_submission);
                console_debug!(
                    "[TicketForm] Submitting {} x {} ticket(s)",
                    payload.quantity,
                    payload.ticket_type
                );

                let client = client.clone();
                spawn(async move {
                    let outcome = match client {
                        Some(client) => submit_ticket(&client, payload).await,
                        None => Err(SubmissionError::Network {
                            message: "Ticket client unavailable".to_string(),
                        }),
                    };

                    if let Err(e) = &outcome {
                        console_error!("[TicketForm] Ticket submission failed: {}", e);
                    }
                    dispatch.call(RegistrationAction::SubmitFinished(outcome));
                });
            },

            div {
                class: "ticket-section",
                h2 { "1️⃣ Attendee Information" }
                div {
                    class: "ticket-grid",
                    FieldInput {
                        name: FormField::FullName.name(),
                        label: "Full Name",
                        value: form.full_name,
                        input_type: InputType::Text,
                        placeholder: "e.g., Ama Mensah".to_string(),
                        required: FormField::FullName.is_required(),
                        on_change: update(FormField::FullName)
                    }
                    FieldInput {
                        name: FormField::Email.name(),
                        label: "Email Address",
                        value: form.email,
                        input_type: InputType::Email,
                        placeholder: "name@email.com".to_string(),
                        required: FormField::Email.is_required(),
                        on_change: update(FormField::Email)
                    }
                    FieldInput {
                        name: FormField::Phone.name(),
                        label: "Phone Number",
                        value: form.phone,
                        input_type: InputType::Tel,
                        placeholder: "+233 555 123 456".to_string(),
                        required: FormField::Phone.is_required(),
                        on_change: update(FormField::Phone)
                    }
                    FieldInput {
                        name: FormField::IdNumber.name(),
                        label: "National ID / Passport",
                        value: form.id_number,
                        input_type: InputType::Text,
                        placeholder: "ID number".to_string(),
                        required: FormField::IdNumber.is_required(),
                        on_change: update(FormField::IdNumber)
                    }
                    FieldSelect {
                        name: FormField::Gender.name(),
                        label: "Gender",
                        value: form.gender,
                        options: gender_options(),
                        placeholder: "Select gender".to_string(),
                        required: FormField::Gender.is_required(),
                        on_change: update(FormField::Gender)
                    }
                }
            }

            div {
                class: "ticket-section",
                h2 { "2️⃣ Ticket Information" }
                div {
                    class: "ticket-grid",
                    FieldSelect {
                        name: FormField::TicketType.name(),
                        label: "Ticket Type",
                        value: form.ticket_type,
                        options: ticket_options(),
                        required: FormField::TicketType.is_required(),
                        on_change: update(FormField::TicketType)
                    }
                    FieldInput {
                        name: FormField::Quantity.name(),
                        label: "Quantity",
                        value: form.quantity,
                        input_type: InputType::Number,
                        min: "1".to_string(),
                        max: "10".to_string(),
                        required: FormField::Quantity.is_required(),
                        on_change: update(FormField::Quantity)
                    }
                    FieldInput {
                        name: FormField::EventDate.name(),
                        label: "Event Date",
                        value: form.event_date,
                        input_type: InputType::Date,
                        required: FormField::EventDate.is_required(),
                        on_change: update(FormField::EventDate)
                    }
                    FieldInput {
                        name: FormField::EventLocation.name(),
                        label: "Event Location",
                        value: form.event_location,
                        input_type: InputType::Text,
                        placeholder: "Venue or city".to_string(),
                        required: FormField::EventLocation.is_required(),
                        on_change: update(FormField::EventLocation)
                    }
                }
            }

            div {
                class: "ticket-footer",
                p { "We will email your confirmed tickets immediately after submission." }
                button {
                    r#type: "submit",
                    "aria-busy": "{state().status.is_submitting()}",
                    "Submit Ticket Request"
                }
            }

            StatusMessage {
                status: state().status
            }
        }
    }
}
