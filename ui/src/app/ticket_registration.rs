use crate::{console_info, console_warn};
use dioxus::prelude::*;

use crate::components::display::SuccessModal;
use crate::components::forms::TicketForm;
use crate::registration::{RegistrationAction, RegistrationState};
use crate::services::client::TicketClient;
use crate::services::config::ApiConfig;

const TICKET_REGISTRATION_CSS: Asset = asset!("/assets/styling/ticket_registration.css");

#[component]
pub fn TicketRegistration() -> Element {
    // Consolidated state management
    let mut state = use_signal(RegistrationState::default);

    // Backend client shared with the form through context
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        match TicketClient::new(config) {
            Ok(client) => {
                console_info!(
                    "[TicketRegistration] Using ticket API at {}",
                    client.config().base_url
                );
                Some(client)
            }
            Err(e) => {
                console_warn!("[TicketRegistration] Ticket client unavailable: {}", e);
                None
            }
        }
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: TICKET_REGISTRATION_CSS }

        section {
            class: "ticket-wrapper",
            div {
                class: "ticket-arc",
                "aria-hidden": "true"
            }

            div {
                class: "ticket-card",
                p {
                    class: "ticket-eyebrow",
                    "Secure your spot"
                }
                h1 {
                    class: "ticket-title",
                    "Event Ticket Registration"
                }
                p {
                    class: "ticket-subtitle",
                    "Provide attendee information and ticket preferences so we can reserve your seat instantly."
                }

                TicketForm {
                    state: state,
                    dispatch: dispatch
                }
            }

            if state().show_success {
                SuccessModal {
                    on_dismiss: move |_| dispatch.call(RegistrationAction::DismissSuccess)
                }
            }
        }
    }
}
