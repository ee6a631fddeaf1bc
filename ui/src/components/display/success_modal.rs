use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SuccessModalProps {
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn SuccessModal(props: SuccessModalProps) -> Element {
    rsx! {
        div {
            class: "ticket-modal",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "ticket-modal-title",
            "aria-describedby": "ticket-modal-description",
            div {
                class: "ticket-modal-card",
                div {
                    class: "ticket-modal-icon",
                    "aria-hidden": "true",
                    "✓"
                }
                h3 {
                    id: "ticket-modal-title",
                    "Booking Confirmed"
                }
                p {
                    id: "ticket-modal-description",
                    "Your ticket request is locked in. Check your inbox for confirmation details."
                }
                button {
                    r#type: "button",
                    onclick: move |_| props.on_dismiss.call(()),
                    "Okay, got it"
                }
            }
        }
    }
}
