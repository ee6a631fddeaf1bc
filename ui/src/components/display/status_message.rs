use dioxus::prelude::*;

use crate::registration::SubmissionStatus;

#[derive(Props, PartialEq, Clone)]
pub struct StatusMessageProps {
    pub status: SubmissionStatus,
}

/// Status line under the form; renders nothing while idle
#[component]
pub fn StatusMessage(props: StatusMessageProps) -> Element {
    let modifier = match props.status {
        SubmissionStatus::Idle => return rsx! {},
        SubmissionStatus::Submitting => "submitting",
        SubmissionStatus::Succeeded => "success",
        SubmissionStatus::Failed(_) => "error",
    };

    rsx! {
        p {
            class: "ticket-status {modifier}",
            role: "status",
            "{props.status.message()}"
        }
    }
}
