//! Controlled input components bound to a single form value

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Number,
    Date,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
            InputType::Date => "date",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldInputProps {
    #[props(into)]
    pub name: String,
    #[props(into)]
    pub label: String,
    pub value: String,
    pub input_type: InputType,
    pub placeholder: Option<String>,
    #[props(default)]
    pub required: bool,
    pub min: Option<String>,
    pub max: Option<String>,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    rsx! {
        label {
            class: "ticket-field",
            span { "{props.label}" }
            input {
                r#type: "{props.input_type.as_str()}",
                name: "{props.name}",
                value: "{props.value}",
                placeholder: props.placeholder.clone(),
                required: props.required,
                min: props.min.clone(),
                max: props.max.clone(),
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}

/// One `<option>` of a select: submitted value and visible label
#[derive(PartialEq, Clone, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldSelectProps {
    #[props(into)]
    pub name: String,
    #[props(into)]
    pub label: String,
    pub value: String,
    pub options: Vec<SelectOption>,
    /// Disabled empty option shown until a value is picked
    pub placeholder: Option<String>,
    #[props(default)]
    pub required: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FieldSelect(props: FieldSelectProps) -> Element {
    rsx! {
        label {
            class: "ticket-field",
            span { "{props.label}" }
            select {
                name: "{props.name}",
                value: "{props.value}",
                required: props.required,
                onchange: move |event| props.on_change.call(event.value()),
                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }
                for choice in props.options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == props.value,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
