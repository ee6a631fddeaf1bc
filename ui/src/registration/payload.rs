use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::types::FormState;

/// Server-shaped body for `POST /tickets/`, built once per submission
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TicketPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    pub gender: String,
    pub ticket_type: String,
    pub quantity: Number,
    pub event_date: String,
    pub event_location: String,
}

impl From<&FormState> for TicketPayload {
    fn from(form: &FormState) -> Self {
        Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            id_number: form.id_number.clone(),
            gender: form.gender.clone(),
            ticket_type: form.ticket_type.clone(),
            quantity: coerce_quantity(&form.quantity),
            event_date: form.event_date.clone(),
            event_location: form.event_location.clone(),
        }
    }
}

/// Largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Read the quantity input as a number the way a `type=number` field reports it.
///
/// Empty, zero, non-finite or non-numeric text falls back to 1. Whole values
/// are sent as JSON integers, anything else (`2.5`) as a float.
pub fn coerce_quantity(raw: &str) -> Number {
    let value = match raw.trim() {
        "" => return Number::from(1),
        trimmed => trimmed.parse::<f64>().unwrap_or(f64::NAN),
    };

    if !value.is_finite() || value == 0.0 {
        return Number::from(1);
    }

    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        return Number::from(value as i64);
    }

    Number::from_f64(value).unwrap_or_else(|| Number::from(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_projection() {
        let form = FormState {
            full_name: "Ama".to_string(),
            email: "a@b.com".to_string(),
            phone: "+233...".to_string(),
            id_number: "".to_string(),
            gender: "female".to_string(),
            ticket_type: "vip".to_string(),
            quantity: "3".to_string(),
            event_date: "2025-05-01".to_string(),
            event_location: "".to_string(),
        };

        let payload = serde_json::to_value(TicketPayload::from(&form)).unwrap();

        assert_eq!(
            payload,
            json!({
                "full_name": "Ama",
                "email": "a@b.com",
                "phone": "+233...",
                "id_number": "",
                "gender": "female",
                "ticket_type": "vip",
                "quantity": 3,
                "event_date": "2025-05-01",
                "event_location": ""
            })
        );
    }

    #[test]
    fn test_quantity_coercion() {
        assert_eq!(coerce_quantity("4"), Number::from(4));
        assert_eq!(coerce_quantity(" 7 "), Number::from(7));
        assert_eq!(coerce_quantity(""), Number::from(1));
        assert_eq!(coerce_quantity("   "), Number::from(1));
        assert_eq!(coerce_quantity("abc"), Number::from(1));
        assert_eq!(coerce_quantity("0"), Number::from(1));
        assert_eq!(coerce_quantity("-0"), Number::from(1));
        assert_eq!(coerce_quantity("NaN"), Number::from(1));
        assert_eq!(coerce_quantity("inf"), Number::from(1));
        assert_eq!(coerce_quantity("-2"), Number::from(-2));
    }

    #[test]
    fn test_quantity_keeps_exponent_and_fraction() {
        assert_eq!(coerce_quantity("1e1"), Number::from(10));
        assert_eq!(coerce_quantity("10.0"), Number::from(10));
        assert_eq!(coerce_quantity("2.5").as_f64(), Some(2.5));
        assert!(coerce_quantity("2.5").as_i64().is_none());

        let form = FormState {
            quantity: "1e1".to_string(),
            ..FormState::default()
        };
        let payload = serde_json::to_value(TicketPayload::from(&form)).unwrap();
        assert_eq!(payload["quantity"], json!(10));
    }

    #[test]
    fn test_default_form_payload() {
        let payload = TicketPayload::from(&FormState::default());
        assert_eq!(payload.quantity, Number::from(1));
        assert_eq!(payload.ticket_type, "standard");
        assert_eq!(payload.id_number, "");
        assert_eq!(payload.event_location, "");
    }
}
