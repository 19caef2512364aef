use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::modal::FormKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[default]
    Residential,
    Commercial,
    MoveInMoveOut,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown service type: {0}")]
pub struct ParseServiceTypeError(String);

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Residential,
        ServiceType::Commercial,
        ServiceType::MoveInMoveOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::Residential => "Residential Cleaning",
            ServiceType::Commercial => "Commercial Cleaning",
            ServiceType::MoveInMoveOut => "Move-In / Move-Out",
        }
    }

    /// Value carried by the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            ServiceType::Residential => "residential",
            ServiceType::Commercial => "commercial",
            ServiceType::MoveInMoveOut => "move-in-move-out",
        }
    }
}

impl FromStr for ServiceType {
    type Err = ParseServiceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ServiceType::ALL
            .into_iter()
            .find(|service| service.value() == s || service.label() == s)
            .ok_or_else(|| ParseServiceTypeError(s.to_string()))
    }
}

/// What the estimate form collects. Built on submit and never sent anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub service: ServiceType,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Stand-in for the real submission. Writes the payload to the debug log.
pub fn capture_submission<T: Serialize>(kind: FormKind, payload: &T) {
    match serde_json::to_string(payload) {
        Ok(json) => debug!("{:?} form captured locally: {}", kind, json),
        Err(e) => warn!("Could not serialize {:?} form: {}", kind, e),
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

fn selected_service(node: &NodeRef) -> ServiceType {
    node.cast::<HtmlSelectElement>()
        .and_then(|select| select.value().parse().ok())
        .unwrap_or_default()
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The estimate form appears twice: compact inside the overlay and full-size in
/// the contact section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactFormLayout {
    Overlay,
    Section,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub layout: ContactFormLayout,
    pub on_submit: Callback<ContactRequest>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let first_name = use_node_ref();
    let last_name = use_node_ref();
    let email = use_node_ref();
    let service = use_node_ref();

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let service = service.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(ContactRequest {
                first_name: input_value(&first_name),
                last_name: optional(input_value(&last_name)),
                email: input_value(&email),
                service: selected_service(&service),
            });
        })
    };

    let (email_label, service_label, button_label, form_class) = match props.layout {
        ContactFormLayout::Overlay => ("Email Address", "Service Type", "Send Request", "royal-form compact"),
        ContactFormLayout::Section => ("Email", "Service Needed", "Request Free Estimate", "royal-form"),
    };

    html! {
        <form class={form_class} {onsubmit}>
            <div class="form-row">
                <div class="form-field">
                    <label>{"First Name"}</label>
                    <input ref={first_name} type="text" placeholder="Jane" required=true />
                </div>
                <div class="form-field">
                    <label>{"Last Name"}</label>
                    <input ref={last_name} type="text" placeholder="Doe" />
                </div>
            </div>
            <div class="form-field">
                <label>{email_label}</label>
                <input ref={email} type="email" placeholder="jane@example.com" required=true />
            </div>
            <div class="form-field">
                <label>{service_label}</label>
                <div class="select-wrapper">
                    <select ref={service}>
                        { for ServiceType::ALL.iter().map(|s| html! {
                            <option value={s.value()}>{s.label()}</option>
                        }) }
                    </select>
                    <span class="select-arrow">{"›"}</span>
                </div>
            </div>
            <button type="submit" class="submit-button">
                {button_label}
                <span class="arrow">{"→"}</span>
            </button>
        </form>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscribeFormLayout {
    Overlay,
    Banner,
}

#[derive(Properties, PartialEq)]
pub struct SubscribeFormProps {
    pub layout: SubscribeFormLayout,
    pub on_submit: Callback<SubscribeRequest>,
}

#[function_component(SubscribeForm)]
pub fn subscribe_form(props: &SubscribeFormProps) -> Html {
    let email = use_node_ref();

    let onsubmit = {
        let email = email.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(SubscribeRequest {
                email: input_value(&email),
            });
        })
    };

    match props.layout {
        SubscribeFormLayout::Overlay => html! {
            <form class="royal-form compact" {onsubmit}>
                <div class="email-field">
                    <span class="field-icon">{"✉"}</span>
                    <input ref={email} type="email" placeholder="Enter your email address" required=true />
                </div>
                <button type="submit" class="submit-button gradient">
                    {"Claim Offer"}
                    <span class="arrow">{"🏷"}</span>
                </button>
                <p class="fine-print">{"We respect your privacy. Unsubscribe at any time."}</p>
            </form>
        },
        SubscribeFormLayout::Banner => html! {
            <form class="banner-form" {onsubmit}>
                <div class="email-field">
                    <span class="field-icon">{"✉"}</span>
                    <input ref={email} type="email" placeholder="Enter your email address" required=true />
                </div>
                <button type="submit" class="submit-button">{"Sign Up"}</button>
            </form>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("residential", ServiceType::Residential)]
    #[case("commercial", ServiceType::Commercial)]
    #[case("move-in-move-out", ServiceType::MoveInMoveOut)]
    #[case("Move-In / Move-Out", ServiceType::MoveInMoveOut)]
    #[case("  Commercial Cleaning ", ServiceType::Commercial)]
    fn test_parse_service_type(#[case] raw: &str, #[case] expected: ServiceType) {
        assert_eq!(raw.parse::<ServiceType>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_service_type() {
        let err = "window washing".parse::<ServiceType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown service type: window washing");
    }

    #[test]
    fn test_option_values_match_serde_names() {
        for service in ServiceType::ALL {
            let json = serde_json::to_value(service).unwrap();
            assert_eq!(json, serde_json::Value::String(service.value().to_string()));
        }
    }

    #[test]
    fn test_contact_request_omits_missing_last_name() {
        let request = ContactRequest {
            first_name: "Jane".to_string(),
            last_name: None,
            email: "jane@example.com".to_string(),
            service: ServiceType::MoveInMoveOut,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first_name": "Jane",
                "email": "jane@example.com",
                "service": "move-in-move-out",
            })
        );
    }

    #[test]
    fn test_optional_drops_blank_values() {
        assert_eq!(optional(String::new()), None);
        assert_eq!(optional("Doe".to_string()), Some("Doe".to_string()));
    }
}
