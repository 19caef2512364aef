use yew::prelude::*;

use crate::content::{EMAIL, HOURS_LONG, PHONE_DISPLAY, PHONE_HREF, SERVICE_AREA};
use crate::forms::{ContactForm, ContactFormLayout, ContactRequest};

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub on_submit: Callback<ContactRequest>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section id="contact" class="contact">
            <div class="contact-card">
                <div class="contact-info">
                    <div class="info-dots"></div>
                    <div class="info-main">
                        <h2>{"Contact Us"}</h2>
                        <div class="heading-rule gold short"></div>
                        <p class="info-lead">
                            {"Ready for a spotless space? Reach out today for your free royal estimate."}
                        </p>
                        <div class="info-items">
                            <div class="info-item">
                                <div class="info-icon">{"☎"}</div>
                                <div>
                                    <p class="info-label">{"Call Us"}</p>
                                    <a href={PHONE_HREF} class="info-value phone">{PHONE_DISPLAY}</a>
                                </div>
                            </div>
                            <div class="info-item">
                                <div class="info-icon">{"⌖"}</div>
                                <div>
                                    <p class="info-label">{"Service Area"}</p>
                                    <span class="info-value">{SERVICE_AREA}</span>
                                </div>
                            </div>
                            <div class="info-item">
                                <div class="info-icon">{"✉"}</div>
                                <div>
                                    <p class="info-label">{"Email Us"}</p>
                                    <span class="info-value email">{EMAIL}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="info-hours">
                        <span class="live-dot"></span>
                        <p>{HOURS_LONG}</p>
                    </div>
                </div>
                <div class="contact-form">
                    <ContactForm layout={ContactFormLayout::Section} on_submit={props.on_submit.clone()} />
                </div>
            </div>
        </section>
    }
}
