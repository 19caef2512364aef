use yew::prelude::*;

use crate::content::{Service, SERVICES};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let Service { title, description, image, icon } = props.service;

    html! {
        <div class="service-card">
            <div class="service-image">
                <img src={image} alt={title} loading="lazy" />
                <div class="service-shade"></div>
                <div class="service-gradient"></div>
            </div>
            <div class="service-body">
                <div class="service-heading">
                    <div class="service-icon">
                        <span class={icon.class()}>{icon.glyph()}</span>
                    </div>
                    <h3>{title}</h3>
                </div>
                <p>{description}</p>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services">
            <div class="section-heading">
                <h2>{"Our Royal Services"}</h2>
                <div class="heading-rule gold"></div>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <ServiceCard key={service.title} service={*service} />
                }) }
            </div>
        </section>
    }
}
