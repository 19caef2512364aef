use yew::prelude::*;

use crate::forms::{SubscribeForm, SubscribeFormLayout, SubscribeRequest};

#[derive(Properties, PartialEq)]
pub struct SubscribeBannerProps {
    pub on_submit: Callback<SubscribeRequest>,
}

#[function_component(SubscribeBanner)]
pub fn subscribe_banner(props: &SubscribeBannerProps) -> Html {
    html! {
        <section id="subscribe" class="subscribe-banner">
            <div class="banner-glow"></div>
            <div class="banner-card">
                <div class="banner-text">
                    <span class="eyebrow">{"Don't Miss Out"}</span>
                    <h2>{"Join Our Royal List"}</h2>
                    <p>
                        {"Unlock exclusive seasonal offers, cleaning tips, and a "}
                        <span class="highlight">{"10% discount"}</span>
                        {" on your first deep clean."}
                    </p>
                </div>
                <div class="banner-form-wrapper">
                    <SubscribeForm layout={SubscribeFormLayout::Banner} on_submit={props.on_submit.clone()} />
                </div>
            </div>
        </section>
    }
}
