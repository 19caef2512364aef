use yew::prelude::*;

use crate::components::sparkle::{CleanSparkle, SparkleColor};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_open_contact: Callback<()>,
    pub on_open_subscribe: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let book = {
        let on_open_contact = props.on_open_contact.clone();
        Callback::from(move |_: MouseEvent| on_open_contact.emit(()))
    };
    let offers = {
        let on_open_subscribe = props.on_open_subscribe.clone();
        Callback::from(move |_: MouseEvent| on_open_subscribe.emit(()))
    };

    html! {
        <header class="hero">
            <div class="hero-background mobile">
                <img src="/assets/images/cleaning-counter.webp" alt="Background Texture" />
            </div>
            <div class="hero-background desktop">
                <img src="/assets/images/combined-hero.png" alt="Background Texture" />
            </div>
            <div class="hero-dots"></div>
            <div class="hero-glow gold"></div>
            <div class="hero-glow green"></div>

            <div class="hero-content">
                <span class="hero-badge">
                    <span class="badge-star">{"★"}</span>
                    {"Royalty Standard Cleaning"}
                </span>
                <h1 class="hero-title">
                    {"Your Home Deserves the "}
                    <br />
                    <span class="hero-highlight">
                        {"Royal Treatment"}
                        <CleanSparkle color={SparkleColor::White} />
                    </span>
                </h1>
                <p class="hero-subtitle">
                    {"Experience the cleanest version of your home. Serving Washington DC, Maryland, and Virginia with eco-friendly, meticulous care."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta primary" onclick={book}>
                        {"Book Your Cleaning"}
                    </button>
                    <button class="hero-cta secondary" onclick={offers}>
                        <span class="tag-icon">{"🏷"}</span>
                        {"Get Offers"}
                    </button>
                </div>
            </div>
        </header>
    }
}
