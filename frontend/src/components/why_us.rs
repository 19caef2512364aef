use yew::prelude::*;

use crate::content::REASONS;

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    html! {
        <section class="why-us">
            <div class="why-grid">
                <div class="why-text">
                    <h2>
                        {"Why Trust "}
                        <br />
                        <span class="accent">{"The Queen?"}</span>
                    </h2>
                    <ul class="reason-list">
                        { for REASONS.iter().map(|reason| html! {
                            <li key={*reason}>
                                <span class="reason-check">{"✔"}</span>
                                <span class="reason-text">{*reason}</span>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="why-image">
                    <div class="tilt green"></div>
                    <div class="tilt gold"></div>
                    <img src="/assets/images/placeholder-cleaner.jpg" alt="DMV Queen of Clean Professional" loading="lazy" />
                </div>
            </div>
        </section>
    }
}
