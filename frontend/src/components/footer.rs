use chrono::Datelike;
use log::warn;
use web_sys::ScrollToOptions;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{BRAND_NAME, BRAND_TAGLINE, HOURS_SHORT, LEGAL_NAME, SOCIAL_LINKS};
use crate::Route;

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        warn!("No window to scroll");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(config::SCROLL_TO_TOP_BEHAVIOR);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_open_contact: Callback<()>,
    pub on_open_subscribe: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    let go_home = Callback::from(|_: MouseEvent| scroll_to_top());
    let open_contact = {
        let on_open_contact = props.on_open_contact.clone();
        Callback::from(move |_: MouseEvent| on_open_contact.emit(()))
    };
    let open_subscribe = {
        let on_open_subscribe = props.on_open_subscribe.clone();
        Callback::from(move |_: MouseEvent| on_open_subscribe.emit(()))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-stripe"></div>
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <div class="brand-mark small">{"✦"}</div>
                        <div>
                            <h1 class="brand-name light">{BRAND_NAME}</h1>
                            <span class="brand-tagline">{BRAND_TAGLINE}</span>
                        </div>
                    </div>
                    <p>
                        {"Bringing royalty standard cleaning to homes and businesses across Washington DC, Maryland, and Virginia."}
                    </p>
                </div>

                <div class="footer-links">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        <li><button class="footer-link" onclick={go_home}>{"Home"}</button></li>
                        <li><button class="footer-link" onclick={open_contact}>{"Get an Estimate"}</button></li>
                        <li><button class="footer-link" onclick={open_subscribe}>{"Special Offers"}</button></li>
                    </ul>
                </div>

                <div class="footer-social">
                    <h4>{"Connect With Us"}</h4>
                    <div class="social-row">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                key={link.label}
                                href={link.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={link.label}
                                class="social-link"
                            >
                                {link.glyph}
                            </a>
                        }) }
                    </div>
                    <p class="footer-hours">{HOURS_SHORT}</p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All Rights Reserved.", year, LEGAL_NAME)}</p>
                <div class="legal-links">
                    <Link<Route> to={Route::Privacy} classes="legal-link">
                        {"Privacy Policy"}
                    </Link<Route>>
                    <Link<Route> to={Route::Terms} classes="legal-link">
                        {"Terms of Service"}
                    </Link<Route>>
                </div>
            </div>
        </footer>
    }
}
