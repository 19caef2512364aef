use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{EMAIL, LEGAL_NAME, PHONE_DISPLAY};
use crate::Route;

const LEGAL_STYLES: &str = r#"
    .legal-content {
        min-height: 100vh;
        padding: 4rem 2rem;
        background: #f8fafc;
        color: #1e293b;
        display: flex;
        flex-direction: column;
        align-items: center;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .legal-content > div {
        max-width: 800px;
        padding: 3rem;
        background: #fff;
        border: 1px solid #f1f5f9;
        border-radius: 16px;
        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.06);
    }
    .legal-content h1 {
        color: #059669;
        margin-bottom: 2.5rem;
    }
    .legal-content section {
        margin: 1.5rem 0;
    }
    .legal-content h2 {
        color: #0f172a;
        font-size: 1.25rem;
    }
    .legal-content p, .legal-content li {
        color: #475569;
        line-height: 1.6;
    }
    .legal-back {
        color: #059669;
        font-weight: 700;
    }
"#;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <style>{LEGAL_STYLES}</style>
            <div>
                <h1>{"Privacy Policy"}</h1>
                <section>
                    <h2>{"What we collect"}</h2>
                    <p>
                        {"The estimate and newsletter forms on this site ask for your name, email address and the kind of cleaning you need. "}
                        {"These details stay in your browser. Nothing you type is sent to us or stored by this website."}
                    </p>
                </section>
                <section>
                    <h2>{"Cookies"}</h2>
                    <p>{"This site sets no cookies and runs no analytics."}</p>
                </section>
                <section>
                    <h2>{"Getting in touch"}</h2>
                    <p>
                        {format!("To request an estimate directly, call {} or email {}.", PHONE_DISPLAY, EMAIL)}
                    </p>
                </section>
                <Link<Route> to={Route::Home} classes="legal-back">{"← Back to home"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-content">
            <style>{LEGAL_STYLES}</style>
            <div>
                <h1>{"Terms of Service"}</h1>
                <section>
                    <h2>{"Estimates"}</h2>
                    <p>
                        {format!("Estimates from {} are free and carry no obligation. ", LEGAL_NAME)}
                        {"Final pricing is confirmed with you before any work begins."}
                    </p>
                </section>
                <section>
                    <h2>{"Offers"}</h2>
                    <ul>
                        <li>{"The newsletter discount applies to a first deep clean only."}</li>
                        <li>{"One discount code per household or business."}</li>
                        <li>{"Offers cannot be combined."}</li>
                    </ul>
                </section>
                <section>
                    <h2>{"Service area"}</h2>
                    <p>{"We serve Washington DC, Maryland and Virginia, Monday to Saturday, 8am to 6pm."}</p>
                </section>
                <Link<Route> to={Route::Home} classes="legal-back">{"← Back to home"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <style>{LEGAL_STYLES}</style>
            <div>
                <h1>{"Page not found"}</h1>
                <p>{"That page has been swept away."}</p>
                <Link<Route> to={Route::Home} classes="legal-back">{"← Back to home"}</Link<Route>>
            </div>
        </div>
    }
}
