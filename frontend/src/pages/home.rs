use log::info;
use yew::prelude::*;

use crate::components::{
    contact_section::ContactSection,
    footer::Footer,
    hero::Hero,
    nav::Nav,
    overlay::Overlay,
    services::Services,
    subscribe_banner::SubscribeBanner,
    why_us::WhyUs,
};
use crate::content::{success_copy, SuccessCopy};
use crate::forms::{
    capture_submission, ContactForm, ContactFormLayout, ContactRequest, SubscribeForm,
    SubscribeFormLayout, SubscribeRequest,
};
use crate::modal::{ActiveModal, FormKind, ModalFlowController, ModalMsg};
use crate::scroll_lock::BodyScroll;

/// The landing page. Owns the modal controller for as long as it is mounted.
pub struct HomePage {
    controller: ModalFlowController<BodyScroll>,
}

impl Component for HomePage {
    type Message = ModalMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        info!("Mounting home page");
        Self {
            controller: ModalFlowController::new(BodyScroll),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ModalMsg::OpenContact => self.controller.open_contact(),
            ModalMsg::OpenSubscribe => self.controller.open_subscribe(),
            ModalMsg::Submit(kind) => self.controller.submit(kind),
            ModalMsg::Close => self.controller.close(),
            ModalMsg::ToggleMenu => self.controller.toggle_menu(),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        info!("Unmounting home page");
        self.controller.teardown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = self.controller.state();

        let open_contact = link.callback(|_: ()| ModalMsg::OpenContact);
        let open_subscribe = link.callback(|_: ()| ModalMsg::OpenSubscribe);
        let toggle_menu = link.callback(|_: ()| ModalMsg::ToggleMenu);
        let close = link.callback(|_: ()| ModalMsg::Close);
        let submit_contact = link.callback(|request: ContactRequest| {
            capture_submission(FormKind::Contact, &request);
            ModalMsg::Submit(FormKind::Contact)
        });
        let submit_subscribe = link.callback(|request: SubscribeRequest| {
            capture_submission(FormKind::Subscribe, &request);
            ModalMsg::Submit(FormKind::Subscribe)
        });

        let (title, body): (AttrValue, Html) = match state.active_modal {
            ActiveModal::None => (AttrValue::Static(""), html! {}),
            ActiveModal::Contact => (
                AttrValue::Static("Get Your Free Estimate"),
                html! {
                    <>
                        <p class="overlay-lead">
                            {"Tell us about your castle, and we'll provide a royal quote."}
                        </p>
                        <ContactForm layout={ContactFormLayout::Overlay} on_submit={submit_contact.clone()} />
                    </>
                },
            ),
            ActiveModal::Subscribe => (
                AttrValue::Static("Unlock Royal Offers"),
                html! {
                    <>
                        <p class="overlay-lead">
                            {"Join our list for exclusive tips and a "}
                            <span class="highlight">{"10% discount"}</span>
                            {" on your first deep clean."}
                        </p>
                        <SubscribeForm layout={SubscribeFormLayout::Overlay} on_submit={submit_subscribe.clone()} />
                    </>
                },
            ),
            ActiveModal::Success => {
                let copy = success_copy(state.success_kind);
                (AttrValue::Static(copy.title), success_body(copy, close.clone()))
            }
        };

        html! {
            <div class="home-page">
                <style>{PAGE_STYLES}</style>
                <Overlay visible={state.active_modal.is_visible()} on_dismiss={close} title={title}>
                    {body}
                </Overlay>

                <Nav
                    menu_open={state.menu_open}
                    on_toggle_menu={toggle_menu}
                    on_open_contact={open_contact.clone()}
                />
                <Hero on_open_contact={open_contact.clone()} on_open_subscribe={open_subscribe.clone()} />
                <Services />
                <SubscribeBanner on_submit={submit_subscribe} />
                <WhyUs />
                <ContactSection on_submit={submit_contact} />
                <Footer on_open_contact={open_contact} on_open_subscribe={open_subscribe} />
            </div>
        }
    }
}

fn success_body(copy: SuccessCopy, on_close: Callback<()>) -> Html {
    let close = Callback::from(move |_: MouseEvent| on_close.emit(()));

    html! {
        <div class="success-body">
            <div class="success-icon">{copy.icon}</div>
            <p class="success-lead">{copy.lead}</p>
            {
                match copy.discount_code {
                    Some(code) => html! {
                        <div class="discount-code">
                            <span>{code}</span>
                        </div>
                    },
                    None => html! {},
                }
            }
            <p class="success-detail">{copy.detail}</p>
            <button class="close-window" onclick={close}>{"Close Window"}</button>
        </div>
    }
}

const PAGE_STYLES: &str = r#"
    .home-page {
        min-height: 100vh;
        background: #f8fafc;
        color: #1e293b;
        overflow-x: hidden;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .top-nav {
        position: fixed;
        width: 100%;
        z-index: 50;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(16px);
        border-bottom: 1px solid #f1f5f9;
        transition: all 0.3s;
    }
    .top-nav.scrolled {
        background: #fff;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
        height: 5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .brand-mark {
        padding: 0.6rem 0.8rem;
        border-radius: 0.75rem;
        color: #fff;
        background: linear-gradient(to bottom right, #059669, #0d9488);
    }
    .brand-name {
        margin: 0;
        font-size: 1.25rem;
        font-weight: 800;
        color: #0f172a;
        line-height: 1;
    }
    .brand-name.light {
        color: #fff;
    }
    .brand-tagline {
        font-size: 10px;
        font-weight: 700;
        color: #f59e0b;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .estimate-button, .mobile-estimate-button, .hero-cta.primary, .submit-button {
        border: none;
        border-radius: 9999px;
        color: #fff;
        font-weight: 700;
        background: #059669;
        cursor: pointer;
    }
    .estimate-button {
        padding: 0.6rem 1.5rem;
    }
    .burger-menu {
        display: none;
        border: none;
        background: none;
        font-size: 1.5rem;
        color: #475569;
    }
    .mobile-menu {
        padding: 1rem 1rem 1.5rem;
        background: #fff;
        border-top: 1px solid #f1f5f9;
    }
    .mobile-estimate-button {
        width: 100%;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
    }
    .hero {
        position: relative;
        padding: 12rem 1rem 10rem;
        text-align: center;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        opacity: 0.3;
    }
    .hero-background img, .service-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .hero-background.mobile {
        display: none;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 56rem;
        margin: 0 auto;
    }
    .hero-title {
        font-size: 4.5rem;
        font-weight: 800;
        color: #0f172a;
    }
    .hero-highlight {
        position: relative;
        display: inline-block;
        color: #059669;
    }
    .hero-cta-group {
        display: flex;
        justify-content: center;
        gap: 1rem;
    }
    .hero-cta {
        padding: 1rem 2rem;
        font-size: 1.125rem;
    }
    .hero-cta.secondary {
        border: 2px solid #f1f5f9;
        border-radius: 9999px;
        background: #fff;
        color: #334155;
        font-weight: 700;
        cursor: pointer;
    }
    .services, .why-us, .contact {
        padding: 6rem 1rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 3rem;
    }
    .heading-rule {
        width: 6rem;
        height: 0.375rem;
        margin: 0 auto;
        border-radius: 9999px;
        background: linear-gradient(to right, #f59e0b, #fdba74);
    }
    .heading-rule.short {
        width: 3rem;
        margin: 0 0 1.5rem;
    }
    .services-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .service-card {
        position: relative;
        height: 18rem;
        overflow: hidden;
        border-radius: 1rem;
        transition: transform 0.3s;
    }
    .service-card:hover {
        transform: translateY(-5px);
    }
    .service-image, .service-gradient {
        position: absolute;
        inset: 0;
    }
    .service-gradient {
        top: 30%;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.9), transparent);
    }
    .service-body {
        position: relative;
        height: 100%;
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
        color: #fff;
    }
    .subscribe-banner {
        padding: 3rem 1rem;
        background: linear-gradient(to right, rgba(5, 150, 105, 0.05), #f0fdfa);
    }
    .banner-card {
        max-width: 80rem;
        margin: 0 auto;
        padding: 3rem;
        display: flex;
        align-items: center;
        gap: 3rem;
        background: #fff;
        border-radius: 1.5rem;
    }
    .banner-form, .email-field {
        display: flex;
        gap: 0.75rem;
    }
    .eyebrow, .highlight {
        font-weight: 700;
        color: #059669;
    }
    .why-us, .site-footer {
        background: #0f172a;
        color: #fff;
    }
    .why-grid, .footer-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 4rem;
    }
    .accent, .reason-check {
        color: #059669;
    }
    .reason-list {
        list-style: none;
        padding: 0;
    }
    .reason-list li {
        display: flex;
        gap: 1rem;
        margin-bottom: 1.5rem;
        color: #cbd5e1;
    }
    .contact {
        background: rgba(240, 253, 244, 0.5);
    }
    .contact-card {
        max-width: 64rem;
        margin: 0 auto;
        display: flex;
        overflow: hidden;
        border-radius: 1.5rem;
        background: #fff;
    }
    .contact-info {
        width: 40%;
        padding: 3rem;
        color: #fff;
        background: linear-gradient(to bottom right, #059669, #065f46);
    }
    .contact-form {
        width: 60%;
        padding: 3rem;
    }
    .info-label {
        font-size: 0.75rem;
        font-weight: 700;
        color: #bbf7d0;
        text-transform: uppercase;
    }
    .info-value.phone {
        color: inherit;
        font-weight: 700;
    }
    .info-value.email {
        word-break: break-all;
    }
    .live-dot {
        display: inline-block;
        width: 0.6rem;
        height: 0.6rem;
        border-radius: 9999px;
        background: #4ade80;
    }
    .royal-form .form-row {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
    }
    .royal-form .form-field {
        margin-bottom: 1rem;
    }
    .royal-form label {
        display: block;
        margin-bottom: 0.25rem;
        font-size: 0.75rem;
        font-weight: 700;
        color: #64748b;
        text-transform: uppercase;
    }
    .royal-form input, .royal-form select, .banner-form input {
        width: 100%;
        padding: 0.75rem 1.25rem;
        border: 1px solid #e2e8f0;
        border-radius: 9999px;
        background: #f8fafc;
    }
    .submit-button {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin: 1rem auto 0;
        padding: 1rem 3rem;
    }
    .submit-button.gradient {
        background: linear-gradient(to right, #059669, #0d9488);
    }
    .fine-print {
        font-size: 0.75rem;
        text-align: center;
        color: #94a3b8;
    }
    .overlay-lead, .success-body {
        text-align: center;
        color: #475569;
    }
    .success-icon {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        font-size: 2rem;
        background: #dcfce7;
        color: #059669;
    }
    .discount-code {
        margin-bottom: 1.5rem;
        padding: 1rem;
        border: 2px dashed rgba(5, 150, 105, 0.3);
        border-radius: 0.75rem;
        background: #f8fafc;
        user-select: all;
    }
    .discount-code span {
        font-size: 1.5rem;
        font-weight: 700;
        letter-spacing: 0.1em;
        color: #059669;
    }
    .close-window {
        margin-top: 1.5rem;
        border: none;
        background: none;
        font-weight: 700;
        color: #059669;
        text-transform: uppercase;
        cursor: pointer;
    }
    .site-footer {
        position: relative;
        padding: 4rem 1rem 2rem;
    }
    .footer-grid {
        grid-template-columns: repeat(3, 1fr);
        gap: 3rem;
        margin-bottom: 3rem;
    }
    .footer-link {
        border: none;
        background: none;
        color: #94a3b8;
        cursor: pointer;
    }
    .footer-link:hover, .legal-link:hover {
        color: #f59e0b;
    }
    .social-row {
        display: flex;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .social-link {
        width: 2.5rem;
        height: 2.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        background: #1e293b;
        color: #94a3b8;
        text-decoration: none;
    }
    .footer-bottom {
        max-width: 80rem;
        margin: 0 auto;
        padding-top: 2rem;
        display: flex;
        justify-content: space-between;
        border-top: 1px solid #1e293b;
        font-size: 0.75rem;
        color: #64748b;
    }
    .legal-links {
        display: flex;
        gap: 1.5rem;
    }
    .legal-link {
        color: #64748b;
        text-decoration: none;
    }
    @media (max-width: 1024px) {
        .nav-right, .hero-background.desktop {
            display: none;
        }
        .burger-menu, .hero-background.mobile {
            display: block;
        }
        .hero-title {
            font-size: 2.5rem;
        }
        .services-grid, .why-grid, .footer-grid {
            grid-template-columns: 1fr;
        }
        .banner-card, .contact-card, .hero-cta-group {
            flex-direction: column;
        }
        .contact-info, .contact-form {
            width: auto;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[derive(Properties, PartialEq)]
    struct SuccessHostProps {
        kind: FormKind,
    }

    #[function_component(SuccessHost)]
    fn success_host(props: &SuccessHostProps) -> Html {
        success_body(success_copy(props.kind), Callback::noop())
    }

    async fn render_success(kind: FormKind) -> String {
        ServerRenderer::<SuccessHost>::with_props(move || SuccessHostProps { kind })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_subscribe_success_renders_discount_code() {
        let html = render_success(FormKind::Subscribe).await;
        assert!(html.contains(r#"<div class="discount-code"><span>ROYAL10</span></div>"#), "{}", html);
        assert!(html.contains("Close Window"));
    }

    #[tokio::test]
    async fn test_contact_success_renders_no_discount_code() {
        let html = render_success(FormKind::Contact).await;
        assert!(!html.contains("ROYAL10"), "{}", html);
        assert!(!html.contains("discount-code"));
        assert!(html.contains("Thank you for reaching out to the Queen!"));
    }
}
