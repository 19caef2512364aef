//! Generic dialog shell. Knows nothing about which overlay it is showing.
//!
//! Scroll suspension is not handled here; the modal controller owns the lock
//! and engages it whenever it makes an overlay visible.

use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::sparkle::{CleanSparkle, SparkleColor};

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    pub visible: bool,
    pub on_dismiss: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Overlay)]
pub fn overlay(props: &OverlayProps) -> Html {
    {
        let visible = props.visible;
        let on_dismiss = props.on_dismiss.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if visible && e.key() == "Escape" {
                on_dismiss.emit(());
            }
        });
    }

    if !props.visible {
        return html! {};
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="overlay-backdrop" onclick={dismiss.clone()}>
            <style>
                {r#"
                    .overlay-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(4px);
                        animation: overlayFade 0.2s ease-out;
                    }
                    .overlay-dialog {
                        position: relative;
                        width: 100%;
                        max-width: 32rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #fff;
                        border: 1px solid #f1f5f9;
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        animation: overlayRise 0.2s ease-out;
                    }
                    .overlay-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 20;
                        padding: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #f8fafc;
                        color: #94a3b8;
                        cursor: pointer;
                    }
                    .overlay-close:hover {
                        background: #f1f5f9;
                        color: #475569;
                    }
                    .overlay-header {
                        padding: 2rem 3rem 1rem;
                        text-align: center;
                        background: linear-gradient(to right, rgba(5, 150, 105, 0.05), #f0fdfa);
                    }
                    .overlay-header h3 {
                        position: relative;
                        display: inline-block;
                        margin: 0;
                        font-size: 1.5rem;
                        font-weight: 800;
                        color: #0f172a;
                    }
                    .overlay-rule {
                        width: 4rem;
                        height: 0.25rem;
                        margin: 0.5rem auto 0;
                        border-radius: 9999px;
                        background: #f59e0b;
                    }
                    .overlay-body {
                        padding: 1rem 2rem 2rem;
                    }
                    @keyframes overlayFade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes overlayRise {
                        from { opacity: 0; transform: translateY(20px) scale(0.95); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }
                "#}
            </style>
            <div class="overlay-dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="overlay-close" aria-label="Close" onclick={dismiss}>{"✕"}</button>
                <div class="overlay-header">
                    <h3>
                        {props.title.clone()}
                        <CleanSparkle delay={0.5} color={SparkleColor::Gold} />
                    </h3>
                    <div class="overlay-rule"></div>
                </div>
                <div class="overlay-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_overlay(visible: bool) -> String {
        ServerRenderer::<Overlay>::with_props(move || OverlayProps {
            visible,
            on_dismiss: Callback::noop(),
            title: AttrValue::Static("Unlock Royal Offers"),
            children: Children::default(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_hidden_overlay_renders_nothing() {
        assert_eq!(render_overlay(false).await, "");
    }

    #[tokio::test]
    async fn test_visible_overlay_renders_title_and_close_button() {
        let html = render_overlay(true).await;
        assert!(html.contains("Unlock Royal Offers"), "{}", html);
        assert!(html.contains(r#"class="overlay-close""#), "{}", html);
        assert!(html.contains(r#"role="dialog""#));
    }
}
