use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::NAV_SCROLL_THRESHOLD;
use crate::content::{BRAND_NAME, BRAND_TAGLINE};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_open_contact: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle_menu, on_open_contact } = props;
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let open_contact = {
        let on_open_contact = on_open_contact.clone();
        Callback::from(move |_: MouseEvent| on_open_contact.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="brand">
                    <div class="brand-mark">{"✦"}</div>
                    <div>
                        <h1 class="brand-name">{BRAND_NAME}</h1>
                        <span class="brand-tagline">{BRAND_TAGLINE}</span>
                    </div>
                </div>

                <div class="nav-right">
                    <button class="estimate-button" onclick={open_contact.clone()}>
                        {"Get a Free Estimate"}
                        <span class="arrow">{"→"}</span>
                    </button>
                </div>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <button class="mobile-estimate-button" onclick={open_contact}>
                                {"Get a Free Estimate"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
