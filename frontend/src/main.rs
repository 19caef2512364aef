use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod forms;
mod modal;
mod scroll_lock;
mod components {
    pub mod contact_section;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod overlay;
    pub mod services;
    pub mod sparkle;
    pub mod subscribe_banner;
    pub mod why_us;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use pages::{
    home::HomePage,
    legal::{NotFound, PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_recognize_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/privacy"), Some(Route::Privacy));
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
        assert_eq!(
            Route::recognize("/pricing").or_else(Route::not_found_route),
            Some(Route::NotFound)
        );
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Privacy.to_path(), "/privacy");
        assert_eq!(Route::Terms.to_path(), "/terms");
    }
}
