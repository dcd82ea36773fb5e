use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod navigation;
mod visibility;
mod components {
    pub mod contact_form;
    pub mod disclosure;
    pub mod footer;
    pub mod icons;
    pub mod nav;
}
mod pages {
    pub mod landing;
    pub mod legal;
}

use components::nav::Nav;
use navigation::NavigationState;
use pages::{
    landing::Landing,
    legal::{PrivacyPolicy, TermsAndConditions},
};

#[derive(Clone, Debug, Routable, PartialEq)]
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

fn switch(route: &Route, navigation: NavigationState, on_toggle_disclosure: Callback<()>) -> Html {
    match route {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! {
                <Landing
                    disclosure_open={navigation.disclosure_open}
                    {on_toggle_disclosure}
                />
            }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
    }
}

/// Owns the page-level state: which page is shown and the nav/disclosure toggles.
#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let navigation = use_state(NavigationState::default);

    // Every page starts at the top
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route.clone(),
    );

    let on_toggle_menu = {
        let navigation = navigation.clone();
        Callback::from(move |_: ()| navigation.set(navigation.toggle_menu()))
    };
    let on_close_menu = {
        let navigation = navigation.clone();
        Callback::from(move |_: ()| navigation.set(navigation.close_menu()))
    };
    let on_toggle_disclosure = {
        let navigation = navigation.clone();
        Callback::from(move |_: ()| navigation.set(navigation.toggle_disclosure()))
    };

    html! {
        <>
            <Nav menu_open={navigation.menu_open} {on_toggle_menu} {on_close_menu} />
            { switch(&route, *navigation, on_toggle_disclosure) }
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1F2937;
                        background: white;
                    }

                    * {
                        box-sizing: border-box;
                    }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
