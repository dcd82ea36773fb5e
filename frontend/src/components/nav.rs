use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, ICON_BOT, ICON_MENU, ICON_X};
use crate::content::COMPANY_NAME;
use crate::visibility::{use_scrolled, Section};
use crate::Route;

const NAV_LINKS: &[(Section, &str)] = &[
    (Section::Services, "Services"),
    (Section::Benefits, "Why Us"),
    (Section::Testimonials, "Testimonials"),
];

fn section_href(section: Section) -> String {
    format!("/{}", section.anchor())
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle_menu, on_close_menu } = props;
    let is_scrolled = use_scrolled();

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    // Anchor clicks keep their default so the browser still jumps to the section.
    let close_menu = {
        let on_close_menu = on_close_menu.clone();
        Callback::from(move |_: MouseEvent| on_close_menu.emit(()))
    };

    let links = |class: &'static str| -> Html {
        html! {
            <>
                { for NAV_LINKS.iter().map(|(section, label)| html! {
                    <a href={section_href(*section)} class={class} onclick={close_menu.clone()}>
                        {*label}
                    </a>
                }) }
                <a href={section_href(Section::Contact)} class="nav-cta" onclick={close_menu.clone()}>
                    {"Contact Us"}
                </a>
            </>
        }
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <Icon paths={ICON_BOT} class="nav-logo-icon" />
                        <span class="nav-logo-text">{COMPANY_NAME}</span>
                    </Link<Route>>
                </div>

                <div class="nav-right">
                    { links("nav-link") }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <Icon paths={if *menu_open { ICON_X } else { ICON_MENU }} />
                </button>
            </div>

            <div class={classes!("mobile-menu", menu_open.then_some("mobile-menu-open"))}>
                { links("mobile-link") }
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: all 0.5s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                    }

                    .nav-logo-icon {
                        width: 2rem;
                        height: 2rem;
                        color: #0056D2;
                        transition: transform 0.3s ease;
                    }

                    .nav-logo:hover .nav-logo-icon {
                        transform: rotate(12deg) scale(1.1);
                    }

                    .nav-logo-text {
                        font-size: 1.25rem;
                        font-weight: 700;
                        background: linear-gradient(90deg, #0056D2, #7B61FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #1F2937;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #7B61FF;
                    }

                    .nav-cta {
                        background: linear-gradient(90deg, #0056D2, #7B61FF);
                        color: white;
                        padding: 0.5rem 1.5rem;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }

                    .nav-cta:hover {
                        background: linear-gradient(90deg, #7B61FF, #00E0FF);
                        box-shadow: 0 10px 15px rgba(123, 97, 255, 0.3);
                        transform: scale(1.05);
                    }

                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #374151;
                        cursor: pointer;
                    }

                    .burger-menu .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }

                    .mobile-menu {
                        display: none;
                    }

                    @media (max-width: 768px) {
                        .nav-right {
                            display: none;
                        }

                        .burger-menu {
                            display: block;
                        }

                        .mobile-menu {
                            display: flex;
                            flex-direction: column;
                            gap: 0.75rem;
                            background: white;
                            border-top: 1px solid #E5E7EB;
                            padding: 0 1rem;
                            max-height: 0;
                            opacity: 0;
                            overflow: hidden;
                            transition: all 0.5s ease-in-out;
                        }

                        .mobile-menu.mobile-menu-open {
                            max-height: 16rem;
                            opacity: 1;
                            padding: 1rem;
                        }

                        .mobile-link {
                            color: #1F2937;
                            text-decoration: none;
                        }

                        .mobile-menu .nav-cta {
                            text-align: center;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
