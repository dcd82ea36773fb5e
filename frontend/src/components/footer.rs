use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, ICON_BOT};
use crate::content::{COMPANY_NAME, TAGLINE};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <Icon paths={ICON_BOT} class="footer-logo-icon" />
                        <span>{COMPANY_NAME}</span>
                    </div>
                    <p class="footer-tagline">{TAGLINE}</p>
                </div>
                <div class="footer-legal">
                    <div class="legal-links">
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        <span class="legal-separator">{"|"}</span>
                        <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                    </div>
                    <p class="copyright">{format!("© 2025 {}. All rights reserved.", COMPANY_NAME)}</p>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #111827;
                        color: #9CA3AF;
                        padding: 3rem 1.5rem;
                    }

                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2rem;
                    }

                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: white;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }

                    .footer-logo-icon {
                        width: 2rem;
                        height: 2rem;
                        color: #7B61FF;
                    }

                    .footer-tagline {
                        margin-top: 0.5rem;
                    }

                    .footer-legal {
                        text-align: right;
                    }

                    .legal-links a {
                        color: #D1D5DB;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .legal-links a:hover {
                        color: #00E0FF;
                    }

                    .legal-separator {
                        margin: 0 0.75rem;
                        color: #4B5563;
                    }

                    .copyright {
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                    }

                    @media (max-width: 768px) {
                        .footer-content {
                            flex-direction: column;
                            text-align: center;
                        }

                        .footer-legal {
                            text-align: center;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
