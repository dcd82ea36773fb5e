use yew::prelude::*;

use crate::components::icons::{Icon, ICON_CHEVRON_DOWN};

#[derive(Properties, PartialEq)]
pub struct DisclosureProps {
    pub open: bool,
    pub on_toggle: Callback<()>,
}

/// Collapsible notice about the Finnable vendor association.
#[function_component(Disclosure)]
pub fn disclosure(props: &DisclosureProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <section class="disclosure-section">
            <div class="disclosure-container">
                <button class="disclosure-toggle" {onclick} aria-expanded={props.open.to_string()}>
                    <div class="disclosure-heading">
                        <div class="disclosure-badge">{"i"}</div>
                        <div>
                            <h3>{"Disclosure & Association"}</h3>
                            <p>{"Finnable Partnership Information"}</p>
                        </div>
                    </div>
                    <Icon
                        paths={ICON_CHEVRON_DOWN}
                        class={classes!("disclosure-chevron", props.open.then_some("rotated"))}
                    />
                </button>
                if props.open {
                    <div class="disclosure-body">
                        <p>
                            <span class="disclosure-label">{"Company Association:"}</span>
                            {" We hereby disclose that our company is a registered and authorized vendor and is proudly associated with Finnable."}
                        </p>
                        <p>
                            <span class="disclosure-label">{"Data Processing:"}</span>
                            {" As part of this association, we may receive, process, and utilize business-related data provided by Finnable strictly for operational, analytical, and service-related purposes."}
                        </p>
                        <p>
                            <span class="disclosure-label">{"Data Protection:"}</span>
                            {" All data shared is handled in compliance with applicable laws, confidentiality obligations, and data protection standards. We do not misuse, sell, or disclose such data to unauthorized third parties."}
                        </p>
                        <div class="disclosure-consent">
                            <p>
                                <span class="disclosure-label">{"Consent:"}</span>
                                {" By using our website and services, you acknowledge and consent to this association and the lawful use of data as described above."}
                            </p>
                        </div>
                        <p class="disclosure-footnote">{"Terms & Conditions (TNC)"}</p>
                    </div>
                }
            </div>
            <style>
                {r#"
                    .disclosure-section {
                        padding: 3rem 1.5rem;
                        background: #F8FAFC;
                    }

                    .disclosure-container {
                        max-width: 56rem;
                        margin: 0 auto;
                    }

                    .disclosure-toggle {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: white;
                        border: 1px solid #E5E7EB;
                        border-radius: 0.75rem;
                        padding: 1.25rem 1.5rem;
                        cursor: pointer;
                        text-align: left;
                        transition: box-shadow 0.3s ease;
                    }

                    .disclosure-toggle:hover {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                    }

                    .disclosure-heading {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .disclosure-heading h3 {
                        margin: 0;
                        color: #1F2937;
                        font-size: 1.1rem;
                    }

                    .disclosure-heading p {
                        margin: 0.25rem 0 0 0;
                        color: #6B7280;
                        font-size: 0.875rem;
                    }

                    .disclosure-badge {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #0056D2, #7B61FF);
                        color: white;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .disclosure-chevron {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #7B61FF;
                        transition: transform 0.3s ease;
                    }

                    .disclosure-chevron.rotated {
                        transform: rotate(180deg);
                    }

                    .disclosure-body {
                        margin-top: 1rem;
                        background: white;
                        border: 1px solid #E5E7EB;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        color: #4B5563;
                        line-height: 1.6;
                    }

                    .disclosure-label {
                        font-weight: 600;
                        color: #1F2937;
                    }

                    .disclosure-consent {
                        border-left: 4px solid #7B61FF;
                        padding-left: 1rem;
                        background: #F5F3FF;
                        border-radius: 0.25rem;
                    }

                    .disclosure-footnote {
                        font-size: 0.875rem;
                        color: #6B7280;
                        font-style: italic;
                    }
                "#}
            </style>
        </section>
    }
}
