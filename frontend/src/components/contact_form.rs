use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{Icon, ICON_ALERT_CIRCLE, ICON_CHECK, ICON_SEND};
use crate::contact::{ContactFormState, FormEffect, FormField, FormMsg, GatewayHandle};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub gateway: GatewayHandle,
}

pub struct ContactForm {
    state: ContactFormState,
}

impl Component for ContactForm {
    type Message = FormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: ContactFormState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let FormEffect::Send(inquiry) = self.state.apply(msg) {
            let submission = ctx.props().gateway.submit(inquiry);
            ctx.link().send_future(async move {
                match submission.await {
                    Ok(confirmation) => FormMsg::Delivered(confirmation),
                    Err(e) => {
                        warn!("Inquiry submission failed: {}", e);
                        FormMsg::Failed(e.to_string())
                    }
                }
            });
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            FormMsg::Submit
        });
        let data = &self.state.data;
        let loading = self.state.is_loading();

        html! {
            <form class="contact-form" {onsubmit}>
                if let Some(message) = self.state.success_banner() {
                    <div class="form-banner success">
                        <Icon paths={ICON_CHECK} />
                        <p>{message}</p>
                    </div>
                }
                if let Some(message) = self.state.error_banner() {
                    <div class="form-banner error">
                        <Icon paths={ICON_ALERT_CIRCLE} />
                        <p>{message}</p>
                    </div>
                }

                <div class="form-grid">
                    { self.input(ctx, FormField::Name, "text", "Full Name", "John Doe", &data.name, true) }
                    { self.input(ctx, FormField::Email, "email", "Email Address", "john@example.com", &data.email, true) }
                    { self.input(ctx, FormField::Phone, "tel", "Phone Number", "+91 9999999999", &data.phone, true) }
                    { self.input(ctx, FormField::Company, "text", "Company Name", "Your Company", &data.company, false) }
                </div>

                <div class="form-field">
                    <label for="message">
                        {"Message "}<span class="required">{"*"}</span>
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        rows="6"
                        placeholder="Tell us about your project or inquiry..."
                        value={data.message.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            FormMsg::Edit(FormField::Message, input.value())
                        })}
                    />
                </div>

                <button
                    type="submit"
                    class={classes!("submit-button", loading.then_some("loading"))}
                    disabled={loading}
                >
                    if loading {
                        <>
                            <div class="spinner"></div>
                            {"Sending..."}
                        </>
                    } else {
                        <>
                            <Icon paths={ICON_SEND} />
                            {"Send Message"}
                        </>
                    }
                </button>
                <style>
                    {r#"
                        .contact-form {
                            display: flex;
                            flex-direction: column;
                            gap: 1.5rem;
                        }

                        .form-banner {
                            display: flex;
                            align-items: center;
                            gap: 0.75rem;
                            padding: 1rem;
                            border-radius: 0.5rem;
                        }

                        .form-banner p {
                            margin: 0;
                            font-weight: 500;
                        }

                        .form-banner .icon {
                            width: 1.25rem;
                            height: 1.25rem;
                            flex-shrink: 0;
                        }

                        .form-banner.success {
                            background: #ECFDF5;
                            border: 1px solid #A7F3D0;
                            color: #047857;
                        }

                        .form-banner.error {
                            background: #FEF2F2;
                            border: 1px solid #FECACA;
                            color: #B91C1C;
                        }

                        .form-grid {
                            display: grid;
                            grid-template-columns: repeat(2, 1fr);
                            gap: 1.5rem;
                        }

                        .form-field label {
                            display: block;
                            font-size: 0.875rem;
                            font-weight: 600;
                            color: #1F2937;
                            margin-bottom: 0.5rem;
                        }

                        .form-field .required {
                            color: #EF4444;
                        }

                        .form-field input,
                        .form-field textarea {
                            width: 100%;
                            box-sizing: border-box;
                            padding: 0.75rem 1rem;
                            border: 1px solid #D1D5DB;
                            border-radius: 0.5rem;
                            font: inherit;
                            transition: border-color 0.3s ease, box-shadow 0.3s ease;
                        }

                        .form-field input:focus,
                        .form-field textarea:focus {
                            outline: none;
                            border-color: #7B61FF;
                            box-shadow: 0 0 0 3px rgba(123, 97, 255, 0.2);
                        }

                        .form-field textarea {
                            resize: none;
                        }

                        .submit-button {
                            width: 100%;
                            padding: 0.75rem 1.5rem;
                            border: none;
                            border-radius: 0.5rem;
                            font-weight: 600;
                            font-size: 1rem;
                            color: white;
                            background: linear-gradient(90deg, #0056D2, #7B61FF);
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            gap: 0.5rem;
                            cursor: pointer;
                            transition: all 0.3s ease;
                        }

                        .submit-button:hover:not(:disabled) {
                            background: linear-gradient(90deg, #7B61FF, #00E0FF);
                            box-shadow: 0 20px 25px rgba(123, 97, 255, 0.3);
                            transform: scale(1.05);
                        }

                        .submit-button.loading {
                            background: #9CA3AF;
                            cursor: not-allowed;
                        }

                        .submit-button .icon {
                            width: 1.25rem;
                            height: 1.25rem;
                        }

                        .spinner {
                            width: 1.25rem;
                            height: 1.25rem;
                            border: 2px solid white;
                            border-top-color: transparent;
                            border-radius: 9999px;
                            animation: spin 1s linear infinite;
                        }

                        @keyframes spin {
                            to { transform: rotate(360deg); }
                        }

                        @media (max-width: 768px) {
                            .form-grid {
                                grid-template-columns: 1fr;
                            }
                        }
                    "#}
                </style>
            </form>
        }
    }
}

impl ContactForm {
    #[allow(clippy::too_many_arguments)]
    fn input(
        &self,
        ctx: &Context<Self>,
        field: FormField,
        kind: &'static str,
        label: &'static str,
        placeholder: &'static str,
        value: &str,
        required: bool,
    ) -> Html {
        let name = field.name();
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FormMsg::Edit(field, input.value())
        });

        html! {
            <div class="form-field">
                <label for={name}>
                    {label}{" "}
                    if required {
                        <span class="required">{"*"}</span>
                    }
                </label>
                <input
                    type={kind}
                    id={name}
                    {name}
                    {placeholder}
                    value={value.to_string()}
                    {oninput}
                />
            </div>
        }
    }
}
