use chrono::NaiveDate;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, ICON_ARROW_LEFT};
use crate::content::{COMPANY_NAME, CONTACT_EMAIL, WEBSITE_URL, email_href};
use crate::Route;

pub fn last_updated() -> String {
    NaiveDate::from_ymd_opt(2026, 1, 5)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

fn bullets(items: &[&'static str]) -> Html {
    html! {
        <ul>
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-content">
            <div class="legal-container">
                <Link<Route> to={Route::Home} classes="back-link">
                    <Icon paths={ICON_ARROW_LEFT} />
                    <span>{"Back to Home"}</span>
                </Link<Route>>
                <h1>{props.title}</h1>
                <p class="last-updated">{format!("Last Updated: {}", last_updated())}</p>
                <div class="legal-body">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                    .legal-content {
                        min-height: 100vh;
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, white, #F8FAFC, white);
                    }

                    .legal-container {
                        max-width: 56rem;
                        margin: 0 auto;
                    }

                    .back-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #0056D2;
                        text-decoration: none;
                        margin-bottom: 2rem;
                        transition: color 0.3s ease;
                    }

                    .back-link:hover {
                        color: #7B61FF;
                    }

                    .back-link .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                        transition: transform 0.3s ease;
                    }

                    .back-link:hover .icon {
                        transform: translateX(-0.25rem);
                    }

                    .legal-content h1 {
                        font-size: 2.5rem;
                        background: linear-gradient(90deg, #0056D2, #7B61FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        margin-bottom: 0.5rem;
                    }

                    .last-updated {
                        color: #6B7280;
                        margin-bottom: 2.5rem;
                    }

                    .legal-body {
                        color: #374151;
                        line-height: 1.7;
                    }

                    .legal-body section {
                        margin-bottom: 2rem;
                    }

                    .legal-body h2 {
                        font-size: 1.5rem;
                        color: #1F2937;
                        margin-bottom: 1rem;
                    }

                    .legal-body h3 {
                        font-size: 1.1rem;
                        color: #0056D2;
                        margin: 1rem 0 0.5rem 0;
                    }

                    .legal-body ul {
                        list-style-type: none;
                        padding-left: 1.5rem;
                    }

                    .legal-body li {
                        position: relative;
                        margin-bottom: 0.5rem;
                    }

                    .legal-body li:before {
                        content: "•";
                        color: #7B61FF;
                        position: absolute;
                        left: -1.25rem;
                    }

                    .legal-body .term {
                        font-weight: 600;
                        color: #1F2937;
                    }

                    .legal-body a {
                        color: #0056D2;
                    }

                    .legal-contact {
                        background: linear-gradient(135deg, #EFF6FF, #F5F3FF);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                    }
                "#}
            </style>
        </div>
    }
}

fn contact_block() -> Html {
    html! {
        <>
            <p><span class="term">{COMPANY_NAME}</span></p>
            <p><span class="term">{"Email: "}</span><a href={email_href()}>{CONTACT_EMAIL}</a></p>
            <p>
                <span class="term">{"Website: "}</span>
                <a href={WEBSITE_URL} target="_blank" rel="noopener noreferrer">{WEBSITE_URL}</a>
            </p>
        </>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <p>
                {format!("This Privacy Policy describes how {} collects, uses, stores, shares, and protects your information when you visit or use our website or services.", COMPANY_NAME)}
            </p>

            <section>
                <h2>{"1. Interpretation and Definitions"}</h2>
                <h3>{"Interpretation"}</h3>
                <p>{"Words with capitalized initials have meanings defined below. These definitions apply whether they appear in singular or plural."}</p>
                <h3>{"Definitions"}</h3>
                <ul>
                    <li><span class="term">{"Company / We / Us / Our"}</span>{format!(" refers to {}.", COMPANY_NAME)}</li>
                    <li><span class="term">{"Website"}</span>{format!(" refers to {}", WEBSITE_URL)}</li>
                    <li><span class="term">{"User / You"}</span>{" means any individual or entity accessing or using our Services."}</li>
                    <li><span class="term">{"Services"}</span>{format!(" refers to all digital marketing, consulting, website, branding, and related services offered by {}.", COMPANY_NAME)}</li>
                    <li><span class="term">{"Personal Data"}</span>{" means information that identifies or can identify an individual."}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. The Company and the Services Offered by the Company"}</h2>
                <p>{format!("{} is a digital services provider offering services including but not limited to:", COMPANY_NAME)}</p>
                { bullets(&[
                    "Digital marketing",
                    "Website development",
                    "Branding & design",
                    "Consulting",
                    "Online business solutions",
                ]) }
                <p>{"Services may change, expand, or be modified over time without prior notice."}</p>
            </section>

            <section>
                <h2>{"3. Information the Company Collects and Shares"}</h2>
                <h3>{"a) Information You Provide"}</h3>
                { bullets(&[
                    "Name",
                    "Email address",
                    "Phone number",
                    "Business details",
                    "Any information submitted via forms, emails, WhatsApp, or calls",
                ]) }
                <h3>{"b) Automatically Collected Information"}</h3>
                { bullets(&[
                    "IP address",
                    "Browser type",
                    "Device information",
                    "Pages visited",
                    "Cookies and usage data",
                ]) }
                <h3>{"c) Information Sharing"}</h3>
                { bullets(&[
                    "We do not sell your personal data.",
                    "We may share information only with trusted service providers (hosting, analytics, payment processors)",
                    "Legal or government authorities if required by law",
                ]) }
            </section>

            <section>
                <h2>{"4. Information Storage and Data Security"}</h2>
                { bullets(&[
                    "Data is stored on secure servers hosted by trusted third-party providers.",
                    "We use reasonable administrative, technical, and physical safeguards.",
                    "No system is 100% secure; however, we take all commercially reasonable measures.",
                    "Data may be stored within or outside India, depending on infrastructure providers.",
                ]) }
            </section>

            <section>
                <h2>{"5. Why the Company Collects Your Information"}</h2>
                <p>{"We collect information to:"}</p>
                { bullets(&[
                    "Provide and improve our services",
                    "Communicate with you",
                    "Process payments and contracts",
                    "Send updates, offers, or service-related notices",
                    "Comply with legal obligations",
                    "Prevent fraud or misuse",
                ]) }
            </section>

            <section>
                <h2>{"6. Export or Deletion of Your Information"}</h2>
                <p>{"You may request:"}</p>
                { bullets(&[
                    "A copy of your stored personal data",
                    "Correction or deletion of your data",
                ]) }
                <p>{"Requests can be sent to the contact details mentioned below. We may retain certain data if required by law or for legitimate business purposes."}</p>
            </section>

            <section>
                <h2>{"7. Requirement for Availing Our Services"}</h2>
                <p>{"Providing certain personal information is mandatory to:"}</p>
                { bullets(&[
                    "Enter into service agreements",
                    "Receive services",
                    "Process payments",
                ]) }
                <p>{"Failure to provide required information may result in inability to deliver services."}</p>
            </section>

            <section>
                <h2>{"8. Refund / Cancellation Policy"}</h2>
                { bullets(&[
                    "Refunds are applicable only if services are not delivered as agreed.",
                    "Partial refunds may apply for unused portions of services.",
                    "No refund once service execution has started, unless legally required.",
                    "No refunds for delays caused by third-party platforms, force majeure, or client-side delays.",
                    "Detailed refund terms may also be governed by individual service agreements.",
                ]) }
            </section>

            <section>
                <h2>{"9. Links to Other Websites"}</h2>
                { bullets(&[
                    "Our website may contain links to third-party websites.",
                    "We are not responsible for their privacy practices or content.",
                    "We recommend reviewing their privacy policies separately.",
                ]) }
            </section>

            <section>
                <h2>{"10. Changes to This Policy"}</h2>
                { bullets(&[
                    "We may update this Privacy Policy at any time.",
                    "Changes will be effective immediately upon posting on the Website.",
                    "Continued use of services implies acceptance of the updated policy.",
                ]) }
            </section>

            <section>
                <h2>{"11. Your Legal Rights and Responsibilities"}</h2>
                <h3>{"You have the right to:"}</h3>
                { bullets(&[
                    "Access your personal data",
                    "Request corrections or deletion",
                    "Withdraw consent (where applicable)",
                ]) }
                <h3>{"You are responsible for:"}</h3>
                { bullets(&[
                    "Providing accurate information",
                    "Using our services lawfully",
                ]) }
            </section>

            <section class="legal-contact">
                <h2>{"12. Contact Us"}</h2>
                <p>{"For privacy-related queries, contact:"}</p>
                { contact_block() }
            </section>
        </LegalPage>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <LegalPage title="Terms & Conditions">
            <p>
                {"These Terms & Conditions (\"Terms\") govern your use of the website "}
                <strong>{WEBSITE_URL}</strong>
                {" operated by "}<strong>{COMPANY_NAME}</strong>
                {". By accessing or using our website or services, you agree to be bound by these Terms."}
            </p>

            <section>
                <h2>{"1. Services"}</h2>
                <p>{format!("{} provides digital services including digital marketing, website development, branding, consulting, AI-based solutions, and related services. Services are subject to availability and agreement.", COMPANY_NAME)}</p>
            </section>

            <section>
                <h2>{"2. User Responsibilities"}</h2>
                { bullets(&[
                    "Use the website only for lawful purposes",
                    "Provide accurate and truthful information",
                    "Do not attempt to hack, misuse, or disrupt systems",
                    "Do not copy or resell content without permission",
                ]) }
            </section>

            <section>
                <h2>{"3. Payments & Taxes"}</h2>
                <p>{"Payments must be made as per agreed invoices or proposals. All applicable taxes, duties, or government charges are borne by the client unless stated otherwise."}</p>
            </section>

            <section>
                <h2>{"4. Refund Policy"}</h2>
                <p>{"Refunds are applicable only if services are not delivered as agreed. No refunds are provided once service execution has started, except where required by law."}</p>
            </section>

            <section>
                <h2>{"5. Intellectual Property"}</h2>
                <p>{format!("All website content, designs, logos, text, and materials are the intellectual property of {}. Unauthorized use is strictly prohibited.", COMPANY_NAME)}</p>
            </section>

            <section>
                <h2>{"6. Disclaimer"}</h2>
                <p>{"All services are provided on an \"as is\" basis. We do not guarantee specific results, revenue, or business growth."}</p>
            </section>

            <section>
                <h2>{"7. Limitation of Liability"}</h2>
                <p>{"Our total liability shall not exceed the amount paid by the client for the specific service. We are not liable for indirect or consequential damages."}</p>
            </section>

            <section>
                <h2>{"8. Termination"}</h2>
                <p>{"We reserve the right to suspend or terminate access if these Terms are violated or if required by law."}</p>
            </section>

            <section>
                <h2>{"9. Governing Law"}</h2>
                <p>{"These Terms shall be governed by the laws of India. Courts located in India shall have exclusive jurisdiction."}</p>
            </section>

            <section class="legal-contact">
                <h2>{"10. Contact Information"}</h2>
                { contact_block() }
            </section>
        </LegalPage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_updated_is_spelled_out() {
        assert_eq!(last_updated(), "January 5, 2026");
    }
}
