use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::disclosure::Disclosure;
use crate::components::footer::Footer;
use crate::components::icons::{Icon, ICON_ARROW_RIGHT, ICON_BOT, ICON_CHECK_CIRCLE, ICON_SPARKLES};
use crate::content::{
    email_href, phone_href, stagger_delay, BENEFITS, COMPANY_NAME, CONTACT_EMAIL,
    CONTACT_PHONE_DISPLAY, SERVICES, TESTIMONIALS,
};
use crate::visibility::{use_section_visibility, Section};

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub disclosure_open: bool,
    pub on_toggle_disclosure: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let visible = use_section_visibility();
    let revealed = |section: Section| visible.contains(section).then_some("revealed");

    html! {
        <div class="landing-page">
            <div class="background-blobs" aria-hidden="true">
                <div class="blob blob-one"></div>
                <div class="blob blob-two"></div>
                <div class="blob blob-three"></div>
            </div>

            <header class="hero">
                <div class="hero-content">
                    <h1>
                        {"Powering Business Growth with "}
                        <span class="gradient-text">{"AI & Innovation"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Your trusted partner for AI-driven business growth, outsourcing efficiency, financial consulting, IT solutions, and digital design services."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={Section::Contact.anchor()} class="primary-cta">
                            {"Book Free Consultation"}
                            <Icon paths={ICON_ARROW_RIGHT} />
                        </a>
                        <a href={Section::Services.anchor()} class="secondary-cta">
                            {"Explore Services"}
                        </a>
                    </div>
                </div>
                <div class="floating-icon floating-sparkles"><Icon paths={ICON_SPARKLES} /></div>
                <div class="floating-icon floating-bot"><Icon paths={ICON_BOT} /></div>
            </header>

            <section class="mission">
                <p>{"\"We don't just support your business — we help it evolve.\""}</p>
            </section>

            <section id={Section::Services.id()} data-animate="true" class={classes!("reveal-section", revealed(Section::Services))}>
                <div class="section-header">
                    <h2>{"Our Core Services"}</h2>
                    <p>{"Comprehensive solutions tailored to your business needs"}</p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div class="service-card reveal-item" style={stagger_delay(index, 100)}>
                            <div class="service-icon"><Icon paths={service.icon} /></div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id={Section::Benefits.id()} data-animate="true" class={classes!("reveal-section", "benefits", revealed(Section::Benefits))}>
                <div class="section-header">
                    <h2>{format!("Why Choose {}", COMPANY_NAME)}</h2>
                    <p>{"Your long-term growth partner"}</p>
                </div>
                <div class="benefits-list">
                    { for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                        <div class="benefit-item reveal-item slide-in" style={stagger_delay(index, 100)}>
                            <Icon paths={ICON_CHECK_CIRCLE} class="benefit-check" />
                            <p>{*benefit}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id={Section::Testimonials.id()} data-animate="true" class={classes!("reveal-section", revealed(Section::Testimonials))}>
                <div class="section-header">
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Trusted by businesses across industries"}</p>
                </div>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <div class="testimonial-card reveal-item" style={stagger_delay(index, 150)}>
                            <div class="stars">
                                { for (0..5).map(|i| html! {
                                    <svg class="star" style={format!("animation-delay: {}ms;", i * 100)} fill="currentColor" viewBox="0 0 20 20">
                                        <path d={STAR_PATH} />
                                    </svg>
                                }) }
                            </div>
                            <p class="quote">{format!("\"{}\"", testimonial.quote)}</p>
                            <p class="author">{testimonial.author}</p>
                            <p class="position">{testimonial.position}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="cta-band">
                <h2>{"Let's Build the Future Together"}</h2>
                <p>{"Ready to transform your business with AI and smart solutions? Let's start a conversation."}</p>
                <a href={Section::Contact.anchor()} class="cta-band-button">
                    {"Get Started Today"}
                    <Icon paths={ICON_ARROW_RIGHT} />
                </a>
            </section>

            <section id={Section::Contact.id()} data-animate="true" class={classes!("reveal-section", revealed(Section::Contact))}>
                <div class="section-header">
                    <h2>{"Get in Touch"}</h2>
                    <p>{"Fill out the form below and our team will get back to you shortly"}</p>
                </div>
                <div class="contact-layout">
                    <div class="contact-form-card reveal-item slide-in">
                        <ContactForm />
                    </div>
                    <div class="contact-info-card reveal-item slide-in-right">
                        <div class="contact-info-item">
                            <h3>{"Phone/WhatsApp"}</h3>
                            <a href={phone_href()}>{CONTACT_PHONE_DISPLAY}</a>
                        </div>
                        <div class="contact-info-item">
                            <h3>{"Email"}</h3>
                            <a href={email_href()}>{CONTACT_EMAIL}</a>
                        </div>
                        <div class="contact-info-item">
                            <h3>{"Response Time"}</h3>
                            <p>{"We typically respond within 24 hours. For urgent inquiries, please call us directly."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <Disclosure open={props.disclosure_open} on_toggle={props.on_toggle_disclosure.clone()} />
            <Footer />

            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        overflow: hidden;
                        background: white;
                        color: #1F2937;
                    }

                    .background-blobs {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                    }

                    .blob {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.2;
                        animation: blob 7s infinite;
                    }

                    .blob-one { top: 5rem; left: 2.5rem; background: #0056D2; }
                    .blob-two { top: 10rem; right: 2.5rem; background: #7B61FF; animation-delay: 2s; }
                    .blob-three { top: 30rem; left: 50%; background: #00E0FF; animation-delay: 4s; }

                    @keyframes blob {
                        0%, 100% { transform: translate(0, 0) scale(1); }
                        33% { transform: translate(30px, -50px) scale(1.1); }
                        66% { transform: translate(-20px, 20px) scale(0.9); }
                    }

                    .hero {
                        position: relative;
                        z-index: 1;
                        padding: 10rem 1.5rem 6rem 1.5rem;
                        text-align: center;
                    }

                    .hero-content {
                        max-width: 56rem;
                        margin: 0 auto;
                    }

                    .hero h1 {
                        font-size: 3.5rem;
                        font-weight: 800;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }

                    .gradient-text {
                        background: linear-gradient(90deg, #0056D2, #7B61FF, #00E0FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #4B5563;
                        margin-bottom: 2.5rem;
                        line-height: 1.6;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }

                    .primary-cta, .cta-band-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }

                    .primary-cta {
                        background: linear-gradient(90deg, #0056D2, #7B61FF);
                        color: white;
                    }

                    .primary-cta:hover {
                        background: linear-gradient(90deg, #7B61FF, #00E0FF);
                        box-shadow: 0 20px 25px rgba(123, 97, 255, 0.3);
                        transform: scale(1.05);
                    }

                    .primary-cta .icon, .cta-band-button .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .secondary-cta {
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        border: 2px solid #0056D2;
                        color: #0056D2;
                        font-weight: 600;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }

                    .secondary-cta:hover {
                        background: #0056D2;
                        color: white;
                    }

                    .floating-icon {
                        position: absolute;
                        color: #7B61FF;
                        opacity: 0.4;
                        animation: float 6s ease-in-out infinite;
                    }

                    .floating-icon .icon {
                        width: 3rem;
                        height: 3rem;
                    }

                    .floating-sparkles { top: 8rem; right: 10%; }
                    .floating-bot { bottom: 4rem; left: 10%; color: #0056D2; animation-delay: 2s; }

                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }

                    .mission {
                        position: relative;
                        z-index: 1;
                        padding: 4rem 1.5rem;
                        background: linear-gradient(90deg, #0056D2, #7B61FF);
                        text-align: center;
                    }

                    .mission p {
                        font-size: 1.75rem;
                        font-style: italic;
                        font-weight: 300;
                        color: white;
                        max-width: 56rem;
                        margin: 0 auto;
                    }

                    .reveal-section {
                        position: relative;
                        z-index: 1;
                        padding: 5rem 1.5rem;
                    }

                    .reveal-section.benefits {
                        background: #F8FAFC;
                    }

                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 1s ease;
                    }

                    .section-header h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .section-header p {
                        font-size: 1.25rem;
                        color: #4B5563;
                    }

                    .reveal-item {
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 0.5s ease;
                    }

                    .reveal-item.slide-in {
                        transform: translateX(-2.5rem);
                    }

                    .reveal-item.slide-in-right {
                        transform: translateX(2.5rem);
                    }

                    .revealed .section-header,
                    .revealed .reveal-item {
                        opacity: 1;
                        transform: none;
                    }

                    .services-grid, .testimonials-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 2rem;
                    }

                    .service-card, .testimonial-card {
                        background: white;
                        padding: 2rem;
                        border-radius: 0.75rem;
                        border: 1px solid #F3F4F6;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }

                    .revealed .service-card:hover, .revealed .testimonial-card:hover {
                        transform: translateY(-0.5rem);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    }

                    .service-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #0056D2, #7B61FF);
                        color: white;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                    }

                    .service-icon .icon {
                        width: 1.75rem;
                        height: 1.75rem;
                    }

                    .service-card h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                    }

                    .service-card p {
                        color: #4B5563;
                        line-height: 1.6;
                    }

                    .benefits-list {
                        max-width: 56rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .benefit-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        background: white;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }

                    .benefit-item p {
                        margin: 0;
                        font-size: 1.1rem;
                    }

                    .benefit-check {
                        width: 1.5rem;
                        height: 1.5rem;
                        color: #7B61FF;
                        flex-shrink: 0;
                    }

                    .stars {
                        display: flex;
                        gap: 0.25rem;
                        margin-bottom: 1rem;
                    }

                    .star {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #FBBF24;
                        animation: pulse 2s ease-in-out infinite;
                    }

                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.7; }
                    }

                    .quote {
                        font-size: 1.1rem;
                        font-style: italic;
                        color: #374151;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }

                    .author {
                        font-weight: 700;
                        margin: 0;
                    }

                    .position {
                        color: #6B7280;
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    .cta-band {
                        position: relative;
                        z-index: 1;
                        padding: 5rem 1.5rem;
                        text-align: center;
                        background: linear-gradient(135deg, #0056D2, #7B61FF, #00E0FF);
                        color: white;
                    }

                    .cta-band h2 {
                        font-size: 2.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .cta-band p {
                        font-size: 1.25rem;
                        margin-bottom: 2.5rem;
                        opacity: 0.9;
                    }

                    .cta-band-button {
                        background: white;
                        color: #0056D2;
                    }

                    .cta-band-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }

                    .contact-layout {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2rem;
                    }

                    .contact-form-card, .contact-info-card {
                        background: white;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        border: 1px solid #F3F4F6;
                    }

                    .contact-info-card {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .contact-info-item h3 {
                        font-size: 1.1rem;
                        margin-bottom: 0.5rem;
                    }

                    .contact-info-item a {
                        color: #0056D2;
                        text-decoration: none;
                        font-weight: 500;
                    }

                    .contact-info-item a:hover {
                        color: #7B61FF;
                    }

                    .contact-info-item p {
                        color: #4B5563;
                        line-height: 1.6;
                    }

                    @media (max-width: 1024px) {
                        .contact-layout {
                            grid-template-columns: 1fr;
                        }
                    }

                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.5rem;
                        }

                        .section-header h2, .cta-band h2 {
                            font-size: 2rem;
                        }

                        .floating-icon {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
