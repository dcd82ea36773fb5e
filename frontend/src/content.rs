use crate::components::icons::{
    ICON_BOT, ICON_BUILDING, ICON_DOLLAR, ICON_PALETTE, ICON_SERVER, IconPaths,
};

pub const COMPANY_NAME: &str = "DB Enterprises";
pub const TAGLINE: &str = "Empowering Businesses with Intelligence, Innovation & Impact";
pub const WEBSITE_URL: &str = "https://dbenterprisedigital.com";
pub const CONTACT_EMAIL: &str = "info@dbenterprises.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+91-9999508755";

pub struct Service {
    pub icon: IconPaths,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: ICON_BUILDING,
        title: "Streamlined Outsourcing Solutions",
        description: "Outsource with confidence. We manage back-office operations, data processes, HR, and administrative workflows so your team can focus on innovation.",
    },
    Service {
        icon: ICON_DOLLAR,
        title: "Expert Financial Services",
        description: "Tailored financial strategies from business forecasting and budgeting to investment planning and compliance support.",
    },
    Service {
        icon: ICON_SERVER,
        title: "IT Infrastructure & Measurement",
        description: "System audits, cloud setup, performance measurement, and end-to-end infrastructure management for operational excellence.",
    },
    Service {
        icon: ICON_BOT,
        title: "AI-Powered Business Growth",
        description: "Experience 110% business growth with AI. Automate tasks, generate leads, and forecast performance with intelligent tools.",
    },
    Service {
        icon: ICON_PALETTE,
        title: "Digital Creation & Branding",
        description: "Professional websites, logos, thumbnails, and creative assets that define your digital perception.",
    },
];

pub const BENEFITS: &[&str] = &[
    "AI-Driven Growth: Innovation-powered services with measurable ROI",
    "End-to-End Solutions: From outsourcing to design, all under one roof",
    "Affordable & Scalable: Premium quality without premium pricing",
    "Trusted Expertise: Years of experience in finance, IT, and digital strategy",
    "Made in India, Built for the World: Global standards with local touch",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "DB Enterprises helped us automate our operations and save 40% in costs — true professionals.",
        author: "Anita Sharma",
        position: "CEO, NeoTech Systems",
    },
    Testimonial {
        quote: "Our new website and AI tools from DB Enterprises took our sales to the next level.",
        author: "Rahul Mehta",
        position: "FinSmart Solutions",
    },
];

/// `tel:` target for the display number, digits and leading `+` only.
pub fn phone_href() -> String {
    let dialable: String = CONTACT_PHONE_DISPLAY
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dialable)
}

pub fn email_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

/// Entrance delay for the `index`th card of a list, in milliseconds.
pub fn stagger_delay(index: usize, step_ms: usize) -> String {
    format!("transition-delay: {}ms;", index * step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links() {
        assert_eq!(phone_href(), "tel:+919999508755");
        assert_eq!(email_href(), "mailto:info@dbenterprises.com");
    }

    #[test]
    fn listings_are_complete() {
        assert_eq!(SERVICES.len(), 5);
        assert_eq!(BENEFITS.len(), 5);
        assert_eq!(TESTIMONIALS.len(), 2);
        assert!(SERVICES.iter().all(|s| !s.icon.is_empty()));
    }

    #[test]
    fn stagger() {
        assert_eq!(stagger_delay(0, 100), "transition-delay: 0ms;");
        assert_eq!(stagger_delay(3, 150), "transition-delay: 450ms;");
    }
}
