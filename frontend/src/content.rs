//! Static copy for the site. Nothing here is fetched or edited at runtime.

use crate::modal::FormKind;

pub const BRAND_NAME: &str = "DMV QUEEN";
pub const BRAND_TAGLINE: &str = "Of Clean";
pub const LEGAL_NAME: &str = "DMV Queen Of Clean, LLC";

pub const PHONE_DISPLAY: &str = "202-569-8373";
pub const PHONE_HREF: &str = "tel:2025698373";
pub const EMAIL: &str = "dmvqueenofclean@gmail.com";
pub const SERVICE_AREA: &str = "Washington DC, MD & VA";
pub const HOURS_LONG: &str = "Monday - Saturday: 8am - 6pm";
pub const HOURS_SHORT: &str = "Business Hours: Mon - Sat, 8am - 6pm";

/// Issued to every subscriber. There is no per-user code generation.
pub const DISCOUNT_CODE: &str = "ROYAL10";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Star,
    CheckCircle,
    Sparkles,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Star => "★",
            ServiceIcon::CheckCircle => "✔",
            ServiceIcon::Sparkles => "✦",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ServiceIcon::Star => "icon icon-gold",
            ServiceIcon::CheckCircle => "icon icon-green",
            ServiceIcon::Sparkles => "icon icon-teal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub icon: ServiceIcon,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Residential Cleaning",
        description: "Weekly, bi-weekly, or monthly maintenance.",
        image: "/assets/images/real-livingroom.jpg",
        icon: ServiceIcon::Star,
    },
    Service {
        title: "Commercial Spaces",
        description: "Office & retail cleaning services.",
        image: "/assets/images/clean-office.jpg",
        icon: ServiceIcon::CheckCircle,
    },
    Service {
        title: "Move-In / Move-Out",
        description: "Deep cleaning for new beginnings.",
        image: "/assets/images/clean-apartment.webp",
        icon: ServiceIcon::Sparkles,
    },
];

pub const REASONS: [&str; 4] = [
    "Eco-friendly 'Green' cleaning options available upon request.",
    "Professional, vetted, and trained staff.",
    "Serving the entire DMV area (DC, MD, VA).",
    "100% Satisfaction Guarantee.",
];

pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

// Profiles are not live yet.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "Facebook", glyph: "f", href: "#" },
    SocialLink { label: "Instagram", glyph: "◎", href: "#" },
    SocialLink { label: "Twitter", glyph: "𝕏", href: "#" },
];

/// Everything the success overlay shows for one kind of submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuccessCopy {
    pub title: &'static str,
    pub icon: &'static str,
    pub lead: &'static str,
    pub detail: &'static str,
    pub discount_code: Option<&'static str>,
}

pub fn success_copy(kind: FormKind) -> SuccessCopy {
    match kind {
        FormKind::Contact => SuccessCopy {
            title: "Message Received",
            icon: "✔",
            lead: "Thank you for reaching out to the Queen!",
            detail: "We have received your request and a member of our royal staff \
                     will be in touch within 24 hours to finalize your estimate.",
            discount_code: None,
        },
        FormKind::Subscribe => SuccessCopy {
            title: "Welcome to the Family!",
            icon: "🎁",
            lead: "Thank you for subscribing! As promised, here is your discount \
                   code for your first booking:",
            detail: "We've also sent this code to your email address.",
            discount_code: Some(DISCOUNT_CODE),
        },
    }
}
