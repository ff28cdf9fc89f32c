//! Page Copy
//!
//! Literal display strings for the marketing sections.

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub struct Stat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// Icon + title + description, used by the solution pills and feature grid
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { name: "Features", href: "#features" },
    NavLink { name: "Architecture", href: "#architecture" },
    NavLink { name: "Developers", href: "#builders" },
    NavLink { name: "Pricing", href: "#pricing" },
];

pub static STATS: [Stat; 4] = [
    Stat { icon: "✅", label: "Data Accuracy", value: "99.9%" },
    Stat { icon: "⚡", label: "Integration Time", value: "< 30min" },
    Stat { icon: "🛡️", label: "Security Events", value: "0" },
    Stat { icon: "🏢", label: "Partners Ready", value: "200+" },
];

pub static SOLUTION: [Feature; 4] = [
    Feature {
        icon: "🔒",
        title: "Your Data, Your Rules",
        description: "Grant, pause, or revoke access with passkey‑secured consent. Control is not a setting—it's the default.",
    },
    Feature {
        icon: "⚡",
        title: "One‑Tap Update",
        description: "Life changes, your profile does too. Partners receive signed webhooks instantly and idempotently.",
    },
    Feature {
        icon: "🔀",
        title: "API‑First",
        description: "Modern SDKs + webhooks. Clean, direct integrations that are testable and auditable end‑to‑end.",
    },
    Feature {
        icon: "🛡️",
        title: "Integrity Protocol",
        description: "No automation, no form‑filling, no scraping. Privacy and safety by design, not by promise.",
    },
];

pub static ARCHITECTURE: [Feature; 3] = [
    Feature {
        icon: "🛡️",
        title: "Multi‑Layered Verification",
        description: "From self‑attested to definitive proofs (e.g., USPS, utility bill, bank statement) with clear provenance.",
    },
    Feature {
        icon: "⚙️",
        title: "Field‑Level Permissions",
        description: "Share only what's needed: shipping address for retail, legal residence for banking—at different resolutions.",
    },
    Feature {
        icon: "📈",
        title: "Crystal‑Clear Audit Trail",
        description: "Immutable, time‑stamped logs of reads and updates. See who accessed what, and when.",
    },
];

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: "🌍",
        title: "Global Reach",
        description: "Works with services worldwide. From local shops to international corporations.",
    },
    Feature {
        icon: "👥",
        title: "Team Management",
        description: "Manage identity permissions for your entire organization with role-based controls.",
    },
    Feature {
        icon: "📊",
        title: "Real-time Analytics",
        description: "Track how your data flows and see which services are using your information.",
    },
    Feature {
        icon: "🏅",
        title: "Premium Support",
        description: "24/7 dedicated support team to help you with any integration challenges.",
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Verifyd saved us countless hours of customer support tickets related to outdated shipping addresses.",
        author: "Sarah Chen",
        role: "CTO, FastCommerce",
        avatar: "SC",
    },
    Testimonial {
        quote: "The developer experience is incredible. Integration took less than an afternoon.",
        author: "Marcus Rodriguez",
        role: "Lead Engineer, TechFlow",
        avatar: "MR",
    },
    Testimonial {
        quote: "Finally, a solution that puts users in control of their own data. Game-changing.",
        author: "Emily Watson",
        role: "Product Manager, StartupCo",
        avatar: "EW",
    },
];

/// Social proof line under the hero form
pub const WAITLIST_COUNT: &str = "15,247";
