//! The service catalog rendered by the services section.
//!
//! Fixed, hardcoded display data. Array order is display order.

use crate::icons::Icon;

/// One service offering. `id` doubles as the `data-card-id` attribute
/// the viewport watcher reads back from the DOM, so it must stay
/// unique across the catalog and must never be 0 (the watcher's
/// fallback for a missing attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    /// Start/end color tokens for this card's accent gradient.
    pub accent_from: &'static str,
    pub accent_to: &'static str,
    pub features: &'static [&'static str],
}

pub static CATALOG: [ServiceEntry; 6] = [
    ServiceEntry {
        id: 1,
        title: "Brand Identity Design",
        description: "Complete brand identity solutions that capture your essence \
                      and resonate with your target audience.",
        icon: Icon::Palette,
        accent_from: "#a855f7",
        accent_to: "#ec4899",
        features: &["Logo Design", "Brand Guidelines", "Color Palettes", "Typography"],
    },
    ServiceEntry {
        id: 2,
        title: "Web Design & UI/UX",
        description: "Modern, responsive web designs that deliver exceptional user \
                      experiences across all devices.",
        icon: Icon::Globe,
        accent_from: "#3b82f6",
        accent_to: "#06b6d4",
        features: &["Website Design", "Mobile Apps", "User Interface", "Prototyping"],
    },
    ServiceEntry {
        id: 3,
        title: "Print & Digital Media",
        description: "Eye-catching designs for both traditional print and \
                      cutting-edge digital media platforms.",
        icon: Icon::Layers,
        accent_from: "#10b981",
        accent_to: "#14b8a6",
        features: &["Brochures", "Business Cards", "Social Media", "Advertisements"],
    },
    ServiceEntry {
        id: 4,
        title: "Motion Graphics",
        description: "Dynamic animations and motion graphics that bring your brand \
                      to life with engaging visual storytelling.",
        icon: Icon::Zap,
        accent_from: "#f97316",
        accent_to: "#ef4444",
        features: &["Animations", "Video Graphics", "GIFs", "Interactive Media"],
    },
    ServiceEntry {
        id: 5,
        title: "Photography & Retouching",
        description: "Professional photography services and expert photo retouching \
                      to perfect every visual element.",
        icon: Icon::Camera,
        accent_from: "#6366f1",
        accent_to: "#a855f7",
        features: &[
            "Product Photography",
            "Portrait Retouching",
            "Color Correction",
            "Image Enhancement",
        ],
    },
    ServiceEntry {
        id: 6,
        title: "Creative Consulting",
        description: "Strategic creative direction and consulting to elevate your \
                      brand and maximize visual impact.",
        icon: Icon::Sparkles,
        accent_from: "#f43f5e",
        accent_to: "#ec4899",
        features: &["Strategy Development", "Creative Direction", "Brand Audit", "Market Analysis"],
    },
];
