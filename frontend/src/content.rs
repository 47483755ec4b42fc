#[derive(PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Fast, responsive sites built to convert visitors into customers.",
    },
    Service {
        title: "App Development",
        description: "Mobile and web apps from first prototype to store release.",
    },
    Service {
        title: "Branding",
        description: "Logos, colour systems and guidelines that make you recognisable.",
    },
    Service {
        title: "Social Media Marketing",
        description: "Content calendars and campaigns that grow a real audience.",
    },
];

/// Options for the country code select. The empty value is the placeholder.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+1", "+1 (US/CA)"),
    ("+44", "+44 (UK)"),
    ("+61", "+61 (AU)"),
    ("+91", "+91 (IN)"),
    ("+92", "+92 (PK)"),
    ("+971", "+971 (AE)"),
    ("+49", "+49 (DE)"),
];

#[derive(PartialEq)]
pub struct GalleryImage {
    pub thumb: &'static str,
    pub full: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        thumb: "/assets/work/storefront-thumb.jpg",
        full: "/assets/work/storefront.jpg",
        alt: "Storefront redesign",
    },
    GalleryImage {
        thumb: "/assets/work/fitness-app-thumb.jpg",
        full: "/assets/work/fitness-app.jpg",
        alt: "Fitness tracking app",
    },
    GalleryImage {
        thumb: "/assets/work/cafe-brand-thumb.jpg",
        full: "/assets/work/cafe-brand.jpg",
        alt: "Cafe brand identity",
    },
];
