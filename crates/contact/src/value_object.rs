use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

pub const SERVICE_NOT_SPECIFIED: &str = "Not specified";

/// Treatments offered on the site, keyed by the identifier the contact form posts
#[derive(
    EnumString,
    Display,
    VariantArray,
    IntoStaticStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Service {
    Cleaning,
    Whitening,
    Orthodontics,
    Implants,
    Veneers,
    Pediatric,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceEntry {
    pub id: &'static str,
    pub title: &'static str,
}

impl Service {
    pub fn title(&self) -> &'static str {
        match self {
            Service::Cleaning => "Dental Cleaning",
            Service::Whitening => "Teeth Whitening",
            Service::Orthodontics => "Orthodontics",
            Service::Implants => "Dental Implants",
            Service::Veneers => "Dental Veneers",
            Service::Pediatric => "Pediatric Dentistry",
            Service::Other => "Other",
        }
    }

    pub fn catalogue() -> Vec<ServiceEntry> {
        Service::VARIANTS
            .iter()
            .map(|service| ServiceEntry {
                id: service.into(),
                title: service.title(),
            })
            .collect()
    }
}

/// Display label for a submitted service identifier.
///
/// The first character is upper-cased and the remaining hyphens become
/// spaces, so `teeth-whitening` reads `Teeth whitening`. Identifiers
/// outside [`Service`] are labelled the same way.
pub fn service_label(service: Option<&str>) -> String {
    let Some(service) = service.filter(|s| !s.trim().is_empty()) else {
        return SERVICE_NOT_SPECIFIED.to_owned();
    };

    let mut chars = service.chars();
    let Some(first) = chars.next() else {
        return SERVICE_NOT_SPECIFIED.to_owned();
    };

    first
        .to_uppercase()
        .chain(chars.map(|c| if c == '-' { ' ' } else { c }))
        .collect()
}
