use crate::models::{Property, PropertyFilter, PropertyStatus, PropertyType};
use chrono::{DateTime, TimeZone, Utc};

/// Built-in listings served when the content source is unavailable
///
/// Order is fixed and slugs are unique.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    properties: Vec<Property>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            properties: fallback_properties(),
        }
    }

    pub fn all(&self) -> Vec<Property> {
        self.properties.clone()
    }

    pub fn filter(&self, filter: &PropertyFilter) -> Vec<Property> {
        self.properties
            .iter()
            .filter(|property| filter.matches(property))
            .cloned()
            .collect()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<Property> {
        self.properties.iter().find(|p| p.slug == slug).cloned()
    }

    pub fn with_status(&self, status: PropertyStatus) -> Vec<Property> {
        self.properties
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn fallback_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            slug: "luxury-penthouse-marbella".to_string(),
            title: "Luxury Penthouse Marbella".to_string(),
            description: "Exquisite penthouse apartment with panoramic sea views in the heart of Marbella's Golden Mile. Features include a private terrace, infinity pool, and premium finishes throughout.".to_string(),
            property_type: PropertyType::Penthouse,
            status: PropertyStatus::Available,
            price: "€2,850,000".to_string(),
            location: "Marbella, Spain".to_string(),
            area: "285 m²".to_string(),
            bedrooms: 4,
            bathrooms: 4,
            features: strings(&[
                "Sea views",
                "Private terrace",
                "Infinity pool",
                "Underground parking",
                "24/7 security",
                "Gym access",
            ]),
            images: vec![],
            created_at: date(2026, 1, 15),
            updated_at: date(2026, 2, 1),
        },
        Property {
            id: "2".to_string(),
            slug: "modern-villa-algarve".to_string(),
            title: "Modern Villa Algarve".to_string(),
            description: "Contemporary architectural masterpiece located in the prestigious Quinta do Lago area. This stunning villa offers the perfect blend of luxury and comfort.".to_string(),
            property_type: PropertyType::Villa,
            status: PropertyStatus::Available,
            price: "€3,200,000".to_string(),
            location: "Algarve, Portugal".to_string(),
            area: "420 m²".to_string(),
            bedrooms: 5,
            bathrooms: 5,
            features: strings(&[
                "Golf course views",
                "Private garden",
                "Heated pool",
                "Smart home system",
                "Wine cellar",
                "Home cinema",
            ]),
            images: vec![],
            created_at: date(2026, 1, 20),
            updated_at: date(2026, 2, 5),
        },
        Property {
            id: "3".to_string(),
            slug: "beachfront-apartment-dubai".to_string(),
            title: "Beachfront Apartment Dubai".to_string(),
            description: "Sophisticated beachfront residence in Dubai Marina with stunning views of the Arabian Gulf. Premium amenities and world-class finishes.".to_string(),
            property_type: PropertyType::Apartment,
            status: PropertyStatus::Reserved,
            price: "AED 5,900,000".to_string(),
            location: "Dubai Marina, UAE".to_string(),
            area: "245 m²".to_string(),
            bedrooms: 3,
            bathrooms: 3,
            features: strings(&[
                "Beach access",
                "Panoramic views",
                "Concierge service",
                "Spa facilities",
                "Restaurant",
                "Valet parking",
            ]),
            images: vec![],
            created_at: date(2026, 2, 1),
            updated_at: date(2026, 2, 10),
        },
        Property {
            id: "4".to_string(),
            slug: "investment-land-mallorca".to_string(),
            title: "Investment Land Mallorca".to_string(),
            description: "Prime development land in Son Vida, Mallorca's most exclusive residential area. Excellent investment opportunity with approved building permits.".to_string(),
            property_type: PropertyType::Land,
            status: PropertyStatus::Available,
            price: "€1,750,000".to_string(),
            location: "Son Vida, Mallorca".to_string(),
            area: "2,500 m²".to_string(),
            bedrooms: 0,
            bathrooms: 0,
            features: strings(&[
                "Building permits",
                "Mountain views",
                "Exclusive area",
                "Utilities ready",
                "Gated community",
            ]),
            images: vec![],
            created_at: date(2026, 1, 25),
            updated_at: date(2026, 2, 8),
        },
        Property {
            id: "5".to_string(),
            slug: "boutique-townhouse-lisbon".to_string(),
            title: "Boutique Townhouse Lisbon".to_string(),
            description: "Beautifully restored townhouse in Lisbon's historic Chiado district. Combines traditional Portuguese charm with modern luxury amenities.".to_string(),
            property_type: PropertyType::Townhouse,
            status: PropertyStatus::Sold,
            price: "€1,450,000".to_string(),
            location: "Chiado, Lisbon".to_string(),
            area: "320 m²".to_string(),
            bedrooms: 4,
            bathrooms: 3,
            features: strings(&[
                "Historic district",
                "Original features",
                "Roof terrace",
                "Modern kitchen",
                "Wine cellar",
                "Guest suite",
            ]),
            images: vec![],
            created_at: date(2025, 12, 10),
            updated_at: date(2026, 1, 30),
        },
        Property {
            id: "6".to_string(),
            slug: "commercial-retail-london".to_string(),
            title: "Commercial Retail Space London".to_string(),
            description: "Prime retail unit in London's prestigious Mayfair district. High foot traffic area with excellent visibility and transport links.".to_string(),
            property_type: PropertyType::Commercial,
            status: PropertyStatus::Available,
            price: "£4,500,000".to_string(),
            location: "Mayfair, London".to_string(),
            area: "185 m²".to_string(),
            bedrooms: 0,
            bathrooms: 2,
            features: strings(&[
                "Prime location",
                "High street frontage",
                "Commercial lease",
                "Established tenants",
                "Strong ROI",
            ]),
            images: vec![],
            created_at: date(2026, 2, 5),
            updated_at: date(2026, 2, 12),
        },
    ]
}
