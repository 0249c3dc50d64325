use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Availability of a listing, as set by the content editor
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Reserved,
    Sold,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 3] = [Self::Available, Self::Reserved, Self::Sold];

    /// Value stored in the content source
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
        }
    }

    /// Title shown to editors
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Sold => "Sold",
        }
    }
}

/// Kind of real estate being offered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
    Penthouse,
    Townhouse,
    Land,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        Self::Apartment,
        Self::Villa,
        Self::Penthouse,
        Self::Townhouse,
        Self::Land,
        Self::Commercial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::Penthouse => "penthouse",
            Self::Townhouse => "townhouse",
            Self::Land => "land",
            Self::Commercial => "commercial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Penthouse => "Penthouse",
            Self::Townhouse => "Townhouse",
            Self::Land => "Land",
            Self::Commercial => "Commercial",
        }
    }
}

/// Returned when a status or type name is not one of the known values
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: String,
}

fn parse_variant<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: impl Fn(&T) -> &'static str,
) -> Result<T, ParseEnumError> {
    let wanted = value.trim();
    all.iter()
        .find(|variant| name(*variant).eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| ParseEnumError {
            kind,
            value: value.to_string(),
            expected: all.iter().map(&name).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for PropertyStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("status", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for PropertyType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("property type", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core property listing model
///
/// `price` and `area` are display strings written by the editor, with the
/// currency and unit already embedded. `images[0]` is the cover image when
/// present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub price: String,
    pub location: String,
    pub area: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Cover image URL, if the listing has any images
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Images after the cover
    pub fn gallery(&self) -> &[String] {
        self.images.get(1..).unwrap_or_default()
    }
}

/// Query criteria for listing pages
///
/// Empty sets behave like absent ones. `min_price` and `max_price` are
/// accepted but not applied: prices are free-form display strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    pub status: Option<Vec<PropertyStatus>>,
    #[serde(rename = "type")]
    pub property_type: Option<Vec<PropertyType>>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub location: Option<String>,
}

impl PropertyFilter {
    /// Statuses to include, `None` when the criterion is unset or empty
    pub fn statuses(&self) -> Option<&[PropertyStatus]> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }

    pub fn types(&self) -> Option<&[PropertyType]> {
        self.property_type.as_deref().filter(|t| !t.is_empty())
    }

    /// Location needle, `None` when unset or empty
    pub fn location_text(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// Whether a property passes the status, type and location criteria
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(statuses) = self.statuses() {
            if !statuses.contains(&property.status) {
                return false;
            }
        }

        if let Some(types) = self.types() {
            if !types.contains(&property.property_type) {
                return false;
            }
        }

        if let Some(location) = self.location_text() {
            if !property
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}
