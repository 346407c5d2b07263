use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ListingId, SubjectId};

/// Listing - a public vehicle advert document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub owner_uid: SubjectId,

    // Vehicle
    pub category: Category,
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    /// Miles for most categories, km for trucks, hours for farm & plant.
    pub mileage: Option<i32>,
    pub fuel: Option<Fuel>,
    pub transmission: Option<Transmission>,
    pub body: Option<Body>,
    pub colour: Option<String>,
    pub description: Option<String>,
    pub price: f64,

    /// Ordered; index 0 is the cover photo.
    pub images: Vec<String>,

    pub status: ListingStatus,

    // Reserved promotion fields. The write path always produces
    // false/None and the feed placement is purely positional; these exist
    // for a future promotion filter.
    pub is_premium: bool,
    pub premium_until: Option<DateTime<Utc>>,

    /// Display-only location string, no structured geocoding.
    pub post_town: Option<String>,

    // Quick-filter fields (read by the feed, never written by the wizard)
    pub seats: Option<i32>,
    pub has_tow_bar: Option<bool>,
    pub has_warranty: Option<bool>,

    // Server-assigned, strictly monotonic per write
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// URL of the cover photo, when any photo exists.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Label for the mileage figure; farm & plant machines count hours.
    pub fn mileage_label(&self) -> &'static str {
        match self.category {
            Category::FarmPlant => "Hours",
            _ => "Mileage",
        }
    }
}

/// The client-built half of a public listing document. The backend assigns
/// id and the created/updated timestamps on write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub owner_uid: SubjectId,
    pub category: Category,
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub mileage: Option<i32>,
    pub fuel: Option<Fuel>,
    pub transmission: Option<Transmission>,
    pub body: Option<Body>,
    pub colour: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub images: Vec<String>,
    pub status: ListingStatus,
    pub is_premium: bool,
    pub premium_until: Option<DateTime<Utc>>,
    pub post_town: Option<String>,
    pub seats: Option<i32>,
    pub has_tow_bar: Option<bool>,
    pub has_warranty: Option<bool>,
}

// =============================================================================
// Enums for type-safe document fields
// =============================================================================

/// Vehicle category enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Cars,
    Vans,
    Bikes,
    Caravans,
    Trucks,
    #[serde(rename = "Farm & Plant")]
    FarmPlant,
}

impl Category {
    /// All six categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Cars,
        Category::Vans,
        Category::Bikes,
        Category::Caravans,
        Category::Trucks,
        Category::FarmPlant,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Cars => write!(f, "Cars"),
            Category::Vans => write!(f, "Vans"),
            Category::Bikes => write!(f, "Bikes"),
            Category::Caravans => write!(f, "Caravans"),
            Category::Trucks => write!(f, "Trucks"),
            Category::FarmPlant => write!(f, "Farm & Plant"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Cars" => Ok(Category::Cars),
            "Vans" => Ok(Category::Vans),
            "Bikes" => Ok(Category::Bikes),
            "Caravans" => Ok(Category::Caravans),
            "Trucks" => Ok(Category::Trucks),
            "Farm & Plant" => Ok(Category::FarmPlant),
            _ => Err(anyhow::anyhow!("Invalid category: {}", s)),
        }
    }
}

/// Fuel type enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Fuel {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
    Other,
}

impl std::fmt::Display for Fuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fuel::Petrol => write!(f, "Petrol"),
            Fuel::Diesel => write!(f, "Diesel"),
            Fuel::Hybrid => write!(f, "Hybrid"),
            Fuel::Electric => write!(f, "Electric"),
            Fuel::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Fuel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Petrol" => Ok(Fuel::Petrol),
            "Diesel" => Ok(Fuel::Diesel),
            "Hybrid" => Ok(Fuel::Hybrid),
            "Electric" => Ok(Fuel::Electric),
            "Other" => Ok(Fuel::Other),
            _ => Err(anyhow::anyhow!("Invalid fuel: {}", s)),
        }
    }
}

/// Transmission enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Transmission {
    Manual,
    Automatic,
    Other,
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transmission::Manual => write!(f, "Manual"),
            Transmission::Automatic => write!(f, "Automatic"),
            Transmission::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Transmission {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Manual" => Ok(Transmission::Manual),
            "Automatic" => Ok(Transmission::Automatic),
            "Other" => Ok(Transmission::Other),
            _ => Err(anyhow::anyhow!("Invalid transmission: {}", s)),
        }
    }
}

/// Body type enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Body {
    Hatchback,
    Saloon,
    Estate,
    #[serde(rename = "SUV")]
    Suv,
    Coupe,
    Convertible,
    #[serde(rename = "MPV")]
    Mpv,
    Van,
    Other,
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Hatchback => write!(f, "Hatchback"),
            Body::Saloon => write!(f, "Saloon"),
            Body::Estate => write!(f, "Estate"),
            Body::Suv => write!(f, "SUV"),
            Body::Coupe => write!(f, "Coupe"),
            Body::Convertible => write!(f, "Convertible"),
            Body::Mpv => write!(f, "MPV"),
            Body::Van => write!(f, "Van"),
            Body::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Body {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Hatchback" => Ok(Body::Hatchback),
            "Saloon" => Ok(Body::Saloon),
            "Estate" => Ok(Body::Estate),
            "SUV" => Ok(Body::Suv),
            "Coupe" => Ok(Body::Coupe),
            "Convertible" => Ok(Body::Convertible),
            "MPV" => Ok(Body::Mpv),
            "Van" => Ok(Body::Van),
            "Other" => Ok(Body::Other),
            _ => Err(anyhow::anyhow!("Invalid body type: {}", s)),
        }
    }
}

/// Listing status enum. The write path only ever produces `Live`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Live,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStatus::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "live" => Ok(ListingStatus::Live),
            _ => Err(anyhow::anyhow!("Invalid listing status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_display_roundtrip() {
        for category in Category::ALL {
            let parsed = Category::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_wire_name() {
        let json = serde_json::to_string(&Category::FarmPlant).unwrap();
        assert_eq!(json, "\"Farm & Plant\"");
    }

    #[test]
    fn test_status_wire_name() {
        let json = serde_json::to_string(&ListingStatus::Live).unwrap();
        assert_eq!(json, "\"live\"");
    }

    #[test]
    fn test_mileage_label_switches_for_farm_plant() {
        let mut listing = sample_listing();
        assert_eq!(listing.mileage_label(), "Mileage");
        listing.category = Category::FarmPlant;
        assert_eq!(listing.mileage_label(), "Hours");
    }

    fn sample_listing() -> Listing {
        Listing {
            id: ListingId::new(),
            owner_uid: SubjectId::new(),
            category: Category::Cars,
            title: "2017 Ford Fiesta".to_string(),
            make: "Ford".to_string(),
            model: "Fiesta".to_string(),
            year: Some(2017),
            mileage: Some(54000),
            fuel: Some(Fuel::Petrol),
            transmission: Some(Transmission::Manual),
            body: Some(Body::Hatchback),
            colour: Some("Red".to_string()),
            description: None,
            price: 8995.0,
            images: vec!["inmem://cover.jpg".to_string()],
            status: ListingStatus::Live,
            is_premium: false,
            premium_until: None,
            post_town: Some("London".to_string()),
            seats: None,
            has_tow_bar: None,
            has_warranty: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
