use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domains::listings::models::Category;

/// Quick filter - one of a fixed set of mutually-exclusive secondary
/// predicates narrowing the feed beyond category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuickFilter {
    /// Priced at £1,500 or less.
    Bargains,
    /// Seven or more seats.
    #[serde(rename = "seats7")]
    SevenSeats,
    /// Battery-electric vehicles.
    Electric,
    /// Fitted tow bar.
    #[serde(rename = "tow")]
    TowBar,
    /// Seller includes a warranty.
    Warranty,
    /// Within 30 miles of the viewer.
    // TODO: needs a geospatial query the document store does not expose yet
    #[serde(rename = "within30")]
    Within30Miles,
}

impl std::fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuickFilter::Bargains => write!(f, "bargains"),
            QuickFilter::SevenSeats => write!(f, "seats7"),
            QuickFilter::Electric => write!(f, "electric"),
            QuickFilter::TowBar => write!(f, "tow"),
            QuickFilter::Warranty => write!(f, "warranty"),
            QuickFilter::Within30Miles => write!(f, "within30"),
        }
    }
}

impl std::str::FromStr for QuickFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bargains" => Ok(QuickFilter::Bargains),
            "seats7" => Ok(QuickFilter::SevenSeats),
            "electric" => Ok(QuickFilter::Electric),
            "tow" => Ok(QuickFilter::TowBar),
            "warranty" => Ok(QuickFilter::Warranty),
            "within30" => Ok(QuickFilter::Within30Miles),
            _ => Err(anyhow::anyhow!("Invalid quick filter: {}", s)),
        }
    }
}

/// Active feed filters: zero or one category equality predicate plus zero
/// or one quick-filter predicate. Results are always ordered by creation
/// time descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedFilters {
    pub category: Option<Category>,
    pub quick: Option<QuickFilter>,
}

impl FeedFilters {
    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            quick: None,
        }
    }

    pub fn quick(quick: QuickFilter) -> Self {
        Self {
            category: None,
            quick: Some(quick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_quick_filter_key_roundtrip() {
        for key in ["bargains", "seats7", "electric", "tow", "warranty", "within30"] {
            let filter = QuickFilter::from_str(key).unwrap();
            assert_eq!(filter.to_string(), key);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(QuickFilter::from_str("cheap").is_err());
    }
}
