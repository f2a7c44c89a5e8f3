use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Lifecycle stage of a portfolio brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    Ideation,
    Manufacturing,
    Revenue,
}

impl BrandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandStatus::Ideation => "ideation",
            BrandStatus::Manufacturing => "manufacturing",
            BrandStatus::Revenue => "revenue",
        }
    }
}

impl fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ideation" => Ok(BrandStatus::Ideation),
            "manufacturing" => Ok(BrandStatus::Manufacturing),
            "revenue" => Ok(BrandStatus::Revenue),
            other => Err(CatalogError::Validation(format!(
                "unknown brand status '{other}'"
            ))),
        }
    }
}

/// A portfolio brand. `logo` and `hero_image` hold media-root-relative paths
/// (e.g. `brands/logos/lumina.png`); `None` means no asset is attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: Option<i64>,
    pub name: String,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub one_liner: String,
    pub description: String,
    pub launch_date: Option<NaiveDate>,
    pub status: BrandStatus,
    pub website_url: Option<String>,
    pub sort_order: u32,
}

/// A studio founder. `photo` holds a media-root-relative path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Founder {
    pub id: Option<i64>,
    pub name: String,
    pub role: String,
    pub photo: Option<String>,
    pub bio: String,
    pub vision_quote: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub sort_order: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            BrandStatus::Ideation,
            BrandStatus::Manufacturing,
            BrandStatus::Revenue,
        ] {
            assert_eq!(status.as_str().parse::<BrandStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_value() {
        assert!("launched".parse::<BrandStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BrandStatus::Manufacturing).unwrap();
        assert_eq!(json, "\"manufacturing\"");
    }
}
