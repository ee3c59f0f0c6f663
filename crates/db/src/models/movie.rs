//! Movie entity model and DTOs.

use casting_core::error::CoreError;
use casting_core::release_date;
use casting_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A movie row from the `movies` table.
///
/// `release_date` serializes as `DD/MM/YYYY`; an unset `production_house`
/// or `ott_partner` serializes as `null`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    #[serde(serialize_with = "release_date::serialize")]
    pub release_date: NaiveDate,
    pub production_house: Option<String>,
    pub ott_partner: Option<String>,
    pub identifier: String,
}

/// Request body for creating a movie. `release_date` is `DD/MM/YYYY`;
/// `production_house` and `ott_partner` may be `null`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub release_date: String,
    #[validate(length(max = 50, message = "production_house is limited to 50 characters"))]
    pub production_house: Option<String>,
    #[validate(length(max = 20, message = "ott_partner is limited to 20 characters"))]
    pub ott_partner: Option<String>,
}

/// Request body for a partial movie update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub release_date: Option<String>,
    #[validate(length(max = 50, message = "production_house is limited to 50 characters"))]
    pub production_house: Option<String>,
    #[validate(length(max = 20, message = "ott_partner is limited to 20 characters"))]
    pub ott_partner: Option<String>,
}

/// Parsed column values for a new `movies` row.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub release_date: NaiveDate,
    pub production_house: Option<String>,
    pub ott_partner: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub production_house: Option<String>,
    pub ott_partner: Option<String>,
}

impl TryFrom<CreateMovie> for NewMovie {
    type Error = CoreError;

    fn try_from(input: CreateMovie) -> Result<Self, Self::Error> {
        Ok(Self {
            release_date: release_date::parse(&input.release_date)?,
            title: input.title,
            production_house: input.production_house,
            ott_partner: input.ott_partner,
        })
    }
}

impl TryFrom<UpdateMovie> for MovieChanges {
    type Error = CoreError;

    fn try_from(input: UpdateMovie) -> Result<Self, Self::Error> {
        let release_date = input
            .release_date
            .as_deref()
            .map(release_date::parse)
            .transpose()?;

        Ok(Self {
            title: input.title,
            release_date,
            production_house: input.production_house,
            ott_partner: input.ott_partner,
        })
    }
}
