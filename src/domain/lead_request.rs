//! Lead request lifecycle and form vocabulary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DomainError;

pub const LEAD_AREA_TYPES: [&str; 1] = ["Market"];

pub const STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Draft,
    Submitted,
    Approved,
    VisibleInSalesforce,
    Rejected,
    Completed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::Draft,
        LeadStatus::Submitted,
        LeadStatus::Approved,
        LeadStatus::VisibleInSalesforce,
        LeadStatus::Rejected,
        LeadStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Draft => "draft",
            LeadStatus::Submitted => "submitted",
            LeadStatus::Approved => "approved",
            LeadStatus::VisibleInSalesforce => "visible_in_salesforce",
            LeadStatus::Rejected => "rejected",
            LeadStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown status: {}", s)))
    }
}

/// Body of the new lead request form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewLeadRequestForm {
    #[serde(default)]
    pub lead_request_type: String,
    #[serde(default)]
    pub lead_area_type: String,
    #[serde(default)]
    pub dealer_code: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub lead_area_requested: String,
    #[serde(default)]
    pub date_needed_by: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub request_type_id: Option<i32>,
}

impl NewLeadRequestForm {
    /// Checks required fields and vocabularies, trimming values in place.
    pub fn validate(&mut self) -> Result<(), DomainError> {
        for field in [
            &mut self.lead_request_type,
            &mut self.lead_area_type,
            &mut self.state,
            &mut self.lead_area_requested,
            &mut self.date_needed_by,
            &mut self.notes,
        ] {
            *field = field.trim().to_string();
            if field.is_empty() {
                return Err(DomainError::Validation(
                    "Please fill in all required fields.".to_string(),
                ));
            }
        }

        self.dealer_code = self
            .dealer_code
            .take()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        if !LEAD_AREA_TYPES.contains(&self.lead_area_type.as_str()) {
            return Err(DomainError::Validation(format!(
                "Unknown lead area type: {}",
                self.lead_area_type
            )));
        }

        if !STATES.contains(&self.state.as_str()) {
            return Err(DomainError::Validation(format!(
                "Unknown state: {}",
                self.state
            )));
        }

        NaiveDate::parse_from_str(&self.date_needed_by, "%Y-%m-%d").map_err(|_| {
            DomainError::Validation(format!(
                "Date needed by must be a date (YYYY-MM-DD), got {}",
                self.date_needed_by
            ))
        })?;

        Ok(())
    }
}
