//! # Campaign Data Transfer Objects
//!
//! Campaigns raised by business users, and the categories they are filed under.

use serde::{Deserialize, Serialize};

/// Campaign lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Draft,
    PendingReview,
    Active,
    Rejected,
    Funded,
    Closed,
}

/// Crowdfunding campaign
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    pub goal_amount: f64,
    #[serde(default)]
    pub raised_amount: f64,
    #[serde(default)]
    pub minimum_investment: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    pub status: CampaignStatus,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub business_profile_id: Option<i64>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// Create a campaign; the owning business profile travels in `X-Business-Profile-Id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    pub goal_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_investment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Partial campaign update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_investment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Filters for the public campaign listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignQuery {
    pub page: u32,
    pub size: u32,
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

impl CampaignQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Default::default()
        }
    }

    /// Query pairs; absent filters are left out entirely
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(category_id) = self.category_id {
            query.push(("categoryId".to_string(), category_id.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query.push(("search".to_string(), search.trim().to_string()));
        }
        query
    }
}

/// Reason attached to a rejection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    pub reason: String,
}

/// Campaign category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create or replace a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_query_skips_empty_filters() {
        let mut query = CampaignQuery::new(0, 12);
        query.search = Some("   ".to_string());

        assert_eq!(query.to_query().len(), 2);
    }

    #[test]
    fn test_campaign_query_includes_filters() {
        let query = CampaignQuery {
            page: 1,
            size: 20,
            category_id: Some(4),
            search: Some(" solar ".to_string()),
        };

        let pairs = query.to_query();
        assert!(pairs.contains(&("categoryId".to_string(), "4".to_string())));
        assert!(pairs.contains(&("search".to_string(), "solar".to_string())));
    }

    #[test]
    fn test_campaign_defaults_for_missing_fields() {
        let json = r#"{"id":7,"title":"Solar farm","goalAmount":50000.0,"status":"PENDING_REVIEW"}"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();

        assert_eq!(campaign.status, CampaignStatus::PendingReview);
        assert_eq!(campaign.raised_amount, 0.0);
        assert!(campaign.photo_urls.is_empty());
    }
}
