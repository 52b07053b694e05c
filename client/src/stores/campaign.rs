//! # Campaign Container
//!
//! Public discovery listing, the business owner's own campaigns, the campaign
//! currently open in a detail view, plus categories and business profiles
//! needed by the create form.

use std::sync::Arc;

use shared::{
    BusinessProfile, Campaign, CampaignQuery, Category, CreateBusinessProfileRequest,
    CreateCampaignRequest, PageRequest, UpdateCampaignRequest,
};

use super::{patch_by_id, prepend, remove_by_id, Listing, Snapshot, StateCell};
use crate::core::error::Result;
use crate::services::api::{campaign, category, profile, ApiClient, FileUpload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignState {
    pub public: Listing<Campaign>,
    pub public_query: CampaignQuery,
    pub mine: Listing<Campaign>,
    pub current: Option<Campaign>,
    pub categories: Vec<Category>,
    pub business_profiles: Vec<BusinessProfile>,
}

impl CampaignState {
    /// Reflect a server-confirmed campaign wherever it is shown.
    fn apply(&mut self, updated: Campaign) {
        patch_by_id(&mut self.mine.items, updated.clone());
        patch_by_id(&mut self.public.items, updated.clone());
        if self.current.as_ref().is_some_and(|c| c.id == updated.id) {
            self.current = Some(updated);
        }
    }
}

pub struct CampaignStore {
    client: Arc<ApiClient>,
    state: StateCell<CampaignState>,
}

impl CampaignStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: StateCell::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<CampaignState> {
        self.state.snapshot()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub async fn fetch_public(&self, query: CampaignQuery) {
        let _ = self
            .state
            .run(
                "fetch_public_campaigns",
                "Failed to load campaigns",
                campaign::list_public(&self.client, &query),
                |s, page| {
                    s.public = Listing::from(page);
                    s.public_query = query.clone();
                },
            )
            .await;
    }

    pub async fn fetch_public_campaign(&self, id: i64) {
        let _ = self
            .state
            .run(
                "fetch_public_campaign",
                "Failed to load campaign",
                campaign::get_public(&self.client, id),
                |s, found| s.current = Some(found),
            )
            .await;
    }

    pub async fn fetch_mine(&self, page: PageRequest) {
        let _ = self
            .state
            .run(
                "fetch_my_campaigns",
                "Failed to load your campaigns",
                campaign::list_mine(&self.client, page),
                |s, page| s.mine = Listing::from(page),
            )
            .await;
    }

    pub async fn fetch_campaign(&self, id: i64) {
        let _ = self
            .state
            .run(
                "fetch_campaign",
                "Failed to load campaign",
                campaign::get(&self.client, id),
                |s, found| s.current = Some(found),
            )
            .await;
    }

    pub async fn fetch_categories(&self) {
        let _ = self
            .state
            .run(
                "fetch_categories",
                "Failed to load categories",
                category::list_public(&self.client),
                |s, categories| s.categories = categories,
            )
            .await;
    }

    pub async fn fetch_business_profiles(&self) {
        let _ = self
            .state
            .run(
                "fetch_business_profiles",
                "Failed to load business profiles",
                profile::list_business_profiles(&self.client),
                |s, profiles| s.business_profiles = profiles,
            )
            .await;
    }

    pub async fn create_business_profile(&self, request: CreateBusinessProfileRequest) {
        let _ = self
            .state
            .run(
                "create_business_profile",
                "Failed to create business profile",
                profile::create_business_profile(&self.client, &request),
                |s, created| prepend(&mut s.business_profiles, created),
            )
            .await;
    }

    /// Create a draft. Without an explicit profile id the first loaded business profile is used.
    pub async fn create_campaign(
        &self,
        request: CreateCampaignRequest,
        business_profile_id: Option<i64>,
    ) -> Result<Campaign> {
        let profile_id = business_profile_id
            .or_else(|| self.state.read(|s| s.business_profiles.first().map(|p| p.id)));
        self.state
            .run(
                "create_campaign",
                "Failed to create campaign",
                campaign::create(&self.client, &request, profile_id),
                |s, created: Campaign| {
                    prepend(&mut s.mine.items, created.clone());
                    s.current = Some(created.clone());
                    created
                },
            )
            .await
    }

    pub async fn update_campaign(&self, id: i64, request: UpdateCampaignRequest) {
        let _ = self
            .state
            .run(
                "update_campaign",
                "Failed to update campaign",
                campaign::update(&self.client, id, &request),
                |s, updated| s.apply(updated),
            )
            .await;
    }

    pub async fn submit_for_review(&self, id: i64) {
        let _ = self
            .state
            .run(
                "submit_campaign",
                "Failed to submit campaign for review",
                campaign::submit_for_review(&self.client, id),
                |s, updated| s.apply(updated),
            )
            .await;
    }

    pub async fn upload_cover_image(&self, id: i64, file: FileUpload) {
        let _ = self
            .state
            .run(
                "upload_cover_image",
                "Failed to upload cover image",
                campaign::upload_cover_image(&self.client, id, file),
                |s, updated| s.apply(updated),
            )
            .await;
    }

    pub async fn upload_photos(&self, id: i64, files: Vec<FileUpload>) {
        let _ = self
            .state
            .run(
                "upload_photos",
                "Failed to upload photos",
                campaign::upload_photos(&self.client, id, files),
                |s, updated| s.apply(updated),
            )
            .await;
    }

    pub async fn delete_campaign(&self, id: i64) {
        let _ = self
            .state
            .run(
                "delete_campaign",
                "Failed to delete campaign",
                campaign::delete(&self.client, id),
                |s, ()| {
                    remove_by_id(&mut s.mine.items, id);
                    if s.current.as_ref().is_some_and(|c| c.id == id) {
                        s.current = None;
                    }
                },
            )
            .await;
    }
}
