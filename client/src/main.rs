//! Headless entry point: restores the persisted session and loads the first
//! page of public campaigns, logging what it finds.

use crowdfund_client::app::AppContext;
use crowdfund_client::config::ClientConfig;
use crowdfund_client::logging;
use shared::CampaignQuery;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env();
    let _log_guard = logging::init(&config.log);

    let context = AppContext::new(&config)?;

    if context.auth.restore() {
        context.auth.fetch_profile().await;
        if let Some(profile) = context.auth.snapshot().data.profile {
            tracing::info!(email = %profile.email, role = ?profile.role, "Signed in");
        }
    }

    context.campaigns.fetch_categories().await;
    context.campaigns.fetch_public(CampaignQuery::new(0, 10)).await;

    let snapshot = context.campaigns.snapshot();
    if let Some(error) = snapshot.error {
        tracing::error!(error = %error, "Could not load campaigns");
        return Ok(());
    }

    tracing::info!(
        categories = snapshot.data.categories.len(),
        total = snapshot.data.public.page.total_elements,
        "Loaded public campaigns"
    );
    for campaign in &snapshot.data.public.items {
        tracing::info!(
            id = campaign.id,
            title = %campaign.title,
            raised = campaign.raised_amount,
            goal = campaign.goal_amount,
            "Campaign"
        );
    }

    Ok(())
}
