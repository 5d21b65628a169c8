//! Repository for campaigns, the named scopes of a grouped store.

use scenebook_core::error::CoreError;
use scenebook_core::naming::normalize;
use scenebook_core::scene::{Campaign, Document, MAX_TEXT_LEN};

use crate::error::StoreError;
use crate::store::DocumentStore;

/// Campaign registry operations. Campaigns are created once and never deleted.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Whether a campaign with this (normalized) name exists.
    ///
    /// A flat store has no campaigns, so this is always `false` there.
    /// Storage failures are returned as errors, never read as "absent".
    pub async fn exists(store: &DocumentStore, name: &str) -> Result<bool, StoreError> {
        let document = store.load().await?;
        Ok(contains_campaign(&document, name))
    }

    /// Create an empty campaign under the normalized `name`.
    pub async fn create(store: &DocumentStore, name: &str) -> Result<Campaign, StoreError> {
        let campaign_name = validate_campaign_name(name)?;

        store
            .mutate(|document| {
                let Document::Grouped(campaigns) = document else {
                    return Err(CoreError::Validation(
                        "campaigns are not available in a flat store".to_string(),
                    )
                    .into());
                };
                if campaigns.contains_key(&campaign_name) {
                    return Err(CoreError::DuplicateScope(campaign_name.clone()).into());
                }
                campaigns.insert(campaign_name.clone(), Vec::new());
                Ok(())
            })
            .await?;

        tracing::info!(campaign = %campaign_name, "Campaign created");
        Ok(Campaign { campaign_name })
    }
}

/// Membership test against an already-loaded document.
pub(crate) fn contains_campaign(document: &Document, name: &str) -> bool {
    match document {
        Document::Grouped(campaigns) => campaigns.contains_key(&normalize(name)),
        Document::Flat(_) => false,
    }
}

/// Normalize a campaign name, rejecting blank or over-long names.
fn validate_campaign_name(name: &str) -> Result<String, CoreError> {
    let normalized = normalize(name);
    if normalized.is_empty() {
        return Err(CoreError::Validation(
            "campaign name must not be empty".to_string(),
        ));
    }
    if normalized.chars().count() as u64 > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "campaign name must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(normalized)
}
