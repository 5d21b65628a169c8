//! Repositories over the scene document.

pub mod campaign_repo;
pub mod scene_repo;

pub use campaign_repo::CampaignRepo;
pub use scene_repo::SceneRepo;
