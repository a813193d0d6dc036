pub mod dataset;
pub mod registry;
pub mod reputation;

pub use dataset::{
    Dataset, DATASET_SEED, MAX_AI_METADATA_LEN, MAX_COLUMN_COUNT, MAX_FILE_NAME_LEN,
    MAX_FILE_SIZE, MAX_QUALITY_SCORE,
};
pub use registry::{Registry, REGISTRY_SEED};
pub use reputation::{
    Reputation, CITATION_WEIGHT, COMMUNITY_REWARD, DAILY_ACTIVITY_CAP, DOWNLOAD_WEIGHT,
    REPUTATION_SEED, REVIEW_REWARD, UPLOAD_TIER_1_REWARD, UPLOAD_TIER_1_THRESHOLD,
    UPLOAD_TIER_2_REWARD, UPLOAD_TIER_2_THRESHOLD, UPLOAD_TIER_3_REWARD,
};
