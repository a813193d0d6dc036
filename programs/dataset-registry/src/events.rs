use anchor_lang::prelude::*;

#[event]
pub struct DatasetCreated {
    pub dataset: Pubkey,
    pub contributor: Pubkey,
    pub content_hash: [u8; 32],
    pub quality_score: u8,
    pub timestamp: i64,
}

/// Emitted after every reputation-mutating update.
/// `action` is one of "upload", "download", "citation", "review", "activity".
#[event]
pub struct ReputationUpdated {
    pub contributor: Pubkey,
    pub action: String,
    pub reputation_score: u32,
    pub timestamp: i64,
}

#[event]
pub struct DatasetStatusChanged {
    pub dataset: Pubkey,
    pub admin: Pubkey,
    pub is_active: bool,
    pub timestamp: i64,
}

#[event]
pub struct PointsRedeemed {
    pub contributor: Pubkey,
    /// Token base units transferred from the reward vault
    pub amount: u64,
    /// Lifetime claimed total after this redemption
    pub total_claimed: u64,
    pub timestamp: i64,
}
