#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod contexts;
pub mod errors;
pub mod events;
pub mod state;
pub mod utils;

use contexts::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod dataset_registry {
    use super::*;

    // ============================================
    // REGISTRY & REPUTATION SETUP
    // ============================================

    /// Create the per-admin registry singleton (once)
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        contexts::initialize_registry(ctx)
    }

    /// Create a contributor's reputation record (self-registration, once)
    pub fn initialize_reputation(ctx: Context<InitializeReputation>) -> Result<()> {
        contexts::initialize_reputation(ctx)
    }

    /// Create the custodial reward vault for a mint (admin only, once)
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        contexts::initialize_vault(ctx)
    }

    // ============================================
    // DATASET REGISTRY
    // ============================================

    /// Register a content-addressed dataset upload
    #[allow(clippy::too_many_arguments)]
    pub fn create_dataset(
        ctx: Context<CreateDataset>,
        content_hash: [u8; 32],
        ai_metadata: Vec<u8>,
        file_name: Vec<u8>,
        file_size: u64,
        data_uri: [u8; 256],
        column_count: u64,
        row_count: u64,
        quality_score: u8,
    ) -> Result<()> {
        contexts::create_dataset(
            ctx,
            content_hash,
            ai_metadata,
            file_name,
            file_size,
            data_uri,
            column_count,
            row_count,
            quality_score,
        )
    }

    /// Deactivate or reactivate a dataset (admin only)
    pub fn set_dataset_status(ctx: Context<SetDatasetStatus>, is_active: bool) -> Result<()> {
        contexts::set_dataset_status(ctx, is_active)
    }

    // ============================================
    // REPUTATION UPDATES (ADMIN-ATTESTED)
    // ============================================

    pub fn update_reputation_upload(
        ctx: Context<UpdateReputationUpload>,
        quality_score: u8,
    ) -> Result<()> {
        contexts::update_reputation_upload(ctx, quality_score)
    }

    pub fn update_reputation_download(ctx: Context<UpdateReputationDownload>) -> Result<()> {
        contexts::update_reputation_download(ctx)
    }

    pub fn update_reputation_citation(ctx: Context<UpdateReputationCitation>) -> Result<()> {
        contexts::update_reputation_citation(ctx)
    }

    pub fn update_reputation_review(ctx: Context<UpdateReputationReview>) -> Result<()> {
        contexts::update_reputation_review(ctx)
    }

    pub fn update_reputation_activity(ctx: Context<UpdateReputationActivity>) -> Result<()> {
        contexts::update_reputation_activity(ctx)
    }

    // ============================================
    // TOKEN REDEMPTION
    // ============================================

    /// Convert the signer's unclaimed point balance into tokens paid out
    /// from the reward vault under the vault authority's PDA signature
    pub fn redeem_points(ctx: Context<RedeemPoints>) -> Result<()> {
        contexts::redeem_points(ctx)
    }
}
