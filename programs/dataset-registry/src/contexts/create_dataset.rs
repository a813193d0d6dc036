use anchor_lang::prelude::*;

use crate::errors::DatasetRegistryError;
use crate::events::{DatasetCreated, ReputationUpdated};
use crate::state::{Dataset, Registry, Reputation, DATASET_SEED, REGISTRY_SEED, REPUTATION_SEED};

#[derive(Accounts)]
#[instruction(content_hash: [u8; 32])]
pub struct CreateDataset<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.admin.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = contributor,
        space = 8 + Dataset::INIT_SPACE,
        seeds = [DATASET_SEED, contributor.key().as_ref(), content_hash.as_ref()],
        bump
    )]
    pub dataset: Account<'info, Dataset>,

    #[account(
        mut,
        seeds = [REPUTATION_SEED, contributor.key().as_ref()],
        bump = reputation.bump
    )]
    pub reputation: Account<'info, Reputation>,

    #[account(mut)]
    pub contributor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Register an upload. The dataset PDA embeds the content hash, so an
/// exact re-upload by the same contributor fails at allocation — that
/// collision is the duplicate check. Dataset creation, the registry
/// counter and the contributor's reputation all move in one instruction.
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
    Dataset::validate_upload(
        file_size,
        column_count,
        quality_score,
        file_name.len(),
        ai_metadata.len(),
    )?;

    let clock = Clock::get()?;

    let dataset = &mut ctx.accounts.dataset;
    dataset.contributor = ctx.accounts.contributor.key();
    dataset.content_hash = content_hash;
    dataset.ai_metadata = ai_metadata;
    dataset.file_name = file_name;
    dataset.file_size = file_size;
    dataset.data_uri = data_uri;
    dataset.column_count = column_count;
    dataset.row_count = row_count;
    dataset.quality_score = quality_score;
    dataset.upload_timestamp = clock.unix_timestamp;
    dataset.download_count = 0;
    dataset.is_active = true;
    dataset.bump = ctx.bumps.dataset;

    let registry = &mut ctx.accounts.registry;
    registry.total_datasets = registry
        .total_datasets
        .checked_add(1)
        .ok_or(DatasetRegistryError::NumericalOverflow)?;

    let reputation = &mut ctx.accounts.reputation;
    reputation.dataset_count = reputation
        .dataset_count
        .checked_add(1)
        .ok_or(DatasetRegistryError::NumericalOverflow)?;
    reputation.total_uploads = reputation
        .total_uploads
        .checked_add(1)
        .ok_or(DatasetRegistryError::NumericalOverflow)?;
    reputation.total_quality_score = reputation
        .total_quality_score
        .checked_add(quality_score as u64)
        .ok_or(DatasetRegistryError::NumericalOverflow)?;

    msg!(
        "Dataset registered: {} ({} bytes)",
        ctx.accounts.dataset.key(),
        file_size
    );

    emit!(DatasetCreated {
        dataset: ctx.accounts.dataset.key(),
        contributor: ctx.accounts.contributor.key(),
        content_hash,
        quality_score,
        timestamp: clock.unix_timestamp,
    });

    emit!(ReputationUpdated {
        contributor: ctx.accounts.contributor.key(),
        action: "upload".to_string(),
        reputation_score: ctx.accounts.reputation.reputation_score,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
