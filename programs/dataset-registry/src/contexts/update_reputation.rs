use anchor_lang::prelude::*;

use crate::errors::DatasetRegistryError;
use crate::events::ReputationUpdated;
use crate::state::{
    Dataset, Registry, Reputation, DATASET_SEED, MAX_QUALITY_SCORE, REGISTRY_SEED, REPUTATION_SEED,
};

// Reputation updates are admin-attested: the registry admin signs to
// confirm the activity actually happened, the contributor is only a
// referenced wallet. Self-attested updates would let a contributor
// inflate their own score.

#[derive(Accounts)]
pub struct UpdateReputationUpload<'info> {
    #[account(
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump = registry.bump,
        has_one = admin @ DatasetRegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [REPUTATION_SEED, contributor.key().as_ref()],
        bump = reputation.bump
    )]
    pub reputation: Account<'info, Reputation>,

    /// CHECK: Contributor wallet whose reputation record is credited
    pub contributor: AccountInfo<'info>,

    pub admin: Signer<'info>,
}

pub fn update_reputation_upload(
    ctx: Context<UpdateReputationUpload>,
    quality_score: u8,
) -> Result<()> {
    require!(
        quality_score <= MAX_QUALITY_SCORE,
        DatasetRegistryError::InvalidQualityScore
    );

    let reputation = &mut ctx.accounts.reputation;
    reputation.record_upload(quality_score)?;

    emit!(ReputationUpdated {
        contributor: ctx.accounts.contributor.key(),
        action: "upload".to_string(),
        reputation_score: ctx.accounts.reputation.reputation_score,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateReputationDownload<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump = registry.bump,
        has_one = admin @ DatasetRegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [REPUTATION_SEED, contributor.key().as_ref()],
        bump = reputation.bump
    )]
    pub reputation: Account<'info, Reputation>,

    /// The dataset that was downloaded; must belong to the credited
    /// contributor and still be active.
    #[account(
        mut,
        seeds = [DATASET_SEED, dataset.contributor.as_ref(), dataset.content_hash.as_ref()],
        bump = dataset.bump,
        constraint = dataset.contributor == reputation.contributor @ DatasetRegistryError::Unauthorized
    )]
    pub dataset: Account<'info, Dataset>,

    /// CHECK: Contributor wallet whose reputation record is credited
    pub contributor: AccountInfo<'info>,

    pub admin: Signer<'info>,
}

pub fn update_reputation_download(ctx: Context<UpdateReputationDownload>) -> Result<()> {
    require!(
        ctx.accounts.dataset.is_active,
        DatasetRegistryError::DatasetInactive
    );

    let dataset = &mut ctx.accounts.dataset;
    dataset.download_count = dataset
        .download_count
        .checked_add(1)
        .ok_or(DatasetRegistryError::NumericalOverflow)?;

    let registry = &mut ctx.accounts.registry;
    registry.total_downloads = registry
        .total_downloads
        .checked_add(1)
        .ok_or(DatasetRegistryError::NumericalOverflow)?;

    let reputation = &mut ctx.accounts.reputation;
    reputation.record_download()?;

    emit!(ReputationUpdated {
        contributor: ctx.accounts.contributor.key(),
        action: "download".to_string(),
        reputation_score: ctx.accounts.reputation.reputation_score,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateReputationCitation<'info> {
    #[account(
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump = registry.bump,
        has_one = admin @ DatasetRegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [REPUTATION_SEED, contributor.key().as_ref()],
        bump = reputation.bump
    )]
    pub reputation: Account<'info, Reputation>,

    /// The cited dataset; existence at its derived address is the proof
    /// the citation refers to something real.
    #[account(
        seeds = [DATASET_SEED, dataset.contributor.as_ref(), dataset.content_hash.as_ref()],
        bump = dataset.bump,
        constraint = dataset.contributor == reputation.contributor @ DatasetRegistryError::Unauthorized
    )]
    pub dataset: Account<'info, Dataset>,

    /// CHECK: Contributor wallet whose reputation record is credited
    pub contributor: AccountInfo<'info>,

    pub admin: Signer<'info>,
}

pub fn update_reputation_citation(ctx: Context<UpdateReputationCitation>) -> Result<()> {
    let reputation = &mut ctx.accounts.reputation;
    reputation.record_citation()?;

    emit!(ReputationUpdated {
        contributor: ctx.accounts.contributor.key(),
        action: "citation".to_string(),
        reputation_score: ctx.accounts.reputation.reputation_score,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateReputationReview<'info> {
    #[account(
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump = registry.bump,
        has_one = admin @ DatasetRegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [REPUTATION_SEED, contributor.key().as_ref()],
        bump = reputation.bump
    )]
    pub reputation: Account<'info, Reputation>,

    /// CHECK: Contributor wallet whose reputation record is credited
    pub contributor: AccountInfo<'info>,

    pub admin: Signer<'info>,
}

pub fn update_reputation_review(ctx: Context<UpdateReputationReview>) -> Result<()> {
    let reputation = &mut ctx.accounts.reputation;
    reputation.record_review()?;

    emit!(ReputationUpdated {
        contributor: ctx.accounts.contributor.key(),
        action: "review".to_string(),
        reputation_score: ctx.accounts.reputation.reputation_score,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateReputationActivity<'info> {
    #[account(
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump = registry.bump,
        has_one = admin @ DatasetRegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [REPUTATION_SEED, contributor.key().as_ref()],
        bump = reputation.bump
    )]
    pub reputation: Account<'info, Reputation>,

    /// CHECK: Contributor wallet whose reputation record is credited
    pub contributor: AccountInfo<'info>,

    pub admin: Signer<'info>,
}

pub fn update_reputation_activity(ctx: Context<UpdateReputationActivity>) -> Result<()> {
    let clock = Clock::get()?;

    let reputation = &mut ctx.accounts.reputation;
    let granted = reputation.record_activity(clock.unix_timestamp)?;

    msg!("Activity points granted: {}", granted);

    emit!(ReputationUpdated {
        contributor: ctx.accounts.contributor.key(),
        action: "activity".to_string(),
        reputation_score: ctx.accounts.reputation.reputation_score,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
