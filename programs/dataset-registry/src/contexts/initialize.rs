use anchor_lang::prelude::*;

use crate::state::{Registry, Reputation, REGISTRY_SEED, REPUTATION_SEED};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, Registry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Create the per-admin registry singleton. A second call for the same
/// admin fails at allocation because the PDA is already occupied.
pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.admin = ctx.accounts.admin.key();
    registry.total_datasets = 0;
    registry.total_downloads = 0;
    registry.bump = ctx.bumps.registry;

    msg!("Registry initialized for admin {}", registry.admin);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeReputation<'info> {
    #[account(
        init,
        payer = contributor,
        space = 8 + Reputation::INIT_SPACE,
        seeds = [REPUTATION_SEED, contributor.key().as_ref()],
        bump
    )]
    pub reputation: Account<'info, Reputation>,

    #[account(mut)]
    pub contributor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Self-registration: the contributor signs and pays for their own
/// reputation record, created with all counters zeroed.
pub fn initialize_reputation(ctx: Context<InitializeReputation>) -> Result<()> {
    let reputation = &mut ctx.accounts.reputation;

    reputation.contributor = ctx.accounts.contributor.key();
    reputation.total_uploads = 0;
    reputation.dataset_count = 0;
    reputation.total_quality_score = 0;
    reputation.total_downloads = 0;
    reputation.total_citations = 0;
    reputation.total_reviews = 0;
    reputation.reputation_score = 0;
    reputation.last_activity_timestamp = 0;
    reputation.daily_activity_points = 0;
    reputation.total_upload_points = 0;
    reputation.total_review_points = 0;
    reputation.total_activity_points = 0;
    reputation.claimed_points = 0;
    reputation.bump = ctx.bumps.reputation;

    Ok(())
}
