use anchor_lang::prelude::*;

use crate::errors::DatasetRegistryError;
use crate::events::DatasetStatusChanged;
use crate::state::{Dataset, Registry, DATASET_SEED, REGISTRY_SEED};

#[derive(Accounts)]
pub struct SetDatasetStatus<'info> {
    #[account(
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump = registry.bump,
        has_one = admin @ DatasetRegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [DATASET_SEED, dataset.contributor.as_ref(), dataset.content_hash.as_ref()],
        bump = dataset.bump
    )]
    pub dataset: Account<'info, Dataset>,

    pub admin: Signer<'info>,
}

/// Deactivate or reactivate a dataset (admin only). Datasets are never
/// deleted; inactive datasets stop earning download credit.
pub fn set_dataset_status(ctx: Context<SetDatasetStatus>, is_active: bool) -> Result<()> {
    let dataset = &mut ctx.accounts.dataset;
    dataset.is_active = is_active;

    msg!("Dataset {} active = {}", dataset.key(), is_active);

    emit!(DatasetStatusChanged {
        dataset: ctx.accounts.dataset.key(),
        admin: ctx.accounts.admin.key(),
        is_active,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
