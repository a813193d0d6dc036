use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::errors::DatasetRegistryError;
use crate::events::PointsRedeemed;
use crate::state::{Registry, Reputation, REGISTRY_SEED, REPUTATION_SEED};

/// Seed for the data-less PDA that owns the reward vault. The program
/// signs vault transfers with this derivation; no private key exists.
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

/// Seed for the reward vault token account itself. Deriving the vault
/// means redemption verifies it by address instead of trusting a
/// client-supplied token account.
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump = registry.bump,
        has_one = admin @ DatasetRegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    pub reward_mint: Account<'info, Mint>,

    /// CHECK: Data-less signing authority, verified by derivation
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: AccountInfo<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [REWARD_VAULT_SEED],
        bump,
        token::mint = reward_mint,
        token::authority = vault_authority
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Create the custodial reward vault for a given mint, owned by the
/// vault authority PDA. Funding the vault is a plain token transfer.
pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
    msg!(
        "Reward vault initialized for mint {}",
        ctx.accounts.reward_mint.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct RedeemPoints<'info> {
    #[account(
        mut,
        seeds = [REPUTATION_SEED, contributor.key().as_ref()],
        bump = reputation.bump,
        constraint = reputation.contributor == contributor.key() @ DatasetRegistryError::Unauthorized
    )]
    pub reputation: Account<'info, Reputation>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED],
        bump
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Destination for redeemed tokens; must already exist and be owned
    /// by the redeeming contributor.
    #[account(
        mut,
        constraint = user_token_account.owner == contributor.key() @ DatasetRegistryError::Unauthorized,
        constraint = user_token_account.mint == reward_vault.mint @ DatasetRegistryError::MintMismatch
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// CHECK: Data-less signing authority, verified by derivation
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: AccountInfo<'info>,

    #[account(mut)]
    pub contributor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Pay out the contributor's unclaimed point balance 1:1 in token base
/// units. The ledger update and the CPI transfer land in one instruction,
/// so a partial redemption cannot be observed: either `claimed_points`
/// advances and the tokens move, or the whole instruction fails.
pub fn redeem_points(ctx: Context<RedeemPoints>) -> Result<()> {
    let reputation = &mut ctx.accounts.reputation;

    let earned = reputation.earned_points()?;
    let unclaimed = reputation.unclaimed_points()?;
    require!(unclaimed > 0, DatasetRegistryError::NothingToClaim);

    reputation.claimed_points = earned;

    let bump = ctx.bumps.vault_authority;
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &[bump]]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.reward_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(cpi_ctx, unclaimed)?;

    msg!("Redeemed {} points", unclaimed);

    emit!(PointsRedeemed {
        contributor: ctx.accounts.contributor.key(),
        amount: unclaimed,
        total_claimed: earned,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
