use anchor_lang::prelude::*;

/// Seed prefix for Registry PDAs
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Aggregate counters for all datasets registered under one admin.
/// PDA seeds: ["registry", admin]
///
/// Exactly one Registry exists per admin; re-running the initializer
/// fails at allocation because the derived address is already in use.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// Admin who created the registry
    pub admin: Pubkey,
    /// Total datasets ever registered (monotone, bumped on each upload)
    pub total_datasets: u64,
    /// Total recorded downloads across all datasets
    pub total_downloads: u64,
    pub bump: u8,
}
