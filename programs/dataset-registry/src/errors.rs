use anchor_lang::prelude::*;

#[error_code]
pub enum DatasetRegistryError {
    // Upload validation
    #[msg("Invalid file size (must be greater than 0)")]
    InvalidFileSize,
    #[msg("File too large (max 100 MiB)")]
    FileTooLarge,
    #[msg("Too many columns (max 100)")]
    TooManyColumns,
    #[msg("Invalid quality score (must be 0-100)")]
    InvalidQualityScore,
    #[msg("File name too long (max 100 bytes)")]
    FileNameTooLong,
    #[msg("AI metadata too large (max 1500 bytes)")]
    MetadataTooLong,

    // Domain state
    #[msg("Dataset is inactive")]
    DatasetInactive,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Token account mint does not match the reward vault")]
    MintMismatch,

    // Arithmetic
    #[msg("Numerical overflow")]
    NumericalOverflow,

    // Redemption
    #[msg("No unclaimed points to redeem")]
    NothingToClaim,
}
