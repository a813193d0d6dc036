use anchor_lang::prelude::*;

use crate::errors::DatasetRegistryError;

/// Seed prefix for Dataset PDAs
pub const DATASET_SEED: &[u8] = b"dataset";

/// Upload limits enforced before any state mutation
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
pub const MAX_COLUMN_COUNT: u64 = 100;
pub const MAX_QUALITY_SCORE: u8 = 100;
pub const MAX_FILE_NAME_LEN: usize = 100;
pub const MAX_AI_METADATA_LEN: usize = 1500;

/// One content-addressed entry per upload.
/// PDA seeds: ["dataset", contributor, content_hash]
///
/// The content hash is part of the address, so a contributor re-uploading
/// identical bytes collides at allocation time ("already in use") instead
/// of needing an explicit duplicate lookup. Datasets are never deleted;
/// the admin can only flip `is_active`.
#[account]
#[derive(InitSpace)]
pub struct Dataset {
    pub contributor: Pubkey,
    /// Digest of the uploaded bytes, computed client-side (see `utils::hash_content`)
    pub content_hash: [u8; 32],
    /// Opaque AI-analysis blob, interpreted off-chain only
    #[max_len(1500)]
    pub ai_metadata: Vec<u8>,
    #[max_len(100)]
    pub file_name: Vec<u8>,
    pub file_size: u64,
    /// Fixed-width padded storage URI
    pub data_uri: [u8; 256],
    pub column_count: u64,
    pub row_count: u64,
    pub quality_score: u8,
    pub upload_timestamp: i64,
    /// Bumped by download-reputation updates
    pub download_count: u32,
    pub is_active: bool,
    pub bump: u8,
}

impl Dataset {
    /// Validate upload parameters. Check order is part of the contract:
    /// the first failed check is the error the caller sees.
    pub fn validate_upload(
        file_size: u64,
        column_count: u64,
        quality_score: u8,
        file_name_len: usize,
        ai_metadata_len: usize,
    ) -> Result<()> {
        require!(file_size > 0, DatasetRegistryError::InvalidFileSize);
        require!(file_size <= MAX_FILE_SIZE, DatasetRegistryError::FileTooLarge);
        require!(
            column_count <= MAX_COLUMN_COUNT,
            DatasetRegistryError::TooManyColumns
        );
        require!(
            quality_score <= MAX_QUALITY_SCORE,
            DatasetRegistryError::InvalidQualityScore
        );
        require!(
            file_name_len <= MAX_FILE_NAME_LEN,
            DatasetRegistryError::FileNameTooLong
        );
        require!(
            ai_metadata_len <= MAX_AI_METADATA_LEN,
            DatasetRegistryError::MetadataTooLong
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(file_size: u64, column_count: u64, quality_score: u8) -> Result<()> {
        Dataset::validate_upload(file_size, column_count, quality_score, 10, 100)
    }

    #[test]
    fn accepts_file_size_boundaries() {
        assert!(validate(1, 0, 0).is_ok());
        assert!(validate(99 * 1024 * 1024, 0, 0).is_ok());
        assert!(validate(MAX_FILE_SIZE, 0, 0).is_ok());
    }

    #[test]
    fn rejects_empty_and_oversized_files() {
        assert_eq!(
            validate(0, 0, 0).unwrap_err(),
            DatasetRegistryError::InvalidFileSize.into()
        );
        assert_eq!(
            validate(MAX_FILE_SIZE + 1, 0, 0).unwrap_err(),
            DatasetRegistryError::FileTooLarge.into()
        );
        assert_eq!(
            validate(101 * 1024 * 1024, 0, 0).unwrap_err(),
            DatasetRegistryError::FileTooLarge.into()
        );
    }

    #[test]
    fn quality_score_range() {
        assert!(validate(1, 0, 0).is_ok());
        assert!(validate(1, 0, 100).is_ok());
        assert_eq!(
            validate(1, 0, 101).unwrap_err(),
            DatasetRegistryError::InvalidQualityScore.into()
        );
    }

    #[test]
    fn column_count_limit() {
        assert!(validate(1, 100, 0).is_ok());
        assert_eq!(
            validate(1, 101, 0).unwrap_err(),
            DatasetRegistryError::TooManyColumns.into()
        );
    }

    #[test]
    fn name_and_metadata_limits() {
        assert!(Dataset::validate_upload(1, 0, 0, MAX_FILE_NAME_LEN, MAX_AI_METADATA_LEN).is_ok());
        assert_eq!(
            Dataset::validate_upload(1, 0, 0, MAX_FILE_NAME_LEN + 1, 0).unwrap_err(),
            DatasetRegistryError::FileNameTooLong.into()
        );
        assert_eq!(
            Dataset::validate_upload(1, 0, 0, 0, MAX_AI_METADATA_LEN + 1).unwrap_err(),
            DatasetRegistryError::MetadataTooLong.into()
        );
    }

    #[test]
    fn first_failed_check_wins() {
        // file size checks run before column and quality checks
        assert_eq!(
            validate(0, 101, 200).unwrap_err(),
            DatasetRegistryError::InvalidFileSize.into()
        );
        assert_eq!(
            validate(MAX_FILE_SIZE + 1, 101, 200).unwrap_err(),
            DatasetRegistryError::FileTooLarge.into()
        );
        // column check runs before quality check
        assert_eq!(
            validate(1, 101, 200).unwrap_err(),
            DatasetRegistryError::TooManyColumns.into()
        );
    }
}
