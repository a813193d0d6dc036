use anchor_lang::prelude::*;

use crate::errors::DatasetRegistryError;

/// Seed prefix for Reputation PDAs
pub const REPUTATION_SEED: &[u8] = b"reputation";

/// Fixed per-event score weights
pub const DOWNLOAD_WEIGHT: u64 = 2;
pub const CITATION_WEIGHT: u64 = 15;

/// Tiered upload rewards by quality score.
/// quality < 50 earns the base reward, 50..=90 the mid tier,
/// and anything above 90 the top tier.
pub const UPLOAD_TIER_1_THRESHOLD: u8 = 50;
pub const UPLOAD_TIER_2_THRESHOLD: u8 = 90;
pub const UPLOAD_TIER_1_REWARD: u64 = 20;
pub const UPLOAD_TIER_2_REWARD: u64 = 35;
pub const UPLOAD_TIER_3_REWARD: u64 = 300;

/// Review and community-activity rewards
pub const REVIEW_REWARD: u64 = 25;
pub const COMMUNITY_REWARD: u32 = 5;
/// Maximum community points a contributor can earn per activity day
pub const DAILY_ACTIVITY_CAP: u32 = 50;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Per-contributor activity ledger and derived reputation score.
/// PDA seeds: ["reputation", contributor]
///
/// `reputation_score` is recomputed from the accumulated counters after
/// every update, so it never decreases. `claimed_points` tracks how much
/// of the earned point pools has already been redeemed for tokens and can
/// never exceed them.
#[account]
#[derive(InitSpace)]
pub struct Reputation {
    pub contributor: Pubkey,
    pub total_uploads: u32,
    /// Datasets registered through `create_dataset`
    pub dataset_count: u32,
    /// Sum of quality scores across all uploads
    pub total_quality_score: u64,
    pub total_downloads: u64,
    pub total_citations: u32,
    pub total_reviews: u64,
    /// Derived trust metric, monotone non-decreasing
    pub reputation_score: u32,
    pub last_activity_timestamp: i64,
    /// Community points earned within the current activity day
    pub daily_activity_points: u32,

    // Point pools backing token redemption
    pub total_upload_points: u64,
    pub total_review_points: u64,
    pub total_activity_points: u64,
    /// Portion of the earned pools already redeemed
    pub claimed_points: u64,

    pub bump: u8,
}

impl Reputation {
    /// Upload points for a given quality score
    pub fn upload_reward(quality_score: u8) -> u64 {
        if quality_score > UPLOAD_TIER_2_THRESHOLD {
            UPLOAD_TIER_3_REWARD
        } else if quality_score >= UPLOAD_TIER_1_THRESHOLD {
            UPLOAD_TIER_2_REWARD
        } else {
            UPLOAD_TIER_1_REWARD
        }
    }

    pub fn record_upload(&mut self, quality_score: u8) -> Result<()> {
        self.total_uploads = self
            .total_uploads
            .checked_add(1)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;
        self.total_quality_score = self
            .total_quality_score
            .checked_add(quality_score as u64)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;
        self.total_upload_points = self
            .total_upload_points
            .checked_add(Self::upload_reward(quality_score))
            .ok_or(DatasetRegistryError::NumericalOverflow)?;
        self.recompute_score()
    }

    pub fn record_download(&mut self) -> Result<()> {
        self.total_downloads = self
            .total_downloads
            .checked_add(1)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;
        self.recompute_score()
    }

    pub fn record_citation(&mut self) -> Result<()> {
        self.total_citations = self
            .total_citations
            .checked_add(1)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;
        self.recompute_score()
    }

    pub fn record_review(&mut self) -> Result<()> {
        self.total_reviews = self
            .total_reviews
            .checked_add(1)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;
        self.total_review_points = self
            .total_review_points
            .checked_add(REVIEW_REWARD)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;
        self.recompute_score()
    }

    /// Award community points for activity at `now`, capped per activity
    /// day (`now / 86_400`). Returns the points actually granted.
    pub fn record_activity(&mut self, now: i64) -> Result<u32> {
        let current_day = now / SECONDS_PER_DAY;
        let last_day = self.last_activity_timestamp / SECONDS_PER_DAY;
        if current_day > last_day {
            self.daily_activity_points = 0;
        }
        self.last_activity_timestamp = now;

        let headroom = DAILY_ACTIVITY_CAP.saturating_sub(self.daily_activity_points);
        let granted = COMMUNITY_REWARD.min(headroom);
        if granted > 0 {
            self.daily_activity_points = self
                .daily_activity_points
                .checked_add(granted)
                .ok_or(DatasetRegistryError::NumericalOverflow)?;
            self.total_activity_points = self
                .total_activity_points
                .checked_add(granted as u64)
                .ok_or(DatasetRegistryError::NumericalOverflow)?;
        }
        self.recompute_score()?;
        Ok(granted)
    }

    /// Total redeemable points earned so far
    pub fn earned_points(&self) -> Result<u64> {
        Ok(self
            .total_upload_points
            .checked_add(self.total_review_points)
            .ok_or(DatasetRegistryError::NumericalOverflow)?
            .checked_add(self.total_activity_points)
            .ok_or(DatasetRegistryError::NumericalOverflow)?)
    }

    /// Earned points not yet redeemed
    pub fn unclaimed_points(&self) -> Result<u64> {
        Ok(self
            .earned_points()?
            .checked_sub(self.claimed_points)
            .ok_or(DatasetRegistryError::NumericalOverflow)?)
    }

    /// Recompute the derived score from the accumulated counters:
    /// point pools plus weighted download and citation counts.
    /// Every term is monotone, so the score never decreases; overflow
    /// aborts the instruction instead of wrapping or saturating.
    pub fn recompute_score(&mut self) -> Result<()> {
        let download_score = self
            .total_downloads
            .checked_mul(DOWNLOAD_WEIGHT)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;
        let citation_score = (self.total_citations as u64)
            .checked_mul(CITATION_WEIGHT)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;

        let total = self
            .earned_points()?
            .checked_add(download_score)
            .ok_or(DatasetRegistryError::NumericalOverflow)?
            .checked_add(citation_score)
            .ok_or(DatasetRegistryError::NumericalOverflow)?;

        self.reputation_score =
            u32::try_from(total).map_err(|_| DatasetRegistryError::NumericalOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Reputation {
        Reputation {
            contributor: Pubkey::default(),
            total_uploads: 0,
            dataset_count: 0,
            total_quality_score: 0,
            total_downloads: 0,
            total_citations: 0,
            total_reviews: 0,
            reputation_score: 0,
            last_activity_timestamp: 0,
            daily_activity_points: 0,
            total_upload_points: 0,
            total_review_points: 0,
            total_activity_points: 0,
            claimed_points: 0,
            bump: 0,
        }
    }

    #[test]
    fn upload_reward_tiers() {
        assert_eq!(Reputation::upload_reward(0), UPLOAD_TIER_1_REWARD);
        assert_eq!(Reputation::upload_reward(49), UPLOAD_TIER_1_REWARD);
        assert_eq!(Reputation::upload_reward(50), UPLOAD_TIER_2_REWARD);
        assert_eq!(Reputation::upload_reward(90), UPLOAD_TIER_2_REWARD);
        assert_eq!(Reputation::upload_reward(91), UPLOAD_TIER_3_REWARD);
        assert_eq!(Reputation::upload_reward(100), UPLOAD_TIER_3_REWARD);
    }

    #[test]
    fn higher_quality_upload_scores_strictly_more() {
        let mut high = fresh();
        high.record_upload(95).unwrap();
        let mut low = fresh();
        low.record_upload(60).unwrap();
        assert!(high.reputation_score > low.reputation_score);
    }

    #[test]
    fn downloads_accumulate_and_score_is_monotone() {
        let mut rep = fresh();
        let mut last_score = rep.reputation_score;
        for _ in 0..3 {
            rep.record_download().unwrap();
            assert!(rep.reputation_score >= last_score);
            last_score = rep.reputation_score;
        }
        assert_eq!(rep.total_downloads, 3);
        assert_eq!(rep.reputation_score as u64, 3 * DOWNLOAD_WEIGHT);
    }

    #[test]
    fn citations_use_citation_weight() {
        let mut rep = fresh();
        rep.record_citation().unwrap();
        assert_eq!(rep.total_citations, 1);
        assert_eq!(rep.reputation_score as u64, CITATION_WEIGHT);
    }

    #[test]
    fn score_matches_documented_formula() {
        let mut rep = fresh();
        rep.record_upload(95).unwrap();
        rep.record_review().unwrap();
        rep.record_download().unwrap();
        rep.record_citation().unwrap();
        let expected = UPLOAD_TIER_3_REWARD + REVIEW_REWARD + DOWNLOAD_WEIGHT + CITATION_WEIGHT;
        assert_eq!(rep.reputation_score as u64, expected);
    }

    #[test]
    fn redemption_claims_everything_once() {
        let mut rep = fresh();
        rep.record_upload(95).unwrap();
        rep.record_review().unwrap();

        let earned = rep.earned_points().unwrap();
        assert_eq!(earned, UPLOAD_TIER_3_REWARD + REVIEW_REWARD);
        assert_eq!(rep.unclaimed_points().unwrap(), earned);

        rep.claimed_points = earned;
        assert_eq!(rep.unclaimed_points().unwrap(), 0);

        // downloads raise the score but earn no redeemable points
        rep.record_download().unwrap();
        assert_eq!(rep.unclaimed_points().unwrap(), 0);

        rep.record_review().unwrap();
        assert_eq!(rep.unclaimed_points().unwrap(), REVIEW_REWARD);
    }

    #[test]
    fn daily_activity_caps_and_resets() {
        let mut rep = fresh();
        let day0 = 1_700_000_000;
        for _ in 0..20 {
            rep.record_activity(day0).unwrap();
        }
        assert_eq!(rep.daily_activity_points, DAILY_ACTIVITY_CAP);
        assert_eq!(rep.total_activity_points, DAILY_ACTIVITY_CAP as u64);

        let granted = rep.record_activity(day0 + SECONDS_PER_DAY).unwrap();
        assert_eq!(granted, COMMUNITY_REWARD);
        assert_eq!(rep.daily_activity_points, COMMUNITY_REWARD);
        assert_eq!(
            rep.total_activity_points,
            (DAILY_ACTIVITY_CAP + COMMUNITY_REWARD) as u64
        );
    }

    #[test]
    fn overflow_fails_closed() {
        let mut rep = fresh();
        rep.total_downloads = u64::MAX;
        assert_eq!(
            rep.record_download().unwrap_err(),
            DatasetRegistryError::NumericalOverflow.into()
        );

        let mut rep = fresh();
        rep.total_upload_points = u32::MAX as u64;
        rep.total_review_points = 1;
        assert_eq!(
            rep.recompute_score().unwrap_err(),
            DatasetRegistryError::NumericalOverflow.into()
        );
    }
}
