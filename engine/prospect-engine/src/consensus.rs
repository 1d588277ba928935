use prospect_data::OutletRanking;

/// Averages outlet big boards into a single consensus rank
pub struct RankAggregator;

impl RankAggregator {
    /// Consensus rank for a prospect
    ///
    /// Mean of the outlets that reported a finite rank. `None` when the
    /// prospect has no ranking record or no outlet ranked them.
    pub fn consensus(ranking: Option<&OutletRanking>) -> Option<f64> {
        Self::mean(ranking?.ranks().map(|(_, rank)| rank))
    }

    /// Mean of the present, finite values; unrounded
    pub fn mean<I>(ranks: I) -> Option<f64>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let (sum, count) = ranks
            .into_iter()
            .flatten()
            .filter(|rank| rank.is_finite())
            .fold((0.0, 0usize), |(sum, count), rank| (sum + rank, count + 1));

        (count > 0).then(|| sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(ranks: [Option<f64>; 5]) -> OutletRanking {
        let [espn, sam_vecenie, kevin_oconnor, kyle_boone, gary_parrish] = ranks;
        OutletRanking {
            player_id: "1".into(),
            espn,
            sam_vecenie,
            kevin_oconnor,
            kyle_boone,
            gary_parrish,
        }
    }

    #[test]
    fn test_mean_of_present_outlets_only() {
        let ranks = ranking([Some(2.0), Some(4.0), None, Some(3.0), None]);
        assert_eq!(RankAggregator::consensus(Some(&ranks)), Some(3.0));
    }

    #[test]
    fn test_all_outlets_reporting() {
        let ranks = ranking([Some(8.0), Some(12.0), Some(6.0), Some(9.0), Some(10.0)]);
        assert_eq!(RankAggregator::consensus(Some(&ranks)), Some(9.0));
    }

    #[test]
    fn test_fractional_mean_is_not_rounded() {
        let ranks = ranking([Some(14.0), Some(11.0), Some(18.0), None, None]);
        let consensus = RankAggregator::consensus(Some(&ranks)).unwrap();
        assert!((consensus - 43.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_reported_ranks_is_undefined() {
        let ranks = ranking([None; 5]);
        assert_eq!(RankAggregator::consensus(Some(&ranks)), None);
    }

    #[test]
    fn test_missing_record_is_undefined() {
        assert_eq!(RankAggregator::consensus(None), None);
    }

    #[test]
    fn test_non_finite_values_are_excluded() {
        let ranks = ranking([Some(f64::NAN), Some(4.0), Some(f64::INFINITY), Some(6.0), None]);
        assert_eq!(RankAggregator::consensus(Some(&ranks)), Some(5.0));

        let ranks = ranking([Some(f64::NAN), None, None, None, None]);
        assert_eq!(RankAggregator::consensus(Some(&ranks)), None);
    }

    #[test]
    fn test_single_outlet() {
        let ranks = ranking([None, None, None, None, Some(41.0)]);
        assert_eq!(RankAggregator::consensus(Some(&ranks)), Some(41.0));
    }
}
