use crate::domain::{CategoryBreakdown, RankedCategory};

pub struct RankingService;

impl RankingService {
    /// Every category ordered by total, highest first.
    ///
    /// Equal totals keep their first-seen order from the breakdown.
    pub fn rank(breakdown: &CategoryBreakdown) -> Vec<RankedCategory> {
        let mut ranked: Vec<RankedCategory> = breakdown.iter().map(RankedCategory::from).collect();
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.total.cmp(&a.total));
        ranked
    }
}
