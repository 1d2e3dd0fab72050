use crate::domain::opportunity::Opportunity;
use serde::{Deserialize, Serialize};

/// Sentinel selector value meaning "no constraint".
pub const ALL: &str = "all";

/// Upper bound of the budget slider.
pub const BUDGET_MAX: u32 = 50_000;

/// The four independent board filters. All predicates are ANDed; there is
/// no OR mode. Location, category, and date match by exact selector
/// equality against the `all` sentinel; budget is an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityFilters {
    pub location: String,
    pub category: String,
    pub budget_min: u32,
    pub budget_max: u32,
    pub date_posted: String,
}

impl Default for OpportunityFilters {
    fn default() -> Self {
        Self {
            location: ALL.to_string(),
            category: ALL.to_string(),
            budget_min: 0,
            budget_max: BUDGET_MAX,
            date_posted: ALL.to_string(),
        }
    }
}

impl OpportunityFilters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, opp: &Opportunity) -> bool {
        let location_ok = self.location == ALL || opp.location == self.location;
        let category_ok = self.category == ALL || opp.category == self.category;
        let budget_ok = opp.budget >= self.budget_min && opp.budget <= self.budget_max;
        let date_ok = self.date_posted == ALL || opp.date_posted == self.date_posted;
        location_ok && category_ok && budget_ok && date_ok
    }

    /// Input order is presentation order; no re-sorting.
    pub fn apply(&self, opportunities: &[Opportunity]) -> Vec<Opportunity> {
        opportunities
            .iter()
            .filter(|o| self.matches(o))
            .cloned()
            .collect()
    }
}

/// Serializable board view state. `visible` is `None` while the board is
/// still loading, so an empty match list is distinguishable from a board
/// that has not arrived yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpportunityView {
    pub filters: OpportunityFilters,
    loading: bool,
    matches: Vec<Opportunity>,
}

impl OpportunityView {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn load(&mut self, board: &[Opportunity]) {
        self.loading = false;
        self.refresh(board);
    }

    /// Re-runs the current filters over the full board.
    pub fn refresh(&mut self, board: &[Opportunity]) {
        if !self.loading {
            self.matches = self.filters.apply(board);
        }
    }

    pub fn visible(&self) -> Option<&[Opportunity]> {
        if self.loading {
            None
        } else {
            Some(&self.matches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::opportunity::sample_opportunities;

    #[test]
    fn no_constraint_filters_pass_everything() {
        let board = sample_opportunities();
        let filters = OpportunityFilters::default();
        assert_eq!(filters.apply(&board), board);
        assert_eq!(board.len(), 6);
    }

    #[test]
    fn budget_floor_excludes_cheaper_gigs() {
        let board = sample_opportunities();
        let filters = OpportunityFilters {
            budget_min: 10_000,
            ..Default::default()
        };
        let matched = filters.apply(&board);
        assert!(matched.iter().all(|o| o.budget >= 10_000));
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn location_is_exact_match_only() {
        let board = sample_opportunities();
        let filters = OpportunityFilters {
            location: "koregaon".to_string(), // partial, must not match
            ..Default::default()
        };
        assert!(filters.apply(&board).is_empty());
    }

    #[test]
    fn predicates_are_anded() {
        let board = sample_opportunities();
        let filters = OpportunityFilters {
            location: "koregaon-park".to_string(),
            category: "content".to_string(),
            ..Default::default()
        };
        let matched = filters.apply(&board);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 6);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut filters = OpportunityFilters {
            location: "wakad".to_string(),
            category: "fitness".to_string(),
            budget_min: 9_000,
            budget_max: 13_000,
            date_posted: "today".to_string(),
        };
        filters.reset();
        assert_eq!(filters, OpportunityFilters::default());
    }

    #[test]
    fn empty_result_is_distinguishable_from_loading() {
        let board = sample_opportunities();

        let mut view = OpportunityView::loading();
        assert!(view.visible().is_none());

        view.filters.location = "shivajinagar".to_string();
        view.load(&board);
        assert_eq!(view.visible(), Some(&[][..]));
    }

    #[test]
    fn refresh_tracks_filter_changes() {
        let board = sample_opportunities();
        let mut view = OpportunityView::loading();
        view.load(&board);
        assert_eq!(view.visible().unwrap().len(), 6);

        view.filters.date_posted = "today".to_string();
        view.refresh(&board);
        assert_eq!(view.visible().unwrap().len(), 2);
    }
}
