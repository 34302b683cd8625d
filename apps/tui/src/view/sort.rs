/// Column a partner table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortCriteria {
    #[default]
    ActionCount,
    Country,
}

impl SortCriteria {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActionCount => "action_count",
            Self::Country => "country",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ActionCount => "Most active",
            Self::Country => "Country",
        }
    }
}

/// Active sort column plus one direction flag per column.
///
/// Only the flag belonging to `criteria` is read by the record processor.
/// Both flags default to `false`, which orders action counts high to low
/// and countries Z to A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    pub criteria: SortCriteria,
    pub is_ascending: bool,
    pub is_a_to_z: bool,
}

impl SortState {
    pub const fn new() -> Self {
        Self {
            criteria: SortCriteria::ActionCount,
            is_ascending: false,
            is_a_to_z: false,
        }
    }

    /// Flip the active column's direction, or switch columns and reset both
    /// directions.
    pub const fn toggle(&mut self, criteria: SortCriteria) {
        match (self.criteria, criteria) {
            (SortCriteria::ActionCount, SortCriteria::ActionCount) => {
                self.is_ascending = !self.is_ascending;
            }
            (SortCriteria::Country, SortCriteria::Country) => {
                self.is_a_to_z = !self.is_a_to_z;
            }
            _ => {
                self.criteria = criteria;
                self.is_ascending = false;
                self.is_a_to_z = false;
            }
        }
    }

    /// Whether the active column sorts ascending.
    pub const fn ascending(&self) -> bool {
        match self.criteria {
            SortCriteria::ActionCount => self.is_ascending,
            SortCriteria::Country => self.is_a_to_z,
        }
    }

    pub fn describe(&self) -> String {
        let direction = match (self.criteria, self.ascending()) {
            (SortCriteria::ActionCount, true) => "low to high",
            (SortCriteria::ActionCount, false) => "high to low",
            (SortCriteria::Country, true) => "A to Z",
            (SortCriteria::Country, false) => "Z to A",
        };
        format!("{} ({direction})", self.criteria.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sorts_action_count_descending() {
        let state = SortState::default();
        assert_eq!(state, SortState::new());
        assert_eq!(state.criteria, SortCriteria::ActionCount);
        assert!(!state.ascending());
    }

    #[test]
    fn toggling_same_criteria_flips_direction() {
        let mut state = SortState::new();
        state.toggle(SortCriteria::ActionCount);
        assert!(state.is_ascending);
        state.toggle(SortCriteria::ActionCount);
        assert!(!state.is_ascending);
        assert!(!state.is_a_to_z);
    }

    #[test]
    fn switching_criteria_resets_both_flags() {
        let mut state = SortState::new();
        state.toggle(SortCriteria::ActionCount);
        state.toggle(SortCriteria::Country);
        assert_eq!(state.criteria, SortCriteria::Country);
        assert!(!state.is_ascending);
        assert!(!state.is_a_to_z);

        state.toggle(SortCriteria::Country);
        assert!(state.is_a_to_z);
        assert!(state.ascending());

        state.toggle(SortCriteria::ActionCount);
        assert_eq!(state.criteria, SortCriteria::ActionCount);
        assert!(!state.is_a_to_z);
        assert!(!state.is_ascending);
    }

    #[test]
    fn describe_names_column_and_direction() {
        let mut state = SortState::new();
        assert_eq!(state.describe(), "Most active (high to low)");
        state.toggle(SortCriteria::Country);
        state.toggle(SortCriteria::Country);
        assert_eq!(state.describe(), "Country (A to Z)");
    }
}
