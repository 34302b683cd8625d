use crate::domain::{PartnerType, Record};
use crate::view::records::process_indices;
use crate::view::sort::SortState;

/// Owned record set plus a version that changes on every replacement.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    version: u64,
    records: Vec<Record>,
}

impl Dataset {
    pub const fn new() -> Self {
        Self {
            version: 0,
            records: Vec::new(),
        }
    }

    pub const fn version(&self) -> u64 {
        self.version
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
        self.version = self.version.wrapping_add(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ViewKey {
    version: u64,
    partner_type: PartnerType,
    sort: SortState,
    query: String,
}

/// Cache of the last processed view, recomputed only when one of its inputs
/// changes.
#[derive(Debug, Default)]
pub struct ViewMemo {
    key: Option<ViewKey>,
    order: Vec<usize>,
    computations: u64,
}

impl ViewMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions into `dataset.records()` in display order.
    pub fn view(
        &mut self,
        dataset: &Dataset,
        partner_type: PartnerType,
        sort: SortState,
        query: &str,
    ) -> &[usize] {
        let fresh = self.key.as_ref().is_some_and(|key| {
            key.version == dataset.version()
                && key.partner_type == partner_type
                && key.sort == sort
                && key.query == query
        });

        if fresh {
            tracing::trace!(version = dataset.version(), "processed view cache hit");
        } else {
            self.order = process_indices(dataset.records(), partner_type, query, sort);
            self.key = Some(ViewKey {
                version: dataset.version(),
                partner_type,
                sort,
                query: query.to_string(),
            });
            self.computations += 1;
            tracing::debug!(
                version = dataset.version(),
                partner_type = partner_type.label(),
                sort = sort.criteria.as_str(),
                rows = self.order.len(),
                "recomputed processed view"
            );
        }

        &self.order
    }

    /// Number of times the pipeline actually ran.
    pub const fn computations(&self) -> u64 {
        self.computations
    }
}
