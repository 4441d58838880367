//! Pagination metadata attached to list responses.

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// The `meta` block of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Page position as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
    pub last_page: Option<u32>,
    pub total_entries: Option<u64>,
}

/// Implemented by list wrappers that carry a `meta` block.
pub trait Paginated {
    fn meta(&self) -> &Meta;

    fn pagination(&self) -> Option<&Pagination> {
        self.meta().pagination.as_ref()
    }
}

/// Page numbers for navigating from the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLinks {
    pub first: u32,
    pub last: u32,
    pub prev: Option<u32>,
    pub next: Option<u32>,
}

impl Pagination {
    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total_entries.unwrap_or(0)
    }

    pub fn last_page(&self) -> u32 {
        self.last_page.unwrap_or(self.page).max(1)
    }

    /// 1-based index of the first entry on this page, `None` when the page
    /// holds no entries.
    pub fn from(&self) -> Option<u64> {
        let skipped = u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page);
        if skipped >= self.total() {
            return None;
        }
        Some(skipped + 1)
    }

    /// 1-based index of the last entry on this page.
    pub fn to(&self) -> Option<u64> {
        self.from()?;
        let end = u64::from(self.page) * u64::from(self.per_page);
        Some(end.min(self.total()))
    }

    pub fn has_more_pages(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn links(&self) -> PageLinks {
        PageLinks {
            first: 1,
            last: self.last_page(),
            prev: self.previous_page,
            next: self.next_page,
        }
    }

    /// Copy `params` with `page` advanced to the next page, if any.
    pub fn next_page_params(&self, params: &Params) -> Option<Params> {
        let next = self.next_page?;
        Some(params.clone().with("page", next))
    }
}
