//! Pagination policy shared by every listing and series endpoint.
//!
//! Raw `page`/`size` query values are resolved once into a [`PageRequest`]:
//! - neither supplied: the whole sequence in a single page
//! - both positive integers: a clamped page of the sequence
//! - anything else: no items, with best-effort metadata
//!
//! Invalid input never errors; it yields an empty window whose `total` still
//! reports the sequence length.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    All,
    Paged { page: u64, size: u64 },
    /// Parsed integers are kept so the response can echo them back.
    Invalid {
        page: Option<i64>,
        size: Option<i64>,
    },
}

impl PageRequest {
    /// Resolve raw query values. A value that is present but not an integer
    /// counts as supplied-and-invalid.
    pub fn from_query(page: Option<&str>, size: Option<&str>) -> Self {
        match (page, size) {
            (None, None) => PageRequest::All,
            (page, size) => Self::from_parsed(page.map(parse_int), size.map(parse_int)),
        }
    }

    /// `None` means absent; `Some(None)` means present but not an integer.
    pub fn from_parsed(page: Option<Option<i64>>, size: Option<Option<i64>>) -> Self {
        match (page, size) {
            (None, None) => PageRequest::All,
            (Some(Some(p)), Some(Some(s))) if p > 0 && s > 0 => PageRequest::Paged {
                page: p as u64,
                size: s as u64,
            },
            (page, size) => PageRequest::Invalid {
                page: page.flatten(),
                size: size.flatten(),
            },
        }
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Response envelope: one page of items plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: i64,
    pub size: i64,
    pub pages: usize,
}

impl<T> Window<T> {
    /// Transform the items of this page, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Window<U> {
        Window {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
            pages: self.pages,
        }
    }
}

/// Windowing policy with an optional ceiling on page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowPolicy {
    pub max_size: Option<u64>,
}

impl WindowPolicy {
    pub fn unbounded() -> Self {
        Self { max_size: None }
    }

    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            max_size: Some(max_size.max(1)),
        }
    }

    pub fn apply<T>(&self, items: Vec<T>, request: PageRequest) -> Window<T> {
        let total = items.len();
        match request {
            PageRequest::All => Window {
                total,
                page: 1,
                size: total as i64,
                pages: 1,
                items,
            },
            PageRequest::Paged { page, size } => {
                let size = self.max_size.map_or(size, |max| size.min(max)).max(1);
                let pages = total.div_ceil(size as usize);
                let page = page.min(pages.max(1) as u64).max(1);

                let start = ((page - 1) * size) as usize;
                let items: Vec<T> = items.into_iter().skip(start).take(size as usize).collect();

                Window {
                    items,
                    total,
                    page: page as i64,
                    size: size as i64,
                    pages,
                }
            }
            PageRequest::Invalid { page, size } => {
                let pages = match size {
                    Some(s) if s > 0 => total.div_ceil(s as usize),
                    _ => 1,
                };
                Window {
                    items: Vec::new(),
                    total,
                    page: page.unwrap_or(1),
                    size: size.unwrap_or(1),
                    pages,
                }
            }
        }
    }
}

/// Apply the unbounded policy.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Window<T> {
    WindowPolicy::unbounded().apply(items, request)
}
