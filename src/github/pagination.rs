//! Pagination cursors, result pages and client-side limits.
//!
//! Gateways hand back one [`ResultPage`] at a time together with an opaque
//! [`PageCursor`] for the next page. The provider client follows cursors
//! until none is returned and then applies a [`PullRequestLimit`].

use std::str::FromStr;

/// Items requested per upstream page (GitHub's maximum).
pub const PER_PAGE: u8 = 100;

/// Upper bound on pages followed by a single listing.
pub const MAX_PAGES: u32 = 1000;

/// Opaque position of a page in an upstream listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor(u32);

impl PageCursor {
    /// Cursor for the first page.
    #[must_use]
    pub const fn first() -> Self {
        Self(1)
    }

    /// Cursor for the page after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// 1-based page number sent upstream.
    #[must_use]
    pub const fn page_number(self) -> u32 {
        self.0
    }
}

/// One page of an upstream listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage<T> {
    /// Items on this page in upstream order.
    pub items: Vec<T>,
    /// Cursor for the following page, `None` on the last page.
    pub next: Option<PageCursor>,
}

impl<T> ResultPage<T> {
    /// Builds the final page of a listing.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Builds a page that is followed by `next`.
    #[must_use]
    pub const fn with_next(items: Vec<T>, next: PageCursor) -> Self {
        Self {
            items,
            next: Some(next),
        }
    }
}

/// Client-requested cap on returned pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestLimit {
    /// Return every pull request.
    #[default]
    Unlimited,
    /// Return at most this many pull requests.
    AtMost(usize),
}

/// Raised when a count is not an integer of at least -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLimit;

impl PullRequestLimit {
    /// Interprets the wire count: -1 is unlimited, negatives below it are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLimit`] for values below -1.
    pub fn from_count(count: i64) -> Result<Self, InvalidLimit> {
        match count {
            -1 => Ok(Self::Unlimited),
            n if n < -1 => Err(InvalidLimit),
            n => Ok(usize::try_from(n).map_or(Self::Unlimited, Self::AtMost)),
        }
    }

    /// Keeps the leading items allowed by this limit.
    #[must_use]
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if let Self::AtMost(count) = self {
            items.truncate(count);
        }
        items
    }
}

impl FromStr for PullRequestLimit {
    type Err = InvalidLimit;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<i64>()
            .map_err(|_| InvalidLimit)
            .and_then(Self::from_count)
    }
}
