// src/models/pagination.rs
// DOCUMENTATION: Offset pagination for GET /photo
// PURPOSE: Query parsing and the {data, meta} response envelope

use crate::models::Photo;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw `?page=&limit=` parameters
/// DOCUMENTATION: Kept as strings so that garbage input falls back to the
/// defaults instead of failing extraction
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn limit(&self) -> i64 {
        positive_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    /// Rows to skip: (page - 1) * limit
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

/// Parse a leading integer the lenient way ("12px" -> 12, " 3" -> 3)
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(parse_leading_int)
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

/// Number of pages needed for `total` rows, `limit` rows per page
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    total / limit + i64::from(total % limit != 0)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_photos: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub per_page: i64,
}

/// Paginated photo listing
#[derive(Debug, Clone, Serialize)]
pub struct PhotoPage {
    pub data: Vec<Photo>,
    pub meta: PageMeta,
}
