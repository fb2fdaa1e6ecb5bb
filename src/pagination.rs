//! Resolution of the `limit` / `page` / `offset` list parameters.
//!
//! Values arrive as raw strings so that non-numeric input falls back to the
//! defaults instead of rejecting the request. `page` takes precedence over
//! `offset` and is 1-indexed.

use serde::Deserialize;

use crate::{db::dao::PageWindow, response::PageMeta};

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 1000;
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_OFFSET: u64 = 0;
/// Postgres binds `LIMIT`/`OFFSET` as BIGINT.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
}

impl ListQuery {
    pub fn resolve(&self) -> PageParams {
        let limit = match present(&self.limit) {
            Some(raw) => parse_or(raw, DEFAULT_LIMIT).min(MAX_LIMIT),
            None => DEFAULT_LIMIT,
        };

        let mut offset = present(&self.offset)
            .map(|raw| parse_or(raw, DEFAULT_OFFSET))
            .unwrap_or(DEFAULT_OFFSET);

        let mut page = DEFAULT_PAGE;
        if let Some(raw) = present(&self.page) {
            page = parse_or(raw, DEFAULT_PAGE);
            // page 0 would point before the first row
            offset = limit.saturating_mul(page).saturating_sub(limit);
        }

        PageParams {
            page,
            limit,
            offset: offset.min(MAX_OFFSET),
        }
    }
}

impl PageParams {
    pub fn window(&self) -> PageWindow {
        PageWindow {
            limit: self.limit,
            offset: self.offset,
        }
    }

    pub fn meta(&self, total: u64) -> PageMeta {
        PageMeta {
            page: self.page,
            limit: self.limit,
            total,
        }
    }
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|value| !value.is_empty())
}

fn parse_or(raw: &str, default: u64) -> u64 {
    raw.parse::<u64>().unwrap_or(default)
}
