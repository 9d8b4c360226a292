//! Offset pagination for collection endpoints

use serde::Deserialize;
use utoipa::IntoParams;

const MAX_PAGE_SIZE: usize = 100;

/// Pagination parameters (from query string)
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Number of items to skip
    #[serde(default)]
    pub offset: usize,

    /// Items per page (1..=100)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    20
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: 0,
            page_size: default_page_size(),
        }
    }
}

impl PaginationParams {
    pub fn new(offset: usize, page_size: usize) -> Self {
        Self { offset, page_size }
    }

    /// Page size clamped to the supported range
    pub fn limit(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}
