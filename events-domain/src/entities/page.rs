// Paginated search result

use serde::{Deserialize, Serialize};

use super::event::ShapedEvent;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult {
    pub events: Vec<ShapedEvent>,
    pub page: usize,
    pub page_size: usize,
    pub total_events: usize,
    pub total_pages: usize,
}
