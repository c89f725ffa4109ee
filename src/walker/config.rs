//! Configuration for directory walking

use crate::store::SortOrder;

/// How a listing is collected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingConfig {
    pub order: SortOrder,
    /// Reverse the final order once everything is collected.
    pub reverse: bool,
    /// Descend into subdirectories after their parent is enumerated.
    pub recursive: bool,
    /// List directory operands themselves instead of their contents.
    pub dirs_only: bool,
}
