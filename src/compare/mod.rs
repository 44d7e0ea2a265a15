//! Policy comparison: side-by-side view, report export, and sharing

mod capability;
mod report;

pub use capability::{
    share_with_fallback, ClipboardShare, DocumentExporter, FileExporter, FileHandle, NoShare,
    Share, SharePayload,
};
pub use report::{format_inr, Comparison, ComparisonRow, MAX_COMPARED};
