mod error;
mod http_mapping;
mod pagination;
mod traits;
mod types;

pub use error::{Result, ScanCeiling, StoreError};
pub use http_mapping::{store_error_kind, store_error_to_status_code};
pub use pagination::{check_limits, collect_all};
pub use traits::RecordStore;
pub use types::{Cursor, ScanLimits, ScanPage};
