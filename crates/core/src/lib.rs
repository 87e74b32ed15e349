//! Functional core for the axcrud record API.
//!
//! Pure data types and pure functions: records, request resolution, response
//! envelopes and error mapping. The only I/O-facing piece is the
//! [`storage::RecordStore`] trait, which the pagination collector drives.

pub mod record;
pub mod response;
pub mod routing;
pub mod storage;
