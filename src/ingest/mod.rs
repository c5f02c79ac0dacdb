//! CSV ingestion: text to ordered, typed records.

mod parse;
mod record;
mod summary;
mod upload;

pub use parse::{parse, parse_leading_int};
pub use record::{Dataset, Record, Value};
pub use summary::{DatasetSummary, SeriesSummary};
pub use upload::{ReadTicket, UploadSession, UploadSource};
