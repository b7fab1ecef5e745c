pub mod daily;
pub mod summary;

pub use daily::DayRecord;
pub use summary::{summarize, MonthSummary};
