pub mod group;
pub mod record;
pub mod record_type;

pub use group::RecordGroup;
pub use record::{AnswerRecord, RecordData, SoaData};
pub use record_type::RecordType;
