//! DNS Librarian Domain Layer
pub mod collated_records;
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod raw_response;
pub mod resolver_address;

pub use collated_records::CollatedRecords;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{AnswerRecord, RecordData, RecordGroup, RecordType, SoaData};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use raw_response::{RawResponse, ResponseCode};
pub use resolver_address::ResolverAddress;
