pub mod record;
pub mod record_type;

pub use record::DomainRecord;
pub use record_type::RecordType;
