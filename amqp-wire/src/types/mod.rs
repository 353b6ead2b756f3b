mod content_header;
mod decimal;
mod endianness;
mod policy;
mod properties;
mod table;
mod timestamp;
mod value;

pub use content_header::ContentHeader;
pub use decimal::Decimal;
pub use endianness::Endianness;
pub use policy::{PrecisionPolicy, PresenceRule};
pub use properties::{PropertyFlag, Properties};
pub use table::{Entry, FieldTable};
pub(crate) use timestamp::{from_unix_seconds, to_unix_seconds};
pub use value::FieldValue;
