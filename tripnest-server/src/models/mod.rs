//! Domain models with validation at construction
//!
//! Documents are schema-less; only the identifier and the owner email
//! get typed projections.

pub mod validation;
pub mod spot;
pub mod email;
pub mod ack;

pub use validation::ValidationError;
pub use spot::{merge_fields, strip_id, Document, SpotId, TouristSpot, ID_FIELD};
pub use email::OwnerEmail;
pub use ack::{DeleteAck, InsertAck, UpdateAck};
