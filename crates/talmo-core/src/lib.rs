pub mod field;
pub mod form;
pub mod result;

pub use field::{FieldDescriptor, FieldKind, FieldOption};
pub use form::{Form, ValidationError, format_probability};
pub use result::{CurrentRisk, ImprovedRisk, PatientInfoRow, PredictionResult};
