//! Auth form: mode selection, field validation, and the submission controller.

pub mod controller;
pub mod mode;
pub mod validate;

pub use controller::{FormController, FormStatus, GENERIC_SUBMIT_ERROR, SubmissionState, SubmitError};
pub use mode::FormMode;
pub use validate::{FormField, FormValues, ValidationError, ValidationKind, validate, validate_all};
