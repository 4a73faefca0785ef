use serde::{Deserialize, Serialize};

/// The contact form's fields. All free text; a freshly mounted form is
/// `Default` (every field empty).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
