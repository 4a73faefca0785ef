use serde::{Deserialize, Serialize};

/// The catering enquiry form's fields.
///
/// `event_type` is one of the fixed event categories offered by the booking
/// widget, `event_date` is whatever the date picker bound (ISO `YYYY-MM-DD`),
/// and `guests` is the raw numeric string as typed. They stay strings here;
/// interpretation happens in validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CateringFormData {
    pub name: String,
    pub email: String,
    pub event_type: String,
    pub event_date: String,
    pub guests: String,
    pub message: String,
}
