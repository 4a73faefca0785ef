pub mod catering;
pub mod contact;

pub use catering::CateringFormData;
pub use contact::ContactFormData;
