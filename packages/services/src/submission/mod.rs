pub mod handler;
pub mod session;

pub use handler::{SubmitError, SubmitHandler};
pub use session::{FormSession, FormStatus};
