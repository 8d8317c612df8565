pub mod store;

pub use store::{AppointmentDirectory, AppointmentStore};
