pub mod form;
pub mod messages;
pub mod render;

pub use crate::domain::model::{Customer, CustomerPayload, EditBuffer, FieldErrors};
pub use crate::domain::ports::{ConfigProvider, CustomerApi, Notifier};
pub use crate::utils::error::Result;
