// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod http;

pub use console::Console;
pub use http::{HttpCustomerApi, DEFAULT_BASE_URL};
