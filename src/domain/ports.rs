use crate::domain::model::{Customer, CustomerLookup, CustomerPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// The remote customer collection.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>>;
    async fn find(&self, id: &str) -> Result<CustomerLookup>;
    async fn create(&self, payload: &CustomerPayload) -> Result<()>;
    async fn update(&self, id: &str, payload: &CustomerPayload) -> Result<()>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Blocking user prompts raised by the form.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
    fn confirm(&self, question: &str) -> bool;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, question: &str) -> bool {
        (**self).confirm(question)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn headers(&self) -> &HashMap<String, String>;
}
