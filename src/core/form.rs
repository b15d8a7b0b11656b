use crate::core::messages;
use crate::domain::model::{Customer, EditBuffer};
use crate::domain::ports::{CustomerApi, Notifier};

/// What a form action ended up doing. Failures have already been shown to
/// the user by the time an action returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// Local validation failed; no request was sent.
    Invalid,
    NotFound,
    /// The user declined the confirmation prompt.
    Cancelled,
    Failed,
}

/// The customer form and list view.
///
/// Holds the edit buffer and the last fetched customer list, and exposes one
/// method per button. Every remote failure is logged and turned into an
/// alert through the [`Notifier`]; none of them leave the form unusable.
pub struct CustomerForm<A: CustomerApi, N: Notifier> {
    api: A,
    notifier: N,
    customers: Vec<Customer>,
    buffer: EditBuffer,
}

impl<A: CustomerApi, N: Notifier> CustomerForm<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            customers: Vec::new(),
            buffer: EditBuffer::default(),
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn set_search_id(&mut self, value: impl Into<String>) {
        self.buffer.search_id = value.into();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.buffer.name = value.into();
    }

    pub fn set_surname(&mut self, value: impl Into<String>) {
        self.buffer.surname = value.into();
    }

    pub fn validate_fields(&mut self) -> bool {
        self.buffer.validate()
    }

    fn require_id(&self) -> Option<String> {
        let id = self.buffer.target_id().map(str::to_owned);
        if id.is_none() {
            self.notifier.alert(messages::INVALID_ID);
        }
        id
    }

    /// Guardar: POST the buffer, then refresh the list and clear the form.
    pub async fn save_customer(&mut self) -> ActionOutcome {
        if !self.validate_fields() {
            return ActionOutcome::Invalid;
        }

        let result = self.api.create(&self.buffer.payload()).await;
        match result {
            Ok(()) => {
                tracing::info!("✅ Customer created");
                self.notifier.alert(messages::CUSTOMER_ADDED);
                self.load_customers().await;
                self.clear_fields();
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Error saving customer: {}", e);
                self.notifier.alert(messages::SAVE_FAILED);
                ActionOutcome::Failed
            }
        }
    }

    /// Actualizar: PUT the buffer to the search id, then refresh the list.
    /// The buffer is kept so the user can keep editing.
    pub async fn update_customer(&mut self) -> ActionOutcome {
        if !self.validate_fields() {
            return ActionOutcome::Invalid;
        }
        let Some(id) = self.require_id() else {
            return ActionOutcome::Invalid;
        };

        let result = self.api.update(&id, &self.buffer.payload()).await;
        match result {
            Ok(()) => {
                tracing::info!("✅ Customer {} updated", id);
                self.notifier.alert(messages::CUSTOMER_UPDATED);
                self.load_customers().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Error updating customer {}: {}", id, e);
                self.notifier.alert(messages::UPDATE_FAILED);
                ActionOutcome::Failed
            }
        }
    }

    /// Buscar: load name and surname of the search id into the buffer.
    ///
    /// A hit also clears both validity flags, since both fields now hold the
    /// stored values. On "not found" the buffer is left untouched.
    pub async fn find_customer(&mut self) -> ActionOutcome {
        let Some(id) = self.require_id() else {
            return ActionOutcome::Invalid;
        };

        let result = self.api.find(&id).await;
        match result {
            Ok(lookup) => match lookup.found() {
                Some(found) => {
                    tracing::debug!("Customer {} found", id);
                    self.buffer.name = found.name;
                    self.buffer.surname = found.surname;
                    self.buffer.errors = Default::default();
                    self.notifier.alert(messages::CUSTOMER_FOUND);
                    ActionOutcome::Completed
                }
                None => {
                    tracing::info!("Customer {} not found", id);
                    self.notifier.alert(messages::CUSTOMER_NOT_FOUND);
                    ActionOutcome::NotFound
                }
            },
            Err(e) => {
                tracing::error!("❌ Error searching customer {}: {}", id, e);
                self.notifier.alert(messages::SEARCH_FAILED);
                ActionOutcome::Failed
            }
        }
    }

    /// Eliminar: after confirmation, DELETE the search id and drop that row
    /// from the local list without refetching.
    pub async fn delete_customer(&mut self) -> ActionOutcome {
        let Some(id) = self.require_id() else {
            return ActionOutcome::Invalid;
        };
        if !self.notifier.confirm(messages::CONFIRM_DELETE) {
            return ActionOutcome::Cancelled;
        }

        let result = self.api.delete(&id).await;
        match result {
            Ok(()) => {
                tracing::info!("✅ Customer {} deleted", id);
                self.notifier.alert(messages::CUSTOMER_DELETED);
                self.customers.retain(|customer| customer.id != id);
                self.clear_fields();
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Error deleting customer {}: {}", id, e);
                self.notifier.alert(messages::DELETE_FAILED);
                ActionOutcome::Failed
            }
        }
    }

    /// Listar: replace the local list with the server's collection.
    pub async fn load_customers(&mut self) -> ActionOutcome {
        let result = self.api.list().await;
        match result {
            Ok(customers) => {
                tracing::debug!("Loaded {} customers", customers.len());
                self.customers = customers;
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!("❌ Error fetching customers: {}", e);
                self.notifier.alert(messages::LIST_FAILED);
                ActionOutcome::Failed
            }
        }
    }

    /// Limpiar: reset the buffer and both validity flags.
    pub fn clear_fields(&mut self) {
        self.buffer.clear();
    }
}
