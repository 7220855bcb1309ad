//! In-memory implementation of [`CustomerRepository`].
//!
//! Records live in a `BTreeMap` keyed by id, so reads come back in id order
//! without sorting. Fresh ids come from a monotonically increasing sequence
//! that never reuses a deleted id.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{CustomerPersistenceError, CustomerRepository};
use crate::domain::{Customer, CustomerDraft, CustomerId, CustomerInput};

/// Demo records loaded by [`InMemoryCustomerRepository::with_demo_customers`].
///
/// These bypass request validation: they model customers that already exist,
/// including ones on domains new sign-ups may not use.
pub const DEMO_CUSTOMERS: [(&str, &str); 10] = [
    ("sam", "sam@gmail.com"),
    ("mike", "mike@gmail.com"),
    ("jake", "jake@gmail.com"),
    ("emily", "emily@example.com"),
    ("sophia", "sophia@example.com"),
    ("liam", "liam@example.com"),
    ("olivia", "olivia@example.com"),
    ("noah", "noah@example.com"),
    ("ava", "ava@example.com"),
    ("ethan", "ethan@example.com"),
];

#[derive(Debug)]
struct Table {
    rows: BTreeMap<CustomerId, Customer>,
    next_id: i32,
}

impl Table {
    fn allocate_id(&mut self) -> Result<CustomerId, CustomerPersistenceError> {
        let id = CustomerId::new(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| CustomerPersistenceError::query("customer id sequence exhausted"))?;
        Ok(id)
    }
}

/// Customer store held in process memory.
#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    table: RwLock<Table>,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl InMemoryCustomerRepository {
    /// Empty store whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with [`DEMO_CUSTOMERS`] under ids 1 to 10.
    ///
    /// # Examples
    /// ```
    /// use customer_service::domain::ports::CustomerRepository;
    /// use customer_service::outbound::persistence::InMemoryCustomerRepository;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let repo = InMemoryCustomerRepository::with_demo_customers();
    /// let all = repo.find_all().await.expect("in-memory reads succeed");
    /// assert_eq!(all.len(), 10);
    /// assert_eq!(all.first().map(|c| c.name()), Some("sam"));
    /// # });
    /// ```
    #[must_use]
    pub fn with_demo_customers() -> Self {
        let mut rows = BTreeMap::new();
        for (raw_id, (name, email)) in (1..).zip(DEMO_CUSTOMERS) {
            let Ok(draft) = CustomerDraft::try_from(CustomerInput::new(name, email)) else {
                continue;
            };
            let id = CustomerId::new(raw_id);
            rows.insert(id, Customer::from_draft(id, draft));
        }
        let next_id = rows
            .keys()
            .next_back()
            .map_or(1, |id: &CustomerId| id.get().saturating_add(1));
        Self {
            table: RwLock::new(Table { rows, next_id }),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(
        &self,
        id: CustomerId,
    ) -> Result<Option<Customer>, CustomerPersistenceError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, CustomerPersistenceError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Customer>, CustomerPersistenceError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert(&self, draft: CustomerDraft) -> Result<Customer, CustomerPersistenceError> {
        let mut table = self.table.write().await;
        let id = table.allocate_id()?;
        let customer = Customer::from_draft(id, draft);
        table.rows.insert(id, customer.clone());
        debug!(customer_id = %id, "customer row inserted");
        Ok(customer)
    }

    async fn update(
        &self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<Option<Customer>, CustomerPersistenceError> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            debug!(customer_id = %id, "update skipped, no such row");
            return Ok(None);
        };
        *row = Customer::from_draft(id, draft);
        debug!(customer_id = %id, "customer row replaced");
        Ok(Some(row.clone()))
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<bool, CustomerPersistenceError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
