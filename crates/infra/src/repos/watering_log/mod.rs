mod inmemory;

pub use inmemory::InMemoryWateringLogRepo;
use planto_domain::{WateringLogEntry, ID};

#[async_trait::async_trait]
pub trait IWateringLogRepo: Send + Sync {
    /// Logging the same reminder twice keeps the first entry
    async fn insert(&self, entry: &WateringLogEntry) -> anyhow::Result<()>;
    async fn find_all(&self) -> Vec<WateringLogEntry>;
    async fn delete(&self, reminder_id: &ID) -> Option<WateringLogEntry>;
    async fn delete_many(&self, reminder_ids: &[ID]) -> Vec<WateringLogEntry>;
    async fn delete_all(&self) -> Vec<WateringLogEntry>;
}
