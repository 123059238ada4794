mod inmemory;

pub use inmemory::InMemoryReminderRepo;
use planto_domain::{PlantReminder, ID};

/// Owns the `PlantReminder`s of the user.
///
/// Every read returns the reminders ordered by `created_at`, newest first.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &PlantReminder) -> anyhow::Result<()>;
    /// Overwrites everything but `id` and `created_at` of the stored reminder
    /// with the same id. Unknown ids are ignored, the returned flag tells if
    /// anything was updated.
    async fn save(&self, reminder: &PlantReminder) -> anyhow::Result<bool>;
    async fn find(&self, reminder_id: &ID) -> Option<PlantReminder>;
    async fn find_all(&self) -> Vec<PlantReminder>;
    async fn delete(&self, reminder_id: &ID) -> Option<PlantReminder>;
    /// Deletes by position in the current ordering. Positions out of range are ignored.
    async fn delete_at(&self, positions: &[usize]) -> Vec<PlantReminder>;
    async fn delete_all(&self) -> Vec<PlantReminder>;
}
