use super::IWateringLogRepo;
use crate::repos::shared::inmemory_repo::*;
use planto_domain::{WateringLogEntry, ID};
use std::sync::Mutex;

pub struct InMemoryWateringLogRepo {
    entries: Mutex<Vec<WateringLogEntry>>,
}

impl InMemoryWateringLogRepo {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryWateringLogRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IWateringLogRepo for InMemoryWateringLogRepo {
    async fn insert(&self, entry: &WateringLogEntry) -> anyhow::Result<()> {
        if find(&entry.reminder_id, &self.entries).is_none() {
            insert(entry, &self.entries);
        }
        Ok(())
    }

    async fn find_all(&self) -> Vec<WateringLogEntry> {
        find_by(&self.entries, |_| true)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<WateringLogEntry> {
        delete(reminder_id, &self.entries)
    }

    async fn delete_many(&self, reminder_ids: &[ID]) -> Vec<WateringLogEntry> {
        find_and_delete_by(&self.entries, |entry| {
            reminder_ids.contains(&entry.reminder_id)
        })
    }

    async fn delete_all(&self) -> Vec<WateringLogEntry> {
        delete_all(&self.entries)
    }
}
