use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use planto_domain::{sanitize_plant_name, PlantReminder, ID};
use std::collections::BTreeSet;
use std::sync::Mutex;

pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<PlantReminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }
}

/// Stable sort so that reminders created at the same millisecond
/// keep their relative order, the latest insert first.
fn sort_newest_first(reminders: &mut Vec<PlantReminder>) {
    reminders.sort_by(|r1, r2| r2.created_at.cmp(&r1.created_at));
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &PlantReminder) -> anyhow::Result<()> {
        let mut reminder = reminder.clone();
        reminder.plant_name = sanitize_plant_name(&reminder.plant_name);
        let mut reminders = self.reminders.lock().unwrap();
        reminders.insert(0, reminder);
        sort_newest_first(&mut reminders);
        Ok(())
    }

    async fn save(&self, reminder: &PlantReminder) -> anyhow::Result<bool> {
        let mut reminders = self.reminders.lock().unwrap();
        let updated = match reminders.iter_mut().find(|stored| stored.id == reminder.id) {
            Some(stored) => {
                stored.apply(reminder.details());
                true
            }
            None => false,
        };
        if updated {
            sort_newest_first(&mut reminders);
        }
        Ok(updated)
    }

    async fn find(&self, reminder_id: &ID) -> Option<PlantReminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_all(&self) -> Vec<PlantReminder> {
        find_by(&self.reminders, |_| true)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<PlantReminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn delete_at(&self, positions: &[usize]) -> Vec<PlantReminder> {
        let mut reminders = self.reminders.lock().unwrap();
        let positions = positions
            .iter()
            .copied()
            .filter(|pos| *pos < reminders.len())
            .collect::<BTreeSet<_>>();

        let mut deleted = Vec::with_capacity(positions.len());
        // Highest position first so that the remaining positions stay valid
        for pos in positions.into_iter().rev() {
            deleted.push(reminders.remove(pos));
        }
        deleted.reverse();
        deleted
    }

    async fn delete_all(&self) -> Vec<PlantReminder> {
        delete_all(&self.reminders)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planto_domain::{CareDetails, PLACEHOLDER_PLANT_NAME};
    use std::future::Future;
    use std::sync::Arc;

    fn details(name: &str, schedule: &str) -> CareDetails {
        CareDetails {
            plant_name: name.into(),
            room: "Living Room".into(),
            light: "Partial sun".into(),
            watering_schedule: schedule.into(),
            water_amount: "50-100 ml".into(),
        }
    }

    fn reminder(name: &str, created_at: i64) -> PlantReminder {
        PlantReminder::new(details(name, "Every day"), created_at)
    }

    fn names(reminders: &[PlantReminder]) -> Vec<String> {
        reminders.iter().map(|r| r.plant_name.clone()).collect()
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let repo = InMemoryReminderRepo::new();
        for (name, created_at) in &[("Fern", 20), ("Pothos", 10), ("Cactus", 30), ("Ivy", 25)] {
            repo.insert(&reminder(name, *created_at)).await.unwrap();
        }

        let reminders = repo.find_all().await;
        assert_eq!(names(&reminders), vec!["Cactus", "Ivy", "Fern", "Pothos"]);
        assert!(reminders
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn ties_put_latest_insert_first() {
        let repo = InMemoryReminderRepo::new();
        repo.insert(&reminder("Fern", 10)).await.unwrap();
        repo.insert(&reminder("Pothos", 10)).await.unwrap();
        repo.insert(&reminder("Ivy", 10)).await.unwrap();

        assert_eq!(
            names(&repo.find_all().await),
            vec!["Ivy", "Pothos", "Fern"]
        );
    }

    #[tokio::test]
    async fn insert_never_stores_blank_names() {
        let repo = InMemoryReminderRepo::new();
        let mut r = reminder("Fern", 10);
        r.plant_name = "   ".into();
        repo.insert(&r).await.unwrap();

        assert_eq!(
            repo.find(&r.id).await.unwrap().plant_name,
            PLACEHOLDER_PLANT_NAME
        );
    }

    #[tokio::test]
    async fn save_overwrites_details_but_keeps_identity() {
        let repo = InMemoryReminderRepo::new();
        let original = reminder("Pothos", 10);
        repo.insert(&original).await.unwrap();

        let mut edited = original.clone();
        edited.created_at = 999;
        edited.apply(details("", "Once a week"));
        assert!(repo.save(&edited).await.unwrap());

        let stored = repo.find(&original.id).await.unwrap();
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.created_at, 10);
        assert_eq!(stored.plant_name, PLACEHOLDER_PLANT_NAME);
        assert_eq!(stored.watering_schedule, "Once a week");
    }

    #[tokio::test]
    async fn save_with_unknown_id_is_noop() {
        let repo = InMemoryReminderRepo::new();
        repo.insert(&reminder("Pothos", 10)).await.unwrap();
        let before = repo.find_all().await;

        let stranger = reminder("Fern", 20);
        assert!(!repo.save(&stranger).await.unwrap());
        assert_eq!(repo.find_all().await, before);
    }

    #[tokio::test]
    async fn delete_by_id() {
        let repo = InMemoryReminderRepo::new();
        let pothos = reminder("Pothos", 10);
        let fern = reminder("Fern", 20);
        repo.insert(&pothos).await.unwrap();
        repo.insert(&fern).await.unwrap();

        assert_eq!(repo.delete(&pothos.id).await, Some(pothos.clone()));
        assert!(repo.find_all().await.iter().all(|r| r.id != pothos.id));
        assert_eq!(repo.delete(&pothos.id).await, None);
        assert_eq!(names(&repo.find_all().await), vec!["Fern"]);
    }

    #[tokio::test]
    async fn delete_at_ignores_stale_positions() {
        let repo = InMemoryReminderRepo::new();
        for (name, created_at) in &[("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
            repo.insert(&reminder(name, *created_at)).await.unwrap();
        }
        // Display order: D, C, B, A
        let deleted = repo.delete_at(&[3, 1, 7, 1]).await;

        assert_eq!(names(&deleted), vec!["C", "A"]);
        assert_eq!(names(&repo.find_all().await), vec!["D", "B"]);
        assert!(repo.delete_at(&[2]).await.is_empty());
    }

    #[tokio::test]
    async fn delete_all_empties_collection() {
        let repo = InMemoryReminderRepo::new();
        repo.insert(&reminder("A", 1)).await.unwrap();
        repo.insert(&reminder("B", 2)).await.unwrap();

        assert_eq!(repo.delete_all().await.len(), 2);
        assert!(repo.find_all().await.is_empty());
        assert!(repo.delete_all().await.is_empty());
    }

    fn block_on<F: Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn concurrent_readers_always_see_newest_first() {
        let repo = Arc::new(InMemoryReminderRepo::new());

        let writer = {
            let repo = repo.clone();
            std::thread::spawn(move || {
                block_on(async move {
                    for i in 0..500i64 {
                        // Alternates between old and new timestamps
                        let created_at = (i * 7919) % 1000;
                        let mut r = reminder("Fern", created_at);
                        repo.insert(&r).await.unwrap();
                        r.plant_name = "Boston Fern".into();
                        repo.save(&r).await.unwrap();
                    }
                })
            })
        };
        let reader = {
            let repo = repo.clone();
            std::thread::spawn(move || {
                block_on(async move {
                    for _ in 0..500 {
                        let reminders = repo.find_all().await;
                        assert!(reminders
                            .windows(2)
                            .all(|w| w[0].created_at >= w[1].created_at));
                    }
                })
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(block_on(repo.find_all()).len(), 500);
    }
}
