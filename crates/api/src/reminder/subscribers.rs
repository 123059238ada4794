use super::{
    clear_reminders::ClearRemindersUseCase, create_reminder::CreateReminderUseCase,
    delete_reminder::DeleteReminderUseCase, delete_reminders_at::DeleteRemindersAtUseCase,
    update_reminder::UpdateReminderUseCase,
};
use crate::shared::usecase::Subscriber;
use planto_domain::{PlantReminder, ID};
use planto_infra::PlantoContext;
use tracing::info;

// The alert receipts are dropped, the scheduler logs failures itself

/// Arms the alert from what is stored right now. A reminder deleted in the
/// meantime already has its cancel queued and is skipped.
async fn schedule_stored_reminder(reminder_id: &ID, ctx: &PlantoContext) {
    let _guard = ctx.alert_sync.lock().await;
    match ctx.repos.reminders.find(reminder_id).await {
        Some(reminder) => {
            ctx.notifications.schedule(&reminder);
        }
        None => info!(
            "Reminder: {} was deleted before its alert was armed",
            reminder_id
        ),
    }
}

pub struct ScheduleAlertOnReminderCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReminderUseCase> for ScheduleAlertOnReminderCreated {
    async fn notify(&self, reminder: &PlantReminder, ctx: &PlantoContext) {
        schedule_stored_reminder(&reminder.id, ctx).await;
    }
}

pub struct RescheduleAlertOnReminderUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateReminderUseCase> for RescheduleAlertOnReminderUpdated {
    async fn notify(&self, reminder: &PlantReminder, ctx: &PlantoContext) {
        schedule_stored_reminder(&reminder.id, ctx).await;
    }
}

pub struct CancelAlertOnReminderDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteReminderUseCase> for CancelAlertOnReminderDeleted {
    async fn notify(&self, reminder: &Option<PlantReminder>, ctx: &PlantoContext) {
        if let Some(reminder) = reminder {
            ctx.notifications.cancel(reminder);
        }
    }
}

pub struct CancelAlertsOnRemindersDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteRemindersAtUseCase> for CancelAlertsOnRemindersDeleted {
    async fn notify(&self, reminders: &Vec<PlantReminder>, ctx: &PlantoContext) {
        if !reminders.is_empty() {
            ctx.notifications.cancel_many(reminders);
        }
    }
}

pub struct CancelAlertsOnRemindersCleared;

#[async_trait::async_trait(?Send)]
impl Subscriber<ClearRemindersUseCase> for CancelAlertsOnRemindersCleared {
    async fn notify(&self, reminders: &Vec<PlantReminder>, ctx: &PlantoContext) {
        if !reminders.is_empty() {
            ctx.notifications.cancel_many(reminders);
        }
    }
}
