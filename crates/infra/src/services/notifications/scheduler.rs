use super::{INotificationService, NotificationError};
use planto_domain::{AlertRequest, AuthorizationStatus, FireDelayPolicy, PlantReminder, ID};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, warn};

type Reply<T> = oneshot::Sender<Result<T, NotificationError>>;

enum AlertOperation {
    RequestPermission(Reply<AuthorizationStatus>),
    Schedule(AlertRequest, Reply<()>),
    Cancel(Vec<ID>, Reply<()>),
    Flush(Reply<()>),
}

/// Handle to the outcome of an operation issued to the `NotificationScheduler`.
///
/// Dropping it is fine, the operation is applied anyway.
pub struct Receipt<T> {
    receiver: oneshot::Receiver<Result<T, NotificationError>>,
}

impl<T> Receipt<T> {
    fn failed(e: NotificationError) -> Self {
        let (sender, receiver) = oneshot::channel();
        let _ = sender.send(Err(e));
        Self { receiver }
    }

    /// Waits until the notification service has answered
    pub async fn outcome(self) -> Result<T, NotificationError> {
        self.receiver
            .await
            .unwrap_or(Err(NotificationError::SchedulerStopped))
    }
}

/// Outcomes of scheduling a batch of reminders, one `Receipt` per reminder.
pub struct BatchReceipt {
    receipts: Vec<(ID, Receipt<()>)>,
}

impl BatchReceipt {
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// The reminders whose alert could not be armed
    pub async fn failures(self) -> Vec<(ID, NotificationError)> {
        let mut failures = Vec::new();
        for (id, receipt) in self.receipts {
            if let Err(e) = receipt.outcome().await {
                failures.push((id, e));
            }
        }
        failures
    }
}

/// Keeps the alerts of the notification service in line with the `PlantReminder`s.
///
/// None of the operations wait for the notification service. Schedules and
/// cancels are queued and applied one at a time, in the order they were issued,
/// by a background task. Failures are logged and reported on the returned `Receipt`, they never
/// fail the caller.
#[derive(Clone)]
pub struct NotificationScheduler {
    sender: mpsc::UnboundedSender<AlertOperation>,
    policy: Arc<FireDelayPolicy>,
    alert_title: String,
}

impl NotificationScheduler {
    /// Spawns the background task, so this needs to be called within a tokio runtime
    pub fn start(
        service: Arc<dyn INotificationService>,
        policy: FireDelayPolicy,
        alert_title: String,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_operations(service, receiver));

        Self {
            sender,
            policy: Arc::new(policy),
            alert_title,
        }
    }

    pub fn alert_for(&self, reminder: &PlantReminder) -> AlertRequest {
        AlertRequest {
            id: reminder.id,
            title: self.alert_title.clone(),
            body: AlertRequest::watering_body(&reminder.plant_name),
            fire_delay_secs: self.policy.fire_delay_secs(&reminder.watering_schedule),
        }
    }

    fn enqueue<T>(
        &self,
        operation: impl FnOnce(Reply<T>) -> AlertOperation,
    ) -> Receipt<T> {
        let (reply, receiver) = oneshot::channel();
        match self.sender.send(operation(reply)) {
            Ok(_) => Receipt { receiver },
            Err(_) => {
                error!("Notification scheduler is not running, dropping alert operation");
                Receipt::failed(NotificationError::SchedulerStopped)
            }
        }
    }

    /// Asks the user for permission to show notifications, unless the user
    /// has already answered. The request runs next to the queue, alerts issued
    /// while the user is asked are applied without waiting for the answer.
    pub fn request_permission(&self) -> Receipt<AuthorizationStatus> {
        self.enqueue(AlertOperation::RequestPermission)
    }

    /// Arms the alert of the reminder. Any pending alert of the same reminder
    /// is replaced.
    pub fn schedule(&self, reminder: &PlantReminder) -> Receipt<()> {
        let alert = self.alert_for(reminder);
        self.enqueue(|reply| AlertOperation::Schedule(alert, reply))
    }

    pub fn cancel(&self, reminder: &PlantReminder) -> Receipt<()> {
        self.cancel_many(std::slice::from_ref(reminder))
    }

    pub fn cancel_many(&self, reminders: &[PlantReminder]) -> Receipt<()> {
        let ids = reminders.iter().map(|r| r.id).collect::<Vec<_>>();
        self.enqueue(|reply| AlertOperation::Cancel(ids, reply))
    }

    /// Schedules every reminder on its own. One failing reminder does not
    /// stop the rest from being scheduled.
    pub fn schedule_all(&self, reminders: &[PlantReminder]) -> BatchReceipt {
        BatchReceipt {
            receipts: reminders
                .iter()
                .map(|reminder| (reminder.id, self.schedule(reminder)))
                .collect(),
        }
    }

    /// Resolves when every schedule and cancel issued before has been applied
    pub async fn flush(&self) {
        let _ = self.enqueue(AlertOperation::Flush).outcome().await;
    }
}

async fn run_operations(
    service: Arc<dyn INotificationService>,
    mut receiver: mpsc::UnboundedReceiver<AlertOperation>,
) {
    while let Some(operation) = receiver.recv().await {
        match operation {
            // The user may take a while to answer, alerts must not wait for that
            AlertOperation::RequestPermission(reply) => {
                let service = service.clone();
                tokio::spawn(async move {
                    let res = request_permission(service.as_ref()).await;
                    let _ = reply.send(res);
                });
            }
            AlertOperation::Schedule(alert, reply) => {
                let res = service.register(alert.clone()).await;
                match &res {
                    Ok(_) => info!(
                        "Scheduled alert for reminder: {} in {} seconds",
                        alert.id, alert.fire_delay_secs
                    ),
                    Err(e) => error!(
                        "Unable to schedule alert for reminder: {}. Err: {}",
                        alert.id, e
                    ),
                }
                let _ = reply.send(res);
            }
            AlertOperation::Cancel(ids, reply) => {
                service.cancel(&ids).await;
                info!("Canceled alerts for reminders: {:?}", ids);
                let _ = reply.send(Ok(()));
            }
            AlertOperation::Flush(reply) => {
                let _ = reply.send(Ok(()));
            }
        }
    }
}

async fn request_permission(
    service: &dyn INotificationService,
) -> Result<AuthorizationStatus, NotificationError> {
    let status = service.check_authorization_status().await;
    if status.is_decided() {
        return Ok(status);
    }

    match service.request_authorization(Default::default()).await {
        Ok(granted) => {
            info!("Notification permission granted? {}", granted);
            if granted {
                Ok(AuthorizationStatus::Granted)
            } else {
                Ok(AuthorizationStatus::Denied)
            }
        }
        Err(e) => {
            warn!("Unable to request notification permission. Err: {}", e);
            Err(e)
        }
    }
}
