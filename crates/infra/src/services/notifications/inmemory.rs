use super::{INotificationService, NotificationError};
use planto_domain::{AlertRequest, AuthorizationOptions, AuthorizationStatus, ID};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

struct PendingAlert {
    alert: AlertRequest,
    /// Distinguishes this registration from a later one with the same id
    registration: u64,
    timer: JoinHandle<()>,
}

struct CenterState {
    status: AuthorizationStatus,
    pending: HashMap<ID, PendingAlert>,
    delivered: Vec<AlertRequest>,
    authorization_requests: usize,
    requested_options: Option<AuthorizationOptions>,
    registrations: u64,
}

/// Notification service that keeps alerts in process and delivers them
/// with tokio timers. Delivery is logged and recorded so that it can be
/// inspected.
pub struct InMemoryNotificationCenter {
    state: Arc<Mutex<CenterState>>,
    grant_on_request: bool,
}

impl InMemoryNotificationCenter {
    /// `grant_on_request` is the answer of the user the first time
    /// permission is requested
    pub fn new(grant_on_request: bool) -> Self {
        Self::with_status(AuthorizationStatus::NotDetermined, grant_on_request)
    }

    pub fn with_status(status: AuthorizationStatus, grant_on_request: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(CenterState {
                status,
                pending: HashMap::new(),
                delivered: Vec::new(),
                authorization_requests: 0,
                requested_options: None,
                registrations: 0,
            })),
            grant_on_request,
        }
    }

    pub fn pending_alerts(&self) -> Vec<AlertRequest> {
        let state = self.state.lock().unwrap();
        state.pending.values().map(|p| p.alert.clone()).collect()
    }

    pub fn pending_alert(&self, id: &ID) -> Option<AlertRequest> {
        let state = self.state.lock().unwrap();
        state.pending.get(id).map(|p| p.alert.clone())
    }

    pub fn delivered_alerts(&self) -> Vec<AlertRequest> {
        self.state.lock().unwrap().delivered.clone()
    }

    /// Number of times the user has actually been asked for permission
    pub fn authorization_requests(&self) -> usize {
        self.state.lock().unwrap().authorization_requests
    }

    /// What was asked for the last time the user was prompted
    pub fn requested_authorization_options(&self) -> Option<AuthorizationOptions> {
        self.state.lock().unwrap().requested_options
    }
}

fn deliver(state: &Mutex<CenterState>, id: ID, registration: u64) {
    let mut state = state.lock().unwrap();
    let is_current = state
        .pending
        .get(&id)
        .map(|p| p.registration == registration)
        .unwrap_or(false);
    if !is_current {
        return;
    }
    if let Some(pending) = state.pending.remove(&id) {
        info!(
            "Delivering alert {}: {} - {}",
            id, pending.alert.title, pending.alert.body
        );
        state.delivered.push(pending.alert);
    }
}

#[async_trait::async_trait]
impl INotificationService for InMemoryNotificationCenter {
    async fn check_authorization_status(&self) -> AuthorizationStatus {
        self.state.lock().unwrap().status
    }

    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, NotificationError> {
        let mut state = self.state.lock().unwrap();
        if state.status.is_decided() {
            return Ok(state.status == AuthorizationStatus::Granted);
        }
        if !options.alert {
            return Err(NotificationError::Authorization(
                "watering alerts can not be shown without the alert option".into(),
            ));
        }
        state.authorization_requests += 1;
        state.requested_options = Some(options);
        state.status = if self.grant_on_request {
            AuthorizationStatus::Granted
        } else {
            AuthorizationStatus::Denied
        };
        Ok(self.grant_on_request)
    }

    async fn register(&self, alert: AlertRequest) -> Result<(), NotificationError> {
        let mut state = self.state.lock().unwrap();
        if state.status == AuthorizationStatus::Denied {
            return Err(NotificationError::PermissionDenied);
        }

        state.registrations += 1;
        let registration = state.registrations;
        let id = alert.id;
        let fire_delay = Duration::from_secs(alert.fire_delay_secs);
        let timer_state = self.state.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(fire_delay).await;
            deliver(&timer_state, id, registration);
        });

        let replaced = state.pending.insert(
            id,
            PendingAlert {
                alert,
                registration,
                timer,
            },
        );
        if let Some(replaced) = replaced {
            replaced.timer.abort();
        }
        Ok(())
    }

    async fn cancel(&self, ids: &[ID]) {
        let mut state = self.state.lock().unwrap();
        for id in ids {
            if let Some(pending) = state.pending.remove(id) {
                pending.timer.abort();
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn alert(id: ID, fire_delay_secs: u64) -> AlertRequest {
        AlertRequest {
            id,
            title: "Planto".into(),
            body: AlertRequest::watering_body("Pothos"),
            fire_delay_secs,
        }
    }

    #[tokio::test]
    async fn registering_same_id_replaces_pending_alert() {
        let center = InMemoryNotificationCenter::new(true);
        let id = ID::new();
        center.register(alert(id, 86_400)).await.unwrap();
        center.register(alert(id, 604_800)).await.unwrap();

        let pending = center.pending_alerts();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].fire_delay_secs, 604_800);
    }

    #[tokio::test]
    async fn cancel_removes_pending_alert() {
        let center = InMemoryNotificationCenter::new(true);
        let id = ID::new();
        center.register(alert(id, 86_400)).await.unwrap();
        center.cancel(&[id, ID::new()]).await;

        assert!(center.pending_alerts().is_empty());
    }

    #[tokio::test]
    async fn only_asks_user_once() {
        let center = InMemoryNotificationCenter::new(false);
        assert_eq!(
            center.check_authorization_status().await,
            AuthorizationStatus::NotDetermined
        );
        assert_eq!(
            center.request_authorization(Default::default()).await,
            Ok(false)
        );
        assert_eq!(
            center.request_authorization(Default::default()).await,
            Ok(false)
        );
        assert_eq!(center.authorization_requests(), 1);
        assert_eq!(
            center.check_authorization_status().await,
            AuthorizationStatus::Denied
        );
    }

    #[tokio::test]
    async fn prompt_without_alert_option_is_refused() {
        let center = InMemoryNotificationCenter::new(true);
        let options = AuthorizationOptions {
            alert: false,
            ..Default::default()
        };

        assert!(center.request_authorization(options).await.is_err());
        assert_eq!(center.authorization_requests(), 0);
        assert_eq!(center.requested_authorization_options(), None);
        assert_eq!(
            center.check_authorization_status().await,
            AuthorizationStatus::NotDetermined
        );
    }

    #[tokio::test]
    async fn rejects_alerts_when_denied() {
        let center = InMemoryNotificationCenter::with_status(AuthorizationStatus::Denied, true);
        assert_eq!(
            center.register(alert(ID::new(), 5)).await,
            Err(NotificationError::PermissionDenied)
        );
        assert!(center.pending_alerts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_alert_when_timer_fires() {
        let center = InMemoryNotificationCenter::new(true);
        let id = ID::new();
        center.register(alert(id, 5)).await.unwrap();

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(center.delivered_alerts().is_empty());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(center.pending_alerts().is_empty());
        let delivered = center.delivered_alerts();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].id, id);
    }

    #[tokio::test(start_paused = true)]
    async fn replaced_alert_is_not_delivered_at_old_time() {
        let center = InMemoryNotificationCenter::new(true);
        let id = ID::new();
        center.register(alert(id, 5)).await.unwrap();
        center.register(alert(id, 60)).await.unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(center.delivered_alerts().is_empty());
        assert!(center.pending_alert(&id).is_some());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(center.delivered_alerts().len(), 1);
    }
}
