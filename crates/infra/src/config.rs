use planto_domain::{CareOptions, FireDelayPolicy, WateringCadences};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Title of every watering alert
    pub alert_title: String,
    /// When set every alert fires after this many seconds instead of
    /// the delay given by the watering schedule. Handy while developing.
    pub debug_fire_delay_secs: Option<u64>,
    /// How the in memory notification center answers when the user is
    /// asked for permission to show notifications
    pub notifications_granted: bool,
    pub watering_cadences: WateringCadences,
    pub care_options: CareOptions,
}

const DEFAULT_PORT: usize = 5000;
const DEFAULT_ALERT_TITLE: &str = "Planto";

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let alert_title = std::env::var("PLANTO_ALERT_TITLE")
            .ok()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ALERT_TITLE.into());

        let debug_fire_delay_secs = match std::env::var("PLANTO_DEBUG_FIRE_DELAY_SECS") {
            Ok(secs) => match secs.parse::<u64>() {
                Ok(secs) => {
                    info!(
                        "Every watering alert is going to fire after {} seconds.",
                        secs
                    );
                    Some(secs)
                }
                Err(_) => {
                    warn!(
                        "The given PLANTO_DEBUG_FIRE_DELAY_SECS: {} is not valid, it will be ignored.",
                        secs
                    );
                    None
                }
            },
            Err(_) => None,
        };

        let notifications_granted = match std::env::var("PLANTO_NOTIFICATIONS_GRANTED") {
            Ok(granted) => match granted.parse::<bool>() {
                Ok(granted) => granted,
                Err(_) => {
                    warn!(
                        "The given PLANTO_NOTIFICATIONS_GRANTED: {} is not valid, falling back to: true.",
                        granted
                    );
                    true
                }
            },
            Err(_) => true,
        };

        Self {
            port,
            alert_title,
            debug_fire_delay_secs,
            notifications_granted,
            watering_cadences: Default::default(),
            care_options: Default::default(),
        }
    }

    pub fn fire_delay_policy(&self) -> FireDelayPolicy {
        let mut policy = FireDelayPolicy::new(self.watering_cadences.clone());
        policy.override_secs = self.debug_fire_delay_secs;
        policy
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in &[
            "PORT",
            "PLANTO_ALERT_TITLE",
            "PLANTO_DEBUG_FIRE_DELAY_SECS",
            "PLANTO_NOTIFICATIONS_GRANTED",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn falls_back_to_defaults() {
        clear_env();
        let config = Config::new();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.alert_title, "Planto");
        assert_eq!(config.debug_fire_delay_secs, None);
        assert!(config.notifications_granted);
        assert_eq!(config.fire_delay_policy().fire_delay_secs("Once a week"), 604_800);
    }

    #[test]
    #[serial]
    fn reads_environment() {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("PLANTO_DEBUG_FIRE_DELAY_SECS", "10");
        std::env::set_var("PLANTO_NOTIFICATIONS_GRANTED", "false");
        let config = Config::new();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.debug_fire_delay_secs, Some(10));
        assert!(!config.notifications_granted);
        assert_eq!(config.fire_delay_policy().fire_delay_secs("Once a week"), 10);
    }

    #[test]
    #[serial]
    fn ignores_invalid_values() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("PLANTO_DEBUG_FIRE_DELAY_SECS", "-3");
        let config = Config::new();
        clear_env();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.debug_fire_delay_secs, None);
    }
}
