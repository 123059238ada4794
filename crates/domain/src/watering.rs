use serde::{Deserialize, Serialize};

const DAY_SECS: u64 = 24 * 60 * 60;

/// Delay used for cadence labels that are not in the table, i.e. remind tomorrow
pub const DEFAULT_FIRE_DELAY_SECS: u64 = DAY_SECS;
/// No alert is ever armed closer to now than this
pub const MIN_FIRE_DELAY_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringCadence {
    pub label: String,
    pub interval_secs: u64,
}

/// Lookup table from cadence label to the number of seconds until the
/// plant should be watered again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringCadences {
    cadences: Vec<WateringCadence>,
    default_secs: u64,
}

impl WateringCadences {
    pub fn new(cadences: Vec<WateringCadence>, default_secs: u64) -> Self {
        Self {
            cadences,
            default_secs,
        }
    }

    pub fn cadences(&self) -> &[WateringCadence] {
        &self.cadences
    }

    /// Labels are matched ignoring ascii case and surrounding whitespace.
    pub fn interval_secs(&self, label: &str) -> Option<u64> {
        let label = label.trim();
        self.cadences
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(label))
            .map(|c| c.interval_secs)
    }

    pub fn interval_or_default_secs(&self, label: &str) -> u64 {
        self.interval_secs(label).unwrap_or(self.default_secs)
    }
}

impl Default for WateringCadences {
    fn default() -> Self {
        let cadence = |label: &str, days: u64| WateringCadence {
            label: label.into(),
            interval_secs: days * DAY_SECS,
        };
        Self::new(
            vec![
                cadence("Every day", 1),
                cadence("Every 2 days", 2),
                cadence("Every 3 days", 3),
                cadence("Once a week", 7),
                cadence("Every 10 days", 10),
                cadence("Every 2 weeks", 14),
            ],
            DEFAULT_FIRE_DELAY_SECS,
        )
    }
}

/// Decides how many seconds from now the alert for a cadence label fires.
#[derive(Debug, Clone, PartialEq)]
pub struct FireDelayPolicy {
    pub cadences: WateringCadences,
    /// Replaces whatever the cadence maps to. Used to get alerts within
    /// seconds while trying things out.
    pub override_secs: Option<u64>,
    pub min_secs: u64,
}

impl FireDelayPolicy {
    pub fn new(cadences: WateringCadences) -> Self {
        Self {
            cadences,
            override_secs: None,
            min_secs: MIN_FIRE_DELAY_SECS,
        }
    }

    pub fn fire_delay_secs(&self, watering_schedule: &str) -> u64 {
        let delay = match self.override_secs {
            Some(secs) => secs,
            None => self.cadences.interval_or_default_secs(watering_schedule),
        };
        std::cmp::max(delay, self.min_secs)
    }
}

impl Default for FireDelayPolicy {
    fn default() -> Self {
        Self::new(WateringCadences::default())
    }
}
