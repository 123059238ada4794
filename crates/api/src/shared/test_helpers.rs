use planto_domain::CareDetails;
use planto_infra::{Config, InMemoryNotificationCenter, PlantoContext};
use std::sync::Arc;

pub fn setup_context_with_center() -> (PlantoContext, Arc<InMemoryNotificationCenter>) {
    let center = Arc::new(InMemoryNotificationCenter::new(true));
    let mut config = Config::new();
    config.debug_fire_delay_secs = None;
    let ctx = PlantoContext::create(config, center.clone());
    (ctx, center)
}

pub fn care_details(plant_name: &str, watering_schedule: &str) -> CareDetails {
    CareDetails {
        plant_name: plant_name.into(),
        room: "Living Room".into(),
        light: "Partial sun".into(),
        watering_schedule: watering_schedule.into(),
        water_amount: "20-50 ml".into(),
    }
}
