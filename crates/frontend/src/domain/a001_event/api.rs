use contracts::domain::{Event, OrganiserId};
use gloo_timers::future::TimeoutFuture;

use crate::shared::demo::DEMO;

/// Получить список мероприятий (опционально в рамках организатора)
pub async fn fetch_events(organiser: Option<OrganiserId>) -> Result<Vec<Event>, String> {
    TimeoutFuture::new(150).await;
    Ok(DEMO.events_for(organiser))
}
