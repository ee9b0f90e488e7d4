//! In-memory `EventApi` for page tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

use crate::api::EventApi;
use crate::error::{MeetupsError, MeetupsResult};
use crate::event::{Event, NewEvent};

#[derive(Clone)]
pub(crate) enum Failure {
    Status(u16, Option<&'static str>),
    Decode,
}

impl Failure {
    fn to_error(&self) -> MeetupsError {
        match self {
            Failure::Status(status, message) => MeetupsError::Status {
                status: *status,
                message: message.map(str::to_string),
            },
            Failure::Decode => MeetupsError::Decode("expected value at line 1 column 1".into()),
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    events: Mutex<Vec<Event>>,
    failure: Mutex<Option<Failure>>,
    gate: Option<Arc<Notify>>,
    pub(crate) requests: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn with_events(events: Vec<Event>) -> Self {
        FakeApi {
            events: Mutex::new(events),
            ..Default::default()
        }
    }

    /// Every request waits for `gate` to be notified before answering.
    pub(crate) fn gated(gate: Arc<Notify>) -> Self {
        FakeApi {
            gate: Some(gate),
            ..Default::default()
        }
    }

    pub(crate) fn fail_with(&self, failure: Failure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    pub(crate) fn stored(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    async fn enter(&self) -> MeetupsResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.failure.lock().unwrap().as_ref() {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

pub(crate) fn sample_event(id: &str, slug: &str, title: &str) -> Event {
    Event {
        id: id.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        description: None,
        location: None,
        date: None,
        time: None,
        image: None,
        image_small: None,
        modal_image: None,
    }
}

impl EventApi for FakeApi {
    async fn list(&self) -> MeetupsResult<Vec<Event>> {
        self.enter().await?;
        Ok(self.stored())
    }

    async fn get_by_slug(&self, slug: &str) -> MeetupsResult<Event> {
        self.enter().await?;
        self.stored()
            .into_iter()
            .find(|e| e.slug == slug)
            .ok_or(MeetupsError::Status {
                status: 404,
                message: Some("Event not found".into()),
            })
    }

    async fn create(&self, payload: &NewEvent) -> MeetupsResult<Event> {
        self.enter().await?;
        let mut events = self.events.lock().unwrap();
        let id = (events.len() + 1).to_string();
        let slug = payload.title.to_lowercase().replace(' ', "-");
        let event = Event {
            id,
            slug,
            title: payload.title.clone(),
            description: Some(payload.description.clone()),
            location: Some(payload.location.clone()),
            date: Some(payload.date.clone()),
            time: Some(payload.time.clone()),
            image: Some(payload.image.clone()),
            image_small: Some(payload.image_small.clone()),
            modal_image: Some(payload.modal_image.clone()),
        };
        events.push(event.clone());
        Ok(event)
    }

    async fn delete_by_id(&self, id: &str) -> MeetupsResult<()> {
        self.enter().await?;
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(MeetupsError::Status {
                status: 404,
                message: Some("Event not found".into()),
            });
        }
        Ok(())
    }
}
