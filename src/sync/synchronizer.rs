//! The view synchronizer: owns the view state and executes actions.
//!
//! [`ViewSynchronizer`] is the only writer of [`ViewState`]. Events go through
//! [`handle_event`]; the resulting actions are executed here:
//!
//! - `Request` spawns an independent task that posts an `ApiResponse` event
//! - `ConfirmRemoval` awaits the injected [`Confirm`] capability inline
//! - `ScheduleHide` / `CancelHide` drive [`HideTimers`]
//!
//! Everything that finishes later (responses, timers) arrives on one
//! unbounded channel and is fed back through [`ViewSynchronizer::dispatch`],
//! so state is only ever touched from the task that owns the synchronizer.

use super::confirm::Confirm;
use super::timers::HideTimers;
use crate::api::{ActivityApi, ApiRequest};
use crate::app::{handle_event, Action, Event, ViewState};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

pub struct ViewSynchronizer {
    state: ViewState,
    api: Arc<dyn ActivityApi>,
    confirm: Box<dyn Confirm>,
    timers: HideTimers,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    in_flight: usize,
}

impl ViewSynchronizer {
    /// Creates a synchronizer with its collaborators injected.
    ///
    /// Nothing is fetched yet; call [`refresh`](Self::refresh) once on
    /// startup.
    #[must_use]
    pub fn new(state: ViewState, api: Arc<dyn ActivityApi>, confirm: Box<dyn Confirm>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state,
            api,
            confirm,
            timers: HideTimers::new(),
            events_tx,
            events_rx,
            in_flight: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Number of API requests whose response has not been handled yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handles an event and every follow-up event it produces synchronously.
    ///
    /// # Returns
    ///
    /// `true` if the screen needs to be re-rendered.
    pub async fn dispatch(&mut self, event: Event) -> bool {
        let mut queue = VecDeque::from([event]);
        let mut render = false;

        while let Some(event) = queue.pop_front() {
            match &event {
                Event::HideTimerFired(timer) if !self.timers.forget(*timer) => {
                    tracing::debug!(timer = timer.0, "dropping canceled timer event");
                    continue;
                }
                Event::ApiResponse(_) => self.in_flight = self.in_flight.saturating_sub(1),
                _ => {}
            }

            let (should_render, actions) = handle_event(&mut self.state, &event);
            tracing::debug!(
                action_count = actions.len(),
                should_render = should_render,
                "event handled"
            );
            render |= should_render;

            for action in actions {
                if let Some(follow_up) = self.execute_action(action).await {
                    queue.push_back(follow_up);
                }
            }
        }

        render
    }

    /// Waits for the next response or timer event.
    ///
    /// Returns `None` only if the channel closed, which cannot happen while
    /// the synchronizer holds its own sender.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.events_rx.recv().await
    }

    /// Dispatches incoming events until no request is in flight.
    ///
    /// Hide timers do not count; they keep running after this returns.
    pub async fn settle(&mut self) -> bool {
        let mut render = false;
        while self.in_flight > 0 {
            let Some(event) = self.next_event().await else {
                break;
            };
            render |= self.dispatch(event).await;
        }
        render
    }

    /// Re-fetches the catalog.
    pub async fn refresh(&mut self) -> bool {
        self.dispatch(Event::Refresh).await
    }

    /// Fills in the form and submits it.
    ///
    /// `activity` must be an exact catalog name; any other value leaves the
    /// select on its placeholder and the submission is blocked by validation.
    pub async fn sign_up(&mut self, activity: &str, email: &str) -> bool {
        let mut render = self.dispatch(Event::SetEmail(email.to_string())).await;
        render |= self.dispatch(Event::SetActivity(activity.to_string())).await;
        render | self.dispatch(Event::SubmitSignup).await
    }

    /// Presses the remove control of a participant.
    pub async fn remove_participant(&mut self, activity: &str, email: &str) -> bool {
        self.dispatch(Event::RemoveParticipant {
            activity: activity.to_string(),
            email: email.to_string(),
        })
        .await
    }

    /// Presses the undo button, if one is showing.
    pub async fn undo(&mut self) -> bool {
        self.dispatch(Event::Undo).await
    }

    /// Executes one action, returning an event to handle immediately.
    async fn execute_action(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::Request(request) => {
                self.spawn_request(request);
                None
            }
            Action::ConfirmRemoval {
                activity,
                email,
                prompt,
            } => {
                if self.confirm.confirm(&prompt).await {
                    Some(Event::RemovalConfirmed { activity, email })
                } else {
                    tracing::debug!(activity = %activity, email = %email, "removal declined");
                    None
                }
            }
            Action::ScheduleHide { timer, after } => {
                self.timers.schedule(timer, after, self.events_tx.clone());
                None
            }
            Action::CancelHide(timer) => {
                self.timers.cancel(timer);
                None
            }
        }
    }

    fn spawn_request(&mut self, request: ApiRequest) {
        let span = tracing::debug_span!("api_request", kind = request.kind());
        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        self.in_flight += 1;

        tokio::spawn(
            async move {
                let response = request.execute(api.as_ref()).await;
                tracing::debug!("request finished");
                let _ = events.send(Event::ApiResponse(response));
            }
            .instrument(span),
        );
    }
}
