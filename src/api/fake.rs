//! In-memory stand-in for the activities server, used by unit tests.
//!
//! Follows the server's rules closely enough for the view logic: unknown
//! activities are 404, duplicate signups are 400, full activities are 400,
//! removing someone who is not on the roster is 404.

use crate::api::backend::ActivityApi;
use crate::domain::{Activity, ActivityCatalog, BoardError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// One call observed by the fake, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch,
    SignUp { activity: String, email: String },
    Remove { activity: String, email: String },
}

#[derive(Debug, Default)]
pub struct FakeApi {
    activities: Mutex<Vec<Activity>>,
    calls: Mutex<Vec<Call>>,
    offline: AtomicBool,
}

impl FakeApi {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: Mutex::new(activities),
            ..Self::default()
        }
    }

    /// The single-activity catalog used throughout the tests.
    pub fn with_chess_club(participants: &[&str]) -> Self {
        Self::new(vec![chess_club(10, participants)])
    }

    /// Makes every subsequent call fail at the transport level.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls that mutate server state.
    pub fn mutation_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| !matches!(c, Call::Fetch))
            .count()
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.activities
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.name == activity)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }

    /// Adds a participant behind the client's back, as another user would.
    pub fn enroll(&self, activity: &str, email: &str) {
        let mut activities = self.activities.lock().unwrap();
        if let Some(a) = activities.iter_mut().find(|a| a.name == activity) {
            a.participants.push(email.to_string());
        }
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err(BoardError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

pub fn chess_club(max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        name: "Chess Club".to_string(),
        description: "d".to_string(),
        schedule: "Mon".to_string(),
        max_participants,
        participants: participants.iter().map(|p| (*p).to_string()).collect(),
    }
}

fn rejected(status: u16, detail: &str) -> BoardError {
    BoardError::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

#[async_trait]
impl ActivityApi for FakeApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog> {
        self.record(Call::Fetch)?;
        Ok(ActivityCatalog::new(self.activities.lock().unwrap().clone()))
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<String> {
        self.record(Call::SignUp {
            activity: activity.to_string(),
            email: email.to_string(),
        })?;

        let mut activities = self.activities.lock().unwrap();
        let entry = activities
            .iter_mut()
            .find(|a| a.name == activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;

        if entry.has_participant(email) {
            return Err(rejected(400, "Student is already signed up"));
        }
        if entry.spots_left() <= 0 {
            return Err(rejected(400, "Activity full"));
        }

        entry.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity}"))
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<String> {
        self.record(Call::Remove {
            activity: activity.to_string(),
            email: email.to_string(),
        })?;

        let mut activities = self.activities.lock().unwrap();
        let entry = activities
            .iter_mut()
            .find(|a| a.name == activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;

        let before = entry.participants.len();
        entry.participants.retain(|p| p != email);
        if entry.participants.len() == before {
            return Err(rejected(404, "Participant not found"));
        }

        Ok(format!("Removed {email} from {activity}"))
    }
}
