//! Activity domain model and the server-provided catalog.
//!
//! An [`Activity`] is a schedulable offering with a capacity and a roster of
//! participant emails. The [`ActivityCatalog`] is the full set of activities
//! returned by `GET /activities`, kept in the order the server listed them.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single activity as reported by the server.
///
/// `name` is the catalog key and unique within a catalog. Participants keep the
/// server order; duplicates are not expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity: `max_participants` minus the roster size.
    ///
    /// Negative when the activity is over-enrolled; the value is never clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_board::domain::Activity;
    ///
    /// let activity = Activity {
    ///     name: "Chess Club".to_string(),
    ///     description: "d".to_string(),
    ///     schedule: "Mon".to_string(),
    ///     max_participants: 1,
    ///     participants: vec!["a@x.com".to_string(), "b@x.com".to_string()],
    /// };
    /// assert_eq!(activity.spots_left(), -1);
    /// ```
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    /// Whether `email` is currently on the roster.
    #[must_use]
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Wire shape of one catalog entry; the name lives in the enclosing map key.
#[derive(Debug, Deserialize)]
struct ActivityDetails {
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

/// Snapshot of every activity the server knows about.
///
/// Replaced wholesale on every fetch. Iteration order is the key order of the
/// JSON document, which is the order the activities are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Builds a catalog from activities in display order.
    ///
    /// A later activity with an already-seen name replaces the earlier one in
    /// place, matching how a JSON object treats duplicate keys.
    #[must_use]
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut catalog = Self::default();
        for activity in activities {
            catalog.insert(activity);
        }
        catalog
    }

    fn insert(&mut self, activity: Activity) {
        if let Some(existing) = self.activities.iter_mut().find(|a| a.name == activity.name) {
            *existing = activity;
        } else {
            self.activities.push(activity);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Looks up an activity by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Activity at a display position.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Activity names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = ActivityCatalog::default();
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    catalog.insert(Activity {
                        name,
                        description: details.description,
                        schedule: details.schedule,
                        max_participants: details.max_participants,
                        participants: details.participants,
                    });
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
