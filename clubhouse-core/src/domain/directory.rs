use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::activity::{Activity, ActivitySeed};
use super::seed::default_seed;
use crate::error::{DirectoryError, Result, SeedError};

/// Whether enroll checks the roster against `max_participants`.
///
/// The historical behaviour treats capacity as informational only, so
/// [`CapacityPolicy::Informational`] is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Informational,
    Enforce,
}

struct ActivityEntry {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Mutex<Vec<String>>,
}

impl ActivityEntry {
    fn snapshot(&self) -> Activity {
        Activity {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.lock().clone(),
        }
    }
}

/// In-memory directory of activities keyed by name.
///
/// The set of activities is fixed at construction. Each roster has its own
/// lock, and every enroll/remove performs its membership check and mutation
/// under that lock, so concurrent callers cannot both enroll the same email
/// or both remove it.
pub struct ActivityDirectory {
    entries: Vec<ActivityEntry>,
    index: HashMap<String, usize>,
    capacity: CapacityPolicy,
}

impl std::fmt::Debug for ActivityDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityDirectory")
            .field("activities", &self.entries.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::build(default_seed())
    }
}

impl ActivityDirectory {
    /// Build a directory from seeds, rejecting empty names, duplicate
    /// activities, zero capacities and duplicate participants.
    pub fn from_seeds<I>(seeds: I) -> std::result::Result<Self, SeedError>
    where
        I: IntoIterator<Item = ActivitySeed>,
    {
        let seeds: Vec<ActivitySeed> = seeds.into_iter().collect();
        let mut names = HashSet::with_capacity(seeds.len());

        for seed in &seeds {
            if seed.name.trim().is_empty() {
                return Err(SeedError::EmptyName);
            }
            if !names.insert(seed.name.as_str()) {
                return Err(SeedError::DuplicateActivity(seed.name.clone()));
            }
            if seed.max_participants == 0 {
                return Err(SeedError::ZeroCapacity(seed.name.clone()));
            }

            let mut seen = HashSet::with_capacity(seed.participants.len());
            for email in &seed.participants {
                if !seen.insert(email.as_str()) {
                    return Err(SeedError::DuplicateParticipant {
                        activity: seed.name.clone(),
                        email: email.clone(),
                    });
                }
            }
        }

        Ok(Self::build(seeds))
    }

    fn build(seeds: Vec<ActivitySeed>) -> Self {
        let mut entries = Vec::with_capacity(seeds.len());
        let mut index = HashMap::with_capacity(seeds.len());

        for seed in seeds {
            index.insert(seed.name.clone(), entries.len());
            entries.push(ActivityEntry {
                name: seed.name,
                description: seed.description,
                schedule: seed.schedule,
                max_participants: seed.max_participants,
                participants: Mutex::new(seed.participants),
            });
        }

        Self {
            entries,
            index,
            capacity: CapacityPolicy::default(),
        }
    }

    pub fn with_capacity_policy(mut self, capacity: CapacityPolicy) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Activity names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    fn entry(&self, activity_name: &str) -> Result<&ActivityEntry> {
        self.index
            .get(activity_name)
            .map(|&slot| &self.entries[slot])
            .ok_or_else(|| DirectoryError::ActivityNotFound {
                activity: activity_name.to_string(),
            })
    }

    /// Every activity with its current roster, in seed order.
    pub fn list_all(&self) -> DirectorySnapshot {
        DirectorySnapshot {
            activities: self
                .entries
                .iter()
                .map(|entry| (entry.name.clone(), entry.snapshot()))
                .collect(),
        }
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.entry(activity_name).ok().map(ActivityEntry::snapshot)
    }

    pub fn participant_count(&self, activity_name: &str) -> Option<usize> {
        self.entry(activity_name)
            .ok()
            .map(|entry| entry.participants.lock().len())
    }

    /// Append `email` to the activity's roster.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<Enrollment> {
        let entry = self.entry(activity_name)?;
        let mut participants = entry.participants.lock();

        if participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadyRegistered {
                activity: entry.name.clone(),
                email: email.to_string(),
            });
        }

        if self.capacity == CapacityPolicy::Enforce
            && participants.len() >= entry.max_participants as usize
        {
            return Err(DirectoryError::ActivityFull {
                activity: entry.name.clone(),
                capacity: entry.max_participants,
            });
        }

        participants.push(email.to_string());
        let roster_size = participants.len();
        drop(participants);

        debug!(
            activity = %entry.name,
            email = %email,
            roster_size,
            "participant enrolled"
        );

        Ok(Enrollment {
            activity: entry.name.clone(),
            email: email.to_string(),
            roster_size,
        })
    }

    /// Remove `email` from the activity's roster, keeping the order of the
    /// remaining participants.
    pub fn remove(&self, activity_name: &str, email: &str) -> Result<Removal> {
        let entry = self.entry(activity_name)?;
        let mut participants = entry.participants.lock();

        let Some(position) = participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::ParticipantNotFound {
                activity: entry.name.clone(),
                email: email.to_string(),
            });
        };

        participants.remove(position);
        let roster_size = participants.len();
        drop(participants);

        debug!(
            activity = %entry.name,
            email = %email,
            roster_size,
            "participant removed"
        );

        Ok(Removal {
            activity: entry.name.clone(),
            email: email.to_string(),
            roster_size,
        })
    }
}

/// Outcome of a successful enroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: String,
    pub email: String,
    pub roster_size: usize,
}

impl Enrollment {
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity)
    }
}

/// Outcome of a successful remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub activity: String,
    pub email: String,
    pub roster_size: usize,
}

impl Removal {
    pub fn message(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity)
    }
}

/// Point-in-time copy of the directory. Serializes as a JSON object mapping
/// activity name to record, in seed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    activities: Vec<(String, Activity)>,
}

impl DirectorySnapshot {
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|(name, _)| name == activity_name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.activities
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }
}

impl Serialize for DirectorySnapshot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.activities.iter().map(|(name, activity)| (name, activity)),
        )
    }
}
