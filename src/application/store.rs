//! PortalStore - the single writer around the portal snapshot.
//!
//! Holds the current [`PortalSnapshot`] behind a `tokio::sync::RwLock`.
//! Commands take the write lock, compute a new snapshot, persist every
//! collection that changed, then swap. If any write fails, collections
//! already written in that command are restored and the old snapshot stays.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::assistant::ChatMessage;
use crate::domain::budget::BudgetAllocation;
use crate::domain::foundation::{DomainError, IdeaId};
use crate::domain::idea::ProjectIdea;
use crate::domain::project::OfficialProject;
use crate::domain::seed;
use crate::domain::store::{Collection, PortalSnapshot};
use crate::ports::{KeyValueStore, StorageError};

pub struct PortalStore {
    state: RwLock<PortalSnapshot>,
    storage: Arc<dyn KeyValueStore>,
}

impl PortalStore {
    /// Loads every collection from storage.
    ///
    /// Missing or unparsable ideas and projects fall back to the seed
    /// dataset; the other collections start empty.
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let ideas: Vec<ProjectIdea> =
            load_or(&*storage, Collection::ProjectIdeas, seed::project_ideas).await?;
        let projects: Vec<OfficialProject> =
            load_or(&*storage, Collection::OfficialProjects, seed::official_projects).await?;
        let voted: BTreeSet<IdeaId> =
            load_or(&*storage, Collection::VotedIdeas, BTreeSet::new).await?;
        let budget_submissions: Vec<BudgetAllocation> =
            load_or(&*storage, Collection::BudgetSubmissions, Vec::new).await?;
        let chat_history: Vec<ChatMessage> =
            load_or(&*storage, Collection::ChatHistory, Vec::new).await?;

        info!(
            ideas = ideas.len(),
            projects = projects.len(),
            submissions = budget_submissions.len(),
            "portal state loaded"
        );

        Ok(Self {
            state: RwLock::new(PortalSnapshot {
                ideas: Arc::new(ideas),
                projects: Arc::new(projects),
                voted: Arc::new(voted),
                budget_submissions: Arc::new(budget_submissions),
                chat_history: Arc::new(chat_history),
            }),
            storage,
        })
    }

    /// A cheap copy of the current state.
    pub async fn snapshot(&self) -> PortalSnapshot {
        self.state.read().await.clone()
    }

    /// Runs `op` against the current snapshot and commits its result.
    ///
    /// Nothing is committed when `op` fails or when persisting fails.
    pub async fn apply<T, F>(&self, op: F) -> Result<T, DomainError>
    where
        F: FnOnce(&PortalSnapshot) -> Result<(PortalSnapshot, T), DomainError>,
    {
        let mut state = self.state.write().await;
        let (next, value) = op(&state)?;

        let changed = next.changed_since(&state);
        if changed.is_empty() {
            debug!("command left state unchanged");
            return Ok(value);
        }

        self.persist(&state, &next, &changed).await?;
        *state = next;
        Ok(value)
    }

    async fn persist(
        &self,
        previous: &PortalSnapshot,
        next: &PortalSnapshot,
        changed: &[Collection],
    ) -> Result<(), StorageError> {
        for (written, collection) in changed.iter().enumerate() {
            let result = match encode(next, *collection) {
                Ok(value) => self.storage.put(collection.key(), &value).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error!(key = collection.key(), error = %e, "write failed, rolling back");
                self.restore(previous, &changed[..written]).await;
                return Err(e);
            }
        }
        debug!(keys = ?changed.iter().map(Collection::key).collect::<Vec<_>>(), "collections persisted");
        Ok(())
    }

    async fn restore(&self, previous: &PortalSnapshot, collections: &[Collection]) {
        for collection in collections {
            let restored = match encode(previous, *collection) {
                Ok(value) => self.storage.put(collection.key(), &value).await,
                Err(e) => Err(e),
            };
            if let Err(e) = restored {
                error!(key = collection.key(), error = %e, "rollback write failed");
            }
        }
    }
}

async fn load_or<T, F>(
    storage: &dyn KeyValueStore,
    collection: Collection,
    default: F,
) -> Result<T, StorageError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = storage.get(collection.key()).await? else {
        debug!(key = collection.key(), "no stored value, using default");
        return Ok(default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(key = collection.key(), error = %e, "stored value unreadable, using default");
            Ok(default())
        }
    }
}

fn encode(snapshot: &PortalSnapshot, collection: Collection) -> Result<String, StorageError> {
    let result = match collection {
        Collection::ProjectIdeas => to_json(&*snapshot.ideas),
        Collection::OfficialProjects => to_json(&*snapshot.projects),
        Collection::VotedIdeas => to_json(&*snapshot.voted),
        Collection::BudgetSubmissions => to_json(&*snapshot.budget_submissions),
        Collection::ChatHistory => to_json(&*snapshot.chat_history),
    };
    result.map_err(|e| StorageError::SerializationFailed {
        key: collection.key().to_string(),
        reason: e.to_string(),
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}
