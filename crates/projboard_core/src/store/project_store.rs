//! Observer-style project store.
//!
//! # Responsibility
//! - Append projects and notify listeners in registration order.
//! - Hand out unsubscribe handles for listeners owned by short-lived views.
//!
//! # Invariants
//! - Every append queues its own snapshot; snapshots are delivered one at a
//!   time, in append order, by whichever thread holds the notify lock.
//! - The state lock is never held while a listener runs, so listeners may read
//!   the store, (un)subscribe, or add projects.
//! - A project added from inside a listener is delivered after the current
//!   snapshot has reached every listener.
//! - Each listener receives its own `Vec<Project>`; changing it cannot affect
//!   other listeners or later snapshots.
//! - A panicking listener is isolated: it is logged and the remaining listeners
//!   still run. The appended project stays in the store.
//! - Removing a listener takes effect from the next snapshot.

use crate::logging::run_isolated;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, error, info};
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

/// Callback invoked with a fresh snapshot after every store mutation.
pub type Listener = Box<dyn FnMut(Vec<Project>) + Send + 'static>;

type SharedListener = Arc<Mutex<Listener>>;

static GLOBAL_STORE: Lazy<Arc<ProjectStore>> = Lazy::new(|| Arc::new(ProjectStore::new()));

/// Token returned by [`ProjectStore::add_listener`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerHandle(u64);

impl Display for ListenerHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

struct RegisteredListener {
    handle: ListenerHandle,
    callback: SharedListener,
}

#[derive(Default)]
struct StoreState {
    projects: Vec<Project>,
    listeners: Vec<RegisteredListener>,
    next_listener_id: u64,
    pending: VecDeque<Vec<Project>>,
    notifier: Option<ThreadId>,
}

/// Single source of truth for the project collection.
///
/// Build one with [`ProjectStore::new`] and share it through `Arc`, or use the
/// lazily created process-wide [`ProjectStore::instance`].
#[derive(Default)]
pub struct ProjectStore {
    state: Mutex<StoreState>,
    notify: Mutex<()>,
}

impl ProjectStore {
    /// Creates an empty store with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide store, creating it on first call.
    ///
    /// Initialization is atomic: concurrent first callers observe the same
    /// instance.
    pub fn instance() -> Arc<ProjectStore> {
        Arc::clone(&GLOBAL_STORE)
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// Input is accepted as-is; callers validate before calling.
    /// Returns the generated project id once its snapshot has been delivered,
    /// or immediately when called from inside a listener.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id();

        {
            let mut state = self.lock_state();
            state.projects.push(project);
            let snapshot = state.projects.clone();
            state.pending.push_back(snapshot);
            info!(
                "event=project_added module=store status=ok project_id={} people={} total={}",
                id,
                people,
                state.projects.len()
            );
            if state.notifier == Some(thread::current().id()) {
                return id;
            }
        }

        self.deliver_pending();
        id
    }

    /// Registers a listener called after every future mutation.
    ///
    /// The same closure logic may be registered more than once; each
    /// registration gets its own handle and is called separately.
    pub fn add_listener<F>(&self, callback: F) -> ListenerHandle
    where
        F: FnMut(Vec<Project>) + Send + 'static,
    {
        let mut state = self.lock_state();
        let handle = ListenerHandle(state.next_listener_id);
        state.next_listener_id += 1;
        let callback: Listener = Box::new(callback);
        state.listeners.push(RegisteredListener {
            handle,
            callback: Arc::new(Mutex::new(callback)),
        });
        debug!(
            "event=listener_added module=store status=ok listener={} count={}",
            handle,
            state.listeners.len()
        );
        handle
    }

    /// Unregisters a listener.
    ///
    /// Returns `false` when the handle is unknown or already removed.
    pub fn remove_listener(&self, handle: ListenerHandle) -> bool {
        let mut state = self.lock_state();
        let before = state.listeners.len();
        state.listeners.retain(|listener| listener.handle != handle);
        let removed = state.listeners.len() != before;
        if removed {
            debug!(
                "event=listener_removed module=store status=ok listener={} count={}",
                handle,
                state.listeners.len()
            );
        }
        removed
    }

    /// Returns a copy of all projects in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.lock_state().projects.clone()
    }

    /// Returns copies of the projects currently in `status`.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.lock_state()
            .projects
            .iter()
            .filter(|project| project.has_status(status))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock_state().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.lock_state().listeners.len()
    }

    /// Drains queued snapshots, including ones queued by other threads while
    /// this one waited for its turn.
    fn deliver_pending(&self) {
        let _turn = self.notify.lock().unwrap_or_else(PoisonError::into_inner);
        self.lock_state().notifier = Some(thread::current().id());

        loop {
            let (snapshot, listeners) = {
                let mut state = self.lock_state();
                let Some(snapshot) = state.pending.pop_front() else {
                    state.notifier = None;
                    break;
                };
                let listeners: Vec<(ListenerHandle, SharedListener)> = state
                    .listeners
                    .iter()
                    .map(|listener| (listener.handle, Arc::clone(&listener.callback)))
                    .collect();
                (snapshot, listeners)
            };

            for (handle, callback) in &listeners {
                let copy = snapshot.clone();
                let outcome = run_isolated(|| {
                    let mut callback = callback.lock().unwrap_or_else(PoisonError::into_inner);
                    (&mut **callback)(copy)
                });
                if let Err(panic) = outcome {
                    error!(
                        "event=listener_failed module=store status=error listener={} location={} total={}",
                        handle,
                        panic.location,
                        snapshot.len()
                    );
                }
            }
            debug!(
                "event=listeners_notified module=store status=ok count={} total={}",
                listeners.len(),
                snapshot.len()
            );
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        // Listeners never run under this lock, so poisoning cannot come from
        // them; recovered state is still a valid append-only sequence.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectStore;
    use std::sync::{Arc, Mutex};

    #[test]
    fn handles_are_distinct_per_registration() {
        let store = ProjectStore::new();
        let first = store.add_listener(|_| {});
        let second = store.add_listener(|_| {});
        assert_ne!(first, second);
        assert_eq!(store.listener_count(), 2);
    }

    #[test]
    fn remove_listener_is_idempotent() {
        let store = ProjectStore::new();
        let handle = store.add_listener(|_| {});
        assert!(store.remove_listener(handle));
        assert!(!store.remove_listener(handle));
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let store = ProjectStore::new();
        let calls = Arc::new(Mutex::new(0_usize));
        let sink = Arc::clone(&calls);
        let handle = store.add_listener(move |_| *sink.lock().unwrap() += 1);

        store.add_project("a", "first one", 1);
        store.remove_listener(handle);
        store.add_project("b", "second one", 2);

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn listener_can_unsubscribe_itself_mid_notification() {
        let store = Arc::new(ProjectStore::new());
        let calls = Arc::new(Mutex::new(0_usize));
        let handle_slot = Arc::new(Mutex::new(None));

        let weak = Arc::downgrade(&store);
        let sink = Arc::clone(&calls);
        let slot = Arc::clone(&handle_slot);
        let handle = store.add_listener(move |_| {
            *sink.lock().unwrap() += 1;
            if let (Some(store), Some(handle)) = (weak.upgrade(), *slot.lock().unwrap()) {
                store.remove_listener(handle);
            }
        });
        *handle_slot.lock().unwrap() = Some(handle);

        store.add_project("a", "first one", 1);
        store.add_project("b", "second one", 1);

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn instance_returns_the_same_store() {
        let first = ProjectStore::instance();
        let second = ProjectStore::instance();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
