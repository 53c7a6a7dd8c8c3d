//! Status-filtered project list view.
//!
//! # Invariants
//! - Only projects whose status matches the view's status are rendered.
//! - Each snapshot replaces the rendered items entirely.
//! - Dropping the view unsubscribes it from the store.

use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::{ListenerHandle, ProjectStore};
use crate::view::component::{Component, ComponentConfig};
use std::sync::{Arc, Mutex, PoisonError};

const LIST_TEMPLATE_ID: &str = "project-list";
const APP_HOST_ID: &str = "app";

struct Subscription {
    store: Arc<ProjectStore>,
    handle: ListenerHandle,
}

/// List of project titles for one status.
pub struct ProjectListView {
    status: ProjectStatus,
    config: ComponentConfig,
    list_id: String,
    heading: String,
    items: Arc<Mutex<Vec<String>>>,
    subscription: Option<Subscription>,
}

impl ProjectListView {
    pub fn new(status: ProjectStatus) -> Self {
        let config = ComponentConfig::new(LIST_TEMPLATE_ID, APP_HOST_ID)
            .with_element_id(format!("{}-projects", status.as_str()));
        Self {
            status,
            config,
            list_id: String::new(),
            heading: String::new(),
            items: Arc::new(Mutex::new(Vec::new())),
            subscription: None,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Id of the rendered list element; empty until `render_content` runs.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Heading text; empty until `render_content` runs.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Titles currently rendered, in store order.
    pub fn items(&self) -> Vec<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unsubscribes from the store. Rendered items are kept.
    ///
    /// Returns `false` when the view was not subscribed.
    pub fn detach(&mut self) -> bool {
        match self.subscription.take() {
            Some(subscription) => subscription.store.remove_listener(subscription.handle),
            None => false,
        }
    }
}

impl Component for ProjectListView {
    fn config(&self) -> &ComponentConfig {
        &self.config
    }

    /// Subscribes to `store`, replacing any earlier subscription.
    fn configure(&mut self, store: &Arc<ProjectStore>) {
        self.detach();

        let status = self.status;
        let items = Arc::clone(&self.items);
        let handle = store.add_listener(move |projects: Vec<Project>| {
            let mut rendered = items.lock().unwrap_or_else(PoisonError::into_inner);
            rendered.clear();
            rendered.extend(
                projects
                    .into_iter()
                    .filter(|project| project.has_status(status))
                    .map(|project| project.title().to_string()),
            );
        });
        self.subscription = Some(Subscription {
            store: Arc::clone(store),
            handle,
        });
    }

    fn render_content(&mut self) {
        self.list_id = format!("{}-projects-list", self.status.as_str());
        self.heading = format!("{} PROJECTS", self.status.as_str().to_uppercase());
    }
}

impl Drop for ProjectListView {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectListView;
    use crate::model::project::ProjectStatus;
    use crate::store::project_store::ProjectStore;
    use crate::view::component::Component;
    use std::sync::Arc;

    #[test]
    fn render_content_sets_heading_and_list_id() {
        let mut view = ProjectListView::new(ProjectStatus::Finished);
        view.render_content();

        assert_eq!(view.heading(), "FINISHED PROJECTS");
        assert_eq!(view.list_id(), "finished-projects-list");
        assert_eq!(view.config().element_id.as_deref(), Some("finished-projects"));
    }

    #[test]
    fn reconfigure_keeps_a_single_subscription() {
        let store = Arc::new(ProjectStore::new());
        let mut view = ProjectListView::new(ProjectStatus::Active);
        view.configure(&store);
        view.configure(&store);

        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn drop_unsubscribes() {
        let store = Arc::new(ProjectStore::new());
        {
            let mut view = ProjectListView::new(ProjectStatus::Active);
            view.configure(&store);
            assert_eq!(store.listener_count(), 1);
        }
        assert_eq!(store.listener_count(), 0);
    }
}
