//! Core state and validation for the project board.
//! Views and entry points read projects only through `ProjectStore` snapshots.

pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, IsolatedPanic, LogSettings};
pub use model::project::{Project, ProjectId, ProjectStatus, ProjectStatusParseError};
pub use store::project_store::{Listener, ListenerHandle, ProjectStore};
pub use validation::form::{
    FieldRules, FormField, FormRules, InputError, ProjectDraft, ProjectInputForm,
    INVALID_INPUT_MESSAGE,
};
pub use validation::rules::{validate, Validatable, ValidationValue};
pub use view::component::{Component, ComponentConfig, HostContainer, InsertPosition};
pub use view::project_list::ProjectListView;
