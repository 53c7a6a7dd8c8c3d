//! Component capability contract and host container.

use crate::store::project_store::ProjectStore;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Where a component element is inserted relative to the host's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// Prepended as the first child.
    AfterBegin,
    /// Appended as the last child.
    #[default]
    BeforeEnd,
}

impl InsertPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AfterBegin => "afterbegin",
            Self::BeforeEnd => "beforeend",
        }
    }
}

impl Display for InsertPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mount description shared by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentConfig {
    /// Id of the template whose content is cloned.
    pub template_id: String,
    /// Id of the container the element is inserted into.
    pub host_id: String,
    pub insert_position: InsertPosition,
    /// Id assigned to the cloned element, if any.
    pub element_id: Option<String>,
}

impl ComponentConfig {
    pub fn new(template_id: impl Into<String>, host_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            host_id: host_id.into(),
            insert_position: InsertPosition::default(),
            element_id: None,
        }
    }

    pub fn with_position(mut self, insert_position: InsertPosition) -> Self {
        self.insert_position = insert_position;
        self
    }

    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }
}

/// Capability interface implemented by every UI component.
pub trait Component {
    fn config(&self) -> &ComponentConfig;

    /// Wires the component to the store it reads from or writes to.
    fn configure(&mut self, store: &Arc<ProjectStore>);

    /// Fills static content such as headings and element ids.
    fn render_content(&mut self);
}

/// Ordered record of the elements attached to one host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContainer {
    id: String,
    children: Vec<String>,
}

impl HostContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Inserts the component's element (or its template id when it has no
    /// element id) at the configured position.
    ///
    /// Returns `false` without inserting when the component targets another host.
    pub fn attach(&mut self, component: &impl Component) -> bool {
        let config = component.config();
        if config.host_id != self.id {
            return false;
        }
        let element = config
            .element_id
            .clone()
            .unwrap_or_else(|| config.template_id.clone());
        match config.insert_position {
            InsertPosition::AfterBegin => self.children.insert(0, element),
            InsertPosition::BeforeEnd => self.children.push(element),
        }
        true
    }

    /// Attached element ids, first child first.
    pub fn children(&self) -> &[String] {
        &self.children
    }
}
