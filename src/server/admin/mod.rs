//! Explicit admin registry.
//!
//! The admin console is an external collaborator. It is handed an [`AdminSite`] listing the
//! entities it may manage, each with a field-level [`EntityDescriptor`]. Nothing is
//! registered implicitly: the binary builds the site from [`default_descriptors`] at startup
//! and stores it in [`crate::server::model::app::AppState`].

pub mod choice;
pub mod descriptor;

pub use choice::{choices_of, parse_choice, Choice, ChoiceLabel};
pub use descriptor::{EntityDescriptor, FieldDescriptor, FieldKind};

use crate::server::error::admin::AdminError;

/// Entities available to the admin console, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSite {
    entities: Vec<EntityDescriptor>,
}

impl AdminSite {
    /// Builds a site from the given descriptors, rejecting duplicate names.
    pub fn new(descriptors: Vec<EntityDescriptor>) -> Result<Self, AdminError> {
        let mut site = Self {
            entities: Vec::with_capacity(descriptors.len()),
        };

        for descriptor in descriptors {
            site.register(descriptor)?;
        }

        Ok(site)
    }

    /// Adds an entity to the site.
    pub fn register(&mut self, descriptor: EntityDescriptor) -> Result<(), AdminError> {
        if self.get(descriptor.name).is_some() {
            return Err(AdminError::AlreadyRegistered(descriptor.name.to_string()));
        }

        self.entities.push(descriptor);

        Ok(())
    }

    /// Looks an entity up by name.
    pub fn get(&self, name: &str) -> Option<&EntityDescriptor> {
        self.entities.iter().find(|entity| entity.name == name)
    }

    /// Registered entities in registration order.
    pub fn entities(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.iter()
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// The seven campus entities.
impl Default for AdminSite {
    fn default() -> Self {
        Self {
            entities: default_descriptors(),
        }
    }
}

/// Descriptors for every campus entity, in the order the admin console lists them.
pub fn default_descriptors() -> Vec<EntityDescriptor> {
    vec![
        descriptor::user(),
        descriptor::venue(),
        descriptor::resource(),
        descriptor::event(),
        descriptor::registration(),
        descriptor::feedback(),
        descriptor::event_success_report(),
    ]
}

/// List label of a success report, which is named after its event.
pub fn report_title(event: &entity::event::Model) -> String {
    format!("Report for: {}", event.title)
}
