//! Container id → widget mapping used to scan the page for work

use crate::host::ElementScope;
use crate::widgets::{WidgetGroup, WidgetKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub container_id: String,
    pub widget: WidgetKind,
}

/// Ordered registry of widget containers
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    entries: Vec<RegistryEntry>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every widget under its default container id
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for widget in WidgetKind::ALL {
            registry.register(widget.container_id(), widget);
        }
        registry
    }

    /// Register a container; returns the widget it replaced, if any
    pub fn register(&mut self, container_id: impl Into<String>, widget: WidgetKind) -> Option<WidgetKind> {
        let container_id = container_id.into();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.container_id == container_id) {
            return Some(std::mem::replace(&mut entry.widget, widget));
        }

        self.entries.push(RegistryEntry { container_id, widget });
        None
    }

    pub fn unregister(&mut self, container_id: &str) -> Option<WidgetKind> {
        let index = self.entries.iter().position(|e| e.container_id == container_id)?;
        Some(self.entries.remove(index).widget)
    }

    pub fn get(&self, container_id: &str) -> Option<WidgetKind> {
        self.entries
            .iter()
            .find(|e| e.container_id == container_id)
            .map(|e| e.widget)
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose container is present in `scope`, in registration order
    pub fn matching<'a, E>(&'a self, scope: &'a E) -> impl Iterator<Item = &'a RegistryEntry> + 'a
    where
        E: ElementScope + ?Sized,
    {
        self.entries
            .iter()
            .filter(move |entry| scope.contains(&entry.container_id))
    }

    /// Like [`WidgetRegistry::matching`], restricted to one page group
    pub fn matching_group<'a, E>(
        &'a self,
        group: WidgetGroup,
        scope: &'a E,
    ) -> impl Iterator<Item = &'a RegistryEntry> + 'a
    where
        E: ElementScope + ?Sized,
    {
        self.matching(scope)
            .filter(move |entry| entry.widget.belongs_to(group))
    }
}
