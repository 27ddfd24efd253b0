//! Panel registry.
//!
//! An ordered list of per-child records. The first registered child is the
//! primary surface and never slides; every later child is an auxiliary panel.
//! Panel counts are small, so lookups are linear scans, except for external
//! keys which are indexed.

use slideout_core::alloc::HashMap;

use crate::edge::{Edge, RevealMode};
use crate::error::{Result, SlideError};
use crate::id::{ContainerId, PanelHandle, PanelId, PanelKey, PanelRef};
use crate::view::View;

/// Per-child state.
pub struct PanelRecord {
    id: PanelId,
    key: Option<PanelKey>,
    view: Box<dyn View>,
    pub(crate) edge: Edge,
    pub(crate) mode: RevealMode,
    pub(crate) is_open: bool,
    /// Distance from fully open along the panel's axis, as last applied.
    pub(crate) retraction: f32,
}

impl PanelRecord {
    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn key(&self) -> Option<PanelKey> {
        self.key
    }

    pub fn view(&self) -> &dyn View {
        &*self.view
    }

    pub fn view_mut(&mut self) -> &mut dyn View {
        &mut *self.view
    }

    pub fn into_view(self) -> Box<dyn View> {
        self.view
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current retraction: 0 when fully revealed, [`extent`](Self::extent) when hidden.
    pub fn retraction(&self) -> f32 {
        self.retraction
    }

    /// Size along the panel's axis; 0 before an edge is assigned or before layout.
    pub fn extent(&self) -> f32 {
        let size = self.view.size();
        match self.edge {
            Edge::Left | Edge::Right => size.width,
            Edge::Top | Edge::Bottom => size.height,
            Edge::None => 0.0,
        }
    }
}

impl std::fmt::Debug for PanelRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelRecord")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("edge", &self.edge)
            .field("mode", &self.mode)
            .field("is_open", &self.is_open)
            .field("retraction", &self.retraction)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of [`PanelRecord`]s.
pub struct PanelRegistry {
    container: ContainerId,
    records: Vec<PanelRecord>,
    keys: HashMap<PanelKey, PanelId>,
    next_id: u32,
}

impl PanelRegistry {
    pub fn new(container: ContainerId) -> Self {
        Self {
            container,
            records: Vec::new(),
            keys: HashMap::new(),
            next_id: 0,
        }
    }

    /// Append a child. The first child becomes the primary surface.
    pub fn register(&mut self, mut view: Box<dyn View>, key: Option<PanelKey>) -> PanelHandle {
        let id = PanelId(self.next_id);
        self.next_id += 1;

        view.attached_to(self.container, id);
        if let Some(key) = key {
            self.keys.insert(key, id);
        }
        let is_primary = self.records.is_empty();
        self.records.push(PanelRecord {
            id,
            key,
            view,
            edge: Edge::None,
            mode: RevealMode::None,
            is_open: is_primary,
            retraction: 0.0,
        });

        PanelHandle {
            container: self.container,
            panel: id,
        }
    }

    /// Resolve any addressing form to a position in registration order.
    pub fn index_of(&self, target: impl Into<PanelRef>) -> Option<usize> {
        match target.into() {
            PanelRef::Handle(handle) => {
                if handle.container != self.container {
                    tracing::warn!(
                        "Ignoring handle for panel {} from container {}",
                        handle.panel.0,
                        handle.container.as_u64()
                    );
                    return None;
                }
                self.position(handle.panel)
            }
            PanelRef::Index(index) => (index < self.records.len()).then_some(index),
            PanelRef::Key(key) => self.keys.get(&key).and_then(|id| self.position(*id)),
        }
    }

    pub(crate) fn position(&self, id: PanelId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn get(&self, target: impl Into<PanelRef>) -> Option<&PanelRecord> {
        self.index_of(target).map(|i| &self.records[i])
    }

    pub fn get_mut(&mut self, target: impl Into<PanelRef>) -> Option<&mut PanelRecord> {
        self.index_of(target).map(|i| &mut self.records[i])
    }

    pub fn by_id(&self, id: PanelId) -> Option<&PanelRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn by_id_mut(&mut self, id: PanelId) -> Option<&mut PanelRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    pub fn primary(&self) -> Option<&PanelRecord> {
        self.records.first()
    }

    pub fn primary_mut(&mut self) -> Option<&mut PanelRecord> {
        self.records.first_mut()
    }

    /// Borrow the primary surface and an auxiliary panel together.
    pub fn primary_and_panel_mut(
        &mut self,
        id: PanelId,
    ) -> Option<(&mut PanelRecord, &mut PanelRecord)> {
        let (primary, panels) = self.records.split_first_mut()?;
        let panel = panels.iter_mut().find(|r| r.id == id)?;
        Some((primary, panel))
    }

    /// Auxiliary panels in registration order.
    pub fn panels(&self) -> impl Iterator<Item = &PanelRecord> {
        self.records.iter().skip(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelRecord> {
        self.records.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PanelRecord> {
        self.records.iter_mut()
    }

    /// First auxiliary panel attached to `edge`.
    pub fn find_by_edge(&self, edge: Edge) -> Option<&PanelRecord> {
        if edge == Edge::None {
            return None;
        }
        self.panels().find(|r| r.edge == edge)
    }

    /// First auxiliary panel currently flagged open.
    pub fn find_open(&self) -> Option<&PanelRecord> {
        self.panels().find(|r| r.is_open)
    }

    /// Attach or replace the external key of a panel.
    pub fn set_key(&mut self, target: impl Into<PanelRef>, key: PanelKey) {
        let Some(index) = self.index_of(target) else {
            return;
        };
        let record = &mut self.records[index];
        if let Some(old) = record.key.replace(key) {
            self.keys.remove(&old);
        }
        self.keys.insert(key, record.id);
    }

    /// Remove a child and hand its record back.
    ///
    /// The primary surface can only be removed once it is the last child.
    pub fn remove(&mut self, target: impl Into<PanelRef>) -> Result<Option<PanelRecord>> {
        let Some(index) = self.index_of(target) else {
            return Ok(None);
        };
        if index == 0 && self.records.len() > 1 {
            return Err(SlideError::PrimaryRemoval {
                remaining: self.records.len() - 1,
            });
        }
        let record = self.records.remove(index);
        if let Some(key) = record.key {
            self.keys.remove(&key);
        }
        Ok(Some(record))
    }

    /// Number of children, primary included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_view::FixedView;

    fn registry_with_panels() -> (PanelRegistry, PanelHandle, PanelHandle) {
        let mut registry = PanelRegistry::new(ContainerId::next());
        registry.register(FixedView::boxed(800.0, 600.0), None);
        let left = registry.register(FixedView::boxed(300.0, 600.0), Some(PanelKey::new("left")));
        let bottom = registry.register(FixedView::boxed(800.0, 200.0), None);
        (registry, left, bottom)
    }

    #[test]
    fn test_first_registration_is_primary_and_open() {
        let (registry, left, _) = registry_with_panels();
        assert!(registry.primary().unwrap().is_open());
        assert!(!registry.get(left).unwrap().is_open());
        assert_eq!(registry.get(left).unwrap().edge(), Edge::None);
        assert_eq!(registry.get(left).unwrap().mode(), RevealMode::None);
    }

    #[test]
    fn test_lookup_by_every_form() {
        let (registry, left, _) = registry_with_panels();
        assert_eq!(registry.index_of(left), Some(1));
        assert_eq!(registry.index_of(1usize), Some(1));
        assert_eq!(registry.index_of("left"), Some(1));
        assert_eq!(registry.index_of(9usize), None);
        assert_eq!(registry.index_of("missing"), None);
    }

    #[test]
    fn test_foreign_handle_matches_nothing() {
        let (registry, _, _) = registry_with_panels();
        let foreign = PanelHandle {
            container: ContainerId::next(),
            panel: PanelId(1),
        };
        assert!(registry.get(foreign).is_none());
    }

    #[test]
    fn test_find_by_edge_skips_primary() {
        let (mut registry, left, bottom) = registry_with_panels();
        registry.primary_mut().unwrap().edge = Edge::Left;
        assert!(registry.find_by_edge(Edge::Left).is_none());

        registry.get_mut(left).unwrap().edge = Edge::Left;
        registry.get_mut(bottom).unwrap().edge = Edge::Bottom;
        assert_eq!(registry.find_by_edge(Edge::Left).unwrap().id(), left.panel);
        assert_eq!(registry.find_by_edge(Edge::Bottom).unwrap().id(), bottom.panel);
        assert!(registry.find_by_edge(Edge::Top).is_none());
        assert!(registry.find_by_edge(Edge::None).is_none());
    }

    #[test]
    fn test_find_open_skips_primary() {
        let (mut registry, _, bottom) = registry_with_panels();
        assert!(registry.find_open().is_none());
        registry.get_mut(bottom).unwrap().is_open = true;
        assert_eq!(registry.find_open().unwrap().id(), bottom.panel);
    }

    #[test]
    fn test_extent_follows_edge_axis() {
        let (mut registry, left, _) = registry_with_panels();
        assert_eq!(registry.get(left).unwrap().extent(), 0.0);
        registry.get_mut(left).unwrap().edge = Edge::Left;
        assert_eq!(registry.get(left).unwrap().extent(), 300.0);
        registry.get_mut(left).unwrap().edge = Edge::Top;
        assert_eq!(registry.get(left).unwrap().extent(), 600.0);
    }

    #[test]
    fn test_remove_panel_and_key() {
        let (mut registry, left, _) = registry_with_panels();
        let removed = registry.remove("left").unwrap().unwrap();
        assert_eq!(removed.id(), left.panel);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("left").is_none());
        assert!(registry.remove(left).unwrap().is_none());
    }

    #[test]
    fn test_primary_removal_is_refused() {
        let (mut registry, _, _) = registry_with_panels();
        assert_eq!(
            registry.remove(0usize).unwrap_err(),
            SlideError::PrimaryRemoval { remaining: 2 }
        );
    }

    #[test]
    fn test_set_key_replaces_old_key() {
        let (mut registry, _, bottom) = registry_with_panels();
        registry.set_key(bottom, PanelKey::new("sheet"));
        registry.set_key("sheet", PanelKey::new("tray"));
        assert!(registry.get("sheet").is_none());
        assert_eq!(registry.get("tray").unwrap().id(), bottom.panel);
    }

    #[test]
    fn test_primary_and_panel_mut() {
        let (mut registry, left, _) = registry_with_panels();
        let primary_id = registry.primary().unwrap().id();
        assert!(registry.primary_and_panel_mut(primary_id).is_none());
        let (primary, panel) = registry.primary_and_panel_mut(left.panel).unwrap();
        assert_eq!(primary.id(), primary_id);
        assert_eq!(panel.id(), left.panel);
    }
}
