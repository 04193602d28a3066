//! Single optional selection in the interactive module showcase.

use crate::content::{Module, ModuleId, find_module};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ModuleId>,
}

impl Selection {
    pub fn selected(&self) -> Option<ModuleId> {
        self.selected
    }

    pub fn is_selected(&self, id: ModuleId) -> bool {
        self.selected == Some(id)
    }

    /// Clicking the selected slot clears it, any other slot replaces it.
    pub fn toggle(&mut self, id: ModuleId) {
        self.selected = if self.is_selected(id) { None } else { Some(id) };
    }

    /// The module backing the info panel, if any.
    pub fn module(&self) -> Option<&'static Module> {
        self.selected.and_then(find_module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let selection = Selection::default();
        assert_eq!(selection.selected(), None);
        assert!(selection.module().is_none());
    }

    #[test]
    fn toggling_same_module_clears() {
        let mut selection = Selection::default();
        selection.toggle(ModuleId::Camera);
        assert!(selection.is_selected(ModuleId::Camera));
        selection.toggle(ModuleId::Camera);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn selecting_another_module_replaces() {
        let mut selection = Selection::default();
        selection.toggle(ModuleId::Battery);
        selection.toggle(ModuleId::Health);
        assert_eq!(selection.selected(), Some(ModuleId::Health));
        assert!(!selection.is_selected(ModuleId::Battery));
        assert_eq!(selection.module().map(|m| m.name), Some("Health Sensor"));
    }

    #[test]
    fn at_most_one_module_is_selected() {
        let all = [
            ModuleId::Camera,
            ModuleId::Battery,
            ModuleId::Speaker,
            ModuleId::Health,
        ];
        let clicks = [
            ModuleId::Camera,
            ModuleId::Battery,
            ModuleId::Camera,
            ModuleId::Speaker,
            ModuleId::Speaker,
            ModuleId::Health,
        ];
        let mut selection = Selection::default();
        for id in clicks {
            selection.toggle(id);
            let selected = all.iter().filter(|m| selection.is_selected(**m)).count();
            assert!(selected <= 1);
        }
    }
}
