//! Static floor plans.
//!
//! Every floor plan is hand-authored: a generator lays primitives out
//! left-to-right/top-to-bottom with fixed gaps and reports the canvas it
//! needs. Generators are registered under a `(building, floor)` key in a
//! [`LayoutRegistry`], which can be validated against the navigation
//! [`FacilityCatalog`] at start-up.

mod annex;
pub mod catalog;
mod dfa;
mod new_building;

pub use catalog::{CatalogBuilding, FacilityCatalog};

use crate::model::LayoutRoom;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Rooms of one floor plus the canvas they are drawn on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub rooms: Vec<LayoutRoom>,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Layout {
    /// Renderable empty state used when no plan is defined for a floor.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rooms: Vec::new(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[must_use]
    pub fn room(&self, id: &str) -> Option<&LayoutRoom> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Ids that occur more than once, in first-seen order.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for room in &self.rooms {
            if !seen.insert(room.id.as_str()) && !duplicates.contains(&room.id) {
                duplicates.push(room.id.clone());
            }
        }
        duplicates
    }
}

pub type LayoutGenerator = fn() -> Layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutKey {
    pub building: &'static str,
    pub floor: &'static str,
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.building, self.floor)
    }
}

/// Problems found by [`LayoutRegistry::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutIssue {
    /// The catalog offers a floor that has no generator.
    MissingLayout { building: String, floor: String },
    /// A generator is registered for a floor the catalog never offers.
    UncataloguedLayout { building: String, floor: String },
    /// A generator produced the same room id twice.
    DuplicateRoomId {
        building: String,
        floor: String,
        id: String,
    },
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLayout { building, floor } => {
                write!(f, "no layout defined for {building} / {floor}")
            }
            Self::UncataloguedLayout { building, floor } => {
                write!(f, "layout {building} / {floor} is not reachable from the catalog")
            }
            Self::DuplicateRoomId {
                building,
                floor,
                id,
            } => write!(f, "layout {building} / {floor} repeats room id '{id}'"),
        }
    }
}

/// Generators keyed by building, then floor label.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    generators: BTreeMap<&'static str, BTreeMap<&'static str, LayoutGenerator>>,
}

impl LayoutRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every floor plan shipped with the crate.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<LayoutRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut registry = Self::new();
            new_building::register(&mut registry);
            dfa::register(&mut registry);
            annex::register(&mut registry);
            registry
        })
    }

    pub fn register(
        &mut self,
        building: &'static str,
        floor: &'static str,
        generator: LayoutGenerator,
    ) -> &mut Self {
        self.generators
            .entry(building)
            .or_default()
            .insert(floor, generator);
        self
    }

    #[must_use]
    pub fn contains(&self, building: &str, floor: &str) -> bool {
        self.find(building, floor).is_some()
    }

    fn find(&self, building: &str, floor: &str) -> Option<LayoutGenerator> {
        self.generators.get(building)?.get(floor).copied()
    }

    /// Floor plan for `(building, floor)`; an unknown pair yields
    /// [`Layout::empty`].
    #[must_use]
    pub fn get_layout(&self, building: &str, floor: &str) -> Layout {
        if let Some(generator) = self.find(building, floor) {
            generator()
        } else {
            tracing::debug!(building, floor, "no layout registered, using empty layout");
            Layout::empty()
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = LayoutKey> + '_ {
        self.entries().map(|(key, _)| key)
    }

    fn entries(&self) -> impl Iterator<Item = (LayoutKey, LayoutGenerator)> + '_ {
        self.generators.iter().flat_map(|(&building, floors)| {
            floors
                .iter()
                .map(move |(&floor, &generator)| (LayoutKey { building, floor }, generator))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cross-checks the registry against the navigation catalog and checks
    /// room id uniqueness of every registered plan.
    #[must_use]
    pub fn validate(&self, catalog: &FacilityCatalog) -> Vec<LayoutIssue> {
        let mut issues = Vec::new();

        for building in &catalog.buildings {
            for floor in &building.floors {
                if !self.contains(&building.name, floor) {
                    issues.push(LayoutIssue::MissingLayout {
                        building: building.name.clone(),
                        floor: floor.clone(),
                    });
                }
            }
        }

        for (key, generator) in self.entries() {
            if !catalog.offers(key.building, key.floor) {
                issues.push(LayoutIssue::UncataloguedLayout {
                    building: key.building.to_string(),
                    floor: key.floor.to_string(),
                });
            }
            for id in generator().duplicate_ids() {
                issues.push(LayoutIssue::DuplicateRoomId {
                    building: key.building.to_string(),
                    floor: key.floor.to_string(),
                    id,
                });
            }
        }

        issues
    }
}

/// Floor plan for `(building, floor)` from the built-in registry.
#[must_use]
pub fn get_layout(building: &str, floor: &str) -> Layout {
    LayoutRegistry::builtin().get_layout(building, floor)
}

/// `"BASE"` or `"BASE_SUFFIX"`.
pub(crate) fn suffixed(base: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{base}_{suffix}"),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_registry_has_eight_floors() {
        assert_eq!(LayoutRegistry::builtin().len(), 8);
    }

    #[test]
    fn every_builtin_layout_has_unique_room_ids() {
        let registry = LayoutRegistry::builtin();
        for key in registry.keys() {
            let layout = registry.get_layout(key.building, key.floor);
            assert!(!layout.is_empty(), "{key} has no rooms");
            assert_eq!(layout.duplicate_ids(), Vec::<String>::new(), "{key}");
        }
    }

    #[test]
    fn every_room_fits_its_canvas() {
        let registry = LayoutRegistry::builtin();
        for key in registry.keys() {
            let layout = registry.get_layout(key.building, key.floor);
            for room in &layout.rooms {
                assert!(room.width > 0.0 && room.height > 0.0, "{key}: {}", room.id);
                assert!(room.x >= 0.0 && room.y >= 0.0, "{key}: {}", room.id);
                assert!(room.right() <= layout.canvas_width, "{key}: {}", room.id);
                assert!(room.bottom() <= layout.canvas_height, "{key}: {}", room.id);
            }
        }
    }

    #[test]
    fn lookup_miss_returns_default_canvas() {
        let layout = get_layout("DFA Building", "Ground Floor");
        assert!(layout.is_empty());
        assert_eq!(layout, Layout::empty());
        assert_eq!(layout.canvas_width, 800.0);
        assert_eq!(layout.canvas_height, 600.0);
    }

    #[test]
    fn lookup_is_exact() {
        assert!(get_layout("new building", "Ground Floor").is_empty());
        assert!(!get_layout("New Building", "Ground Floor").is_empty());
    }

    #[test]
    fn registering_a_floor_again_replaces_it() {
        fn narrow() -> Layout {
            Layout {
                rooms: Vec::new(),
                canvas_width: 100.0,
                canvas_height: 50.0,
            }
        }
        fn wide() -> Layout {
            Layout {
                canvas_width: 300.0,
                ..narrow()
            }
        }

        let mut registry = LayoutRegistry::new();
        registry
            .register("Depot", "Basement", narrow)
            .register("Depot", "Roof", narrow)
            .register("Depot", "Basement", wide);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_layout("Depot", "Basement").canvas_width, 300.0);
        assert_eq!(registry.get_layout("Depot", "Roof").canvas_width, 100.0);
        assert!(!registry.contains("Depot", "Attic"));
        assert_eq!(
            registry.keys().collect::<Vec<_>>(),
            vec![
                LayoutKey {
                    building: "Depot",
                    floor: "Basement"
                },
                LayoutKey {
                    building: "Depot",
                    floor: "Roof"
                },
            ]
        );
    }

    #[test]
    fn builtin_catalog_has_one_gap() {
        let issues = LayoutRegistry::builtin().validate(&FacilityCatalog::builtin());
        assert_eq!(
            issues,
            vec![LayoutIssue::MissingLayout {
                building: "DFA Building".to_string(),
                floor: "Ground Floor".to_string(),
            }]
        );
    }

    #[test]
    fn validate_reports_duplicates_and_uncatalogued() {
        fn twin_rooms() -> Layout {
            Layout {
                rooms: vec![
                    LayoutRoom::new("A", "A", "Room A", 0.0, 0.0, 10.0, 10.0),
                    LayoutRoom::new("A", "A", "Room A", 20.0, 0.0, 10.0, 10.0),
                ],
                canvas_width: 40.0,
                canvas_height: 20.0,
            }
        }

        let mut registry = LayoutRegistry::new();
        registry.register("Depot", "Basement", twin_rooms);
        let issues = registry.validate(&FacilityCatalog::default());

        assert_eq!(
            issues,
            vec![
                LayoutIssue::UncataloguedLayout {
                    building: "Depot".to_string(),
                    floor: "Basement".to_string(),
                },
                LayoutIssue::DuplicateRoomId {
                    building: "Depot".to_string(),
                    floor: "Basement".to_string(),
                    id: "A".to_string(),
                },
            ]
        );
    }

    #[test]
    fn suffix_helper() {
        assert_eq!(suffixed("STAIRS_LEFT", None), "STAIRS_LEFT");
        assert_eq!(suffixed("STAIRS_LEFT", Some("2F")), "STAIRS_LEFT_2F");
    }
}
