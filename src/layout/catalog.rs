use serde::{Deserialize, Serialize};

/// A building as offered by the navigation bar, with its floor labels in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBuilding {
    pub name: String,
    pub floors: Vec<String>,
}

impl CatalogBuilding {
    #[must_use]
    pub fn new(name: &str, floors: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            floors: floors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Buildings and floors the user can pick from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityCatalog {
    pub buildings: Vec<CatalogBuilding>,
}

impl FacilityCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            buildings: vec![
                CatalogBuilding::new(
                    "New Building",
                    &["Ground Floor", "2nd Floor", "3rd Floor"],
                ),
                CatalogBuilding::new("DFA Building", &["Ground Floor", "2nd Floor"]),
                CatalogBuilding::new(
                    "Annex Building",
                    &["Ground Floor", "2nd Floor", "3rd Floor", "4th Floor"],
                ),
            ],
        }
    }

    #[must_use]
    pub fn building(&self, name: &str) -> Option<&CatalogBuilding> {
        self.buildings.iter().find(|b| b.name == name)
    }

    /// Floor labels of `building`, empty when the building is unknown.
    #[must_use]
    pub fn floors(&self, building: &str) -> &[String] {
        self.building(building).map_or(&[], |b| b.floors.as_slice())
    }

    #[must_use]
    pub fn offers(&self, building: &str, floor: &str) -> bool {
        self.floors(building).iter().any(|f| f == floor)
    }
}
