use serde::{Deserialize, Serialize};

/// Category id that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub name_bn: String,
    #[serde(default)]
    pub icon: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        name_bn: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_bn: name_bn.into(),
            icon: icon.into(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORIES
    }
}
