//! List Configuration
//!
//! Options of the list and its drag engine, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::ReorderResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListConfig {
    /// Attach the drag engine at all
    pub drag_and_drop: bool,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: i32,
    /// Class of the placeholder left at the drop position
    pub ghost_class: String,
    /// Class of the pressed item
    pub chosen_class: String,
    /// Class of the item while it is dragged
    pub drag_class: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            drag_and_drop: true,
            drag_threshold_px: 5,
            ghost_class: "reorderable-ghost".to_string(),
            chosen_class: "reorderable-chosen".to_string(),
            drag_class: "reorderable-drag".to_string(),
        }
    }
}

impl ListConfig {
    pub fn from_json(json: &str) -> ReorderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReorderError;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ListConfig::from_json(r#"{"dragThresholdPx": 12}"#).unwrap();
        assert_eq!(config.drag_threshold_px, 12);
        assert!(config.drag_and_drop);
        assert_eq!(config.ghost_class, "reorderable-ghost");
    }

    #[test]
    fn test_invalid_json() {
        let err = ListConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ReorderError::Config(_)));
    }
}
