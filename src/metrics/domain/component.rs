use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// NewType wrapper for component identifiers
///
/// A component is a tracked software artifact. The core never owns the
/// component entity itself; it only needs a stable identity to key the
/// current-state view, the snapshot series, and the cached risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(Uuid);

impl ComponentId {
    /// Generates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an identifier assigned by the surrounding application
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_new_is_unique() {
        let a = ComponentId::new();
        let b = ComponentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_component_id_from_uuid_roundtrip() {
        let raw = Uuid::new_v4();
        let id = ComponentId::from_uuid(raw);
        assert_eq!(id.as_uuid(), raw);
    }

    #[test]
    fn test_component_id_display_matches_uuid() {
        let raw = Uuid::new_v4();
        let id = ComponentId::from_uuid(raw);
        assert_eq!(format!("{}", id), raw.to_string());
    }

    #[test]
    fn test_component_id_serde_is_transparent() {
        let id = ComponentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let back: ComponentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
