//! # Design Warnings
//!
//! Non-fatal anomalies found while deriving a design. A warning never changes
//! the value the engine already settled on; it only records that the choice
//! deserves a second look. Each warning is emitted through `tracing::warn!`
//! when it is pushed and is also kept on the [`Warnings`] collector so it can
//! travel with the cost report.

use serde::{Deserialize, Serialize};

use crate::materials::AnchorKind;
use crate::system::LoadDirection;

/// A non-fatal anomaly raised during parameter derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "warning")]
pub enum DesignWarning {
    /// More than one polynomial root fell inside the valid domain
    AmbiguousRoot {
        target: f64,
        candidates: Vec<f64>,
        chosen: f64,
    },
    /// Both load and diameter were supplied; the named field was ignored
    IgnoredInput { field: String, reason: String },
    /// An anchor kind is physically inappropriate for the load direction
    DiscouragedAnchor {
        kind: AnchorKind,
        direction: LoadDirection,
    },
    /// The load direction gives no decomposition rule; conservative fallback used
    UnrecognizedLoadDirection {
        direction: LoadDirection,
        fallback: AnchorKind,
    },
}

impl std::fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignWarning::AmbiguousRoot { target, candidates, chosen } => write!(
                f,
                "{} diameters produce an MBL of {:.3} N; using the smallest, {:.4} m",
                candidates.len(),
                target,
                chosen
            ),
            DesignWarning::IgnoredInput { field, reason } => {
                write!(f, "input '{}' ignored: {}", field, reason)
            }
            DesignWarning::DiscouragedAnchor { kind, direction } => write!(
                f,
                "{} anchors should not be used with '{}' anchor loading",
                kind, direction
            ),
            DesignWarning::UnrecognizedLoadDirection { direction, fallback } => write!(
                f,
                "load direction '{}' not recognized; loading both axes and using a {} anchor",
                direction, fallback
            ),
        }
    }
}

/// Ordered collection of warnings raised during one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warnings(Vec<DesignWarning>);

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and emit it on the tracing channel.
    pub fn push(&mut self, warning: DesignWarning) {
        tracing::warn!("{}", warning);
        self.0.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DesignWarning> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[DesignWarning] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a DesignWarning;
    type IntoIter = std::slice::Iter<'a, DesignWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate() {
        let mut warnings = Warnings::new();
        assert!(warnings.is_empty());

        warnings.push(DesignWarning::DiscouragedAnchor {
            kind: AnchorKind::DragEmbedment,
            direction: LoadDirection::Vertical,
        });
        assert_eq!(warnings.len(), 1);
        assert!(warnings
            .iter()
            .any(|w| matches!(w, DesignWarning::DiscouragedAnchor { .. })));
    }

    #[test]
    fn test_display_mentions_kind_and_direction() {
        let w = DesignWarning::DiscouragedAnchor {
            kind: AnchorKind::DragEmbedment,
            direction: LoadDirection::Both,
        };
        let text = w.to_string();
        assert!(text.contains("drag-embedment"));
        assert!(text.contains("both"));
    }

    #[test]
    fn test_serialization() {
        let mut warnings = Warnings::new();
        warnings.push(DesignWarning::IgnoredInput {
            field: "design_load".to_string(),
            reason: "diameter takes precedence".to_string(),
        });
        let json = serde_json::to_string(&warnings).unwrap();
        assert!(json.starts_with('['));
        let roundtrip: Warnings = serde_json::from_str(&json).unwrap();
        assert_eq!(warnings, roundtrip);
    }

    #[test]
    fn test_anchor_warnings_serialize() {
        let mut warnings = Warnings::new();
        warnings.push(DesignWarning::DiscouragedAnchor {
            kind: AnchorKind::DragEmbedment,
            direction: LoadDirection::Vertical,
        });
        warnings.push(DesignWarning::UnrecognizedLoadDirection {
            direction: LoadDirection::None,
            fallback: AnchorKind::Gravity,
        });
        let json = serde_json::to_string(&warnings).unwrap();
        assert!(json.contains(r#""warning":"DiscouragedAnchor""#));
        assert!(json.contains(r#""kind":"drag-embedment""#));
        let roundtrip: Warnings = serde_json::from_str(&json).unwrap();
        assert_eq!(warnings, roundtrip);
    }
}
