//! State of a single animation slot editor.
//!
//! The parent owns the slot value. An editor keeps a [`NodeMirror`]: a local
//! copy derived from the last value it was handed, updated in place by user
//! actions so the UI reflects an edit before the parent echoes it back.

use serde_json::{Map, Value};

use crate::catalog::{AnimationDefinition, Catalog};
use crate::value::AnimationSlot;

/// Selection and parameter map of one slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeState {
    /// Selected animation name, empty when nothing is selected.
    pub selected: String,
    pub params: Map<String, Value>,
}

/// User actions on a slot editor.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeAction {
    /// Pick a different animation from the selector.
    Select(String),
    /// Replace one parameter value.
    SetParam { name: String, value: Value },
}

/// Result of applying an action: the new local state and the value to hand
/// to the parent, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: NodeState,
    pub emit: Option<Value>,
}

impl NodeState {
    /// Derives local state from a slot value.
    pub fn derive(incoming: Option<&Value>) -> Self {
        match AnimationSlot::from_value(incoming) {
            Some(slot) => Self {
                selected: slot.name,
                params: slot.params,
            },
            None => Self::default(),
        }
    }

    pub fn is_selected(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Definition of the selected animation within `catalog`.
    pub fn definition<'a>(&self, catalog: &'a Catalog) -> Option<&'a AnimationDefinition> {
        if !self.is_selected() {
            return None;
        }
        catalog.find(&self.selected)
    }

    /// `{ selected: params }`, or `None` without a selection.
    pub fn to_value(&self) -> Option<Value> {
        self.is_selected()
            .then(|| AnimationSlot::new(self.selected.clone(), self.params.clone()).to_value())
    }

    /// Applies a user action. Never mutates `self`.
    pub fn apply(&self, action: NodeAction, available: &Catalog) -> Transition {
        let state = match action {
            NodeAction::Select(name) => {
                let params = match available.find(&name) {
                    Some(def) => def.default_params(),
                    None => {
                        tracing::warn!("Selected animation `{name}` is not in the catalog");
                        Map::new()
                    }
                };
                tracing::debug!("Animation slot switched to `{name}`");
                NodeState {
                    selected: name,
                    params,
                }
            }
            NodeAction::SetParam { name, value } => {
                let mut params = self.params.clone();
                params.insert(name, value);
                NodeState {
                    selected: self.selected.clone(),
                    params,
                }
            }
        };
        let emit = state.to_value();
        Transition { state, emit }
    }
}

/// Local mirror of a parent-owned slot value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMirror {
    seen: Option<Value>,
    state: NodeState,
}

impl NodeMirror {
    pub fn new(incoming: Option<&Value>) -> Self {
        Self {
            seen: incoming.cloned(),
            state: NodeState::derive(incoming),
        }
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    /// Reconciles with the value handed down by the parent.
    ///
    /// Re-derives only when the value differs from the last one observed, so
    /// observing the same value repeatedly leaves the state untouched. Returns
    /// whether the state was re-derived.
    pub fn observe(&mut self, incoming: Option<&Value>) -> bool {
        if self.seen.as_ref() == incoming {
            return false;
        }
        self.seen = incoming.cloned();
        self.state = NodeState::derive(incoming);
        true
    }

    /// Applies a user action and returns the value to emit.
    pub fn apply(&mut self, action: NodeAction, available: &Catalog) -> Option<Value> {
        let transition = self.state.apply(action, available);
        self.state = transition.state;
        transition.emit
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::fixtures::catalog;
    use crate::catalog::{AnimationDefinition, ParameterDescriptor};
    use crate::schema::TypeDescriptor;

    #[test]
    fn test_derive_roundtrip_identity() {
        let value = json!({"strobo": {"frequency": 10, "colors": [], "phase": 0.5}});
        let state = NodeState::derive(Some(&value));
        assert_eq!(state.selected, "strobo");
        assert_eq!(
            state.params.keys().collect::<Vec<_>>(),
            vec!["frequency", "colors", "phase"]
        );
        assert_eq!(state.to_value(), Some(value));
    }

    #[test]
    fn test_derive_clears_on_unset() {
        assert_eq!(NodeState::derive(Some(&json!({}))), NodeState::default());
        assert_eq!(NodeState::derive(None), NodeState::default());
    }

    #[test]
    fn test_select_fills_defaults_only() {
        let catalog = Catalog::from(vec![AnimationDefinition::new("X", "idle")
            .with_param(
                ParameterDescriptor::new("freq", TypeDescriptor::any()).with_default(json!(10)),
            )
            .with_param(ParameterDescriptor::new("phase", TypeDescriptor::any()))]);
        let transition = NodeState::default().apply(NodeAction::Select("X".to_string()), &catalog);
        assert_eq!(transition.emit, Some(json!({"X": {"freq": 10}})));
        assert!(!transition.state.params.contains_key("phase"));
    }

    #[test]
    fn test_select_discards_previous_params() {
        let catalog = catalog();
        let state = NodeState::derive(Some(&json!({"swing": {"x": 5}})));
        let transition = state.apply(NodeAction::Select("strobo".to_string()), &catalog);
        assert_eq!(
            transition.emit,
            Some(json!({"strobo": {"colors": [], "frequency": 100}}))
        );
        assert!(!transition.state.params.contains_key("x"));
    }

    #[test]
    fn test_set_param_merges_and_emits() {
        let catalog = catalog();
        let state = NodeState::derive(Some(&json!({"strobo": {"frequency": 100}})));
        let transition = state.apply(
            NodeAction::SetParam {
                name: "phase".to_string(),
                value: json!(0.25),
            },
            &catalog,
        );
        assert_eq!(
            transition.emit,
            Some(json!({"strobo": {"frequency": 100, "phase": 0.25}}))
        );
        // The source state is left as it was.
        assert!(!state.params.contains_key("phase"));
    }

    #[test]
    fn test_set_param_without_selection_does_not_emit() {
        let catalog = catalog();
        let transition = NodeState::default().apply(
            NodeAction::SetParam {
                name: "phase".to_string(),
                value: json!(1),
            },
            &catalog,
        );
        assert_eq!(transition.emit, None);
    }

    #[test]
    fn test_mirror_observe_is_idempotent() {
        let value = json!({"static": {"color": {"r": 1, "g": 2, "b": 3, "cw": 0, "ww": 0}}});
        let mut mirror = NodeMirror::default();
        assert!(mirror.observe(Some(&value)));
        let first = mirror.clone();
        assert!(!mirror.observe(Some(&value)));
        assert_eq!(mirror, first);
    }

    #[test]
    fn test_mirror_keeps_local_edit_until_parent_changes() {
        let catalog = catalog();
        let value = json!({"strobo": {"frequency": 100}});
        let mut mirror = NodeMirror::new(Some(&value));

        let emitted = mirror.apply(
            NodeAction::SetParam {
                name: "frequency".to_string(),
                value: json!(5),
            },
            &catalog,
        );
        assert_eq!(emitted, Some(json!({"strobo": {"frequency": 5}})));

        // Parent re-renders before merging: same snapshot, local edit stays.
        assert!(!mirror.observe(Some(&value)));
        assert_eq!(mirror.state().params.get("frequency"), Some(&json!(5)));

        // Parent echoes the edit back.
        assert!(mirror.observe(emitted.as_ref()));
        assert_eq!(mirror.state().params.get("frequency"), Some(&json!(5)));
    }

    #[test]
    fn test_definition_lookup() {
        let catalog = catalog();
        let state = NodeState::derive(Some(&json!({"dot": {}})));
        assert_eq!(state.definition(&catalog).map(|d| d.name.as_str()), Some("dot"));
        assert!(NodeState::default().definition(&catalog).is_none());
    }
}
