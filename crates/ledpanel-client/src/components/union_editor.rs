use ledpanel_core::{Catalog, UnionMode, infer_union_mode};
use serde_json::{Map, Value};
use yew::prelude::*;

use crate::components::{AnimationEditor, ColorInputs};

/// Props for the UnionEditor component.
#[derive(Properties, PartialEq)]
pub struct UnionEditorProps {
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
    pub child_catalog: Catalog,
    pub all: Catalog,
}

/// Parameter that holds either a color or a nested animation. The mode is
/// read off the value's shape; switching replaces the value outright.
#[function_component(UnionEditor)]
pub fn union_editor(props: &UnionEditorProps) -> Html {
    let mode = infer_union_mode(props.value.as_ref());
    let slot = props.value.clone().unwrap_or_else(|| Value::Object(Map::new()));

    let mode_button = |target: UnionMode| {
        let onclick = {
            let on_change = props.on_change.clone();
            let child_catalog = props.child_catalog.clone();
            Callback::from(move |_: MouseEvent| {
                tracing::debug!("Switching union parameter to {}", target.label());
                on_change.emit(target.initial_value(&child_catalog));
            })
        };
        html! {
            <button
                class={classes!("union-mode", (mode == target).then_some("active"))}
                {onclick}
            >
                {target.label()}
            </button>
        }
    };

    html! {
        <div class="union-editor">
            <div class="union-modes">
                {mode_button(UnionMode::Color)}
                {mode_button(UnionMode::Animation)}
            </div>
            {match mode {
                UnionMode::Color => html! {
                    <ColorInputs value={props.value.clone()} on_change={props.on_change.clone()} />
                },
                UnionMode::Animation => html! {
                    <div class="nested-anim">
                        <AnimationEditor
                            config={slot}
                            on_change={props.on_change.clone()}
                            available={Some(props.child_catalog.clone())}
                            all={props.all.clone()}
                        />
                    </div>
                },
            }}
        </div>
    }
}
