//! Control for a single parameter, chosen from its declared type.

use ledpanel_core::{Catalog, ParamEditor, ParameterDescriptor};
use serde_json::{Map, Value};
use yew::prelude::*;

use crate::components::{
    AnimationEditor, AnimationList, BoolField, ColorInputs, ColorList, LiteralSelect, NumberField,
    PrimitiveList, TextField, TimeField, UnionEditor,
};

/// Props for the ParamInput component.
#[derive(Properties, PartialEq)]
pub struct ParamInputProps {
    pub param: ParameterDescriptor,
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
    pub all: Catalog,
}

#[function_component(ParamInput)]
pub fn param_input(props: &ParamInputProps) -> Html {
    let param = &props.param;
    let value = props.value.clone();
    let on_change = props.on_change.clone();
    let all = props.all.clone();

    match ParamEditor::classify(param) {
        ParamEditor::Variadic | ParamEditor::AnimationList => {
            let child_catalog = all.child_catalog(param);
            html! { <AnimationList {value} {on_change} {child_catalog} {all} /> }
        }
        ParamEditor::ColorList => html! { <ColorList {value} {on_change} /> },
        ParamEditor::PrimitiveList { element } => html! {
            <PrimitiveList name={param.name.clone()} {element} {value} {on_change} {all} />
        },
        ParamEditor::ColorOrAnimation => {
            let child_catalog = all.child_catalog(param);
            html! { <UnionEditor {value} {on_change} {child_catalog} {all} /> }
        }
        ParamEditor::Literal { options } => {
            html! { <LiteralSelect {options} {value} {on_change} /> }
        }
        ParamEditor::Animation => {
            let child_catalog = all.child_catalog(param);
            html! {
                <div class="nested-anim">
                    <AnimationEditor
                        config={value.unwrap_or_else(|| Value::Object(Map::new()))}
                        {on_change}
                        available={Some(child_catalog)}
                        {all}
                    />
                </div>
            }
        }
        ParamEditor::Color => html! { <ColorInputs {value} {on_change} /> },
        ParamEditor::Bool => html! { <BoolField {value} {on_change} /> },
        ParamEditor::Time => html! { <TimeField {value} {on_change} /> },
        ParamEditor::Number(spec) => html! { <NumberField {spec} {value} {on_change} /> },
        ParamEditor::Text => html! { <TextField {value} {on_change} /> },
    }
}
