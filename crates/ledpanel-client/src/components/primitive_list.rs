use ledpanel_core::list::neutral_value;
use ledpanel_core::{
    Catalog, ListEdit, ParameterDescriptor, TypeDescriptor, apply_list_edit, list_items,
};
use serde_json::Value;
use yew::prelude::*;

use crate::components::ParamInput;

/// Props for the PrimitiveList component.
#[derive(Properties, PartialEq)]
pub struct PrimitiveListProps {
    /// Parameter name, used to label the items.
    pub name: String,
    pub element: TypeDescriptor,
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
    pub all: Catalog,
}

/// List of scalar values, each edited with the control for `element`.
#[function_component(PrimitiveList)]
pub fn primitive_list(props: &PrimitiveListProps) -> Html {
    let items = list_items(props.value.as_ref());

    let edit = {
        let items = items.clone();
        let on_change = props.on_change.clone();
        move |edit: ListEdit| on_change.emit(apply_list_edit(&items, edit))
    };

    let on_add = {
        let edit = edit.clone();
        let element = props.element.clone();
        Callback::from(move |_: MouseEvent| edit(ListEdit::Push(neutral_value(&element))))
    };

    html! {
        <div class="param-list primitive-list">
            { for items.iter().enumerate().map(|(index, item)| {
                let on_remove = {
                    let edit = edit.clone();
                    Callback::from(move |_: MouseEvent| edit(ListEdit::Remove(index)))
                };
                let on_item_change = {
                    let edit = edit.clone();
                    Callback::from(move |value: Value| edit(ListEdit::Replace(index, value)))
                };
                let item_param = ParameterDescriptor::new(
                    format!("{}[{index}]", props.name),
                    props.element.clone(),
                );
                html! {
                    <div class="list-item" key={index}>
                        <ParamInput
                            param={item_param}
                            value={item.clone()}
                            on_change={on_item_change}
                            all={props.all.clone()}
                        />
                        <button class="list-remove" onclick={on_remove}>{"Remove"}</button>
                    </div>
                }
            }) }
            <button class="list-add" onclick={on_add}>{"Add"}</button>
        </div>
    }
}
