use ledpanel_core::list::new_color_item;
use ledpanel_core::{ListEdit, apply_list_edit, list_items};
use serde_json::Value;
use yew::prelude::*;

use crate::components::ColorInputs;

/// Props for the ColorList component.
#[derive(Properties, PartialEq)]
pub struct ColorListProps {
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
}

/// Ordered list of colors. New entries start black.
#[function_component(ColorList)]
pub fn color_list(props: &ColorListProps) -> Html {
    let items = list_items(props.value.as_ref());

    let edit = {
        let items = items.clone();
        let on_change = props.on_change.clone();
        move |edit: ListEdit| on_change.emit(apply_list_edit(&items, edit))
    };

    let on_add = {
        let edit = edit.clone();
        Callback::from(move |_: MouseEvent| edit(ListEdit::Push(new_color_item())))
    };

    html! {
        <div class="param-list color-list">
            { for items.iter().enumerate().map(|(index, item)| {
                let on_remove = {
                    let edit = edit.clone();
                    Callback::from(move |_: MouseEvent| edit(ListEdit::Remove(index)))
                };
                let on_item_change = {
                    let edit = edit.clone();
                    Callback::from(move |value: Value| edit(ListEdit::Replace(index, value)))
                };
                html! {
                    <div class="list-item" key={index}>
                        <ColorInputs value={item.clone()} on_change={on_item_change} />
                        <button class="list-remove" onclick={on_remove}>{"Remove"}</button>
                    </div>
                }
            }) }
            <button class="list-add" onclick={on_add}>{"Add Color"}</button>
        </div>
    }
}
