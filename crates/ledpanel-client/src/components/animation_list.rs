use ledpanel_core::list::new_animation_item;
use ledpanel_core::{Catalog, ListEdit, apply_list_edit, list_items};
use serde_json::Value;
use yew::prelude::*;

use crate::components::AnimationEditor;

/// Props for the AnimationList component.
#[derive(Properties, PartialEq)]
pub struct AnimationListProps {
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
    /// Animations legal for the items of this list.
    pub child_catalog: Catalog,
    pub all: Catalog,
}

/// Ordered list of nested animation slots, used for variadic parameters
/// and `List[Animation]` alike.
#[function_component(AnimationList)]
pub fn animation_list(props: &AnimationListProps) -> Html {
    let items = list_items(props.value.as_ref());

    let edit = {
        let items = items.clone();
        let on_change = props.on_change.clone();
        move |edit: ListEdit| on_change.emit(apply_list_edit(&items, edit))
    };

    let on_add = {
        let edit = edit.clone();
        let child_catalog = props.child_catalog.clone();
        Callback::from(move |_: MouseEvent| {
            edit(ListEdit::Push(new_animation_item(&child_catalog)));
        })
    };

    html! {
        <div class="param-list anim-list">
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
                    <div class="list-item anim-list-item" key={index}>
                        <div class="list-item-header">
                            <span class="list-index">{format!("#{}", index + 1)}</span>
                            <button class="list-remove" onclick={on_remove}>{"Remove"}</button>
                        </div>
                        <AnimationEditor
                            config={item.clone()}
                            on_change={on_item_change}
                            available={Some(props.child_catalog.clone())}
                            all={props.all.clone()}
                        />
                    </div>
                }
            }) }
            <button class="list-add" onclick={on_add}>{"Add Animation"}</button>
        </div>
    }
}
