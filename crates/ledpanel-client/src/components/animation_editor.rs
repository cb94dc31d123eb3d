//! Editor for one animation slot, recursing through nested slots.

use ledpanel_core::{Catalog, NodeAction, NodeMirror};
use serde_json::Value;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::ParamInput;

/// Props for the AnimationEditor component.
#[derive(Properties, PartialEq)]
pub struct AnimationEditorProps {
    /// Current slot value, `{ name: params }`, or unset.
    #[prop_or_default]
    pub config: Option<Value>,
    pub on_change: Callback<Value>,
    /// Animations selectable here. `None` while the catalog is loading.
    pub available: Option<Catalog>,
    /// Whole catalog, for resolving nested slots.
    pub all: Catalog,
    #[prop_or(false)]
    pub is_root: bool,
}

/// Selector plus one control per parameter of the selected animation.
///
/// Local state is re-derived only when the parent hands down a value that
/// differs from the last one seen, so echoing our own emission back is a
/// no-op.
#[function_component(AnimationEditor)]
pub fn animation_editor(props: &AnimationEditorProps) -> Html {
    let mirror = use_mut_ref(|| NodeMirror::new(props.config.as_ref()));
    let trigger = use_force_update();

    let Some(available) = props.available.clone() else {
        return html! { <div class="anim-loading">{"Loading animations..."}</div> };
    };

    mirror.borrow_mut().observe(props.config.as_ref());
    let state = mirror.borrow().state().clone();

    let dispatch = {
        let mirror = mirror.clone();
        let on_change = props.on_change.clone();
        let available = available.clone();
        Callback::from(move |action: NodeAction| {
            let emitted = mirror.borrow_mut().apply(action, &available);
            trigger.force_update();
            if let Some(value) = emitted {
                on_change.emit(value);
            }
        })
    };

    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatch.emit(NodeAction::Select(select.value()));
        })
    };

    // A nested slot may hold a name outside its module filter; keep showing it.
    let definition = state
        .definition(&available)
        .or_else(|| state.definition(&props.all));
    let foreign = definition.filter(|def| !available.contains(&def.name));

    html! {
        <div class={classes!("anim-editor", (!props.is_root).then_some("anim-editor-nested"))}>
            <select class="anim-select" onchange={on_select}>
                <option value="" disabled=true selected={!state.is_selected()}>
                    {"Select Animation"}
                </option>
                { for available.iter().map(|anim| html! {
                    <option
                        key={anim.name.clone()}
                        value={anim.name.clone()}
                        selected={anim.name == state.selected}
                    >
                        {anim.label()}
                    </option>
                }) }
                if let Some(def) = foreign {
                    <option value={def.name.clone()} selected=true>{def.label()}</option>
                }
            </select>
            if let Some(def) = definition {
                if let Some(description) = &def.description {
                    <p class="anim-description">{description}</p>
                }
                <div class="anim-params">
                    { for def.params.iter().map(|param| {
                        let on_change = {
                            let dispatch = dispatch.clone();
                            let name = param.name.clone();
                            Callback::from(move |value: Value| {
                                dispatch.emit(NodeAction::SetParam { name: name.clone(), value });
                            })
                        };
                        html! {
                            <div class="anim-param" key={param.name.clone()}>
                                <label class="anim-param-label">
                                    {&param.name}
                                    if let Some(hint) = param.bounds_hint() {
                                        <span class="anim-param-hint">{format!(" ({hint})")}</span>
                                    }
                                </label>
                                <ParamInput
                                    param={param.clone()}
                                    value={state.params.get(&param.name).cloned()}
                                    on_change={on_change}
                                    all={props.all.clone()}
                                />
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use ledpanel_core::AnimationDefinition;
    use serde_json::json;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    fn mount(props: AnimationEditorProps) -> web_sys::Element {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<AnimationEditor>::with_root_and_props(root.clone(), props).render();
        root
    }

    fn counting_callback() -> (Callback<Value>, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_: Value| count.set(count.get() + 1))
        };
        (callback, count)
    }

    #[wasm_bindgen_test]
    async fn test_loading_catalog_renders_placeholder_without_emitting() {
        let (on_change, emitted) = counting_callback();
        let root = mount(AnimationEditorProps {
            config: Some(json!({"static": {}})),
            on_change,
            available: None,
            all: Catalog::default(),
            is_root: true,
        });
        yew::platform::time::sleep(Duration::ZERO).await;

        assert!(root.inner_html().contains("Loading animations..."));
        assert!(root.query_selector("select").unwrap().is_none());
        assert_eq!(emitted.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn test_loaded_catalog_renders_selector_without_emitting() {
        let catalog = Catalog::from(vec![
            AnimationDefinition::new("static", "idle"),
            AnimationDefinition::new("strobo", "idle"),
        ]);
        let (on_change, emitted) = counting_callback();
        let root = mount(AnimationEditorProps {
            config: Some(json!({"strobo": {}})),
            on_change,
            available: Some(catalog.clone()),
            all: catalog,
            is_root: true,
        });
        yew::platform::time::sleep(Duration::ZERO).await;

        assert!(root.query_selector("select.anim-select").unwrap().is_some());
        assert!(!root.inner_html().contains("Loading animations..."));
        assert_eq!(emitted.get(), 0);
    }
}
