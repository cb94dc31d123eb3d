//! Simple single-value controls.

use serde_json::Value;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Props shared by the single-value controls.
#[derive(Properties, PartialEq)]
pub struct ScalarFieldProps {
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[function_component(BoolField)]
pub fn bool_field(props: &ScalarFieldProps) -> Html {
    let checked = props.value.as_ref().and_then(Value::as_bool).unwrap_or(false);
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(Value::Bool(input.checked()));
        })
    };

    html! {
        <input type="checkbox" class="param-bool" {checked} onchange={on_change} />
    }
}

/// Time-of-day picker. The browser's `HH:MM` string is stored as is.
#[function_component(TimeField)]
pub fn time_field(props: &ScalarFieldProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(Value::String(input.value()));
        })
    };

    html! {
        <input
            type="time"
            class="param-time"
            value={text_of(props.value.as_ref())}
            onchange={on_change}
        />
    }
}

#[function_component(TextField)]
pub fn text_field(props: &ScalarFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(Value::String(input.value()));
        })
    };

    html! {
        <input
            type="text"
            class="param-text"
            value={text_of(props.value.as_ref())}
            oninput={on_input}
        />
    }
}

/// Props for the LiteralSelect component.
#[derive(Properties, PartialEq)]
pub struct LiteralSelectProps {
    pub options: Vec<String>,
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
}

#[function_component(LiteralSelect)]
pub fn literal_select(props: &LiteralSelectProps) -> Html {
    let current = props.value.as_ref().and_then(Value::as_str);
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(Value::String(select.value()));
        })
    };

    html! {
        <select class="param-literal" onchange={on_change}>
            <option value="" disabled=true selected={current.is_none()}>{"Select..."}</option>
            { for props.options.iter().map(|option| html! {
                <option
                    key={option.clone()}
                    value={option.clone()}
                    selected={current == Some(option.as_str())}
                >
                    {option}
                </option>
            }) }
        </select>
    }
}
