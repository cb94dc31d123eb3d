use ledpanel_core::NumberSpec;
use serde_json::Value;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Props for the NumberField component.
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub spec: NumberSpec,
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
}

/// Number input. Every keystroke emits what parses (or `null`); bounds are
/// enforced on blur.
#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    let spec = props.spec;

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(spec.parse(&input.value()));
        })
    };

    let on_blur = {
        let on_change = props.on_change.clone();
        let value = props.value.clone();
        Callback::from(move |_: FocusEvent| {
            if let Some(clamped) = spec.clamp_on_blur(value.as_ref()) {
                on_change.emit(clamped);
            }
        })
    };

    html! {
        <input
            type="number"
            class="param-number"
            step={spec.kind.step()}
            min={spec.min.map(|min| min.to_string())}
            max={spec.max.map(|max| max.to_string())}
            value={NumberSpec::display(props.value.as_ref())}
            oninput={on_input}
            onblur={on_blur}
        />
    }
}
