//! RGBCCT color editor.

use ledpanel_core::{ColorChannel, ColorDraft};
use serde_json::Value;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Props for the ColorInputs component.
#[derive(Properties, PartialEq)]
pub struct ColorInputsProps {
    #[prop_or_default]
    pub value: Option<Value>,
    pub on_change: Callback<Value>,
}

/// Five channel fields plus an RGB picker.
///
/// Channel text that is not a valid 0–255 integer yet stays local until the
/// field loses focus.
#[function_component(ColorInputs)]
pub fn color_inputs(props: &ColorInputsProps) -> Html {
    let draft = use_mut_ref(|| ColorDraft::new(props.value.as_ref()));
    let trigger = use_force_update();

    draft.borrow_mut().observe(props.value.as_ref());
    let snapshot = draft.borrow().clone();

    let channel_input = |channel: ColorChannel| {
        let on_input = {
            let draft = draft.clone();
            let trigger = trigger.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let emitted = draft.borrow_mut().input(channel, &input.value());
                trigger.force_update();
                if let Some(color) = emitted {
                    on_change.emit(color.to_value());
                }
            })
        };
        let on_blur = {
            let draft = draft.clone();
            let trigger = trigger.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: FocusEvent| {
                let color = draft.borrow_mut().blur(channel);
                trigger.force_update();
                on_change.emit(color.to_value());
            })
        };

        html! {
            <label class="color-channel" key={channel.key()}>
                <span class="color-channel-label">{channel.label()}</span>
                <input
                    type="number"
                    min="0"
                    max="255"
                    step="1"
                    value={snapshot.text(channel).to_string()}
                    oninput={on_input}
                    onblur={on_blur}
                />
            </label>
        }
    };

    let on_pick = {
        let draft = draft.clone();
        let trigger = trigger.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let picked = draft.borrow_mut().pick(&input.value());
            trigger.force_update();
            match picked {
                Some(color) => on_change.emit(color.to_value()),
                None => tracing::warn!("Ignoring malformed color pick {}", input.value()),
            }
        })
    };

    html! {
        <div class="color-inputs">
            { for ColorChannel::ALL.into_iter().map(channel_input) }
            <input
                type="color"
                class="color-picker"
                value={snapshot.color().hex()}
                oninput={on_pick}
            />
        </div>
    }
}
