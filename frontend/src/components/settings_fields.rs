use crate::store::{StoreContext, StoreHandle};
use shared::settings::{
    ApiKeyField, FontSizeField, PrePromptField, SaveSessionField, SliderBinding, SliderField,
    TemperatureField,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ApiKeyInputProps {
    /// Preview element; focusing it enters edit mode.
    pub preview_ref: NodeRef,
    /// Fired after an edit is left with Enter or Escape.
    pub on_edit_end: Callback<()>,
}

#[function_component(ApiKeyInput)]
pub fn api_key_input(props: &ApiKeyInputProps) -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let field = use_state(|| ApiKeyField::new(&store.config));
    let input_ref = use_node_ref();
    // Set by Enter/Escape; a blur commit leaves focus where the user put it
    let left_by_key = use_mut_ref(|| false);

    {
        let input_ref = input_ref.clone();
        let left_by_key = left_by_key.clone();
        let on_edit_end = props.on_edit_end.clone();
        use_effect_with(field.is_editing(), move |editing| {
            if *editing {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            } else if left_by_key.replace(false) {
                on_edit_end.emit(());
            }
            || ()
        });
    }

    // Key replaced from outside the drawer
    {
        let field = field.clone();
        use_effect_with(store.config.clone(), move |config| {
            if !field.is_editing() {
                let mut next = (*field).clone();
                next.sync(config);
                field.set(next);
            }
            || ()
        });
    }

    let on_edit = {
        let field = field.clone();
        let store = store.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*field).clone();
            next.begin_edit(&store.config);
            field.set(next);
        })
    };

    let on_input = {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*field).clone();
            next.input(input.value());
            field.set(next);
        })
    };

    let on_submit = {
        let field = field.clone();
        let handle = StoreHandle(store.clone());
        Callback::from(move |_: ()| {
            let mut next = (*field).clone();
            next.commit(&handle);
            field.set(next);
        })
    };

    let on_keydown = {
        let field = field.clone();
        let on_submit = on_submit.clone();
        let left_by_key = left_by_key.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                *left_by_key.borrow_mut() = true;
                on_submit.emit(());
            }
            "Escape" => {
                // Cancel the edit without closing the drawer
                e.stop_propagation();
                *left_by_key.borrow_mut() = true;
                let mut next = (*field).clone();
                next.cancel();
                field.set(next);
            }
            _ => {}
        })
    };

    html! {
        <div class="form-group">
            <label class="form-label">{"API Key"}</label>
            if field.is_editing() {
                <input type="text" class="form-input editable-input"
                    ref={input_ref}
                    value={field.display().to_string()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    onblur={on_submit.reform(|_: FocusEvent| ())}
                />
            } else {
                <span class="editable-preview" tabindex="0"
                    ref={props.preview_ref.clone()}
                    onfocus={on_edit}
                >
                    if field.display().is_empty() {
                        {"Enter your API key..."}
                    } else {
                        {field.display()}
                    }
                </span>
            }
        </div>
    }
}

fn slider_view<B>(label: &str, field: UseStateHandle<SliderField<B>>, handle: StoreHandle) -> Html
where
    B: SliderBinding + Clone + 'static,
{
    let scale = field.scale();
    let span = f32::from(scale.max - scale.min);
    let offset = |position: u8| f32::from(position - scale.min) / span * 100.0;

    let on_input = {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(position) = input.value().parse::<u8>() {
                let mut next = (*field).clone();
                next.set_position(position, &handle);
                field.set(next);
            }
        })
    };

    let on_mouse_enter = {
        let field = field.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*field).clone();
            next.hover_enter();
            field.set(next);
        })
    };

    let on_mouse_leave = {
        let field = field.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*field).clone();
            next.hover_leave();
            field.set(next);
        })
    };

    html! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <div class="slider" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
                if let Some(tooltip) = field.tooltip() {
                    <div class="slider-tooltip" style={format!("left: {}%;", offset(field.position()))}>
                        {tooltip}
                    </div>
                }
                <input type="range" class="slider-input"
                    min={scale.min.to_string()}
                    max={scale.max.to_string()}
                    step="1"
                    value={field.position().to_string()}
                    oninput={on_input}
                />
                <div class="slider-marks">
                    { for field.marks().into_iter().map(|mark| html! {
                        <span class="slider-mark" style={format!("left: {}%;", offset(mark.position))}>
                            {mark.label}
                        </span>
                    })}
                </div>
            </div>
        </div>
    }
}

#[function_component(TemperatureSlider)]
pub fn temperature_slider() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let handle = StoreHandle(store);
    let field = use_state(|| TemperatureField::new(&handle));
    slider_view("Temperature", field, handle)
}

#[function_component(FontSizeSlider)]
pub fn font_size_slider() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let handle = StoreHandle(store);
    let field = use_state(|| FontSizeField::new(&handle));
    slider_view("Font Size", field, handle)
}

#[function_component(SaveSessionSwitch)]
pub fn save_session_switch() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let field = SaveSessionField::default();

    let on_toggle = {
        let handle = StoreHandle(store.clone());
        Callback::from(move |_: MouseEvent| {
            field.toggle(&handle, &handle);
        })
    };

    html! {
        <div class="form-group form-row">
            <label class="form-label">{"Save Session History"}</label>
            <label class="switch">
                <input type="checkbox"
                    checked={field.is_checked(&store.config)}
                    disabled={!field.is_enabled()}
                    onclick={on_toggle}
                />
                <span class="slider round"></span>
            </label>
        </div>
    }
}

#[function_component(PrePromptSwitch)]
pub fn pre_prompt_switch() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let on_toggle = {
        let handle = StoreHandle(store.clone());
        Callback::from(move |_: MouseEvent| PrePromptField.toggle(&handle))
    };

    html! {
        <div class="form-group form-row">
            <label class="form-label">{"Slash Commands (experimental)"}</label>
            <label class="switch">
                <input type="checkbox"
                    checked={PrePromptField.is_checked(&store.config)}
                    onclick={on_toggle}
                />
                <span class="slider round"></span>
            </label>
        </div>
    }
}
