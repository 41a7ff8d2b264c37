use super::settings_fields::{
    ApiKeyInput, FontSizeSlider, PrePromptSwitch, SaveSessionSwitch, TemperatureSlider,
};
use crate::store::StoreContext;
use shared::settings::{Dismiss, FocusTarget, PanelItem, SettingsPanel};
use web_sys::HtmlElement;
use yew::prelude::*;

#[function_component(SettingsDrawer)]
pub fn settings_drawer() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let panel = use_state(|| SettingsPanel::mount(&store.config));
    let anchor_ref = use_node_ref();
    let key_ref = use_node_ref();

    // Redirect the first focus so an existing key is not opened for editing
    {
        let target = match panel.initial_focus(&store.config) {
            FocusTarget::HiddenAnchor => anchor_ref.clone(),
            FocusTarget::Default => key_ref.clone(),
        };
        use_effect_with(panel.is_open(), move |is_open| {
            if *is_open && let Some(element) = target.cast::<HtmlElement>() {
                let _ = element.focus();
            }
            || ()
        });
    }

    let on_open = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *panel;
            next.open();
            panel.set(next);
        })
    };

    let dismiss = {
        let panel = panel.clone();
        Callback::from(move |reason: Dismiss| {
            let mut next = *panel;
            next.close(reason);
            panel.set(next);
        })
    };

    let on_keydown = {
        let panel = panel.clone();
        Callback::from(move |e: KeyboardEvent| {
            let mut next = *panel;
            if next.handle_key(&e.key()) {
                panel.set(next);
            }
        })
    };

    // The key editor's input is gone once it is left; keep focus in the drawer
    let on_key_edit_end = {
        let panel = panel.clone();
        let anchor_ref = anchor_ref.clone();
        let key_ref = key_ref.clone();
        Callback::from(move |_: ()| {
            let target = match panel.focus_after_key_edit() {
                FocusTarget::HiddenAnchor => &anchor_ref,
                FocusTarget::Default => &key_ref,
            };
            if let Some(element) = target.cast::<HtmlElement>() {
                let _ = element.focus();
            }
        })
    };

    let render_item = |item: &PanelItem| match item {
        PanelItem::ApiKey => html! { <ApiKeyInput preview_ref={key_ref.clone()} on_edit_end={on_key_edit_end.clone()} /> },
        PanelItem::Temperature => html! { <TemperatureSlider /> },
        PanelItem::FontSize => html! { <FontSizeSlider /> },
        PanelItem::Separator => html! { <hr class="divider" /> },
        PanelItem::SaveSession => html! { <SaveSessionSwitch /> },
        PanelItem::PrePrompt => html! { <PrePromptSwitch /> },
    };

    html! {
        <>
            <button class="icon-btn" onclick={on_open} title="Settings" aria-label="Open settings">
                <svg viewBox="0 0 24 24"><path d="M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z"></path></svg>
            </button>

            if panel.is_open() {
                <>
                    <div class="drawer-overlay" onclick={dismiss.reform(|_: MouseEvent| Dismiss::Overlay)}></div>
                    <div class="drawer-content drawer-left" tabindex="-1" onkeydown={on_keydown}>
                        <div class="drawer-header">
                            <h2 class="drawer-title">{"Settings"}</h2>
                            <button class="close-btn" onclick={dismiss.reform(|_: MouseEvent| Dismiss::CloseButton)}>{"×"}</button>
                        </div>
                        <div class="drawer-body">
                            { for panel.layout().iter().map(render_item) }
                            <input class="visually-hidden" tabindex="-1" aria-hidden="true" ref={anchor_ref} />
                        </div>
                    </div>
                </>
            }
        </>
    }
}
