mod components;
mod storage;
mod store;

use components::settings_drawer::SettingsDrawer;
use store::{State, StoreContext};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(State::default);
    let font_scale = format!("font-size: {}em;", store.config.fontsize);

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
            <div class="app-container" style={font_scale}>
                <header class="app-header">
                    <SettingsDrawer />
                </header>
                <div class="main-stage"></div>
            </div>
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
