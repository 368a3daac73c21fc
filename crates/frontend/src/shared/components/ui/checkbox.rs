use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Controlled checkbox: the box always shows `checked`, and a click only
/// reports the requested value. The owner flips `checked` once the change
/// has been accepted (e.g. after the server confirmed it).
#[component]
pub fn Checkbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <input
                type="checkbox"
                class="form__checkbox"
                title=move || title.get().unwrap_or_default()
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let requested = event_target_checked(&ev);
                    if let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        input.set_checked(checked.get_untracked());
                    }
                    on_change.run(requested);
                }
            />
        </div>
    }
}
