//! Icon-prefixed form input bound to a string signal.

use leptos::prelude::*;

/// Single form field. Password fields get a show/hide toggle.
#[component]
pub fn InputBox(
    name: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    icon: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let is_password = input_type == "password";
    let visible = RwSignal::new(false);
    let current_type = move || if is_password && visible.get() { "text" } else { input_type };

    view! {
        <div class="input-box">
            <input
                class="input-box__field"
                name=name
                id=name
                type=current_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <i class=format!("fi {icon} input-icon")></i>
            <Show when=move || is_password>
                <i
                    class=move || {
                        if visible.get() { "fi fi-rr-eye input-icon input-icon--toggle" } else { "fi fi-rr-eye-crossed input-icon input-icon--toggle" }
                    }
                    on:click=move |_| visible.update(|v| *v = !*v)
                ></i>
            </Show>
        </div>
    }
}
