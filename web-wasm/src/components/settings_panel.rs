//! 設定パネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn SettingsPanel(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
    location: ReadSignal<String>,
    set_location: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="api-key">"Serper API Key"</label>
                    <input
                        type="password"
                        id="api-key"
                        placeholder="Enter API key..."
                        prop:value=move || api_key.get()
                        on:input=move |ev| {
                            set_api_key.set(event_target_value(&ev));
                        }
                    />
                    <a
                        href="https://serper.dev/api-key"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="api-key-link"
                    >
                        "Get an API key →"
                    </a>
                </div>

                <div class="form-group">
                    <label for="location">"Location"</label>
                    <input
                        type="text"
                        id="location"
                        placeholder="Search location (e.g., Los Angeles, CA)"
                        prop:value=move || location.get()
                        on:input=move |ev| {
                            set_location.set(event_target_value(&ev));
                        }
                    />
                </div>
            </div>
        </div>
    }
}
