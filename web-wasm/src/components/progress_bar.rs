//! プログレスバーコンポーネント

use leptos::prelude::*;
use local_pack_common::RunPhase;

#[component]
pub fn ProgressBar(phase: ReadSignal<RunPhase>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", phase.get().progress() * 100.0)
                />
            </div>
            <p class="progress-text">
                {move || match phase.get() {
                    RunPhase::Checking { current, total } => {
                        format!("Checking {} of {}...", current + 1, total)
                    }
                    RunPhase::LoadingKeywords => "Loading keywords...".to_string(),
                    _ => String::new(),
                }}
            </p>
        </div>
    }
}
