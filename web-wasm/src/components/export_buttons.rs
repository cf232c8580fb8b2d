//! チェック開始・CSVダウンロードボタン

use leptos::prelude::*;

#[component]
pub fn ExportButtons<FC, FD>(
    can_check: Signal<bool>,
    is_checking: Signal<bool>,
    has_results: Signal<bool>,
    on_check: FC,
    on_download: FD,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
    FD: Fn(()) + 'static + Clone,
{
    view! {
        <div class="export-buttons">
            <button
                class="btn btn-primary"
                disabled=move || !can_check.get() || is_checking.get()
                on:click={
                    let on_check = on_check.clone();
                    move |_| on_check(())
                }
            >
                {move || if is_checking.get() { "Checking..." } else { "Check Keywords" }}
            </button>

            <button
                class="btn btn-secondary"
                disabled=move || !has_results.get() || is_checking.get()
                on:click={
                    let on_download = on_download.clone();
                    move |_| on_download(())
                }
            >
                "📥 Download Results as CSV"
            </button>
        </div>
    }
}
