//! メインアプリケーションコンポーネント

use crate::api::serper::FetchClient;
use crate::components::{
    export_buttons::ExportButtons,
    header::Header,
    progress_bar::ProgressBar,
    results_table::ResultsTable,
    settings_panel::SettingsPanel,
    upload_area::{UploadArea, UploadResult},
};
use crate::export::download::download_csv;
use leptos::prelude::*;
use leptos::task::spawn_local;
use local_pack_common::{check_keywords, results_to_csv, CheckResult, RunPhase, RunSummary, DOWNLOAD_FILE_NAME};

const DEFAULT_LOCATION: &str = "Los Angeles, CA";

/// ビルド時の SERPER_API_KEY を初期値にする
fn build_time_api_key() -> String {
    option_env!("SERPER_API_KEY").unwrap_or_default().to_string()
}

/// 空白のみの地域は未指定扱い
fn normalize_location(location: &str) -> Option<&str> {
    Some(location.trim()).filter(|l| !l.is_empty())
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) = signal(build_time_api_key());
    let (location, set_location) = signal(DEFAULT_LOCATION.to_string());
    let (keywords, set_keywords) = signal(Vec::<String>::new());
    let (keyword_count, set_keyword_count) = signal(0usize);
    let (results, set_results) = signal(Vec::<CheckResult>::new());
    let (phase, set_phase) = signal(RunPhase::Idle);
    let (message, set_message) = signal(None::<String>);

    let is_busy = Signal::derive(move || phase.get().is_busy());
    let can_check = Signal::derive(move || !keywords.get().is_empty());
    let has_results = Signal::derive(move || !results.get().is_empty());

    // アップロード開始
    let on_reading = move |_| {
        set_phase.set(RunPhase::LoadingKeywords);
        set_message.set(None);
    };

    // キーワード読み込み完了
    let on_keywords_loaded = move |loaded: UploadResult| {
        match loaded {
            Ok((file_name, new_keywords)) => {
                web_sys::console::log_1(
                    &format!("{}: {} keywords", file_name, new_keywords.len()).into(),
                );
                set_keyword_count.set(new_keywords.len());
                set_keywords.set(new_keywords);
            }
            Err(e) => {
                set_keyword_count.set(0);
                set_keywords.set(Vec::new());
                set_message.set(Some(e));
            }
        }
        set_results.set(Vec::new());
        set_phase.set(RunPhase::Idle);
    };

    // チェック開始（1件ずつ順番に）
    let on_check = move |_| {
        if phase.get_untracked().is_busy() {
            return;
        }

        let client = match FetchClient::new(&api_key.get_untracked()) {
            Ok(client) => client,
            Err(e) => {
                set_message.set(Some(e.to_string()));
                return;
            }
        };

        let keywords = keywords.get_untracked();
        let location = location.get_untracked();
        let total = keywords.len();

        set_message.set(None);
        set_results.set(Vec::new());
        set_phase.set(RunPhase::Checking { current: 0, total });

        spawn_local(async move {
            let location = normalize_location(&location);
            check_keywords(&client, &keywords, location, |index, result| {
                if let Some(e) = &result.error {
                    web_sys::console::warn_1(
                        &format!("Error checking \"{}\": {}", result.keyword, e).into(),
                    );
                }
                set_results.update(|r| r.push(result.clone()));
                set_phase.set(RunPhase::after_check(index, total));
            })
            .await;

            let summary = RunSummary::from_results(&results.get_untracked());
            if summary.failed > 0 {
                set_message.set(Some(format!(
                    "{} check(s) failed and were recorded as \"No\"",
                    summary.failed
                )));
            }
            set_phase.set(RunPhase::Done);
        });
    };

    // CSVダウンロード（クライアント側のみ）
    let on_download = move |_| {
        let downloaded = results_to_csv(&results.get_untracked())
            .map_err(|e| e.to_string())
            .and_then(|csv| {
                download_csv(&csv, DOWNLOAD_FILE_NAME).map_err(|e| format!("{:?}", e))
            });
        if let Err(e) = downloaded {
            set_message.set(Some(format!("Download failed: {}", e)));
        }
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                api_key=api_key
                set_api_key=set_api_key
                location=location
                set_location=set_location
            />

            <UploadArea
                keyword_count=keyword_count
                disabled=is_busy
                on_reading=on_reading
                on_keywords_loaded=on_keywords_loaded
            />

            <ExportButtons
                can_check=can_check
                is_checking=is_busy
                has_results=has_results
                on_check=on_check
                on_download=on_download
            />

            <Show when=move || is_busy.get()>
                <ProgressBar phase=phase />
            </Show>

            <Show when=move || message.get().is_some()>
                <p class="message">{move || message.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || has_results.get()>
                <ResultsTable results=results />
            </Show>
        </div>
    }
}
