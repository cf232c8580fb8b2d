//! キーワードCSVアップロードコンポーネント

use leptos::prelude::*;
use local_pack_common::all_cell_keywords;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

/// 読み込み結果: (ファイル名, キーワード) またはエラーメッセージ
pub type UploadResult = Result<(String, Vec<String>), String>;

#[component]
pub fn UploadArea<FS, F>(
    keyword_count: ReadSignal<usize>,
    disabled: Signal<bool>,
    on_reading: FS,
    on_keywords_loaded: F,
) -> impl IntoView
where
    FS: Fn(()) + 'static,
    F: Fn(UploadResult) + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_reading(());
            read_file(file, on_keywords_loaded.clone());
        }
        // 同じファイルを再選択しても change が発火するように
        input.set_value("");
    };

    view! {
        <div class="upload-area">
            <input type="file" accept=".csv" disabled=move || disabled.get() on:change=on_change />
            <p class="text-muted">
                {move || match keyword_count.get() {
                    0 => "Upload a CSV of keywords (every non-empty cell is a keyword)".to_string(),
                    1 => "1 keyword loaded".to_string(),
                    n => format!("{} keywords loaded", n),
                }}
            </p>
        </div>
    }
}

/// 読み込みに失敗した場合の結果
///
/// エラー時もこの結果を返し、呼び出し側が読み込み中の状態を抜けられるようにする
fn read_failed(file_name: &str, detail: &str) -> UploadResult {
    Err(format!("Failed to read {}: {}", file_name, detail))
}

/// FileReader の結果テキストからキーワードを取り出す
fn parse_loaded(file_name: &str, text: Option<String>) -> UploadResult {
    let Some(text) = text else {
        return read_failed(file_name, "no text content");
    };
    all_cell_keywords(text.as_bytes())
        .map(|keywords| (file_name.to_string(), keywords))
        .map_err(|e| format!("Failed to parse {}: {}", file_name, e))
}

fn read_file<F>(file: File, on_loaded: F)
where
    F: Fn(UploadResult) + 'static + Clone,
{
    let file_name = file.name();
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            on_loaded(read_failed(&file_name, &format!("{:?}", e)));
            return;
        }
    };

    let reader_clone = reader.clone();
    let file_name_clone = file_name.clone();
    let on_loaded_clone = on_loaded.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let text = reader_clone.result().ok().and_then(|value| value.as_string());
        on_loaded_clone(parse_loaded(&file_name_clone, text));
    }) as Box<dyn FnMut(_)>);

    let reader_clone = reader.clone();
    let file_name_clone = file_name.clone();
    let on_loaded_clone = on_loaded.clone();
    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let detail = reader_clone
            .error()
            .map(|e| e.message())
            .unwrap_or_else(|| "unknown error".to_string());
        on_loaded_clone(read_failed(&file_name_clone, &detail));
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if let Err(e) = reader.read_as_text(&file) {
        web_sys::console::warn_1(&format!("Failed to read {}: {:?}", file_name, e).into());
        on_loaded(read_failed(&file_name, &format!("{:?}", e)));
    }
}
