//! 結果テーブルコンポーネント

use leptos::prelude::*;
use local_pack_common::CheckResult;

#[component]
pub fn ResultsTable(results: ReadSignal<Vec<CheckResult>>) -> impl IntoView {
    view! {
        <table class="results-table">
            <thead>
                <tr>
                    <th>"Keyword"</th>
                    <th>"Has Local Pack?"</th>
                    <th>"Location"</th>
                </tr>
            </thead>
            <tbody>
                // 結果は追記のみなので添字をキーにする
                <For
                    each=move || results.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, result)| {
                        let class = if result.is_failed() { "row-failed" } else { "" };
                        let title = result
                            .error
                            .as_ref()
                            .map(|e| format!("Check failed: {}", e))
                            .unwrap_or_default();
                        view! {
                            <tr class=class title=title>
                                <td>{result.keyword}</td>
                                <td>{result.has_local_pack.as_str()}</td>
                                <td>{result.location.unwrap_or_default()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
