//! チェック結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - LocalPack: ローカルパック有無（"Yes" / "No"）
//! - CheckResult: キーワード1件分の結果
//! - RunSummary: 1回の実行の集計

use serde::{Deserialize, Serialize};
use std::fmt;

/// ローカルパック有無
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalPack {
    Yes,
    #[default]
    No,
}

impl LocalPack {
    pub fn is_yes(&self) -> bool {
        matches!(self, LocalPack::Yes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocalPack::Yes => "Yes",
            LocalPack::No => "No",
        }
    }
}

impl From<bool> for LocalPack {
    fn from(found: bool) -> Self {
        if found {
            LocalPack::Yes
        } else {
            LocalPack::No
        }
    }
}

impl fmt::Display for LocalPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// キーワード1件のチェック結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub keyword: String,

    pub has_local_pack: LocalPack,

    #[serde(default)]
    pub location: Option<String>,

    /// API呼び出し失敗時のメッセージ（CSVには出力しない）
    #[serde(skip)]
    pub error: Option<String>,
}

impl CheckResult {
    /// APIレスポンスを得られた場合
    pub fn found(keyword: impl Into<String>, location: Option<&str>, has_local_pack: bool) -> Self {
        Self {
            keyword: keyword.into(),
            has_local_pack: has_local_pack.into(),
            location: location.map(str::to_string),
            error: None,
        }
    }

    /// API呼び出しに失敗した場合。結果は常に "No"
    pub fn failed(
        keyword: impl Into<String>,
        location: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            has_local_pack: LocalPack::No,
            location: location.map(str::to_string),
            error: Some(message.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// 実行結果の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub with_local_pack: usize,
    pub without_local_pack: usize,
    /// "No" のうちAPI失敗によるもの
    pub failed: usize,
}

impl RunSummary {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let with_local_pack = results.iter().filter(|r| r.has_local_pack.is_yes()).count();
        Self {
            total: results.len(),
            with_local_pack,
            without_local_pack: results.len() - with_local_pack,
            failed: results.iter().filter(|r| r.is_failed()).count(),
        }
    }
}
