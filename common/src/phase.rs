//! 実行フェーズ
//!
//! `Idle → LoadingKeywords → Checking → Done`

/// 1回の実行の進行状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunPhase {
    #[default]
    Idle,
    LoadingKeywords,
    /// `current` 件目（0始まり）の応答待ち
    Checking { current: usize, total: usize },
    Done,
}

impl RunPhase {
    /// 実行中か（再実行ボタンの無効化に使う）
    pub fn is_busy(&self) -> bool {
        matches!(self, RunPhase::LoadingKeywords | RunPhase::Checking { .. })
    }

    /// 進捗率 0.0〜1.0
    pub fn progress(&self) -> f32 {
        match self {
            RunPhase::Idle | RunPhase::LoadingKeywords => 0.0,
            RunPhase::Checking { total: 0, .. } => 0.0,
            RunPhase::Checking { current, total } => *current as f32 / *total as f32,
            RunPhase::Done => 1.0,
        }
    }

    /// `index` 件目が完了した後のフェーズ
    pub fn after_check(index: usize, total: usize) -> Self {
        if index + 1 >= total {
            RunPhase::Done
        } else {
            RunPhase::Checking { current: index + 1, total }
        }
    }
}
