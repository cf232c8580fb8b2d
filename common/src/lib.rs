//! Local Pack Checker Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod keywords;
pub mod serper;
pub mod checker;
pub mod export;
pub mod phase;

pub use types::{CheckResult, LocalPack, RunSummary};
pub use error::{Error, Result};
pub use keywords::{all_cell_keywords, first_cell_keywords, load_keywords};
pub use serper::{has_local_pack, SearchApi, SearchRequest, API_KEY_HEADER, SERPER_SEARCH_URL};
pub use checker::{check_keyword, check_keywords};
pub use export::{
    read_batch_csv, read_results_csv, results_to_csv, write_batch_csv, write_batch_file,
    DOWNLOAD_FILE_NAME,
};
pub use phase::RunPhase;
