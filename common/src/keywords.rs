//! キーワードCSV読み込み
//!
//! ヘッダーなしCSVからキーワード列を取り出す。
//! - バッチ版: 各行の最初の空でないセル
//! - Web版: 全行の空でないセルを行順に平坦化
//!
//! 重複除去・件数制限はしない。入力順を保持する。

use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

/// 前後の空白とUTF-8 BOMを除く
///
/// UTF-8でないバイト列（Excelの Windows-1252 保存など）は置換文字で読む
fn clean_cell(cell: &[u8]) -> String {
    String::from_utf8_lossy(cell)
        .trim_start_matches('\u{feff}')
        .trim()
        .to_string()
}

/// 各行の最初の空でないセルをキーワードとして取り出す
pub fn first_cell_keywords<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut keywords = Vec::new();

    for record in csv_reader(reader).byte_records() {
        let record = record?;
        if let Some(cell) = record.iter().map(clean_cell).find(|c| !c.is_empty()) {
            keywords.push(cell);
        }
    }

    Ok(keywords)
}

/// 全セルを行順に平坦化し、空でないものをキーワードとして取り出す
pub fn all_cell_keywords<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut keywords = Vec::new();

    for record in csv_reader(reader).byte_records() {
        let record = record?;
        keywords.extend(record.iter().map(clean_cell).filter(|c| !c.is_empty()));
    }

    Ok(keywords)
}

/// キーワードファイルを読み込む（バッチ版）
///
/// ファイルを開けない場合はIOエラー。途中までの結果は返さない。
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    first_cell_keywords(BufReader::new(file))
}
