//! 結果CSVの出力と読み戻し
//!
//! 2種類の形式:
//! - バッチ版: `Keyword,Has Local Pack[,Location]`
//! - Web版ダウンロード: `keyword,hasLocalPack,location`

use crate::error::Result;
use crate::types::{CheckResult, LocalPack};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Web版ダウンロード時のファイル名
pub const DOWNLOAD_FILE_NAME: &str = "local-pack-results.csv";

const BATCH_HEADER: [&str; 2] = ["Keyword", "Has Local Pack"];
const BATCH_HEADER_WITH_LOCATION: [&str; 3] = ["Keyword", "Has Local Pack", "Location"];
const DOWNLOAD_HEADER: [&str; 3] = ["keyword", "hasLocalPack", "location"];

#[derive(Debug, Deserialize)]
struct BatchRow {
    #[serde(rename = "Keyword")]
    keyword: String,

    #[serde(rename = "Has Local Pack")]
    has_local_pack: LocalPack,

    #[serde(rename = "Location", default)]
    location: Option<String>,
}

/// バッチ版の結果CSVを書き出す
///
/// 結果が空でもヘッダー行は出力する
pub fn write_batch_csv<W: Write>(
    writer: W,
    results: &[CheckResult],
    include_location: bool,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    if include_location {
        wtr.write_record(BATCH_HEADER_WITH_LOCATION)?;
    } else {
        wtr.write_record(BATCH_HEADER)?;
    }

    for result in results {
        if include_location {
            wtr.write_record([
                result.keyword.as_str(),
                result.has_local_pack.as_str(),
                result.location.as_deref().unwrap_or(""),
            ])?;
        } else {
            wtr.write_record([result.keyword.as_str(), result.has_local_pack.as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// バッチ版の結果CSVをファイルへ書き出す（既存ファイルは上書き）
pub fn write_batch_file(path: &Path, results: &[CheckResult], include_location: bool) -> Result<()> {
    let file = File::create(path)?;
    write_batch_csv(BufWriter::new(file), results, include_location)
}

/// Web版ダウンロード用のCSV文字列を生成
///
/// 列は `CheckResult` のシリアライズ順。結果が空でもヘッダー行は出力する
pub fn results_to_csv(results: &[CheckResult]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(DOWNLOAD_HEADER)?;

    for result in results {
        wtr.serialize(result)?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Web版ダウンロード形式のCSVを読み戻す
pub fn read_results_csv<R: Read>(reader: R) -> Result<Vec<CheckResult>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut results = Vec::new();

    for row in rdr.deserialize() {
        let result: CheckResult = row?;
        results.push(result);
    }

    Ok(results)
}

/// バッチ版の結果CSVを読み戻す（Location列は任意）
pub fn read_batch_csv<R: Read>(reader: R) -> Result<Vec<CheckResult>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut results = Vec::new();

    for row in rdr.deserialize() {
        let row: BatchRow = row?;
        results.push(CheckResult {
            keyword: row.keyword,
            has_local_pack: row.has_local_pack,
            location: row.location.filter(|l| !l.is_empty()),
            error: None,
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<CheckResult> {
        vec![
            CheckResult::found("pizza near me", Some("Los Angeles, CA"), true),
            CheckResult::found("xyzzy123nonsense", Some("Los Angeles, CA"), false),
            CheckResult::failed("tacos, al pastor", Some("Los Angeles, CA"), "HTTP 500"),
        ]
    }

    #[test]
    fn test_batch_csv_header_and_rows() {
        let mut out = Vec::new();
        let results = vec![
            CheckResult::found("pizza near me", None, true),
            CheckResult::found("xyzzy123nonsense", None, false),
        ];
        write_batch_csv(&mut out, &results, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Keyword,Has Local Pack\npizza near me,Yes\nxyzzy123nonsense,No\n"
        );
    }

    #[test]
    fn test_batch_csv_empty_is_header_only() {
        let mut out = Vec::new();
        write_batch_csv(&mut out, &[], false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Keyword,Has Local Pack\n");
    }

    #[test]
    fn test_batch_csv_with_location_column() {
        let mut out = Vec::new();
        write_batch_csv(&mut out, &sample_results()[..1], true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Keyword,Has Local Pack,Location\npizza near me,Yes,\"Los Angeles, CA\"\n"
        );
    }

    #[test]
    fn test_batch_csv_read_back() {
        let results = sample_results();
        let mut out = Vec::new();
        write_batch_csv(&mut out, &results, true).unwrap();

        let parsed = read_batch_csv(out.as_slice()).unwrap();
        assert_eq!(parsed.len(), results.len());
        for (p, r) in parsed.iter().zip(&results) {
            assert_eq!(p.keyword, r.keyword);
            assert_eq!(p.has_local_pack, r.has_local_pack);
            assert_eq!(p.location, r.location);
        }
    }

    #[test]
    fn test_batch_csv_read_back_without_location() {
        let parsed = read_batch_csv("Keyword,Has Local Pack\ngym,Yes\n".as_bytes()).unwrap();
        assert_eq!(parsed, vec![CheckResult::found("gym", None, true)]);
    }

    #[test]
    fn test_download_csv_format() {
        let csv = results_to_csv(&sample_results()[..2]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("keyword,hasLocalPack,location"));
        assert_eq!(lines.next(), Some("pizza near me,Yes,\"Los Angeles, CA\""));
        assert_eq!(lines.next(), Some("xyzzy123nonsense,No,\"Los Angeles, CA\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_download_csv_without_location() {
        let results = vec![CheckResult::failed("dentist", None, "HTTP 500")];
        let csv = results_to_csv(&results).unwrap();
        assert_eq!(csv, "keyword,hasLocalPack,location\ndentist,No,\n");

        let parsed = read_results_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed, vec![CheckResult::found("dentist", None, false)]);
    }

    #[test]
    fn test_download_csv_empty_is_header_only() {
        assert_eq!(results_to_csv(&[]).unwrap(), "keyword,hasLocalPack,location\n");
    }

    #[test]
    fn test_download_csv_read_back() {
        let results = sample_results();
        let csv = results_to_csv(&results).unwrap();

        let parsed = read_results_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[2].keyword, "tacos, al pastor");
        assert_eq!(parsed[2].has_local_pack, LocalPack::No);
        assert_eq!(parsed[0].location.as_deref(), Some("Los Angeles, CA"));
        // 失敗情報はCSVに含まれない
        assert!(parsed.iter().all(|r| r.error.is_none()));
    }
}
