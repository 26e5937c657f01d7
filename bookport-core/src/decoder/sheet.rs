//! Spreadsheet decoder - the tabular normalization path
//!
//! Reads the first worksheet of an `.xlsx`/`.xls` file, classifies the header
//! row onto canonical fields and coerces every data row into a [`BookRecord`].

use super::Decoder;
use crate::coerce;
use crate::error::{ParseError, Result};
use crate::mapping::{classify_header, Field, REQUIRED_FIELDS};
use crate::types::BookRecord;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Decoder for spreadsheet inputs
pub struct SheetDecoder;

impl SheetDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SheetDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for SheetDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<BookRecord>> {
        if !path.exists() {
            return Err(ParseError::InputNotFound(path.to_path_buf()).into());
        }

        let mut workbook =
            open_workbook_auto(path).map_err(|e| ParseError::Sheet(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ParseError::EmptyWorkbook)?
            .map_err(|e| ParseError::Sheet(e.to_string()))?;

        let mut rows = range.rows();
        let Some(headers) = rows.next() else {
            tracing::warn!("worksheet is empty, nothing to convert");
            return Ok(Vec::new());
        };

        let records = decode_rows(headers, rows);
        tracing::info!("converted {} records from {}", records.len(), path.display());
        Ok(records)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["xlsx", "xls"]
    }
}

/// A header-row column with its resolved canonical field, if any
struct Column {
    name: String,
    field: Option<Field>,
}

/// Normalize data rows against the given header row.
///
/// Rows shorter than the header are padded with empty cells; a missing or
/// empty serial cell falls back to the 1-based row position.
fn decode_rows<'a, I>(headers: &[Data], rows: I) -> Vec<BookRecord>
where
    I: Iterator<Item = &'a [Data]>,
{
    let columns: Vec<Column> = headers
        .iter()
        .map(|cell| {
            let name = coerce::text_from_cell(cell);
            let field = classify_header(&name);
            Column { name, field }
        })
        .collect();

    for required in REQUIRED_FIELDS {
        if !columns.iter().any(|c| c.field == Some(*required)) {
            tracing::warn!(
                "no column maps to required field '{}'",
                required.json_name()
            );
        }
    }

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        let mut record = BookRecord::default();
        let mut serial_set = false;

        for (i, column) in columns.iter().enumerate() {
            let cell = row.get(i).unwrap_or(&Data::Empty);
            match column.field {
                Some(Field::Serial) => {
                    if let Some(n) = coerce::serial_from_cell(cell) {
                        record.serial = n;
                        serial_set = true;
                    }
                }
                Some(Field::Title) => record.title = coerce::text_from_cell(cell),
                Some(Field::Kind) => record.kind = coerce::text_from_cell(cell),
                Some(Field::Author) => record.author = coerce::text_from_cell(cell),
                Some(Field::Description) => record.description = coerce::text_from_cell(cell),
                Some(Field::GradeLevel) => record.grade_level = coerce::text_from_cell(cell),
                Some(Field::Purchased) => record.purchased = coerce::bool_from_cell(cell),
                Some(Field::Read) => record.read = coerce::bool_from_cell(cell),
                Some(Field::IntensiveRead) => {
                    record.intensive_read = coerce::bool_from_cell(cell)
                }
                Some(Field::Cover) => record.cover = coerce::text_from_cell(cell),
                None => {
                    if !column.name.is_empty() {
                        if let Some(value) = coerce::value_from_cell(cell) {
                            record.extra.insert(column.name.clone(), value);
                        }
                    }
                }
            }
        }

        if !serial_set {
            record.serial = idx as u32 + 1;
        }
        records.push(record);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<Data> {
        names.iter().map(|n| Data::String(n.to_string())).collect()
    }

    #[test]
    fn test_basic_row() {
        let headers = headers(&["序号", "书名", "书籍类型", "作者", "是否购买"]);
        let row = vec![
            Data::Int(1),
            Data::String("三国演义".into()),
            Data::String("小说".into()),
            Data::String("罗贯中".into()),
            Data::String("是".into()),
        ];

        let records = decode_rows(&headers, std::iter::once(row.as_slice()));
        assert_eq!(records.len(), 1);
        let book = &records[0];
        assert_eq!(book.serial, 1);
        assert_eq!(book.title, "三国演义");
        assert_eq!(book.kind, "小说");
        assert_eq!(book.author, "罗贯中");
        assert!(book.purchased);
        assert!(!book.read);
        assert!(!book.intensive_read);
        assert_eq!(book.cover, "");
    }

    #[test]
    fn test_missing_serial_uses_row_position() {
        let headers = headers(&["书名"]);
        let rows = [
            vec![Data::String("夏洛的网".into())],
            vec![Data::String("小王子".into())],
        ];

        let records = decode_rows(&headers, rows.iter().map(Vec::as_slice));
        assert_eq!(records[0].serial, 1);
        assert_eq!(records[1].serial, 2);
    }

    #[test]
    fn test_empty_serial_cell_uses_row_position() {
        let headers = headers(&["序号", "书名"]);
        let rows = [
            vec![Data::Int(7), Data::String("A".into())],
            vec![Data::Empty, Data::String("B".into())],
        ];

        let records = decode_rows(&headers, rows.iter().map(Vec::as_slice));
        assert_eq!(records[0].serial, 7);
        assert_eq!(records[1].serial, 2);
    }

    #[test]
    fn test_unparsable_serial_becomes_zero() {
        let headers = headers(&["序号", "书名"]);
        let rows = [vec![Data::String("第一".into()), Data::String("A".into())]];

        let records = decode_rows(&headers, rows.iter().map(Vec::as_slice));
        assert_eq!(records[0].serial, 0);
    }

    #[test]
    fn test_short_rows_padded() {
        let headers = headers(&["序号", "书名", "作者"]);
        let rows = [vec![Data::Int(1)]];

        let records = decode_rows(&headers, rows.iter().map(Vec::as_slice));
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].author, "");
    }

    #[test]
    fn test_passthrough_column_preserved() {
        let headers = headers(&["书名", "出版社"]);
        let rows = [
            vec![Data::String("A".into()), Data::String("人民文学".into())],
            vec![Data::String("B".into()), Data::Empty],
        ];

        let records = decode_rows(&headers, rows.iter().map(Vec::as_slice));
        assert_eq!(records[0].extra["出版社"], "人民文学");
        // empty passthrough cells are omitted, never null
        assert!(records[1].extra.is_empty());
    }

    #[test]
    fn test_record_count_matches_row_count() {
        let headers = headers(&["书名"]);
        let rows: Vec<Vec<Data>> = (0..25)
            .map(|i| vec![Data::String(format!("book {i}"))])
            .collect();

        let records = decode_rows(&headers, rows.iter().map(Vec::as_slice));
        assert_eq!(records.len(), 25);
    }

    #[test]
    fn test_nonexistent_file() {
        let err = SheetDecoder::new()
            .decode(Path::new("/nonexistent/books.xlsx"))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::ConvertError::Parse(ParseError::InputNotFound(_))
        ));
    }
}
