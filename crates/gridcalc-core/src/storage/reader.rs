//! Reader for the line-oriented sheet format.
//!
//! Line 1 carries `<cols> <rows>` (column count first). The next
//! `rows * cols` lines carry one RPN expression per cell, outer loop over
//! row letters `A`, `B`, ... and inner loop over column indices `1..=cols`.
//! That traversal order fixes both evaluation roots and output order.

use std::io::BufRead;

use gridcalc_engine::{CellRef, Graph};

use crate::error::{GridcalcError, Result};
use crate::sheet::{MAX_ROWS, Sheet};

/// Read a sheet from line-oriented text.
pub fn read_sheet<R: BufRead>(input: R) -> Result<Sheet> {
    let mut lines = input.lines();
    let mut line_no = 0usize;

    let header = next_line(&mut lines, &mut line_no)?;
    let (cols, rows) = parse_dimensions(&header)?;

    let mut graph = Graph::new();
    for row in 0..rows {
        for col in 0..cols {
            let expression = next_line(&mut lines, &mut line_no)?;
            graph.define(CellRef::new(row, col), expression.trim());
        }
    }

    Ok(Sheet::new(rows, cols, graph))
}

fn next_line<R: BufRead>(
    lines: &mut std::io::Lines<R>,
    line_no: &mut usize,
) -> Result<String> {
    *line_no += 1;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(GridcalcError::Parse {
            line: *line_no,
            message: "unexpected end of input".to_string(),
        }),
    }
}

fn parse_dimensions(header: &str) -> Result<(usize, usize)> {
    let parse_err = |message: String| GridcalcError::Parse { line: 1, message };

    let mut fields = header.split_whitespace();
    let (Some(cols_str), Some(rows_str), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(parse_err(format!(
            "expected '<cols> <rows>', got '{}'",
            header.trim()
        )));
    };

    let cols: usize = cols_str
        .parse()
        .map_err(|_| parse_err(format!("invalid column count '{}'", cols_str)))?;
    let rows: usize = rows_str
        .parse()
        .map_err(|_| parse_err(format!("invalid row count '{}'", rows_str)))?;

    if cols == 0 || rows == 0 {
        return Err(parse_err("dimensions must be positive".to_string()));
    }
    if rows > MAX_ROWS {
        return Err(parse_err(format!(
            "row count {} exceeds the {}-row limit of single-letter row ids",
            rows, MAX_ROWS
        )));
    }

    Ok((cols, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_cells_in_row_major_order() {
        let input = "2 2\n1\n2\n3\n4\n";
        let mut sheet = read_sheet(input.as_bytes()).unwrap();
        assert_eq!(sheet.rows(), 2);
        assert_eq!(sheet.cols(), 2);
        assert_eq!(sheet.evaluate().unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_header_is_cols_then_rows() {
        // 3 columns, 1 row: cells A1, A2, A3.
        let input = "3 1\n10\nA1\nA2\n";
        let mut sheet = read_sheet(input.as_bytes()).unwrap();
        assert_eq!(sheet.evaluate().unwrap(), vec![10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_missing_cell_line_is_a_parse_error() {
        let err = read_sheet("2 2\n1\n2\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GridcalcError::Parse { line: 5, .. }));
    }

    #[test]
    fn test_malformed_header_is_a_parse_error() {
        for input in ["", "2", "2 2 2", "x 2", "2 x", "0 1", "1 0"] {
            let err = read_sheet(input.as_bytes()).unwrap_err();
            assert!(
                matches!(err, GridcalcError::Parse { line: 1, .. }),
                "header {:?} should fail on line 1",
                input
            );
        }
    }

    #[test]
    fn test_row_count_is_capped_at_26() {
        assert!(read_sheet("1 27\n".as_bytes()).is_err());
    }
}
