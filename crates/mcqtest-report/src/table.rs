//! Console rendering of results tables.

use comfy_table::{Cell, CellAlignment, Table};

use mcqtest_core::codec::{TableRow, HEADER};

/// Build a table with the standard header and the given body rows.
pub fn render_table(rows: &[TableRow]) -> Table {
    let mut table = Table::new();
    table.set_header(HEADER.to_vec());

    for row in rows {
        table.add_row(row.iter().enumerate().map(|(column, value)| {
            let cell = Cell::new(value);
            // Numeric columns read better right-aligned.
            if column < 3 {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        }));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcqtest_core::codec::to_rows;
    use mcqtest_core::model::{Correctness, QuestionRecord};

    #[test]
    fn renders_header_once_and_every_row() {
        let records = vec![
            QuestionRecord {
                question_number: 1,
                answer: "a".into(),
                response: "a".into(),
                response_time_secs: 2.0,
                correctness: Some(Correctness::Correct),
            },
            QuestionRecord {
                question_number: 2,
                answer: "c".into(),
                response: "b".into(),
                response_time_secs: 3.0,
                correctness: Some(Correctness::Wrong),
            },
        ];
        let rendered = render_table(&to_rows(&records)).to_string();

        assert_eq!(rendered.matches("Cumulative Time (s)").count(), 1);
        assert!(rendered.contains("5.000000"));
        assert!(rendered.contains("Correct"));
        assert!(rendered.contains("Wrong"));
    }

    #[test]
    fn empty_table_still_has_header() {
        let rendered = render_table(&[]).to_string();
        assert!(rendered.contains("Question"));
        assert!(rendered.contains("Result"));
    }
}
