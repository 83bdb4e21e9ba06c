#![forbid(unsafe_code)]

//! Read-only table of contacts.
//!
//! Columns are sized to the widest cell by display width, so wide glyphs
//! line up. The header is always drawn; an empty list draws no body rows.

use fkit_core::component::Component;
use fkit_core::frame::Frame;
use unicode_width::UnicodeWidthStr;

use super::list::ContactList;
use super::record::Field;

/// Renders one row per contact in list order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InformationTable;

impl InformationTable {
    fn column_widths(list: &ContactList) -> [usize; 3] {
        let mut widths = Field::ALL.map(|field| field.label().width());
        for record in list {
            for (width, field) in widths.iter_mut().zip(Field::ALL) {
                *width = (*width).max(record.field(field).width());
            }
        }
        widths
    }
}

fn render_row<'a>(cells: impl IntoIterator<Item = &'a str>, widths: &[usize; 3]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.into_iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
        line.push_str(" |");
    }
    line
}

impl Component for InformationTable {
    type Props = ContactList;

    fn render(&self, list: &ContactList, frame: &mut Frame) {
        let widths = Self::column_widths(list);
        frame.line(render_row(Field::ALL.map(Field::label), &widths));

        let mut rule = String::from("|");
        for width in widths {
            rule.push_str(&"-".repeat(width + 2));
            rule.push('|');
        }
        frame.line(rule);

        for record in list {
            frame.line(render_row(
                Field::ALL.map(|field| record.field(field)),
                &widths,
            ));
        }
    }
}
