use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};
use tracing::trace;

use crate::components::{Card, Fragment, Summary};

use super::{DisplaySurface, Region, SurfaceError};

/// Surface that prints every region replacement as a text table.
#[derive(Debug)]
pub struct TerminalSurface<W> {
    out: W,
}

impl<W: io::Write> TerminalSurface<W> {
    /// Create a surface writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the surface, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> DisplaySurface for TerminalSurface<W> {
    fn replace(&mut self, region: Region, fragment: Fragment) -> Result<(), SurfaceError> {
        trace!(region = %region, "writing region");

        let body = render_fragment(&fragment);

        writeln!(self.out, "\n{} ({})\n{body}", region.title(), region.selector())
            .and_then(|()| self.out.flush())
            .map_err(|err| SurfaceError::Io(region, err))
    }
}

/// Render a fragment as plain text.
pub(crate) fn render_fragment(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Cards(cards) => render_cards(cards),
        Fragment::Summary(summary) => render_summary(summary),
        Fragment::Message(message) => format!("  {message}"),
    }
}

fn render_cards(cards: &[Card]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Product", "Price", "Details", "Actions"]);

    for card in cards {
        let details = card
            .attributes
            .iter()
            .map(|attr| format!("{}: {}", attr.label, attr.value))
            .collect::<Vec<_>>()
            .join("\n");

        let actions = card
            .controls()
            .iter()
            .map(|control| format!("[{}]", control.label()))
            .collect::<Vec<_>>()
            .join("\n");

        builder.push_record([card.title.clone(), card.price.clone(), details, actions]);
    }

    let mut table = builder.build();

    table.with(header_theme(&[]));
    table.modify(Columns::new(1..2), Alignment::right());

    table.to_string()
}

fn render_summary(summary: &Summary) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Price", "Subtotal", ""]);

    for row in &summary.rows {
        builder.push_record([
            row.name.clone(),
            row.price_breakdown(),
            row.subtotal.clone(),
            format!("[{}]", row.remove.label()),
        ]);
    }

    builder.push_record([
        "Total:".to_string(),
        String::new(),
        summary.total.clone(),
        String::new(),
    ]);

    let footer_row = summary.rows.len() + 1;

    let mut table = builder.build();

    table.with(header_theme(&[footer_row]));
    table.modify(Columns::new(1..3), Alignment::right());
    table.modify(Rows::first(), Alignment::left());

    table.to_string()
}

/// Rounded theme with a separator under the header and above each row in `separators`.
fn header_theme(separators: &[usize]) -> Theme {
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    for &row in separators {
        if row > 1 {
            theme.insert_horizontal_line(row, separator);
        }
    }

    theme
}
