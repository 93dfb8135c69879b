//! PDF budget report
//!
//! Rendering happens in two stages. [`layout_pdf`] decides what goes on
//! which page and is pure; [`render_pdf`] draws a finished layout with
//! `printpdf` built-in fonts.

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Rgb};

use super::ReportInput;
use crate::error::TrackerResult;
use crate::reports::Tone;

/// A4 portrait
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;

/// Rows shown in the transaction table; the rest are left out
pub const MAX_TABLE_ROWS: usize = 20;
/// Category text longer than this is cut
pub const MAX_CATEGORY_CHARS: usize = 30;
/// Date, Type, Category, Amount
pub const COLUMN_WIDTHS_MM: [f32; 4] = [30.0, 25.0, 50.0, 30.0];

pub const NO_CATEGORY_DATA: &str = "No category data available.";
pub const NO_TRANSACTIONS: &str = "No transactions to show.";

/// One drawable line of the report
#[derive(Debug, Clone, PartialEq)]
pub enum PdfElement {
    Title(String),
    Heading(String),
    Text(String),
    /// Metric line; a tone colours the text
    Metric { text: String, tone: Option<Tone> },
    /// Table header cells, drawn bold
    TableHeader(Vec<String>),
    TableRow(Vec<String>),
}

impl PdfElement {
    /// Vertical space the element takes, in millimetres
    pub fn height(&self) -> f32 {
        match self {
            Self::Title(_) => 14.0,
            Self::Heading(_) => 11.0,
            Self::Text(_) | Self::Metric { .. } => 8.0,
            Self::TableHeader(_) | Self::TableRow(_) => 8.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            Self::Title(_) => 16.0,
            Self::Heading(_) => 14.0,
            Self::Text(_) | Self::Metric { .. } => 12.0,
            Self::TableHeader(_) => 10.0,
            Self::TableRow(_) => 9.0,
        }
    }

    fn is_bold(&self) -> bool {
        matches!(self, Self::Title(_) | Self::Heading(_) | Self::TableHeader(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfPage {
    pub elements: Vec<PdfElement>,
}

/// The full report, already split into pages
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub document_title: String,
    pub pages: Vec<PdfPage>,
}

impl PdfLayout {
    /// Every element in drawing order, ignoring page boundaries
    pub fn elements(&self) -> impl Iterator<Item = &PdfElement> {
        self.pages.iter().flat_map(|p| p.elements.iter())
    }
}

/// Accumulates elements, starting a new page when the current one is full
struct PageBuilder {
    pages: Vec<PdfPage>,
    used_mm: f32,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            pages: vec![PdfPage::default()],
            used_mm: 0.0,
        }
    }

    fn usable_height() -> f32 {
        PAGE_HEIGHT_MM - 2.0 * MARGIN_MM
    }

    fn push(&mut self, element: PdfElement) {
        let height = element.height();
        if self.used_mm + height > Self::usable_height() {
            self.new_page();
        }
        self.used_mm += height;
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn new_page(&mut self) {
        self.pages.push(PdfPage::default());
        self.used_mm = 0.0;
    }

    fn finish(self) -> Vec<PdfPage> {
        self.pages
    }
}

/// Cut `text` to at most `max` characters
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Decide the report content and pagination
pub fn layout_pdf(report_title: &str, document_title: &str, input: &ReportInput<'_>) -> PdfLayout {
    let currency = input.currency.as_str();
    let mut builder = PageBuilder::new();

    builder.push(PdfElement::Title(format!(
        "{} - {}",
        report_title, input.period_label
    )));

    builder.push(PdfElement::Heading("Financial Summary".into()));
    let balance_tone = input.summary.balance_tone();
    for (label, value) in input.summary.metrics() {
        let tone = (label == "Balance").then_some(balance_tone);
        builder.push(PdfElement::Metric {
            text: format!("{}: {} {}", label, value.format_fixed(), currency),
            tone,
        });
    }

    builder.push(PdfElement::Heading("Category Breakdown".into()));
    if input.breakdown.is_empty() {
        builder.push(PdfElement::Text(NO_CATEGORY_DATA.into()));
    } else {
        for row in &input.breakdown {
            builder.push(PdfElement::Text(format!(
                "{}: {} {}",
                row.category,
                row.amount.format_fixed(),
                currency
            )));
        }
    }

    builder.new_page();
    builder.push(PdfElement::Heading("Recent Transactions".into()));
    if input.transactions.is_empty() {
        builder.push(PdfElement::Text(NO_TRANSACTIONS.into()));
    } else {
        builder.push(PdfElement::TableHeader(vec![
            "Date".into(),
            "Type".into(),
            "Category".into(),
            format!("Amount ({})", currency),
        ]));
        for txn in input.transactions.iter().take(MAX_TABLE_ROWS) {
            builder.push(PdfElement::TableRow(vec![
                txn.occurred_on.format("%Y-%m-%d").to_string(),
                txn.kind.as_str().to_string(),
                truncate_chars(&txn.category, MAX_CATEGORY_CHARS),
                txn.amount.format_fixed(),
            ]));
        }
    }

    PdfLayout {
        document_title: document_title.to_string(),
        pages: builder.finish(),
    }
}

fn tone_color(tone: Option<Tone>) -> Color {
    let (r, g, b) = match tone {
        Some(Tone::Positive) => (0.0, 0.5, 0.0),
        Some(Tone::Negative) => (0.8, 0.0, 0.0),
        None => (0.0, 0.0, 0.0),
    };
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Draw a layout into PDF bytes
pub fn render_pdf(layout: &PdfLayout) -> TrackerResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        layout.document_title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular: IndirectFontRef = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold: IndirectFontRef = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    for (index, page) in layout.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
        for element in &page.elements {
            y -= element.height();
            let font = if element.is_bold() { &bold } else { &regular };
            let size = element.font_size();

            match element {
                PdfElement::Title(text) | PdfElement::Heading(text) | PdfElement::Text(text) => {
                    layer.set_fill_color(tone_color(None));
                    layer.use_text(text.as_str(), size, Mm(MARGIN_MM), Mm(y), font);
                }
                PdfElement::Metric { text, tone } => {
                    layer.set_fill_color(tone_color(*tone));
                    layer.use_text(text.as_str(), size, Mm(MARGIN_MM), Mm(y), font);
                }
                PdfElement::TableHeader(cells) | PdfElement::TableRow(cells) => {
                    layer.set_fill_color(tone_color(None));
                    let mut x = MARGIN_MM;
                    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS_MM) {
                        layer.use_text(cell.as_str(), size, Mm(x + 1.0), Mm(y), font);
                        x += width;
                    }
                }
            }
        }
    }

    Ok(doc.save_to_bytes()?)
}
