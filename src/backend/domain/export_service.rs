//! Export service domain logic for the budget planner.
//!
//! This module contains all business logic related to exporting the budget as
//! a PDF report: deciding which headers and rows qualify for the report,
//! computing section totals, and rendering the paginated document. The UI
//! only handles presentation of the outcome (warning or confirmation modal).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::Local;
use log::{info, warn};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use thiserror::Error;

use crate::backend::domain::models::Header;

/// Fixed report filename, written to the working directory. An existing file
/// of the same name is overwritten without confirmation.
pub const REPORT_FILENAME: &str = "budget_report.pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 15.0;
const BOTTOM_MARGIN_MM: f32 = 15.0;
const TOP_START_MM: f32 = PAGE_HEIGHT_MM - 20.0;
const ROW_HEIGHT_MM: f32 = 8.0;
const AMOUNT_COLUMN_MM: f32 = 115.0;
const TOTAL_COLUMN_MM: f32 = 150.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export!")]
    NothingToExport,
    #[error("failed to render PDF: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}

/// One valid row of the report: trimmed description plus parsed amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub description: String,
    pub amount: f64,
}

/// One section of the report: a header that contributed at least one valid row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub name: String,
    pub rows: Vec<ReportRow>,
    pub total: f64,
}

/// Intermediate report built from the header tree, independent of the PDF
/// backend so the filtering rules stay testable on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    pub generated_on: String,
    pub sections: Vec<ReportSection>,
}

/// What the UI needs for the confirmation modal after a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub filename: String,
    pub section_count: usize,
    pub row_count: usize,
}

/// Export service that handles all report-related business logic
#[derive(Clone, Default)]
pub struct ExportService {
    // No internal state needed for now
}

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self {}
    }

    /// Build the report from the current headers.
    ///
    /// Filtering rules:
    /// - An empty header list is an error; no document is produced.
    /// - Headers whose trimmed name is empty are skipped.
    /// - A row qualifies only if its trimmed description is non-empty and its
    ///   amount parses; everything else is dropped from the output entirely.
    /// - Headers with zero qualifying rows are omitted, heading included.
    pub fn build_report(&self, headers: &[Header]) -> Result<BudgetReport, ExportError> {
        if headers.is_empty() {
            warn!("⚠️ EXPORT: Nothing to export, no headers");
            return Err(ExportError::NothingToExport);
        }

        let mut sections = Vec::new();
        for header in headers {
            let name = header.name.trim();
            if name.is_empty() {
                continue;
            }

            let rows: Vec<ReportRow> = header
                .entries
                .iter()
                .filter(|entry| !entry.description.trim().is_empty())
                .filter_map(|entry| {
                    entry.parsed_amount().ok().map(|amount| ReportRow {
                        description: entry.description.trim().to_string(),
                        amount,
                    })
                })
                .collect();

            if rows.is_empty() {
                continue;
            }

            let total = rows.iter().map(|row| row.amount).sum();
            sections.push(ReportSection {
                name: name.to_string(),
                rows,
                total,
            });
        }

        Ok(BudgetReport {
            generated_on: Local::now().format("%B %d, %Y").to_string(),
            sections,
        })
    }

    /// Render the report as a PDF at the given path, overwriting silently.
    pub fn render_pdf(&self, report: &BudgetReport, path: &Path) -> Result<(), ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            "Budget Report",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: TOP_START_MM,
        };

        writer.text(&bold, 16.0, LEFT_MARGIN_MM, "Budget Report");
        writer.advance(ROW_HEIGHT_MM * 0.75);
        writer.text(
            &regular,
            10.0,
            LEFT_MARGIN_MM,
            &format!("Generated {}", report.generated_on),
        );
        writer.advance(ROW_HEIGHT_MM * 1.5);

        for section in &report.sections {
            writer.ensure_room();
            writer.text(&bold, 14.0, LEFT_MARGIN_MM, &section.name);
            writer.advance(ROW_HEIGHT_MM);

            for row in &section.rows {
                writer.ensure_room();
                writer.text(
                    &regular,
                    12.0,
                    LEFT_MARGIN_MM,
                    &format!("Description: {}", row.description),
                );
                writer.text(
                    &regular,
                    12.0,
                    AMOUNT_COLUMN_MM,
                    &format!("Amount: ${:.2}", row.amount),
                );
                writer.advance(ROW_HEIGHT_MM);
            }

            writer.ensure_room();
            writer.text(
                &regular,
                12.0,
                TOTAL_COLUMN_MM,
                &format!("Total: ${:.2}", section.total),
            );
            writer.advance(ROW_HEIGHT_MM * 1.5);
        }

        doc.save(&mut BufWriter::new(File::create(path)?))?;
        Ok(())
    }

    /// Export the budget to `budget_report.pdf` in the working directory with
    /// complete orchestration: build the report, render it, and return what
    /// the confirmation modal needs.
    pub fn export_to_pdf(&self, headers: &[Header]) -> Result<ExportOutcome, ExportError> {
        info!("📄 EXPORT: Exporting {} headers to PDF", headers.len());

        let report = self.build_report(headers)?;
        self.render_pdf(&report, Path::new(REPORT_FILENAME))?;

        let outcome = ExportOutcome {
            filename: REPORT_FILENAME.to_string(),
            section_count: report.sections.len(),
            row_count: report.sections.iter().map(|s| s.rows.len()).sum(),
        };
        info!(
            "✅ EXPORT: Wrote {} with {} sections and {} rows",
            outcome.filename, outcome.section_count, outcome.row_count
        );
        Ok(outcome)
    }
}

/// Write cursor over the current page, adding pages as the cursor reaches the
/// bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn text(&self, font: &IndirectFontRef, size: f32, x: f32, text: &str) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn advance(&mut self, by: f32) {
        self.y -= by;
    }

    fn ensure_room(&mut self) {
        if self.y < BOTTOM_MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_START_MM;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::{Entry, Header};

    fn header_with(name: &str, rows: &[(&str, &str)]) -> Header {
        let mut header = Header::new();
        header.name = name.to_string();
        for (description, amount) in rows {
            let mut entry = Entry::new();
            entry.description = description.to_string();
            entry.amount = amount.to_string();
            header.entries.push(entry);
        }
        header.recompute_total();
        header
    }

    #[test]
    fn test_build_report_with_no_headers_is_an_error() {
        let service = ExportService::new();
        let result = service.build_report(&[]);
        assert!(matches!(result, Err(ExportError::NothingToExport)));
    }

    #[test]
    fn test_build_report_drops_invalid_rows() {
        let service = ExportService::new();
        let headers = vec![header_with(
            "Housing",
            &[("Rent", "1000"), ("", "50"), ("Food", "abc")],
        )];

        let report = service.build_report(&headers).unwrap();
        assert_eq!(report.sections.len(), 1);

        let section = &report.sections[0];
        assert_eq!(section.name, "Housing");
        assert_eq!(
            section.rows,
            vec![ReportRow {
                description: "Rent".to_string(),
                amount: 1000.0
            }]
        );
        assert_eq!(section.total, 1000.0);
    }

    #[test]
    fn test_build_report_omits_headers_without_valid_rows() {
        let service = ExportService::new();
        let headers = vec![
            header_with("X", &[("Nothing", "abc"), ("", "12")]),
            header_with("Groceries", &[("Milk", "4.50")]),
        ];

        let report = service.build_report(&headers).unwrap();
        let names: Vec<&str> = report.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Groceries"]);
    }

    #[test]
    fn test_build_report_skips_unnamed_headers() {
        let service = ExportService::new();
        let headers = vec![
            header_with("   ", &[("Rent", "1000")]),
            header_with("Named", &[("Rent", "1000")]),
        ];

        let report = service.build_report(&headers).unwrap();
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].name, "Named");
    }

    #[test]
    fn test_build_report_preserves_header_order() {
        let service = ExportService::new();
        let headers = vec![
            header_with("First", &[("A", "1")]),
            header_with("Second", &[("B", "2")]),
        ];

        let report = service.build_report(&headers).unwrap();
        let names: Vec<&str> = report.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_build_report_trims_descriptions() {
        let service = ExportService::new();
        let headers = vec![header_with("Bills", &[("  Power  ", " 42.0 ")])];

        let report = service.build_report(&headers).unwrap();
        assert_eq!(report.sections[0].rows[0].description, "Power");
        assert_eq!(report.sections[0].rows[0].amount, 42.0);
    }

    #[test]
    fn test_render_pdf_writes_a_file() {
        let service = ExportService::new();
        let headers = vec![header_with("Housing", &[("Rent", "1000"), ("Power", "80.25")])];
        let report = service.build_report(&headers).unwrap();

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(REPORT_FILENAME);
        service.render_pdf(&report, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_render_pdf_overwrites_existing_file() {
        let service = ExportService::new();
        let report = service
            .build_report(&[header_with("Housing", &[("Rent", "1000")])])
            .unwrap();

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(REPORT_FILENAME);
        std::fs::write(&path, b"stale").unwrap();

        service.render_pdf(&report, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_ne!(bytes, b"stale");
    }

    #[test]
    fn test_render_pdf_handles_reports_longer_than_one_page() {
        // 120 rows at 8mm per row cannot fit on one A4 page
        let service = ExportService::new();
        let rows: Vec<(String, String)> = (0..120)
            .map(|i| (format!("Item {}", i), format!("{}", i)))
            .collect();
        let row_refs: Vec<(&str, &str)> = rows
            .iter()
            .map(|(d, a)| (d.as_str(), a.as_str()))
            .collect();
        let report = service
            .build_report(&[header_with("Long", &row_refs)])
            .unwrap();

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(REPORT_FILENAME);
        service.render_pdf(&report, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
