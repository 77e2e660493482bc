//! Report card rendering.
//!
//! Builds a self-contained HTML document for one student's term results.
//! The section order is fixed: title, student identity block, performance
//! table (or a no-results notice), grading scale legend, footer. Styling
//! is inline so the file opens standalone and prints cleanly.

use crate::grading::GRADE_SCALE;
use crate::summary::TermSummary;

/// Everything the renderer needs for one report card.
#[derive(Debug, Clone)]
pub struct ReportCardData {
    pub student_code: String,
    /// `None` when the student has no class assignment.
    pub class_name: Option<String>,
    pub year_label: String,
    pub term_number: i16,
    pub summary: TermSummary,
}

/// Download filename for a rendered report card.
pub fn report_filename(student_code: &str, year_label: &str, term_number: i16) -> String {
    format!("Report_Card_{student_code}_{year_label}_Term{term_number}.html")
}

/// Render the report card document.
pub fn render_report_card(data: &ReportCardData) -> String {
    let mut doc = String::with_capacity(4096);

    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"utf-8\">\n");
    doc.push_str("<title>Student Report Card</title>\n");
    doc.push_str(STYLE);
    doc.push_str("</head>\n<body>\n");

    doc.push_str("<h1>STUDENT REPORT CARD</h1>\n");

    push_student_info(&mut doc, data);
    push_performance(&mut doc, data);
    push_grading_scale(&mut doc);

    doc.push_str(
        "<p class=\"footer\">This is a computer-generated report. No signature is required.</p>\n",
    );
    doc.push_str("</body>\n</html>\n");
    doc
}

fn push_student_info(doc: &mut String, data: &ReportCardData) {
    let class_name = data.class_name.as_deref().unwrap_or("Not Assigned");

    doc.push_str("<table class=\"info\">\n");
    push_info_row(doc, "Student Name:", &data.summary.student_name);
    push_info_row(doc, "Student ID:", &data.student_code);
    push_info_row(doc, "Class:", class_name);
    push_info_row(doc, "Academic Year:", &data.year_label);
    push_info_row(doc, "Term:", &format!("Term {}", data.term_number));
    doc.push_str("</table>\n");
}

fn push_info_row(doc: &mut String, label: &str, value: &str) {
    doc.push_str(&format!(
        "<tr><th>{}</th><td>{}</td></tr>\n",
        escape_html(label),
        escape_html(value)
    ));
}

fn push_performance(doc: &mut String, data: &ReportCardData) {
    doc.push_str("<h2>Academic Performance</h2>\n");

    let summary = &data.summary;
    if !summary.has_results {
        doc.push_str("<p>No results available for this term.</p>\n");
        return;
    }

    doc.push_str("<table class=\"results\">\n");
    doc.push_str(
        "<tr><th>Subject</th><th>Marks Obtained</th><th>Total Marks</th>\
         <th>Percentage</th><th>Grade</th><th>Remarks</th></tr>\n",
    );
    for line in &summary.results {
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}%</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&line.subject),
            line.marks_obtained,
            line.total_marks,
            line.percentage.unwrap_or(0.0),
            escape_html(line.grade.as_deref().unwrap_or("-")),
            escape_html(line.remarks.as_deref().unwrap_or("-")),
        ));
    }
    doc.push_str(&format!(
        "<tr class=\"total\"><td>TOTAL/OVERALL</td><td>{}</td><td>{}</td>\
         <td>{:.2}%</td><td>{}</td><td></td></tr>\n",
        summary.total_marks_obtained,
        summary.total_marks_possible,
        summary.overall_percentage,
        summary
            .overall_grade
            .map(|g| g.as_str())
            .unwrap_or("-"),
    ));
    doc.push_str("</table>\n");
}

fn push_grading_scale(doc: &mut String) {
    doc.push_str("<h2>Grading Scale</h2>\n");
    doc.push_str("<table class=\"scale\">\n");
    doc.push_str("<tr><th>Grade</th><th>Percentage Range</th><th>Description</th></tr>\n");
    for (grade, range, description) in GRADE_SCALE {
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            grade.as_str(),
            range,
            description
        ));
    }
    doc.push_str("</table>\n");
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = "<style>\n\
    body { font-family: Helvetica, Arial, sans-serif; margin: 2em; color: #333; }\n\
    h1 { color: #1976d2; text-align: center; }\n\
    h2 { color: #333; }\n\
    table { border-collapse: collapse; margin-bottom: 1.5em; }\n\
    th, td { border: 1px solid #999; padding: 6px 12px; text-align: left; }\n\
    table.results th { background: #1976d2; color: #fff; text-align: center; }\n\
    table.results td { text-align: center; }\n\
    table.scale th { background: #424242; color: #fff; }\n\
    tr.total { background: #e3f2fd; font-weight: bold; }\n\
    table.info th { background: #f5f5f5; }\n\
    p.footer { color: #777; font-size: 0.8em; text-align: center; margin-top: 3em; }\n\
</style>\n";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{SubjectLine, TermSummary};

    fn sample_summary(lines: Vec<SubjectLine>) -> TermSummary {
        TermSummary::compute(1, "Ada Obi".into(), 7, "First Term - 2025-2026".into(), lines)
    }

    fn sample_line(subject: &str, obtained: f64) -> SubjectLine {
        SubjectLine {
            subject: subject.to_string(),
            marks_obtained: obtained,
            total_marks: 100.0,
            grade: None,
            remarks: None,
        }
    }

    fn sample_data(lines: Vec<SubjectLine>) -> ReportCardData {
        ReportCardData {
            student_code: "STU-0042".into(),
            class_name: Some("Grade 5 - A".into()),
            year_label: "2025-2026".into(),
            term_number: 1,
            summary: sample_summary(lines),
        }
    }

    #[test]
    fn sections_appear_in_order() {
        let html = render_report_card(&sample_data(vec![sample_line("Mathematics", 83.0)]));

        let title = html.find("STUDENT REPORT CARD").unwrap();
        let info = html.find("Student Name:").unwrap();
        let performance = html.find("Academic Performance").unwrap();
        let scale = html.find("Grading Scale").unwrap();
        let footer = html.find("computer-generated report").unwrap();
        assert!(title < info && info < performance && performance < scale && scale < footer);
    }

    #[test]
    fn identity_block_contents() {
        let html = render_report_card(&sample_data(vec![sample_line("Mathematics", 83.0)]));

        assert!(html.contains("Ada Obi"));
        assert!(html.contains("STU-0042"));
        assert!(html.contains("Grade 5 - A"));
        assert!(html.contains("2025-2026"));
        assert!(html.contains("Term 1"));
    }

    #[test]
    fn missing_class_shows_not_assigned() {
        let mut data = sample_data(vec![sample_line("Mathematics", 83.0)]);
        data.class_name = None;
        let html = render_report_card(&data);

        assert!(html.contains("Not Assigned"));
    }

    #[test]
    fn performance_rows_and_totals() {
        let html = render_report_card(&sample_data(vec![
            sample_line("Mathematics", 83.0),
            sample_line("English", 61.0),
        ]));

        assert!(html.contains("<td>Mathematics</td>"));
        assert!(html.contains("83.00%"));
        assert!(html.contains("TOTAL/OVERALL"));
        assert!(html.contains("72.00%"));
        assert!(html.contains("<td>B+</td>"));
    }

    #[test]
    fn empty_term_renders_notice_without_totals_row() {
        let html = render_report_card(&sample_data(vec![]));

        assert!(html.contains("No results available for this term."));
        assert!(!html.contains("TOTAL/OVERALL"));
        assert!(html.contains("Grading Scale"), "legend still renders");
    }

    #[test]
    fn grading_scale_rows_render() {
        let html = render_report_card(&sample_data(vec![]));

        assert!(html.contains("90% - 100%"));
        assert!(html.contains("Excellent"));
        assert!(html.contains("Below 40%"));
        assert!(html.contains("Fail"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut data = sample_data(vec![sample_line("Arts & <Crafts>", 55.0)]);
        data.summary.results[0].remarks = Some("\"good\"".into());
        let html = render_report_card(&data);

        assert!(html.contains("Arts &amp; &lt;Crafts&gt;"));
        assert!(html.contains("&quot;good&quot;"));
        assert!(!html.contains("<Crafts>"));
    }

    #[test]
    fn filename_embeds_code_year_and_term() {
        assert_eq!(
            report_filename("STU-0042", "2025-2026", 2),
            "Report_Card_STU-0042_2025-2026_Term2.html"
        );
    }
}
