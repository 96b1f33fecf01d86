//! CSV serialization of the survey report.
//!
//! Three sections mirror the printed workbook: overall summary, per-counter
//! summary, and the respondent detail table. Figures come straight from the
//! report model; nothing is recomputed here.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::reporting::SurveyReport;
use crate::domain::scoring::NO_GRADE;

/// The rendered CSV sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub summary: String,
    pub counters: String,
    pub respondents: String,
}

/// Renders a [`SurveyReport`] into CSV text.
pub struct CsvReportExporter;

impl CsvReportExporter {
    pub fn render(report: &SurveyReport) -> Result<CsvExport, DomainError> {
        Ok(CsvExport {
            summary: render_summary(report)?,
            counters: render_counters(report)?,
            respondents: render_respondents(report)?,
        })
    }
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, DomainError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| DomainError::new(ErrorCode::ExportError, format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| DomainError::new(ErrorCode::ExportError, format!("CSV not UTF-8: {}", e)))
}

fn render_summary(report: &SurveyReport) -> Result<String, DomainError> {
    let mut w = writer();
    let write = |w: &mut csv::Writer<Vec<u8>>, record: &[&str]| {
        w.write_record(record)
            .map_err(|e| DomainError::new(ErrorCode::ExportError, format!("CSV write failed: {}", e)))
    };
    write(&mut w, &["Community Satisfaction Index (IKM) Report"])?;
    write(&mut w, &["Generated", &report.generated_at.to_string()])?;
    write(&mut w, &["Total Respondents", &report.global.count.to_string()])?;
    write(&mut w, &["Overall Index", &report.global.index_display()])?;
    write(&mut w, &["Overall Grade", &report.global.grade_display()])?;
    finish(w)
}

fn render_counters(report: &SurveyReport) -> Result<String, DomainError> {
    let mut w = writer();
    w.write_record(["Counter", "Agency", "Respondents", "Index", "Grade"])
        .map_err(|e| DomainError::new(ErrorCode::ExportError, format!("CSV write failed: {}", e)))?;
    for row in &report.counters {
        w.write_record([
            row.summary.counter_id.to_string(),
            row.counter_name.clone(),
            row.summary.count.to_string(),
            row.summary.index_display(),
            row.summary.grade_display(),
        ])
        .map_err(|e| DomainError::new(ErrorCode::ExportError, format!("CSV write failed: {}", e)))?;
    }
    finish(w)
}

fn render_respondents(report: &SurveyReport) -> Result<String, DomainError> {
    let mut w = writer();
    let mut header = vec![
        "No".to_string(),
        "Date".to_string(),
        "Counter".to_string(),
        "Agency".to_string(),
        "Gender".to_string(),
        "Education".to_string(),
        "Occupation".to_string(),
        "Age".to_string(),
    ];
    header.extend(report.question_columns.iter().cloned());
    header.push("Index".to_string());
    w.write_record(&header)
        .map_err(|e| DomainError::new(ErrorCode::ExportError, format!("CSV write failed: {}", e)))?;

    for row in &report.respondents {
        let mut record = vec![
            row.number.to_string(),
            row.submitted_at
                .map(|t| t.to_string())
                .unwrap_or_else(|| NO_GRADE.to_string()),
            row.counter_id.to_string(),
            row.counter_name.clone(),
            row.gender.clone(),
            row.education.clone(),
            row.occupation.clone(),
            row.age_bracket.clone(),
        ];
        for answer in &row.answers {
            record.push(
                answer
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| NO_GRADE.to_string()),
            );
        }
        record.push(format!("{:.2}", row.satisfaction));
        w.write_record(&record).map_err(|e| {
            DomainError::new(ErrorCode::ExportError, format!("CSV write failed: {}", e))
        })?;
    }
    finish(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CounterId, Rating, ResponseId, Timestamp};
    use crate::domain::reporting::build_report;
    use crate::domain::response::{AnswerSet, Response};
    use crate::domain::scheme::{Gender, Respondent, SurveyScheme};
    use crate::domain::scoring::RatingIndex;

    fn report_with_one_response() -> SurveyReport {
        let scheme = SurveyScheme::standard();
        let answers: AnswerSet = scheme
            .question_ids()
            .map(|q| (q.clone(), Rating::VerySatisfied))
            .collect();
        let responses = vec![Response {
            id: ResponseId::new(1),
            counter_id: CounterId::new(3),
            answers,
            rating_index: RatingIndex::from_stored(4.0),
            respondent: Respondent {
                gender: Some(Gender::Female),
                education: Some("S1".to_string()),
                occupation: Some("Karyawan".to_string()),
                age_bracket: Some("25-34 Tahun".to_string()),
            },
            submitted_at: Some(Timestamp::from_unix_secs(1_705_276_800)),
        }];
        build_report(&responses, &scheme, Timestamp::from_unix_secs(1_705_276_800))
    }

    #[test]
    fn summary_section_carries_engine_figures() {
        let export = CsvReportExporter::render(&report_with_one_response()).unwrap();
        assert!(export.summary.contains("Total Respondents,1"));
        assert!(export.summary.contains("Overall Index,100.00"));
        assert!(export.summary.contains("Overall Grade,A (Very Good)"));
    }

    #[test]
    fn counters_section_has_one_line_per_configured_counter() {
        let export = CsvReportExporter::render(&report_with_one_response()).unwrap();
        // Header plus 23 counters.
        assert_eq!(export.counters.lines().count(), 24);
        assert!(export.counters.contains("3,Samsat,1,100.00,A (Very Good)"));
    }

    #[test]
    fn empty_counters_render_the_sentinel() {
        let export = CsvReportExporter::render(&report_with_one_response()).unwrap();
        assert!(export.counters.contains("1,Bank Sumut,0,—,—"));
    }

    #[test]
    fn respondents_section_lists_answers_in_instrument_order() {
        let export = CsvReportExporter::render(&report_with_one_response()).unwrap();
        let mut lines = export.respondents.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("U1"));
        assert!(header.contains("U9"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("1,"));
        assert!(row.contains("Samsat"));
        assert!(row.contains("Perempuan"));
        assert!(row.ends_with("100.00"));
    }

    #[test]
    fn exported_figures_never_diverge_from_the_report() {
        let report = report_with_one_response();
        let export = CsvReportExporter::render(&report).unwrap();
        assert!(export.summary.contains(&report.global.index_display()));
        for row in &report.counters {
            assert!(export.counters.contains(&row.summary.grade_display()));
        }
    }
}
