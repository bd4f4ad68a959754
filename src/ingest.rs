use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::models::{AssessmentRecord, CompetencyScore, SubjectScores};

/// Load assessments from a long-format CSV file: one row per
/// (student, year, term, subject).
pub fn load_csv(csv_path: &Path) -> Result<Vec<AssessmentRecord>> {
    let file = std::fs::File::open(csv_path)?;
    let records = read_assessments(file)?;
    info!(path = %csv_path.display(), assessments = records.len(), "loaded assessments");
    Ok(records)
}

pub fn read_assessments<R: Read>(source: R) -> Result<Vec<AssessmentRecord>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        student_id: Uuid,
        student_name: String,
        grade: u8,
        year: i32,
        term: i64,
        subject: String,
        score: i64,
    }

    let mut reader = csv::Reader::from_reader(source);
    let mut grouped: BTreeMap<(Uuid, i32, u8), AssessmentRecord> = BTreeMap::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        if !(1..=3).contains(&row.term) {
            warn!(
                student_id = %row.student_id,
                term = row.term,
                "rejecting row with invalid term"
            );
            return Err(EngineError::InvalidTerm { term: row.term });
        }
        let subject = row.subject.trim().to_lowercase();
        let score = CompetencyScore::new(&subject, row.score).inspect_err(|_| {
            warn!(
                student_id = %row.student_id,
                %subject,
                score = row.score,
                "rejecting row with invalid score"
            );
        })?;
        let term = row.term as u8;

        let record = grouped
            .entry((row.student_id, row.year, term))
            .or_insert_with(|| AssessmentRecord {
                student_id: row.student_id,
                student_name: row.student_name.clone(),
                grade: row.grade,
                year: row.year,
                term,
                scores: SubjectScores::new(),
            });
        if record.scores.contains_key(&subject) {
            warn!(
                student_id = %row.student_id,
                year = row.year,
                term,
                %subject,
                "rejecting duplicate subject score"
            );
            return Err(EngineError::DuplicateScore {
                student_id: row.student_id,
                year: row.year,
                term,
                subject,
            });
        }
        record.scores.insert(subject, score);
    }

    Ok(grouped.into_values().collect())
}

/// Resolve a student's id from either an explicit id or a name. With
/// neither, the file must hold exactly one student.
pub fn find_student(
    records: &[AssessmentRecord],
    id: Option<Uuid>,
    name: Option<&str>,
) -> Option<Uuid> {
    match (id, name) {
        (Some(id), _) => records
            .iter()
            .find(|record| record.student_id == id)
            .map(|record| record.student_id),
        (None, Some(name)) => records
            .iter()
            .find(|record| record.student_name.eq_ignore_ascii_case(name))
            .map(|record| record.student_id),
        (None, None) => {
            let students: BTreeSet<Uuid> =
                records.iter().map(|record| record.student_id).collect();
            if students.len() == 1 {
                students.into_iter().next()
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
student_id,student_name,grade,year,term,subject,score
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,1,mathematics,3
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,1,English,2
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,2,mathematics,4
0c22f1f1-9184-4fd4-9b21-28c68a6a89dc,Baraka Mwangi,10,2025,1,biology,3
";

    #[test]
    fn rows_group_into_term_assessments() {
        let records = read_assessments(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        let first = records
            .iter()
            .find(|r| r.student_name == "Achieng Otieno" && r.term == 1)
            .unwrap();
        assert_eq!(first.scores.len(), 2);
        assert_eq!(first.scores["english"].value(), 2);
    }

    #[test]
    fn invalid_scores_are_rejected() {
        let csv = "\
student_id,student_name,grade,year,term,subject,score
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,1,mathematics,5
";
        let err = read_assessments(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidScore { score: 5, .. }));
    }

    #[test]
    fn invalid_terms_are_rejected() {
        let csv = "\
student_id,student_name,grade,year,term,subject,score
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,4,mathematics,3
";
        let err = read_assessments(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTerm { term: 4 }));
    }

    #[test]
    fn students_resolve_by_id_or_name() {
        let records = read_assessments(SAMPLE.as_bytes()).unwrap();
        let baraka = Uuid::parse_str("0c22f1f1-9184-4fd4-9b21-28c68a6a89dc").unwrap();
        assert_eq!(find_student(&records, Some(baraka), None), Some(baraka));
        assert_eq!(find_student(&records, None, Some("baraka mwangi")), Some(baraka));
        assert_eq!(find_student(&records, None, Some("Nobody")), None);
    }

    #[test]
    fn unscoped_lookup_needs_a_single_student() {
        let records = read_assessments(SAMPLE.as_bytes()).unwrap();
        assert_eq!(find_student(&records, None, None), None);

        let achieng = Uuid::parse_str("3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2").unwrap();
        let single: Vec<_> = records
            .into_iter()
            .filter(|record| record.student_id == achieng)
            .collect();
        assert_eq!(find_student(&single, None, None), Some(achieng));
    }

    #[test]
    fn duplicate_subject_rows_are_rejected() {
        let csv = "\
student_id,student_name,grade,year,term,subject,score
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,1,mathematics,3
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,1,Mathematics,1
";
        let err = read_assessments(csv.as_bytes()).unwrap_err();
        match err {
            EngineError::DuplicateScore { subject, year, term, .. } => {
                assert_eq!(subject, "mathematics");
                assert_eq!((year, term), (2025, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
