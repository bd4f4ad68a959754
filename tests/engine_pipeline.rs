use cbc_pathway_engine::analysis::latest_assessment;
use cbc_pathway_engine::guidance::DISCLAIMER;
use cbc_pathway_engine::ingest::{find_student, read_assessments};
use cbc_pathway_engine::pathway::recommend_for_assessment;
use cbc_pathway_engine::{
    analyze_performance, build_history, Confidence, EngineConfig, LearningTier, Pathway, Trend,
};

const ASSESSMENTS: &str = "\
student_id,student_name,grade,year,term,subject,score
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,1,mathematics,2
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,1,integrated_science,3
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,1,english,3
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,2,mathematics,3
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,2,integrated_science,4
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,2,english,2
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,3,mathematics,4
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,3,integrated_science,4
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,3,pre_technical_studies,3
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,3,creative_arts_sports,1
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,3,english,2
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,3,kiswahili,2
3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,Achieng Otieno,8,2025,3,social_studies,1
0c22f1f1-9184-4fd4-9b21-28c68a6a89dc,Baraka Mwangi,11,2025,3,biology,4
";

#[test]
fn latest_junior_assessment_produces_stem_guidance() {
    let records = read_assessments(ASSESSMENTS.as_bytes()).unwrap();
    let student = find_student(&records, None, Some("Achieng Otieno")).unwrap();
    let latest = latest_assessment(&records, student).unwrap();
    assert_eq!(latest.term, 3);

    let rec = recommend_for_assessment(latest.grade, &latest.scores, &EngineConfig::default())
        .expect("junior students receive pathway guidance");
    assert_eq!(rec.stem_score, 94);
    assert!(rec.arts_sports_score < 50);
    assert!(rec.social_sciences_score < 50);
    assert_eq!(rec.top_pathway, Pathway::Stem);
    assert_eq!(rec.confidence, Confidence::High);
    assert!(rec
        .guidance_message
        .starts_with("🌟 Exceptional STEM potential!"));
    assert!(rec.guidance_message.contains(DISCLAIMER));
}

#[test]
fn history_drives_velocity_and_ordering() {
    let records = read_assessments(ASSESSMENTS.as_bytes()).unwrap();
    let student = find_student(&records, None, Some("Achieng Otieno")).unwrap();
    let latest = latest_assessment(&records, student).unwrap();
    let history = build_history(&records, student);
    let analysis = analyze_performance(&latest.scores, Some(&history));

    assert_eq!(analysis.subjects_needing_support, 4);
    assert_eq!(analysis.subjects_excelling, 2);
    assert_eq!(analysis.overall_tier, LearningTier::Reinforcement);

    let levels: Vec<u8> = analysis.recommendations.iter().map(|r| r.current_level).collect();
    assert!(levels.windows(2).all(|pair| pair[0] <= pair[1]));
    let velocities: Vec<f64> = analysis.velocities.iter().map(|v| v.velocity).collect();
    assert!(velocities.windows(2).all(|pair| pair[0] <= pair[1]));

    let english = analysis.velocities.first().unwrap();
    assert_eq!(english.subject, "english");
    assert!((english.velocity + 0.5).abs() < 1e-9);
    assert_eq!(english.trend, Trend::Accelerating);

    let maths = analysis
        .velocities
        .iter()
        .find(|v| v.subject == "mathematics")
        .unwrap();
    assert_eq!(maths.velocity, 1.0);
    assert_eq!(maths.trend, Trend::Steady);
}

#[test]
fn senior_students_get_no_pathway_recommendation() {
    let records = read_assessments(ASSESSMENTS.as_bytes()).unwrap();
    let student = find_student(&records, None, Some("Baraka Mwangi")).unwrap();
    let latest = latest_assessment(&records, student).unwrap();
    let config = EngineConfig::default();
    assert!(recommend_for_assessment(latest.grade, &latest.scores, &config).is_none());
}
