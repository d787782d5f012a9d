use super::common::*;
use crate::workforce::analytics::domain::{GapSeverity, StaffingRecommendation};
use crate::workforce::analytics::engine::{AnalyticsConfig, SkillGapEngine};

#[test]
fn half_missing_requirement_is_medium_not_high() {
    let engine = SkillGapEngine::default();
    let (employees, projects) = sample_roster();

    let gaps = engine.compute_gaps(&employees, &projects);
    let portal = &gaps[0];

    assert_eq!(portal.project_id.0, "p-portal");
    assert_eq!(
        portal.available_skills.iter().cloned().collect::<Vec<_>>(),
        vec!["React".to_string()]
    );
    assert_eq!(
        portal.missing_skills.iter().cloned().collect::<Vec<_>>(),
        vec!["Node".to_string()]
    );
    // Exactly 50% missing is not strictly above the high cutoff.
    assert_eq!(portal.severity, GapSeverity::Medium);
    assert_eq!(portal.match_percentage(), 50);
}

#[test]
fn fully_missing_requirement_is_high() {
    let engine = SkillGapEngine::default();
    let (employees, projects) = sample_roster();

    let gaps = engine.compute_gaps(&employees, &projects);
    let gateway = &gaps[1];

    assert_eq!(gateway.severity, GapSeverity::High);
    assert_eq!(gateway.match_percentage(), 0);
    assert_eq!(gateway.employees_with_skills, 0);
    assert_eq!(gateway.total_employees_needed, 1);
}

#[test]
fn empty_requirement_has_no_gap() {
    let engine = SkillGapEngine::default();
    let (employees, projects) = sample_roster();

    let gaps = engine.compute_gaps(&employees, &projects);
    let wiki = &gaps[2];

    assert_eq!(wiki.severity, GapSeverity::Low);
    assert!(wiki.missing_skills.is_empty());
    assert_eq!(wiki.match_percentage(), 100);
    assert_eq!(wiki.employees_with_skills, 0);
    // Unstaffed projects still report a non-zero denominator.
    assert_eq!(wiki.total_employees_needed, 1);
}

#[test]
fn full_coverage_across_team_members_is_low() {
    let engine = SkillGapEngine::default();
    let (employees, projects) = sample_roster();

    let gaps = engine.compute_gaps(&employees, &projects);
    let warehouse = &gaps[3];

    assert_eq!(warehouse.severity, GapSeverity::Low);
    assert!(warehouse.missing_skills.is_empty());
    assert_eq!(warehouse.match_percentage(), 100);
    assert_eq!(warehouse.employees_with_skills, 2);
    assert_eq!(warehouse.total_employees_needed, 2);
}

#[test]
fn missing_skills_are_always_a_subset_of_required() {
    let engine = SkillGapEngine::default();
    let (employees, projects) = sample_roster();

    for gap in engine.compute_gaps(&employees, &projects) {
        assert!(
            gap.missing_skills.is_subset(&gap.required_skills),
            "missing set escaped the requirement for {}",
            gap.project_id.0
        );
        assert!(gap
            .available_skills
            .intersection(&gap.missing_skills)
            .next()
            .is_none());
    }
}

#[test]
fn shared_skills_deduplicate_in_available_set() {
    let engine = SkillGapEngine::default();
    let employees = vec![
        employee("e-1", "Engineering", &["React", "Node"]),
        employee("e-2", "Engineering", &["React"]),
    ];
    let projects = vec![project(
        "p-1",
        "Mobile App",
        "Engineering",
        &["React", "Node"],
        &["e-1", "e-2"],
    )];

    let gaps = engine.compute_gaps(&employees, &projects);

    assert_eq!(gaps[0].available_skills.len(), 2);
    assert!(gaps[0].missing_skills.is_empty());
    assert_eq!(gaps[0].employees_with_skills, 2);
}

#[test]
fn dangling_team_member_contributes_nothing() {
    let engine = SkillGapEngine::default();
    let employees = vec![employee("e-1", "Engineering", &["React"])];
    let projects = vec![project(
        "p-1",
        "Customer Portal",
        "Engineering",
        &["React"],
        &["e-1", "e-left-the-company"],
    )];

    let gaps = engine.compute_gaps(&employees, &projects);

    assert_eq!(gaps[0].severity, GapSeverity::Low);
    assert_eq!(gaps[0].employees_with_skills, 1);
    // The stale id still counts toward the assignment headcount.
    assert_eq!(gaps[0].total_employees_needed, 2);
}

#[test]
fn output_order_follows_input_project_order() {
    let engine = SkillGapEngine::default();
    let (employees, projects) = sample_roster();

    let gaps = engine.compute_gaps(&employees, &projects);

    let computed: Vec<&str> = gaps.iter().map(|gap| gap.project_id.0.as_str()).collect();
    let expected: Vec<&str> = projects.iter().map(|project| project.id.0.as_str()).collect();
    assert_eq!(computed, expected);
}

#[test]
fn recomputation_is_idempotent() {
    let engine = SkillGapEngine::default();
    let (employees, projects) = sample_roster();

    let first = engine.compute_gaps(&employees, &projects);
    let second = engine.compute_gaps(&employees, &projects);

    assert_eq!(first, second);
}

#[test]
fn match_percentage_rounds_to_nearest_integer() {
    let engine = SkillGapEngine::default();
    let employees = vec![employee("e-1", "Data", &["SQL"])];
    let projects = vec![project(
        "p-1",
        "Data Warehouse",
        "Data",
        &["SQL", "Python", "AWS"],
        &["e-1"],
    )];

    let gaps = engine.compute_gaps(&employees, &projects);

    assert_eq!(gaps[0].match_percentage(), 33);
}

#[test]
fn one_fifth_missing_sits_on_the_low_side_of_the_medium_cutoff() {
    let engine = SkillGapEngine::default();
    let employees = vec![employee(
        "e-1",
        "Engineering",
        &["React", "Node", "GraphQL", "Docker"],
    )];
    let projects = vec![project(
        "p-1",
        "Platform Refresh",
        "Engineering",
        &["React", "Node", "GraphQL", "Docker", "Kubernetes"],
        &["e-1"],
    )];

    let gaps = engine.compute_gaps(&employees, &projects);

    // 1 of 5 missing is exactly the medium cutoff, which is strict.
    assert_eq!(gaps[0].severity, GapSeverity::Low);
    assert_eq!(gaps[0].match_percentage(), 80);
}

#[test]
fn recommendations_follow_match_thresholds() {
    let engine = SkillGapEngine::new(AnalyticsConfig::default());
    let employees = vec![
        employee("e-cloud", "Data", &["Python", "AWS"]),
        employee("e-none", "Engineering", &[]),
        employee("e-sql", "Data", &["SQL"]),
    ];
    let projects = vec![
        project("p-full", "Reporting", "Data", &["SQL"], &["e-sql"]),
        project(
            "p-partial",
            "Data Warehouse",
            "Data",
            &["SQL", "Python", "AWS"],
            &["e-cloud"],
        ),
        project("p-empty", "Billing Gateway", "Engineering", &["Go"], &["e-none"]),
    ];

    let gaps = engine.compute_gaps(&employees, &projects);

    assert_eq!(
        engine.recommendation(&gaps[0]),
        StaffingRecommendation::WellStaffed
    );
    // 2 of 3 covered rounds to 67, inside the training band.
    assert_eq!(
        engine.recommendation(&gaps[1]),
        StaffingRecommendation::TrainExistingStaff
    );
    assert_eq!(
        engine.recommendation(&gaps[2]),
        StaffingRecommendation::HireOrReassign
    );
}
