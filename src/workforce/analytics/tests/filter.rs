use super::common::*;
use crate::workforce::analytics::domain::{GapSeverity, ProjectId, ProjectIndex, SkillGap};
use crate::workforce::analytics::engine::SkillGapEngine;
use crate::workforce::analytics::filter::{filter_gaps, GapFilter};

fn computed() -> (Vec<SkillGap>, ProjectIndex) {
    let engine = SkillGapEngine::default();
    let (employees, projects) = sample_roster();
    let gaps = engine.compute_gaps(&employees, &projects);
    (gaps, ProjectIndex::build(&projects))
}

#[test]
fn empty_filter_passes_everything_through() {
    let (gaps, index) = computed();

    let filter = GapFilter::default();
    assert!(filter.is_empty());

    let surviving = filter_gaps(&gaps, &filter, &index);
    assert_eq!(surviving, gaps);
}

#[test]
fn severity_filter_is_exact() {
    let (gaps, index) = computed();

    let filter = GapFilter {
        severity: Some(GapSeverity::High),
        ..GapFilter::default()
    };

    let surviving = filter_gaps(&gaps, &filter, &index);
    assert_eq!(surviving.len(), 1);
    assert_eq!(surviving[0].project_id.0, "p-gateway");
}

#[test]
fn search_is_case_insensitive_over_required_skills() {
    let (gaps, index) = computed();

    let filter = GapFilter {
        search: Some("aws".to_string()),
        ..GapFilter::default()
    };

    let surviving = filter_gaps(&gaps, &filter, &index);
    assert_eq!(surviving.len(), 1);
    assert_eq!(surviving[0].project_id.0, "p-warehouse");
}

#[test]
fn search_matches_project_names_and_missing_skills() {
    let (gaps, index) = computed();

    let by_name = filter_gaps(
        &gaps,
        &GapFilter {
            search: Some("portal".to_string()),
            ..GapFilter::default()
        },
        &index,
    );
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].project_id.0, "p-portal");

    let by_missing = filter_gaps(
        &gaps,
        &GapFilter {
            search: Some("node".to_string()),
            ..GapFilter::default()
        },
        &index,
    );
    assert_eq!(by_missing.len(), 1);
    assert_eq!(by_missing[0].project_id.0, "p-portal");
}

#[test]
fn project_filter_is_exact() {
    let (gaps, index) = computed();

    let filter = GapFilter {
        project: Some(ProjectId("p-wiki".to_string())),
        ..GapFilter::default()
    };

    let surviving = filter_gaps(&gaps, &filter, &index);
    assert_eq!(surviving.len(), 1);
    assert_eq!(surviving[0].project_id.0, "p-wiki");
}

#[test]
fn department_filter_resolves_through_the_project_index() {
    let (gaps, index) = computed();

    let filter = GapFilter {
        department: Some("Data".to_string()),
        ..GapFilter::default()
    };

    let surviving = filter_gaps(&gaps, &filter, &index);
    assert_eq!(surviving.len(), 1);
    assert_eq!(surviving[0].project_id.0, "p-warehouse");
}

#[test]
fn predicates_combine_conjunctively() {
    let (gaps, index) = computed();

    let filter = GapFilter {
        severity: Some(GapSeverity::Low),
        department: Some("Engineering".to_string()),
        ..GapFilter::default()
    };

    // Both low-severity projects exist, but neither is in Engineering.
    let surviving = filter_gaps(&gaps, &filter, &index);
    assert!(surviving.is_empty());
}

#[test]
fn filtering_preserves_order_and_leaves_input_untouched() {
    let (gaps, index) = computed();
    let before = gaps.clone();

    let filter = GapFilter {
        search: Some("a".to_string()),
        ..GapFilter::default()
    };
    let surviving = filter_gaps(&gaps, &filter, &index);

    assert_eq!(gaps, before);

    let positions: Vec<usize> = surviving
        .iter()
        .map(|gap| {
            gaps.iter()
                .position(|original| original.project_id == gap.project_id)
                .expect("survivor came from the input")
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
