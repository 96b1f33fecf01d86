use super::*;
use crate::domain::foundation::{ResponseId, Timestamp};
use crate::domain::response::AnswerSet;
use crate::domain::scheme::Respondent;

fn response(id: i64, counter: u16, rating_index: f64) -> Response {
    Response {
        id: ResponseId::new(id),
        counter_id: CounterId::new(counter),
        answers: AnswerSet::empty(),
        rating_index: RatingIndex::from_stored(rating_index),
        respondent: Respondent::empty(),
        submitted_at: Some(Timestamp::from_unix_secs(1_700_000_000 + id as u64)),
    }
}

#[test]
fn global_aggregate_over_empty_collection_has_no_grade() {
    let scheme = SurveyScheme::standard();
    let summary = aggregate_global(&[], &scheme.grading);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.index.value(), 0.0);
    assert!(summary.grade.is_none());
    assert_eq!(summary.index_display(), "—");
    assert_eq!(summary.grade_display(), "—");
}

#[test]
fn global_aggregate_computes_index_and_grade() {
    let scheme = SurveyScheme::standard();
    let responses = vec![response(1, 1, 4.0), response(2, 2, 2.0)];
    let summary = aggregate_global(&responses, &scheme.grading);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.index.value(), 75.0);
    assert_eq!(summary.grade.as_ref().unwrap().letter, "C");
}

#[test]
fn global_aggregate_is_order_independent() {
    let scheme = SurveyScheme::standard();
    let forward = vec![response(1, 1, 4.0), response(2, 2, 3.0), response(3, 3, 2.0)];
    let mut reversed = forward.clone();
    reversed.reverse();
    assert_eq!(
        aggregate_global(&forward, &scheme.grading),
        aggregate_global(&reversed, &scheme.grading)
    );
}

#[test]
fn by_counter_output_length_equals_configured_counter_count() {
    let scheme = SurveyScheme::standard();
    let summaries = aggregate_by_counter(&[], &scheme);
    assert_eq!(summaries.len(), scheme.counter_count() as usize);
    for summary in &summaries {
        assert_eq!(summary.count, 0);
        assert!(summary.grade.is_none());
        assert_eq!(summary.grade_display(), "—");
    }
}

#[test]
fn by_counter_partitions_responses_by_counter_id() {
    let scheme = SurveyScheme::standard();
    let responses = vec![
        response(1, 3, 4.0),
        response(2, 3, 2.0),
        response(3, 7, 3.0),
    ];
    let summaries = aggregate_by_counter(&responses, &scheme);

    // Counter 3: two responses, mean rating 3.0 -> index 75.0 -> C (Poor).
    let counter3 = &summaries[2];
    assert_eq!(counter3.counter_id, CounterId::new(3));
    assert_eq!(counter3.count, 2);
    assert_eq!(counter3.index.value(), 75.0);
    let grade = counter3.grade.as_ref().unwrap();
    assert_eq!(grade.letter, "C");
    assert_eq!(grade.label, "Poor");

    let counter7 = &summaries[6];
    assert_eq!(counter7.count, 1);
    assert_eq!(counter7.index.value(), 75.0);

    // Every other counter stays empty.
    let empty = summaries
        .iter()
        .filter(|s| s.count == 0)
        .count();
    assert_eq!(empty, scheme.counter_count() as usize - 2);
}

#[test]
fn by_counter_results_are_in_ascending_counter_order() {
    let scheme = SurveyScheme::standard();
    let responses = vec![response(1, 9, 4.0), response(2, 1, 1.0)];
    let summaries = aggregate_by_counter(&responses, &scheme);
    let ids: Vec<u16> = summaries.iter().map(|s| s.counter_id.value()).collect();
    assert_eq!(ids, (1..=23).collect::<Vec<u16>>());
}

#[test]
fn single_perfect_response_grades_a() {
    let scheme = SurveyScheme::standard();
    let summary = aggregate_global(&[response(1, 1, 4.0)], &scheme.grading);
    assert_eq!(summary.index.value(), 100.0);
    assert_eq!(summary.grade.as_ref().unwrap().letter, "A");
    assert_eq!(summary.index_display(), "100.00");
    assert_eq!(summary.grade_display(), "A (Very Good)");
}
