use std::collections::HashSet;

use catalog::Catalog;

#[test]
fn fixture_ids_are_unique_per_entity() {
    let catalog = Catalog::fixtures();

    let text_ids: HashSet<_> = catalog
        .text_categories()
        .iter()
        .flat_map(|c| c.texts.iter().map(|t| t.id))
        .collect();
    let text_count: usize = catalog.text_categories().iter().map(|c| c.texts.len()).sum();
    assert_eq!(text_ids.len(), text_count);

    let video_ids: HashSet<_> = catalog.videos().iter().map(|v| v.id).collect();
    assert_eq!(video_ids.len(), catalog.videos().len());

    let event_ids: HashSet<_> = catalog.events().iter().map(|e| e.id).collect();
    assert_eq!(event_ids.len(), catalog.events().len());

    let candidate_ids: HashSet<_> = catalog.candidates().iter().map(|c| c.id).collect();
    assert_eq!(candidate_ids.len(), catalog.candidates().len());
}

#[test]
fn quiz_answers_point_at_existing_options() {
    let catalog = Catalog::fixtures();
    assert!(!catalog.quiz_questions().is_empty());
    for question in catalog.quiz_questions() {
        assert!(
            question.correct_option < question.options.len(),
            "question {:?} has an out-of-range answer",
            question.id
        );
    }
}

#[test]
fn events_end_after_they_start() {
    let catalog = Catalog::fixtures();
    for event in catalog.events() {
        assert!(event.ends_at > event.starts_at.time(), "event {:?}", event.id);
    }
}

#[test]
fn chat_seeds_are_numbered_from_one() {
    let catalog = Catalog::fixtures();
    let ids: Vec<u32> = catalog.shiur_chat().iter().map(|m| m.id).collect();
    assert_eq!(ids, (1..=catalog.shiur_chat().len() as u32).collect::<Vec<_>>());
}

#[test]
fn annual_billing_never_costs_more() {
    let catalog = Catalog::fixtures();
    for plan in catalog.pricing_plans() {
        assert!(plan.annual_cents <= plan.monthly_cents, "plan {}", plan.name);
    }
    assert_eq!(
        catalog.pricing_plans().iter().filter(|p| p.popular).count(),
        1
    );
}
