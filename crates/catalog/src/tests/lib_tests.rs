use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn empty_query_returns_every_text() {
    let catalog = Catalog::fixtures();
    let total: usize = catalog.text_categories().iter().map(|c| c.texts.len()).sum();
    assert_eq!(catalog.search_texts(&TextFilter::default()).len(), total);
}

#[test]
fn text_search_is_case_insensitive_over_names() {
    let catalog = Catalog::fixtures();
    let hits = catalog.search_texts(&TextFilter::query("PIRKEI"));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|hit| hit.text.name == "Pirkei Avot"));
    let categories: Vec<_> = hits.iter().map(|hit| hit.category.as_str()).collect();
    assert_eq!(categories, vec!["Mishná", "Ética e Mussar"]);
}

#[test]
fn text_search_matches_category_titles() {
    let catalog = Catalog::fixtures();
    let hits = catalog.search_texts(&TextFilter::query("filosofia"));
    assert_eq!(hits.len(), 5);
    assert!(hits.iter().all(|hit| hit.category == "Filosofia Judaica"));
}

#[test]
fn text_search_applies_level_filter() {
    let catalog = Catalog::fixtures();
    let hits = catalog.search_texts(&TextFilter {
        query: "shulchan".into(),
        level: Some(StudyLevel::Intermediate),
    });
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text.name, "Kitzur Shulchan Aruch");
}

#[test]
fn video_filter_combines_search_and_category() {
    let catalog = Catalog::fixtures();
    let all_ethics = catalog.filter_videos(&VideoFilter {
        query: String::new(),
        category: Some(VideoCategory::Ethics),
    });
    assert_eq!(all_ethics.len(), 2);

    let mussar = catalog.filter_videos(&VideoFilter {
        query: "ramchal".into(),
        category: Some(VideoCategory::Ethics),
    });
    assert_eq!(mussar.len(), 1);
    assert_eq!(mussar[0].id, VideoId(8));

    let none = catalog.filter_videos(&VideoFilter {
        query: "ramchal".into(),
        category: Some(VideoCategory::Torah),
    });
    assert!(none.is_empty());
}

#[test]
fn video_shelves_follow_progress_and_views() {
    let catalog = Catalog::fixtures();

    let continuing: Vec<_> = catalog.continue_watching().iter().map(|v| v.id).collect();
    assert_eq!(continuing, vec![VideoId(1), VideoId(3)]);

    let fresh: Vec<_> = catalog.new_releases().iter().map(|v| v.id).collect();
    assert_eq!(fresh, vec![VideoId(2), VideoId(5), VideoId(8)]);

    let popular = catalog.popular_videos(6);
    assert_eq!(popular.len(), 6);
    assert_eq!(popular[0].id, VideoId(4));
    assert!(popular.windows(2).all(|w| w[0].views >= w[1].views));
}

#[test]
fn category_counts_cover_every_category() {
    let counts = Catalog::fixtures().video_category_counts();
    assert_eq!(counts.len(), VideoCategory::ALL.len());
    assert_eq!(counts[&VideoCategory::Torah], 2);
    assert_eq!(counts[&VideoCategory::Prayer], 1);
    assert_eq!(counts.values().sum::<usize>(), 8);
}

#[test]
fn events_are_grouped_by_day_and_month() {
    let catalog = Catalog::fixtures();
    assert_eq!(catalog.events_on(date(2025, 11, 20)).len(), 2);
    assert!(catalog.events_on(date(2025, 11, 21)).is_empty());
    assert_eq!(catalog.events_in_month(2025, 11).len(), 7);
    assert!(catalog.events_in_month(2025, 12).is_empty());
    assert_eq!(
        catalog.days_with_events(2025, 11),
        vec![16, 17, 18, 19, 20, 25]
    );
}

#[test]
fn upcoming_events_are_sorted_and_limited() {
    let catalog = Catalog::fixtures();
    let now = date(2025, 11, 18).and_hms_opt(12, 0, 0).expect("time");
    let upcoming = catalog.upcoming_events(now, 3);
    let ids: Vec<_> = upcoming.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EventId(2), EventId(4), EventId(6)]);
}

#[test]
fn week_agenda_labels_today_and_tomorrow() {
    let catalog = Catalog::fixtures();
    let agenda = catalog.week_agenda(date(2025, 11, 16));
    let labels: Vec<_> = agenda.iter().map(|day| day.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Hoje", "Amanhã", "Ter, 18 Nov", "Qua, 19 Nov", "Qui, 20 Nov"]
    );
    let thursday = &agenda[4];
    assert_eq!(thursday.events.len(), 2);
    assert!(thursday.events[0].starts_at < thursday.events[1].starts_at);
}

#[test]
fn annual_savings_only_apply_to_paid_plans() {
    let catalog = Catalog::fixtures();
    let plans = catalog.pricing_plans();
    assert_eq!(plans[0].annual_savings_cents(), None);
    assert!(plans[0].is_free());
    assert_eq!(plans[1].annual_savings_cents(), Some(18_360));
    assert_eq!(plans[1].price_cents(BillingCycle::Annual), 6_170);
    assert_eq!(format_brl(18_360), "R$ 183.60");
}

#[test]
fn serializes_text_extent_untagged() {
    let value = serde_json::to_value(TextExtent::Chapters(9)).expect("json");
    assert_eq!(value, serde_json::json!(9));
    let value = serde_json::to_value(TextExtent::Label("Completo".into())).expect("json");
    assert_eq!(value, serde_json::json!("Completo"));
}
