/// Property tests for plan search, risk scoring, and string lookup
use insurance_advisor::catalog::{AgeRange, Category, InsurancePlan};
use insurance_advisor::i18n::{StringTable, Translator};
use insurance_advisor::risk::{QuestionId, QuestionnaireResponse, RiskTier, QUESTIONS};
use insurance_advisor::search::{
    compare_plans, filter_and_sort, CategorySelector, FilterCriteria, SortKey, UserProfile,
};
use insurance_advisor::score;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_selector() -> impl Strategy<Value = CategorySelector> {
    prop_oneof![
        Just(CategorySelector::All),
        arb_category().prop_map(CategorySelector::Only),
    ]
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_plan() -> impl Strategy<Value = InsurancePlan> {
    (
        "[A-Z][a-z]{2,8}( Shield| Care| Cover)?",
        prop::sample::select(vec!["Star Health", "HDFC Ergo", "LIC", "Bajaj Allianz"]),
        arb_category(),
        1_000u32..80_000,
        1u32..100,
        0u32..=50,
        (18u8..50, 0u8..40),
        (0u32..120_000, 0u32..6, any::<bool>()),
    )
        .prop_map(
            |(name, provider, category, premium, coverage_lakhs, rating_tenths, (min_age, span), (min_income, max_dependents, recommended))| {
                InsurancePlan {
                    id: 0,
                    name,
                    provider: provider.to_string(),
                    category,
                    premium: f64::from(premium),
                    coverage: f64::from(coverage_lakhs) * 100_000.0,
                    features: vec!["Cashless".to_string()],
                    rating: f64::from(rating_tenths) / 10.0,
                    age_range: AgeRange::new(min_age, min_age.saturating_add(span)),
                    min_income: f64::from(min_income),
                    max_dependents,
                    recommended,
                }
            },
        )
}

fn arb_catalog() -> impl Strategy<Value = Vec<InsurancePlan>> {
    prop::collection::vec(arb_plan(), 0..24).prop_map(|mut plans| {
        for (i, plan) in plans.iter_mut().enumerate() {
            plan.id = i as u32 + 1;
        }
        plans
    })
}

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (18u8..90, 0u32..8, 0u32..200_000).prop_map(|(age, dependents, income)| UserProfile {
        age,
        dependents,
        income: f64::from(income),
        occupation: "Teacher".to_string(),
    })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (1_000u32..100_000, 1u32..100, arb_sort()).prop_map(|(max_premium, coverage_lakhs, sort_by)| {
        FilterCriteria {
            max_premium: f64::from(max_premium),
            min_coverage: f64::from(coverage_lakhs) * 100_000.0,
            sort_by,
        }
    })
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[a-z]{1,3}",
        prop::sample::select(vec!["shield", "STAR", "lic", "care"]).prop_map(str::to_string),
    ]
}

fn option_label(id: QuestionId) -> impl Strategy<Value = Option<String>> {
    let options: Vec<String> = id.question().options.iter().map(|o| o.key.to_string()).collect();
    prop_oneof![
        Just(None),
        prop::sample::select(options).prop_map(Some),
        "[a-z]{1,6}".prop_map(Some),
    ]
}

fn arb_responses() -> impl Strategy<Value = QuestionnaireResponse> {
    (
        option_label(QuestionId::Age),
        option_label(QuestionId::Lifestyle),
        option_label(QuestionId::Smoking),
        option_label(QuestionId::Occupation),
        prop::collection::btree_set(prop::sample::select(vec!["diabetes", "heartDisease", "none"]), 0..3),
    )
        .prop_map(|(age, lifestyle, smoking, occupation, medical)| {
            let mut responses = QuestionnaireResponse::new().with_many(QuestionId::Medical, medical);
            for (id, label) in [
                (QuestionId::Age, age),
                (QuestionId::Lifestyle, lifestyle),
                (QuestionId::Smoking, smoking),
                (QuestionId::Occupation, occupation),
            ] {
                if let Some(label) = label {
                    responses = responses.with(id, label);
                }
            }
            responses
        })
}

// Filtering
proptest! {
    #[test]
    fn results_are_a_subset_satisfying_every_predicate(
        plans in arb_catalog(),
        profile in arb_profile(),
        criteria in arb_criteria(),
        category in arb_selector(),
        query in arb_query(),
    ) {
        let results = filter_and_sort(&plans, &profile, &criteria, category, &query);
        prop_assert!(results.len() <= plans.len());

        for plan in &results {
            prop_assert!(plans.iter().any(|p| p.id == plan.id));
            prop_assert!(category.accepts(plan.category));
            prop_assert!(query.is_empty() || plan.matches_query(&query));
            prop_assert!(plan.age_range.contains(profile.age));
            prop_assert!(profile.income >= plan.min_income);
            prop_assert!(profile.dependents <= plan.max_dependents);
            prop_assert!(plan.premium <= criteria.max_premium);
            prop_assert!(plan.coverage >= criteria.min_coverage);
        }

        // Nothing that passes every predicate is left out
        let expected = plans
            .iter()
            .filter(|p| insurance_advisor::search::matches(p, &profile, &criteria, category, &query))
            .count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn tightening_max_premium_never_adds_plans(
        plans in arb_catalog(),
        profile in arb_profile(),
        criteria in arb_criteria(),
        cut in 0u32..50_000,
    ) {
        let loose = filter_and_sort(&plans, &profile, &criteria, CategorySelector::All, "");
        let tight_criteria = FilterCriteria {
            max_premium: (criteria.max_premium - f64::from(cut)).max(0.0),
            ..criteria.clone()
        };
        let tight = filter_and_sort(&plans, &profile, &tight_criteria, CategorySelector::All, "");

        prop_assert!(tight.len() <= loose.len());
        for plan in &tight {
            prop_assert!(loose.iter().any(|p| p.id == plan.id));
        }
    }

    #[test]
    fn raising_min_coverage_never_adds_plans(
        plans in arb_catalog(),
        profile in arb_profile(),
        criteria in arb_criteria(),
        extra_lakhs in 0u32..50,
    ) {
        let loose = filter_and_sort(&plans, &profile, &criteria, CategorySelector::All, "");
        let tight_criteria = FilterCriteria {
            min_coverage: criteria.min_coverage + f64::from(extra_lakhs) * 100_000.0,
            ..criteria.clone()
        };
        let tight = filter_and_sort(&plans, &profile, &tight_criteria, CategorySelector::All, "");

        for plan in &tight {
            prop_assert!(loose.iter().any(|p| p.id == plan.id));
        }
    }

    #[test]
    fn narrowing_category_never_adds_plans(
        plans in arb_catalog(),
        profile in arb_profile(),
        criteria in arb_criteria(),
        category in arb_category(),
    ) {
        let all = filter_and_sort(&plans, &profile, &criteria, CategorySelector::All, "");
        let only = filter_and_sort(&plans, &profile, &criteria, CategorySelector::Only(category), "");

        prop_assert_eq!(
            only.len(),
            all.iter().filter(|p| p.category == category).count()
        );
    }

    #[test]
    fn sort_order_is_respected(
        plans in arb_catalog(),
        profile in arb_profile(),
        criteria in arb_criteria(),
    ) {
        let results = filter_and_sort(&plans, &profile, &criteria, CategorySelector::All, "");
        for pair in results.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert_ne!(compare_plans(criteria.sort_by, a, b), Ordering::Greater);
            match criteria.sort_by {
                SortKey::PremiumLow => prop_assert!(a.premium <= b.premium),
                SortKey::PremiumHigh => prop_assert!(a.premium >= b.premium),
                SortKey::CoverageHigh => prop_assert!(a.coverage >= b.coverage),
                SortKey::Rating => prop_assert!(a.rating >= b.rating),
                SortKey::Recommended => prop_assert!(a.recommended || !b.recommended),
            }
            // Ties keep catalog order
            if compare_plans(criteria.sort_by, a, b) == Ordering::Equal {
                prop_assert!(a.id < b.id);
            }
        }
    }

    #[test]
    fn sort_key_does_not_change_membership(
        plans in arb_catalog(),
        profile in arb_profile(),
        criteria in arb_criteria(),
        other in arb_sort(),
    ) {
        let resorted = FilterCriteria { sort_by: other, ..criteria.clone() };
        let mut a: Vec<u32> = filter_and_sort(&plans, &profile, &criteria, CategorySelector::All, "")
            .iter().map(|p| p.id).collect();
        let mut b: Vec<u32> = filter_and_sort(&plans, &profile, &resorted, CategorySelector::All, "")
            .iter().map(|p| p.id).collect();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }
}

// Scoring
proptest! {
    #[test]
    fn score_is_bounded_with_exactly_one_tier(responses in arb_responses()) {
        let s = score(&responses);
        prop_assert!(s.value() <= 100);

        let tier = s.tier();
        let expected = if s.value() < 30 {
            RiskTier::Low
        } else if s.value() < 60 {
            RiskTier::Moderate
        } else {
            RiskTier::High
        };
        prop_assert_eq!(tier, expected);
    }

    #[test]
    fn score_is_pure(responses in arb_responses()) {
        prop_assert_eq!(score(&responses), score(&responses.clone()));
    }

    #[test]
    fn medical_and_occupation_do_not_move_the_score(
        responses in arb_responses(),
        occupation in prop::sample::select(vec!["lowRisk", "mediumRisk", "highRisk"]),
    ) {
        let changed = responses
            .clone()
            .with(QuestionId::Occupation, occupation)
            .with_many(QuestionId::Medical, ["hypertension"]);
        prop_assert_eq!(score(&responses), score(&changed));
    }

    #[test]
    fn unknown_answers_score_zero(label in "[xyz]{3,8}") {
        let mut responses = QuestionnaireResponse::new();
        for question in QUESTIONS.iter() {
            responses = responses.with(question.id, label.clone());
        }
        prop_assert_eq!(score(&responses).value(), 0);
    }
}

// String lookup
proptest! {
    #[test]
    fn lookup_never_fails_and_falls_back_in_order(
        key in "[a-zA-Z]{1,12}",
        locale in prop::sample::select(vec!["en", "hi", "fr", ""]),
    ) {
        let t = Translator::builtin();
        let text = t.translate_in(&key, locale);
        prop_assert!(!text.is_empty());

        if !t.has_key(&key, locale) {
            if t.has_key(&key, "en") {
                prop_assert_eq!(text, t.translate_in(&key, "en"));
            } else {
                prop_assert_eq!(text, key.as_str());
            }
        }
    }

    #[test]
    fn custom_tables_follow_the_fallback_chain(
        entries in prop::collection::hash_map("[a-z]{1,6}", "[A-Z][a-z]{0,8}", 0..12),
        overrides in prop::collection::hash_map("[a-z]{1,6}", "[0-9]{1,4}", 0..6),
        probe in "[a-z]{1,6}",
    ) {
        let base: StringTable = entries.clone().into_iter().collect();
        let partial: StringTable = overrides.clone().into_iter().collect();
        let mut tables = HashMap::new();
        tables.insert("base".to_string(), base);
        tables.insert("partial".to_string(), partial);

        let mut t = Translator::new(tables, "base").unwrap();
        t.set_locale("partial");

        let expected = overrides
            .get(&probe)
            .or_else(|| entries.get(&probe))
            .map(String::as_str)
            .unwrap_or(probe.as_str());
        prop_assert_eq!(t.translate(&probe), expected);
    }
}
