use chrono::{Duration, NaiveDate};
use fleet_compliance::fleet::{
    classify, score, sort_by_urgency, summarize, DocumentKind, DocumentTier, DriverAssignment,
    ExpiryValue, Grade, VehicleRecord,
};

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

fn in_days(days: i64) -> Option<ExpiryValue> {
    Some(ExpiryValue::from((now() + Duration::days(days)).to_string()))
}

fn tier_at(days: Option<i64>) -> DocumentTier {
    classify(
        DocumentKind::Insurance,
        days.map(|offset| now() + Duration::days(offset)),
        now(),
    )
    .tier
}

#[test]
fn tier_boundaries_hold_across_a_month_boundary() {
    assert_eq!(tier_at(Some(-1)), DocumentTier::Expired);
    assert_eq!(tier_at(Some(0)), DocumentTier::Critical);
    assert_eq!(tier_at(Some(7)), DocumentTier::Critical);
    assert_eq!(tier_at(Some(8)), DocumentTier::Warning);
    assert_eq!(tier_at(Some(30)), DocumentTier::Warning);
    assert_eq!(tier_at(Some(31)), DocumentTier::Valid);
    assert_eq!(tier_at(None), DocumentTier::Missing);
}

#[test]
fn summary_and_urgency_helpers_compose() {
    let mut statuses = vec![
        classify(DocumentKind::Permit, Some(now() + Duration::days(400)), now()),
        classify(DocumentKind::Insurance, Some(now() - Duration::days(2)), now()),
        classify(DocumentKind::PollutionCertificate, Some(now() + Duration::days(12)), now()),
        classify(DocumentKind::FitnessCertificate, None, now()),
    ];

    sort_by_urgency(&mut statuses);
    let order: Vec<DocumentTier> = statuses.iter().map(|status| status.tier).collect();
    assert_eq!(
        order,
        vec![
            DocumentTier::Expired,
            DocumentTier::Warning,
            DocumentTier::Missing,
            DocumentTier::Valid
        ]
    );

    let summary = summarize(&statuses[..1]);
    assert_eq!(summary.needs_attention, 1);
}

#[test]
fn mixed_vehicle_lands_in_expected_grade() {
    let vehicle = VehicleRecord {
        registration_number: Some("DL-04-XY-2222".to_string()),
        rc_expiry: in_days(200),
        insurance_expiry: in_days(90),
        permit_expiry: in_days(6),
        puc_expiry: in_days(45),
        fitness_expiry: None,
        driver: Some(DriverAssignment::named("Kiran")),
        gps_enabled: Some(true),
        chassis_number: Some("CH-1".to_string()),
        engine_number: Some("EN-1".to_string()),
    };

    let result = score(&vehicle, now());

    assert_eq!(result.score, 85);
    assert_eq!(result.grade, Grade::B);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].item, "Permit");
    assert_eq!(
        result.issues[0].issue.as_deref(),
        Some("Permit: Expires in 6 days")
    );
}

#[test]
fn grade_cutoffs_match_rubric_totals() {
    let base = VehicleRecord {
        rc_expiry: in_days(365),
        insurance_expiry: in_days(365),
        permit_expiry: in_days(365),
        puc_expiry: in_days(365),
        fitness_expiry: in_days(365),
        driver: Some(DriverAssignment::named("Kiran")),
        gps_enabled: Some(true),
        chassis_number: Some("CH-1".to_string()),
        engine_number: Some("EN-1".to_string()),
        ..VehicleRecord::default()
    };

    let mut ninety = base.clone();
    ninety.gps_enabled = Some(false);
    assert_eq!(score(&ninety, now()).grade, Grade::A);

    let mut eighty_five = base.clone();
    eighty_five.puc_expiry = None;
    eighty_five.chassis_number = None;
    let result = score(&eighty_five, now());
    assert_eq!(result.percentage, 85);
    assert_eq!(result.grade, Grade::B);

    let mut sixty = base;
    sixty.insurance_expiry = None;
    sixty.gps_enabled = None;
    sixty.engine_number = None;
    let result = score(&sixty, now());
    assert_eq!(result.percentage, 60);
    assert_eq!(result.grade, Grade::C);
}
