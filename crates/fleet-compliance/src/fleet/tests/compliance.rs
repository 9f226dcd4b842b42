use super::common::*;
use crate::fleet::compliance::{score, CheckStatus, Grade, RubricCategory};
use crate::fleet::domain::DriverAssignment;

#[test]
fn fully_compliant_vehicle_scores_one_hundred() {
    let result = score(&compliant_vehicle(), today());

    assert_eq!(result.score, 100);
    assert_eq!(result.max_score, 100);
    assert_eq!(result.percentage, 100);
    assert_eq!(result.grade, Grade::A);
    assert_eq!(result.grade_label, "Excellent");
    assert!(result.issues.is_empty());
    assert!(!result.has_issues);
    assert_eq!(result.breakdown.len(), 8);
    assert_eq!(result.summary, "Perfect compliance! Every check passed.");
}

#[test]
fn empty_vehicle_scores_zero_with_seven_issues() {
    let result = score(&empty_vehicle(), today());

    assert_eq!(result.score, 0);
    assert_eq!(result.grade, Grade::D);
    assert_eq!(
        issue_names(&result),
        vec![
            "Insurance",
            "Registration Certificate",
            "Permit",
            "Pollution Certificate",
            "Driver Assigned",
            "GPS Tracking",
            "Vehicle Data Completeness",
        ]
    );
    assert_eq!(result.summary, "Poor compliance, 7 critical issues");
}

#[test]
fn score_equals_sum_of_breakdown_points() {
    let mut vehicles = vec![compliant_vehicle(), empty_vehicle()];

    let mut partial = compliant_vehicle();
    partial.insurance_expiry = expiry_in(-3);
    partial.gps_enabled = Some(false);
    partial.fitness_expiry = None;
    vehicles.push(partial);

    let mut expiring = compliant_vehicle();
    expiring.permit_expiry = expiry_in(5);
    expiring.engine_number = None;
    vehicles.push(expiring);

    for vehicle in &vehicles {
        let result = score(vehicle, today());
        let sum: u16 = result
            .breakdown
            .iter()
            .map(|entry| u16::from(entry.points))
            .sum();
        assert_eq!(result.score, sum);
        assert!(result.score <= 100);
        assert_eq!(u16::from(result.percentage), result.score);
        assert_eq!(result.grade, Grade::from_percentage(result.percentage));
    }
}

#[test]
fn absent_fitness_is_not_an_issue() {
    let mut vehicle = compliant_vehicle();
    vehicle.fitness_expiry = None;

    let result = score(&vehicle, today());

    assert_eq!(result.score, 95);
    assert_eq!(result.grade, Grade::A);
    assert!(entry(&result, "Fitness Certificate").is_none());
    assert!(!issue_names(&result)
        .iter()
        .any(|name| name.contains("Fitness")));
}

#[test]
fn expired_fitness_is_an_issue_worth_zero() {
    let mut vehicle = compliant_vehicle();
    vehicle.fitness_expiry = expiry_in(-10);

    let result = score(&vehicle, today());

    let fitness = result
        .issues
        .iter()
        .find(|entry| entry.item.contains("Fitness"))
        .expect("fitness issue present");
    assert_eq!(fitness.points, 0);
    assert_eq!(fitness.status, CheckStatus::Invalid);
    assert_eq!(
        fitness.issue.as_deref(),
        Some("Fitness Certificate: Expired 10 days ago")
    );
    assert_eq!(result.score, 95);
}

#[test]
fn unreadable_fitness_date_counts_as_supplied() {
    let mut vehicle = compliant_vehicle();
    vehicle.fitness_expiry = Some("someday".into());

    let result = score(&vehicle, today());

    assert!(issue_names(&result).contains(&"Fitness Certificate"));
}

#[test]
fn compact_year_fitness_is_unreadable_not_expired() {
    let mut vehicle = compliant_vehicle();
    vehicle.fitness_expiry = Some("2027".into());

    let result = score(&vehicle, today());

    let fitness = entry(&result, "Fitness Certificate").expect("fitness entry");
    assert_eq!(
        fitness.issue.as_deref(),
        Some("Fitness Certificate has an unreadable expiry date")
    );
    assert_eq!(result.score, 95);
}

#[test]
fn documents_in_warning_window_earn_no_points() {
    let mut vehicle = compliant_vehicle();
    vehicle.insurance_expiry = expiry_in(20);

    let result = score(&vehicle, today());

    let insurance = entry(&result, "Insurance").expect("insurance entry");
    assert_eq!(insurance.status, CheckStatus::Invalid);
    assert_eq!(insurance.points, 0);
    assert_eq!(insurance.max_points, 25);
    assert_eq!(result.score, 75);
    assert_eq!(result.grade, Grade::B);
    assert_eq!(result.summary, "Good compliance, 1 issue to address");
}

#[test]
fn operational_checks_fail_closed() {
    let mut vehicle = compliant_vehicle();
    vehicle.driver = Some(DriverAssignment::default());
    vehicle.gps_enabled = None;
    vehicle.chassis_number = Some(" ".to_string());

    let result = score(&vehicle, today());

    let operational: Vec<&str> = result
        .issues
        .iter()
        .filter(|entry| entry.category == RubricCategory::Operational)
        .map(|entry| entry.item)
        .collect();
    assert_eq!(
        operational,
        vec!["Driver Assigned", "GPS Tracking", "Vehicle Data Completeness"]
    );
    assert_eq!(result.score, 70);
    assert_eq!(result.grade, Grade::C);
}

#[test]
fn issues_keep_rubric_order() {
    let mut vehicle = compliant_vehicle();
    vehicle.puc_expiry = None;
    vehicle.insurance_expiry = expiry_in(-1);
    vehicle.gps_enabled = Some(false);

    let result = score(&vehicle, today());

    assert_eq!(
        issue_names(&result),
        vec!["Insurance", "Pollution Certificate", "GPS Tracking"]
    );
    assert_eq!(result.score, 55);
    assert_eq!(result.grade, Grade::D);
}

#[test]
fn scoring_is_deterministic() {
    let vehicle = compliant_vehicle();
    assert_eq!(score(&vehicle, today()), score(&vehicle, today()));
}
