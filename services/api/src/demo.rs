use chrono::{Duration, NaiveDate};
use clap::Args;
use fleet_compliance::error::AppError;
use fleet_compliance::fleet::{
    document_statuses, parse_reference_date, resolve_today, sort_by_urgency, DriverAssignment,
    ExpiryValue, FleetComplianceReport, FleetRosterImporter, JourneyProgress, JourneyStage,
    VehicleRecord, VehicleScorecard,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct FleetReportArgs {
    /// Fleet roster CSV export
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = parse_reference_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Only print the scorecard for this registration number
    #[arg(long)]
    pub(crate) vehicle: Option<String>,
    /// Include every document status per vehicle
    #[arg(long)]
    pub(crate) list_documents: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today)
    #[arg(long, value_parser = parse_reference_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_fleet_report(args: FleetReportArgs) -> Result<(), AppError> {
    let FleetReportArgs {
        roster,
        today,
        vehicle,
        list_documents,
    } = args;

    let today = resolve_today(today);
    let vehicles = FleetRosterImporter::from_path(&roster)?;
    let report = FleetComplianceReport::build(&vehicles, today);

    match vehicle {
        Some(registration) => match report.scorecard(&registration) {
            Some(card) => {
                let record = vehicles
                    .iter()
                    .find(|candidate| candidate.display_name() == card.registration_number);
                render_scorecard(card, record, today, true);
            }
            None => println!("No vehicle {registration} in {}", roster.display()),
        },
        None => render_fleet_report(&report, &vehicles, list_documents),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = resolve_today(args.today);
    let vehicles = sample_fleet(today);
    let report = FleetComplianceReport::build(&vehicles, today);

    println!("Fleet compliance demo");
    render_fleet_report(&report, &vehicles, true);

    println!("\nJourney progression");
    for stage in JourneyStage::ordered() {
        let progress = JourneyProgress::for_stage(stage);
        let next = progress
            .next_stage_label
            .map(|label| format!(", next: {label}"))
            .unwrap_or_default();
        println!(
            "- [{}/{}] {} ({}%, /api/v1/journey/{}){}",
            progress.step,
            progress.total_steps,
            progress.stage_label,
            progress.percent,
            stage.key(),
            next
        );
    }

    Ok(())
}

pub(crate) fn sample_fleet(today: NaiveDate) -> Vec<VehicleRecord> {
    let in_days = |days: i64| Some(ExpiryValue::from((today + Duration::days(days)).to_string()));

    vec![
        VehicleRecord {
            registration_number: Some("KA-01-AB-1234".to_string()),
            rc_expiry: in_days(900),
            insurance_expiry: in_days(240),
            permit_expiry: in_days(180),
            puc_expiry: in_days(90),
            fitness_expiry: in_days(400),
            driver: Some(DriverAssignment::named("Asha Rao")),
            gps_enabled: Some(true),
            chassis_number: Some("MA3EHKD17A1234567".to_string()),
            engine_number: Some("K12MN1234567".to_string()),
        },
        VehicleRecord {
            registration_number: Some("KA-03-EF-9012".to_string()),
            rc_expiry: in_days(700),
            insurance_expiry: in_days(4),
            permit_expiry: in_days(60),
            puc_expiry: in_days(21),
            fitness_expiry: None,
            driver: Some(DriverAssignment::named("Imran Sheikh")),
            gps_enabled: Some(true),
            chassis_number: Some("MA3FJEB1S00123456".to_string()),
            engine_number: Some("D13A9876543".to_string()),
        },
        VehicleRecord {
            registration_number: Some("MH-12-GH-3456".to_string()),
            rc_expiry: in_days(300),
            insurance_expiry: in_days(-16),
            permit_expiry: None,
            puc_expiry: in_days(76),
            fitness_expiry: in_days(-15),
            driver: None,
            gps_enabled: Some(false),
            chassis_number: Some("MAT448162L2B12345".to_string()),
            engine_number: None,
        },
    ]
}

fn render_fleet_report(
    report: &FleetComplianceReport,
    vehicles: &[VehicleRecord],
    list_documents: bool,
) {
    println!(
        "Evaluated {} vehicles on {}: average compliance {}%",
        report.vehicle_count, report.today, report.average_percentage
    );

    println!("\nGrade distribution");
    for entry in &report.grade_distribution {
        println!(
            "- {} ({}): {} vehicles",
            entry.grade.letter(),
            entry.grade_label,
            entry.vehicles
        );
    }

    let documents = &report.documents;
    println!(
        "\nDocuments: {} tracked, {} need attention ({} expired, {} critical, {} warning), {} missing",
        documents.total,
        documents.needs_attention,
        documents.expired,
        documents.critical,
        documents.warning,
        documents.missing
    );

    if report.urgent_documents.is_empty() {
        println!("\nUrgent documents: none");
    } else {
        println!("\nUrgent documents");
        for urgent in &report.urgent_documents {
            println!(
                "- [{}] {} {}: {}",
                urgent.status.tier_label,
                urgent.registration_number,
                urgent.status.label,
                urgent.status.message
            );
        }
    }

    println!("\nVehicle scorecards");
    for card in &report.scorecards {
        let record = vehicles
            .iter()
            .find(|candidate| candidate.display_name() == card.registration_number);
        render_scorecard(card, record, report.today, list_documents);
    }
}

fn render_scorecard(
    card: &VehicleScorecard,
    record: Option<&VehicleRecord>,
    today: NaiveDate,
    list_documents: bool,
) {
    let result = &card.result;
    println!(
        "\n{}: {}/{} ({}%) grade {} {}",
        card.registration_number,
        result.score,
        result.max_score,
        result.percentage,
        result.grade.letter(),
        result.grade_label
    );
    println!("  {}", result.summary);

    for issue in &result.issues {
        if let Some(detail) = &issue.issue {
            println!(
                "  - [{}] {} ({} pts): {}",
                issue.category.label(),
                issue.item,
                issue.max_points,
                detail
            );
        }
    }

    if let (true, Some(record)) = (list_documents, record) {
        let mut statuses = document_statuses(record, today);
        sort_by_urgency(&mut statuses);
        for status in statuses {
            let expiry = status
                .formatted_date
                .as_deref()
                .unwrap_or("not on file");
            println!(
                "    {} | {} | {} | {}",
                status.label, status.tier_label, expiry, status.message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_compliance::fleet::Grade;

    #[test]
    fn sample_fleet_spans_grades() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        let report = FleetComplianceReport::build(&sample_fleet(today), today);

        let grades: Vec<Grade> = report
            .scorecards
            .iter()
            .map(|card| card.result.grade)
            .collect();
        assert_eq!(grades, vec![Grade::A, Grade::C, Grade::D]);
        assert_eq!(report.urgent_documents.len(), 4);
    }

    #[test]
    fn demo_runs_with_a_fixed_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        run_demo(DemoArgs { today: Some(today) }).expect("demo completes");
    }

    #[test]
    fn fleet_report_surfaces_missing_roster() {
        let args = FleetReportArgs {
            roster: PathBuf::from("./no-such-roster.csv"),
            today: None,
            vehicle: None,
            list_documents: false,
        };

        match run_fleet_report(args) {
            Err(AppError::Roster(_)) => {}
            other => panic!("expected roster error, got {other:?}"),
        }
    }
}
