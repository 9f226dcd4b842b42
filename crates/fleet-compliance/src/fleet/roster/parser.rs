use super::super::domain::{DriverAssignment, ExpiryValue, VehicleRecord};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RosterRow {
    pub(crate) line: u64,
    pub(crate) record: VehicleRecord,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RosterRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut rows = Vec::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let raw: RawRosterRow = record.deserialize(Some(&headers))?;
        rows.push(RosterRow {
            line,
            record: raw.into_record(),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRosterRow {
    #[serde(
        rename = "Registration Number",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    registration_number: Option<String>,
    #[serde(rename = "RC Expiry", default, deserialize_with = "empty_string_as_none")]
    rc_expiry: Option<String>,
    #[serde(
        rename = "Insurance Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    insurance_expiry: Option<String>,
    #[serde(
        rename = "Permit Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    permit_expiry: Option<String>,
    #[serde(rename = "PUC Expiry", default, deserialize_with = "empty_string_as_none")]
    puc_expiry: Option<String>,
    #[serde(
        rename = "Fitness Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    fitness_expiry: Option<String>,
    #[serde(
        rename = "Driver Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    driver_name: Option<String>,
    #[serde(
        rename = "GPS Enabled",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    gps_enabled: Option<String>,
    #[serde(
        rename = "Chassis Number",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    chassis_number: Option<String>,
    #[serde(
        rename = "Engine Number",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    engine_number: Option<String>,
}

impl RawRosterRow {
    fn into_record(self) -> VehicleRecord {
        VehicleRecord {
            registration_number: self.registration_number,
            rc_expiry: self.rc_expiry.map(ExpiryValue::Text),
            insurance_expiry: self.insurance_expiry.map(ExpiryValue::Text),
            permit_expiry: self.permit_expiry.map(ExpiryValue::Text),
            puc_expiry: self.puc_expiry.map(ExpiryValue::Text),
            fitness_expiry: self.fitness_expiry.map(ExpiryValue::Text),
            driver: self.driver_name.map(DriverAssignment::named),
            gps_enabled: self.gps_enabled.as_deref().map(parse_flag),
            chassis_number: self.chassis_number,
            engine_number: self.engine_number,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1"
    )
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
pub(crate) fn parse_flag_for_tests(value: &str) -> bool {
    parse_flag(value)
}
