use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Regulatory documents tracked per vehicle, in rubric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Insurance,
    RegistrationCertificate,
    Permit,
    PollutionCertificate,
    FitnessCertificate,
}

impl DocumentKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Insurance,
            Self::RegistrationCertificate,
            Self::Permit,
            Self::PollutionCertificate,
            Self::FitnessCertificate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Insurance => "Insurance",
            Self::RegistrationCertificate => "Registration Certificate",
            Self::Permit => "Permit",
            Self::PollutionCertificate => "Pollution Certificate",
            Self::FitnessCertificate => "Fitness Certificate",
        }
    }
}

/// Raw expiry value as supplied by the data layer.
///
/// JSON numbers are epoch milliseconds. Text is only ever read as a calendar
/// date or timestamp, so digit-only text such as `"20261231"` never becomes a
/// 1970 instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpiryValue {
    Text(String),
    EpochMillis(i64),
}

impl ExpiryValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(raw) => Some(raw),
            Self::EpochMillis(_) => None,
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(raw) if raw.trim().is_empty())
    }
}

impl From<String> for ExpiryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ExpiryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for ExpiryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(raw) => f.write_str(raw),
            Self::EpochMillis(millis) => write!(f, "{millis}"),
        }
    }
}

/// Driver currently assigned to a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverAssignment {
    #[serde(
        default,
        alias = "driver_name",
        alias = "driverName",
        deserialize_with = "lenient_string"
    )]
    pub name: Option<String>,
}

impl DriverAssignment {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Read-only projection of a vehicle as delivered by the fleet data layer.
///
/// Every field is optional. Values of the wrong JSON type are read as absent
/// so that a single bad field never rejects the whole record; the scorer then
/// treats the absent signal as a failed check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(
        default,
        alias = "registrationNumber",
        deserialize_with = "lenient_string"
    )]
    pub registration_number: Option<String>,
    #[serde(default, alias = "rcExpiry", deserialize_with = "lenient_date")]
    pub rc_expiry: Option<ExpiryValue>,
    #[serde(default, alias = "insuranceExpiry", deserialize_with = "lenient_date")]
    pub insurance_expiry: Option<ExpiryValue>,
    #[serde(default, alias = "permitExpiry", deserialize_with = "lenient_date")]
    pub permit_expiry: Option<ExpiryValue>,
    #[serde(default, alias = "pucExpiry", deserialize_with = "lenient_date")]
    pub puc_expiry: Option<ExpiryValue>,
    #[serde(default, alias = "fitnessExpiry", deserialize_with = "lenient_date")]
    pub fitness_expiry: Option<ExpiryValue>,
    #[serde(default, deserialize_with = "lenient_driver")]
    pub driver: Option<DriverAssignment>,
    #[serde(default, alias = "gpsEnabled", deserialize_with = "lenient_flag")]
    pub gps_enabled: Option<bool>,
    #[serde(default, alias = "chassisNumber", deserialize_with = "lenient_string")]
    pub chassis_number: Option<String>,
    #[serde(default, alias = "engineNumber", deserialize_with = "lenient_string")]
    pub engine_number: Option<String>,
}

impl VehicleRecord {
    /// Raw expiry value supplied for a document, if any.
    pub fn expiry_of(&self, kind: DocumentKind) -> Option<&ExpiryValue> {
        let raw = match kind {
            DocumentKind::Insurance => &self.insurance_expiry,
            DocumentKind::RegistrationCertificate => &self.rc_expiry,
            DocumentKind::Permit => &self.permit_expiry,
            DocumentKind::PollutionCertificate => &self.puc_expiry,
            DocumentKind::FitnessCertificate => &self.fitness_expiry,
        };
        raw.as_ref().filter(|value| !value.is_blank())
    }

    pub fn display_name(&self) -> &str {
        self.registration_number
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or("unregistered")
    }

    pub fn assigned_driver(&self) -> Option<&str> {
        self.driver
            .as_ref()
            .and_then(|driver| driver.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn gps_tracking_enabled(&self) -> bool {
        self.gps_enabled == Some(true)
    }

    pub fn has_identifiers(&self) -> bool {
        is_present(self.chassis_number.as_deref()) && is_present(self.engine_number.as_deref())
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.map(|raw| !raw.trim().is_empty()).unwrap_or(false)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) if !raw.trim().is_empty() => Some(raw),
        _ => None,
    })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<ExpiryValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) if !raw.trim().is_empty() => Some(ExpiryValue::Text(raw)),
        Some(Value::Number(number)) => number.as_i64().map(ExpiryValue::EpochMillis),
        _ => None,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => Some(flag),
        _ => None,
    })
}

fn lenient_driver<'de, D>(deserializer: D) -> Result<Option<DriverAssignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(object @ Value::Object(_)) => serde_json::from_value(object).ok(),
        _ => None,
    })
}
