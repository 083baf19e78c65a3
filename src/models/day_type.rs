//! Day type policy for leave requests.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The policy governing how requested units convert to calendar spans and charges.
///
/// # Example
///
/// ```
/// use leave_engine::models::DayType;
///
/// let day_type: DayType = "Half Day".parse().unwrap();
/// assert_eq!(day_type, DayType::HalfDay);
/// assert_eq!(day_type.to_string(), "half_day");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// One unit is one working day; weekends and holidays inside the span are free.
    FullDay,
    /// One unit is one calendar day charged at half a day; no skipping.
    HalfDay,
    /// Rotational leave; each unit first skips any run of non-working days.
    OnOff,
}

impl DayType {
    /// All day types, in declaration order.
    pub const ALL: [DayType; 3] = [DayType::FullDay, DayType::HalfDay, DayType::OnOff];

    /// The amount charged against the leave balance for one consumed unit.
    ///
    /// ```
    /// use leave_engine::models::DayType;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(DayType::FullDay.charge_per_unit(), Decimal::ONE);
    /// assert_eq!(DayType::HalfDay.charge_per_unit(), Decimal::new(5, 1));
    /// ```
    pub fn charge_per_unit(self) -> Decimal {
        match self {
            DayType::FullDay | DayType::OnOff => Decimal::ONE,
            DayType::HalfDay => Decimal::new(5, 1),
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::FullDay => write!(f, "full_day"),
            DayType::HalfDay => write!(f, "half_day"),
            DayType::OnOff => write!(f, "on_off"),
        }
    }
}

impl FromStr for DayType {
    type Err = EngineError;

    /// Parses serialized names as well as form labels such as `"Full Day"` or `"On/Off"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-' | '/'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "fullday" | "full" => Ok(DayType::FullDay),
            "halfday" | "half" => Ok(DayType::HalfDay),
            "onoff" => Ok(DayType::OnOff),
            _ => Err(EngineError::InvalidDayType {
                value: s.to_string(),
            }),
        }
    }
}
