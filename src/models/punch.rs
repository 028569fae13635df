use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    /// Accepts the codes seen in ERP extracts: in/out, E/S, entrada/salida.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" | "e" | "entrada" => Some(Self::In),
            "out" | "s" | "salida" => Some(Self::Out),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::In => "in",
            PunchKind::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(PunchKind::In),
            "out" => Some(PunchKind::Out),
            _ => None,
        }
    }
}

/// Raw punch row in the CSV extract (kind still unparsed).
#[derive(Debug, Clone, Deserialize)]
pub struct PunchRow {
    pub employee_id: String,
    pub date: String,
    pub time: String,
    pub kind: String,
}

/// A clock-in / clock-out event. Date and time are the raw ERP strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Punch {
    pub employee_id: String,
    pub date: String,
    pub time: String,
    pub kind: PunchKind,
}

impl Punch {
    pub fn new(employee_id: &str, date: &str, time: &str, kind: PunchKind) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            kind,
        }
    }
}
