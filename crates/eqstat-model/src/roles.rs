//! Semantic column roles and synonym-based resolution.
//!
//! Input datasets name their columns inconsistently ("Flowrate", "Flow Rate",
//! "FLOW"). Each semantic role carries a fixed, ordered list of accepted
//! names; resolution takes the first case-insensitive match in table column
//! order. A role with no match stays absent and downstream computations
//! degrade gracefully.

use crate::Table;

/// Abstract field of an equipment dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    EquipmentType,
    Flow,
    Pressure,
    Temperature,
    Name,
    Timestamp,
}

impl SemanticRole {
    pub const ALL: [Self; 6] = [
        Self::EquipmentType,
        Self::Flow,
        Self::Pressure,
        Self::Temperature,
        Self::Name,
        Self::Timestamp,
    ];

    /// Accepted column names for this role, in preference order.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::EquipmentType => &["Type", "Equipment Type", "Category", "Equipment_Type"],
            Self::Flow => &["Flowrate", "Flow", "Flow Rate", "Flow_Rate"],
            Self::Pressure => &["Pressure", "Press", "Bar"],
            Self::Temperature => &["Temperature", "Temp", "Deg C", "DegC"],
            Self::Name => &["Equipment_Name", "Name", "Equipment Name", "Equipment"],
            Self::Timestamp => &["Timestamp", "Date", "Time", "DateTime"],
        }
    }

    /// Short label used in reports and the CLI role listing.
    pub fn label(self) -> &'static str {
        match self {
            Self::EquipmentType => "type",
            Self::Flow => "flow",
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
            Self::Name => "name",
            Self::Timestamp => "timestamp",
        }
    }

    /// Resolves this role against a table's columns.
    ///
    /// Scans columns in table order and returns the first whose name matches
    /// any synonym case-insensitively.
    pub fn resolve(self, table: &Table) -> Option<String> {
        table
            .columns
            .iter()
            .find(|column| {
                self.synonyms()
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(column))
            })
            .cloned()
    }
}

/// Concrete column names a table resolved for each semantic role.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedColumns {
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub flow: Option<String>,
    pub pressure: Option<String>,
    pub temperature: Option<String>,
    pub name: Option<String>,
    pub timestamp: Option<String>,
}

impl ResolvedColumns {
    /// Resolves every role against the table.
    pub fn resolve(table: &Table) -> Self {
        Self {
            equipment_type: SemanticRole::EquipmentType.resolve(table),
            flow: SemanticRole::Flow.resolve(table),
            pressure: SemanticRole::Pressure.resolve(table),
            temperature: SemanticRole::Temperature.resolve(table),
            name: SemanticRole::Name.resolve(table),
            timestamp: SemanticRole::Timestamp.resolve(table),
        }
    }

    pub fn get(&self, role: SemanticRole) -> Option<&str> {
        let column = match role {
            SemanticRole::EquipmentType => &self.equipment_type,
            SemanticRole::Flow => &self.flow,
            SemanticRole::Pressure => &self.pressure,
            SemanticRole::Temperature => &self.temperature,
            SemanticRole::Name => &self.name,
            SemanticRole::Timestamp => &self.timestamp,
        };
        column.as_deref()
    }

    /// Resolved numeric parameter columns in flow, pressure, temperature order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        [&self.flow, &self.pressure, &self.temperature]
            .into_iter()
            .filter_map(|column| column.as_deref())
            .collect()
    }
}
