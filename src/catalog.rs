//! The rental catalog lists every tool that can be checked out together
//! with its daily rate and the kinds of days the rate applies to.
//! The catalog is built once at startup and only ever read afterwards.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type related to catalog lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("No tool with code '{0}' is listed in the rental catalog.")]
    UnknownTool(String),
}

/// Kind of tool offered for rental
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolType {
    Chainsaw,
    Ladder,
    Jackhammer,
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chainsaw => write!(f, "Chainsaw"),
            Self::Ladder => write!(f, "Ladder"),
            Self::Jackhammer => write!(f, "Jackhammer"),
        }
    }
}

/// Manufacturer of a tool offered for rental
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolBrand {
    Stihl,
    Werner,
    DeWalt,
    Ridgid,
}

impl fmt::Display for ToolBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stihl => write!(f, "Stihl"),
            Self::Werner => write!(f, "Werner"),
            Self::DeWalt => write!(f, "DeWalt"),
            Self::Ridgid => write!(f, "Ridgid"),
        }
    }
}

/// A single catalog entry. The three charge flags select which days of a
/// rental period are billed, see the charge day counting rules.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub code: String,
    pub tool_type: ToolType,
    pub brand: ToolBrand,
    /// Daily rental rate in USD
    pub daily_rate: f64,
    pub charges_weekday: bool,
    pub charges_weekend: bool,
    pub charges_holiday: bool,
}

impl ToolDefinition {
    pub fn new(
        code: &str,
        tool_type: ToolType,
        brand: ToolBrand,
        daily_rate: f64,
        charges_weekday: bool,
        charges_weekend: bool,
        charges_holiday: bool,
    ) -> ToolDefinition {
        ToolDefinition {
            code: code.to_uppercase(),
            tool_type,
            brand,
            daily_rate,
            charges_weekday,
            charges_weekend,
            charges_holiday,
        }
    }
}

/// Read-only mapping from tool code to tool definition.
/// Codes are stored upper case, lookup is case-insensitive.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: BTreeMap<String, ToolDefinition>,
}

impl ToolCatalog {
    /// Build a catalog from an explicit list of definitions
    pub fn from_tools(tools: Vec<ToolDefinition>) -> ToolCatalog {
        let mut map = BTreeMap::new();
        for tool in tools {
            map.insert(tool.code.clone(), tool);
        }
        ToolCatalog { tools: map }
    }

    /// The fixed table of tools currently offered for rental
    pub fn standard() -> ToolCatalog {
        Self::from_tools(vec![
            // Chainsaws charge on weekdays and holidays
            ToolDefinition::new("CHNS", ToolType::Chainsaw, ToolBrand::Stihl, 1.49, true, false, true),
            // Ladders charge on weekdays and weekends
            ToolDefinition::new("LADW", ToolType::Ladder, ToolBrand::Werner, 1.99, true, true, false),
            // Jackhammers charge on weekdays only
            ToolDefinition::new("JAKD", ToolType::Jackhammer, ToolBrand::DeWalt, 2.99, true, false, false),
            ToolDefinition::new("JAKR", ToolType::Jackhammer, ToolBrand::Ridgid, 2.99, true, false, false),
        ])
    }

    pub fn lookup(&self, code: &str) -> Result<&ToolDefinition, CatalogError> {
        let code = code.to_uppercase();
        self.tools
            .get(&code)
            .ok_or(CatalogError::UnknownTool(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = ToolCatalog::standard();
        let tool = catalog.lookup("chns").unwrap();
        assert_eq!(tool.code, "CHNS");
        assert_eq!(tool.tool_type, ToolType::Chainsaw);
        assert_eq!(tool.brand, ToolBrand::Stihl);
        let same_tool = catalog.lookup("ChNs").unwrap();
        assert_eq!(tool, same_tool);
    }

    #[test]
    fn standard_catalog_entries() {
        let catalog = ToolCatalog::standard();

        let chainsaw = catalog.lookup("CHNS").unwrap();
        assert_eq!(chainsaw.daily_rate, 1.49);
        assert!(chainsaw.charges_weekday);
        assert!(!chainsaw.charges_weekend);
        assert!(chainsaw.charges_holiday);

        let ladder = catalog.lookup("LADW").unwrap();
        assert_eq!(ladder.daily_rate, 1.99);
        assert!(ladder.charges_weekday);
        assert!(ladder.charges_weekend);
        assert!(!ladder.charges_holiday);

        for code in &["JAKD", "JAKR"] {
            let jackhammer = catalog.lookup(code).unwrap();
            assert_eq!(jackhammer.tool_type, ToolType::Jackhammer);
            assert_eq!(jackhammer.daily_rate, 2.99);
            assert!(jackhammer.charges_weekday);
            assert!(!jackhammer.charges_weekend);
            assert!(!jackhammer.charges_holiday);
        }
        assert_eq!(catalog.lookup("JAKD").unwrap().brand, ToolBrand::DeWalt);
        assert_eq!(catalog.lookup("JAKR").unwrap().brand, ToolBrand::Ridgid);
    }

    #[test]
    fn unknown_code_fails() {
        let catalog = ToolCatalog::standard();
        let err = catalog.lookup("INVL").unwrap_err();
        assert_eq!(err, CatalogError::UnknownTool("INVL".to_string()));
    }

    #[test]
    fn tool_definition_json_round_trip() {
        let tool = ToolDefinition::new("CHNS", ToolType::Chainsaw, ToolBrand::Stihl, 1.49, true, false, true);
        let json = serde_json::to_string(&tool).unwrap();
        let parsed: ToolDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(tool, parsed);
    }
}
