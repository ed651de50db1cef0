//! Journal record and brand list types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TeatrackError;

/// Sweetness level, stored under its Chinese label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SugarLevel {
    #[serde(rename = "全糖")]
    Standard,
    #[serde(rename = "七分糖")]
    Seven,
    #[default]
    #[serde(rename = "五分糖")]
    Five,
    #[serde(rename = "三分糖")]
    Three,
    #[serde(rename = "不加糖")]
    Zero,
}

impl SugarLevel {
    pub const ALL: [SugarLevel; 5] = [
        Self::Standard,
        Self::Seven,
        Self::Five,
        Self::Three,
        Self::Zero,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "全糖",
            Self::Seven => "七分糖",
            Self::Five => "五分糖",
            Self::Three => "三分糖",
            Self::Zero => "不加糖",
        }
    }
}

impl fmt::Display for SugarLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SugarLevel {
    type Err = TeatrackError;

    /// Accepts the stored label or an English alias ("full", "70", "half", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(level) = Self::ALL.iter().find(|l| l.label() == s) {
            return Ok(*level);
        }
        match s.to_lowercase().as_str() {
            "full" | "standard" | "100" => Ok(Self::Standard),
            "seven" | "70" => Ok(Self::Seven),
            "five" | "half" | "50" => Ok(Self::Five),
            "three" | "30" => Ok(Self::Three),
            "zero" | "none" | "0" => Ok(Self::Zero),
            _ => Err(TeatrackError::Parse(format!("unknown sugar level: {}", s))),
        }
    }
}

/// Ice / temperature level, stored under its Chinese label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IceLevel {
    #[serde(rename = "正常冰")]
    Regular,
    #[default]
    #[serde(rename = "少冰")]
    Less,
    #[serde(rename = "微冰")]
    Little,
    #[serde(rename = "去冰")]
    None,
    #[serde(rename = "热饮")]
    Hot,
}

impl IceLevel {
    pub const ALL: [IceLevel; 5] = [
        Self::Regular,
        Self::Less,
        Self::Little,
        Self::None,
        Self::Hot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular => "正常冰",
            Self::Less => "少冰",
            Self::Little => "微冰",
            Self::None => "去冰",
            Self::Hot => "热饮",
        }
    }
}

impl fmt::Display for IceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IceLevel {
    type Err = TeatrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(level) = Self::ALL.iter().find(|l| l.label() == s) {
            return Ok(*level);
        }
        match s.to_lowercase().as_str() {
            "regular" | "normal" => Ok(Self::Regular),
            "less" => Ok(Self::Less),
            "little" | "light" => Ok(Self::Little),
            "none" | "no-ice" => Ok(Self::None),
            "hot" => Ok(Self::Hot),
            _ => Err(TeatrackError::Parse(format!("unknown ice level: {}", s))),
        }
    }
}

/// One logged drink purchase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeaRecord {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub price: f64,
    pub date: NaiveDate,
    pub sugar: SugarLevel,
    pub ice: IceLevel,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Milliseconds since epoch; only used to order records sharing a date
    pub created_at: i64,
}

impl TeaRecord {
    /// Note text, treating an empty string as no note
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// One entry in the ordered brand shortcut list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandConfig {
    pub name: String,
    pub visible: bool,
}

impl BrandConfig {
    /// New entry, visible in quick-select
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
        }
    }
}

/// Input for creating or replacing a record (id and timestamp are assigned by the journal)
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub brand: String,
    pub name: String,
    pub price: f64,
    pub date: NaiveDate,
    pub sugar: SugarLevel,
    pub ice: IceLevel,
    pub rating: u8,
    pub note: Option<String>,
}

impl RecordDraft {
    /// Draft prefilled from an existing record, used for partial edits
    pub fn from_record(record: &TeaRecord) -> Self {
        Self {
            brand: record.brand.clone(),
            name: record.name.clone(),
            price: record.price,
            date: record.date,
            sugar: record.sugar,
            ice: record.ice,
            rating: record.rating,
            note: record.note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sugar_parse_label_and_alias() {
        assert_eq!("七分糖".parse::<SugarLevel>().unwrap(), SugarLevel::Seven);
        assert_eq!("half".parse::<SugarLevel>().unwrap(), SugarLevel::Five);
        assert_eq!("FULL".parse::<SugarLevel>().unwrap(), SugarLevel::Standard);
        assert_eq!("0".parse::<SugarLevel>().unwrap(), SugarLevel::Zero);
        assert!("extra".parse::<SugarLevel>().is_err());
    }

    #[test]
    fn test_ice_parse_label_and_alias() {
        assert_eq!("热饮".parse::<IceLevel>().unwrap(), IceLevel::Hot);
        assert_eq!("no-ice".parse::<IceLevel>().unwrap(), IceLevel::None);
        assert!("frozen".parse::<IceLevel>().is_err());
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(SugarLevel::default(), SugarLevel::Five);
        assert_eq!(IceLevel::default(), IceLevel::Less);
    }

    #[test]
    fn test_record_reads_stored_json() {
        let json = r#"{
            "id": "lq2x9k0abc",
            "brand": "喜茶",
            "name": "多肉葡萄",
            "price": 19.5,
            "date": "2024-03-09",
            "sugar": "三分糖",
            "ice": "少冰",
            "rating": 5,
            "note": "",
            "createdAt": 1709971200000
        }"#;
        let record: TeaRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, "lq2x9k0abc");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(record.sugar, SugarLevel::Three);
        assert_eq!(record.ice, IceLevel::Less);
        assert_eq!(record.created_at, 1_709_971_200_000);
        assert_eq!(record.note(), None);
    }

    #[test]
    fn test_record_writes_camel_case_and_labels() {
        let record = TeaRecord {
            id: "a".into(),
            brand: "古茗".into(),
            name: "芋泥波波".into(),
            price: 16.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            sugar: SugarLevel::Zero,
            ice: IceLevel::Hot,
            rating: 3,
            note: None,
            created_at: 42,
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["createdAt"], 42);
        assert_eq!(value["date"], "2024-01-02");
        assert_eq!(value["sugar"], "不加糖");
        assert_eq!(value["ice"], "热饮");
        assert!(value.get("note").is_none());
    }
}
