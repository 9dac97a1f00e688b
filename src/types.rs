use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// house category, each governed by its own loan-to-value schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HouseCategory {
    /// resale property
    #[default]
    Secondhand,
    /// first sale from the developer
    New,
}

impl HouseCategory {
    pub const ALL: [HouseCategory; 2] = [HouseCategory::Secondhand, HouseCategory::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            HouseCategory::Secondhand => "secondhand",
            HouseCategory::New => "new",
        }
    }
}

impl fmt::Display for HouseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "secondhand" | "second-hand" | "ikinci-el" | "ikinciel" => Ok(HouseCategory::Secondhand),
            "new" | "yeni" => Ok(HouseCategory::New),
            other => Err(format!("unknown house category: {other}")),
        }
    }
}

/// display language for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Tr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code().to_uppercase())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "tr" | "turkish" | "türkçe" => Ok(Language::Tr),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("secondhand".parse::<HouseCategory>().unwrap(), HouseCategory::Secondhand);
        assert_eq!("Second-Hand".parse::<HouseCategory>().unwrap(), HouseCategory::Secondhand);
        assert_eq!("ikinci-el".parse::<HouseCategory>().unwrap(), HouseCategory::Secondhand);
        assert_eq!("YENI".parse::<HouseCategory>().unwrap(), HouseCategory::New);
        assert!("villa".parse::<HouseCategory>().is_err());
    }

    #[test]
    fn test_defaults_match_form() {
        assert_eq!(HouseCategory::default(), HouseCategory::Secondhand);
        assert_eq!(Language::default(), Language::Tr);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::En.to_string(), "EN");
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&HouseCategory::New).unwrap();
        assert_eq!(json, "\"new\"");
        let back: HouseCategory = serde_json::from_str("\"secondhand\"").unwrap();
        assert_eq!(back, HouseCategory::Secondhand);
    }
}
