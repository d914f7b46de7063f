use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::constants::ALL_SITES;

/// Value of the site dropdown: every site, or one named launch site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(site) => site,
        }
    }

    /// `All` matches every site; `Site` matches by exact name.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => site == launch_site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_round_trips_through_json() {
        let json = serde_json::to_string(&SiteSelection::All).unwrap();
        assert_eq!(json, "\"ALL\"");
        let back: SiteSelection = serde_json::from_str("\"CCAFS LC-40\"").unwrap();
        assert_eq!(back, SiteSelection::Site("CCAFS LC-40".to_string()));
    }

    #[test]
    fn test_matches() {
        assert!(SiteSelection::All.matches("anything"));
        assert!(SiteSelection::from("KSC LC-39A").matches("KSC LC-39A"));
        assert!(!SiteSelection::from("KSC LC-39A").matches("VAFB SLC-4E"));
    }
}
