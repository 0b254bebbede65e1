//! MercadoLibre regional sites and argument resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported MercadoLibre sites with their regional API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Site {
    #[default]
    Mla,
    Mlb,
    Mlm,
}

impl Site {
    /// Returns the country served by this site.
    pub fn country(&self) -> &'static str {
        match self {
            Site::Mla => "Argentina",
            Site::Mlb => "Brazil",
            Site::Mlm => "Mexico",
        }
    }

    /// Returns the currency code for this site.
    pub fn currency(&self) -> &'static str {
        match self {
            Site::Mla => "ARS",
            Site::Mlb => "BRL",
            Site::Mlm => "MXN",
        }
    }

    /// Returns all supported sites.
    pub fn all() -> &'static [Site] {
        &[Site::Mla, Site::Mlb, Site::Mlm]
    }

    /// Resolves a raw argument to a site, falling back to the default.
    ///
    /// Returns the resolved site and whether the fallback was used. An
    /// absent argument and an unrecognized one both take the fallback
    /// path; printing a notice is left to the caller.
    pub fn resolve(raw: Option<&str>) -> (Site, bool) {
        match raw.and_then(|s| s.parse::<Site>().ok()) {
            Some(site) => (site, false),
            None => (Site::default(), true),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Site::Mla => "MLA",
            Site::Mlb => "MLB",
            Site::Mlm => "MLM",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Site {
    type Err = SiteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mla" | "argentina" => Ok(Site::Mla),
            "mlb" | "brazil" => Ok(Site::Mlb),
            "mlm" | "mexico" => Ok(Site::Mlm),
            _ => Err(SiteParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteParseError(String);

impl fmt::Display for SiteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown site '{}'. Valid sites: MLA, MLB, MLM", self.0)
    }
}

impl std::error::Error for SiteParseError {}
