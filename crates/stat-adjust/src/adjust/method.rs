//! The closed set of adjustment methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adjust::error::AdjustError;

/// Multiple-comparison adjustment method.
///
/// `Holm`, `Bonferroni`, `Hochberg`, and `Hommel` control the family-wise
/// error rate; `Bh` and `By` control the false discovery rate; `None`
/// passes p-values through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Holm,
    Bonferroni,
    Hochberg,
    Hommel,
    /// Benjamini-Hochberg.
    #[serde(alias = "BH")]
    Bh,
    /// Benjamini-Yekutieli.
    #[serde(alias = "BY")]
    By,
    None,
}

impl Method {
    /// All supported methods, in registry order.
    ///
    /// Exposed so higher-level APIs can enumerate or validate the accepted
    /// set before forwarding a choice to [`adjust`](crate::adjust).
    pub const ALL: [Method; 7] = [
        Method::Holm,
        Method::Bonferroni,
        Method::Hochberg,
        Method::Hommel,
        Method::Bh,
        Method::By,
        Method::None,
    ];

    /// Stable string tag for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Holm => "holm",
            Method::Bonferroni => "bonferroni",
            Method::Hochberg => "hochberg",
            Method::Hommel => "hommel",
            Method::Bh => "bh",
            Method::By => "by",
            Method::None => "none",
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Holm
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = AdjustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holm" => Ok(Method::Holm),
            "bonferroni" => Ok(Method::Bonferroni),
            "hochberg" => Ok(Method::Hochberg),
            "hommel" => Ok(Method::Hommel),
            "bh" | "BH" => Ok(Method::Bh),
            "by" | "BY" => Ok(Method::By),
            "none" => Ok(Method::None),
            other => Err(AdjustError::UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Registry ──────────────────────────────────────────────────

    #[test]
    fn registry_has_seven_methods() {
        assert_eq!(Method::ALL.len(), 7);
    }

    #[test]
    fn registry_order_is_stable() {
        assert_eq!(Method::ALL[0], Method::Holm);
        assert_eq!(Method::ALL[6], Method::None);
    }

    #[test]
    fn registry_tags_are_unique() {
        for (i, a) in Method::ALL.iter().enumerate() {
            for b in &Method::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn default_is_holm() {
        assert_eq!(Method::default(), Method::Holm);
    }

    // ── Parsing and display ───────────────────────────────────────

    #[test]
    fn parse_round_trips_every_tag() {
        for method in Method::ALL {
            let parsed: Method = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn parse_accepts_uppercase_fdr_tags() {
        assert_eq!("BH".parse::<Method>().unwrap(), Method::Bh);
        assert_eq!("BY".parse::<Method>().unwrap(), Method::By);
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let err = "sidak".parse::<Method>().unwrap_err();
        assert_eq!(err, AdjustError::UnknownMethod("sidak".to_string()));
        assert!(err.to_string().contains("unsupported adjustment method"));
    }

    #[test]
    fn parse_is_case_sensitive_for_fwer_tags() {
        assert!("Holm".parse::<Method>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Method::Bh.to_string(), "bh");
        assert_eq!(Method::Bonferroni.to_string(), "bonferroni");
    }

    // ── Serde ─────────────────────────────────────────────────────

    #[test]
    fn serde_round_trip() {
        for method in Method::ALL {
            let json = serde_json::to_string(&method).unwrap();
            let back: Method = serde_json::from_str(&json).unwrap();
            assert_eq!(back, method);
        }
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        assert_eq!(serde_json::to_string(&Method::Bh).unwrap(), "\"bh\"");
        assert_eq!(serde_json::to_string(&Method::Hommel).unwrap(), "\"hommel\"");
    }

    #[test]
    fn serde_accepts_uppercase_aliases() {
        let bh: Method = serde_json::from_str("\"BH\"").unwrap();
        assert_eq!(bh, Method::Bh);
        let by: Method = serde_json::from_str("\"BY\"").unwrap();
        assert_eq!(by, Method::By);
    }
}
