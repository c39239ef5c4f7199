//! Plan Catalog
//!
//! Static service tiers with fixed or customer-supplied pricing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Service plan tiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Bronze,
    Silver,
    Gold,
    Custom,
}

/// Static catalog record for one plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanDetails {
    /// Display name ("Bronze Plan", ...)
    pub name: &'static str,

    /// One-line pitch shown on pricing cards
    pub summary: &'static str,

    /// Catalog price in USD; zero for the custom plan
    pub base_price: Decimal,

    /// Included features, in display order
    pub features: &'static [&'static str],

    /// Estimated delivery time
    pub delivery: &'static str,

    /// Highlighted as "Most Popular"
    pub popular: bool,

    /// Price comes from customer input instead of the catalog
    pub is_custom: bool,
}

impl Plan {
    /// All catalog entries, in display order
    pub const ALL: [Plan; 4] = [Plan::Bronze, Plan::Silver, Plan::Gold, Plan::Custom];

    /// Plans sold with a fixed catalog price
    pub const FIXED: [Plan; 3] = [Plan::Bronze, Plan::Silver, Plan::Gold];

    /// Short code used in URLs and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            Plan::Bronze => "bronze",
            Plan::Silver => "silver",
            Plan::Gold => "gold",
            Plan::Custom => "custom",
        }
    }

    /// Resolve a plan code from the navigation context. Unknown or missing
    /// codes fall back to the bronze default; this never fails.
    pub fn resolve(code: Option<&str>) -> Plan {
        code.and_then(|c| c.parse().ok()).unwrap_or_default()
    }

    /// Catalog data for this plan
    pub fn details(&self) -> PlanDetails {
        match self {
            Plan::Bronze => PlanDetails {
                name: "Bronze Plan",
                summary: "Perfect for small businesses getting started online",
                base_price: dec!(50),
                features: &[
                    "5-page responsive website",
                    "Basic SEO optimization",
                    "Contact form integration",
                    "1 month support",
                    "Mobile-friendly design",
                    "Social media integration",
                ],
                delivery: "2-3 weeks",
                popular: false,
                is_custom: false,
            },
            Plan::Silver => PlanDetails {
                name: "Silver Plan",
                summary: "Ideal for growing businesses with advanced needs",
                base_price: dec!(100),
                features: &[
                    "10-page responsive website",
                    "Advanced SEO optimization",
                    "E-commerce functionality",
                    "3 months support",
                    "Custom design",
                    "Analytics integration",
                    "Blog setup",
                    "Email marketing setup",
                ],
                delivery: "3-4 weeks",
                popular: true,
                is_custom: false,
            },
            Plan::Gold => PlanDetails {
                name: "Gold Plan",
                summary: "Complete solution for established businesses",
                base_price: dec!(250),
                features: &[
                    "Unlimited pages",
                    "Premium SEO package",
                    "Full e-commerce platform",
                    "6 months support",
                    "Custom development",
                    "Advanced integrations",
                    "Performance optimization",
                    "Digital marketing setup",
                    "Priority support",
                ],
                delivery: "4-6 weeks",
                popular: false,
                is_custom: false,
            },
            Plan::Custom => PlanDetails {
                name: "Custom Plan",
                summary: "Tailored solution priced to your budget",
                base_price: Decimal::ZERO,
                features: &[
                    "Tailored to your needs",
                    "Custom functionality",
                    "Unlimited revisions",
                    "Extended support",
                    "Premium integrations",
                    "Dedicated project manager",
                ],
                delivery: "Varies",
                popular: false,
                is_custom: true,
            },
        }
    }
}

impl std::str::FromStr for Plan {
    type Err = UnknownPlan;

    /// Strict parse used at the server boundary, where an unknown code is
    /// a request error rather than a fallback.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bronze" => Ok(Plan::Bronze),
            "silver" => Ok(Plan::Silver),
            "gold" => Ok(Plan::Gold),
            "custom" => Ok(Plan::Custom),
            _ => Err(UnknownPlan(s.to_string())),
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Plan code that is not in the catalog
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan type: {0}")]
pub struct UnknownPlan(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_codes() {
        assert_eq!(Plan::resolve(Some("silver")), Plan::Silver);
        assert_eq!(Plan::resolve(Some("GOLD")), Plan::Gold);
        assert_eq!(Plan::resolve(Some("custom")), Plan::Custom);
    }

    #[test]
    fn resolve_falls_back_to_bronze() {
        assert_eq!(Plan::resolve(None), Plan::Bronze);
        assert_eq!(Plan::resolve(Some("")), Plan::Bronze);
        assert_eq!(Plan::resolve(Some("platinum")), Plan::Bronze);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert!("platinum".parse::<Plan>().is_err());
        assert_eq!("Silver".parse::<Plan>().unwrap(), Plan::Silver);
    }

    #[test]
    fn catalog_prices() {
        assert_eq!(Plan::Bronze.details().base_price, dec!(50));
        assert_eq!(Plan::Silver.details().base_price, dec!(100));
        assert_eq!(Plan::Gold.details().base_price, dec!(250));
        assert_eq!(Plan::Custom.details().base_price, Decimal::ZERO);
    }

    #[test]
    fn exactly_one_popular_and_one_custom() {
        let popular = Plan::ALL.iter().filter(|p| p.details().popular).count();
        let custom = Plan::ALL.iter().filter(|p| p.details().is_custom).count();
        assert_eq!(popular, 1);
        assert_eq!(custom, 1);
    }

    #[test]
    fn every_plan_has_features_and_delivery() {
        for plan in Plan::ALL {
            let details = plan.details();
            assert!(!details.features.is_empty());
            assert!(!details.delivery.is_empty());
        }
    }
}
