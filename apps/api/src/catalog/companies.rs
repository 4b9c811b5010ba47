//! Company recognition tiers. Compiled in; order matters for first-hit resolution.

use serde::Serialize;

use crate::matching::{similarity_ratio, MatchKind};

/// Similarity needed to accept a company name without containment.
const COMPANY_SIMILARITY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompanyTier {
    #[serde(rename = "tier_1")]
    Tier1,
    #[serde(rename = "tier_2")]
    Tier2,
    #[serde(rename = "tier_3")]
    Tier3,
    #[serde(rename = "tier_4")]
    Tier4,
}

pub struct CompanyTierInfo {
    pub tier: CompanyTier,
    pub label: &'static str,
    pub value: f64,
    pub companies: &'static [&'static str],
}

/// Assumed tier for companies nobody has heard of.
pub const DEFAULT_COMPANY_TIER: CompanyTier = CompanyTier::Tier3;

pub const COMPANY_TIERS: &[CompanyTierInfo] = &[
    CompanyTierInfo {
        tier: CompanyTier::Tier1,
        label: "FAANG / Top Tech Giants",
        value: 10.0,
        companies: &[
            "google", "meta", "facebook", "amazon", "apple", "microsoft", "netflix", "nvidia",
            "tesla", "openai", "deepmind", "anthropic", "salesforce", "adobe", "oracle", "ibm",
            "intel", "qualcomm", "samsung", "sony", "uber", "airbnb", "twitter", "x corp",
            "linkedin", "spotify", "stripe", "palantir", "snowflake", "databricks", "coinbase",
            "bytedance", "tiktok",
        ],
    },
    CompanyTierInfo {
        tier: CompanyTier::Tier2,
        label: "Top Companies / Unicorns",
        value: 8.0,
        companies: &[
            "accenture", "deloitte", "mckinsey", "bcg", "pwc", "ernst & young", "kpmg",
            "capgemini", "infosys", "tcs", "wipro", "hcl", "cognizant", "tech mahindra",
            "mindtree", "mphasis", "vmware", "servicenow", "workday", "atlassian", "twilio",
            "cloudflare", "hashicorp", "elastic", "mongodb inc", "shopify", "pinterest", "snap",
            "discord", "github", "gitlab", "vercel", "figma", "notion", "canva", "razorpay",
            "paytm", "phonepe", "cred", "swiggy", "zomato", "flipkart", "ola", "byjus",
            "unacademy", "meesho", "dream11", "groww", "zerodha", "freshworks", "zoho", "postman",
            "browserstack", "druva", "samsung", "lg", "bosch", "siemens", "ge", "jpmorgan",
            "goldman sachs", "morgan stanley", "citi", "barclays", "deutsche bank",
            "credit suisse", "hsbc", "visa", "mastercard", "paypal", "square", "robinhood",
        ],
    },
    CompanyTierInfo {
        tier: CompanyTier::Tier3,
        label: "Established Companies / Mid-tier",
        value: 6.0,
        companies: &[
            "startups", "mid-size companies", "regional companies", "consulting firms",
            "digital agencies", "it services",
        ],
    },
    CompanyTierInfo {
        tier: CompanyTier::Tier4,
        label: "Startups / Small Companies",
        value: 4.0,
        companies: &[],
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyMatch {
    pub tier: CompanyTier,
    pub tier_label: &'static str,
    pub tier_value: f64,
    pub matched_by: MatchKind,
}

fn tier_info(tier: CompanyTier) -> &'static CompanyTierInfo {
    // COMPANY_TIERS lists every variant.
    COMPANY_TIERS
        .iter()
        .find(|t| t.tier == tier)
        .unwrap_or(&COMPANY_TIERS[2])
}

impl CompanyMatch {
    fn new(info: &'static CompanyTierInfo, matched_by: MatchKind) -> Self {
        CompanyMatch {
            tier: info.tier,
            tier_label: info.label,
            tier_value: info.value,
            matched_by,
        }
    }
}

/// Resolves a company name to its recognition tier.
///
/// Walks the tiers in order and returns on the first known company that either
/// contains or is contained by the input, or is at least 0.8 similar to it.
/// Blank and unknown names are assumed mid-tier.
pub fn identify_company(name: &str) -> CompanyMatch {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return CompanyMatch::new(tier_info(DEFAULT_COMPANY_TIER), MatchKind::Default);
    }

    for info in COMPANY_TIERS {
        for &known in info.companies {
            if known == needle {
                return CompanyMatch::new(info, MatchKind::Exact);
            }
            if known.contains(needle.as_str()) || needle.contains(known) {
                return CompanyMatch::new(info, MatchKind::Fuzzy);
            }
            if similarity_ratio(&needle, known) >= COMPANY_SIMILARITY_THRESHOLD {
                return CompanyMatch::new(info, MatchKind::Fuzzy);
            }
        }
    }

    CompanyMatch::new(tier_info(DEFAULT_COMPANY_TIER), MatchKind::Default)
}
