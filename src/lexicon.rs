// Lexicon and reference lists — the immutable configuration of the engine.
//
// Everything the original pipeline carried as hardcoded globals lives here as
// explicit values: the filler-word set, the stem-expansion mapping, the
// summary-topic list, and the canonical keyword vocabulary. The defaults
// reproduce those constants; each can be replaced from a JSON file so tests
// and downstream deployments can substitute small fixtures.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::topics::assign::TopicLabel;

/// Keyword-cleaning configuration: which tokens to drop and which stemmed or
/// abbreviated tokens to expand into full terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Generic, vague keywords removed outright ("use", "study", "data").
    pub filler_words: HashSet<String>,
    /// Stemmed/abbreviated keyword -> full term. Mapping to "" discards the
    /// token entirely.
    pub expansions: HashMap<String, String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            filler_words: FILLER_WORDS.iter().map(|w| w.to_string()).collect(),
            expansions: KEYWORD_EXPANSIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Lexicon {
    /// Load a lexicon from a JSON file and validate it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Cannot read lexicon file {}", path.display()))?;
        let lexicon: Lexicon = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid lexicon JSON in {}", path.display()))?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Check the invariant that keeps keyword cleaning idempotent: a non-empty
    /// expansion target must not itself be an expansion key or a filler word,
    /// otherwise a second cleaning pass would rewrite or drop it.
    pub fn validate(&self) -> Result<()> {
        for (key, target) in &self.expansions {
            if target.is_empty() {
                continue;
            }
            if self.expansions.contains_key(target) {
                anyhow::bail!(
                    "Lexicon expansion '{key}' -> '{target}' maps onto another expansion key; \
                     cleaning would not be idempotent"
                );
            }
            if self.filler_words.contains(target) {
                anyhow::bail!(
                    "Lexicon expansion '{key}' -> '{target}' maps onto a filler word; \
                     cleaning would not be idempotent"
                );
            }
        }
        Ok(())
    }

    pub fn is_filler(&self, token: &str) -> bool {
        self.filler_words.contains(token)
    }

    pub fn expansion(&self, token: &str) -> Option<&str> {
        self.expansions.get(token).map(String::as_str)
    }
}

/// The built-in summary-topic list used by the exclusive assignment pass.
pub fn default_topic_labels() -> Vec<TopicLabel> {
    SUMMARY_TOPICS.iter().map(|name| TopicLabel::plain(*name)).collect()
}

/// The built-in vocabulary keywords are canonicalized against for
/// visualization bucketing.
pub fn default_vocabulary() -> Vec<String> {
    CANONICAL_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Load a topic list from a JSON file: an array of names, or of
/// `{"name": ..., "description": ...}` objects.
pub fn topic_labels_from_file(path: &Path) -> Result<Vec<TopicLabel>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read topics file {}", path.display()))?;
    let entries: Vec<LabelEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid topics JSON in {}", path.display()))?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            LabelEntry::Plain(name) => TopicLabel::plain(name),
            LabelEntry::Full { name, description } => TopicLabel::new(name, description),
        })
        .collect())
}

/// Load a canonical vocabulary from a JSON file (an array of phrases).
pub fn vocabulary_from_file(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read vocabulary file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid vocabulary JSON in {}", path.display()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelEntry {
    Plain(String),
    Full { name: String, description: String },
}

/// Generic, vague keywords that carry no topical signal.
const FILLER_WORDS: &[&str] = &[
    "use", "study", "system", "data", "based", "approach", "result", "analysis", "method",
    "effect",
];

/// Stemmed/abbreviated keywords and their expansions. An empty expansion
/// discards the token. Targets are never keys or filler words — see
/// `Lexicon::validate` (the historical `studi`/`analys` entries expanded onto
/// filler words, so they are discards here).
const KEYWORD_EXPANSIONS: &[(&str, &str)] = &[
    ("genet", "genetics"),
    ("gene_express", "gene expression"),
    ("obes", "obesity"),
    ("mutat", "mutation"),
    ("studi", ""),
    ("activ", "activation"),
    ("makeup", ""),
    ("use", ""),
    ("can", ""),
    ("system", ""),
    ("type", ""),
    ("develop", "development"),
    ("differ", "differentiation"),
    ("transcript", "transcription"),
    ("express", "expression"),
    ("yield", "crop yield"),
    ("fertil", "fertilizer"),
    ("irrig", "irrigation"),
    ("soil_moistur", "soil moisture"),
    ("crop_prod", "crop production"),
    ("resilienc", "resilience"),
    ("adapt", "adaptation"),
    ("sustain", "sustainability"),
    ("increas", "increase"),
    ("reduc", "reduction"),
    ("food_sec", "food security"),
    ("temperatur", "temperature"),
    ("precipit", "precipitation"),
    ("agricultur", "agriculture"),
    ("analys", ""),
    ("maiz", "maize"),
];

/// Predefined summary topics, in assignment-priority order (ties in
/// similarity break toward the earlier entry).
const SUMMARY_TOPICS: &[&str] = &[
    "Parkinson’s Early Detection",
    "Voice-Based Diagnostics",
    "Telehealth Accessibility",
    "Remote Patient Monitoring",
    "Chronic Disease Management",
    "Emergency Care Triage",
    "AI Clinical Decision Support",
    "Medical Imaging Analysis",
    "Cancer Early Screening",
    "Genomic Medicine Applications",
    "Personalized Treatment Planning",
    "Health Data Interoperability",
    "Electronic Medical Records Optimization",
    "Predictive Risk Modeling",
    "Digital Therapeutics",
    "Mobile Health Applications",
    "Wearable Health Tracking",
    "Medication Adherence Tools",
    "Pharmacogenomics",
    "Health Data Privacy",
    "Biometric Authentication in Health",
    "Mental Health Services Access",
    "Behavioral Health Integration",
    "Substance Use Treatment Models",
    "Maternal Health Outcomes",
    "Neonatal Care Quality",
    "Pediatric Health Interventions",
    "Nutrition and Chronic Illness",
    "Obesity Prevention Strategies",
    "Diabetes Prevention Programs",
    "Hypertension Management",
    "Cardiovascular Risk Assessment",
    "Stroke Prevention Strategies",
    "Pain Management Approaches",
    "Palliative and End-of-Life Care",
    "Elderly Care Services",
    "Fall Risk Screening",
    "Rehabilitation Robotics",
    "Surgical Robotics",
    "Infection Prevention and Control",
    "Hospital-Acquired Infections",
    "Antibiotic Resistance Monitoring",
    "Vaccine Coverage Improvement",
    "Public Health Surveillance Systems",
    "Disease Outbreak Forecasting",
    "Air Quality and Health Impacts",
    "Environmental Health Risks",
    "Health Equity and Access",
    "Rural Health System Strengthening",
    "Urban Health Challenges",
    "Health Insurance Coverage",
    "Healthcare Affordability Strategies",
    "Primary Care Strengthening",
    "Care Coordination Models",
    "Integrated Care Pathways",
    "Hospital Readmission Reduction",
    "Patient Engagement Tools",
    "Patient Education Strategies",
    "Preventive Screening Programs",
    "Lifestyle Medicine Interventions",
    "Nutrition Counseling Services",
    "Sleep Health Monitoring",
    "Digital Mental Health",
    "AI in Radiology",
    "Clinical Workflow Automation",
    "Medical Error Reduction",
    "Diagnostic Accuracy Improvement",
    "Bioethics in Healthcare",
    "Health Workforce Training",
    "Nursing Workforce Retention",
    "Provider Burnout Prevention",
    "Healthcare Supply Chain Management",
    "Pharmaceutical Supply Chains",
    "Cold Chain Management",
    "Telepharmacy Services",
    "Mobile Clinics and Outreach",
    "Women’s Health Services",
    "Reproductive Health Access",
    "Sexual Health Education",
    "Infectious Disease Modeling",
    "Health Communication Strategies",
    "Community Health Programs",
    "School-Based Health Services",
    "Global Health Partnerships",
    "Humanitarian Medical Response",
    "Disaster Health Preparedness",
    "Climate Change and Health",
    "Heat-Related Illness Prevention",
    "Vector-Borne Disease Control",
    "Water, Sanitation, and Hygiene",
    "Health Literacy Improvement",
    "Precision Public Health",
    "Big Data in Healthcare",
    "AI-Assisted Drug Discovery",
    "Clinical Trial Optimization",
    "Pharmacovigilance Systems",
    "Long-Term Care Models",
    "Digital Health Policy",
    "Healthcare Quality Metrics",
    "Value-Based Care Models",
    "Home-Based Care Services",
    "Wearable Cardiac Monitoring",
    "Respiratory Health Management",
    "Chronic Pain Digital Management",
    "Neurodegenerative Disease Research",
    "Autoimmune Disease Treatment Innovations",
];

/// Reference phrases arbitrary keywords are bucketed into for charts.
const CANONICAL_KEYWORDS: &[&str] = &[
    "food security",
    "crop yield",
    "soil health",
    "irrigation",
    "climate change",
    "drought resilience",
    "smallholder farming",
    "women in agriculture",
    "sustainable farming",
    "pesticide use",
    "nutrition access",
    "farm financing",
    "livestock management",
    "seed quality",
    "organic agriculture",
    "soil erosion",
    "farming practices",
    "agribusiness growth",
    "water access",
    "plant breeding",
    "GMO crops",
    "gender equity",
    "agricultural policy",
    "technology use",
    "income diversification",
    "agricultural training",
    "education access",
    "market access",
    "land tenure",
    "rural development",
    "crop rotation",
    "precision agriculture",
    "food systems",
    "international trade",
    "carbon emissions",
    "greenhouse gases",
    "rainfall variability",
    "resilient communities",
    "agroecology",
    "carbon sequestration",
    "subsidy reform",
    "price volatility",
    "poverty reduction",
    "malnutrition reduction",
    "crop loss prevention",
    "remote sensing",
    "data-driven farming",
    "climate adaptation",
    "weather forecasting",
    "supply chain resilience",
    "farm labor",
    "access to credit",
    "fertilizer use",
    "post-harvest losses",
    "food distribution systems",
    "income inequality",
    "water management",
    "plant health",
    "youth in farming",
    "land use efficiency",
    "crop diversification",
    "migration patterns",
    "urban-rural linkages",
    "climate resilience",
    "ecosystem services",
    "public health",
    "biodiversity loss",
    "soil monitoring",
    "animal health",
    "technology training",
    "digital agriculture",
    "policy advocacy",
    "financial literacy",
    "value chain development",
    "agriculture education",
    "insurance schemes",
    "food access equity",
    "biofuel production",
    "economic upliftment",
    "skills training",
    "capacity building",
    "crop science",
    "pest management",
    "urban agriculture",
    "market intelligence",
    "investment in ag",
    "women’s empowerment",
    "climate mitigation",
    "crop diseases",
    "pollution control",
    "clean technologies",
    "mobile extension",
    "farm logistics",
    "aquaculture systems",
    "seasonal forecasting",
    "youth migration",
    "trade agreements",
    "nutrition programs",
    "healthcare access",
    "rural banking",
];
