//! Reference registry of recognized statutory sections
//!
//! The registry is built once at startup and shared read-only across requests.
//! Membership is an exact, case-sensitive string match on the canonical code.

use crate::model::{Severity, StatuteInfo};
use crate::model::Severity::{Critical, High, Low, Medium};
use crate::service::citations::canonicalize;

struct CatalogueEntry {
    section: &'static str,
    name: &'static str,
    severity: Severity,
    category: &'static str,
    punishment: &'static str,
    bailable: bool,
    related: &'static [&'static str],
}

const fn entry(
    section: &'static str,
    name: &'static str,
    severity: Severity,
    category: &'static str,
    punishment: &'static str,
    bailable: bool,
    related: &'static [&'static str],
) -> CatalogueEntry {
    CatalogueEntry {
        section,
        name,
        severity,
        category,
        punishment,
        bailable,
        related,
    }
}

/// Built-in Indian Penal Code catalogue
#[rustfmt::skip]
const IPC_CATALOGUE: &[CatalogueEntry] = &[
    // Offences against the State
    entry("121", "Waging war against Government of India", Critical, "Against State", "Death or Life imprisonment", false, &["121A", "122", "123"]),
    entry("124A", "Sedition", High, "Against State", "Life imprisonment or 3 years", false, &["121", "153A"]),
    // Murder and culpable homicide
    entry("302", "Murder", Critical, "Against Body", "Death or Life imprisonment", false, &["300", "304", "307"]),
    entry("304", "Culpable homicide not amounting to murder", High, "Against Body", "Life imprisonment or 10 years", false, &["299", "302", "304A"]),
    entry("304A", "Causing death by negligence", Medium, "Against Body", "2 years or fine", true, &["304", "337", "338"]),
    entry("307", "Attempt to murder", High, "Against Body", "10 years or Life imprisonment", false, &["302", "308", "326"]),
    entry("308", "Attempt to commit culpable homicide", High, "Against Body", "3 years or fine", true, &["304", "307"]),
    // Hurt
    entry("323", "Voluntarily causing hurt", Low, "Against Body", "1 year or fine", true, &["324", "325", "352"]),
    entry("324", "Voluntarily causing hurt by dangerous weapons", Medium, "Against Body", "3 years or fine", true, &["323", "326", "327"]),
    entry("325", "Voluntarily causing grievous hurt", Medium, "Against Body", "7 years and fine", false, &["320", "326", "338"]),
    entry("326", "Voluntarily causing grievous hurt by dangerous weapons", High, "Against Body", "Life imprisonment or 10 years", false, &["325", "307", "327"]),
    // Restraint, confinement and outraging modesty
    entry("342", "Wrongful confinement", Low, "Against Body", "1 year or fine", true, &["340", "343", "344"]),
    entry("354", "Assault or criminal force to woman with intent to outrage her modesty", High, "Against Women", "2 years or fine", false, &["354A", "354B", "509"]),
    entry("354A", "Sexual harassment", High, "Against Women", "3 years or fine", false, &["354", "354B", "509"]),
    entry("354B", "Assault or use of criminal force to woman with intent to disrobe", High, "Against Women", "3-7 years and fine", false, &["354", "354A", "376"]),
    // Sexual offences
    entry("375", "Rape", Critical, "Sexual Offenses", "7 years to Life imprisonment", false, &["376", "376A", "376B"]),
    entry("376", "Punishment for rape", Critical, "Sexual Offenses", "10 years to Life imprisonment", false, &["375", "376A", "376D"]),
    entry("376A", "Punishment for causing death or persistent vegetative state of victim", Critical, "Sexual Offenses", "20 years to Life or Death", false, &["376", "376D"]),
    entry("376D", "Gang rape", Critical, "Sexual Offenses", "20 years to Life imprisonment", false, &["376", "376A"]),
    // Theft
    entry("378", "Theft", Low, "Property", "3 years or fine", true, &["379", "380", "381"]),
    entry("379", "Punishment for theft", Low, "Property", "3 years or fine", true, &["378", "380", "381"]),
    entry("380", "Theft in dwelling house", Medium, "Property", "7 years and fine", false, &["379", "381", "457"]),
    entry("381", "Theft by clerk or servant", Medium, "Property", "7 years and fine", false, &["379", "380", "408"]),
    // Robbery and dacoity
    entry("392", "Robbery", High, "Property", "10 years and fine", false, &["390", "393", "394"]),
    entry("395", "Dacoity", High, "Property", "Life imprisonment or 10 years", false, &["391", "396", "397"]),
    entry("396", "Dacoity with murder", Critical, "Property", "Death or Life imprisonment", false, &["302", "395", "397"]),
    // Breach of trust, cheating, forgery
    entry("405", "Criminal breach of trust", Medium, "Property", "3 years or fine", true, &["406", "408", "409"]),
    entry("406", "Punishment for criminal breach of trust", Medium, "Property", "3 years or fine", true, &["405", "408", "420"]),
    entry("408", "Criminal breach of trust by clerk or servant", Medium, "Property", "7 years and fine", false, &["405", "406", "409"]),
    entry("409", "Criminal breach of trust by public servant", High, "Property", "Life imprisonment or 10 years", false, &["405", "408", "477A"]),
    entry("420", "Cheating and dishonestly inducing delivery of property", Medium, "Property", "7 years and fine", false, &["415", "417", "419"]),
    entry("467", "Forgery of valuable security, will, etc.", High, "Property", "Life imprisonment or 10 years", false, &["463", "468", "471"]),
    entry("468", "Forgery for purpose of cheating", Medium, "Property", "7 years and fine", false, &["463", "467", "471"]),
    // Marriage and cruelty
    entry("493", "Cohabitation caused by man deceitfully inducing belief of lawful marriage", Medium, "Against Women", "10 years and fine", false, &["494", "495", "498A"]),
    entry("494", "Marrying again during lifetime of husband or wife", Medium, "Against Women", "7 years and fine", false, &["493", "495"]),
    entry("498A", "Husband or relative of husband subjecting woman to cruelty", High, "Against Women", "3 years and fine", false, &["304B", "306", "494"]),
    entry("304B", "Dowry death", Critical, "Against Women", "7 years to Life imprisonment", false, &["498A", "302", "306"]),
    // Defamation
    entry("499", "Defamation", Low, "Defamation", "2 years or fine", true, &["500", "501"]),
    entry("500", "Punishment for defamation", Low, "Defamation", "2 years or fine", true, &["499", "501"]),
    // Insult and intimidation
    entry("504", "Intentional insult with intent to provoke breach of peace", Low, "Public Tranquility", "2 years or fine", true, &["503", "506", "509"]),
    entry("506", "Criminal intimidation", Low, "Public Tranquility", "2 years or fine", true, &["503", "504", "507"]),
    entry("509", "Word, gesture or act intended to insult modesty of woman", Medium, "Against Women", "3 years and fine", true, &["354", "354A", "504"]),
];

impl CatalogueEntry {
    fn to_info(&self) -> StatuteInfo {
        StatuteInfo {
            section: self.section.to_string(),
            name: self.name.to_string(),
            severity: self.severity,
            category: self.category.to_string(),
            punishment: self.punishment.to_string(),
            bailable: self.bailable,
            related: self.related.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Immutable, ordered set of recognized citation codes
#[derive(Debug, Clone)]
pub struct ReferenceRegistry {
    sections: Vec<RegistrySection>,
}

#[derive(Debug, Clone)]
struct RegistrySection {
    code: String,
    info: Option<StatuteInfo>,
}

impl ReferenceRegistry {
    /// Registry backed by the full built-in catalogue
    pub fn builtin() -> Self {
        let sections = IPC_CATALOGUE
            .iter()
            .map(|e| RegistrySection {
                code: e.section.to_string(),
                info: Some(e.to_info()),
            })
            .collect();

        Self { sections }
    }

    /// Registry restricted to the given codes, in the given order.
    ///
    /// Codes are canonicalized like extracted citations; blanks and repeats are
    /// dropped. Codes with a catalogue entry keep its metadata, others are members
    /// without details.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sections: Vec<RegistrySection> = Vec::new();

        for code in codes {
            let code = canonicalize(code.as_ref());
            if code.is_empty() || sections.iter().any(|s| s.code == code) {
                continue;
            }

            let info = IPC_CATALOGUE
                .iter()
                .find(|e| e.section == code)
                .map(CatalogueEntry::to_info);

            sections.push(RegistrySection { code, info });
        }

        Self { sections }
    }

    /// Exact membership test
    pub fn contains(&self, citation: &str) -> bool {
        self.sections.iter().any(|s| s.code == citation)
    }

    /// Catalogue details for a member, if known
    pub fn get(&self, citation: &str) -> Option<&StatuteInfo> {
        self.sections
            .iter()
            .find(|s| s.code == citation)
            .and_then(|s| s.info.as_ref())
    }

    /// Member codes in registry order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.code.as_str())
    }

    /// Catalogue entries of members that have one, in registry order
    pub fn entries(&self) -> impl Iterator<Item = &StatuteInfo> {
        self.sections.iter().filter_map(|s| s.info.as_ref())
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for info in self.entries() {
            if !categories.contains(&info.category) {
                categories.push(info.category.clone());
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for ReferenceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
