//! Prompts for case extraction and bail drafting

use crate::model::CaseExtraction;

/// System prompt for structured extraction
pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"You are a legal data extraction AI. Extract information from FIR descriptions.
Return ONLY valid JSON with these exact fields:
{
  "accusedName": "full name with father's name if available",
  "age": "age if mentioned, otherwise null",
  "address": "residential address if mentioned",
  "ipcSections": ["list", "of", "IPC", "sections"],
  "location": "location of incident",
  "policeStation": "police station name",
  "offenseType": "type of offense",
  "firNumber": "FIR number if mentioned",
  "firDate": "FIR date if mentioned",
  "complainant": "complainant name if mentioned",
  "propertyValue": "value of stolen/damaged property if mentioned",
  "evidence": "evidence mentioned (CCTV, witnesses, etc.)",
  "arrestStatus": "arrest status if mentioned"
}
Return ONLY the JSON object, no markdown, no explanations. Use null for fields not found in the text."#;

/// System prompt for bail drafting
pub const DRAFTING_SYSTEM_PROMPT: &str = r#"You are a legal drafting assistant. Generate formal bail applications.
Use professional legal language and proper formatting."#;

/// Build the user prompt for extraction
pub fn build_extraction_prompt(case_description: &str) -> String {
    format!(
        r#"Extract information from this FIR:

{}

Return only JSON with all available fields."#,
        case_description
    )
}

/// Build the user prompt for drafting
pub fn build_drafting_prompt(extraction: &CaseExtraction) -> String {
    let mut prompt = format!(
        r#"Generate a formal bail application under Section 439 CrPC for the Court of Sessions Judge, Delhi.

Case Details:
- Accused Name: {}
- IPC Sections: {}
- Location: {}
- Police Station: {}
- Offense Type: {}
"#,
        extraction.accused_name,
        extraction.ipc_sections.join(", "),
        extraction.location,
        extraction.police_station,
        extraction.offense_type,
    );

    let optional = [
        ("Age", &extraction.age),
        ("Address", &extraction.address),
        ("FIR Number", &extraction.fir_number),
        ("FIR Date", &extraction.fir_date),
        ("Complainant", &extraction.complainant),
        ("Property Value", &extraction.property_value),
        ("Evidence", &extraction.evidence),
        ("Arrest Status", &extraction.arrest_status),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            prompt.push_str(&format!("- {}: {}\n", label, value));
        }
    }

    prompt.push_str("\nCite statutory sections in the form \"Section <number> IPC\". Format the application professionally.");
    prompt
}

/// Template used when the provider cannot produce a draft
pub fn fallback_draft(extraction: &CaseExtraction) -> String {
    format!(
        r#"IN THE COURT OF SESSIONS JUDGE, DELHI
Bail Application under Section 439 CrPC

Accused: {name}

[Draft generation failed - using fallback template]

The present bail application is filed on behalf of {name} in connection with FIR registered at {station} under Section {sections} IPC.

The alleged incident occurred at {location}.

PRAYER:
It is respectfully prayed that this Hon'ble Court grant bail to the accused in the interest of justice."#,
        name = extraction.accused_name,
        station = extraction.police_station,
        sections = extraction.ipc_sections.join(", "),
        location = extraction.location,
    )
}
