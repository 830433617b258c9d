/// Build the fixed-schema extraction request for one chunk of a participant
/// list.
pub fn build_extraction_prompt(chunk_text: &str) -> String {
    format!(
        r#"Extract every participant from the following raw text of a conference participant list.

INSTRUCTIONS:
1. Each participant belongs to a country delegation and has a name, a title, a job description and an agency/ministry
2. Output ONLY valid JSON, nothing else
3. Use the exact schema below

SCHEMA:
{{
  "participants": [
    {{"participant_country": "country delegation (e.g. Brazil)", "participant_name": "name of the participant", "participant_prefix": "title of the participant (e.g. H.E., Mr.)", "participant_job": "job description (e.g. Chief of Staff, Ambassador of Albania in France)", "participant_agency_ministry": "agency or ministry of the delegate (e.g. Ministry of Water Resources and Environment)"}}
  ]
}}

RULES:
- participant_prefix must correctly contain the title of the person, e.g. "Mr., Ms., Mrs., Dr., Prof., H.E."
- participant_name must not contain any title or prefix
- Keep participants in the order they appear in the text
- Use an empty string for information the text does not give
- Output ONLY the JSON object, no markdown, no explanations

TEXT:
{}

JSON OUTPUT:"#,
        chunk_text
    )
}

pub fn build_retry_prompt(invalid_json: &str) -> String {
    format!(
        r#"The following JSON is invalid:

{}

Fix this JSON. Output only valid JSON with no markdown formatting, no code blocks, no explanations. Just the raw JSON object."#,
        invalid_json
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_chunk_and_all_five_fields() {
        let prompt = build_extraction_prompt("Mr. John Doe, Ambassador");

        assert!(prompt.contains("Mr. John Doe, Ambassador"));
        for field in [
            "participant_country",
            "participant_name",
            "participant_prefix",
            "participant_job",
            "participant_agency_ministry",
        ] {
            assert!(prompt.contains(field), "missing field {field}");
        }
    }
}
