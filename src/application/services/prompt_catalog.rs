use crate::domain::Locale;

/// Instruction templates keyed by locale. Each template fixes the exact
/// output schema the model must honor and the language of its string
/// values. Adding a locale means adding a template here and a tag in
/// [`Locale`].
const TEMPLATE_US: &str = r#"Analyze this audio and determine if it contains a baby crying.

Return only a JSON object with this structure:
{
  "is_baby_cry": boolean,
  "cause": string,
  "confidence": number (0-100),
  "actions": string[],
  "message": string
}
"#;

const TEMPLATE_ID: &str = r#"Analisis audio ini dan tentukan apakah berisi suara bayi menangis.

Kembalikan hanya objek JSON dengan struktur:
{
  "is_baby_cry": boolean,
  "cause": string,
  "confidence": number (0-100),
  "actions": string[],
  "message": string
}

Gunakan Bahasa Indonesia untuk semua nilai string.
"#;

/// Selects the instruction template for a locale. Unrecognized locales
/// already collapsed to the default during parsing, so this is total.
pub fn instruction_template(locale: Locale) -> &'static str {
    match locale {
        Locale::Us => TEMPLATE_US,
        Locale::Id => TEMPLATE_ID,
    }
}
