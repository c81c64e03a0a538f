use cribsense::application::services::prompt_catalog::instruction_template;
use cribsense::domain::Locale;

const SCHEMA_FIELDS: [&str; 5] = ["is_baby_cry", "cause", "confidence", "actions", "message"];

#[test]
fn given_default_locale_when_selecting_then_returns_english_template() {
    let template = instruction_template(Locale::Us);

    assert!(template.contains("baby crying"));
    assert!(!template.contains("Bahasa Indonesia"));
}

#[test]
fn given_indonesian_locale_when_selecting_then_returns_indonesian_template() {
    let template = instruction_template(Locale::Id);

    assert!(template.contains("bayi menangis"));
    assert!(template.contains("Bahasa Indonesia"));
}

#[test]
fn given_any_locale_when_selecting_then_template_names_every_schema_field() {
    for locale in [Locale::Us, Locale::Id] {
        let template = instruction_template(locale);
        for field in SCHEMA_FIELDS {
            assert!(
                template.contains(field),
                "template for {} is missing field {}",
                locale,
                field
            );
        }
    }
}

#[test]
fn given_unrecognized_region_when_parsing_then_selection_uses_default_template() {
    let locale = Locale::parse(Some("JP"));

    assert_eq!(instruction_template(locale), instruction_template(Locale::Us));
}
