use acervo_catalog::{Category, NewBook, TIMESTAMP_FORMAT, ValidationError};

#[test]
fn category_parse_accepts_labels_and_names() {
    assert_eq!(Category::parse("Ficção"), Some(Category::Fiction));
    assert_eq!(Category::parse("fiction"), Some(Category::Fiction));
    assert_eq!(Category::parse("  RELIGIÃO "), Some(Category::Religion));
    assert_eq!(Category::parse("Técnico"), Some(Category::Technical));
    assert_eq!(Category::parse("poetry"), None);
}

#[test]
fn unknown_stored_category_falls_back_to_other() {
    assert_eq!(Category::from_str_loose("Poesia"), Category::Other);
    assert_eq!(Category::from_str_loose("Biografia"), Category::Biography);
}

#[test]
fn every_category_round_trips_through_its_label() {
    for c in Category::ALL {
        assert_eq!(Category::parse(c.label()), Some(c));
        assert_eq!(c.to_string(), c.label());
    }
}

#[test]
fn category_serializes_as_label() {
    let json = serde_json::to_string(&Category::Politics).unwrap();
    assert_eq!(json, "\"Política\"");
    let back: Category = serde_json::from_str("\"Ficção\"").unwrap();
    assert_eq!(back, Category::Fiction);
}

#[test]
fn validate_requires_title_and_author() {
    let ok = NewBook::new("O Alquimista", "Paulo Coelho", Category::Fiction);
    assert!(ok.validate().is_ok());

    let no_title = NewBook::new("  ", "Paulo Coelho", Category::Fiction);
    assert_eq!(no_title.validate(), Err(ValidationError::MissingField("title")));

    let no_author = NewBook::new("O Alquimista", "", Category::Fiction);
    assert_eq!(no_author.validate(), Err(ValidationError::MissingField("author")));
}

#[test]
fn normalized_trims_and_drops_blank_optionals() {
    let input = NewBook::new(" Dom Casmurro ", " Machado de Assis", Category::Fiction)
        .with_isbn("   ")
        .with_publisher(" Ática ")
        .with_cover(Vec::new());
    let n = input.normalized();
    assert_eq!(n.title, "Dom Casmurro");
    assert_eq!(n.author, "Machado de Assis");
    assert_eq!(n.isbn, None);
    assert_eq!(n.publisher.as_deref(), Some("Ática"));
    assert_eq!(n.cover_image, None);
}

#[test]
fn timestamp_format_is_day_month_year() {
    let dt = chrono::NaiveDate::from_ymd_opt(2026, 3, 7)
        .unwrap()
        .and_hms_opt(9, 5, 0)
        .unwrap();
    assert_eq!(dt.format(TIMESTAMP_FORMAT).to_string(), "07/03/2026 09:05");
}
