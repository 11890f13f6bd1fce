use pod_layout::*;

fn words(count: usize) -> String {
    vec!["word"; count].join(" ")
}

#[test]
fn test_estimate_blank_text() {
    let settings = Settings::default();
    assert_eq!(estimate_page_count("", &settings, &Margins::uniform(0.5)), 0);
    assert_eq!(estimate_page_count("  \n\n ", &settings, &Margins::uniform(0.5)), 0);
}

#[test]
fn test_estimate_rounds_to_even() {
    let settings = Settings::default();
    assert_eq!(estimate_page_count("Hello", &settings, &Margins::uniform(0.5)), 2);
}

#[test]
fn test_estimate_600_words() {
    // 2999 characters on 68-character lines: 45 lines, two pages
    let settings = Settings::default();
    let pages = estimate_page_count(&words(600), &settings, &Margins::uniform(0.5));
    assert_eq!(pages, 2);
}

#[test]
fn test_estimate_counts_blank_lines() {
    let settings = Settings::default();
    // 70 blank-separated one-word lines: 70 + 69 lines over 34-line pages
    let text = vec!["word"; 70].join("\n\n");
    assert_eq!(estimate_page_count(&text, &settings, &Margins::uniform(0.5)), 6);
}

#[test]
fn test_estimate_degenerate_geometry() {
    let settings = Settings::default();
    assert_eq!(estimate_page_count("Hello", &settings, &Margins::uniform(3.0)), 1);
}

#[test]
fn test_estimate_grows_with_font_size() {
    let text = words(20_000);
    let small = Settings {
        font_size: 9.0,
        ..Settings::default()
    };
    let large = Settings {
        font_size: 14.0,
        ..Settings::default()
    };
    let margins = Margins::uniform(0.5);
    assert!(
        estimate_page_count(&text, &small, &margins) < estimate_page_count(&text, &large, &margins)
    );
}

#[test]
fn test_text_block_size() {
    let margins = Margins {
        top: 0.75,
        bottom: 0.75,
        inside: 0.625,
        outside: 0.5,
    };
    let block = text_block_size(TrimSize::W6H9, &margins);
    assert_eq!(block.width, 4.875);
    assert_eq!(block.height, 7.5);
}

#[test]
fn test_bootstrap_short_manuscript_uses_minimum_page_count() {
    let settings = Settings::default();
    let result = bootstrap_layout("Chapter 1\n\nHello world.", &settings);
    assert_eq!(result.margins, Margins::uniform(0.5));
    assert_eq!(result.page_count, 2);
}

#[test]
fn test_bootstrap_long_manuscript_widens_gutter() {
    let settings = Settings::default();
    // About 6000 lines at 34 per page: 178 pages, gutter step 151..=300
    let text = "x\n".repeat(6000);
    let result = bootstrap_layout(&text, &settings);
    assert_eq!(result.margins.inside, 0.625);
    assert_eq!(result.margins.outside, 0.5);
    assert_eq!(result.page_count, 178);
}

#[test]
fn test_bootstrap_is_reproducible() {
    let settings = Settings::instant();
    let text = words(40_000);
    assert_eq!(bootstrap_layout(&text, &settings), bootstrap_layout(&text, &settings));
}

#[test]
fn test_page_sides() {
    assert_eq!(PageSide::of(1), PageSide::Recto);
    assert_eq!(PageSide::of(2), PageSide::Verso);

    let margins = Margins {
        top: 0.5,
        bottom: 0.5,
        inside: 0.75,
        outside: 0.5,
    };
    assert_eq!(margins.horizontal_for(PageSide::Recto), (0.75, 0.5));
    assert_eq!(margins.horizontal_for(PageSide::Verso), (0.5, 0.75));
}

#[test]
fn test_trim_size_lookup() {
    assert_eq!(TrimSize::from_dimensions("6x9"), Some(TrimSize::W6H9));
    assert_eq!(TrimSize::from_dimensions("6.14 x 9.21"), Some(TrimSize::W614H921));
    assert_eq!(TrimSize::from_dimensions("8.5X11"), Some(TrimSize::W85H11));
    assert_eq!(TrimSize::from_dimensions("4x4"), None);
    assert_eq!(TrimSize::from_dimensions("big"), None);
    assert_eq!(TrimSize::ALL.len(), 14);
}
