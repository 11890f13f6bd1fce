use pod_layout::*;

#[test]
fn test_single_heading() {
    let chapters = split_into_chapters("Chapter 1\n\nHello world.");
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, "Chapter 1");
    assert_eq!(chapters[0].content, "Hello world.");
}

#[test]
fn test_no_heading_yields_one_chapter() {
    let chapters = split_into_chapters("Just some prose.\nMore prose on a second line.");
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, "Chapter 1");
    assert_eq!(
        chapters[0].content,
        "Just some prose.\nMore prose on a second line."
    );
}

#[test]
fn test_blank_text_yields_nothing() {
    assert!(split_into_chapters("").is_empty());
    assert!(split_into_chapters(" \n\n\t\n").is_empty());
}

#[test]
fn test_consecutive_headings_keep_empty_chapter() {
    let chapters = split_into_chapters("Chapter 1\nChapter 2\nText of two.");
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].title, "Chapter 1");
    assert_eq!(chapters[0].content, "");
    assert_eq!(chapters[1].title, "Chapter 2");
    assert_eq!(chapters[1].content, "Text of two.");
}

#[test]
fn test_text_before_first_heading() {
    let chapters = split_into_chapters("Opening words.\n\nPrologue\nIn the beginning.");
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].title, "Chapter 1");
    assert_eq!(chapters[0].content, "Opening words.");
    assert_eq!(chapters[1].title, "Prologue");
    assert_eq!(chapters[1].content, "In the beginning.");
}

#[test]
fn test_markdown_headings() {
    let chapters = split_into_chapters("# The Road\nFirst.\n\n## The River\nSecond.");
    let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["The Road", "The River"]);
}

#[test]
fn test_overlong_heading_moves_text_to_body() {
    let chapters = split_into_chapters(
        "Chapter 1: The Beginning. It was a cold morning when the letters finally arrived\nNext line.",
    );
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, "Chapter 1: The Beginning");
    assert!(
        chapters[0]
            .content
            .starts_with(". It was a cold morning when the letters finally arrived")
    );
    assert!(chapters[0].content.ends_with("Next line."));
}

#[test]
fn test_chapter_ids_are_unique() {
    let chapters = split_into_chapters("Chapter 1\nA\nChapter 2\nB\nChapter 3\nC");
    assert_eq!(chapters.len(), 3);
    assert_ne!(chapters[0].id, chapters[1].id);
    assert_ne!(chapters[1].id, chapters[2].id);
    assert_ne!(chapters[0].id, chapters[2].id);
}

#[test]
fn test_segmenting_twice_gives_same_ids() {
    let text = "Chapter 1\nA\nChapter 2\nB";
    let first = split_into_chapters(text);
    let second = split_into_chapters(text);
    assert_eq!(first, second);
    assert_eq!(first[1].id, "chapter-2");
}

#[test]
fn test_join_then_split_preserves_chapters() {
    let original = split_into_chapters("Chapter 1\n\nAlpha.\n\nChapter 2\n\nBeta.\n\nGamma.");
    let text = chapters_to_text(&original);
    assert_eq!(text, "Chapter 1\n\nAlpha.\n\n\nChapter 2\n\nBeta.\n\nGamma.");

    let again = split_into_chapters(&text);
    assert_eq!(again.len(), original.len());
    for (a, b) in original.iter().zip(&again) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.content, b.content);
    }
}

#[test]
fn test_rename_to_prefix_keeps_tail() {
    let mut chapter = Chapter::new("The Long Road Home", "Body.");
    rename_chapter(&mut chapter, "The Long Road");
    assert_eq!(chapter.title, "The Long Road");
    assert_eq!(chapter.content, "Home\n\nBody.");
}

#[test]
fn test_rename_to_unrelated_title() {
    let mut chapter = Chapter::new("Chapter 1", "Body.");
    rename_chapter(&mut chapter, "Departure");
    assert_eq!(chapter.title, "Departure");
    assert_eq!(chapter.content, "Body.");
}

#[test]
fn test_rename_updates_rich_content() {
    let mut chapter = Chapter::new("The Long Road Home", "Body.");
    chapter.rich_content = Some("<p>Body.</p>".to_string());
    rename_chapter(&mut chapter, "The Long Road");
    assert_eq!(chapter.rich_content.as_deref(), Some("<p>Home</p><p>Body.</p>"));
}

#[test]
fn test_merge_with_previous() {
    let mut chapters = vec![Chapter::new("One", "First."), Chapter::new("Two", "Second.")];
    let first_id = chapters[0].id.clone();

    merge_with_previous(&mut chapters, 1).unwrap();

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].id, first_id);
    assert_eq!(chapters[0].title, "One");
    assert_eq!(chapters[0].content, "First.\n\nTwo\n\nSecond.");
}

#[test]
fn test_merge_first_chapter_is_rejected() {
    let mut chapters = vec![Chapter::new("One", "First.")];
    match merge_with_previous(&mut chapters, 0) {
        Err(BookError::Config(msg)) => assert!(msg.contains("Cannot merge")),
        other => panic!("Expected Config error, got {other:?}"),
    }
    assert!(merge_with_previous(&mut chapters, 5).is_err());
    assert!(merge_with_previous(&mut chapters, usize::MAX).is_err());
    assert_eq!(chapters.len(), 1);
}

#[test]
fn test_apply_rich_edit() {
    let mut chapter = Chapter::new("One", "First.");
    let id = chapter.id.clone();
    let style = ChapterStyle {
        heading_alignment: HeadingAlignment::Center,
    };

    apply_rich_edit(
        &mut chapter,
        "Uno",
        "Primero.",
        Some("<p>Primero.</p>".to_string()),
        Some(style),
    );

    assert_eq!(chapter.id, id);
    assert_eq!(chapter.title, "Uno");
    assert_eq!(chapter.content, "Primero.");
    assert_eq!(chapter.style, Some(style));
}
