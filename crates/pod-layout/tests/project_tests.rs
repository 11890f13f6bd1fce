use pod_layout::*;
use tempfile::tempdir;

const MANUSCRIPT: &str = "Chapter 1\n\nIt was calm.\n\nChapter 2\n\nThen it was not.";

#[test]
fn test_from_manuscript() {
    let project = BookProject::from_manuscript(MANUSCRIPT, "quiet-sea", "Jane Doe", 2026);

    // The first line is a heading, so the file name is used
    assert_eq!(project.title, "quiet-sea");
    assert_eq!(project.chapters.len(), 2);
    assert_eq!(project.settings, Settings::instant());
    assert!(project.front_matter.copyright_page.content.contains("2026 Jane Doe"));
    assert!(!project.back_matter.about_author.enabled);
}

#[test]
fn test_from_manuscript_detects_title() {
    let text = format!("The Quiet Sea\n\n{MANUSCRIPT}");
    let project = BookProject::from_manuscript(&text, "file", "", 2026);
    assert_eq!(project.title, "The Quiet Sea");
    // Text before the first heading is kept as a chapter
    assert_eq!(project.chapters.len(), 3);
}

#[test]
fn test_typeset_pipeline() {
    let project = BookProject::from_manuscript(MANUSCRIPT, "Quiet Sea", "Jane Doe", 2026);
    let typeset = project.typeset();

    assert_eq!(typeset.margins, Margins::uniform(0.5));
    assert_eq!(typeset.estimated_pages, 2);
    // Title page and copyright page count towards the validated total
    assert_eq!(typeset.validated_pages, 4);
    assert_eq!(typeset.sections.len(), 4);
    assert_eq!(typeset.pages.len(), 4);
    assert_eq!(typeset.statistics.total_pages, 4);
    assert!(
        typeset
            .issues
            .iter()
            .any(|i| i.is_error() && i.category == IssueCategory::PageCount)
    );
}

#[test]
fn test_typeset_with_explicit_margins() {
    let mut project = BookProject::from_manuscript(MANUSCRIPT, "Quiet Sea", "Jane Doe", 2026);
    project.margins = Some(Margins {
        top: 0.1,
        bottom: 0.5,
        inside: 0.5,
        outside: 0.5,
    });
    let typeset = project.typeset();

    assert_eq!(typeset.margins.top, 0.1);
    assert!(
        typeset
            .issues
            .iter()
            .any(|i| i.category == IssueCategory::Margins && i.message.starts_with("Top margin"))
    );
}

#[test]
fn test_typeset_segments_raw_text_when_no_chapters() {
    let project = BookProject {
        raw_text: MANUSCRIPT.to_string(),
        ..Default::default()
    };
    assert_eq!(project.effective_chapters().len(), 2);
    let typeset = project.typeset();
    let chapters = typeset
        .sections
        .iter()
        .filter(|s| s.kind == SectionKind::Chapter)
        .count();
    assert_eq!(chapters, 2);
}

#[test]
fn test_typeset_is_deterministic() {
    let project = BookProject::from_manuscript(MANUSCRIPT, "Quiet Sea", "Jane Doe", 2026);
    assert_eq!(project.typeset(), project.typeset());
}

#[test]
fn test_raw_text_project_is_stable_across_runs() {
    let mut project = BookProject {
        raw_text: "Chapter 1\n\nHello world.\n\nChapter 2\n\nMore text.".to_string(),
        ..Default::default()
    };
    assert_eq!(project.typeset(), project.typeset());

    let second = project.effective_chapters()[1].id.clone();
    project.directives.blank_before.insert(second.clone());
    let typeset = project.typeset();

    assert_eq!(typeset.statistics.blank_pages, 1);
    assert_eq!(first_page_of_section(&typeset.pages, &second), Some(5));
    assert!(typeset.pages[3].is_blank_page);
}

#[test]
fn test_matter_pages_count_towards_validation() {
    let words = vec!["word"; 7000].join(" ");
    let mut project = BookProject::from_manuscript(&words, "Long", "Jane Doe", 2026);
    let body_only = project.typeset();

    project.front_matter.dedication.enabled = true;
    project.back_matter.about_author.enabled = true;
    project.back_matter.acknowledgments.enabled = true;
    let with_matter = project.typeset();

    assert_eq!(with_matter.estimated_pages, body_only.estimated_pages);
    assert_eq!(with_matter.validated_pages, body_only.validated_pages + 3);
    assert_eq!(
        with_matter.validated_pages,
        with_matter.estimated_pages + 5
    );
}

#[test]
fn test_blank_copyright_page_gets_generated_notice() {
    let project = BookProject {
        author: "Jane Doe".to_string(),
        year: 2026,
        raw_text: MANUSCRIPT.to_string(),
        ..Default::default()
    };
    assert!(project.front_matter.copyright_page.content.is_empty());

    let typeset = project.typeset();
    let copyright = &typeset.sections[1];
    assert_eq!(copyright.kind, SectionKind::CopyrightPage);
    assert!(copyright.content.starts_with("Copyright \u{00A9} 2026 Jane Doe"));
    assert!(typeset.pages[1].lines.iter().any(|l| !l.is_blank()));
}

#[test]
fn test_custom_copyright_text_is_kept() {
    let mut project = BookProject::from_manuscript(MANUSCRIPT, "Quiet Sea", "Jane Doe", 2026);
    project.front_matter.copyright_page.content = "Public domain".to_string();
    let typeset = project.typeset();
    assert_eq!(typeset.sections[1].content, "Public domain");
}

#[tokio::test]
async fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");

    let mut project = BookProject::from_manuscript(MANUSCRIPT, "Quiet Sea", "Jane Doe", 2026);
    project.directives.chapter_start_side = ChapterStartSide::Right;
    project.directives.blank_before.insert(project.chapters[1].id.clone());
    project.settings.trim_size = TrimSize::W55H85;

    project.save(&path).await.unwrap();
    let loaded = BookProject::load(&path).await.unwrap();

    assert_eq!(loaded, project);
}

#[tokio::test]
async fn test_load_partial_project_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    tokio::fs::write(&path, r#"{"title": "Sketch", "settings": {"trimSize": "5x8"}}"#)
        .await
        .unwrap();

    let loaded = BookProject::load(&path).await.unwrap();
    assert_eq!(loaded.title, "Sketch");
    assert_eq!(loaded.settings.trim_size, TrimSize::W5H8);
    assert_eq!(loaded.settings.font_size, 11.0);
    assert!(loaded.chapters.is_empty());
}

#[tokio::test]
async fn test_load_invalid_project() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    tokio::fs::write(&path, "not json").await.unwrap();

    match BookProject::load(&path).await {
        Err(BookError::Config(msg)) => assert!(msg.contains("Failed to parse project")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}
