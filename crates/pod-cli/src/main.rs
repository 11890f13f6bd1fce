mod logger;

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pod_layout::{BookProject, Severity, TrimSize};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "podt", about = "Print-on-demand book interior tools", version)]
struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the chapters detected in a manuscript
    Chapters {
        /// Manuscript file (.txt, .md or .pdf)
        input: PathBuf,
    },

    /// Create a project file from a manuscript
    Init {
        /// Manuscript file (.txt, .md or .pdf)
        input: PathBuf,

        /// Output project JSON file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        book: BookArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Show margins, page count, validation issues and statistics
    Layout {
        /// Manuscript file or project JSON file
        input: PathBuf,

        #[command(flatten)]
        book: BookArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Exit with an error status when validation reports errors
        #[arg(long)]
        strict: bool,
    },

    /// Print a text preview of the paginated interior
    Preview {
        /// Manuscript file or project JSON file
        input: PathBuf,

        /// Show only this page
        #[arg(short, long)]
        page: Option<usize>,

        #[command(flatten)]
        book: BookArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Write the print-ready interior PDF
    Render {
        /// Manuscript file or project JSON file
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Keep an odd page count instead of appending a blank page
        #[arg(long)]
        no_pad: bool,

        #[command(flatten)]
        book: BookArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[derive(Args)]
struct BookArgs {
    /// Book title (defaults to the first line or the file name)
    #[arg(long)]
    title: Option<String>,

    /// Author name
    #[arg(long)]
    author: Option<String>,
}

#[derive(Args)]
struct SettingsArgs {
    /// Trim size in inches, e.g. 6x9 or 5.5x8.5
    #[arg(long, value_parser = parse_trim_size)]
    trim: Option<TrimSize>,

    /// Body font size in points
    #[arg(long)]
    font_size: Option<f64>,

    /// Line height as a multiple of the font size
    #[arg(long)]
    line_height: Option<f64>,

    /// Font family
    #[arg(long, value_enum)]
    font: Option<FontArg>,

    /// Paper color
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Print with bleed
    #[arg(long)]
    bleed: bool,

    /// Side chapters must start on
    #[arg(long, value_enum)]
    start: Option<StartArg>,

    /// Insert a blank page before this section id (repeatable)
    #[arg(long = "blank-before")]
    blank_before: Vec<String>,

    /// Insert a blank page before chapter N, counting from 1 (repeatable)
    #[arg(long = "blank-before-chapter", value_name = "N")]
    blank_before_chapter: Vec<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FontArg {
    Serif,
    Sans,
    Mono,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    White,
    Cream,
}

#[derive(Clone, Copy, ValueEnum)]
enum StartArg {
    Any,
    Left,
    Right,
}

impl From<FontArg> for pod_layout::FontFamily {
    fn from(arg: FontArg) -> Self {
        match arg {
            FontArg::Serif => Self::Serif,
            FontArg::Sans => Self::SansSerif,
            FontArg::Mono => Self::Monospace,
        }
    }
}

impl From<PaperArg> for pod_layout::PaperColor {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::White => Self::White,
            PaperArg::Cream => Self::Cream,
        }
    }
}

impl From<StartArg> for pod_layout::ChapterStartSide {
    fn from(arg: StartArg) -> Self {
        match arg {
            StartArg::Any => Self::Any,
            StartArg::Left => Self::Left,
            StartArg::Right => Self::Right,
        }
    }
}

fn parse_trim_size(value: &str) -> std::result::Result<TrimSize, String> {
    TrimSize::from_dimensions(value).ok_or_else(|| {
        let known: Vec<String> = TrimSize::ALL
            .iter()
            .map(|size| format!("{}x{}", size.width_in(), size.height_in()))
            .collect();
        format!("unknown trim size '{value}' (expected one of {})", known.join(", "))
    })
}

impl SettingsArgs {
    fn apply(&self, project: &mut BookProject) -> Result<()> {
        let settings = &mut project.settings;
        if let Some(trim) = self.trim {
            settings.trim_size = trim;
        }
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
        if let Some(line_height) = self.line_height {
            settings.line_height = line_height;
        }
        if let Some(font) = self.font {
            settings.font_family = font.into();
        }
        if let Some(paper) = self.paper {
            settings.paper_color = paper.into();
        }
        if self.bleed {
            settings.bleed = true;
        }
        if let Some(start) = self.start {
            project.directives.chapter_start_side = start.into();
        }
        project
            .directives
            .blank_before
            .extend(self.blank_before.iter().cloned());

        if !self.blank_before_chapter.is_empty() {
            let chapters = project.effective_chapters();
            for &number in &self.blank_before_chapter {
                let Some(chapter) = number.checked_sub(1).and_then(|i| chapters.get(i)) else {
                    bail!("chapter {} out of range (1-{})", number, chapters.len());
                };
                project.directives.blank_before.insert(chapter.id.clone());
            }
        }
        Ok(())
    }
}

fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load a project file, or start a project from a manuscript
async fn open_project(
    input: &Path,
    book: &BookArgs,
    settings: &SettingsArgs,
) -> Result<BookProject> {
    let mut project = if is_project_file(input) {
        BookProject::load(input)
            .await
            .with_context(|| format!("Failed to load project {}", input.display()))?
    } else {
        let text = pod_layout::load_manuscript(input)
            .await
            .with_context(|| format!("Failed to read manuscript {}", input.display()))?;
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let author = book.author.clone().unwrap_or_default();
        BookProject::from_manuscript(&text, &stem, &author, chrono::Local::now().year())
    };

    if let Some(title) = &book.title {
        project.title = title.clone();
    }
    if let Some(author) = &book.author {
        project.author = author.clone();
    }
    settings.apply(&mut project)?;
    Ok(project)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Chapters { input } => {
            let text = pod_layout::load_manuscript(&input).await?;
            let chapters = pod_layout::split_into_chapters(&text);
            println!("{} chapters in {}", chapters.len(), input.display());
            for (i, chapter) in chapters.iter().enumerate() {
                println!(
                    "  {:>3}. {} ({} words) [{}]",
                    i + 1,
                    chapter.title,
                    chapter.content.split_whitespace().count(),
                    chapter.id
                );
            }
        }

        Commands::Init {
            input,
            output,
            book,
            settings,
        } => {
            let project = open_project(&input, &book, &settings).await?;
            project.save(&output).await?;
            println!(
                "Created project \"{}\" with {} chapters → {}",
                project.title,
                project.chapters.len(),
                output.display()
            );
        }

        Commands::Layout {
            input,
            book,
            settings,
            strict,
        } => {
            let project = open_project(&input, &book, &settings).await?;
            let typeset = project.typeset();
            let s = &project.settings;
            let m = &typeset.margins;

            println!("Layout for \"{}\":", project.title);
            println!("  Trim size: {}", s.trim_size.label());
            println!("  Font: {}pt × {} line height", s.font_size, s.line_height);
            println!(
                "  Margins: top {}\" bottom {}\" inside {}\" outside {}\"",
                m.top, m.bottom, m.inside, m.outside
            );
            println!(
                "  Estimated pages: {} body, {} with front and back matter",
                typeset.estimated_pages, typeset.validated_pages
            );

            let stats = &typeset.statistics;
            println!("Statistics:");
            println!("  Sections: {}", stats.sections);
            println!("  Total pages: {}", stats.total_pages);
            println!("  Chapter pages: {}", stats.chapter_pages);
            println!("  Blank pages: {}", stats.blank_pages);
            println!("  Numbered pages: {}", stats.numbered_pages);

            if typeset.issues.is_empty() {
                println!("No validation issues.");
            } else {
                println!("Validation:");
                for issue in &typeset.issues {
                    println!("  {}", issue);
                }
            }

            let errors = typeset
                .issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .count();
            if strict && errors > 0 {
                bail!("{} validation error(s)", errors);
            }
        }

        Commands::Preview {
            input,
            page,
            book,
            settings,
        } => {
            let project = open_project(&input, &book, &settings).await?;
            let typeset = project.typeset();

            match page {
                Some(number) => {
                    let Some(page) = typeset.pages.iter().find(|p| p.page_number == number) else {
                        bail!("page {} out of range (1-{})", number, typeset.pages.len());
                    };
                    let preview = pod_render::render_preview(
                        std::slice::from_ref(page),
                        &project.settings,
                        &typeset.margins,
                    )?;
                    print!("{}", preview);
                }
                None => {
                    let preview = pod_render::render_preview(
                        &typeset.pages,
                        &project.settings,
                        &typeset.margins,
                    )?;
                    print!("{}", preview);
                }
            }
        }

        Commands::Render {
            input,
            output,
            no_pad,
            book,
            settings,
        } => {
            let project = open_project(&input, &book, &settings).await?;
            let typeset = project.typeset();

            for issue in typeset.issues.iter().filter(|i| i.is_error()) {
                log::warn!("{}", issue);
            }

            let options = pod_render::PdfOptions {
                pad_to_even: !no_pad,
                ..pod_render::PdfOptions::with_title(&project.title)
            };
            pod_render::generate_pdf(
                &typeset.pages,
                &project.settings,
                &typeset.margins,
                &options,
                &output,
            )
            .await?;
            println!(
                "Rendered {} pages → {}",
                typeset.pages.len(),
                output.display()
            );
        }
    }

    Ok(())
}
