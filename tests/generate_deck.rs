//! End-to-end generation of the deck, verified by reading the saved file back.

use nokia_deck::charts::ChartRenderOptions;
use nokia_deck::deck::{DeckBuilder, DeckConfig, LOGO_PLACEHOLDER_TEXT};
use nokia_deck::ooxml::pptx::{PresentationSummary, SlideSummary};
use std::path::Path;

fn has_text(slide: &SlideSummary, needle: &str) -> bool {
    slide.texts.iter().any(|text| text == needle)
}

fn generate(dir: &Path, logo: &Path) -> PresentationSummary {
    let output = dir.join("Nokia_Failure_Analysis_PowerPynt.pptx");
    let mut config = DeckConfig::default().with_output(&output).with_logo(logo);
    config.chart = ChartRenderOptions {
        width: 300,
        height: 180,
        ..ChartRenderOptions::default()
    };
    let mut builder = DeckBuilder::new(config);
    builder.generate(&mut std::io::sink()).unwrap();
    PresentationSummary::open(&output).unwrap()
}

#[test]
fn test_full_deck_without_logo() {
    let dir = tempfile::tempdir().unwrap();
    let summary = generate(dir.path(), &dir.path().join("nokia_logo.png"));

    assert_eq!(summary.slide_count(), 13);
    assert_eq!(summary.media_count, 4);

    let title = &summary.slides[0];
    assert!(has_text(title, LOGO_PLACEHOLDER_TEXT));
    assert!(has_text(title, "Nokia: Why Did It Fail?"));
    assert_eq!(title.picture_count, 0);

    // One picture per chart call.
    let pictures: Vec<usize> = summary.slides.iter().map(|s| s.picture_count).collect();
    assert_eq!(pictures, vec![0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0]);

    assert!(has_text(&summary.slides[1], "Agenda"));
    assert!(has_text(&summary.slides[7], "OPPORTUNITIES"));
    assert!(has_text(&summary.slides[12], "Thank You!"));
    assert!(has_text(
        &summary.slides[12],
        "📧 contact@team.com\n🌐 github.com/team/nokia-analysis\n📱 @team_handle"
    ));
}

#[test]
fn test_full_deck_with_logo() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("nokia_logo.png");
    image::RgbaImage::from_pixel(8, 4, image::Rgba([18, 65, 145, 255]))
        .save(&logo)
        .unwrap();

    let summary = generate(dir.path(), &logo);

    assert_eq!(summary.slide_count(), 13);
    assert_eq!(summary.media_count, 5);
    let title = &summary.slides[0];
    assert_eq!(title.picture_count, 1);
    assert!(!has_text(title, LOGO_PLACEHOLDER_TEXT));
}

#[test]
fn test_rerun_overwrites_with_same_content() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("absent.png");

    let first = generate(dir.path(), &logo);
    let second = generate(dir.path(), &logo);

    assert_eq!(first.slide_count(), second.slide_count());
    let texts = |s: &PresentationSummary| -> Vec<Vec<String>> {
        s.slides.iter().map(|slide| slide.texts.clone()).collect()
    };
    assert_eq!(texts(&first), texts(&second));
}

#[test]
fn test_default_chart_size() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deck.pptx");
    let config = DeckConfig::default()
        .with_output(&output)
        .with_logo(dir.path().join("missing.png"));

    let report = DeckBuilder::new(config)
        .generate(&mut std::io::sink())
        .unwrap();

    assert_eq!(report.slide_count, 13);
    assert_eq!(report.chart_count, 4);
    assert!(output.exists());
    assert_eq!(output.extension().and_then(|e| e.to_str()), Some("pptx"));
}
