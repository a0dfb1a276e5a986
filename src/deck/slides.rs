//! The thirteen slide builders.
//!
//! Every slide is literal content at fixed positions on a 13.33in x 7.5in
//! canvas. Positions and sizes are in inches, font sizes in points.

use super::DeckBuilder;
use super::palette::*;
use crate::charts::{Chart, ChartRenderer};
use crate::common::{Emu, Error, RGBColor, Result, inches, points};
use crate::ooxml::pptx::{Alignment, Geometry, MutableShape, MutableSlide, PlaceholderKind, SlideLayout};
use tracing::{debug, info};

/// Text shown in place of the logo when the image file is missing.
pub const LOGO_PLACEHOLDER_TEXT: &str = "NOKIA LOGO";

const SMARTPHONE_YEARS: [u32; 8] = [2007, 2008, 2009, 2010, 2011, 2012, 2013, 2014];

/// Centered bold blue heading across the top of a blank slide.
fn add_heading(slide: &mut MutableSlide, text: &str, size: f64) {
    slide
        .add_text_box(inches(0.5), inches(0.3), inches(12.0), inches(1.0))
        .set_text(text)
        .font_size(size)
        .bold(true)
        .color(NOKIA_BLUE)
        .align(Alignment::Center);
}

/// Full-slide blue rectangle without outline.
fn add_background(slide: &mut MutableSlide, width: Emu, height: Emu) {
    slide
        .add_shape(Geometry::Rectangle, 0, 0, width, height)
        .fill(NOKIA_BLUE)
        .no_line();
}

fn placeholder(slide: &mut MutableSlide, kind: PlaceholderKind) -> Result<&mut MutableShape> {
    slide
        .placeholder_mut(kind)
        .ok_or_else(|| Error::Other(format!("slide layout has no {:?} placeholder", kind)))
}

/// Render a chart and place it on the slide.
fn add_chart(
    renderer: &ChartRenderer,
    slide: &mut MutableSlide,
    chart: &Chart,
    bounds: (f64, f64, f64, f64),
) -> Result<()> {
    let png = renderer.render_png(chart)?;
    let (x, y, width, height) = bounds;
    slide.add_picture_from_bytes(
        png,
        inches(x),
        inches(y),
        inches(width),
        inches(height),
        Some(chart.title.clone()),
    )?;
    Ok(())
}

/// Title-and-content slide: heading in the title placeholder, the first item
/// as the unformatted body text and the rest as formatted bullets.
fn fill_bullet_slide(
    slide: &mut MutableSlide,
    title: &str,
    title_size: f64,
    items: &[&str],
    item_size: f64,
) -> Result<()> {
    placeholder(slide, PlaceholderKind::Title)?
        .set_text(title)
        .font_size(title_size)
        .color(NOKIA_BLUE);

    let body = placeholder(slide, PlaceholderKind::Body)?;
    let Some((first, rest)) = items.split_first() else {
        return Ok(());
    };
    body.set_text(first);
    for item in rest {
        if let Some(paragraph) = body.add_paragraph(item) {
            paragraph
                .level(0)
                .font_size(item_size)
                .color(NOKIA_DARK_GRAY);
        }
    }
    Ok(())
}

/// Colored rectangle with a light fill and a colored outline.
fn add_panel(
    slide: &mut MutableSlide,
    bounds: (f64, f64, f64, f64),
    fill: RGBColor,
    outline: RGBColor,
) -> &mut MutableShape {
    let (x, y, width, height) = bounds;
    slide
        .add_shape(
            Geometry::Rectangle,
            inches(x),
            inches(y),
            inches(width),
            inches(height),
        )
        .fill(fill)
        .line_color(outline)
}

impl DeckBuilder {
    /// Slide 1: blue background, logo, title, subtitle and presenter line.
    pub fn add_title_slide(&mut self) -> Result<()> {
        let (width, height) = (self.prs.slide_width(), self.prs.slide_height());
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_background(slide, width, height);

        let logo = &self.config.logo_path;
        if logo.exists() {
            info!(path = %logo.display(), "embedding logo");
            slide.add_picture(logo, inches(0.5), inches(0.5), inches(2.0), inches(1.0))?;
        } else {
            debug!(path = %logo.display(), "logo not found, drawing placeholder");
            slide
                .add_shape(
                    Geometry::Rectangle,
                    inches(0.5),
                    inches(0.5),
                    inches(2.0),
                    inches(1.0),
                )
                .fill(NOKIA_WHITE)
                .set_text(LOGO_PLACEHOLDER_TEXT)
                .font_size(14.0)
                .color(NOKIA_BLUE)
                .align(Alignment::Center);
        }

        slide
            .add_text_box(inches(2.0), inches(2.5), inches(9.0), inches(2.0))
            .set_text("Nokia: Why Did It Fail?")
            .font_size(48.0)
            .bold(true)
            .color(NOKIA_WHITE)
            .align(Alignment::Center);

        slide
            .add_text_box(inches(2.0), inches(4.5), inches(9.0), inches(1.5))
            .set_text("Industry Analysis & Lessons Learned")
            .font_size(28.0)
            .color(NOKIA_LIGHT_BLUE)
            .align(Alignment::Center);

        slide
            .add_text_box(inches(8.0), inches(6.0), inches(4.0), inches(1.0))
            .set_text("Presented by: [Team Name]")
            .font_size(16.0)
            .color(NOKIA_WHITE)
            .align(Alignment::Right);

        Ok(())
    }

    /// Slide 2: agenda bullets on the title-and-content layout.
    pub fn add_agenda_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::TitleAndContent);
        fill_bullet_slide(
            slide,
            "Agenda",
            36.0,
            &[
                "📊 Company Background & History",
                "📈 Peak Performance & Market Leadership",
                "📉 The Beginning of Decline",
                "🌐 Market Trends & Industry Disruption",
                "⚔️ Competitive Analysis",
                "💻 Software & Strategy Failures",
                "🎯 SWOT Analysis",
                "💰 Financial Collapse",
                "📱 Product Gallery",
                "🎓 Legacy & Lessons Learned",
                "🔮 Future Outlook",
                "❓ Q&A",
            ],
            20.0,
        )
    }

    /// Slide 3: timeline of milestones and a key-facts box.
    pub fn add_company_background_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "Company Background & History", 32.0);

        let milestones = [
            ("1865", "Founded as paper mill", 1.0),
            ("1960s", "Entered electronics", 3.5),
            ("1980s", "Focus on telecom", 6.0),
            ("1990s", "Mobile phone leader", 8.5),
            ("2000s", "Smartphone era begins", 11.0),
        ];

        slide
            .add_connector(inches(1.0), inches(3.0), inches(11.5), inches(3.0))
            .line_color(NOKIA_BLUE)
            .line_width(points(4.0));

        for (year, event, x) in milestones {
            slide
                .add_shape(
                    Geometry::Ellipse,
                    inches(x - 0.15),
                    inches(2.7),
                    inches(0.3),
                    inches(0.3),
                )
                .fill(NOKIA_LIGHT_BLUE);

            slide
                .add_text_box(inches(x - 0.5), inches(2.0), inches(1.0), inches(0.5))
                .set_text(year)
                .font_size(14.0)
                .bold(true)
                .color(NOKIA_BLUE)
                .align(Alignment::Center);

            slide
                .add_text_box(inches(x - 0.75), inches(3.5), inches(1.5), inches(1.0))
                .set_text(event)
                .font_size(12.0)
                .color(NOKIA_DARK_GRAY)
                .align(Alignment::Center);
        }

        add_panel(slide, (1.0, 5.0, 11.0, 2.0), ALICE_BLUE, NOKIA_BLUE)
            .set_text(
                "Key Facts:\n\
                 • Founded in Finland by Fredrik Idestam\n\
                 • Transitioned from paper → rubber → electronics → telecom\n\
                 • Became world's largest mobile phone vendor (1998-2012)\n\
                 • At peak: 40% global market share in mobile phones",
            )
            .font_size(16.0)
            .color(NOKIA_DARK_GRAY);

        Ok(())
    }

    /// Slide 4: peak and decline panels side by side.
    pub fn add_peak_decline_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "Peak Performance & The Beginning of Decline", 28.0);

        let panels = [
            (
                0.5,
                PALE_GREEN,
                GREEN,
                "📈 PEAK (1998-2007)",
                "• World's largest mobile phone vendor\n\
                 • 40% global market share at peak\n\
                 • Dominated feature phone era\n\
                 • Strong in emerging markets\n\
                 • Revenue: €51.1B (2007)\n\
                 • 132,000 employees worldwide\n\
                 • Symbian OS market leader",
            ),
            (
                7.0,
                PALE_RED,
                RED,
                "📉 DECLINE (2007-2014)",
                "• iPhone launch (2007) disrupted market\n\
                 • Android adoption accelerated\n\
                 • Symbian became obsolete\n\
                 • Windows Phone partnership failed\n\
                 • Market share dropped to 3%\n\
                 • Mobile division sold to Microsoft\n\
                 • 25,000+ job cuts",
            ),
        ];

        for (x, fill, accent, heading, body) in panels {
            add_panel(slide, (x, 1.5, 5.5, 5.0), fill, accent);

            slide
                .add_text_box(inches(x + 0.2), inches(1.7), inches(5.0), inches(0.5))
                .set_text(heading)
                .font_size(20.0)
                .bold(true)
                .color(accent);

            slide
                .add_text_box(inches(x + 0.2), inches(2.3), inches(5.0), inches(3.5))
                .set_text(body)
                .font_size(14.0)
                .color(NOKIA_DARK_GRAY);
        }

        Ok(())
    }

    /// Slide 5: smartphone adoption chart and key disruptions.
    pub fn add_market_trends_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "Market Trends & Industry Disruption", 32.0);

        let adoption = Chart::line(
            "Global Smartphone Adoption (%)",
            &SMARTPHONE_YEARS,
            &[19.0, 23.0, 31.0, 42.0, 55.0, 68.0, 78.0, 85.0],
        );
        add_chart(&self.renderer, slide, &adoption, (1.0, 1.5, 6.0, 3.5))?;
        self.chart_count += 1;

        slide
            .add_text_box(inches(7.5), inches(1.5), inches(5.0), inches(5.0))
            .set_text(
                "Key Industry Disruptions:\n\n\
                 🔄 Feature phones → Smartphones\n\n\
                 📱 Hardware focus → Software ecosystems\n\n\
                 🏪 Carrier control → App stores\n\n\
                 🌐 Closed systems → Open platforms\n\n\
                 💡 Innovation cycles accelerated\n\n\
                 🎯 User experience became critical",
            )
            .font_size(16.0)
            .color(NOKIA_DARK_GRAY);

        Ok(())
    }

    /// Slide 6: 2007 and 2014 market share pies and competitor placeholders.
    pub fn add_competitive_analysis_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "Competitive Analysis: Market Share Evolution", 28.0);

        let share_2007 = Chart::pie(
            "2007 Mobile Phone Market Share",
            &["Nokia", "Samsung", "Apple", "Others"],
            &[40.0, 15.0, 0.0, 45.0],
        );
        add_chart(&self.renderer, slide, &share_2007, (0.5, 1.5, 5.5, 3.5))?;
        self.chart_count += 1;

        let share_2014 = Chart::pie(
            "2014 Smartphone Market Share",
            &["Samsung", "Apple", "Nokia", "Huawei", "Others"],
            &[28.0, 23.0, 3.0, 8.0, 38.0],
        );
        add_chart(&self.renderer, slide, &share_2014, (7.0, 1.5, 5.5, 3.5))?;
        self.chart_count += 1;

        let competitors = [("Apple", 1.0), ("Samsung", 4.0), ("Huawei", 7.0), ("Ericsson", 10.0)];
        for (competitor, x) in competitors {
            let shape = slide
                .add_shape(
                    Geometry::Rectangle,
                    inches(x),
                    inches(5.5),
                    inches(2.0),
                    inches(1.0),
                )
                .fill(LIGHT_GRAY)
                .set_text(&format!("{competitor}\nLOGO"));
            // Only the name line is styled.
            if let Some(name) = shape.paragraph(0) {
                name.align(Alignment::Center).font_size(12.0);
            }
        }

        Ok(())
    }

    /// Slide 7: six failure boxes with cascade arrows.
    pub fn add_software_strategy_failures_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "Software & Strategy Failures", 32.0);

        let failures = [
            ("Symbian OS", "Outdated architecture", 2.0, 2.0),
            ("App Ecosystem", "Limited developer support", 6.0, 2.0),
            ("User Experience", "Complex interface", 10.0, 2.0),
            ("Innovation Speed", "Slow release cycles", 2.0, 4.0),
            ("Strategic Partnerships", "Microsoft dependency", 6.0, 4.0),
            ("Market Response", "Too little, too late", 10.0, 4.0),
        ];

        for (title, description, x, y) in failures {
            add_panel(slide, (x - 0.75, y, 1.5, 1.2), BLUSH, RED);

            slide
                .add_text_box(inches(x - 0.7), inches(y + 0.1), inches(1.4), inches(0.4))
                .set_text(title)
                .font_size(12.0)
                .bold(true)
                .color(RED)
                .align(Alignment::Center);

            slide
                .add_text_box(inches(x - 0.7), inches(y + 0.5), inches(1.4), inches(0.6))
                .set_text(description)
                .font_size(10.0)
                .color(NOKIA_DARK_GRAY)
                .align(Alignment::Center);
        }

        let arrows = [
            (3.5, 2.5, 4.5, 2.5),
            (7.5, 2.5, 8.5, 2.5),
            (2.75, 3.2, 2.75, 3.8),
            (6.75, 3.2, 6.75, 3.8),
        ];
        for (x1, y1, x2, y2) in arrows {
            slide
                .add_connector(inches(x1), inches(y1), inches(x2), inches(y2))
                .line_color(RED)
                .line_width(points(2.0));
        }

        Ok(())
    }

    /// Slide 8: SWOT quadrants with colored header bars.
    pub fn add_swot_analysis_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "SWOT Analysis", 32.0);

        let quadrants = [
            (
                "STRENGTHS",
                GREEN,
                1.0,
                1.5,
                "• Strong brand recognition\n\
                 • Global distribution network\n\
                 • Hardware expertise\n\
                 • Patent portfolio\n\
                 • Emerging market presence",
            ),
            (
                "WEAKNESSES",
                RED,
                7.0,
                1.5,
                "• Outdated software platform\n\
                 • Slow innovation cycles\n\
                 • Poor user experience\n\
                 • Limited app ecosystem\n\
                 • Rigid corporate culture",
            ),
            (
                "OPPORTUNITIES",
                BLUE,
                1.0,
                4.0,
                "• 5G infrastructure market\n\
                 • IoT and connected devices\n\
                 • Enterprise solutions\n\
                 • Network equipment\n\
                 • Cloud services",
            ),
            (
                "THREATS",
                ORANGE,
                7.0,
                4.0,
                "• Smartphone market dominance\n\
                 • Platform ecosystems (iOS/Android)\n\
                 • Chinese competitors\n\
                 • Rapid technology changes\n\
                 • Consumer preference shifts",
            ),
        ];

        for (title, color, x, y, content) in quadrants {
            add_panel(slide, (x, y, 5.0, 2.5), NOKIA_WHITE, color).line_width(points(3.0));

            slide
                .add_shape(
                    Geometry::Rectangle,
                    inches(x),
                    inches(y),
                    inches(5.0),
                    inches(0.5),
                )
                .fill(color)
                .no_line();

            slide
                .add_text_box(inches(x + 0.1), inches(y + 0.05), inches(4.8), inches(0.4))
                .set_text(title)
                .font_size(18.0)
                .bold(true)
                .color(NOKIA_WHITE)
                .align(Alignment::Center);

            slide
                .add_text_box(inches(x + 0.2), inches(y + 0.7), inches(4.6), inches(1.6))
                .set_text(content)
                .font_size(14.0)
                .color(NOKIA_DARK_GRAY);
        }

        Ok(())
    }

    /// Slide 9: revenue decline chart and financial metrics.
    pub fn add_financial_collapse_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "Financial Collapse: Revenue & Profit Decline", 28.0);

        let revenue = Chart::line(
            "Nokia Revenue Decline (Billion EUR)",
            &SMARTPHONE_YEARS,
            &[51.1, 50.7, 40.9, 42.4, 38.7, 30.2, 12.7, 7.3],
        );
        add_chart(&self.renderer, slide, &revenue, (0.5, 1.5, 6.0, 3.5))?;
        self.chart_count += 1;

        slide
            .add_text_box(inches(7.0), inches(1.5), inches(5.5), inches(5.0))
            .set_text(
                "Key Financial Metrics:\n\n\
                 📉 Revenue Peak (2007): €51.1B\n\
                 📉 Revenue Low (2014): €7.3B\n\
                 📉 Decline: -86% over 7 years\n\n\
                 💰 Mobile Division Sale: €5.4B\n\
                 💼 Job Cuts: 25,000+ employees\n\
                 📊 Market Cap Loss: ~€100B\n\n\
                 🏭 Restructuring Costs: €2.1B\n\
                 📱 R&D Investment Wasted: €15B+",
            )
            .font_size(16.0)
            .color(NOKIA_DARK_GRAY);

        Ok(())
    }

    /// Slide 10: product cards with image placeholders.
    pub fn add_product_gallery_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "Product Gallery: From Glory to Decline", 32.0);

        let products = [
            ("Nokia 3310", "Iconic Feature Phone", 1.0, 1.5),
            ("Nokia N95", "Smartphone Pioneer", 4.5, 1.5),
            ("Nokia Lumia 920", "Windows Phone Era", 8.0, 1.5),
            ("Nokia Networks", "5G Infrastructure", 11.5, 1.5),
            ("Symbian OS", "Mobile Operating System", 2.75, 4.0),
            ("HERE Maps", "Navigation Platform", 6.25, 4.0),
            ("Nokia Bell Labs", "Research & Innovation", 9.75, 4.0),
        ];

        for (product, description, x, y) in products {
            add_panel(slide, (x, y, 2.5, 2.0), SMOKE, NOKIA_GRAY);

            slide
                .add_text_box(inches(x + 0.1), inches(y + 0.1), inches(2.3), inches(0.5))
                .set_text(product)
                .font_size(14.0)
                .bold(true)
                .color(NOKIA_BLUE)
                .align(Alignment::Center);

            slide
                .add_text_box(inches(x + 0.5), inches(y + 0.7), inches(1.5), inches(0.8))
                .set_text("[IMAGE]")
                .font_size(12.0)
                .color(NOKIA_GRAY)
                .align(Alignment::Center);

            slide
                .add_text_box(inches(x + 0.1), inches(y + 1.6), inches(2.3), inches(0.3))
                .set_text(description)
                .font_size(10.0)
                .color(NOKIA_DARK_GRAY)
                .align(Alignment::Center);
        }

        Ok(())
    }

    /// Slide 11: four lesson boxes.
    pub fn add_lessons_learned_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_heading(slide, "Legacy, Impact & Lessons Learned", 32.0);

        let lessons = [
            (
                "🔄 Adapt or Perish",
                "Technology disruption requires rapid adaptation. Nokia's slow response to smartphones cost them the market.",
                1.0,
                1.5,
                RED,
            ),
            (
                "💻 Software is King",
                "Hardware excellence isn't enough. Software platforms and ecosystems determine market success.",
                7.0,
                1.5,
                BLUE,
            ),
            (
                "👥 User Experience Matters",
                "Complex interfaces and poor UX drive customers away. Simplicity and intuitive design are crucial.",
                1.0,
                4.0,
                GREEN,
            ),
            (
                "🚀 Innovation Speed",
                "Fast iteration and quick market response are essential in tech. Bureaucracy kills innovation.",
                7.0,
                4.0,
                ORANGE,
            ),
        ];

        for (title, content, x, y, color) in lessons {
            add_panel(slide, (x, y, 5.0, 2.0), NOKIA_WHITE, color).line_width(points(3.0));

            slide
                .add_text_box(inches(x + 0.2), inches(y + 0.1), inches(4.6), inches(0.5))
                .set_text(title)
                .font_size(18.0)
                .bold(true)
                .color(color);

            slide
                .add_text_box(inches(x + 0.2), inches(y + 0.7), inches(4.6), inches(1.1))
                .set_text(content)
                .font_size(14.0)
                .color(NOKIA_DARK_GRAY);
        }

        Ok(())
    }

    /// Slide 12: outlook bullets on the title-and-content layout.
    pub fn add_future_outlook_slide(&mut self) -> Result<()> {
        let slide = self.prs.add_slide(SlideLayout::TitleAndContent);
        fill_bullet_slide(
            slide,
            "Future Outlook: Nokia's Reinvention",
            32.0,
            &[
                "🌐 Network Infrastructure Leader",
                "📡 5G technology and equipment",
                "☁️ Cloud and edge computing solutions",
                "🔬 Bell Labs research and innovation",
                "🏭 Industrial IoT and automation",
                "🛡️ Cybersecurity and network security",
                "🎯 Focus on B2B enterprise solutions",
                "💡 Patent licensing and IP monetization",
                "🤝 Strategic partnerships and acquisitions",
            ],
            18.0,
        )
    }

    /// Slide 13: closing slide with contact lines.
    pub fn add_thank_you_slide(&mut self) -> Result<()> {
        let (width, height) = (self.prs.slide_width(), self.prs.slide_height());
        let slide = self.prs.add_slide(SlideLayout::Blank);
        add_background(slide, width, height);

        slide
            .add_text_box(inches(2.0), inches(2.0), inches(9.0), inches(2.0))
            .set_text("Thank You!")
            .font_size(48.0)
            .bold(true)
            .color(NOKIA_WHITE)
            .align(Alignment::Center);

        slide
            .add_text_box(inches(2.0), inches(4.0), inches(9.0), inches(1.0))
            .set_text("Questions & Discussion")
            .font_size(28.0)
            .color(NOKIA_LIGHT_BLUE)
            .align(Alignment::Center);

        slide
            .add_text_box(inches(2.0), inches(5.5), inches(9.0), inches(1.5))
            .set_text("📧 contact@team.com\n🌐 github.com/team/nokia-analysis\n📱 @team_handle")
            .font_size(18.0)
            .color(NOKIA_WHITE)
            .align(Alignment::Center);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartRenderOptions;
    use crate::deck::DeckConfig;

    fn builder() -> DeckBuilder {
        let mut config = DeckConfig::default().with_logo("/nonexistent/dir/nokia_logo.png");
        config.chart = ChartRenderOptions {
            width: 200,
            height: 120,
            ..ChartRenderOptions::default()
        };
        DeckBuilder::new(config)
    }

    #[test]
    fn test_title_slide_placeholder() {
        let mut builder = builder();
        builder.add_title_slide().unwrap();

        let slide = &builder.prs.slides()[0];
        let texts = slide.texts();
        assert!(texts.iter().any(|t| t == LOGO_PLACEHOLDER_TEXT));
        assert!(texts.iter().any(|t| t == "Nokia: Why Did It Fail?"));
        assert!(!slide.shapes().iter().any(MutableShape::is_picture));
    }

    #[test]
    fn test_agenda_uses_placeholders() {
        let mut builder = builder();
        builder.add_agenda_slide().unwrap();

        let slide = &mut builder.prs.slides[0];
        assert_eq!(slide.layout(), SlideLayout::TitleAndContent);
        let body = slide.placeholder_mut(PlaceholderKind::Body).unwrap();
        let paragraphs = body.text_body().unwrap().paragraphs();
        assert_eq!(paragraphs.len(), 12);
        assert_eq!(paragraphs[0].format().size, None);
        assert_eq!(paragraphs[11].text(), "❓ Q&A");
        assert_eq!(paragraphs[11].format().size, Some(20.0));
    }

    #[test]
    fn test_chart_slides_embed_pictures() {
        let mut builder = builder();
        builder.add_market_trends_slide().unwrap();
        builder.add_competitive_analysis_slide().unwrap();
        builder.add_financial_collapse_slide().unwrap();

        let pictures: Vec<usize> = builder
            .prs
            .slides()
            .iter()
            .map(|s| s.shapes().iter().filter(|sh| sh.is_picture()).count())
            .collect();
        assert_eq!(pictures, vec![1, 2, 1]);
        assert_eq!(builder.chart_count, 4);
    }

    #[test]
    fn test_competitor_boxes_style_first_line() {
        let mut builder = builder();
        builder.add_competitive_analysis_slide().unwrap();

        let slide = &builder.prs.slides()[0];
        let apple = slide
            .shapes()
            .iter()
            .find_map(|s| s.text_body().filter(|b| b.text() == "Apple\nLOGO"))
            .unwrap();
        let paragraphs = apple.paragraphs();
        assert_eq!(paragraphs[0].format().size, Some(12.0));
        assert_eq!(paragraphs[0].alignment(), Some(Alignment::Center));
        assert_eq!(paragraphs[1].format().size, None);
    }

    #[test]
    fn test_swot_has_four_quadrants() {
        let mut builder = builder();
        builder.add_swot_analysis_slide().unwrap();

        let texts = builder.prs.slides()[0].texts();
        for heading in ["STRENGTHS", "WEAKNESSES", "OPPORTUNITIES", "THREATS"] {
            assert!(texts.iter().any(|t| t == heading), "{heading}");
        }
    }
}
