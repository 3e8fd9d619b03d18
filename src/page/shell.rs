use egui::{Align, Align2, Color32, FontId, Pos2, Rect, RichText, Stroke, Vec2};

use super::contact::{ContactForm, SubmissionSink, SubmitError, UnwiredSink};
use super::content::{PortfolioContent, Profile};
use super::controller::{PageController, Section, HERO_SLIDE};
use crate::math::Color;

const BACKGROUND: Color32 = Color32::from_rgb(5, 8, 22);
const CARD: Color32 = Color32::from_rgb(11, 14, 26);
const PROJECT_CARD: Color32 = Color32::from_rgb(29, 24, 54);
const ACCENT: Color32 = Color32::from_rgb(6, 182, 212);
const PURPLE: Color32 = Color32::from_rgb(145, 94, 255);
const MUTED: Color32 = Color32::from_rgb(148, 163, 184);
const BODY: Color32 = Color32::from_rgb(203, 213, 225);
const RAIN: Color32 = Color32::from_rgb(34, 211, 238);
const CARD_BOB_ROOM: f32 = 15.0;

fn color32(color: Color) -> Color32 {
    let [r, g, b, _] = color.to_rgba8(1.0);
    Color32::from_rgb(r, g, b)
}

fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Scroll targets reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    About,
    Work,
    Contact,
}

/// The page itself: navigation, sections and the contact form, drawn with egui
///
/// Timing comes from a [`PageController`]; this type only lays things out.
pub struct PageShell {
    content: PortfolioContent,
    form: ContactForm,
    sink: Box<dyn SubmissionSink>,
    status: Option<Result<(), SubmitError>>,
    menu_open: bool,
    pending_scroll: Option<Anchor>,
}

impl PageShell {
    pub fn new(content: PortfolioContent) -> Self {
        Self::with_sink(content, Box::new(UnwiredSink))
    }

    pub fn with_sink(content: PortfolioContent, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            content,
            form: ContactForm::default(),
            sink,
            status: None,
            menu_open: false,
            pending_scroll: None,
        }
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Outcome of the last submit, if any
    pub fn status(&self) -> Option<&Result<(), SubmitError>> {
        self.status.as_ref()
    }

    pub fn scroll_to(&mut self, anchor: Anchor) {
        self.pending_scroll = Some(anchor);
    }

    pub fn submit(&mut self) {
        let result = self.form.submit(self.sink.as_ref());
        if result.is_ok() {
            self.form.clear();
        }
        self.status = Some(result);
    }

    pub fn show(&mut self, ctx: &egui::Context, page: &mut PageController) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.set_opacity(page.content_opacity());
                self.navigation(ui);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.hero(ui, page);
                        self.about(ui);
                        self.work(ui, page);
                        self.contact(ui, page);
                        self.footer(ui);
                    });
            });

        if page.preloader_visible() {
            preloader(ctx, page);
        }
    }

    fn anchor(&mut self, response: &egui::Response, anchor: Anchor) {
        if self.pending_scroll == Some(anchor) {
            response.scroll_to_me(Some(Align::TOP));
            self.pending_scroll = None;
        }
    }

    fn navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(24.0);
            let logo = ui.add(
                egui::Label::new(
                    RichText::new("AI").size(22.0).strong().color(Color32::WHITE),
                )
                .sense(egui::Sense::click()),
            );
            ui.label(RichText::new(".").size(22.0).strong().color(ACCENT));
            if logo.clicked() {
                self.scroll_to(Anchor::Top);
            }

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                ui.add_space(24.0);
                let label = if self.menu_open { "GET IN TOUCH ▲" } else { "GET IN TOUCH ▼" };
                if ui.button(RichText::new(label).small().strong()).clicked() {
                    self.menu_open = !self.menu_open;
                }
                for (name, anchor) in [("Contact", Anchor::Contact), ("Work", Anchor::Work), ("About", Anchor::About)] {
                    if ui.link(RichText::new(name).color(BODY)).clicked() {
                        self.scroll_to(anchor);
                    }
                }
            });
        });

        if self.menu_open {
            ui.with_layout(egui::Layout::top_down(Align::Max), |ui| {
                egui::Frame::new()
                    .fill(CARD)
                    .corner_radius(16.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        for link in &self.content.social_links {
                            ui.hyperlink_to(RichText::new(&link.name).color(color32(link.accent)), &link.url);
                        }
                    });
            });
        }
    }

    fn hero(&mut self, ui: &mut egui::Ui, page: &PageController) {
        let top = ui.allocate_response(Vec2::new(ui.available_width(), 8.0), egui::Sense::hover());
        self.anchor(&top, Anchor::Top);

        let profile = &self.content.profile;
        let scale = page.content_scale();
        let name_color = color32(page.name_color());
        let slide = page.hero_slide();
        let mut view_work = false;

        let hero = ui.scope(|ui| {
            ui.multiply_opacity(page.hero_opacity());
            ui.add_space(80.0);
            ui.columns(2, |columns| {
                // Text enters from the left, so its gutter starts narrow
                entering(&mut columns[0], HERO_SLIDE - slide, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Hi, I'm").size(48.0 * scale).strong().color(Color32::WHITE));
                        ui.label(RichText::new(&profile.first_name).size(48.0 * scale).strong().color(name_color));
                    });
                    ui.label(
                        RichText::new(format!("{}|", page.hero_title()))
                            .size(32.0 * scale)
                            .strong()
                            .color(name_color),
                    );
                    ui.add_space(16.0);
                    ui.label(RichText::new(&profile.tagline).size(18.0).color(MUTED));
                    ui.add_space(24.0);
                    let button = egui::Button::new(RichText::new("View My Work").strong().color(Color32::WHITE))
                        .fill(PURPLE)
                        .corner_radius(255.0);
                    view_work = ui.add(button).clicked();
                });
                entering(&mut columns[1], slide, |ui| profile_card(ui, page, profile));
            });
            ui.add_space(120.0);
        });

        code_rain(ui, hero.response.rect, page);
        if view_work {
            self.scroll_to(Anchor::Work);
        }
    }

    fn about(&mut self, ui: &mut egui::Ui) {
        ui.add_space(64.0);
        let heading = section_heading(ui, "Get to know me", "Overview");
        self.anchor(&heading, Anchor::About);
        ui.label(RichText::new(&self.content.profile.overview).size(20.0).color(BODY));
        ui.add_space(40.0);

        let services = &self.content.services;
        if services.is_empty() {
            return;
        }
        ui.columns(services.len(), |columns| {
            for (ui, service) in columns.iter_mut().zip(services) {
                let [from, to] = service.gradient;
                egui::Frame::new()
                    .fill(CARD)
                    .stroke(Stroke::new(1.0, color32(from.lerp(to, 0.5))))
                    .corner_radius(20.0)
                    .inner_margin(20.0)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(&service.title).size(18.0).strong().color(Color32::WHITE));
                            ui.add_space(8.0);
                            ui.label(RichText::new(&service.description).color(MUTED));
                        });
                    });
            }
        });
    }

    fn work(&mut self, ui: &mut egui::Ui, page: &mut PageController) {
        ui.add_space(96.0);
        let heading = revealed(ui, page, Section::ExperienceHeading, |ui| {
            section_heading(ui, "", "Experience")
        });
        self.anchor(&heading, Anchor::Work);
        ui.add_space(24.0);

        for (i, exp) in self.content.experiences.iter().enumerate() {
            revealed(ui, page, Section::Experience(i), |ui| {
                egui::Frame::new()
                    .fill(CARD)
                    .stroke(Stroke::new(1.0, faded(color32(exp.icon_bg), 0.6)))
                    .corner_radius(24.0)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&exp.title).size(24.0).strong().color(Color32::WHITE));
                            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(exp.date.to_uppercase()).monospace().small().color(ACCENT));
                            });
                        });
                        ui.label(RichText::new(format!("• {}", exp.company_name)).color(MUTED));
                        ui.add_space(12.0);
                        for point in &exp.points {
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new("/").strong().color(ACCENT));
                                ui.label(RichText::new(point).color(BODY));
                            });
                        }
                    })
                    .response
            });
            ui.add_space(24.0);
        }

        ui.add_space(64.0);
        revealed(ui, page, Section::PortfolioHeading, |ui| {
            section_heading(ui, "", "Portfolio")
        });
        ui.add_space(24.0);

        for (row, projects) in self.content.projects.chunks(3).enumerate() {
            ui.columns(3, |columns| {
                for (col, (ui, project)) in columns.iter_mut().zip(projects).enumerate() {
                    let index = row * 3 + col;
                    revealed(ui, page, Section::Project(index), |ui| {
                        egui::Frame::new()
                            .fill(PROJECT_CARD)
                            .corner_radius(24.0)
                            .inner_margin(20.0)
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(&project.name).size(22.0).strong().color(Color32::WHITE));
                                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                                        ui.hyperlink_to("source", &project.source_code_link);
                                    });
                                });
                                ui.label(RichText::new(&project.description).color(MUTED));
                                ui.add_space(8.0);
                                ui.horizontal_wrapped(|ui| {
                                    for tag in &project.tags {
                                        ui.label(
                                            RichText::new(format!("#{}", tag.name))
                                                .small()
                                                .strong()
                                                .color(color32(tag.color)),
                                        );
                                    }
                                });
                            })
                            .response
                    });
                }
            });
            ui.add_space(24.0);
        }
    }

    fn contact(&mut self, ui: &mut egui::Ui, page: &mut PageController) {
        ui.add_space(96.0);
        let mut submitted = false;

        let response = revealed(ui, page, Section::Contact, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(480.0);
                egui::Frame::new()
                    .stroke(Stroke::new(1.0, faded(Color32::WHITE, 0.2)))
                    .corner_radius(24.0)
                    .inner_margin(32.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("Contact Us").size(32.0).strong().color(Color32::WHITE));
                        ui.add_space(16.0);
                        ui.add(egui::TextEdit::singleline(&mut self.form.name).hint_text("Your Name"));
                        ui.add(egui::TextEdit::singleline(&mut self.form.email).hint_text("Your Email"));
                        ui.add(
                            egui::TextEdit::multiline(&mut self.form.message)
                                .hint_text("Your Message")
                                .desired_rows(4),
                        );
                        ui.add_space(8.0);
                        let send = egui::Button::new(RichText::new("Send Message").strong().color(PURPLE))
                            .stroke(Stroke::new(1.0, PURPLE))
                            .corner_radius(12.0);
                        submitted = ui.add(send).clicked();

                        match &self.status {
                            Some(Ok(())) => {
                                ui.label(RichText::new("Message sent").color(ACCENT));
                            }
                            Some(Err(err)) => {
                                ui.label(RichText::new(err.to_string()).color(Color32::LIGHT_RED));
                            }
                            None => {}
                        }
                    });
            })
            .response
        });
        self.anchor(&response, Anchor::Contact);

        if submitted {
            self.submit();
        }
    }

    fn footer(&self, ui: &mut egui::Ui) {
        ui.add_space(64.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                for link in &self.content.social_links {
                    ui.hyperlink_to(RichText::new(&link.name).small().color(MUTED), &link.url);
                }
            });
            ui.label(RichText::new(&self.content.profile.footer).small().color(MUTED));
        });
        ui.add_space(32.0);
    }
}

fn section_heading(ui: &mut egui::Ui, kicker: &str, title: &str) -> egui::Response {
    ui.vertical(|ui| {
        if !kicker.is_empty() {
            ui.label(RichText::new(kicker.to_uppercase()).small().strong().color(ACCENT));
        }
        ui.horizontal(|ui| {
            ui.label(RichText::new(title).size(56.0).strong().color(Color32::WHITE));
            ui.label(RichText::new(".").size(56.0).strong().color(ACCENT));
        });
    })
    .response
}

/// Lay out `add` pushed `indent` points to the right
fn entering(ui: &mut egui::Ui, indent: f32, add: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal_top(|ui| {
        ui.add_space(indent.max(0.0));
        ui.vertical(add);
    });
}

fn profile_card(ui: &mut egui::Ui, page: &PageController, profile: &Profile) {
    egui::Frame::new()
        .stroke(Stroke::new(1.0, faded(Color32::WHITE, 0.1)))
        .corner_radius(16.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                // Headroom the bob eats into as the contents rise
                ui.add_space(CARD_BOB_ROOM + page.card_bob());
                egui::Frame::new()
                    .stroke(Stroke::new(1.0, faded(ACCENT, 0.3)))
                    .corner_radius(255.0)
                    .inner_margin(Vec2::new(12.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(profile.badge.to_uppercase()).small().strong().color(RAIN));
                    });
                ui.add_space(24.0);
                initials_badge(ui, profile);
                ui.add_space(16.0);
                ui.label(RichText::new(profile.first_name.to_uppercase()).size(32.0).strong().color(Color32::WHITE));
                ui.label(RichText::new(profile.last_name.to_uppercase()).size(32.0).strong().color(MUTED));
                ui.add_space(CARD_BOB_ROOM - page.card_bob());
            });
        });
}

/// Round avatar placeholder with the profile initials
fn initials_badge(ui: &mut egui::Ui, profile: &Profile) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(96.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle(rect.center(), 46.0, BACKGROUND, Stroke::new(2.0, faded(ACCENT, 0.6)));

    let initials: String = [&profile.first_name, &profile.last_name]
        .iter()
        .filter_map(|name| name.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initials,
        FontId::proportional(32.0),
        Color32::WHITE,
    );
}

/// Draw `add` with its reveal applied, then report whether it ended up on screen
fn revealed(
    ui: &mut egui::Ui,
    page: &mut PageController,
    section: Section,
    add: impl FnOnce(&mut egui::Ui) -> egui::Response,
) -> egui::Response {
    let (opacity, offset) = page
        .reveal(section)
        .map(|r| (r.opacity(), r.offset()))
        .unwrap_or((1.0, 0.0));

    let response = ui
        .scope(|ui| {
            ui.multiply_opacity(opacity);
            ui.add_space(offset);
            add(ui)
        })
        .inner;

    page.observe(section, ui.is_rect_visible(response.rect));
    response
}

fn code_rain(ui: &egui::Ui, area: Rect, page: &PageController) {
    let painter = ui.painter_at(area);
    let font = FontId::monospace(11.0);
    let cell = Vec2::new(area.width().max(1.0) / 4.0, 28.0);
    let columns = 4;

    for (i, (snippet, frame)) in page.code_rain().frames().enumerate() {
        if frame.opacity <= 0.0 {
            continue;
        }
        let slot = Pos2::new(
            area.min.x + (i % columns) as f32 * cell.x + 16.0,
            area.min.y + (i / columns) as f32 * cell.y + 16.0,
        );
        painter.text(
            slot + Vec2::new(frame.offset.x, frame.offset.y),
            Align2::LEFT_TOP,
            snippet,
            font.clone(),
            faded(RAIN, frame.opacity * 0.35),
        );
    }
}

fn preloader(ctx: &egui::Context, page: &PageController) {
    let screen = ctx.screen_rect();
    let opacity = page.preloader_opacity();
    let scale = page.preloader_scale().max(0.0);

    egui::Area::new(egui::Id::new("preloader"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .interactable(true)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, faded(BACKGROUND, opacity));

            let center = rect.center();
            let size = 128.0 * scale;
            let text = page.preloader_text();
            let galley = painter.layout_no_wrap(
                text.to_string(),
                FontId::proportional(size),
                faded(Color32::WHITE, opacity),
            );
            let text_pos = center - galley.size() * 0.5;
            let text_width = galley.size().x;
            painter.galley(text_pos, galley, Color32::WHITE);

            painter.text(
                Pos2::new(center.x + text_width * 0.5, center.y),
                Align2::LEFT_CENTER,
                ".",
                FontId::proportional(size),
                faded(ACCENT, page.preloader_dot_opacity() * opacity),
            );

            let half = text_width.max(size) * 0.5 * page.underline_width();
            let y = center.y + size * 0.6;
            painter.line_segment(
                [Pos2::new(center.x - half, y), Pos2::new(center.x + half, y)],
                Stroke::new(2.0, faded(ACCENT, page.underline_width() * opacity)),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimelineConfig;
    use crate::field::SequenceRandom;
    use std::time::Duration;

    fn setup() -> (PageShell, PageController) {
        let content = PortfolioContent::builtin().unwrap();
        let page = PageController::new(
            &TimelineConfig::default(),
            &content,
            &mut SequenceRandom::constant(0.5),
        );
        (PageShell::new(content), page)
    }

    #[test]
    fn test_frames_draw_headless() {
        let (mut shell, mut page) = setup();
        let ctx = egui::Context::default();

        for _ in 0..3 {
            page.update(Duration::from_millis(1500));
            let _ = ctx.run(egui::RawInput::default(), |ctx| shell.show(ctx, &mut page));
        }
        assert!(!page.preloader_visible());
    }

    #[test]
    fn test_submit_reports_stub() {
        let (mut shell, _) = setup();
        *shell.form_mut() = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        };
        shell.submit();
        assert_eq!(shell.status(), Some(&Err(SubmitError::NotWired)));
        // Unsent input is kept
        assert_eq!(shell.form_mut().name, "Ada");
    }

    #[test]
    fn test_submit_validates_first() {
        let (mut shell, _) = setup();
        shell.submit();
        assert_eq!(shell.status(), Some(&Err(SubmitError::MissingField("name"))));
    }
}
