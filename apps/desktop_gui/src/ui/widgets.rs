use eframe::egui;
use study_core::{flows::SubmissionStatus, Wizard, WizardPosition};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(49, 94, 168);
pub const GOLD: egui::Color32 = egui::Color32::from_rgb(201, 162, 39);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(120, 124, 134);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

impl StatusBanner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            message: message.into(),
        }
    }
}

/// Draws `banner`; returns true when it was dismissed.
pub fn status_banner(ui: &mut egui::Ui, banner: &StatusBanner) -> bool {
    let (fill, stroke) = match banner.severity {
        StatusBannerSeverity::Info => (
            egui::Color32::from_rgb(36, 72, 52),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(86, 150, 110)),
        ),
        StatusBannerSeverity::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
    };

    let mut dismissed = false;
    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Fechar").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, add_contents)
        .inner
}

pub fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(egui::RichText::new(title).strong().size(18.0));
    ui.add_space(4.0);
}

pub fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.heading(title);
    if !subtitle.is_empty() {
        ui.weak(subtitle);
    }
    ui.add_space(10.0);
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.25))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(color));
        });
}

/// Row of mutually exclusive options; returns the option clicked this frame.
pub fn choice_row<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    current: Option<T>,
    options: &[T],
    label: impl Fn(T) -> String,
) -> Option<T> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for option in options {
            if ui
                .selectable_label(current == Some(*option), label(*option))
                .clicked()
            {
                clicked = Some(*option);
            }
        }
    });
    clicked
}

/// Step counter and progress bar shown above every wizard.
pub fn wizard_header(ui: &mut egui::Ui, wizard: &Wizard) {
    let total = wizard.step_count();
    let (done, caption) = match wizard.position() {
        WizardPosition::Step(step) => (
            step - 1,
            format!(
                "Passo {step} de {total}: {}",
                wizard.current_step().map(|s| s.title).unwrap_or_default()
            ),
        ),
        WizardPosition::Completed => (total, "Concluído".to_string()),
    };

    ui.horizontal_wrapped(|ui| {
        for (index, step) in wizard.steps().iter().enumerate() {
            let color = if index < done {
                SUCCESS
            } else if wizard.step() == Some(index + 1) {
                ACCENT
            } else {
                MUTED
            };
            ui.label(
                egui::RichText::new(format!("{} {}", index + 1, step.title))
                    .color(color)
                    .small(),
            );
            if index + 1 < total {
                ui.label(egui::RichText::new("›").color(MUTED));
            }
        }
    });
    ui.add(egui::ProgressBar::new(done as f32 / total.max(1) as f32).text(caption));
    ui.add_space(8.0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardNav {
    Back,
    Next,
    Submit,
}

/// Back/next buttons. Booking wizards get a submit button on their final
/// step instead of next; `submission` is `None` for wizards that do not book.
pub fn wizard_footer(
    ui: &mut egui::Ui,
    wizard: &Wizard,
    submission: Option<&SubmissionStatus>,
) -> Option<WizardNav> {
    let pending = submission.is_some_and(SubmissionStatus::is_pending);
    let mut nav = None;

    if let Some(SubmissionStatus::Failed(message)) = submission {
        ui.colored_label(
            egui::Color32::from_rgb(200, 80, 80),
            format!("Não foi possível confirmar: {message}"),
        );
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let back_label = if wizard.step() == Some(1) {
            "Cancelar"
        } else {
            "Voltar"
        };
        if ui.add_enabled(!pending, egui::Button::new(back_label)).clicked() {
            nav = Some(WizardNav::Back);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let submit_step = submission.is_some() && wizard.is_final_step();
            if submit_step {
                let label = match submission {
                    Some(SubmissionStatus::Submitting) => "Enviando...",
                    Some(SubmissionStatus::Failed(_)) => "Tentar novamente",
                    _ => "Confirmar",
                };
                let button =
                    egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
                        .fill(ACCENT);
                if ui
                    .add_enabled(!pending && wizard.can_advance(), button)
                    .clicked()
                {
                    nav = Some(WizardNav::Submit);
                }
            } else {
                let label = if wizard.is_final_step() {
                    "Concluir"
                } else {
                    "Próximo"
                };
                if ui
                    .add_enabled(wizard.can_advance(), egui::Button::new(label))
                    .clicked()
                {
                    nav = Some(WizardNav::Next);
                }
            }
        });
    });
    nav
}
