//! One render function per view. Renderers mutate their screen-local state
//! directly and report anything that crosses screens as a `UiAction`.

use catalog::{
    format_brl, month_name, relative_day_label, short_date_label, weekday_abbrev, Candidate,
    CalendarEvent, Catalog,
};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use eframe::egui;
use shared::{
    domain::{
        BillingCycle, CandidateId, ConsultationDuration, ConsultationType, EventKind,
        MatchDecision, MeetingType, PartnerChoice, SessionDuration, StudyLevel, StudyType,
        VideoCategory,
    },
    protocol::{BookingConfirmation, TextFilter, VideoFilter},
    ViewId,
};
use study_core::{
    flows::{
        assessment::QuestionKind, AssessmentFlow, BookingFlow, ConsultationFlow,
        ScheduleSessionFlow,
    },
    screens::{
        CalendarState, LibraryState, LibraryTab, MatchDeck, PricingState, ProfileSummary,
        QuizState, ShiurState, StudyRoomState,
    },
    MatchProfile,
};

use super::widgets::{
    badge, card, choice_row, page_header, section_title, wizard_footer, wizard_header,
    WizardNav, ACCENT, GOLD, MUTED, SUCCESS,
};

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(ViewId),
    Login,
    Logout,
    Wizard(WizardNav),
    SearchTexts(TextFilter),
    SearchVideos(VideoFilter),
    RecordDecision {
        candidate: CandidateId,
        decision: MatchDecision,
    },
    Notice(String),
}

/// Gated shortcuts listed on the dashboard, in display order.
pub const DASHBOARD_SHORTCUTS: [ViewId; 10] = [
    ViewId::StudyRoom,
    ViewId::ScheduleSession,
    ViewId::Matchmaking,
    ViewId::Library,
    ViewId::DailyQuiz,
    ViewId::WeeklyShiur,
    ViewId::RabbiConsultation,
    ViewId::Calendar,
    ViewId::Assessment,
    ViewId::Profile,
];

fn time_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn level_color(level: StudyLevel) -> egui::Color32 {
    match level {
        StudyLevel::Beginner => SUCCESS,
        StudyLevel::Intermediate => ACCENT,
        StudyLevel::Advanced => GOLD,
    }
}

fn event_kind_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Chavruta => "Chavruta",
        EventKind::Shiur => "Shiur",
        EventKind::Rabbi => "Rabino",
        EventKind::VideoClass => "Aula em vídeo",
    }
}

fn event_row(ui: &mut egui::Ui, event: &CalendarEvent) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "{} - {}",
                time_label(event.starts_at.time()),
                time_label(event.ends_at)
            ))
            .monospace(),
        );
        badge(ui, event_kind_label(event.kind), ACCENT);
        ui.label(egui::RichText::new(&event.title).strong());
        if let Some(partner) = &event.partner {
            ui.weak(format!("com {partner}"));
        }
        if let Some(location) = &event.location {
            ui.weak(location);
        }
    });
}

pub fn landing(ui: &mut egui::Ui, catalog: &Catalog, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("Chavruta Digital").size(34.0).strong());
        ui.weak("Estude Torá em dupla, de qualquer lugar, com parceiros e rabinos.");
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Entrar").clicked() {
                actions.push(UiAction::Login);
            }
            if ui.button("Ver planos").clicked() {
                actions.push(UiAction::Navigate(ViewId::Pricing));
            }
        });
    });

    ui.add_space(18.0);
    ui.horizontal_wrapped(|ui| {
        for stat in catalog.stats() {
            card(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&stat.number).size(22.0).color(GOLD));
                    ui.weak(&stat.label);
                });
            });
        }
    });

    section_title(ui, "O que dizem nossos alunos");
    for testimonial in catalog.testimonials() {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                badge(ui, &testimonial.initials, ACCENT);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&testimonial.name).strong());
                    ui.weak(format!("{} · {}", testimonial.role, testimonial.community));
                });
                ui.label(egui::RichText::new("★".repeat(testimonial.rating as usize)).color(GOLD));
            });
            ui.label(format!("“{}”", testimonial.text));
        });
        ui.add_space(6.0);
    }
}

pub fn pricing(
    ui: &mut egui::Ui,
    state: &mut PricingState,
    catalog: &Catalog,
    actions: &mut Vec<UiAction>,
) {
    page_header(ui, "Planos", "Escolha como quer estudar.");

    ui.horizontal(|ui| {
        let mut cycle = state.cycle();
        ui.selectable_value(&mut cycle, BillingCycle::Monthly, "Mensal");
        ui.selectable_value(&mut cycle, BillingCycle::Annual, "Anual");
        state.set_cycle(cycle);
    });
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for plan in catalog.pricing_plans() {
            card(ui, |ui| {
                ui.set_width(240.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&plan.name).size(20.0).strong());
                    if plan.popular {
                        badge(ui, "Mais popular", GOLD);
                    }
                });
                ui.weak(&plan.subtitle);
                if plan.is_free() {
                    ui.label(egui::RichText::new("Grátis").size(24.0));
                } else {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}/mês",
                            format_brl(plan.price_cents(state.cycle()))
                        ))
                        .size(24.0),
                    );
                }
                if state.cycle() == BillingCycle::Annual {
                    if let Some(savings) = plan.annual_savings_cents() {
                        ui.colored_label(
                            SUCCESS,
                            format!("Economize {} por ano", format_brl(savings)),
                        );
                    }
                }
                ui.separator();
                for feature in &plan.features {
                    let (mark, color) = if feature.included {
                        ("✔", SUCCESS)
                    } else {
                        ("✖", MUTED)
                    };
                    ui.horizontal(|ui| {
                        ui.colored_label(color, mark);
                        ui.label(&feature.text);
                    });
                }
                ui.add_space(6.0);
                let label = if plan.is_free() { "Começar grátis" } else { "Assinar" };
                if ui.button(label).clicked() {
                    actions.push(UiAction::Login);
                }
            });
        }
    });

    section_title(ui, "Perguntas frequentes");
    for (index, faq) in catalog.faqs().iter().enumerate() {
        let open = state.open_faq() == Some(index);
        let marker = if open { "▾" } else { "▸" };
        if ui
            .selectable_label(open, format!("{marker} {}", faq.question))
            .clicked()
        {
            state.toggle_faq(index);
        }
        if open {
            ui.indent(("faq", index), |ui| ui.label(&faq.answer));
        }
    }
}

pub fn dashboard(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    today: NaiveDate,
    match_profile: &MatchProfile,
    actions: &mut Vec<UiAction>,
) {
    page_header(ui, "Shalom!", "Continue sua jornada de estudo.");

    if let Some(level) = match_profile.level {
        ui.horizontal(|ui| {
            ui.label("Seu nível:");
            badge(ui, level.label(), level_color(level));
        });
    } else if ui.link("Faça a avaliação de perfil para melhores sugestões").clicked() {
        actions.push(UiAction::Navigate(ViewId::Assessment));
    }
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for view in DASHBOARD_SHORTCUTS {
            let button = egui::Button::new(view.title()).min_size(egui::vec2(160.0, 48.0));
            if ui.add(button).clicked() {
                actions.push(UiAction::Navigate(view));
            }
        }
    });

    section_title(ui, "Esta semana");
    let agenda = catalog.week_agenda(today);
    if agenda.is_empty() {
        ui.weak("Nenhum compromisso nos próximos dias.");
    }
    for day in agenda {
        card(ui, |ui| {
            ui.label(egui::RichText::new(&day.label).strong());
            for event in &day.events {
                event_row(ui, event);
            }
        });
        ui.add_space(4.0);
    }

    section_title(ui, "Leituras recentes");
    for recent in catalog.recent_texts() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&recent.name).strong());
            ui.weak(format!("{} · {}", recent.category, recent.last_read));
        });
    }
}

pub fn study_room(ui: &mut egui::Ui, state: &mut StudyRoomState, actions: &mut Vec<UiAction>) {
    page_header(ui, "Sala de Estudo", "Pirkei Avot 1:1 com Sarah Cohen");

    card(ui, |ui| {
        ui.set_min_height(180.0);
        ui.centered_and_justified(|ui| {
            if state.video_enabled() {
                ui.label(egui::RichText::new("Câmera ativa").color(SUCCESS));
            } else {
                ui.weak("Câmera desligada");
            }
        });
    });

    ui.horizontal(|ui| {
        let video = if state.video_enabled() { "Desligar câmera" } else { "Ligar câmera" };
        if ui.button(video).clicked() {
            state.toggle_video();
        }
        let audio = if state.audio_enabled() { "Silenciar" } else { "Ativar microfone" };
        if ui.button(audio).clicked() {
            state.toggle_audio();
        }
        if ui.button("Sair da sala").clicked() {
            actions.push(UiAction::Navigate(ViewId::Dashboard));
        }
    });

    section_title(ui, "Chat");
    for message in state.chat() {
        ui.horizontal_wrapped(|ui| {
            ui.weak(&message.time);
            ui.label(egui::RichText::new(&message.author).strong());
            ui.label(&message.body);
        });
    }
}

pub fn library(
    ui: &mut egui::Ui,
    state: &mut LibraryState,
    catalog: &Catalog,
    actions: &mut Vec<UiAction>,
) {
    page_header(ui, "Biblioteca", "Textos clássicos e aulas em vídeo.");

    ui.horizontal(|ui| {
        let mut tab = state.tab();
        ui.selectable_value(&mut tab, LibraryTab::Texts, "Textos");
        ui.selectable_value(&mut tab, LibraryTab::Videos, "Vídeos");
        state.set_tab(tab);
    });
    ui.separator();

    match state.tab() {
        LibraryTab::Texts => text_library(ui, state, catalog, actions),
        LibraryTab::Videos => video_library(ui, state, catalog, actions),
    }
}

fn text_library(
    ui: &mut egui::Ui,
    state: &mut LibraryState,
    catalog: &Catalog,
    actions: &mut Vec<UiAction>,
) {
    let mut query = state.text_filter().query.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut query).hint_text("Buscar textos..."));
    if response.changed() {
        if let Some(filter) = state.set_text_query(&query) {
            actions.push(UiAction::SearchTexts(filter));
        }
    }

    ui.horizontal_wrapped(|ui| {
        let current = state.text_filter().level;
        if ui.selectable_label(current.is_none(), "Todos").clicked() {
            if let Some(filter) = state.set_text_level(None) {
                actions.push(UiAction::SearchTexts(filter));
            }
        }
        for level in StudyLevel::ALL {
            if ui
                .selectable_label(current == Some(*level), level.label())
                .clicked()
            {
                if let Some(filter) = state.set_text_level(Some(*level)) {
                    actions.push(UiAction::SearchTexts(filter));
                }
            }
        }
    });
    ui.add_space(6.0);

    if state.texts().is_empty() {
        ui.weak("Nenhum texto encontrado.");
    }
    let mut last_category: Option<&str> = None;
    for hit in state.texts() {
        if last_category != Some(hit.category.as_str()) {
            section_title(ui, &hit.category);
            last_category = Some(hit.category.as_str());
        }
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&hit.text.name).strong());
            ui.weak(hit.text.extent.to_string());
            badge(ui, hit.text.level.label(), level_color(hit.text.level));
            if hit.text.popular {
                badge(ui, "Popular", GOLD);
            }
        });
    }

    if state.text_filter().query.is_empty() {
        section_title(ui, "Continue lendo");
        for recent in catalog.recent_texts() {
            ui.horizontal(|ui| {
                ui.label(&recent.name);
                ui.weak(&recent.last_read);
            });
        }
    }
}

fn video_library(
    ui: &mut egui::Ui,
    state: &mut LibraryState,
    catalog: &Catalog,
    actions: &mut Vec<UiAction>,
) {
    if let Some(video) = state.selected_video().cloned() {
        card(ui, |ui| {
            ui.label(egui::RichText::new(&video.title).size(20.0).strong());
            if let (Some(series), Some(episode)) = (&video.series, video.episode) {
                ui.weak(format!("{series} · Episódio {episode}"));
            }
            ui.label(&video.description);
            ui.horizontal_wrapped(|ui| {
                ui.weak(&video.duration);
                ui.weak(format!("{} visualizações", video.views));
                ui.weak(format!("★ {:.1}", video.rating));
                badge(ui, video.level.label(), level_color(video.level));
            });
            ui.horizontal_wrapped(|ui| {
                for topic in &video.topics {
                    badge(ui, topic, MUTED);
                }
            });
            if ui.button("Fechar").clicked() {
                state.close_video();
            }
        });
        return;
    }

    let mut query = state.video_filter().query.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut query).hint_text("Buscar aulas..."));
    if response.changed() {
        if let Some(filter) = state.set_video_query(&query) {
            actions.push(UiAction::SearchVideos(filter));
        }
    }

    let counts = catalog.video_category_counts();
    ui.horizontal_wrapped(|ui| {
        let current = state.video_filter().category;
        if ui
            .selectable_label(current.is_none(), format!("Todas ({})", catalog.videos().len()))
            .clicked()
        {
            if let Some(filter) = state.set_video_category(None) {
                actions.push(UiAction::SearchVideos(filter));
            }
        }
        for category in VideoCategory::ALL {
            let count = counts.get(category).copied().unwrap_or_default();
            if ui
                .selectable_label(
                    current == Some(*category),
                    format!("{} ({count})", category.label()),
                )
                .clicked()
            {
                if let Some(filter) = state.set_video_category(Some(*category)) {
                    actions.push(UiAction::SearchVideos(filter));
                }
            }
        }
    });

    if *state.video_filter() == VideoFilter::default() {
        let watching = catalog.continue_watching();
        if !watching.is_empty() {
            section_title(ui, "Continue assistindo");
            for video in watching {
                ui.horizontal(|ui| {
                    ui.label(&video.title);
                    let progress = video.progress.unwrap_or_default();
                    ui.add(
                        egui::ProgressBar::new(f32::from(progress) / 100.0)
                            .desired_width(160.0)
                            .text(format!("{progress}%")),
                    );
                });
            }
        }
    }

    section_title(ui, "Aulas");
    if state.videos().is_empty() {
        ui.weak("Nenhuma aula encontrada.");
    }
    let mut selected = None;
    for video in state.videos() {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&video.title).strong());
                        if video.is_new {
                            badge(ui, "Novo", SUCCESS);
                        }
                    });
                    ui.weak(format!("{} · {}", video.category.label(), video.duration));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Assistir").clicked() {
                        selected = Some(video.id);
                    }
                });
            });
        });
        ui.add_space(4.0);
    }
    if let Some(id) = selected {
        state.select_video(id);
    }
}

fn candidate_card(ui: &mut egui::Ui, candidate: &Candidate) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            badge(ui, &candidate.initials, ACCENT);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&candidate.name).size(20.0).strong());
                ui.weak(&candidate.location);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{}% compatível", candidate.match_score))
                        .color(SUCCESS),
                );
            });
        });
        ui.label(&candidate.bio);
        ui.horizontal_wrapped(|ui| {
            badge(ui, candidate.level.label(), level_color(candidate.level));
            for interest in &candidate.interests {
                badge(ui, interest, MUTED);
            }
        });
        ui.weak(format!("Idiomas: {}", candidate.languages.join(", ")));
        ui.weak(format!("Disponibilidade: {}", candidate.availability.join(", ")));
        ui.weak(format!("{} textos concluídos", candidate.completed_texts));
    });
}

pub fn matchmaking(
    ui: &mut egui::Ui,
    deck: &mut MatchDeck,
    remaining_hint: Option<&str>,
    actions: &mut Vec<UiAction>,
) {
    page_header(ui, "Encontrar Chavruta", "Conheça parceiros de estudo compatíveis.");

    if let Some(matched) = deck.matched().cloned() {
        card(ui, |ui| {
            ui.label(egui::RichText::new("É um match!").size(24.0).color(GOLD));
            ui.label(format!(
                "Você e {} querem estudar juntos. Agende a primeira sessão!",
                matched.name
            ));
            ui.horizontal(|ui| {
                if ui.button("Agendar sessão").clicked() {
                    actions.push(UiAction::Navigate(ViewId::ScheduleSession));
                }
                if ui.button("Continuar").clicked() {
                    deck.acknowledge_match();
                }
            });
        });
        return;
    }

    let Some(candidate) = deck.current().cloned() else {
        ui.weak("Nenhum candidato disponível no momento.");
        return;
    };

    let (position, total) = deck.position();
    ui.weak(format!("{position} de {total}"));
    candidate_card(ui, &candidate);

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Passar").clicked() {
            if let Some((candidate, decision)) = deck.pass() {
                actions.push(UiAction::RecordDecision {
                    candidate,
                    decision,
                });
            }
        }
        if ui
            .add(
                egui::Button::new(egui::RichText::new("Curtir").color(egui::Color32::WHITE))
                    .fill(ACCENT),
            )
            .clicked()
        {
            if let Some((candidate, decision)) = deck.like() {
                actions.push(UiAction::RecordDecision {
                    candidate,
                    decision,
                });
            }
        }
    });
    if let Some(hint) = remaining_hint {
        ui.add_space(6.0);
        ui.weak(hint);
    }
}

pub fn profile(
    ui: &mut egui::Ui,
    summary: &ProfileSummary,
    catalog: &Catalog,
    match_profile: &MatchProfile,
    actions: &mut Vec<UiAction>,
) {
    page_header(ui, "Perfil", "");

    ui.horizontal_wrapped(|ui| {
        card(ui, |ui| {
            ui.label(egui::RichText::new(summary.sessions.to_string()).size(22.0));
            ui.weak("sessões de estudo");
        });
        card(ui, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{}/{}",
                    summary.unlocked_achievements, summary.total_achievements
                ))
                .size(22.0),
            );
            ui.weak("conquistas");
        });
        card(ui, |ui| {
            match match_profile.level {
                Some(level) => {
                    ui.label(egui::RichText::new(level.label()).size(22.0));
                }
                None => {
                    if ui.link("Fazer avaliação").clicked() {
                        actions.push(UiAction::Navigate(ViewId::Assessment));
                    }
                }
            }
            ui.weak("nível");
        });
    });

    section_title(ui, "Conquistas");
    ui.horizontal_wrapped(|ui| {
        for achievement in catalog.achievements() {
            let color = if achievement.unlocked { GOLD } else { MUTED };
            badge(ui, &achievement.name, color);
        }
    });

    section_title(ui, "Histórico de estudo");
    egui::Grid::new("study_history")
        .striped(true)
        .num_columns(4)
        .show(ui, |ui| {
            for record in catalog.study_history() {
                ui.label(&record.text);
                ui.weak(&record.date_label);
                ui.weak(&record.duration);
                ui.label(&record.partner);
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    if ui.button("Sair").clicked() {
        actions.push(UiAction::Logout);
    }
}

pub fn daily_quiz(ui: &mut egui::Ui, quiz: &mut QuizState) {
    page_header(ui, "Quiz Diário", "Teste seus conhecimentos.");

    if quiz.is_completed() {
        card(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("{} de {}", quiz.score(), quiz.total())).size(28.0),
            );
            ui.label(format!("{}% de acertos", quiz.percentage()));
            ui.label(quiz.score_message());
            if ui.button("Refazer quiz").clicked() {
                quiz.restart();
            }
        });
        return;
    }

    let Some(question) = quiz.current().cloned() else {
        ui.weak("Nenhuma pergunta hoje.");
        return;
    };

    ui.add(
        egui::ProgressBar::new(quiz.index() as f32 / quiz.total().max(1) as f32)
            .text(format!("Pergunta {} de {}", quiz.index() + 1, quiz.total())),
    );
    ui.add_space(6.0);

    card(ui, |ui| {
        ui.horizontal(|ui| {
            badge(ui, &question.category, ACCENT);
            badge(ui, question.difficulty.label(), MUTED);
        });
        ui.label(egui::RichText::new(&question.prompt).size(18.0));
        ui.add_space(6.0);

        for (index, option) in question.options.iter().enumerate() {
            let mut text = egui::RichText::new(option);
            if quiz.is_revealed() {
                if index == question.correct_option {
                    text = text.color(SUCCESS);
                } else if quiz.selected() == Some(index) {
                    text = text.color(egui::Color32::from_rgb(200, 80, 80));
                }
            }
            if ui
                .selectable_label(quiz.selected() == Some(index), text)
                .clicked()
            {
                quiz.select(index);
            }
        }

        if quiz.is_revealed() {
            ui.add_space(6.0);
            ui.label(&question.explanation);
        }
    });

    ui.horizontal(|ui| {
        if quiz.is_revealed() {
            if ui.button("Próxima").clicked() {
                quiz.next();
            }
        } else if ui
            .add_enabled(quiz.selected().is_some(), egui::Button::new("Responder"))
            .clicked()
        {
            quiz.submit();
        }
    });
}

pub fn assessment(ui: &mut egui::Ui, flow: &mut AssessmentFlow, actions: &mut Vec<UiAction>) {
    page_header(ui, "Avaliação de Perfil", "Conte-nos sobre sua experiência.");
    wizard_header(ui, flow.wizard());

    if let Some(profile) = flow.profile() {
        card(ui, |ui| {
            ui.label(egui::RichText::new("Seu perfil").size(20.0).strong());
            ui.horizontal(|ui| {
                ui.label("Nível sugerido:");
                badge(ui, profile.level.label(), level_color(profile.level));
            });
            if !profile.recommendations.is_empty() {
                section_title(ui, "Recomendações");
                for recommendation in &profile.recommendations {
                    ui.label(format!("• {recommendation}"));
                }
            }
        });
        ui.horizontal(|ui| {
            if ui.button("Encontrar Chavruta").clicked() {
                actions.push(UiAction::Navigate(ViewId::Matchmaking));
            }
            if ui.button("Ir para o dashboard").clicked() {
                actions.push(UiAction::Navigate(ViewId::Dashboard));
            }
        });
        return;
    }

    if let Some(question) = flow.current_question() {
        ui.label(egui::RichText::new(question.title).size(18.0));
        if question.kind == QuestionKind::Multiple {
            ui.weak("Selecione todas as opções que se aplicam.");
        }
        ui.add_space(6.0);
        for option in question.options {
            let selected = flow.is_selected(question.key, option.value);
            let text = match option.description {
                Some(description) => format!("{}  ({description})", option.label),
                None => option.label.to_string(),
            };
            if ui.selectable_label(selected, text).clicked() {
                if let Err(err) = flow.select(option.value) {
                    actions.push(UiAction::Notice(err.to_string()));
                }
            }
        }
    }

    if let Some(nav) = wizard_footer(ui, flow.wizard(), None) {
        actions.push(UiAction::Wizard(nav));
    }
}

pub fn schedule_session(
    ui: &mut egui::Ui,
    flow: &mut ScheduleSessionFlow,
    today: NaiveDate,
    actions: &mut Vec<UiAction>,
) {
    page_header(ui, "Agendar Sessão", "Marque um estudo em dupla.");
    wizard_header(ui, flow.wizard());
    let pending = flow.submission().is_pending();

    ui.add_enabled_ui(!pending, |ui| match flow.wizard().step() {
        Some(1) => {
            ui.label("Tipo de estudo");
            if let Some(study_type) =
                choice_row(ui, flow.study_type(), StudyType::ALL, |t| t.label().to_string())
            {
                flow.choose_study_type(study_type);
            }
            ui.label("Duração");
            if let Some(duration) = choice_row(ui, flow.duration(), SessionDuration::ALL, |d| {
                d.label().to_string()
            }) {
                flow.choose_duration(duration);
            }
            ui.label("Tema (opcional)");
            let mut topic = flow.topic().unwrap_or_default().to_string();
            if ui
                .add(egui::TextEdit::singleline(&mut topic).hint_text("Ex.: Parashat Bereshit"))
                .changed()
            {
                flow.set_topic(&topic);
            }
        }
        Some(2) => {
            ui.label("Data");
            let dates = flow.available_dates().to_vec();
            let picked = choice_row(ui, flow.date(), &dates, |d| relative_day_label(d, today));
            if let Some(date) = picked {
                if let Err(err) = flow.choose_date(date) {
                    actions.push(UiAction::Notice(err.to_string()));
                }
            }
            ui.label("Horário");
            let times = flow.time_slots().to_vec();
            if let Some(time) = choice_row(ui, flow.time(), &times, time_label) {
                if let Err(err) = flow.choose_time(time) {
                    actions.push(UiAction::Notice(err.to_string()));
                }
            }
        }
        Some(3) => {
            let choice = flow.partner_choice();
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(choice == Some(PartnerChoice::Ai), "Sugestão automática")
                    .clicked()
                {
                    flow.choose_ai_partner();
                }
                if ui
                    .selectable_label(choice == Some(PartnerChoice::Specific), "Escolher parceiro")
                    .clicked()
                {
                    flow.choose_specific_partner();
                }
            });
            if flow.partner_choice() == Some(PartnerChoice::Specific) {
                let chosen = flow.partner().map(|p| p.id);
                let partners = flow.partners().to_vec();
                for partner in partners {
                    let label = format!("{} · {}", partner.name, partner.level.label());
                    if ui.selectable_label(chosen == Some(partner.id), label).clicked() {
                        if let Err(err) = flow.choose_partner(partner.id) {
                            actions.push(UiAction::Notice(err.to_string()));
                        }
                    }
                }
            } else {
                ui.weak("Encontraremos o parceiro mais compatível com o seu perfil.");
            }
        }
        Some(_) => {
            card(ui, |ui| {
                ui.label(egui::RichText::new("Resumo").strong());
                if let Some(study_type) = flow.study_type() {
                    ui.label(format!("Estudo: {}", study_type.label()));
                }
                if let Some(duration) = flow.duration() {
                    ui.label(format!("Duração: {}", duration.label()));
                }
                if let Some(topic) = flow.topic() {
                    ui.label(format!("Tema: {topic}"));
                }
                if let (Some(date), Some(time)) = (flow.date(), flow.time()) {
                    ui.label(format!("Quando: {} às {}", short_date_label(date), time_label(time)));
                }
                let partner = flow
                    .partner()
                    .map_or("Sugestão automática".to_string(), |p| p.name.clone());
                ui.label(format!("Parceiro: {partner}"));
            });
        }
        None => {}
    });

    if let Some(nav) = wizard_footer(ui, flow.wizard(), Some(flow.submission())) {
        actions.push(UiAction::Wizard(nav));
    }
}

pub fn rabbi_consultation(
    ui: &mut egui::Ui,
    flow: &mut ConsultationFlow,
    today: NaiveDate,
    actions: &mut Vec<UiAction>,
) {
    page_header(ui, "Consulta com Rabino", "Orientação individual com nossos rabinos.");
    wizard_header(ui, flow.wizard());
    let pending = flow.submission().is_pending();

    ui.add_enabled_ui(!pending, |ui| match flow.wizard().step() {
        Some(1) => {
            ui.label("Assunto");
            let current = flow.consultation_type();
            for kind in ConsultationType::ALL {
                let text = format!("{}  ({})", kind.label(), kind.description());
                if ui.selectable_label(current == Some(*kind), text).clicked() {
                    flow.choose_type(*kind);
                }
            }
            ui.label("Duração");
            if let Some(duration) = choice_row(ui, flow.duration(), ConsultationDuration::ALL, |d| {
                format!("{} min · {}", d.minutes(), d.description())
            }) {
                flow.choose_duration(duration);
            }
            ui.label("Formato");
            ui.horizontal_wrapped(|ui| {
                for meeting in MeetingType::ALL {
                    let label = if meeting.is_available() {
                        meeting.label().to_string()
                    } else {
                        format!("{} (em breve)", meeting.label())
                    };
                    let response = ui.add_enabled(
                        meeting.is_available(),
                        egui::Button::new(label).selected(flow.meeting_type() == Some(*meeting)),
                    );
                    if response.clicked() {
                        if let Err(err) = flow.choose_meeting_type(*meeting) {
                            actions.push(UiAction::Notice(err.to_string()));
                        }
                    }
                }
            });
        }
        Some(2) => {
            ui.label("Data");
            let dates = flow.calendar_dates().to_vec();
            ui.horizontal_wrapped(|ui| {
                for date in dates {
                    let shabbat = date.weekday() == Weekday::Sat;
                    let response = ui.add_enabled(
                        !shabbat,
                        egui::Button::new(relative_day_label(date, today))
                            .selected(flow.date() == Some(date)),
                    );
                    if response.clicked() {
                        if let Err(err) = flow.choose_date(date) {
                            actions.push(UiAction::Notice(err.to_string()));
                        }
                    }
                }
            });
            ui.weak("Não há consultas no Shabat.");
            ui.label("Horário");
            let times = flow.time_slots().to_vec();
            if let Some(time) = choice_row(ui, flow.time(), &times, time_label) {
                if let Err(err) = flow.choose_time(time) {
                    actions.push(UiAction::Notice(err.to_string()));
                }
            }
        }
        Some(3) => {
            ui.label("Observações para o rabino (opcional)");
            let mut notes = flow.notes().unwrap_or_default().to_string();
            if ui
                .add(
                    egui::TextEdit::multiline(&mut notes)
                        .desired_rows(5)
                        .hint_text("Descreva brevemente o que gostaria de conversar"),
                )
                .changed()
            {
                flow.set_notes(&notes);
            }
        }
        Some(_) => {
            card(ui, |ui| {
                ui.label(egui::RichText::new("Resumo").strong());
                if let Some(kind) = flow.consultation_type() {
                    ui.label(format!("Assunto: {}", kind.label()));
                }
                if let Some(duration) = flow.duration() {
                    ui.label(format!("Duração: {} min", duration.minutes()));
                }
                if let Some(meeting) = flow.meeting_type() {
                    ui.label(format!("Formato: {}", meeting.label()));
                }
                if let (Some(date), Some(time)) = (flow.date(), flow.time()) {
                    ui.label(format!("Quando: {} às {}", short_date_label(date), time_label(time)));
                }
                if let Some(notes) = flow.notes() {
                    ui.label(format!("Observações: {notes}"));
                }
            });
        }
        None => {}
    });

    if let Some(nav) = wizard_footer(ui, flow.wizard(), Some(flow.submission())) {
        actions.push(UiAction::Wizard(nav));
    }
}

pub fn weekly_shiur(
    ui: &mut egui::Ui,
    state: &mut ShiurState,
    catalog: &Catalog,
    now: NaiveTime,
    today: NaiveDate,
) {
    page_header(ui, "Shiur Semanal", "Aula ao vivo com o Rabino.");

    ui.horizontal(|ui| {
        badge(ui, "AO VIVO", egui::Color32::from_rgb(200, 60, 60));
        ui.weak(format!("{} assistindo", state.viewers()));
        let label = if state.notifications_enabled() {
            "Notificações ativas"
        } else {
            "Notificações desativadas"
        };
        if ui.button(label).clicked() {
            state.toggle_notifications();
        }
    });

    section_title(ui, "Chat ao vivo");
    egui::ScrollArea::vertical()
        .id_salt("shiur_chat")
        .max_height(240.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in state.messages() {
                ui.horizontal_wrapped(|ui| {
                    ui.weak(&message.time);
                    ui.label(egui::RichText::new(&message.author).strong());
                    ui.label(&message.body);
                });
            }
        });

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(state.draft_mut()).hint_text("Envie uma pergunta..."),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Enviar").clicked() || submitted {
            state.send(now);
        }
    });

    section_title(ui, "Próximos shiurim");
    for shiur in catalog.upcoming_shiurim() {
        card(ui, |ui| {
            ui.label(egui::RichText::new(&shiur.title).strong());
            ui.weak(format!(
                "{} às {} · {}",
                relative_day_label(shiur.starts_at.date(), today),
                time_label(shiur.starts_at.time()),
                shiur.duration
            ));
            ui.label(&shiur.description);
        });
        ui.add_space(4.0);
    }

    section_title(ui, "Gravações");
    for recorded in catalog.recorded_shiurim() {
        ui.horizontal(|ui| {
            ui.label(&recorded.title);
            ui.weak(format!(
                "{} · {} · {} visualizações",
                recorded.date_label, recorded.duration, recorded.views
            ));
        });
    }
}

pub fn calendar(ui: &mut egui::Ui, state: &mut CalendarState, catalog: &Catalog) {
    page_header(ui, "Calendário", "Seus estudos, shiurim e consultas.");

    let (year, month) = state.displayed_month();
    ui.horizontal(|ui| {
        if ui.button("‹").clicked() {
            state.previous_month();
        }
        ui.label(egui::RichText::new(format!("{} {year}", month_name(month))).strong());
        if ui.button("›").clicked() {
            state.next_month();
        }
    });

    let (year, month) = state.displayed_month();
    let marked = state.days_with_events(catalog);
    let selected = state.selected();
    let today = state.today();
    let mut clicked = None;
    egui::Grid::new("month_grid")
        .num_columns(7)
        .spacing(egui::vec2(6.0, 6.0))
        .show(ui, |ui| {
            for weekday in [
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ] {
                ui.weak(weekday_abbrev(weekday));
            }
            ui.end_row();

            for (cell, day) in state.month_grid().into_iter().enumerate() {
                match day.and_then(|d| NaiveDate::from_ymd_opt(year, month, d)) {
                    Some(date) => {
                        let mut text = egui::RichText::new(format!("{:>2}", date.day()));
                        if date == today {
                            text = text.strong().color(GOLD);
                        }
                        if marked.contains(&date.day()) {
                            text = text.underline();
                        }
                        if ui.selectable_label(date == selected, text).clicked() {
                            clicked = Some(date);
                        }
                    }
                    None => {
                        ui.label("");
                    }
                }
                if cell % 7 == 6 {
                    ui.end_row();
                }
            }
        });
    if let Some(date) = clicked {
        state.select(date);
    }

    section_title(ui, &short_date_label(state.selected()));
    let events = state.selected_events(catalog);
    if events.is_empty() {
        ui.weak("Nenhum evento neste dia.");
    }
    for event in events {
        event_row(ui, event);
        if let Some(description) = &event.description {
            ui.weak(description);
        }
    }

    section_title(ui, "Próximos eventos");
    for event in state.upcoming(catalog) {
        ui.horizontal(|ui| {
            ui.weak(relative_day_label(event.date(), today));
            event_row(ui, event);
        });
    }
}

/// Banner text for a booking confirmation.
pub fn confirmation_notice(confirmation: &BookingConfirmation) -> String {
    format!(
        "Agendamento confirmado ({}): {} às {}, {} min",
        confirmation.confirmation_id,
        short_date_label(confirmation.starts_at.date()),
        time_label(confirmation.starts_at.time()),
        confirmation.duration_minutes
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use shared::protocol::ConfirmationId;

    use super::*;

    #[test]
    fn dashboard_shortcuts_are_all_gated_views() {
        assert!(DASHBOARD_SHORTCUTS.iter().all(|view| !view.is_public()));
        let mut unique = DASHBOARD_SHORTCUTS.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), DASHBOARD_SHORTCUTS.len());
    }

    #[test]
    fn confirmation_notice_names_slot_and_id() {
        let starts_at = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2025, 11, 20).expect("date"),
            NaiveTime::from_hms_opt(19, 0, 0).expect("time"),
        );
        let notice = confirmation_notice(&BookingConfirmation {
            confirmation_id: ConfirmationId("CHV-0003".into()),
            starts_at,
            duration_minutes: 90,
        });
        assert_eq!(
            notice,
            "Agendamento confirmado (CHV-0003): Qui, 20 Nov às 19:00, 90 min"
        );
    }
}
