use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use shared::domain::{
    CandidateId, EventId, EventKind, PartnerId, QuestionId, ShiurId, StudyLevel, TextId,
    VideoCategory, VideoId,
};

use crate::{
    Achievement, CalendarEvent, Candidate, ChatMessage, Difficulty, Faq, PlanFeature, PricingPlan,
    QuizQuestion, RecentText, RecordedShiur, Shiur, Stat, StudyRecord, Testimonial, TextCategory,
    TextEntry, TextExtent, VideoEntry,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

struct TextSeed(&'static str, TextExtentSeed, StudyLevel, bool);

enum TextExtentSeed {
    Chapters(u32),
    Label(&'static str),
}

use StudyLevel::{Advanced, Beginner, Intermediate};
use TextExtentSeed::{Chapters, Label};

fn category(
    next_id: &mut i64,
    title: &str,
    icon: &str,
    seeds: Vec<TextSeed>,
) -> TextCategory {
    let texts = seeds
        .into_iter()
        .map(|TextSeed(name, extent, level, popular)| {
            *next_id += 1;
            TextEntry {
                id: TextId(*next_id),
                name: name.to_string(),
                extent: match extent {
                    Chapters(n) => TextExtent::Chapters(n),
                    Label(label) => TextExtent::Label(label.to_string()),
                },
                level,
                popular,
            }
        })
        .collect();
    TextCategory {
        title: title.to_string(),
        icon: icon.to_string(),
        texts,
    }
}

pub(crate) fn text_categories() -> Vec<TextCategory> {
    let mut id = 0;
    vec![
        category(
            &mut id,
            "Torá",
            "📜",
            vec![
                TextSeed("Bereshit (Gênesis)", Chapters(50), Beginner, false),
                TextSeed("Shemot (Êxodo)", Chapters(40), Beginner, false),
                TextSeed("Vayikra (Levítico)", Chapters(27), Intermediate, false),
                TextSeed("Bamidbar (Números)", Chapters(36), Intermediate, false),
                TextSeed("Devarim (Deuteronômio)", Chapters(34), Beginner, false),
            ],
        ),
        category(
            &mut id,
            "Mishná",
            "📖",
            vec![
                TextSeed("Berachot", Chapters(9), Beginner, true),
                TextSeed("Shabat", Chapters(24), Intermediate, false),
                TextSeed("Pirkei Avot", Chapters(6), Beginner, true),
                TextSeed("Pesachim", Chapters(10), Intermediate, false),
                TextSeed("Yoma", Chapters(8), Advanced, false),
            ],
        ),
        category(
            &mut id,
            "Halachá (Lei Judaica)",
            "⚖️",
            vec![
                TextSeed("Shulchan Aruch - Orach Chaim", Label("697 Seções"), Advanced, true),
                TextSeed("Shulchan Aruch - Yoreh Deah", Label("403 Seções"), Advanced, false),
                TextSeed("Mishné Torá - Rambam", Label("14 Livros"), Advanced, false),
                TextSeed("Kitzur Shulchan Aruch", Label("221 Capítulos"), Intermediate, true),
                TextSeed("Hilchot Shabat", Label("Compilação"), Intermediate, false),
            ],
        ),
        category(
            &mut id,
            "Ética e Mussar",
            "💎",
            vec![
                TextSeed("Pirkei Avot", Chapters(6), Beginner, true),
                TextSeed("Mesilat Yesharim", Chapters(26), Intermediate, true),
                TextSeed("Orchot Tzadikim", Chapters(28), Intermediate, false),
                TextSeed("Chovot HaLevavot", Chapters(10), Advanced, false),
                TextSeed("Shaarei Teshuvá", Chapters(4), Intermediate, false),
            ],
        ),
        category(
            &mut id,
            "Comentários da Torá",
            "✨",
            vec![
                TextSeed("Rashi sobre Torá", Label("Completo"), Beginner, true),
                TextSeed("Ramban (Nachmanides)", Label("Completo"), Intermediate, false),
                TextSeed("Ibn Ezra", Label("Completo"), Intermediate, false),
                TextSeed("Sforno", Label("Completo"), Intermediate, false),
                TextSeed("Or HaChaim", Label("Completo"), Advanced, false),
            ],
        ),
        category(
            &mut id,
            "Filosofia Judaica",
            "🌟",
            vec![
                TextSeed("Moreh Nevuchim (Guia dos Perplexos)", Chapters(3), Advanced, true),
                TextSeed("Kuzari", Chapters(5), Intermediate, true),
                TextSeed("Emunot VeDeot", Chapters(10), Advanced, false),
                TextSeed("Derech Hashem", Chapters(4), Intermediate, false),
                TextSeed("Sefer HaIkkarim", Chapters(4), Advanced, false),
            ],
        ),
    ]
}

pub(crate) fn recent_texts() -> Vec<RecentText> {
    [
        ("Mishná Berachot 2", "Mishná", "Hoje"),
        ("Parashat Bereshit", "Torá", "Ontem"),
        ("Pirkei Avot 1", "Mishná", "Há 2 dias"),
    ]
    .into_iter()
    .map(|(name, category, last_read)| RecentText {
        name: name.into(),
        category: category.into(),
        last_read: last_read.into(),
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn video(
    id: i64,
    title: &str,
    description: &str,
    duration: &str,
    category: VideoCategory,
    series: Option<&str>,
    views: u64,
    rating: f32,
    level: StudyLevel,
    progress: Option<u8>,
    is_new: bool,
    topics: &[&str],
) -> VideoEntry {
    VideoEntry {
        id: VideoId(id),
        title: title.into(),
        description: description.into(),
        duration: duration.into(),
        category,
        series: series.map(str::to_string),
        episode: series.map(|_| 1),
        views,
        rating,
        level,
        progress,
        is_new,
        topics: strings(topics),
    }
}

pub(crate) fn videos() -> Vec<VideoEntry> {
    vec![
        video(
            1,
            "Introdução ao Estudo da Torá",
            "Uma visão geral sobre como abordar o estudo da Torá de forma sistemática e significativa. Aprenda os métodos tradicionais e modernos de interpretação.",
            "45:30",
            VideoCategory::Torah,
            Some("Fundamentos da Torá"),
            12_500,
            4.9,
            Beginner,
            Some(75),
            false,
            &["Métodos de Estudo", "Pardes", "Interpretação"],
        ),
        video(
            2,
            "Parashat Bereshit - A Criação do Mundo",
            "Estudo profundo da primeira porção da Torá, explorando os mistérios da criação segundo os grandes comentaristas.",
            "1:12:45",
            VideoCategory::Torah,
            Some("Parashat Hashavua"),
            8_900,
            5.0,
            Intermediate,
            None,
            true,
            &["Bereshit", "Criação", "Shabat"],
        ),
        video(
            3,
            "Leis de Shabat - Parte 1",
            "Fundamentos das leis do Shabat segundo a Halachá. Aprenda as 39 categorias de trabalho proibido e suas aplicações práticas.",
            "58:20",
            VideoCategory::Halacha,
            Some("Hilchot Shabat"),
            15_600,
            4.8,
            Intermediate,
            Some(30),
            false,
            &["Shabat", "Melachot", "Halachá Prática"],
        ),
        video(
            4,
            "Pirkei Avot - Capítulo 1",
            "Estudo verso a verso da Ética dos Pais, explorando a sabedoria milenar dos sábios sobre conduta moral e desenvolvimento espiritual.",
            "52:15",
            VideoCategory::Ethics,
            Some("Pirkei Avot Completo"),
            20_300,
            5.0,
            Beginner,
            None,
            false,
            &["Ética", "Mussar", "Sabedoria"],
        ),
        video(
            5,
            "Rashi - Metodologia de Comentário",
            "Entenda como Rashi revolucionou o estudo da Torá com seu método conciso e profundo de explicação.",
            "1:05:30",
            VideoCategory::Commentaries,
            None,
            6_700,
            4.7,
            Advanced,
            None,
            true,
            &["Rashi", "Comentários", "Exegese"],
        ),
        video(
            6,
            "A Filosofia de Rambam",
            "Explore o pensamento filosófico de Maimônides e sua influência na tradição judaica e mundial.",
            "1:28:40",
            VideoCategory::Philosophy,
            Some("Grandes Filósofos do Judaísmo"),
            9_200,
            4.9,
            Advanced,
            None,
            false,
            &["Rambam", "Filosofia", "Razão e Fé"],
        ),
        video(
            7,
            "Bênçãos Diárias - Birchot Hashachar",
            "Significado profundo e prático das bênçãos matinais que recitamos diariamente.",
            "42:10",
            VideoCategory::Prayer,
            Some("Guia de Oração"),
            11_400,
            4.8,
            Beginner,
            Some(100),
            false,
            &["Berachot", "Tefillá", "Kavanah"],
        ),
        video(
            8,
            "Mesilat Yesharim - O Caminho dos Justos",
            "Estudo clássico de Mussar sobre os degraus do desenvolvimento espiritual segundo o Ramchal.",
            "1:15:25",
            VideoCategory::Ethics,
            Some("Mesilat Yesharim"),
            7_800,
            5.0,
            Intermediate,
            None,
            true,
            &["Mussar", "Ramchal", "Desenvolvimento Espiritual"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: i64,
    title: &str,
    starts_at: NaiveDateTime,
    ends_at: NaiveTime,
    kind: EventKind,
    partner: Option<&str>,
    location: &str,
    description: &str,
) -> CalendarEvent {
    CalendarEvent {
        id: EventId(id),
        title: title.into(),
        starts_at,
        ends_at,
        kind,
        partner: partner.map(str::to_string),
        location: Some(location.to_string()),
        description: Some(description.to_string()),
    }
}

pub(crate) fn calendar_events() -> Vec<CalendarEvent> {
    vec![
        event(
            1,
            "Chavruta com Moshe Cohen",
            at(2025, 11, 16, 19, 0),
            clock(20, 30),
            EventKind::Chavruta,
            Some("Moshe Cohen"),
            "Sala Virtual",
            "Estudo de Pirkei Avot - Capítulo 2",
        ),
        event(
            2,
            "Shiur Semanal - Parashat Vayera",
            at(2025, 11, 18, 20, 0),
            clock(21, 0),
            EventKind::Shiur,
            None,
            "Transmissão Ao Vivo",
            "Com Rabino Yosef",
        ),
        event(
            3,
            "Consulta com Rabino",
            at(2025, 11, 17, 15, 0),
            clock(15, 30),
            EventKind::Rabbi,
            None,
            "Videochamada",
            "Dúvidas sobre kashrut",
        ),
        event(
            4,
            "Chavruta com Sarah Levy",
            at(2025, 11, 19, 18, 0),
            clock(19, 30),
            EventKind::Chavruta,
            Some("Sarah Levy"),
            "Sala Virtual",
            "Estudo de Talmud - Tratado Berachot",
        ),
        event(
            5,
            "Aula: Introdução ao Talmud",
            at(2025, 11, 20, 21, 0),
            clock(22, 0),
            EventKind::VideoClass,
            None,
            "Vídeo Aula",
            "Série Fundamentos - Episódio 3",
        ),
        event(
            6,
            "Chavruta com Moshe Cohen",
            at(2025, 11, 20, 19, 0),
            clock(20, 30),
            EventKind::Chavruta,
            Some("Moshe Cohen"),
            "Sala Virtual",
            "Continuação Pirkei Avot",
        ),
        event(
            7,
            "Shiur Semanal - Chayei Sarah",
            at(2025, 11, 25, 20, 0),
            clock(21, 0),
            EventKind::Shiur,
            None,
            "Transmissão Ao Vivo",
            "Com Rabino Yosef",
        ),
    ]
}

pub(crate) fn upcoming_shiurim() -> Vec<Shiur> {
    [
        (
            1,
            "Parashat Vayera - A Hospitalidade de Avraham",
            at(2025, 11, 20, 20, 0),
            "60 minutos",
            "Parashat Hashavua",
            "Análise profunda da hospitalidade de Avraham Avinu e suas lições para nós hoje.",
        ),
        (
            2,
            "Halachá Prática: Berachot",
            at(2025, 11, 23, 19, 30),
            "45 minutos",
            "Halachá",
            "Leis práticas sobre bênçãos no dia a dia.",
        ),
        (
            3,
            "Pirkei Avot - Sabedoria dos Sábios",
            at(2025, 11, 27, 20, 0),
            "60 minutos",
            "Ética",
            "Explorando as máximas éticas dos nossos sábios.",
        ),
    ]
    .into_iter()
    .map(|(id, title, starts_at, duration, topic, description)| Shiur {
        id: ShiurId(id),
        title: title.into(),
        starts_at,
        duration: duration.into(),
        topic: topic.into(),
        description: description.into(),
    })
    .collect()
}

pub(crate) fn recorded_shiurim() -> Vec<RecordedShiur> {
    [
        (
            1,
            "Parashat Lech Lecha - A Jornada de Avraham",
            "13 de Novembro, 2025",
            "58:42",
            234,
            "Parashat Hashavua",
        ),
        (2, "Introdução ao Talmud Bavli", "10 de Novembro, 2025", "52:15", 189, "Talmud"),
        (3, "Shabat: Santidade no Tempo", "6 de Novembro, 2025", "1:05:30", 312, "Halachá"),
        (4, "Rambam: Os 13 Princípios da Fé", "3 de Novembro, 2025", "1:12:18", 278, "Filosofia"),
        (5, "Tehilim: A Poesia dos Salmos", "30 de Outubro, 2025", "48:25", 156, "Tanach"),
        (
            6,
            "Chassidut: Alegria no Serviço Divino",
            "27 de Outubro, 2025",
            "55:33",
            198,
            "Chassidut",
        ),
    ]
    .into_iter()
    .map(|(id, title, date_label, duration, views, topic)| RecordedShiur {
        id: ShiurId(id),
        title: title.into(),
        date_label: date_label.into(),
        duration: duration.into(),
        views,
        topic: topic.into(),
    })
    .collect()
}

fn chat(seed: &[(&str, &str, &str)]) -> Vec<ChatMessage> {
    seed.iter()
        .enumerate()
        .map(|(idx, (author, body, time))| ChatMessage {
            id: idx as u32 + 1,
            author: author.to_string(),
            body: body.to_string(),
            time: time.to_string(),
        })
        .collect()
}

pub(crate) fn shiur_chat() -> Vec<ChatMessage> {
    chat(&[
        ("David S.", "Shalom Rabino! Muito feliz por estar aqui hoje", "20:05"),
        ("Sarah L.", "Excelente explicação sobre Rashi!", "20:12"),
        ("Moshe K.", "Poderia repetir o último ponto sobre Avraham?", "20:18"),
        ("Rabino Yosef", "Com prazer! Vou retomar esse ponto agora.", "20:19"),
        ("Rachel M.", "Toda raba Rabino! Muito esclarecedor", "20:25"),
    ])
}

pub(crate) fn study_room_chat() -> Vec<ChatMessage> {
    chat(&[
        ("Rafael", "Shalom! Pronto para começar?", "18:55"),
        ("Você", "Sim! Vamos estudar Berachot 2a?", "18:56"),
        ("Rafael", "Perfeito! Vou compartilhar o texto.", "18:56"),
    ])
}

pub(crate) fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: CandidateId(1),
            name: "Sarah Cohen".into(),
            initials: "SC".into(),
            location: "São Paulo, Brasil".into(),
            level: Intermediate,
            interests: strings(&["Mishná", "Pirkei Avot", "Halachá"]),
            languages: strings(&["Português", "Inglês", "Hebraico"]),
            availability: strings(&["Seg 19h-21h", "Qua 20h-22h", "Dom 10h-12h"]),
            match_score: 95,
            bio: "Baala teshuvá há 3 anos, apaixonada por Pirkei Avot e buscando aprofundar estudo de Mishná.".into(),
            completed_texts: 12,
        },
        Candidate {
            id: CandidateId(2),
            name: "Moshe Levi".into(),
            initials: "ML".into(),
            location: "Rio de Janeiro, Brasil".into(),
            level: Advanced,
            interests: strings(&["Guemará", "Rashi", "Tosafot"]),
            languages: strings(&["Português", "Hebraico", "Aramaico"]),
            availability: strings(&["Ter 18h-20h", "Qui 19h-21h", "Sáb após shabat"]),
            match_score: 87,
            bio: "Estudante de yeshivá procurando chavruta para Daf Yomi e estudo aprofundado de Guemará.".into(),
            completed_texts: 24,
        },
        Candidate {
            id: CandidateId(3),
            name: "Rebecca Goldstein".into(),
            initials: "RG".into(),
            location: "Belo Horizonte, Brasil".into(),
            level: Beginner,
            interests: strings(&["Torá", "Parashat Hashavua", "Ética Judaica"]),
            languages: strings(&["Português", "Inglês"]),
            availability: strings(&["Seg 20h-21h", "Sex 16h-18h"]),
            match_score: 92,
            bio: "Em processo de guiyur, buscando parceira de estudo para aprender fundamentos da Torá.".into(),
            completed_texts: 5,
        },
        Candidate {
            id: CandidateId(4),
            name: "Daniel Schwartz".into(),
            initials: "DS".into(),
            location: "Curitiba, Brasil".into(),
            level: Intermediate,
            interests: strings(&["Mishná", "Rambam", "Filosofia Judaica"]),
            languages: strings(&["Português", "Espanhol", "Hebraico"]),
            availability: strings(&["Qua 19h-21h", "Sex 20h-22h", "Dom 15h-17h"]),
            match_score: 89,
            bio: "Professor de história judaica buscando aprofundar conhecimento em textos clássicos.".into(),
            completed_texts: 18,
        },
    ]
}

pub(crate) fn suggested_partners() -> Vec<crate::SuggestedPartner> {
    [
        (1, "Rafael Mendelsohn", "RM", Intermediate),
        (2, "Sarah Cohen", "SC", Advanced),
        (3, "Daniel Levy", "DL", Intermediate),
        (4, "Miriam Goldstein", "MG", Beginner),
    ]
    .into_iter()
    .map(|(id, name, initials, level)| crate::SuggestedPartner {
        id: PartnerId(id),
        name: name.into(),
        initials: initials.into(),
        level,
    })
    .collect()
}

pub(crate) fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: QuestionId(1),
            prompt: "Qual é o primeiro mandamento (mitzvá) dado na Torá?".into(),
            options: strings(&[
                "Não matarás",
                "Honra teu pai e tua mãe",
                "Sejam frutíferos e multipliquem-se",
                "Guardar o Shabat",
            ]),
            correct_option: 2,
            explanation: "O primeiro mandamento dado na Torá é \"Sejam frutíferos e multipliquem-se\" (פְּרוּ וּרְבוּ), dado a Adão e Eva em Bereshit 1:28.".into(),
            category: "Torá".into(),
            difficulty: Difficulty::Medium,
        },
        QuizQuestion {
            id: QuestionId(2),
            prompt: "Quantas bênçãos são recitadas diariamente na Amidá em dias de semana?".into(),
            options: strings(&["7 bênçãos", "13 bênçãos", "18 bênçãos", "19 bênçãos"]),
            correct_option: 3,
            explanation: "A Amidá (Shemoná Esrê) contém 19 bênçãos em dias de semana. Originalmente eram 18, mas uma 19ª foi adicionada posteriormente.".into(),
            category: "Tefillá".into(),
            difficulty: Difficulty::Medium,
        },
        QuizQuestion {
            id: QuestionId(3),
            prompt: "Segundo Pirkei Avot, quem é considerado rico?".into(),
            options: strings(&[
                "Quem possui muitas terras",
                "Quem se alegra com sua porção",
                "Quem tem muitos filhos",
                "Quem conhece toda a Torá",
            ]),
            correct_option: 1,
            explanation: "Em Pirkei Avot 4:1, ensina-se: \"Quem é rico? Aquele que se alegra com sua porção\" (איזהו עשיר? השמח בחלקו).".into(),
            category: "Ética".into(),
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: QuestionId(4),
            prompt: "Qual é o nome hebraico para o Êxodo?".into(),
            options: strings(&["Bereshit", "Shemot", "Vayikra", "Devarim"]),
            correct_option: 1,
            explanation: "Shemot (שְׁמוֹת) significa \"nomes\" e é o nome hebraico do segundo livro da Torá, conhecido em português como Êxodo.".into(),
            category: "Torá".into(),
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: QuestionId(5),
            prompt: "Quantas porções (sidrot) de leitura da Torá existem no ciclo anual?".into(),
            options: strings(&["50", "52", "54", "56"]),
            correct_option: 2,
            explanation: "Existem 54 porções semanais (parashat hashavua) no ciclo anual de leitura da Torá, embora algumas sejam combinadas em certos anos.".into(),
            category: "Torá".into(),
            difficulty: Difficulty::Hard,
        },
    ]
}

fn features(seed: &[(bool, &str)]) -> Vec<PlanFeature> {
    seed.iter()
        .map(|(included, text)| PlanFeature {
            included: *included,
            text: text.to_string(),
        })
        .collect()
}

pub(crate) fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Gratuito".into(),
            subtitle: "Para começar sua jornada".into(),
            monthly_cents: 0,
            annual_cents: 0,
            popular: false,
            features: features(&[
                (true, "Acesso a textos básicos da Torá"),
                (true, "3 sessões de chavruta por mês"),
                (true, "Assistente IA básico"),
                (true, "Gamificação e badges"),
                (false, "Biblioteca completa"),
                (false, "Sessões ilimitadas"),
                (false, "IA avançada"),
                (false, "Prioridade no pareamento"),
            ]),
        },
        PricingPlan {
            name: "Premium".into(),
            subtitle: "Para estudantes dedicados".into(),
            monthly_cents: 7_700,
            annual_cents: 6_170,
            popular: true,
            features: features(&[
                (true, "Biblioteca completa de textos"),
                (true, "Sessões ilimitadas de chavruta"),
                (true, "Assistente IA avançado"),
                (true, "Gamificação completa"),
                (true, "Prioridade no pareamento"),
                (true, "Trilhas personalizadas"),
                (true, "Suporte prioritário"),
                (true, "Consultoria com rabinos"),
            ]),
        },
        PricingPlan {
            name: "Institucional".into(),
            subtitle: "Para comunidades e yeshivot".into(),
            monthly_cents: 27_700,
            annual_cents: 22_770,
            popular: false,
            features: features(&[
                (true, "Tudo do plano Premium"),
                (true, "Até 50 usuários incluídos"),
                (true, "Dashboard administrativo"),
                (true, "Consultoria com rabinos"),
                (true, "Conteúdo personalizado"),
                (true, "Relatórios de progresso"),
                (true, "Integração com eventos"),
                (true, "Suporte dedicado 24/7"),
            ]),
        },
    ]
}

pub(crate) fn testimonials() -> Vec<Testimonial> {
    [
        (
            "Rabbi David Cohen",
            "Rabino e Educador",
            "Comunidade Shalom, SP",
            "A Chavruta Digital revolucionou a forma como nossa comunidade estuda Torá. O pareamento por IA é incrivelmente preciso e os recursos educacionais são autênticos e profundos.",
            "DC",
        ),
        (
            "Sarah Goldstein",
            "Baala Teshuvá",
            "Rio de Janeiro",
            "Como alguém em processo de retorno, encontrar um chavruta adequado ao meu nível era impossível. Esta plataforma mudou minha vida judaica completamente!",
            "SG",
        ),
        (
            "Moshe Levi",
            "Estudante de Yeshivá",
            "Beit Midrash Online",
            "A biblioteca de textos é impressionante e o assistente de IA realmente entende os conceitos do Talmud. Uma ferramenta essencial para qualquer estudioso.",
            "ML",
        ),
    ]
    .into_iter()
    .map(|(name, role, community, text, initials)| Testimonial {
        name: name.into(),
        role: role.into(),
        community: community.into(),
        text: text.into(),
        rating: 5,
        initials: initials.into(),
    })
    .collect()
}

pub(crate) fn faqs() -> Vec<Faq> {
    [
        (
            "Como funciona o pareamento de chavruta?",
            "Nossa IA analisa seu perfil, nível de conhecimento, interesses e disponibilidade para sugerir os parceiros de estudo mais compatíveis. Você pode aceitar, recusar ou ajustar preferências a qualquer momento.",
        ),
        (
            "Os textos são autênticos e confiáveis?",
            "Sim! Trabalhamos com rabinos e estudiosos para garantir que todos os textos, traduções e comentários sejam autênticos e fiéis às fontes originais. Nossa biblioteca inclui edições certificadas e aprovadas.",
        ),
        (
            "Posso usar em dispositivos móveis?",
            "Absolutamente! A Chavruta Digital é totalmente responsiva e funciona perfeitamente em smartphones, tablets e computadores. Em breve lançaremos apps nativos para iOS e Android.",
        ),
        (
            "O assistente de IA substitui um rabino?",
            "Não. O assistente de IA é uma ferramenta educacional complementar que ajuda com explicações, perguntas e insights. Para questões halachicas ou orientação religiosa, sempre consulte um rabino qualificado.",
        ),
        (
            "Como funciona a privacidade dos dados?",
            "Levamos a privacidade muito a sério. Seus dados são criptografados, nunca compartilhados com terceiros, e você tem controle total sobre o que aparece em seu perfil. Não coletamos informações sensíveis ou pessoais além do necessário.",
        ),
        (
            "Posso cancelar a qualquer momento?",
            "Sim! Não há contratos de longo prazo. Você pode cancelar sua assinatura a qualquer momento e continuará tendo acesso até o final do período pago.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| Faq {
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}

pub(crate) fn stats() -> Vec<Stat> {
    [
        ("12,000+", "Estudantes Ativos"),
        ("45,000+", "Sessões Realizadas"),
        ("98%", "Satisfação"),
        ("150+", "Comunidades"),
    ]
    .into_iter()
    .map(|(number, label)| Stat {
        number: number.into(),
        label: label.into(),
    })
    .collect()
}

pub(crate) fn achievements() -> Vec<Achievement> {
    [
        ("Sequência de 10 Dias", true),
        ("Primeiro Tratado", true),
        ("Nível 3 Alcançado", true),
        ("50 Horas de Estudo", true),
        ("Mestre da Mishná", false),
        ("Sequência de 30 Dias", false),
    ]
    .into_iter()
    .map(|(name, unlocked)| Achievement {
        name: name.into(),
        unlocked,
    })
    .collect()
}

pub(crate) fn study_history() -> Vec<StudyRecord> {
    [
        ("Mishná Berachot 2", "12 Nov 2025", "45 min", "Rafael M."),
        ("Parashat Bereshit", "11 Nov 2025", "60 min", "Solo"),
        ("Pirkei Avot 1:3", "10 Nov 2025", "30 min", "Rafael M."),
        ("Rashi - Bereshit 1:1", "9 Nov 2025", "40 min", "Solo"),
        ("Mishná Berachot 1", "8 Nov 2025", "50 min", "Rafael M."),
    ]
    .into_iter()
    .map(|(text, date_label, duration, partner)| StudyRecord {
        text: text.into(),
        date_label: date_label.into(),
        duration: duration.into(),
        partner: partner.into(),
    })
    .collect()
}
