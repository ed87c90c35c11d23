use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTag;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(TextId);
id_newtype!(VideoId);
id_newtype!(EventId);
id_newtype!(CandidateId);
id_newtype!(PartnerId);
id_newtype!(QuestionId);
id_newtype!(ShiurId);

/// Closed set of string tags with a stable wire form.
macro_rules! tagged_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownTag;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($tag => Ok($name::$variant),)+
                    other => Err(UnknownTag::new(stringify!($name), other)),
                }
            }
        }
    };
}

tagged_enum!(
    /// One full-screen application state. Exactly one is current at a time.
    ViewId {
        Landing => "landing",
        Pricing => "pricing",
        Dashboard => "dashboard",
        StudyRoom => "study-room",
        Library => "library",
        Matchmaking => "matchmaking",
        Profile => "profile",
        DailyQuiz => "daily-quiz",
        Assessment => "assessment",
        ScheduleSession => "schedule-session",
        RabbiConsultation => "rabbi-consultation",
        WeeklyShiur => "weekly-shiur",
        Calendar => "calendar",
    }
);

impl ViewId {
    /// Views reachable without logging in.
    pub fn is_public(self) -> bool {
        matches!(self, ViewId::Landing | ViewId::Pricing)
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewId::Landing => "Início",
            ViewId::Pricing => "Planos",
            ViewId::Dashboard => "Dashboard",
            ViewId::StudyRoom => "Sala de Estudo",
            ViewId::Library => "Biblioteca",
            ViewId::Matchmaking => "Encontrar Chavruta",
            ViewId::Profile => "Perfil",
            ViewId::DailyQuiz => "Quiz Diário",
            ViewId::Assessment => "Avaliação de Perfil",
            ViewId::ScheduleSession => "Agendar Sessão",
            ViewId::RabbiConsultation => "Consulta com Rabino",
            ViewId::WeeklyShiur => "Shiur Semanal",
            ViewId::Calendar => "Calendário",
        }
    }
}

tagged_enum!(StudyType {
    Torah => "torah",
    Mishna => "mishna",
    Talmud => "talmud",
    PirkeiAvot => "pirkei-avot",
    Halacha => "halacha",
    Free => "free",
});

impl StudyType {
    pub fn label(self) -> &'static str {
        match self {
            StudyType::Torah => "Torá",
            StudyType::Mishna => "Mishná",
            StudyType::Talmud => "Talmud",
            StudyType::PirkeiAvot => "Pirkei Avot",
            StudyType::Halacha => "Halachá",
            StudyType::Free => "Livre",
        }
    }
}

tagged_enum!(SessionDuration {
    HalfHour => "30",
    OneHour => "60",
    NinetyMinutes => "90",
    TwoHours => "120",
});

impl SessionDuration {
    pub fn minutes(self) -> u32 {
        match self {
            SessionDuration::HalfHour => 30,
            SessionDuration::OneHour => 60,
            SessionDuration::NinetyMinutes => 90,
            SessionDuration::TwoHours => 120,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionDuration::HalfHour => "30 min",
            SessionDuration::OneHour => "1 hora",
            SessionDuration::NinetyMinutes => "1h 30min",
            SessionDuration::TwoHours => "2 horas",
        }
    }
}

tagged_enum!(PartnerChoice {
    Ai => "ai",
    Specific => "specific",
});

tagged_enum!(ConsultationType {
    Spiritual => "spiritual",
    Halacha => "halacha",
    Counseling => "counseling",
    Conversion => "conversion",
    Study => "study",
    General => "general",
});

impl ConsultationType {
    pub fn label(self) -> &'static str {
        match self {
            ConsultationType::Spiritual => "Orientação Espiritual",
            ConsultationType::Halacha => "Questões de Halachá",
            ConsultationType::Counseling => "Aconselhamento",
            ConsultationType::Conversion => "Processo de Guiyur",
            ConsultationType::Study => "Orientação de Estudos",
            ConsultationType::General => "Consulta Geral",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConsultationType::Spiritual => "Crescimento espiritual e conexão com a Torá",
            ConsultationType::Halacha => "Dúvidas sobre lei judaica e práticas",
            ConsultationType::Counseling => "Orientação pessoal e familiar",
            ConsultationType::Conversion => "Acompanhamento de conversão ao judaísmo",
            ConsultationType::Study => "Direcionamento e plano de estudos",
            ConsultationType::General => "Outras questões e orientações",
        }
    }
}

tagged_enum!(ConsultationDuration {
    Short => "30",
    Standard => "45",
    Extended => "60",
});

impl ConsultationDuration {
    pub fn minutes(self) -> u32 {
        match self {
            ConsultationDuration::Short => 30,
            ConsultationDuration::Standard => 45,
            ConsultationDuration::Extended => 60,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConsultationDuration::Short => "Consulta rápida",
            ConsultationDuration::Standard => "Consulta padrão",
            ConsultationDuration::Extended => "Consulta estendida",
        }
    }
}

tagged_enum!(MeetingType {
    Video => "video",
    Phone => "phone",
    InPerson => "in-person",
});

impl MeetingType {
    /// In-person meetings are listed but cannot be booked yet.
    pub fn is_available(self) -> bool {
        !matches!(self, MeetingType::InPerson)
    }

    pub fn label(self) -> &'static str {
        match self {
            MeetingType::Video => "Videochamada",
            MeetingType::Phone => "Telefone",
            MeetingType::InPerson => "Presencial",
        }
    }
}

tagged_enum!(StudyLevel {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

impl StudyLevel {
    pub fn label(self) -> &'static str {
        match self {
            StudyLevel::Beginner => "Iniciante",
            StudyLevel::Intermediate => "Intermediário",
            StudyLevel::Advanced => "Avançado",
        }
    }
}

tagged_enum!(EventKind {
    Chavruta => "chavruta",
    Shiur => "shiur",
    Rabbi => "rabbi",
    VideoClass => "video-class",
});

tagged_enum!(VideoCategory {
    Torah => "tora",
    Halacha => "halacha",
    Ethics => "etica",
    Philosophy => "filosofia",
    Commentaries => "comentarios",
    Prayer => "tefilla",
});

impl VideoCategory {
    pub fn label(self) -> &'static str {
        match self {
            VideoCategory::Torah => "Torá",
            VideoCategory::Halacha => "Halachá",
            VideoCategory::Ethics => "Ética",
            VideoCategory::Philosophy => "Filosofia",
            VideoCategory::Commentaries => "Comentários",
            VideoCategory::Prayer => "Tefillá",
        }
    }
}

tagged_enum!(BillingCycle {
    Monthly => "monthly",
    Annual => "annual",
});

tagged_enum!(MatchDecision {
    Like => "like",
    Pass => "pass",
});

tagged_enum!(KnowledgeLevel {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
    Scholar => "scholar",
});

tagged_enum!(HebrewReading {
    None => "none",
    Basic => "basic",
    Intermediate => "intermediate",
    Fluent => "fluent",
});

tagged_enum!(StudyInterest {
    Torah => "torah",
    Mishna => "mishna",
    Talmud => "talmud",
    Halacha => "halacha",
    Kabbalah => "kabbalah",
    Ethics => "ethics",
    Philosophy => "philosophy",
    Parasha => "parasha",
});

tagged_enum!(StudyGoal {
    Personal => "personal",
    Conversion => "conversion",
    Teshuva => "teshuva",
    Academic => "academic",
    Community => "community",
});

tagged_enum!(DailyStudyTime {
    QuarterHour => "15min",
    HalfHour => "30min",
    OneHour => "1hour",
    TwoHours => "2hours",
});
