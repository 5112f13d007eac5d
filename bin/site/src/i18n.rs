//! Lightweight internationalization layer.
//!
//! Keys are a closed enum rather than strings, so a missing translation
//! is a compile error in English and an explicit fallback everywhere
//! else. Translation is a total function: any (language, key) pair
//! yields a usable string, falling back to English where a table has no
//! entry yet.

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    /// All supported languages, in switcher order.
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Ar];

    /// BCP 47-ish language code, also the persistence format.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Short label for the language switcher.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Fr => "FR",
            Self::Ar => "AR",
        }
    }

    /// The language's own name, shown in the switcher tooltip.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Ar => "العربية",
        }
    }

    /// Text direction for the `dir` attribute.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    /// Whether the language is written right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Parses a persisted language code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// Every translatable string on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    NavAbout,
    NavSkills,
    NavWorkflows,
    NavProjects,
    NavExperience,
    NavCertifications,
    NavLanguages,
    NavContact,
    HeroAvailable,
    HeroTitleLine1,
    HeroTitleLine2,
    HeroTagline,
    HeroViewProjects,
    HeroMyWorkflows,
    AboutTitle,
    AboutDescription,
    SkillsTitle,
    SkillsSubtitle,
    WorkflowsTitle,
    WorkflowsSubtitle,
    WorkflowsView,
    WorkflowsLoading,
    ProjectsTitle,
    ProjectsSubtitle,
    ExperienceTitle,
    ExperienceSubtitle,
    CertificationsTitle,
    CertificationsSubtitle,
    LanguagesTitle,
    LanguagesSubtitle,
    ContactTitle,
    ContactSubtitle,
    ContactName,
    ContactEmail,
    ContactMessage,
    ContactSend,
    ContactSent,
    ViewerNodes,
    ViewerConnections,
    ViewerTriggers,
    ViewerType,
    ViewerPosition,
    ViewerParameters,
    ViewerCredentials,
    ViewerEmpty,
    ViewerZoomIn,
    ViewerZoomOut,
    ViewerFit,
    ViewerClose,
}

impl Text {
    /// Every key, for exhaustiveness checks in tests.
    pub const ALL: [Self; 49] = [
        Self::NavAbout,
        Self::NavSkills,
        Self::NavWorkflows,
        Self::NavProjects,
        Self::NavExperience,
        Self::NavCertifications,
        Self::NavLanguages,
        Self::NavContact,
        Self::HeroAvailable,
        Self::HeroTitleLine1,
        Self::HeroTitleLine2,
        Self::HeroTagline,
        Self::HeroViewProjects,
        Self::HeroMyWorkflows,
        Self::AboutTitle,
        Self::AboutDescription,
        Self::SkillsTitle,
        Self::SkillsSubtitle,
        Self::WorkflowsTitle,
        Self::WorkflowsSubtitle,
        Self::WorkflowsView,
        Self::WorkflowsLoading,
        Self::ProjectsTitle,
        Self::ProjectsSubtitle,
        Self::ExperienceTitle,
        Self::ExperienceSubtitle,
        Self::CertificationsTitle,
        Self::CertificationsSubtitle,
        Self::LanguagesTitle,
        Self::LanguagesSubtitle,
        Self::ContactTitle,
        Self::ContactSubtitle,
        Self::ContactName,
        Self::ContactEmail,
        Self::ContactMessage,
        Self::ContactSend,
        Self::ContactSent,
        Self::ViewerNodes,
        Self::ViewerConnections,
        Self::ViewerTriggers,
        Self::ViewerType,
        Self::ViewerPosition,
        Self::ViewerParameters,
        Self::ViewerCredentials,
        Self::ViewerEmpty,
        Self::ViewerZoomIn,
        Self::ViewerZoomOut,
        Self::ViewerFit,
        Self::ViewerClose,
    ];
}

/// Translates a key for the given language, falling back to English.
#[must_use]
pub fn translate(language: Language, text: Text) -> &'static str {
    let translated = match language {
        Language::En => Some(english(text)),
        Language::Fr => french(text),
        Language::Ar => arabic(text),
    };
    translated.unwrap_or_else(|| english(text))
}

fn english(text: Text) -> &'static str {
    match text {
        Text::NavAbout => "About",
        Text::NavSkills => "Skills",
        Text::NavWorkflows => "Workflows",
        Text::NavProjects => "Projects",
        Text::NavExperience => "Experience",
        Text::NavCertifications => "Certificates",
        Text::NavLanguages => "Languages",
        Text::NavContact => "Contact",
        Text::HeroAvailable => "Available for new opportunities",
        Text::HeroTitleLine1 => "DevOps &",
        Text::HeroTitleLine2 => "Automation Engineer",
        Text::HeroTagline => "Building intelligent automation and scalable systems",
        Text::HeroViewProjects => "View Projects",
        Text::HeroMyWorkflows => "My Workflows",
        Text::AboutTitle => "About Me",
        Text::AboutDescription => {
            "Passionate about creating efficient, automated solutions that drive business value."
        }
        Text::SkillsTitle => "Skills & Stack",
        Text::SkillsSubtitle => "Technologies and tools I work with",
        Text::WorkflowsTitle => "n8n Workflow Gallery",
        Text::WorkflowsSubtitle => {
            "Click on any workflow to explore its nodes, connections, and configuration in an interactive viewer."
        }
        Text::WorkflowsView => "View Workflow",
        Text::WorkflowsLoading => "Loading workflow...",
        Text::ProjectsTitle => "Projects",
        Text::ProjectsSubtitle => "Featured work and personal projects",
        Text::ExperienceTitle => "Experience",
        Text::ExperienceSubtitle => "Professional journey and achievements",
        Text::CertificationsTitle => "Certifications",
        Text::CertificationsSubtitle => {
            "Professional certifications validating expertise across cloud, DevOps, and emerging technologies"
        }
        Text::LanguagesTitle => "Languages",
        Text::LanguagesSubtitle => "Multilingual communication skills for global collaboration",
        Text::ContactTitle => "Get in Touch",
        Text::ContactSubtitle => "Have a project in mind? Let's talk.",
        Text::ContactName => "Name",
        Text::ContactEmail => "Email",
        Text::ContactMessage => "Message",
        Text::ContactSend => "Send Message",
        Text::ContactSent => "Thanks, your message is on its way!",
        Text::ViewerNodes => "nodes",
        Text::ViewerConnections => "connections",
        Text::ViewerTriggers => "triggers",
        Text::ViewerType => "Type",
        Text::ViewerPosition => "Position",
        Text::ViewerParameters => "Parameters",
        Text::ViewerCredentials => "Credentials",
        Text::ViewerEmpty => "This workflow has no nodes.",
        Text::ViewerZoomIn => "Zoom in",
        Text::ViewerZoomOut => "Zoom out",
        Text::ViewerFit => "Fit to view",
        Text::ViewerClose => "Close",
    }
}

fn french(text: Text) -> Option<&'static str> {
    let translated = match text {
        Text::NavAbout => "À propos",
        Text::NavSkills => "Compétences",
        Text::NavWorkflows => "Workflows",
        Text::NavProjects => "Projets",
        Text::NavExperience => "Expérience",
        Text::NavCertifications => "Certificats",
        Text::NavLanguages => "Langues",
        Text::NavContact => "Contact",
        Text::HeroAvailable => "Disponible pour de nouvelles opportunités",
        Text::HeroTitleLine1 => "Ingénieur DevOps &",
        Text::HeroTitleLine2 => "Automatisation",
        Text::HeroTagline => "Automatisation intelligente et systèmes évolutifs",
        Text::HeroViewProjects => "Voir les projets",
        Text::HeroMyWorkflows => "Mes workflows",
        Text::AboutTitle => "À propos de moi",
        Text::AboutDescription => {
            "Passionné par la création de solutions automatisées et efficaces."
        }
        Text::SkillsTitle => "Compétences & Stack",
        Text::SkillsSubtitle => "Technologies et outils que j'utilise",
        Text::WorkflowsTitle => "Galerie de workflows n8n",
        Text::WorkflowsSubtitle => {
            "Cliquez sur un workflow pour explorer ses nœuds, connexions et configuration dans une visionneuse interactive."
        }
        Text::WorkflowsView => "Voir le workflow",
        Text::WorkflowsLoading => "Chargement du workflow...",
        Text::ProjectsTitle => "Projets",
        Text::ProjectsSubtitle => "Travaux phares et projets personnels",
        Text::ExperienceTitle => "Expérience",
        Text::ExperienceSubtitle => "Parcours professionnel et réalisations",
        Text::CertificationsTitle => "Certifications",
        Text::CertificationsSubtitle => {
            "Certifications professionnelles en cloud, DevOps et nouvelles technologies"
        }
        Text::LanguagesTitle => "Langues",
        Text::LanguagesSubtitle => "Communication multilingue pour une collaboration globale",
        Text::ContactTitle => "Me contacter",
        Text::ContactSubtitle => "Un projet en tête ? Discutons-en.",
        Text::ContactName => "Nom",
        Text::ContactEmail => "Email",
        Text::ContactMessage => "Message",
        Text::ContactSend => "Envoyer",
        Text::ContactSent => "Merci, votre message est en route !",
        Text::ViewerNodes => "nœuds",
        Text::ViewerConnections => "connexions",
        Text::ViewerTriggers => "déclencheurs",
        Text::ViewerType => "Type",
        Text::ViewerPosition => "Position",
        Text::ViewerParameters => "Paramètres",
        Text::ViewerCredentials => "Identifiants",
        Text::ViewerEmpty => "Ce workflow ne contient aucun nœud.",
        Text::ViewerZoomIn => "Zoom avant",
        Text::ViewerZoomOut => "Zoom arrière",
        Text::ViewerFit => "Ajuster à la vue",
        Text::ViewerClose => "Fermer",
    };
    Some(translated)
}

fn arabic(text: Text) -> Option<&'static str> {
    // Viewer chrome is not translated yet and falls back to English.
    let translated = match text {
        Text::NavAbout => "نبذة عني",
        Text::NavSkills => "المهارات",
        Text::NavWorkflows => "سير العمل",
        Text::NavProjects => "المشاريع",
        Text::NavExperience => "الخبرة",
        Text::NavCertifications => "الشهادات",
        Text::NavLanguages => "اللغات",
        Text::NavContact => "اتصل بي",
        Text::HeroAvailable => "متاح لفرص جديدة",
        Text::HeroTitleLine1 => "مهندس DevOps",
        Text::HeroTitleLine2 => "والأتمتة",
        Text::HeroTagline => "بناء أتمتة ذكية وأنظمة قابلة للتوسع",
        Text::HeroViewProjects => "عرض المشاريع",
        Text::HeroMyWorkflows => "سير عملي",
        Text::AboutTitle => "نبذة عني",
        Text::AboutDescription => "شغوف بإنشاء حلول آلية وفعالة تخلق قيمة حقيقية.",
        Text::SkillsTitle => "المهارات والأدوات",
        Text::SkillsSubtitle => "التقنيات والأدوات التي أعمل بها",
        Text::WorkflowsTitle => "معرض سير عمل n8n",
        Text::WorkflowsSubtitle => "انقر على أي سير عمل لاستكشاف عقده واتصالاته وإعداداته.",
        Text::WorkflowsView => "عرض سير العمل",
        Text::WorkflowsLoading => "جارٍ تحميل سير العمل...",
        Text::ProjectsTitle => "المشاريع",
        Text::ProjectsSubtitle => "أعمال مميزة ومشاريع شخصية",
        Text::ExperienceTitle => "الخبرة",
        Text::ExperienceSubtitle => "المسيرة المهنية والإنجازات",
        Text::CertificationsTitle => "الشهادات",
        Text::CertificationsSubtitle => "شهادات مهنية في السحابة وDevOps والتقنيات الحديثة",
        Text::LanguagesTitle => "اللغات",
        Text::LanguagesSubtitle => "مهارات تواصل متعددة اللغات للتعاون العالمي",
        Text::ContactTitle => "تواصل معي",
        Text::ContactSubtitle => "لديك مشروع؟ لنتحدث.",
        Text::ContactName => "الاسم",
        Text::ContactEmail => "البريد الإلكتروني",
        Text::ContactMessage => "الرسالة",
        Text::ContactSend => "إرسال",
        Text::ContactSent => "شكراً، رسالتك في الطريق!",
        _ => return None,
    };
    Some(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_yields_a_nonempty_string() {
        for language in Language::ALL {
            for text in Text::ALL {
                assert!(
                    !translate(language, text).is_empty(),
                    "empty translation for {language:?}/{text:?}"
                );
            }
        }
    }

    #[test]
    fn untranslated_keys_fall_back_to_english() {
        assert_eq!(
            translate(Language::Ar, Text::ViewerParameters),
            translate(Language::En, Text::ViewerParameters)
        );
    }

    #[test]
    fn translated_keys_differ_from_english() {
        assert_ne!(
            translate(Language::Fr, Text::NavSkills),
            translate(Language::En, Text::NavSkills)
        );
    }

    #[test]
    fn language_codes_roundtrip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn arabic_is_the_only_rtl_language() {
        assert!(Language::Ar.is_rtl());
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Fr.dir(), "ltr");
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
