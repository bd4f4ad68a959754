use serde::{Deserialize, Serialize};

/// Known CBC subject keys across junior and senior school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    // Junior school
    Mathematics,
    English,
    Kiswahili,
    SocialStudies,
    IntegratedScience,
    PreTechnicalStudies,
    CreativeArtsSports,
    AgricultureNutrition,
    ChristianReligiousEducation,
    IslamicReligiousEducation,
    // Senior school core and life skills
    KiswahiliKsl,
    CommunityServiceLearning,
    CoreMathematics,
    EssentialMathematics,
    PhysicalEducation,
    Ict,
    // Senior school electives
    Biology,
    Chemistry,
    Physics,
    GeneralScience,
    ComputerStudies,
    Agriculture,
    HomeScience,
    Aviation,
    BuildingConstruction,
    Electricity,
    Metalwork,
    PowerMechanics,
    Woodwork,
    MediaTechnology,
    MarineFisheries,
    Geography,
    BusinessStudies,
    ChristianEducation,
    IslamicEducation,
    HinduEducation,
    SportsRecreation,
    MusicDance,
    TheatreFilm,
    FineArts,
    LiteratureEnglish,
    FasihiKiswahili,
    HistoryCitizenship,
    IndigenousLanguages,
    SignLanguage,
    French,
    German,
    Arabic,
    Mandarin,
}

impl Subject {
    pub const ALL: [Subject; 49] = [
        Subject::Mathematics,
        Subject::English,
        Subject::Kiswahili,
        Subject::SocialStudies,
        Subject::IntegratedScience,
        Subject::PreTechnicalStudies,
        Subject::CreativeArtsSports,
        Subject::AgricultureNutrition,
        Subject::ChristianReligiousEducation,
        Subject::IslamicReligiousEducation,
        Subject::KiswahiliKsl,
        Subject::CommunityServiceLearning,
        Subject::CoreMathematics,
        Subject::EssentialMathematics,
        Subject::PhysicalEducation,
        Subject::Ict,
        Subject::Biology,
        Subject::Chemistry,
        Subject::Physics,
        Subject::GeneralScience,
        Subject::ComputerStudies,
        Subject::Agriculture,
        Subject::HomeScience,
        Subject::Aviation,
        Subject::BuildingConstruction,
        Subject::Electricity,
        Subject::Metalwork,
        Subject::PowerMechanics,
        Subject::Woodwork,
        Subject::MediaTechnology,
        Subject::MarineFisheries,
        Subject::Geography,
        Subject::BusinessStudies,
        Subject::ChristianEducation,
        Subject::IslamicEducation,
        Subject::HinduEducation,
        Subject::SportsRecreation,
        Subject::MusicDance,
        Subject::TheatreFilm,
        Subject::FineArts,
        Subject::LiteratureEnglish,
        Subject::FasihiKiswahili,
        Subject::HistoryCitizenship,
        Subject::IndigenousLanguages,
        Subject::SignLanguage,
        Subject::French,
        Subject::German,
        Subject::Arabic,
        Subject::Mandarin,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::English => "english",
            Subject::Kiswahili => "kiswahili",
            Subject::SocialStudies => "social_studies",
            Subject::IntegratedScience => "integrated_science",
            Subject::PreTechnicalStudies => "pre_technical_studies",
            Subject::CreativeArtsSports => "creative_arts_sports",
            Subject::AgricultureNutrition => "agriculture_nutrition",
            Subject::ChristianReligiousEducation => "christian_religious_education",
            Subject::IslamicReligiousEducation => "islamic_religious_education",
            Subject::KiswahiliKsl => "kiswahili_ksl",
            Subject::CommunityServiceLearning => "community_service_learning",
            Subject::CoreMathematics => "core_mathematics",
            Subject::EssentialMathematics => "essential_mathematics",
            Subject::PhysicalEducation => "physical_education",
            Subject::Ict => "ict",
            Subject::Biology => "biology",
            Subject::Chemistry => "chemistry",
            Subject::Physics => "physics",
            Subject::GeneralScience => "general_science",
            Subject::ComputerStudies => "computer_studies",
            Subject::Agriculture => "agriculture",
            Subject::HomeScience => "home_science",
            Subject::Aviation => "aviation",
            Subject::BuildingConstruction => "building_construction",
            Subject::Electricity => "electricity",
            Subject::Metalwork => "metalwork",
            Subject::PowerMechanics => "power_mechanics",
            Subject::Woodwork => "woodwork",
            Subject::MediaTechnology => "media_technology",
            Subject::MarineFisheries => "marine_fisheries",
            Subject::Geography => "geography",
            Subject::BusinessStudies => "business_studies",
            Subject::ChristianEducation => "christian_education",
            Subject::IslamicEducation => "islamic_education",
            Subject::HinduEducation => "hindu_education",
            Subject::SportsRecreation => "sports_recreation",
            Subject::MusicDance => "music_dance",
            Subject::TheatreFilm => "theatre_film",
            Subject::FineArts => "fine_arts",
            Subject::LiteratureEnglish => "literature_english",
            Subject::FasihiKiswahili => "fasihi_kiswahili",
            Subject::HistoryCitizenship => "history_citizenship",
            Subject::IndigenousLanguages => "indigenous_languages",
            Subject::SignLanguage => "sign_language",
            Subject::French => "french",
            Subject::German => "german",
            Subject::Arabic => "arabic",
            Subject::Mandarin => "mandarin",
        }
    }

    pub fn from_key(key: &str) -> Option<Subject> {
        Subject::ALL.iter().copied().find(|subject| subject.key() == key)
    }

    /// Display names that title-casing the key would get wrong.
    fn special_name(self) -> Option<&'static str> {
        let name = match self {
            Subject::CreativeArtsSports => "Creative Arts and Sports",
            Subject::PreTechnicalStudies => "Pre-Technical Studies",
            Subject::AgricultureNutrition => "Agriculture and Nutrition",
            Subject::ChristianReligiousEducation | Subject::ChristianEducation => {
                "Christian Religious Education"
            }
            Subject::IslamicReligiousEducation | Subject::IslamicEducation => {
                "Islamic Religious Education"
            }
            Subject::HinduEducation => "Hindu Religious Education",
            Subject::KiswahiliKsl => "Kiswahili/KSL",
            Subject::Ict => "ICT",
            _ => return None,
        };
        Some(name)
    }
}

/// Human-readable subject name for a snake_case key. Unknown keys are
/// title-cased word by word.
pub fn format_subject_name(key: &str) -> String {
    if let Some(name) = Subject::from_key(key).and_then(Subject::special_name) {
        return name.to_string();
    }

    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Junior school (Grades 7-9) receives computed pathway guidance; senior
/// school (Grades 10-12) has already chosen a pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolLevel {
    Junior,
    Senior,
    Unknown,
}

impl SchoolLevel {
    pub fn from_grade(grade: u8) -> Self {
        match grade {
            7..=9 => SchoolLevel::Junior,
            10..=12 => SchoolLevel::Senior,
            _ => SchoolLevel::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_vocabulary() {
        for subject in Subject::ALL {
            assert_eq!(Subject::from_key(subject.key()), Some(subject));
        }
        assert_eq!(Subject::from_key("astrology"), None);
    }

    #[test]
    fn special_names_take_precedence() {
        assert_eq!(format_subject_name("kiswahili_ksl"), "Kiswahili/KSL");
        assert_eq!(format_subject_name("ict"), "ICT");
        assert_eq!(
            format_subject_name("christian_education"),
            "Christian Religious Education"
        );
        assert_eq!(format_subject_name("pre_technical_studies"), "Pre-Technical Studies");
    }

    #[test]
    fn other_keys_are_title_cased() {
        assert_eq!(format_subject_name("social_studies"), "Social Studies");
        assert_eq!(format_subject_name("marine_fisheries"), "Marine Fisheries");
        assert_eq!(format_subject_name("robotics_lab"), "Robotics Lab");
    }

    #[test]
    fn grades_map_to_school_levels() {
        assert_eq!(SchoolLevel::from_grade(7), SchoolLevel::Junior);
        assert_eq!(SchoolLevel::from_grade(9), SchoolLevel::Junior);
        assert_eq!(SchoolLevel::from_grade(10), SchoolLevel::Senior);
        assert_eq!(SchoolLevel::from_grade(6), SchoolLevel::Unknown);
    }
}
