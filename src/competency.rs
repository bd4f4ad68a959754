//! CBC competency scale and subject-specific skill frameworks.

use serde::Serialize;

use crate::subject::Subject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompetencyLevel {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub indicators: [&'static str; 4],
    pub learning_focus: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectCompetency {
    pub subject: &'static str,
    pub skill_areas: [&'static str; 5],
    pub levels: [CompetencyLevel; 4],
}

pub static CBC_LEVELS: [CompetencyLevel; 4] = [
    CompetencyLevel {
        level: 1,
        name: "Below Expectations (BE)",
        description: "Learner requires significant support to meet learning outcomes",
        indicators: [
            "Struggles with basic concepts",
            "Needs extensive guidance and scaffolding",
            "Limited independent work capability",
            "Requires one-on-one intervention",
        ],
        learning_focus: "Foundation building with intensive support",
    },
    CompetencyLevel {
        level: 2,
        name: "Approaching Expectations (AE)",
        description: "Learner is developing towards meeting learning outcomes",
        indicators: [
            "Grasps some concepts but inconsistently",
            "Needs regular support and reinforcement",
            "Can complete tasks with guidance",
            "Shows improvement but gaps remain",
        ],
        learning_focus: "Gap closing and confidence building",
    },
    CompetencyLevel {
        level: 3,
        name: "Meeting Expectations (ME)",
        description: "Learner consistently meets expected learning outcomes",
        indicators: [
            "Demonstrates solid understanding",
            "Works independently on grade-level tasks",
            "Applies concepts in familiar contexts",
            "Performs at expected competency level",
        ],
        learning_focus: "Maintaining and deepening understanding",
    },
    CompetencyLevel {
        level: 4,
        name: "Exceeding Expectations (EE)",
        description: "Learner consistently surpasses expected learning outcomes",
        indicators: [
            "Shows exceptional mastery",
            "Applies knowledge in novel situations",
            "Demonstrates creativity and critical thinking",
            "Ready for advanced challenges",
        ],
        learning_focus: "Enrichment and advanced exploration",
    },
];

static MATHEMATICS: SubjectCompetency = SubjectCompetency {
    subject: "Mathematics",
    skill_areas: [
        "Number Operations",
        "Algebra & Patterns",
        "Geometry & Measurement",
        "Data & Probability",
        "Problem Solving",
    ],
    levels: [
        CompetencyLevel {
            level: 1,
            name: "Foundation",
            description: "Building basic numeracy",
            indicators: [
                "Counting and basic operations with support",
                "Simple pattern recognition",
                "Basic shape identification",
                "Reading simple graphs with help",
            ],
            learning_focus: "Concrete manipulatives, visual aids, basic operations",
        },
        CompetencyLevel {
            level: 2,
            name: "Developing",
            description: "Growing mathematical fluency",
            indicators: [
                "Performs calculations with occasional errors",
                "Solves simple word problems",
                "Uses basic geometric properties",
                "Interprets data with guidance",
            ],
            learning_focus: "Practice, error correction, strategy development",
        },
        CompetencyLevel {
            level: 3,
            name: "Proficient",
            description: "Solid mathematical competence",
            indicators: [
                "Accurate calculations independently",
                "Applies multiple strategies to problems",
                "Uses geometric reasoning",
                "Analyzes and interprets data",
            ],
            learning_focus: "Application, connections, deeper understanding",
        },
        CompetencyLevel {
            level: 4,
            name: "Advanced",
            description: "Exceptional mathematical thinking",
            indicators: [
                "Solves complex multi-step problems",
                "Creates own problem-solving strategies",
                "Makes mathematical generalizations",
                "Explores beyond curriculum",
            ],
            learning_focus: "Challenge problems, competitions, exploration",
        },
    ],
};

static INTEGRATED_SCIENCE: SubjectCompetency = SubjectCompetency {
    subject: "Integrated Science",
    skill_areas: [
        "Scientific Inquiry",
        "Life Science",
        "Physical Science",
        "Earth & Space",
        "Scientific Reasoning",
    ],
    levels: [
        CompetencyLevel {
            level: 1,
            name: "Exploring",
            description: "Beginning scientific understanding",
            indicators: [
                "Basic observations with prompting",
                "Simple classification tasks",
                "Follows procedures with help",
                "Recalls basic facts",
            ],
            learning_focus: "Hands-on exploration, vocabulary, basic concepts",
        },
        CompetencyLevel {
            level: 2,
            name: "Investigating",
            description: "Growing scientific skills",
            indicators: [
                "Makes observations independently",
                "Follows scientific method with guidance",
                "Explains simple phenomena",
                "Records findings",
            ],
            learning_focus: "Experimentation, inquiry skills, connections",
        },
        CompetencyLevel {
            level: 3,
            name: "Analyzing",
            description: "Competent scientific thinking",
            indicators: [
                "Conducts investigations independently",
                "Explains cause and effect",
                "Uses evidence to support conclusions",
                "Applies scientific concepts",
            ],
            learning_focus: "Analysis, critical thinking, application",
        },
        CompetencyLevel {
            level: 4,
            name: "Innovating",
            description: "Advanced scientific understanding",
            indicators: [
                "Designs own investigations",
                "Makes predictions and tests hypotheses",
                "Connects across scientific domains",
                "Thinks like a scientist",
            ],
            learning_focus: "Independent research, competitions, advanced topics",
        },
    ],
};

static ENGLISH: SubjectCompetency = SubjectCompetency {
    subject: "English",
    skill_areas: [
        "Reading Comprehension",
        "Writing Skills",
        "Grammar & Mechanics",
        "Vocabulary",
        "Communication",
    ],
    levels: [
        CompetencyLevel {
            level: 1,
            name: "Emergent",
            description: "Beginning language skills",
            indicators: [
                "Reads simple texts with support",
                "Writes basic sentences",
                "Limited vocabulary",
                "Needs help with grammar",
            ],
            learning_focus: "Phonics, sight words, basic grammar, simple writing",
        },
        CompetencyLevel {
            level: 2,
            name: "Developing",
            description: "Growing language competence",
            indicators: [
                "Reads grade-level texts with some help",
                "Writes simple paragraphs",
                "Expanding vocabulary",
                "Inconsistent grammar use",
            ],
            learning_focus: "Fluency, paragraph structure, grammar practice",
        },
        CompetencyLevel {
            level: 3,
            name: "Fluent",
            description: "Competent language use",
            indicators: [
                "Reads and comprehends independently",
                "Writes organized multi-paragraph texts",
                "Good vocabulary range",
                "Correct grammar usually",
            ],
            learning_focus: "Literary analysis, varied writing, expression",
        },
        CompetencyLevel {
            level: 4,
            name: "Advanced",
            description: "Exceptional language mastery",
            indicators: [
                "Analyzes complex texts",
                "Writes with sophistication and style",
                "Rich vocabulary",
                "Masterful grammar and mechanics",
            ],
            learning_focus: "Creative writing, literary criticism, advanced texts",
        },
    ],
};

pub fn subject_competency(subject_key: &str) -> Option<&'static SubjectCompetency> {
    match Subject::from_key(subject_key)? {
        Subject::Mathematics => Some(&MATHEMATICS),
        Subject::IntegratedScience => Some(&INTEGRATED_SCIENCE),
        Subject::English => Some(&ENGLISH),
        _ => None,
    }
}

fn find_level(levels: &'static [CompetencyLevel], level: u8) -> Option<&'static CompetencyLevel> {
    levels.iter().find(|candidate| candidate.level == level)
}

/// Level descriptor for a subject, falling back to the generic CBC scale when
/// the subject has no framework of its own.
pub fn competency_description(subject_key: &str, level: u8) -> Option<&'static CompetencyLevel> {
    match subject_competency(subject_key) {
        Some(competency) => find_level(&competency.levels, level),
        None => find_level(&CBC_LEVELS, level),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGapAnalysis {
    pub gaps: Vec<String>,
    pub next_steps: Vec<String>,
    pub time_estimate: String,
}

pub const DEFAULT_TARGET_LEVEL: u8 = 3;

pub fn analyze_skill_gaps(
    subject_key: &str,
    current_level: u8,
    target_level: u8,
) -> SkillGapAnalysis {
    let Some(competency) = subject_competency(subject_key) else {
        return SkillGapAnalysis {
            gaps: vec!["Subject-specific framework not available".to_string()],
            next_steps: vec!["Focus on general skill development for this subject".to_string()],
            time_estimate: "Varies by individual progress".to_string(),
        };
    };

    let current = find_level(&competency.levels, current_level);
    let target = find_level(&competency.levels, target_level);
    let (Some(_), Some(target)) = (current, target) else {
        return SkillGapAnalysis {
            gaps: Vec::new(),
            next_steps: Vec::new(),
            time_estimate: "Unknown".to_string(),
        };
    };

    if current_level >= target_level {
        return SkillGapAnalysis {
            gaps: Vec::new(),
            next_steps: vec![format!("Maintain and extend: {}", target.learning_focus)],
            time_estimate: "Already at or above target level".to_string(),
        };
    }

    let gaps = target
        .indicators
        .iter()
        .enumerate()
        .map(|(i, indicator)| format!("{}. {}", i + 1, indicator))
        .collect();

    let next_steps = vec![
        format!("Focus on: {}", target.learning_focus),
        "Work through targeted practice in weak areas".to_string(),
        "Seek feedback from teacher regularly".to_string(),
        "Track progress with mini-assessments".to_string(),
    ];

    let level_gap = target_level as i32 - current_level as i32;
    let time_estimate = if level_gap == 1 {
        "4-6 weeks with consistent effort".to_string()
    } else {
        format!("{}-{} weeks with dedicated practice", level_gap * 6, level_gap * 8)
    };

    SkillGapAnalysis {
        gaps,
        next_steps,
        time_estimate,
    }
}
