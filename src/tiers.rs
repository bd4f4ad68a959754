//! Per-subject learning tiers and the recommendations attached to each.

use crate::models::{LearningTier, SubjectRecommendation};
use crate::subject::{format_subject_name, Subject};

impl LearningTier {
    /// Map a competency level to a tier. Levels outside 1-4 fall back to
    /// `Standard`; callers validate scores before they get here.
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => LearningTier::Remedial,
            2 => LearningTier::Reinforcement,
            3 => LearningTier::Standard,
            4 => LearningTier::Challenge,
            _ => LearningTier::Standard,
        }
    }

    pub fn label(self) -> &'static str {
        self.template().label
    }

    pub fn target_level(self) -> u8 {
        self.template().target_level
    }

    fn template(self) -> &'static TierTemplate {
        match self {
            LearningTier::Remedial => &REMEDIAL,
            LearningTier::Reinforcement => &REINFORCEMENT,
            LearningTier::Standard => &STANDARD,
            LearningTier::Challenge => &CHALLENGE,
        }
    }
}

struct TierTemplate {
    label: &'static str,
    description: &'static str,
    action_steps: [&'static str; 5],
    resources: [&'static str; 4],
    estimated_time: &'static str,
    target_level: u8,
}

static REMEDIAL: TierTemplate = TierTemplate {
    label: "Foundation Building",
    description: "Let's build a strong foundation step by step. We'll break down concepts into simple, manageable pieces.",
    action_steps: [
        "Focus on absolute basics - master one concept at a time",
        "Practice 10-15 minutes daily with simple, guided exercises",
        "Use visual aids, manipulatives, and hands-on activities",
        "Get one-on-one support from teacher, tutor, or parent",
        "Celebrate small wins to build confidence",
    ],
    resources: [
        "Khan Academy (Basic level videos)",
        "BBC Bitesize (Foundation tier)",
        "Simplified worksheets and practice books",
        "Educational games and apps for foundational skills",
    ],
    estimated_time: "6-8 weeks with consistent practice",
    target_level: 2,
};

static REINFORCEMENT: TierTemplate = TierTemplate {
    label: "Gap Closing",
    description: "You're on the right track! Let's close the gaps and build your confidence.",
    action_steps: [
        "Review foundational concepts and identify specific gaps",
        "Practice 20-30 minutes daily with varied exercises",
        "Work through past mistakes to understand patterns",
        "Join peer study groups for collaborative learning",
        "Complete weekly mini-assessments to track progress",
    ],
    resources: [
        "Khan Academy (Standard level)",
        "Textbook practice problems",
        "Online practice quizzes",
        "Study group sessions with classmates",
    ],
    estimated_time: "4-6 weeks of focused practice",
    target_level: 3,
};

static STANDARD: TierTemplate = TierTemplate {
    label: "Maintaining Progress",
    description: "Great work! Let's maintain this momentum and explore the subject more deeply.",
    action_steps: [
        "Continue regular practice to maintain competency",
        "Explore real-world applications of concepts",
        "Help peers who are struggling (teaching reinforces learning)",
        "Try some challenge problems to test understanding",
        "Connect this subject to your interests and goals",
    ],
    resources: [
        "Standard curriculum materials",
        "Extension activities and projects",
        "Subject-specific clubs or competitions",
        "Online enrichment programs",
    ],
    estimated_time: "Ongoing - maintain current level",
    target_level: 4,
};

static CHALLENGE: TierTemplate = TierTemplate {
    label: "Advanced Exploration",
    description: "Outstanding! Let's push boundaries and explore advanced concepts.",
    action_steps: [
        "Tackle advanced problems and extension questions",
        "Join competitions and olympiads in this subject",
        "Explore university-level concepts and resources",
        "Mentor other students and share your knowledge",
        "Connect with experts or professionals in this field",
    ],
    resources: [
        "Advanced textbooks and academic journals",
        "Online courses (Coursera, edX)",
        "Subject-specific competitions and challenges",
        "Mentorship programs with professionals",
    ],
    estimated_time: "Ongoing - continue advancing",
    target_level: 4,
};

type StepTable = [&'static str; 5];

/// Subject-tailored action steps, replacing the generic tier steps.
fn subject_specific_steps(subject: Subject, tier: LearningTier) -> Option<&'static StepTable> {
    let table: &'static [StepTable; 4] = match subject {
        Subject::Mathematics => &MATHEMATICS_STEPS,
        Subject::IntegratedScience => &INTEGRATED_SCIENCE_STEPS,
        Subject::English => &ENGLISH_STEPS,
        _ => return None,
    };
    let index = match tier {
        LearningTier::Remedial => 0,
        LearningTier::Reinforcement => 1,
        LearningTier::Standard => 2,
        LearningTier::Challenge => 3,
    };
    Some(&table[index])
}

// Rows are remedial, reinforcement, standard, challenge.
static MATHEMATICS_STEPS: [StepTable; 4] = [
    [
        "Master basic number operations (addition, subtraction, multiplication, division)",
        "Practice counting, place value, and number patterns daily",
        "Use concrete objects (blocks, counters) to visualize math concepts",
        "Work on times tables until automatic (5-10 min daily)",
        "Solve simple word problems with pictures and drawings",
    ],
    [
        "Review fractions, decimals, and percentages thoroughly",
        "Practice mental math strategies daily",
        "Work through problem-solving steps systematically",
        "Complete timed exercises to build speed and accuracy",
        "Apply math to real-life situations (shopping, cooking, sports)",
    ],
    [
        "Explore different problem-solving approaches",
        "Practice multi-step word problems regularly",
        "Connect math to science and technology applications",
        "Try math puzzles and logic games",
        "Participate in math challenges or clubs",
    ],
    [
        "Tackle olympiad-level problems and competitions",
        "Explore advanced topics (algebra, geometry proofs)",
        "Learn programming to apply mathematical thinking",
        "Study mathematical patterns and number theory",
        "Join Kenya Mathematics Olympiad or similar programs",
    ],
];

static INTEGRATED_SCIENCE_STEPS: [StepTable; 4] = [
    [
        "Review basic scientific concepts with videos and diagrams",
        "Conduct simple home experiments with adult supervision",
        "Create visual notes with pictures and labels",
        "Focus on one topic at a time (plants, animals, materials)",
        "Use science games and interactive apps",
    ],
    [
        "Practice the scientific method with simple investigations",
        "Keep a science journal documenting observations",
        "Watch educational documentaries and videos",
        "Complete hands-on experiments and projects",
        "Review key vocabulary and definitions regularly",
    ],
    [
        "Design and conduct your own science experiments",
        "Join science club or environmental groups",
        "Explore STEM career options and role models",
        "Read popular science books and magazines",
        "Connect science to current events and issues",
    ],
    [
        "Participate in Kenya Science & Engineering Fair",
        "Explore advanced topics beyond curriculum",
        "Conduct independent research projects",
        "Shadow scientists or visit research facilities",
        "Study for science olympiads and competitions",
    ],
];

static ENGLISH_STEPS: [StepTable; 4] = [
    [
        "Read simple books at your level for 15 minutes daily",
        "Practice basic grammar rules with worksheets",
        "Build vocabulary with flashcards (10 new words/week)",
        "Write simple sentences and short paragraphs",
        "Listen to English stories and audiobooks",
    ],
    [
        "Read grade-level books and discuss them",
        "Practice different types of writing (narrative, descriptive)",
        "Improve grammar through targeted exercises",
        "Expand vocabulary through context and word games",
        "Watch English programs with subtitles",
    ],
    [
        "Read diverse genres and authors regularly",
        "Write creative stories, essays, and reports",
        "Join debate club or drama group",
        "Practice public speaking and presentations",
        "Analyze literature and discuss themes",
    ],
    [
        "Read classic literature and contemporary works",
        "Write for school newspaper or literary magazine",
        "Participate in writing competitions and debates",
        "Study advanced literary techniques and analysis",
        "Explore creative writing workshops",
    ],
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Tier, steps and resources for one subject at its current level.
pub fn generate_subject_recommendation(
    subject_key: &str,
    current_level: i64,
) -> SubjectRecommendation {
    let tier = LearningTier::from_level(current_level);
    let template = tier.template();
    let action_steps = Subject::from_key(subject_key)
        .and_then(|subject| subject_specific_steps(subject, tier))
        .map(|steps| owned(steps))
        .unwrap_or_else(|| owned(&template.action_steps));

    SubjectRecommendation {
        subject_key: subject_key.to_string(),
        subject: format_subject_name(subject_key),
        current_level: current_level.clamp(0, u8::MAX as i64) as u8,
        tier,
        tier_label: template.label.to_string(),
        description: template.description.to_string(),
        action_steps,
        resources: owned(&template.resources),
        estimated_time: template.estimated_time.to_string(),
        target_level: template.target_level,
    }
}
