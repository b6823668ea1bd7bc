//! Follow-up guidance derived from extraction and match results: action plan,
//! skills-gap counts, interview questions and the bundled samples.

use serde::{Deserialize, Serialize};

use crate::builder::models::ResumeDocument;
use crate::matching::extractor::ExtractionResult;
use crate::matching::scoring::MatchReport;

const ACTION_PLAN_KEYWORDS: usize = 3;
const MAX_TECHNICAL_QUESTIONS: usize = 8;

const BEHAVIORAL_QUESTIONS: &[&str] = &[
    "Tell me about a time you worked in a team and faced a conflict. How did you resolve it?",
    "Describe a situation where you had to learn a new technology quickly. What was your process?",
    "What is your greatest technical achievement so far, and why?",
    "Where do you see yourself in 3 years in terms of technical growth?",
];

const INTERVIEW_TIPS: &[&str] = &[
    "The STAR Method: for behavioral questions, always use Situation, Task, Action, and Result.",
    "Be Quantifiable: whenever possible, use numbers (e.g., 'Reduced load time by 20%').",
    "Ask Questions: always prepare 2-3 questions for the interviewer.",
];

pub const SAMPLE_JOB_DESCRIPTION: &str = "Seeking a Full-Stack Python Developer with experience \
    in Django, React, and AWS. Must be familiar with Docker and SQL.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPlan {
    /// Up to three missing keywords worth working into experience bullets.
    pub focus_keywords: Vec<String>,
    pub advice: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkillsGap {
    pub matched: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewPrep {
    pub technical_questions: Vec<String>,
    pub behavioral_questions: Vec<String>,
    pub tips: Vec<String>,
    /// Set when the job description had no recognizable keywords.
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Samples {
    pub job_description: &'static str,
    pub profile: ResumeDocument,
}

pub fn build_action_plan(report: &MatchReport) -> ActionPlan {
    let focus_keywords: Vec<String> = report
        .missing_flat()
        .into_iter()
        .take(ACTION_PLAN_KEYWORDS)
        .map(String::from)
        .collect();

    let advice = if focus_keywords.is_empty() {
        "Your resume matches all identified technical keywords in the JD! \
         Focus on quantifying your achievements."
            .to_string()
    } else {
        format!(
            "Try to incorporate concepts like {} into your experience bullets. \
             Focus on categories where you have the most gaps to improve your ATS ranking.",
            focus_keywords.join(", ")
        )
    };

    ActionPlan {
        focus_keywords,
        advice,
    }
}

pub fn skills_gap(report: &MatchReport) -> SkillsGap {
    SkillsGap {
        matched: report.total_matched,
        missing: report.total_missing(),
    }
}

pub fn build_interview_prep(jd_keywords: &ExtractionResult) -> InterviewPrep {
    let technical_questions: Vec<String> = jd_keywords
        .flatten()
        .into_iter()
        .take(MAX_TECHNICAL_QUESTIONS)
        .map(|kw| {
            format!(
                "Can you describe a project where you used {} and what challenges you faced?",
                kw.to_uppercase()
            )
        })
        .collect();

    let notice = technical_questions.is_empty().then(|| {
        "No specific technical keywords found. Try pasting a more detailed JD.".to_string()
    });

    InterviewPrep {
        technical_questions,
        behavioral_questions: BEHAVIORAL_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        tips: INTERVIEW_TIPS.iter().map(|t| t.to_string()).collect(),
        notice,
    }
}

pub fn samples() -> Samples {
    Samples {
        job_description: SAMPLE_JOB_DESCRIPTION,
        profile: ResumeDocument {
            name: "Alex Johnson".to_string(),
            email: "alex.j@example.com".to_string(),
            phone: "+1 555-0123".to_string(),
            location: "San Francisco, CA".to_string(),
            link: "linkedin.com/in/alexj".to_string(),
            summary: "Passionate CS student specializing in Python and AI. \
                      Seeking summer internships."
                .to_string(),
            education: "B.S. in Computer Science - Tech University (2021-2025)".to_string(),
            experience: "Software Engineering Intern - DevCorp\n\
                         - Built a dashboard using Streamlit and Pandas."
                .to_string(),
            skills: "Python, SQL, React, Git, Docker, Agile".to_string(),
            projects: "ResuMate AI: An NLP tool for resume optimization.".to_string(),
        },
    }
}
