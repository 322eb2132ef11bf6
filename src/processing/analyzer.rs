//! Job description and resume analysis

use crate::config::Config;
use crate::error::Result;
use crate::processing::keywords::{KeywordMatcher, MatchResult, Vocabulary};
use crate::processing::scoring::ScoringRule;
use log::debug;
use serde::{Deserialize, Serialize};

const JOB_SUGGESTIONS: [&str; 3] = [
    "Highlight your experience with AWS cloud services in the Skills section",
    "Add a project involving TensorFlow to demonstrate ML expertise",
    "Include specific metrics for your data analysis projects (e.g., 'improved efficiency by 25%')",
];

const TONE_ANALYSIS: &str = "Technical and results-oriented - matches well with your resume";
const COMPLEXITY: &str = "Moderate technical level - good match for your experience";

const RESUME_SCORE: u8 = 78;

const RESUME_STRENGTHS: [&str; 3] = [
    "Strong technical skills section",
    "Clear project descriptions",
    "Good educational background",
];

const RESUME_WEAKNESSES: [&str; 3] = [
    "Lack of quantifiable achievements",
    "Limited cloud computing experience",
    "Could use more industry-specific keywords",
];

const OPTIMIZATION_TIPS: [&str; 3] = [
    "Add 2-3 more quantifiable achievements in your experience section",
    "Include AWS certification if available",
    "Tailor skills section to match the job description more closely",
];

/// Keyword insights for a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_percentage: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub tone_analysis: String,
    pub complexity: String,
}

/// Resume evaluation. The content does not depend on the texts supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub optimization_tips: Vec<String>,
}

impl AnalysisReport {
    /// Assemble a report from a keyword partition.
    pub fn assemble(matches: MatchResult, scoring: &ScoringRule, missing_limit: usize) -> Self {
        let match_percentage = scoring.percentage(matches.matched.len());
        let missing_keywords = matches.missing(missing_limit);

        Self {
            match_percentage,
            matched_keywords: matches.matched,
            missing_keywords,
            suggestions: to_strings(&JOB_SUGGESTIONS),
            tone_analysis: TONE_ANALYSIS.to_string(),
            complexity: COMPLEXITY.to_string(),
        }
    }

    /// Leading part of the tone analysis, before the first dash.
    pub fn tone_label(&self) -> &str {
        self.tone_analysis
            .split('-')
            .next()
            .unwrap_or_default()
            .trim()
    }
}

impl ResumeReport {
    pub fn assemble() -> Self {
        Self {
            score: RESUME_SCORE,
            strengths: to_strings(&RESUME_STRENGTHS),
            weaknesses: to_strings(&RESUME_WEAKNESSES),
            optimization_tips: to_strings(&OPTIMIZATION_TIPS),
        }
    }
}

/// Stateless analysis over a fixed vocabulary and scoring rule.
pub struct AnalysisEngine {
    matcher: KeywordMatcher,
    scoring: ScoringRule,
    missing_limit: usize,
}

impl AnalysisEngine {
    pub fn new(vocabulary: Vocabulary, scoring: ScoringRule, missing_limit: usize) -> Result<Self> {
        Ok(Self {
            matcher: KeywordMatcher::new(vocabulary)?,
            scoring,
            missing_limit,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = Vocabulary::new(config.vocabulary.terms.iter().cloned())?;
        Self::new(
            vocabulary,
            ScoringRule::from(&config.scoring),
            config.scoring.missing_limit,
        )
    }

    pub fn analyze_job_description(&self, job_description: &str) -> AnalysisReport {
        let matches = self.matcher.match_text(job_description);
        debug!(
            "Keyword match: {} matched, {} unmatched",
            matches.matched.len(),
            matches.unmatched.len()
        );
        AnalysisReport::assemble(matches, &self.scoring, self.missing_limit)
    }

    pub fn analyze_resume(&self, _resume_text: &str, _job_description: &str) -> ResumeReport {
        ResumeReport::assemble()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.matcher.vocabulary()
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self {
            matcher: KeywordMatcher::default(),
            scoring: ScoringRule::default(),
            missing_limit: 3,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
