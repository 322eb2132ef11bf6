//! Built-in sample texts used when an input is not supplied

pub const SAMPLE_JOB_DESCRIPTION: &str = "We are seeking a skilled Data Scientist with experience in Python, machine learning, and cloud platforms. The ideal candidate will have 3+ years of experience developing predictive models, working with large datasets, and deploying solutions on AWS. Strong communication skills and the ability to work in cross-functional teams are essential. Experience with TensorFlow and SQL is required.";

pub const SAMPLE_RESUME: &str = "\
Jordan Lee
Seattle, WA | (555) 010-2040 | jordan.lee@example.com | linkedin.com/in/jordanlee

SUMMARY
Data Scientist with 3+ years of experience in machine learning and data analysis.
Skilled in Python, SQL, and statistical modeling. Looking to turn data-driven
insights into product decisions.

EXPERIENCE
Data Scientist, Northwind Analytics | Feb 2021 - Present
- Built churn prediction models reaching 85% accuracy
- Maintained data pipelines over large datasets using Python and SQL
- Partnered with product and sales teams to ship data-driven features

Data Analyst Intern, Contoso Retail | Jun 2020 - Dec 2020
- Performed data analysis to surface market trends and customer preferences
- Built dashboards in Tableau for business stakeholders
- Supported A/B tests for marketing campaigns

EDUCATION
B.S. in Computer Science
University of Washington | 2016 - 2020

SKILLS
- Programming: Python, R, SQL
- Machine Learning: scikit-learn, TensorFlow
- Data Visualization: Tableau, Matplotlib
- Tools: Git, Docker, AWS

PROJECTS
Customer Segmentation Model
- Clustered customers into 5 segments with Python and scikit-learn
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::AnalysisEngine;

    #[test]
    fn test_sample_job_description_matches_most_terms() {
        let report = AnalysisEngine::default().analyze_job_description(SAMPLE_JOB_DESCRIPTION);
        assert_eq!(
            report.matched_keywords,
            vec!["Python", "Machine Learning", "AWS", "SQL", "TensorFlow"]
        );
        assert_eq!(report.match_percentage, 75);
        assert_eq!(report.missing_keywords, vec!["Data Analysis", "Project Management"]);
    }
}
