//! Prompt templates for resume analysis and follow-up questions.
//!
//! Both builders are pure: identical inputs always render identical
//! strings, which the session layer depends on for reproducible runs.

/// Render the full-analysis instruction for a resume, enumerating the ten
/// sections the model must produce, formatted as Markdown.
pub fn analysis_prompt(resume_text: &str) -> String {
    format!(
        r#"Analyze the following resume and provide a detailed breakdown:

Resume:
{resume_text}

Please provide the following information in a well-structured format using Markdown:

1. **Basic Information**: Extract name, contact details, and location
2. **Professional Summary**: Summarize the candidate's profile in 2-3 sentences
3. **Skills**: List the technical and soft skills found in the resume
4. **Experience**: Summarize work experience, including company names, positions, and duration
5. **Education**: List educational qualifications with institutions and years
6. **Certifications**: List any certifications mentioned
7. **Achievements**: Highlight key achievements
8. **Strengths**: What are the candidate's main strengths based on the resume?
9. **Areas for Improvement**: Suggestions for improving the resume
10. **ATS Compatibility Score**: Rate how well the resume would perform with Applicant Tracking Systems on a scale of 1-10 and explain why

Format your response using Markdown with proper headings, bullet points, and sections.
"#
    )
}

/// Render a follow-up question prompt grounded in the resume text. The model
/// is told to answer only from the resume and to say when the resume lacks
/// relevant information.
pub fn question_prompt(resume_text: &str, question: &str) -> String {
    format!(
        r#"I have the following resume:

{resume_text}

Based on the content of this resume, please answer the following question:
{question}

Provide a detailed and helpful response based only on the information available in the resume. If the resume doesn't contain information relevant to the question, please mention that.
"#
    )
}
