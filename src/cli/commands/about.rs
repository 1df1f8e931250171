use anyhow::Result;
use console::{style, Emoji};

static LENS: Emoji<'_, '_> = Emoji("📝 ", "");

pub async fn run() -> Result<()> {
    println!();
    println!("{}", style(" About CareerLens ").bold().reverse());
    println!();

    println!("{}CareerLens is an AI-powered tool that analyzes resumes and", LENS);
    println!("lets you ask questions about them. It uses Google's Gemini model");
    println!("for the analysis and the chat answers.");
    println!();

    println!("{}", style("Features").bold());
    println!("  - Resume Analysis: analyze a PDF, DOCX, or TXT resume");
    println!("  - Information Extraction: skills, experience, education, and more");
    println!("  - Chat: ask questions about the resume and get grounded answers");
    println!();

    println!("{}", style("How to Use").bold());
    println!(
        "  1. Set your API key: {} export GOOGLE_API_KEY=your-key",
        style("$").dim()
    );
    println!(
        "  2. Analyze a resume:  {} careerlens analyze resume.pdf",
        style("$").dim()
    );
    println!(
        "  3. Chat about it:     {} careerlens chat resume.pdf",
        style("$").dim()
    );
    println!();

    println!("{}", style("Privacy").bold());
    println!("  Resume text and chat history live only in memory for the");
    println!("  duration of a run. Nothing is stored permanently.");
    println!();

    println!(
        "Powered by Google Gemini. More at {}",
        style("https://ai.google.dev/").cyan()
    );

    Ok(())
}
