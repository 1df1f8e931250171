//! Per-run session state and the three user actions: upload, ask, reset.
//!
//! A [`Session`] is an explicit value owned by the calling command, not a
//! process-wide singleton. Each action runs to completion (including the
//! blocking model call) before the next one starts, so no locking is needed.

use std::path::Path;

use thiserror::Error;

use crate::extract::{self, ExtractError, SourceFormat};
use crate::llm::{prompts, GenerateError, Generator};

/// The extracted plain text of an uploaded resume. Immutable once created.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub text: String,
    pub format: SourceFormat,
}

impl ResumeDocument {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// One turn of follow-up chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Error: Google API key not configured. Please set the GOOGLE_API_KEY environment variable.")]
    MissingCredential,

    #[error("Please upload a resume first before chatting!")]
    NoDocument,

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// In-memory state bundle for one upload-through-chat lifecycle. The
/// credential lives here for the session's duration and is never persisted
/// by this type.
pub struct Session {
    api_key: String,
    document: Option<ResumeDocument>,
    analysis: Option<String>,
    conversation: Vec<ConversationEntry>,
}

impl Session {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            document: None,
            analysis: None,
            conversation: Vec::new(),
        }
    }

    pub fn document(&self) -> Option<&ResumeDocument> {
        self.document.as_ref()
    }

    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }

    pub fn conversation(&self) -> &[ConversationEntry] {
        &self.conversation
    }

    fn require_credential(&self) -> Result<(), SessionError> {
        if self.api_key.is_empty() {
            return Err(SessionError::MissingCredential);
        }
        Ok(())
    }

    /// Upload action: extract text from the file, run the analysis prompt
    /// through the generator, and store both. A missing credential is
    /// reported before any extraction or network work. Re-uploading replaces
    /// the previous document and analysis. The document is stored as soon as
    /// extraction succeeds, so a failed analysis still leaves the resume
    /// available for chat.
    pub async fn upload(
        &mut self,
        path: &Path,
        generator: &dyn Generator,
    ) -> Result<String, SessionError> {
        self.require_credential()?;

        let (text, format) = extract::extract_text(path)?;
        tracing::debug!(format = %format, chars = text.len(), "resume extracted");

        let prompt = prompts::analysis_prompt(&text);
        self.document = Some(ResumeDocument { text, format });
        self.analysis = None;

        let analysis = generator.generate(&prompt).await?;
        self.analysis = Some(analysis.clone());

        Ok(analysis)
    }

    /// Ask action: append the user's question, answer it against the stored
    /// resume text, append the assistant's reply. Requires an uploaded
    /// document and a credential.
    pub async fn ask(
        &mut self,
        question: &str,
        generator: &dyn Generator,
    ) -> Result<String, SessionError> {
        self.require_credential()?;

        let document = self.document.as_ref().ok_or(SessionError::NoDocument)?;

        let prompt = prompts::question_prompt(&document.text, question);

        self.conversation.push(ConversationEntry {
            role: Role::User,
            text: question.to_string(),
        });

        let answer = generator.generate(&prompt).await?;

        self.conversation.push(ConversationEntry {
            role: Role::Assistant,
            text: answer.clone(),
        });

        Ok(answer)
    }

    /// Reset action: clear document, analysis, and conversation in one step.
    /// The credential survives a reset.
    pub fn reset(&mut self) {
        self.document = None;
        self.analysis = None;
        self.conversation.clear();
    }

    /// Clear only the conversation, keeping the document and analysis.
    pub fn clear_conversation(&mut self) {
        self.conversation.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted generator that records how many times it was invoked.
    struct MockGenerator {
        reply: String,
        calls: AtomicUsize,
    }

    impl MockGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Generator for MockGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    fn txt_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_upload_without_credential_skips_generator() {
        let file = txt_fixture("Jane Doe");
        let generator = MockGenerator::new("## Summary");
        let mut session = Session::new(String::new());

        let err = session.upload(file.path(), &generator).await.unwrap_err();
        assert!(matches!(err, SessionError::MissingCredential));
        assert_eq!(generator.call_count(), 0);
        assert!(session.document().is_none());
    }

    #[tokio::test]
    async fn test_upload_stores_document_and_analysis() {
        let file = txt_fixture("Jane Doe, Software Engineer, 5 years Python");
        let generator = MockGenerator::new("## Summary\n...");
        let mut session = Session::new("test-key".to_string());

        session.upload(file.path(), &generator).await.unwrap();

        assert_eq!(
            session.document().unwrap().text,
            "Jane Doe, Software Engineer, 5 years Python"
        );
        assert_eq!(session.document().unwrap().format, SourceFormat::PlainText);
        assert_eq!(session.analysis(), Some("## Summary\n..."));
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_ask_appends_user_then_assistant() {
        let file = txt_fixture("Jane Doe, Software Engineer, 5 years Python");
        let generator = MockGenerator::new("Software Engineer");
        let mut session = Session::new("test-key".to_string());
        session.upload(file.path(), &generator).await.unwrap();

        session
            .ask("What is the candidate's title?", &generator)
            .await
            .unwrap();

        let conversation = session.conversation();
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation[0].role, Role::User);
        assert_eq!(conversation[0].text, "What is the candidate's title?");
        assert_eq!(conversation[1].role, Role::Assistant);
        assert_eq!(conversation[1].text, "Software Engineer");
    }

    #[tokio::test]
    async fn test_ask_without_document() {
        let generator = MockGenerator::new("answer");
        let mut session = Session::new("test-key".to_string());

        let err = session.ask("anything?", &generator).await.unwrap_err();
        assert!(matches!(err, SessionError::NoDocument));
        assert_eq!(generator.call_count(), 0);
        assert!(session.conversation().is_empty());
    }

    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Api("quota exceeded".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_user_entry() {
        let file = txt_fixture("Jane Doe");
        let ok = MockGenerator::new("analysis");
        let mut session = Session::new("test-key".to_string());
        session.upload(file.path(), &ok).await.unwrap();

        let err = session.ask("question?", &FailingGenerator).await.unwrap_err();
        assert!(err.to_string().starts_with(
            "Error: Google API key not configured properly. Error details: "
        ));
        // The question stays in the transcript even when the answer failed.
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation()[0].role, Role::User);
    }

    #[tokio::test]
    async fn test_failed_analysis_keeps_document() {
        let file = txt_fixture("Jane Doe, Software Engineer");
        let mut session = Session::new("test-key".to_string());

        let err = session.upload(file.path(), &FailingGenerator).await.unwrap_err();
        assert!(matches!(err, SessionError::Generate(_)));

        // Extraction succeeded, so the resume stays available for chat even
        // though the analysis failed.
        assert_eq!(
            session.document().unwrap().text,
            "Jane Doe, Software Engineer"
        );
        assert!(session.analysis().is_none());

        let answer = MockGenerator::new("an answer");
        session.ask("title?", &answer).await.unwrap();
        assert_eq!(session.conversation().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_reupload_drops_stale_analysis() {
        let first = txt_fixture("Jane Doe");
        let second = txt_fixture("John Smith");
        let generator = MockGenerator::new("analysis of Jane");
        let mut session = Session::new("test-key".to_string());

        session.upload(first.path(), &generator).await.unwrap();
        session
            .upload(second.path(), &FailingGenerator)
            .await
            .unwrap_err();

        // The old analysis described the old document; it must not survive
        // paired with the new one.
        assert_eq!(session.document().unwrap().text, "John Smith");
        assert!(session.analysis().is_none());
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let file = txt_fixture("Jane Doe, Software Engineer");
        let generator = MockGenerator::new("analysis");
        let mut session = Session::new("test-key".to_string());
        session.upload(file.path(), &generator).await.unwrap();
        session.ask("title?", &generator).await.unwrap();

        session.reset();

        assert!(session.document().is_none());
        assert!(session.analysis().is_none());
        assert!(session.conversation().is_empty());
    }

    #[tokio::test]
    async fn test_reset_keeps_credential() {
        let file = txt_fixture("Jane Doe");
        let generator = MockGenerator::new("analysis");
        let mut session = Session::new("test-key".to_string());
        session.upload(file.path(), &generator).await.unwrap();

        session.reset();

        // The credential survives: a further ask fails for the missing
        // document, not for a missing key.
        let err = session.ask("title?", &generator).await.unwrap_err();
        assert!(matches!(err, SessionError::NoDocument));
    }

    #[tokio::test]
    async fn test_reupload_replaces_previous_analysis() {
        let first = txt_fixture("Jane Doe");
        let second = txt_fixture("John Smith");
        let generator = MockGenerator::new("analysis");
        let mut session = Session::new("test-key".to_string());

        session.upload(first.path(), &generator).await.unwrap();
        session.upload(second.path(), &generator).await.unwrap();

        assert_eq!(session.document().unwrap().text, "John Smith");
        assert_eq!(generator.call_count(), 2);
    }

    #[test]
    fn test_word_and_char_counts() {
        let document = ResumeDocument {
            text: "Jane Doe, Software Engineer".to_string(),
            format: SourceFormat::PlainText,
        };
        assert_eq!(document.word_count(), 4);
        assert_eq!(document.char_count(), 27);
    }
}
