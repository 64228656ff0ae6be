//! Sample prompts written to an empty wallet on first use.

use crate::prompt::PromptDraft;

/// The bundled sample prompts, in display order.
pub fn sample_drafts() -> Vec<PromptDraft> {
    vec![
        PromptDraft {
            title: "API documentation generator".to_string(),
            category: "documentation".to_string(),
            content: "Create comprehensive documentation for the {{api_name}} API. \
                      Include endpoints, parameters, request and response examples. \
                      The documentation should cover {{number_endpoints}} main endpoints."
                .to_string(),
            description: String::new(),
            tags: vec!["api".to_string(), "docs".to_string()],
        },
        PromptDraft {
            title: "Code review".to_string(),
            category: "development".to_string(),
            content: "Review the following {{language}} code for bugs, readability and \
                      performance. Suggest concrete improvements.\n\n{{code}}"
                .to_string(),
            description: "Ask for a structured review of a code snippet.".to_string(),
            tags: vec!["code".to_string(), "review".to_string()],
        },
        PromptDraft {
            title: "Meeting summary".to_string(),
            category: "productivity".to_string(),
            content: "Summarize these meeting notes in five bullet points, then list \
                      action items with owners.\n\n{{notes}}"
                .to_string(),
            description: String::new(),
            tags: vec!["meetings".to_string()],
        },
        PromptDraft {
            title: "Explain like I'm five".to_string(),
            category: String::new(),
            content: "Explain the following concept in simple words a child could \
                      understand, using one everyday analogy."
                .to_string(),
            description: String::new(),
            tags: Vec::new(),
        },
    ]
}
