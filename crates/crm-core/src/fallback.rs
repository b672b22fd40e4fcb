//! Deterministic fallback replies for degraded generation.

/// Template rendered when the provider times out or is unavailable.
///
/// Which template applies depends on the call site: free-form chat gets
/// a short apology, drafting flows get a longer stand-in that echoes the
/// caller's context back so there is always usable text.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackTemplate {
    /// Generic apology-and-retry-later reply.
    ServiceBusy,
    /// Templated draft that carries the original user-supplied context.
    DraftEcho { context: String },
}

impl FallbackTemplate {
    /// Render the fallback reply text.
    pub fn render(&self) -> String {
        match self {
            FallbackTemplate::ServiceBusy => concat!(
                "Hello,\n\n",
                "The AI service is briefly unavailable right now. ",
                "Please try again in a few moments.\n\n",
                "If you need an urgent answer, respond manually.\n",
            )
            .to_string(),
            FallbackTemplate::DraftEcho { context } => format!(
                "Hello,\n\n\
                 Unfortunately the AI service did not answer in time. \
                 Try again in a few moments or start from this excerpt:\n\n\
                 {context}\n\n\
                 Best regards,\n\
                 The CRM team"
            ),
        }
    }
}
