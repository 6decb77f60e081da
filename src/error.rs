//! Error types for placement strings

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::placement::lexer::Span;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("invalid placement '{spec}' at {span:?}: {reason}")]
    InvalidPlacement {
        spec: String,
        span: Span,
        reason: String,
        expected: Vec<String>,
    },
}

impl PlacementError {
    pub fn invalid(
        spec: impl Into<String>,
        span: Span,
        reason: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::InvalidPlacement {
            spec: spec.into(),
            span,
            reason: reason.into(),
            expected: expected.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Source span of the offending token
    pub fn span(&self) -> &Span {
        match self {
            Self::InvalidPlacement { span, .. } => span,
        }
    }

    /// Tokens that would have been accepted at the error position
    pub fn expected(&self) -> &[String] {
        match self {
            Self::InvalidPlacement { expected, .. } => expected,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, name: &str) -> String {
        let mut buf = Vec::new();
        match self {
            PlacementError::InvalidPlacement {
                spec,
                span,
                reason,
                expected,
            } => {
                let mut report = Report::build(ReportKind::Error, name, span.start)
                    .with_config(Config::default().with_color(false))
                    .with_message(format!("invalid placement: {}", reason))
                    .with_label(
                        Label::new((name, span.clone()))
                            .with_message(reason)
                            .with_color(Color::Red),
                    );
                if !expected.is_empty() {
                    report = report.with_note(format!("Expected: {}", expected.join(", ")));
                }

                let written = report
                    .finish()
                    .write((name, Source::from(spec.as_str())), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_spec_and_reason() {
        let err = PlacementError::invalid("diagonal", 0..8, "unknown axis", &["'top'"]);
        let message = err.to_string();
        assert!(message.contains("diagonal"));
        assert!(message.contains("unknown axis"));
    }

    #[test]
    fn test_format_includes_expected_tokens() {
        let err = PlacementError::invalid(
            "bottom-up",
            7..9,
            "unknown alignment",
            &["'left'", "'center'", "'right'"],
        );
        let report = err.format("placement");
        assert!(report.contains("unknown alignment"));
        assert!(report.contains("Expected: 'left', 'center', 'right'"));
    }

    #[test]
    fn test_accessors() {
        let err = PlacementError::invalid("x", 0..1, "unknown axis", &["'top'"]);
        assert_eq!(err.span(), &(0..1));
        assert_eq!(err.expected(), &["'top'".to_string()]);
    }
}
