use swc_core::common::{
    errors::{DiagnosticId, HANDLER},
    Span,
};

// -----------------------------------------------------------------------------
// Codes
// -----------------------------------------------------------------------------

pub const UNSUPPORTED_TYPE_ARGUMENT: u32 = 10000;
pub const MISSING_TYPE_ARGUMENT: u32 = 10001;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn unsupported_type_argument(file: &str, member: &str, span: Span) -> Self {
        Self {
            file: file.to_string(),
            category: DiagnosticCategory::Error,
            code: UNSUPPORTED_TYPE_ARGUMENT,
            message: format!("Unsupported usage of type argument for {member}"),
            span,
        }
    }

    pub fn missing_type_argument(file: &str, member: &str, span: Span) -> Self {
        Self {
            file: file.to_string(),
            category: DiagnosticCategory::Warning,
            code: MISSING_TYPE_ARGUMENT,
            message: format!(
                "{member} method is not providing a type argument for transformation to module-name argument"
            ),
            span,
        }
    }

    /// Byte offset of the reported node.
    pub fn start(&self) -> u32 {
        self.span.lo.0
    }

    pub fn length(&self) -> u32 {
        self.span.hi.0.saturating_sub(self.span.lo.0)
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

// -----------------------------------------------------------------------------
// Sinks
// -----------------------------------------------------------------------------

/// Receives diagnostics in visitation order. Supplied by the host.
pub trait DiagnosticSink {
    fn add_diagnostic(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        (**self).add_diagnostic(diagnostic);
    }
}

/// Forwards diagnostics to the SWC error handler installed by the host.
#[derive(Default)]
pub struct HandlerSink;

impl DiagnosticSink for HandlerSink {
    fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if !HANDLER.is_set() {
            tracing::warn!(
                file = %diagnostic.file,
                code = diagnostic.code,
                start = diagnostic.start(),
                length = diagnostic.length(),
                "{}",
                diagnostic.message
            );
            return;
        }
        let code = DiagnosticId::Error(diagnostic.code.to_string());
        HANDLER.with(|handler| match diagnostic.category {
            DiagnosticCategory::Error => handler
                .struct_span_err_with_code(diagnostic.span, &diagnostic.message, code)
                .emit(),
            DiagnosticCategory::Warning => handler
                .struct_span_warn_with_code(diagnostic.span, &diagnostic.message, code)
                .emit(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_core::common::BytePos;

    fn span(lo: u32, hi: u32) -> Span {
        Span::new(BytePos(lo), BytePos(hi))
    }

    #[test]
    fn unsupported_is_an_error_with_fixed_code() {
        let d = Diagnostic::unsupported_type_argument("a.ts", "jest.mock", span(10, 24));
        assert!(d.is_error());
        assert_eq!(d.code, UNSUPPORTED_TYPE_ARGUMENT);
        assert_eq!(d.message, "Unsupported usage of type argument for jest.mock");
        assert_eq!((d.start(), d.length()), (10, 14));
    }

    #[test]
    fn missing_type_argument_is_a_warning() {
        let d = Diagnostic::missing_type_argument("a.ts", "jest.requireActual", span(1, 3));
        assert_eq!(d.category, DiagnosticCategory::Warning);
        assert_eq!(d.code, MISSING_TYPE_ARGUMENT);
        assert!(d.message.starts_with("jest.requireActual method is not providing"));
    }

    #[test]
    fn borrowed_sink_forwards_to_the_owner() {
        fn report<S: DiagnosticSink>(mut sink: S) {
            sink.add_diagnostic(Diagnostic::missing_type_argument("a.ts", "jest.mock", span(1, 2)));
        }
        let mut out: Vec<Diagnostic> = vec![];
        report(&mut out);
        report(&mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn handler_sink_without_handler_does_not_panic() {
        HandlerSink.add_diagnostic(Diagnostic::unsupported_type_argument(
            "a.ts",
            "transformToModuleName",
            span(1, 2),
        ));
    }
}
