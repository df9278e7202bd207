//! Diagnostic and error reporting for lazynix.
//! lazynix 的诊断和错误报告。
//!
//! Lexer, parser and evaluator failures are all turned into [`Diagnostic`]s
//! and rendered with ariadne.
//! 词法、语法和求值错误都会转换为 [`Diagnostic`]，并使用 ariadne 渲染。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    colored: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, usize::from(diagnostic.span.start))
        .with_config(Config::default().with_color(colored))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let mut ariadne_label =
            AriadneLabel::new((filename, label.span.range())).with_message(&label.message);
        if colored {
            ariadne_label = ariadne_label.with_color(colors.next());
        }
        report = report.with_label(ariadne_label);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> std::io::Result<()> {
    build_report(filename, diagnostic, true).eprint((filename, Source::from(source)))
}

/// Render a diagnostic to an uncolored string.
/// 将诊断信息渲染为不带颜色的字符串。
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> String {
    let mut out = Vec::new();
    if build_report(filename, diagnostic, false)
        .write((filename, Source::from(source)), &mut out)
        .is_err()
    {
        return diagnostic.to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}
