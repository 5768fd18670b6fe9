//! `--explain`: show how a template is tokenized and resolved

use bracefmt::{
    Argument, FormatDescriptor, FormatError, FormatOptions, IndexCounter, Segment, format,
    parse_spec, resolve, tokenize, try_format,
};
use colored::*;

/// One segment of an explained template
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Literal(String),
    Placeholder {
        /// Placeholder as written
        source: String,
        /// Index it resolved to, if any
        index: Option<i64>,
        /// Kind of the matched argument; `None` when nothing matched
        kind: Option<&'static str>,
        /// Spec after nested placeholders were substituted
        spec: String,
        descriptor: FormatDescriptor,
        rendered: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub steps: Vec<Step>,
    pub diagnostics: Vec<FormatError>,
}

/// Walk the template the same way the formatter does, recording each step
pub fn explain(template: &str, args: &[Argument]) -> Explanation {
    let parsed = tokenize(template);
    let mut diagnostics = parsed.diagnostics.clone();
    let mut counter = IndexCounter::new();
    let mut steps = Vec::with_capacity(parsed.segments.len());

    for segment in &parsed.segments {
        let placeholder = match segment {
            Segment::Literal(s) => {
                steps.push(Step::Literal(s.clone()));
                continue;
            }
            Segment::Placeholder(p) => p,
        };

        let index = match resolve(placeholder, &mut counter) {
            Ok(index) => Some(index),
            Err(err) => {
                diagnostics.push(err);
                None
            }
        };
        // Nested depth is capped by the formatter itself
        let spec = match try_format(&placeholder.spec, args, &FormatOptions::strict()) {
            Ok(spec) => spec,
            Err(err) => {
                diagnostics.push(err);
                format(&placeholder.spec, args)
            }
        };
        let descriptor = parse_spec(&spec);
        let arg = index.and_then(|i| i.position()).and_then(|i| args.get(i));

        if let (Some(index), None) = (index, arg) {
            diagnostics.push(FormatError::MissingArgument {
                index: index.value(),
                available: args.len(),
            });
        }

        let rendered = arg
            .map(|a| bracefmt::Formattable::render(a, &descriptor))
            .unwrap_or_default();

        steps.push(Step::Placeholder {
            source: segment.to_string(),
            index: index.map(|i| i.value()),
            kind: arg.map(Argument::kind),
            spec,
            descriptor,
            rendered,
        });
    }

    Explanation { steps, diagnostics }
}

/// Print an explanation to stdout
pub fn print_explanation(explanation: &Explanation) {
    for step in &explanation.steps {
        match step {
            Step::Literal(text) => println!("{} {:?}", "literal".dimmed(), text),
            Step::Placeholder {
                source,
                index,
                kind,
                spec,
                descriptor,
                rendered,
            } => {
                let target = match (index, kind) {
                    (Some(i), Some(kind)) => format!("argument {} ({})", i, kind).green(),
                    (Some(i), None) => format!("argument {} (missing)", i).yellow(),
                    (None, _) => "invalid index".red(),
                };
                println!("{} -> {}", source.cyan(), target);
                if !spec.is_empty() {
                    println!("    spec {:?} => {:?}", spec, descriptor);
                }
                println!("    renders {:?}", rendered);
            }
        }
    }

    for diag in &explanation.diagnostics {
        println!("{} {}", "warning:".yellow().bold(), diag);
    }
}
