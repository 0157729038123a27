// src/cli.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::Locale;
use std::io::{self, BufRead, Write};

/// Writes one slug per argument, or one per input line when `args` is empty.
pub fn run<R, W>(
    generator: &dyn SlugGenerator,
    locale: Option<&Locale>,
    args: &[String],
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if args.is_empty() {
        tracing::debug!("reading input from stdin");
        for line in input.lines() {
            let line = line?;
            writeln!(out, "{}", render(generator, locale, &line))?;
        }
    } else {
        for arg in args {
            writeln!(out, "{}", render(generator, locale, arg))?;
        }
    }
    out.flush()
}

fn render(generator: &dyn SlugGenerator, locale: Option<&Locale>, input: &str) -> String {
    match locale {
        Some(locale) => generator.slugify_for_locale(input, locale).into_inner(),
        None => generator.slugify(input).into_inner(),
    }
}
