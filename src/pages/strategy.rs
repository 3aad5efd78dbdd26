use super::*;

/// Interchangeable text formatting algorithm
pub trait TextFormatter {
    /// Returns the line to publish for the given text
    fn format(&self, text: &str) -> String;
}

pub struct CapitalTextFormatter;

impl TextFormatter for CapitalTextFormatter {
    fn format(&self, text: &str) -> String {
        format!("Texto en Mayusculas: {}", text.to_uppercase())
    }
}

pub struct LowerTextFormatter;

impl TextFormatter for LowerTextFormatter {
    fn format(&self, text: &str) -> String {
        format!("Texto en Minusculas: {}", text.to_lowercase())
    }
}

/// Which strategies the strategy page demonstrates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
    Both,
}

/// Publishes text using whatever strategy it was built with
pub struct FormattingContext {
    console: Console,
    formatter: Box<dyn TextFormatter>,
}

impl FormattingContext {
    pub fn new(console: &Console, formatter: Box<dyn TextFormatter>) -> Self {
        Self {
            console: console.clone(),
            formatter,
        }
    }

    pub fn publish_text(&self, text: &str) {
        self.console.print_line(&self.formatter.format(text));
    }
}

pub fn run(ctx: &PageContext) -> Result<(), Box<dyn Error>> {
    if ctx.letter_case != LetterCase::Lower {
        let context = FormattingContext::new(&ctx.console, Box::new(CapitalTextFormatter));
        context.publish_text(
            "este texto sera convertido a Mayusculas a traves de nuestro algoritmo",
        );
    }
    if ctx.letter_case != LetterCase::Upper {
        let context = FormattingContext::new(&ctx.console, Box::new(LowerTextFormatter));
        context.publish_text(
            "este texto sera convertido a Minusculas a traves de nuestro algoritmo",
        );
    }
    Ok(())
}
