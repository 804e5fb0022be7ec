use crate::theme::dialoguer_theme;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use tabula_core::{version::Prompt, Error};

/// Terminal [`Prompt`] backed by `dialoguer`.
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: dialoguer_theme(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for DialoguerPrompt {
    fn input(&mut self, message: &str) -> tabula_core::Result<String> {
        // dialoguer renders a single prompt line
        let question = match message.rsplit_once('\n') {
            Some((lead, question)) => {
                for line in lead.lines() {
                    println!("  {}", style(line).bold());
                }
                question
            }
            None => message,
        };

        Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::adhoc(format!("failed to read answer: {e}")))
    }

    fn notify(&mut self, message: &str) {
        println!("  {}", style(message).dim());
    }
}
