use dialoguer::{Confirm, theme::ColorfulTheme};

/// Yes/no question asked before an order is closed.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> anyhow::Result<bool>;
}

/// Interactive terminal prompt, defaults to "no".
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> anyhow::Result<bool> {
        let theme = ColorfulTheme::default();
        let confirmed = Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
