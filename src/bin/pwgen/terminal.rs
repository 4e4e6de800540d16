//! Asking questions on the terminal, with some answers supplied up front on the command line.

use std::collections::VecDeque;
use std::fmt;
use std::io;

use dialoguer::theme::ColorfulTheme;
use pwgen::CriteriaInput;

use crate::ProgError;

/// A type of character, as named on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum ClassArg {
    Lowercase,
    Uppercase,
    Numbers,
    Special,
}

impl ClassArg {
    /// In the order the generator asks about them.
    const ALL: [ClassArg; 4] = [
        ClassArg::Lowercase,
        ClassArg::Uppercase,
        ClassArg::Numbers,
        ClassArg::Special,
    ];
}

impl fmt::Display for ClassArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassArg::Lowercase => "lowercase",
            ClassArg::Uppercase => "uppercase",
            ClassArg::Numbers => "numbers",
            ClassArg::Special => "special",
        };
        f.write_str(name)
    }
}

/// Answers from the command line first, then from the terminal.
pub(crate) struct PresetInput {
    length: Option<usize>,
    inclusions: VecDeque<Option<bool>>,
    terminal: Terminal,
}

impl PresetInput {
    pub(crate) fn new(
        length: Option<usize>,
        include: &[ClassArg],
        exclude: &[ClassArg],
    ) -> Result<PresetInput, ProgError> {
        if let Some(class) = include.iter().find(|c| exclude.contains(c)) {
            return Err(ProgError::ConflictingClass(*class));
        }
        let inclusions = ClassArg::ALL
            .iter()
            .map(|class| {
                if include.contains(class) {
                    Some(true)
                } else if exclude.contains(class) {
                    Some(false)
                } else {
                    None
                }
            })
            .collect();
        Ok(PresetInput {
            length,
            inclusions,
            terminal: Terminal::new(),
        })
    }
}

impl CriteriaInput for PresetInput {
    fn prompt(&mut self, question: &str) -> io::Result<String> {
        // A preset length that turns out to be out of range is rejected by the collector like
        // any other answer, and the next attempt goes to the terminal.
        match self.length.take() {
            Some(length) => Ok(length.to_string()),
            None => self.terminal.prompt(question),
        }
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        match self.inclusions.pop_front().flatten() {
            Some(answer) => Ok(answer),
            None => self.terminal.confirm(question),
        }
    }

    fn alert(&mut self, message: &str) {
        self.terminal.alert(message)
    }
}

/// Interactive prompts via `dialoguer`.
struct Terminal {
    theme: ColorfulTheme,
}

impl Terminal {
    fn new() -> Terminal {
        Terminal {
            theme: ColorfulTheme::default(),
        }
    }
}

impl CriteriaInput for Terminal {
    fn prompt(&mut self, question: &str) -> io::Result<String> {
        dialoguer::Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .interact()
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", console::style(message).red().bold());
    }
}
