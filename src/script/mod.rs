//! Line-oriented command scripts
//!
//! ```text
//! # comment
//! accumulate 0 3 2     (alias: add)
//! overwrite 2 5 10     (alias: set)
//! query 0 7
//! ```
//!
//! Indices are 0-based and inclusive. Values are `i64`.

use std::str::SplitWhitespace;

use thiserror::Error;

use crate::algebra::{RepeatMonoid, Update};
use crate::tree::UpdateTree;
use crate::SegTreeError;

/// Errors raised while parsing a script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// First word is not a known command
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand {
        /// 1-based line number
        line: usize,
        /// Offending word
        command: String,
    },

    /// Command ended early
    #[error("line {line}: `{command}` is missing its {argument}")]
    MissingArgument {
        /// 1-based line number
        line: usize,
        /// Command being parsed
        command: String,
        /// Name of the missing argument
        argument: &'static str,
    },

    /// Argument is not a number
    #[error("line {line}: `{text}` is not a valid {argument}")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// Name of the argument
        argument: &'static str,
        /// Text that failed to parse
        text: String,
    },

    /// Command carries more arguments than it takes
    #[error("line {line}: unexpected trailing `{text}`")]
    TrailingInput {
        /// 1-based line number
        line: usize,
        /// First unexpected word
        text: String,
    },
}

/// One parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply an update to `[left, right]`
    Update {
        /// Left end, inclusive
        left: usize,
        /// Right end, inclusive
        right: usize,
        /// Update to apply
        update: Update<i64>,
    },

    /// Fold `[left, right]`
    Query {
        /// Left end, inclusive
        left: usize,
        /// Right end, inclusive
        right: usize,
    },
}

impl Command {
    /// Run against `tree`; queries return their fold.
    pub fn execute<M>(&self, tree: &mut UpdateTree<M>) -> Result<Option<i64>, SegTreeError>
    where
        M: RepeatMonoid<Item = i64>,
    {
        match *self {
            Command::Update {
                left,
                right,
                update,
            } => {
                tree.update(left, right, update)?;
                Ok(None)
            }
            Command::Query { left, right } => tree.query(left, right).map(Some),
        }
    }
}

/// Parse a whole script, skipping blank lines and `#` comments.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(line, index + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse one line; `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Command>, ScriptError> {
    let content = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    let mut words = content.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    let mut args = Arguments {
        words,
        line: line_no,
        command: name,
    };
    let command = match name {
        "overwrite" | "set" => {
            let (left, right) = args.range()?;
            let value = args.value()?;
            Command::Update {
                left,
                right,
                update: Update::Overwrite(value),
            }
        }
        "accumulate" | "add" => {
            let (left, right) = args.range()?;
            let value = args.value()?;
            Command::Update {
                left,
                right,
                update: Update::Accumulate(value),
            }
        }
        "query" => {
            let (left, right) = args.range()?;
            Command::Query { left, right }
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            })
        }
    };

    args.finish()?;
    Ok(Some(command))
}

struct Arguments<'a> {
    words: SplitWhitespace<'a>,
    line: usize,
    command: &'a str,
}

impl<'a> Arguments<'a> {
    fn next_word(&mut self, argument: &'static str) -> Result<&'a str, ScriptError> {
        self.words.next().ok_or_else(|| ScriptError::MissingArgument {
            line: self.line,
            command: self.command.to_string(),
            argument,
        })
    }

    fn index(&mut self, argument: &'static str) -> Result<usize, ScriptError> {
        let word = self.next_word(argument)?;
        word.parse().map_err(|_| ScriptError::InvalidNumber {
            line: self.line,
            argument,
            text: word.to_string(),
        })
    }

    fn range(&mut self) -> Result<(usize, usize), ScriptError> {
        Ok((self.index("left index")?, self.index("right index")?))
    }

    fn value(&mut self) -> Result<i64, ScriptError> {
        let word = self.next_word("value")?;
        word.parse().map_err(|_| ScriptError::InvalidNumber {
            line: self.line,
            argument: "value",
            text: word.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        match self.words.next() {
            Some(extra) => Err(ScriptError::TrailingInput {
                line: self.line,
                text: extra.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Sum;

    #[test]
    fn test_parses_every_command_and_alias() {
        let script = "\
            # warm-up\n\
            add 0 3 2\n\
            accumulate 1 1 -4\n\
            \n\
            set 2 5 10   # trailing comment\n\
            overwrite 0 0 7\n\
            query 0 7\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Update {
                    left: 0,
                    right: 3,
                    update: Update::Accumulate(2)
                },
                Command::Update {
                    left: 1,
                    right: 1,
                    update: Update::Accumulate(-4)
                },
                Command::Update {
                    left: 2,
                    right: 5,
                    update: Update::Overwrite(10)
                },
                Command::Update {
                    left: 0,
                    right: 0,
                    update: Update::Overwrite(7)
                },
                Command::Query { left: 0, right: 7 },
            ]
        );
    }

    #[test]
    fn test_reports_line_numbers() {
        let err = parse_script("query 0 1\nfrobnicate 1 2\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 2,
                command: "frobnicate".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_malformed_arguments() {
        assert!(matches!(
            parse_line("set 1 2", 4),
            Err(ScriptError::MissingArgument {
                line: 4,
                argument: "value",
                ..
            })
        ));
        assert!(matches!(
            parse_line("query -1 2", 1),
            Err(ScriptError::InvalidNumber {
                argument: "left index",
                ..
            })
        ));
        assert!(matches!(
            parse_line("query 1 2 3", 9),
            Err(ScriptError::TrailingInput { line: 9, .. })
        ));
    }

    #[test]
    fn test_execute_runs_against_tree() {
        let commands = parse_script("add 0 3 2\nquery 0 7\nset 2 5 10\nquery 2 5\n").unwrap();
        let mut tree = UpdateTree::<Sum>::new(8);
        let answers: Vec<_> = commands
            .iter()
            .filter_map(|command| command.execute(&mut tree).unwrap())
            .collect();
        assert_eq!(answers, vec![8, 40]);
    }
}
