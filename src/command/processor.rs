//! Line-oriented command parsing: sigil dispatch and set-command syntax.

use std::io::BufRead;

use super::command::Command;
use crate::model::{Domain, Model};
use crate::parser::{parse, Notation, ParseError};
use crate::syntax::{Sentence, Term};

const QUERY_SIGIL: char = '?';
const SET_SIGIL: char = '$';

/// Error raised for input that does not form a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCommand {
    pub message: String,
}

impl InvalidCommand {
    fn new(message: impl Into<String>) -> Self {
        InvalidCommand {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InvalidCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InvalidCommand {}

impl From<ParseError> for InvalidCommand {
    fn from(e: ParseError) -> Self {
        InvalidCommand::new(format!("unable to parse input: {}", e))
    }
}

/// Reads one line of input at a time and classifies it by leading sigil.
///
/// `?` starts a query, `$` starts a set command. An empty line or end of
/// input is the termination signal, reported as `Ok(None)`.
pub struct CommandProcessor<R> {
    input: R,
    notation: Notation,
}

impl<R: BufRead> CommandProcessor<R> {
    pub fn new(input: R, notation: Notation) -> Self {
        CommandProcessor { input, notation }
    }

    /// Read and parse the next command; `Ok(None)` means the session is over.
    ///
    /// A failure here never produces a `Command`, so the caller's context
    /// stays untouched.
    pub fn try_parse_next_command(&mut self) -> Result<Option<Command>, InvalidCommand> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| InvalidCommand::new(format!("unable to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Ok(None);
        }

        if let Some(body) = line.strip_prefix(QUERY_SIGIL) {
            Ok(Some(self.parse_query(body.trim())?))
        } else if let Some(body) = line.strip_prefix(SET_SIGIL) {
            Ok(Some(self.parse_set(body.trim())?))
        } else {
            Err(InvalidCommand::new(format!(
                "unrecognized command string: {}",
                line
            )))
        }
    }

    fn parse_query(&self, body: &str) -> Result<Command, InvalidCommand> {
        let sentence = parse(body, self.notation)?;
        Ok(Command::Query(sentence))
    }

    /// Parse a set command body: `;`-separated parts, each either a sentence
    /// or a `{`-framed comma list of term names.
    ///
    /// All brace groups in one command union into a single auxiliary domain.
    /// `with_domain` runs unconditionally, so a set command without a brace
    /// group installs an empty domain, discarding the previous model's.
    fn parse_set(&self, body: &str) -> Result<Command, InvalidCommand> {
        let mut aux_domain = Domain::empty();
        let mut sentences: Vec<Sentence> = Vec::new();
        for part in body.split(';') {
            let part = part.trim();
            if let Some(interior) = part
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                let terms = interior
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(Term::new);
                aux_domain = aux_domain.merge(&Domain::new(terms));
            } else {
                sentences.push(parse(part, self.notation)?);
            }
        }

        let model = Model::from_sentences(sentences).with_domain(aux_domain);
        Ok(Command::Set(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn processor(input: &str) -> CommandProcessor<Cursor<Vec<u8>>> {
        CommandProcessor::new(Cursor::new(input.as_bytes().to_vec()), Notation::Prefix)
    }

    fn next(processor: &mut CommandProcessor<Cursor<Vec<u8>>>) -> Command {
        processor
            .try_parse_next_command()
            .expect("parse failed")
            .expect("unexpected termination")
    }

    fn p_of(name: &str) -> Sentence {
        Sentence::atom("P", vec![Term::new(name)])
    }

    #[test]
    fn test_query_command() {
        let mut proc = processor("?P(a)\n");
        assert_eq!(next(&mut proc), Command::Query(p_of("a")));
    }

    #[test]
    fn test_query_body_is_trimmed() {
        let mut proc = processor("?   P(a)  \n");
        assert_eq!(next(&mut proc), Command::Query(p_of("a")));
    }

    #[test]
    fn test_set_with_sentences_and_domain_group() {
        let mut proc = processor("$P(x);Q(x);{a,b,c}\n");
        let expected = Model::from_sentences(vec![
            p_of("x"),
            Sentence::atom("Q", vec![Term::new("x")]),
        ])
        .with_domain(Domain::new(vec![
            Term::new("a"),
            Term::new("b"),
            Term::new("c"),
        ]));
        assert_eq!(next(&mut proc), Command::Set(expected));
    }

    #[test]
    fn test_set_merges_multiple_domain_groups() {
        let mut proc = processor("${a,b};P(x);{b, c}\n");
        match next(&mut proc) {
            Command::Set(model) => {
                assert_eq!(
                    model.domain(),
                    &Domain::new(vec![Term::new("a"), Term::new("b"), Term::new("c")])
                );
                assert_eq!(model.rules(), &[p_of("x")]);
            }
            other => panic!("expected set command, got {:?}", other),
        }
    }

    #[test]
    fn test_set_without_group_installs_empty_domain() {
        let mut proc = processor("$P(x)\n");
        match next(&mut proc) {
            Command::Set(model) => assert!(model.domain().is_empty()),
            other => panic!("expected set command, got {:?}", other),
        }
    }

    #[test]
    fn test_set_preserves_rule_order() {
        let mut proc = processor("$C;A;B\n");
        match next(&mut proc) {
            Command::Set(model) => {
                let names: Vec<String> = model.rules().iter().map(|r| r.to_string()).collect();
                assert_eq!(names, ["C", "A", "B"]);
            }
            other => panic!("expected set command, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_sigil_is_invalid() {
        let mut proc = processor("P(x)\n");
        let err = proc
            .try_parse_next_command()
            .expect_err("should reject bare sentence");
        assert!(err.message.contains("unrecognized command string"));
    }

    #[test]
    fn test_malformed_sentence_wraps_parser_message() {
        let mut proc = processor("?P(\n");
        let err = proc
            .try_parse_next_command()
            .expect_err("should reject malformed sentence");
        assert!(err.message.starts_with("unable to parse input:"));
    }

    #[test]
    fn test_malformed_set_part_is_invalid() {
        let mut proc = processor("$P(x);;{a}\n");
        assert!(proc.try_parse_next_command().is_err());
    }

    #[test]
    fn test_empty_line_terminates() {
        let mut proc = processor("\n?P(a)\n");
        assert_eq!(proc.try_parse_next_command().expect("ok"), None);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let mut proc = processor("");
        assert_eq!(proc.try_parse_next_command().expect("ok"), None);
    }

    #[test]
    fn test_commands_read_one_per_line() {
        let mut proc = processor("$P(a)\n?P(a)\n");
        assert!(matches!(next(&mut proc), Command::Set(_)));
        assert!(matches!(next(&mut proc), Command::Query(_)));
        assert_eq!(proc.try_parse_next_command().expect("ok"), None);
    }

    #[test]
    fn test_infix_notation_honored() {
        let mut proc =
            CommandProcessor::new(Cursor::new(b"?p -> q\n".to_vec()), Notation::Infix);
        assert_eq!(
            proc.try_parse_next_command().expect("ok"),
            Some(Command::Query(Sentence::implies(
                Sentence::prop("p"),
                Sentence::prop("q")
            )))
        );
    }
}
