//! Prompt-line parsing for the interactive client.
//!
//! A line is expected to carry a selector character and a length, separated
//! by whitespace.  The selector is the first non-whitespace byte of the line;
//! whatever follows it (the rest of that token plus any further tokens)
//! counts as the remaining arguments.  Exactly one argument is the length;
//! zero arguments substitutes the default length; anything else is a local
//! error that re-prompts without contacting the server.

/// Length text substituted when the user types a selector with no length.
pub const DEFAULT_LENGTH_TEXT: &str = "8";

/// Outcome of parsing one prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// A request ready to send to the server.
    Submit {
        /// Raw selector byte, forwarded as typed.
        selector: u8,
        /// Length text, forwarded as typed (the client enforces no bounds).
        length_text: String,
        /// Whether [`DEFAULT_LENGTH_TEXT`] was substituted for a missing length.
        used_default_length: bool,
    },
    /// Empty line or too many tokens: re-prompt locally, the peer is not
    /// contacted.
    Invalid,
}

/// Parses one line of prompt input.
pub fn parse_line(line: &str) -> PromptOutcome {
    let mut tokens = line.split_whitespace();
    let Some(first_token) = tokens.next() else {
        return PromptOutcome::Invalid;
    };

    // The selector is the first byte only; the rest of the first token, if
    // any, is the next argument ("n8" parses the same as "n 8").
    let selector = first_token.as_bytes()[0];
    let mut arguments: Vec<&str> = Vec::new();
    let first_char_len = first_token
        .chars()
        .next()
        .map_or(1, char::len_utf8);
    if first_token.len() > first_char_len {
        arguments.push(&first_token[first_char_len..]);
    }
    arguments.extend(tokens);

    match arguments.as_slice() {
        [] => PromptOutcome::Submit {
            selector,
            length_text: DEFAULT_LENGTH_TEXT.to_string(),
            used_default_length: true,
        },
        [length_text] => PromptOutcome::Submit {
            selector,
            length_text: (*length_text).to_string(),
            used_default_length: false,
        },
        _ => PromptOutcome::Invalid,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
