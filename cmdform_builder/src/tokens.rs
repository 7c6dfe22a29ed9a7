use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Split a raw definition into its whitespace separated tokens.
///
/// A piece ending in a backslash is joined to the following piece with a literal space, so `--motd=hello\ world` remains a single token.
/// Runs of spaces collapse, and every token is trimmed.
/// Backslashes anywhere other than the end of a piece carry no meaning.
///
/// ### Example
/// ```
/// # use cmdform_builder as cmdform;
/// use cmdform::tokenize;
///
/// assert_eq!(tokenize(r"greet --motd=hello\ world"), vec!["greet", "--motd=hello world"]);
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::default();
    let mut escaped = false;

    for piece in raw.split(TOKEN_SEPARATOR) {
        if piece.is_empty() {
            continue;
        }

        let (piece, escapes_next) = match piece.strip_suffix(ESCAPE) {
            Some(stripped) => (stripped, true),
            None => (piece, false),
        };

        if escaped {
            if let Some(token) = tokens.last_mut() {
                token.push(TOKEN_SEPARATOR);
                token.push_str(piece);
            }
        } else {
            tokens.push(piece.to_string());
        }

        escaped = escapes_next;
    }

    let tokens: Vec<String> = tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenized '{raw}' into {tokens:?}.");
    }

    tokens
}
