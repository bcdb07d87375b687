//! Recursive-descent parser for struct tags.
//!
//! # Security
//!
//! Input length and generic nesting depth are bounded by [`ParserConfig`],
//! so hostile input fails with [`MoveTypeError::InputTooComplex`] instead of
//! exhausting the stack.

use crate::config::ParserConfig;
use crate::error::{MoveTypeError, MoveTypeResult};
use crate::struct_tag::{ModuleId, StructTag};
use crate::tokenizer::{tokenize, Token};
use aptos_hex_string::Address;
use tracing::{debug, trace};

/// Parses struct tag strings under a set of limits.
///
/// # Example
///
/// ```rust
/// use aptos_move_types::{MoveTypeError, ParserConfig, StructTagParser};
///
/// let parser = StructTagParser::new(ParserConfig::default().with_max_nesting_depth(1));
/// assert!(parser.parse("0x1::a::B<0x2::c::D>").is_ok());
/// assert!(matches!(
///     parser.parse("0x1::a::B<0x2::c::D<0x3::e::F>>"),
///     Err(MoveTypeError::InputTooComplex(_))
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StructTagParser {
    config: ParserConfig,
}

impl StructTagParser {
    /// Creates a parser with the given limits.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the limits this parser applies.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a struct tag string.
    ///
    /// Whitespace between tokens is ignored. The address of every module is
    /// normalized.
    ///
    /// # Errors
    ///
    /// Returns [`MoveTypeError::MalformedStructTag`] if the input does not
    /// match `address::module::Name<...>`, or
    /// [`MoveTypeError::InputTooComplex`] if it exceeds the configured limits.
    pub fn parse(&self, input: &str) -> MoveTypeResult<StructTag> {
        let result = self.check_length(input).and_then(|()| {
            let tokens = tokenize(input)?;
            trace!(?tokens, "tokenized struct tag");
            self.parse_tokens(&tokens, 0)
        });
        if let Err(e) = &result {
            debug!(input, error = %e, "failed to parse struct tag");
        }
        result
    }

    /// Parses a module ID string (`address::module_name`).
    ///
    /// # Errors
    ///
    /// Returns [`MoveTypeError::MalformedStructTag`] if the input is not
    /// exactly an address and an identifier separated by `::`.
    pub fn parse_module_id(&self, input: &str) -> MoveTypeResult<ModuleId> {
        self.check_length(input)?;
        let tokens = tokenize(input)?;
        let (module, rest) = parse_module_prefix(&tokens)?;
        if !rest.is_empty() {
            return Err(MoveTypeError::malformed("unexpected tokens after module name"));
        }
        Ok(module)
    }

    fn check_length(&self, input: &str) -> MoveTypeResult<()> {
        if input.len() > self.config.max_input_length {
            return Err(MoveTypeError::InputTooComplex(format!(
                "input too long: {} bytes (max {})",
                input.len(),
                self.config.max_input_length
            )));
        }
        Ok(())
    }

    fn parse_tokens(&self, tokens: &[Token<'_>], depth: usize) -> MoveTypeResult<StructTag> {
        if depth > self.config.max_nesting_depth {
            return Err(MoveTypeError::InputTooComplex(format!(
                "type parameters nested too deep: {depth} levels (max {})",
                self.config.max_nesting_depth
            )));
        }

        let (module, rest) = parse_module_prefix(tokens)?;
        let rest = match rest {
            [Token::Namespace, rest @ ..] => rest,
            _ => return Err(MoveTypeError::malformed("expected namespace")),
        };
        let (name, rest) = match rest {
            [Token::Ident(name), rest @ ..] => (*name, rest),
            _ => return Err(MoveTypeError::malformed("missing name")),
        };

        let type_params = if rest.is_empty() {
            vec![]
        } else {
            self.parse_type_params(rest, depth)?
        };

        Ok(StructTag::new(module, name, type_params))
    }

    /// Parses `<T1, T2, ...>`, splitting only on commas outside nested brackets.
    fn parse_type_params(
        &self,
        tokens: &[Token<'_>],
        depth: usize,
    ) -> MoveTypeResult<Vec<StructTag>> {
        let inner = match tokens {
            [Token::StartGeneric, inner @ .., Token::EndGeneric] => inner,
            [Token::StartGeneric, ..] => return Err(MoveTypeError::malformed("expected `>`")),
            _ => return Err(MoveTypeError::malformed("expected `<`")),
        };
        if inner.is_empty() {
            return Err(MoveTypeError::malformed("empty type parameter list"));
        }

        let mut params = Vec::new();
        let mut nesting = 0usize;
        let mut start = 0;
        for (i, token) in inner.iter().enumerate() {
            match token {
                Token::StartGeneric => nesting += 1,
                Token::EndGeneric => {
                    nesting = nesting
                        .checked_sub(1)
                        .ok_or_else(|| MoveTypeError::malformed("unbalanced `>`"))?;
                }
                Token::Comma if nesting == 0 => {
                    params.push(self.parse_tokens(&inner[start..i], depth + 1)?);
                    start = i + 1;
                }
                _ => {}
            }
        }
        params.push(self.parse_tokens(&inner[start..], depth + 1)?);

        Ok(params)
    }
}

/// Parses `address::module` and returns the remaining tokens.
fn parse_module_prefix<'t, 'a>(
    tokens: &'t [Token<'a>],
) -> MoveTypeResult<(ModuleId, &'t [Token<'a>])> {
    let (address, rest) = match tokens {
        [Token::Ident(address), rest @ ..] => (*address, rest),
        _ => return Err(MoveTypeError::malformed("missing address")),
    };
    let rest = match rest {
        [Token::Namespace, rest @ ..] => rest,
        _ => return Err(MoveTypeError::malformed("expected namespace")),
    };
    let (identifier, rest) = match rest {
        [Token::Ident(identifier), rest @ ..] => (*identifier, rest),
        _ => return Err(MoveTypeError::malformed("missing identifier")),
    };
    Ok((ModuleId::new(Address::new(address), identifier), rest))
}
