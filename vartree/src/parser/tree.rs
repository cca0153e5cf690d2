//! Tree parsing
//!
//! A tree is a sequence of level-groups separated by the level delimiter.
//! Each group is a listing of roots, an opener, and a body holding the next
//! depth. Strict openers (`:[`) must be closed; lazy openers (`:`) close
//! themselves at the end of the enclosing group. The body is parsed with the
//! remaining converters and bound under every root.

use super::classify::{classify_token, Classified};
use super::converter::Converter;
use super::error::{GrammarError, GrammarResult};
use super::listing::resolve_listing_at;
use crate::config::{ConfigResult, GrammarConfig};
use crate::containers::{KeyedTree, Node, ValueSet};
use crate::logging::codes;
use crate::utils::{compare_found, earliest};
use crate::variables::Element;
use crate::{log_debug, log_error, log_success};
use std::cmp::Ordering;

// ============================================================================
// PARSER
// ============================================================================

/// Parser bound to one grammar configuration
#[derive(Debug, Clone, Default)]
pub struct TreeParser {
    config: GrammarConfig,
}

impl TreeParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with custom symbols; the configuration is validated first
    pub fn with_config(config: GrammarConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Classify one token as a placeholder or a converted value
    pub fn classify<T>(
        &self,
        token: &str,
        converter: &Converter<T>,
        position: usize,
    ) -> GrammarResult<Classified<T>> {
        classify_token(&self.config, token, converter, position)
    }

    /// Resolve one listing of values, ranges and placeholders
    pub fn resolve_listing<T: Element>(
        &self,
        text: &str,
        converter: &Converter<T>,
        position: usize,
    ) -> GrammarResult<ValueSet<T>> {
        resolve_listing_at(&self.config, text, converter, position)
    }

    /// Parse a tree with one converter per depth.
    ///
    /// A single converter yields a value-set; more yield a keyed-tree whose
    /// leaves are value-sets. `position` is the offset of `text` in the
    /// string reported in errors, normally 0.
    pub fn parse_tree<T: Element>(
        &self,
        text: &str,
        converters: &[Converter<T>],
        position: usize,
    ) -> GrammarResult<Node<T>> {
        match parse_level(&self.config, text, converters, position) {
            Ok(node) => {
                log_success!(codes::success::TREE_PARSED, "Tree parsed",
                    "depth" => converters.len(),
                    "length" => text.len()
                );
                Ok(node)
            }
            Err(error) => {
                log_error!(error.error_code(), &error.cause(),
                    "position" => error.position()
                );
                Err(error)
            }
        }
    }
}

// ============================================================================
// LEVEL GROUPS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opener {
    Strict,
    Lazy,
}

impl Opener {
    fn symbol(self, config: &GrammarConfig) -> &str {
        match self {
            Self::Strict => &config.level_opener,
            Self::Lazy => &config.lazy_opener,
        }
    }
}

/// One `roots<opener>body[<closer>]` group
struct Group<'a> {
    roots: &'a str,
    opener: Opener,
    body: &'a str,
    /// Text after the closer, `None` when the group ran to the end of input
    rest: Option<&'a str>,
}

/// Earliest opener at or after `from`; the strict opener wins ties
fn next_opener(config: &GrammarConfig, text: &str, from: usize) -> Option<(usize, Opener)> {
    let search = |symbol: &str| text[from..].find(symbol).map(|at| at + from);
    let strict = search(config.level_opener.as_str());
    let lazy = search(config.lazy_opener.as_str());

    if compare_found(lazy, strict) == Ordering::Less {
        lazy.map(|at| (at, Opener::Lazy))
    } else {
        strict.map(|at| (at, Opener::Strict))
    }
}

fn pop_lazy(stack: &mut Vec<Opener>) {
    while stack.last() == Some(&Opener::Lazy) {
        stack.pop();
    }
}

fn split_group<'a>(
    config: &GrammarConfig,
    text: &'a str,
    position: usize,
) -> GrammarResult<Group<'a>> {
    let (at, opener) = match next_opener(config, text, 0) {
        Some(found) => found,
        None => {
            let end = earliest([text.find(config.level_closer.as_str()), Some(text.len())]);
            return Err(GrammarError::missing_level(
                position + end.unwrap_or(text.len()),
                &config.level_opener,
                &config.lazy_opener,
            ));
        }
    };

    let roots = &text[..at];
    let tail_start = at + opener.symbol(config).len();
    let tail = &text[tail_start..];
    let closer_len = config.level_closer.len();

    let mut stack = vec![opener];
    let mut cursor = 0;

    loop {
        let closer = tail[cursor..]
            .find(config.level_closer.as_str())
            .map(|found| found + cursor);

        if let Some((found, nested)) = next_opener(config, tail, cursor)
            .filter(|(found, _)| compare_found(Some(*found), closer) == Ordering::Less)
        {
            stack.push(nested);
            cursor = found + nested.symbol(config).len();
            continue;
        }

        pop_lazy(&mut stack);

        match closer {
            Some(found) => {
                if stack.pop().is_none() {
                    return Err(GrammarError::unmatched_closer(
                        position + tail_start + found,
                        &config.level_closer,
                    ));
                }
                if stack.is_empty() {
                    return Ok(Group {
                        roots,
                        opener,
                        body: &tail[..found],
                        rest: Some(&tail[found + closer_len..]),
                    });
                }
                cursor = found + closer_len;
            }
            None => {
                if !stack.is_empty() {
                    return Err(GrammarError::missing_closers(
                        position + text.len(),
                        &config.level_closer,
                        stack.len(),
                    ));
                }
                return Ok(Group {
                    roots,
                    opener,
                    body: tail,
                    rest: None,
                });
            }
        }
    }
}

// ============================================================================
// RECURSION
// ============================================================================

pub(crate) fn parse_level<T: Element>(
    config: &GrammarConfig,
    text: &str,
    converters: &[Converter<T>],
    position: usize,
) -> GrammarResult<Node<T>> {
    let (converter, deeper) = converters
        .split_first()
        .ok_or(GrammarError::NoLevels { position })?;

    if deeper.is_empty() {
        return resolve_listing_at(config, text, converter, position).map(Node::Set);
    }

    let mut tree = KeyedTree::new();
    let mut text = text;
    let mut position = position;

    loop {
        let group = split_group(config, text, position)?;
        let body_position = position + group.roots.len() + group.opener.symbol(config).len();

        log_debug!("Parsing level body",
            "position" => body_position,
            "body" => group.body
        );

        let subtree = parse_level(config, group.body, deeper, body_position)?;
        let roots = resolve_listing_at(config, group.roots, converter, position)?;
        tree.absorb(KeyedTree::bind(roots, &subtree))
            .map_err(|source| GrammarError::container(position, source))?;

        let rest = match group.rest {
            Some(rest) if !rest.is_empty() => rest,
            _ => break,
        };

        let closed_at = body_position + group.body.len() + config.level_closer.len();
        match rest.strip_prefix(config.level_delimiter.as_str()) {
            Some(next) => {
                text = next;
                position = closed_at + config.level_delimiter.len();
            }
            None => {
                return Err(GrammarError::missing_level_delimiter(
                    closed_at,
                    &config.level_delimiter,
                ))
            }
        }
    }

    Ok(Node::Tree(tree))
}
