//! Token registry.
//!
//! Every placeholder of a schema is backed by a token: a named slot holding
//! an ordered list of raw values. A slot is either unset or set with the
//! values and the mode of the call that last wrote it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// How a write combines with the values already in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenMode {
    /// Replace the current values
    #[default]
    Overwrite,
    /// Add after the current values
    Append,
    /// Add before the current values
    Prepend,
}

impl From<bool> for TokenMode {
    /// `true` appends, `false` overwrites.
    fn from(append: bool) -> Self {
        if append {
            TokenMode::Append
        } else {
            TokenMode::Overwrite
        }
    }
}

/// State of one token slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum TokenState {
    #[default]
    Unset,
    Set { values: Vec<Value>, mode: TokenMode },
}

impl TokenState {
    /// Apply a write. On an unset slot every mode is a fresh set.
    pub fn write(&mut self, values: Vec<Value>, mode: TokenMode) {
        match self {
            TokenState::Set {
                values: current,
                mode: current_mode,
            } => {
                match mode {
                    TokenMode::Overwrite => *current = values,
                    TokenMode::Append => current.extend(values),
                    TokenMode::Prepend => {
                        current.splice(0..0, values);
                    }
                }
                *current_mode = mode;
            }
            TokenState::Unset => *self = TokenState::Set { values, mode },
        }
    }

    /// The current values; empty when unset.
    pub fn values(&self) -> &[Value] {
        match self {
            TokenState::Set { values, .. } => values,
            TokenState::Unset => &[],
        }
    }

    pub fn mode(&self) -> Option<TokenMode> {
        match self {
            TokenState::Set { mode, .. } => Some(*mode),
            TokenState::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, TokenState::Set { .. })
    }
}

/// Token name to slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenRegistry {
    tokens: BTreeMap<String, TokenState>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the token's values with `[value]`.
    pub fn set(&mut self, name: &str, value: Value) {
        self.write(name, vec![value], TokenMode::Overwrite);
    }

    /// Write `values` into the token with `mode`.
    pub fn write(&mut self, name: &str, values: Vec<Value>, mode: TokenMode) {
        tracing::trace!("token {} <- {:?} ({:?})", name, values, mode);
        self.tokens.entry(name.to_string()).or_default().write(values, mode);
    }

    /// Return the token to the unset state.
    pub fn clear(&mut self, name: &str) {
        self.tokens.remove(name);
    }

    pub fn get(&self, name: &str) -> Option<&TokenState> {
        self.tokens.get(name)
    }

    /// The token's values; empty when it was never set.
    pub fn values(&self, name: &str) -> &[Value] {
        self.tokens.get(name).map(TokenState::values).unwrap_or(&[])
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.tokens.get(name).is_some_and(TokenState::is_set)
    }

    /// Tokens in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenState)> {
        self.tokens.iter().map(|(name, state)| (name.as_str(), state))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
