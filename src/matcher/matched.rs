//! Typed access to the parameters of a matched URL.

use core::cell::OnceCell;
use std::collections::HashMap;

use url::Url;

use crate::error::RouterError;

/// A URL that has been structurally matched to a registered route binding.
///
/// Handed to the binding's route factory for parameter extraction:
///
/// ```no_run
/// # use rudder::{MatchedUrl, RouterError};
/// # fn factory(matched: &MatchedUrl<'_>) -> Result<(), RouterError> {
/// // Path parameters: required, typed access may fail.
/// let category: &str = matched.param("category")?;
/// let id: i64 = matched.param_int("id")?;
///
/// // Query parameters: always optional.
/// let page: Option<i64> = matched.query_int("page");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MatchedUrl<'a> {
    url: &'a Url,
    parameters: HashMap<String, String>,
    // Computed at most once, on first query access.
    query_items: OnceCell<HashMap<String, String>>,
}

impl<'a> MatchedUrl<'a> {
    pub(crate) fn new(url: &'a Url, parameters: HashMap<String, String>) -> Self {
        Self {
            url,
            parameters,
            query_items: OnceCell::new(),
        }
    }

    /// The matched URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        self.url
    }

    /// A path parameter bound by the pattern.
    ///
    /// # Errors
    ///
    /// [`RouterError::MissingRequiredPathParameter`] when the pattern bound
    /// no parameter under `name`.
    pub fn param(&self, name: &str) -> Result<&str, RouterError> {
        self.parameters
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RouterError::MissingRequiredPathParameter(name.to_owned()))
    }

    /// A path parameter converted to a base-10 integer.
    ///
    /// # Errors
    ///
    /// [`RouterError::MissingRequiredPathParameter`] when the parameter is
    /// absent, [`RouterError::ParameterNotAnInteger`] when its value does
    /// not parse.
    pub fn param_int(&self, name: &str) -> Result<i64, RouterError> {
        let value = self.param(name)?;
        value
            .parse()
            .map_err(|_| RouterError::ParameterNotAnInteger {
                name: name.to_owned(),
                value: value.to_owned(),
            })
    }

    /// A query-string parameter. Absence is not an error.
    #[must_use]
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_map().get(name).map(String::as_str)
    }

    /// A query-string parameter as a base-10 integer. Both absence and an
    /// unparsable value yield `None`.
    #[must_use]
    pub fn query_int(&self, name: &str) -> Option<i64> {
        self.query(name).and_then(|value| value.parse().ok())
    }

    fn query_map(&self) -> &HashMap<String, String> {
        self.query_items.get_or_init(|| {
            self.url
                .query_pairs()
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect()
        })
    }
}
