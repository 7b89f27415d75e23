//! Client-side route surface.
//!
//! `/` shows the list, `/create` an empty form, `/edit/{id}` the form for an
//! existing product. A single trailing slash is tolerated when parsing;
//! `Display` always yields the canonical path.

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::types::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Edit(ProductId),
}

impl Route {
    /// The product id carried by the route, if any.
    pub fn product_id(self) -> Option<ProductId> {
        match self {
            Route::Edit(id) => Some(id),
            Route::List | Route::Create => None,
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        match normalized {
            "/" => Ok(Route::List),
            "/create" => Ok(Route::Create),
            _ => {
                let raw_id = normalized
                    .strip_prefix("/edit/")
                    .filter(|rest| !rest.is_empty() && !rest.contains('/'))
                    .ok_or_else(|| RouteError::Unknown(path.to_string()))?;
                raw_id
                    .parse::<ProductId>()
                    .map(Route::Edit)
                    .map_err(|_| RouteError::InvalidId(raw_id.to_string()))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str("/"),
            Route::Create => f.write_str("/create"),
            Route::Edit(id) => write!(f, "/edit/{id}"),
        }
    }
}
