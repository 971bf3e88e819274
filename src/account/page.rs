//! Paging and sorting of account listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::account::Account;
use crate::config::Pagination;

/// Field accounts can be ordered by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Name,
    Age,
}

impl SortField {
    /// Column name on `accounts` table.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Age => "age",
        }
    }

    fn compare(&self, a: &Account, b: &Account) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Age => a.age.cmp(&b.age),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn keyword(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One sort key, written `{field},{asc|desc}` on the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub field: SortField,
    pub direction: Direction,
}

impl Order {
    fn compare(&self, a: &Account, b: &Account) -> Ordering {
        match self.direction {
            Direction::Asc => self.field.compare(a, b),
            Direction::Desc => self.field.compare(b, a),
        }
    }
}

/// Malformed `sort` parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("unknown sort field `{0}`")]
    Field(String),
    #[error("unknown sort direction `{0}`")]
    Direction(String),
}

impl FromStr for Order {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, direction)) => (field.trim(), Some(direction.trim())),
            None => (s.trim(), None),
        };

        let field = match field {
            "id" => SortField::Id,
            "name" => SortField::Name,
            "age" => SortField::Age,
            other => return Err(SortError::Field(other.to_owned())),
        };

        let direction = direction.map(str::to_ascii_lowercase);
        let direction = match direction.as_deref() {
            None | Some("") | Some("asc") => Direction::Asc,
            Some("desc") => Direction::Desc,
            Some(other) => return Err(SortError::Direction(other.to_owned())),
        };

        Ok(Order { field, direction })
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        write!(f, "{},{}", self.field.column(), direction)
    }
}

/// Ordered list of sort keys.
///
/// Accounts equal on every key are ordered by ascending id, so an empty
/// [`Sort`] means `id,asc`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn by(field: SortField) -> Self {
        Self::default().and(field)
    }

    /// Append `field` as the next key, ascending.
    pub fn and(mut self, field: SortField) -> Self {
        self.orders.push(Order {
            field,
            direction: Direction::Asc,
        });
        self
    }

    /// Make the last key ascending.
    pub fn ascending(self) -> Self {
        self.direction(Direction::Asc)
    }

    /// Make the last key descending.
    pub fn descending(self) -> Self {
        self.direction(Direction::Desc)
    }

    fn direction(mut self, direction: Direction) -> Self {
        if let Some(order) = self.orders.last_mut() {
            order.direction = direction;
        }
        self
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Whether `id` already takes part in the order.
    pub fn contains_id(&self) -> bool {
        self.orders.iter().any(|order| order.field == SortField::Id)
    }

    /// Order two accounts key by key, then by ascending id.
    pub fn compare(&self, a: &Account, b: &Account) -> Ordering {
        self.orders
            .iter()
            .map(|order| order.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.orders.is_empty() {
            return write!(f, "{}", Order::default());
        }

        for (i, order) in self.orders.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{order}")?;
        }
        Ok(())
    }
}

/// Requested slice of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable {
    page: u32,
    size: u32,
    sort: Sort,
}

impl Default for Pageable {
    fn default() -> Self {
        Self::of(0, crate::config::DEFAULT_PAGE_SIZE, Sort::default())
    }
}

impl Pageable {
    /// `page` is zero-based, `size` is raised to 1 when zero.
    pub fn of(page: u32, size: u32, sort: Sort) -> Self {
        Self {
            page,
            size: size.max(1),
            sort,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Number of records preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// Paging query parameters of `GET /api/accounts`.
///
/// `sort` may be repeated, so it is read apart from these, see
/// [`sort_params`].
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page index, starting at 0.
    #[param(example = 0)]
    pub page: Option<u32>,
    /// Page size. Defaults to 20.
    #[validate(range(min = 1, message = "Size must be at least 1."))]
    #[param(example = 20)]
    pub size: Option<u32>,
}

/// Every `sort` value of a raw query string, in order.
pub fn sort_params(query: &str) -> Vec<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "sort")
        .map(|(_, value)| value.into_owned())
        .collect()
}

impl PageQuery {
    /// Resolve defaults and check parameters.
    ///
    /// Blank `sort` values are ignored. Sizes above `pagination.max_size`
    /// are lowered to it.
    pub fn into_pageable(
        self,
        sort: &[String],
        pagination: &Pagination,
    ) -> Result<Pageable, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let mut orders = Vec::with_capacity(sort.len());
        for value in sort.iter().filter(|value| !value.trim().is_empty()) {
            match value.parse::<Order>() {
                Ok(order) => orders.push(order),
                Err(err) => errors.add(
                    "sort",
                    ValidationError::new("sort")
                        .with_message(err.to_string().into()),
                ),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let size = self
            .size
            .unwrap_or(pagination.default_size)
            .min(pagination.max_size);

        Ok(Pageable::of(
            self.page.unwrap_or_default(),
            size,
            Sort { orders },
        ))
    }
}
