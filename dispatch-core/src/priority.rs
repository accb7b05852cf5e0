//! Urgency classes attached to delivery orders.
//!
//! The ranking is explicit: [`Priority::rank`] maps each class onto a fixed
//! integer and every comparison goes through it, so reordering the variants
//! never changes dispatch precedence.
//!
//! # Examples
//! ```
//! use dispatch_core::Priority;
//!
//! assert!(Priority::High < Priority::Low);
//! assert_eq!(Priority::Medium.as_str(), "MEDIUM");
//! assert_eq!(Priority::High.to_string(), "HIGH");
//! ```

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Urgency of an order, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Priority {
    /// Must be dispatched ahead of everything else.
    High,
    /// Standard delivery.
    Medium,
    /// Dispatched once urgent work is placed.
    Low,
}

impl Priority {
    /// Every class, most urgent first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Position of the class in the dispatch order; lower is more urgent.
    ///
    /// # Examples
    /// ```
    /// use dispatch_core::Priority;
    ///
    /// assert_eq!(Priority::High.rank(), 0);
    /// assert_eq!(Priority::Low.rank(), 2);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Return the class as an uppercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(format!("unknown priority '{s}'")),
        }
    }
}
