//! Station and line name types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A station, identified by its name.
///
/// Two stations are the same station exactly when their names are equal.
/// Station names are free-form text, so non-ASCII names are fine.
///
/// # Examples
///
/// ```
/// use metro_router::domain::Station;
///
/// let kizilay = Station::new("Kızılay");
/// assert_eq!(kizilay.as_str(), "Kızılay");
/// assert_eq!(kizilay, Station::from("Kızılay"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    /// Create a station from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Station(name.into())
    }

    /// Returns the station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Station::new(name)
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Station(name)
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A line (route) of the network, identified by its name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line(String);

impl Line {
    /// Create a line from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Line(name.into())
    }

    /// Returns the line name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Line {
    fn from(name: &str) -> Self {
        Line::new(name)
    }
}

impl Borrow<str> for Line {
    fn borrow(&self) -> &str {
        &self.0
    }
}
